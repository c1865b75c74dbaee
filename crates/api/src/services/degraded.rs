//! Fixed payloads returned when a model reply cannot be parsed as JSON
//!
//! Each mirrors the shape the matching prompt asks for, so clients render
//! them like any other answer.

use ai_tools_common::ExperienceLevel;
use serde_json::{json, Value};

pub fn resume_analysis() -> Value {
    json!({
        "atsScore": "Unable to parse",
        "strengths": ["Analysis completed but format error occurred"],
        "weaknesses": ["Please check the response format"],
        "suggestions": ["Try again or contact support"],
        "keywords": [],
        "missingKeywords": [],
        "sectionAnalysis": {
            "contactInfo": "Unable to analyze",
            "summary": "Unable to analyze",
            "experience": "Unable to analyze",
            "education": "Unable to analyze",
            "skills": "Unable to analyze",
            "formatting": "Unable to analyze"
        },
        "industryRecommendations": ["Analysis completed but there was a formatting issue"],
        "overallAssessment": "Analysis completed but there was a formatting issue with the response."
    })
}

pub fn interview_questions() -> Value {
    json!({
        "technical": [{
            "question": "Tell me about a challenging technical problem you solved recently.",
            "difficulty": "medium",
            "category": "problem solving",
            "expectedAnswer": "Should include problem identification, solution approach, implementation details, and results",
            "followUpQuestions": ["What alternatives did you consider?", "What would you do differently?"]
        }],
        "behavioral": [{
            "question": "Describe a situation where you had to work with a difficult team member on a critical project.",
            "focus": "conflict resolution and teamwork",
            "starMethod": "Situation: Describe the context. Task: What was your role? Action: What did you do? Result: What was the outcome?",
            "redFlags": ["blaming others", "lack of empathy", "no resolution"],
            "greenFlags": ["collaborative approach", "positive outcome", "learning experience"]
        }],
        "projectBased": [{
            "question": "Walk me through the architecture of your most recent project.",
            "basedOn": "resume projects",
            "technicalDepth": "Discuss frontend, backend, database, deployment, and scalability",
            "businessImpact": "How did it benefit users or the business?",
            "challenges": ["Technical challenges", "Team coordination", "Timeline management"]
        }],
        "systemDesign": [{
            "question": "Design a scalable web application that can handle 1 million users.",
            "scale": "1M users, global distribution",
            "constraints": ["Budget limitations", "Time to market", "Technical team size"],
            "components": ["Load balancer", "Application servers", "Database", "CDN", "Caching"],
            "tradeoffs": ["Consistency vs Availability", "Performance vs Cost", "Simplicity vs Scalability"]
        }],
        "coding": [{
            "question": "Implement a function to find the longest palindromic substring in a string.",
            "difficulty": "medium",
            "language": "JavaScript",
            "approach": "Dynamic programming or expand around center",
            "edgeCases": ["Empty string", "Single character", "All same characters"],
            "optimization": "Time complexity optimization from O(n³) to O(n²)"
        }],
        "tips": [{
            "category": "Technical Preparation",
            "tip": "Review the specific technologies mentioned in your resume thoroughly",
            "reasoning": "Interviewers will dive deep into technologies you claim to know"
        }],
        "redFlags": [{
            "category": "Technical Knowledge",
            "warning": "Unable to explain basic concepts from their resume",
            "why": "Indicates lack of understanding or exaggeration of skills"
        }],
        "preparation": [{
            "area": "System Design",
            "suggestion": "Practice designing scalable systems on a whiteboard",
            "resources": ["System Design Primer", "Grokking the System Design Interview"]
        }]
    })
}

pub fn code_review() -> Value {
    json!({
        "overallScore": "Unable to parse",
        "strengths": ["Code review completed but format error occurred"],
        "issues": [],
        "securityConcerns": [],
        "performanceTips": [],
        "bestPractices": [],
        "overallFeedback": "Code review completed but there was a formatting issue with the response."
    })
}

pub fn algorithm_explanation(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Algorithm explanation completed but format error occurred",
        "howItWorks": "Please try again or contact support",
        "pseudocode": "",
        "timeComplexity": "Unable to parse",
        "spaceComplexity": "Unable to parse",
        "useCases": [],
        "advantages": [],
        "disadvantages": [],
        "example": "Explanation completed but there was a formatting issue with the response."
    })
}

pub fn roadmap(domain: &str, level: ExperienceLevel) -> Value {
    json!({
        "domain": domain,
        "experienceLevel": level,
        "estimatedDuration": "Unable to parse",
        "overview": "Roadmap generation completed but format error occurred",
        "prerequisites": ["Please try again or contact support"],
        "phases": [],
        "advancedTopics": [],
        "careerPaths": [],
        "tips": [],
        "tools": [],
        "communities": []
    })
}

/// Echoes the original resume unchanged.
pub fn ats_resume(original: &str) -> Value {
    json!({
        "improvedResume": original,
        "changesMade": [{
            "section": "General",
            "originalText": "Resume optimization failed",
            "improvedText": "Please try again or contact support",
            "reason": "Format parsing error occurred"
        }],
        "atsOptimization": {
            "keywordDensity": "Unable to analyze",
            "formattingScore": "0",
            "readabilityScore": "0",
            "improvements": ["Please try again or contact support"],
            "estimatedATSScore": "0"
        },
        "summary": "Resume optimization completed but there was a formatting issue with the response."
    })
}
