//! Prompt templates, one per tool

use ai_tools_common::{ExperienceLevel, ExplanationDepth, ProgrammingLanguage};
use serde_json::Value;

const JSON_ONLY: &str = "Return only the JSON response without any additional text.";

pub fn code_generation(problem: &str, language: ProgrammingLanguage) -> String {
    format!(
        "You are an expert {language} developer. Generate clean, efficient code for the following problem:\n\n\
         Problem: {problem}\n\n\
         Requirements:\n\
         1. Use {language} programming language\n\
         2. Include proper error handling\n\
         3. Follow best practices and make the code production-ready\n\
         4. Do NOT include comments, documentation, example usage, tests or explanatory text\n\n\
         Return ONLY the pure, executable code."
    )
}

pub fn resume_analysis(resume: &str) -> String {
    format!(
        r#"You are an expert ATS (Applicant Tracking System) analyst and career advisor. Analyze the following resume.

Resume Content:
{resume}

Respond in this JSON format:
{{
  "atsScore": "score out of 100",
  "strengths": ["list of strengths"],
  "weaknesses": ["list of areas for improvement"],
  "suggestions": ["specific suggestions for improvement"],
  "keywords": ["relevant keywords found"],
  "missingKeywords": ["important keywords that are missing"],
  "sectionAnalysis": {{
    "contactInfo": "assessment", "summary": "assessment", "experience": "assessment",
    "education": "assessment", "skills": "assessment", "formatting": "assessment"
  }},
  "industryRecommendations": ["industry-specific recommendations"],
  "overallAssessment": "brief overall assessment"
}}

Be specific and actionable. {JSON_ONLY}"#
    )
}

pub fn interview_questions(resume: &str, job_title: &str) -> String {
    format!(
        r#"You are an expert technical interviewer. Based on the following resume, generate interview questions for a {job_title} position.

Resume Content:
{resume}

Respond in this JSON format:
{{
  "technical": [{{"question": "", "difficulty": "easy/medium/hard", "category": "", "expectedAnswer": "", "followUpQuestions": [""]}}],
  "behavioral": [{{"question": "", "focus": "", "starMethod": "", "redFlags": [""], "greenFlags": [""]}}],
  "projectBased": [{{"question": "", "basedOn": "", "technicalDepth": "", "businessImpact": "", "challenges": [""]}}],
  "systemDesign": [{{"question": "", "scale": "", "constraints": [""], "components": [""], "tradeoffs": [""]}}],
  "coding": [{{"question": "", "difficulty": "", "language": "", "approach": "", "edgeCases": [""], "optimization": ""}}],
  "tips": [{{"category": "", "tip": "", "reasoning": ""}}],
  "redFlags": [{{"category": "", "warning": "", "why": ""}}],
  "preparation": [{{"area": "", "suggestion": "", "resources": [""]}}]
}}

Questions must be specific to the technologies and projects in the resume and progress in difficulty. {JSON_ONLY}"#
    )
}

pub fn code_review(code: &str, language: ProgrammingLanguage) -> String {
    format!(
        r#"You are an expert code reviewer. Review the following {language} code.

Code:
{code}

Respond in this JSON format:
{{
  "overallScore": "score out of 10",
  "strengths": ["good practices found"],
  "issues": [{{"type": "error/warning/suggestion", "line": "line number or general", "description": "", "suggestion": ""}}],
  "securityConcerns": [""],
  "performanceTips": [""],
  "bestPractices": [""],
  "overallFeedback": "summary of the review"
}}

Focus on quality, security, performance and error handling. {JSON_ONLY}"#
    )
}

pub fn algorithm_explanation(name: &str, depth: ExplanationDepth) -> String {
    format!(
        r#"You are an expert computer science educator. Explain the {name} algorithm in a {depth} manner.

Respond in this JSON format:
{{
  "name": "algorithm name",
  "description": "brief description",
  "howItWorks": "step-by-step explanation",
  "pseudocode": "pseudocode representation",
  "timeComplexity": "time complexity analysis",
  "spaceComplexity": "space complexity analysis",
  "useCases": [""],
  "advantages": [""],
  "disadvantages": [""],
  "example": "simple example with input/output"
}}

{JSON_ONLY}"#
    )
}

pub fn roadmap(domain: &str, level: ExperienceLevel, focus_areas: &[String]) -> String {
    let focus = if focus_areas.is_empty() {
        String::new()
    } else {
        format!("Focus areas: {}", focus_areas.join(", "))
    };
    format!(
        r#"You are an expert tech educator and career advisor. Create a learning roadmap for {domain} at {level} level. {focus}

Respond in this JSON format:
{{
  "domain": "{domain}",
  "experienceLevel": "{level}",
  "estimatedDuration": "",
  "overview": "",
  "prerequisites": [""],
  "phases": [{{"phase": "Phase 1: Foundation", "duration": "", "description": "",
              "topics": [{{"topic": "", "description": "", "resources": [""], "projects": [""], "milestone": ""}}]}}],
  "advancedTopics": [""],
  "careerPaths": [""],
  "tips": [""],
  "tools": [""],
  "communities": [""]
}}

Make it progressive, practical and suited to the experience level. {JSON_ONLY}"#
    )
}

pub fn ats_resume(original: &str, analysis: &Value, target_job_title: &str) -> String {
    let analysis = serde_json::to_string_pretty(analysis).unwrap_or_else(|_| analysis.to_string());
    format!(
        r#"You are an ATS optimization specialist. Improve the resume below while preserving its exact format, section order, headers and layout. Only edit the text content.

Original Resume:
{original}

Analysis Feedback:
{analysis}

Target Job Title: {target_job_title}

Respond in this JSON format:
{{
  "improvedResume": "the complete improved resume",
  "changesMade": [{{"section": "", "originalText": "", "improvedText": "", "reason": ""}}],
  "atsOptimization": {{
    "keywordDensity": "", "formattingScore": "score out of 100", "readabilityScore": "score out of 100",
    "improvements": [""], "estimatedATSScore": ""
  }},
  "summary": "what was improved"
}}

Use strong action verbs, add missing keywords and quantify achievements. {JSON_ONLY}"#
    )
}

pub fn complexity_analysis(code: &str, language: ProgrammingLanguage) -> String {
    format!(
        r#"You are an expert in algorithm analysis. Analyze the time and space complexity of the following {language} code.

Code to analyze:
{code}

Respond in this JSON format:
{{
  "overview": "what the code does",
  "timeComplexity": {{"bestCase": "", "averageCase": "", "worstCase": "", "detailedAnalysis": "", "factors": [""], "examples": [""]}},
  "spaceComplexity": {{"auxiliary": "", "total": "", "detailedAnalysis": "", "factors": [""], "memoryUsage": ""}},
  "algorithmAnalysis": {{"algorithmType": "", "efficiency": "excellent/good/fair/poor", "optimizationOpportunities": [""], "tradeoffs": [""], "comparison": ""}},
  "codeBreakdown": [{{"line": "", "operation": "", "complexity": "", "explanation": ""}}],
  "optimizationSuggestions": [{{"suggestion": "", "impact": "", "implementation": "", "tradeoff": ""}}],
  "realWorldImplications": {{"scalability": "", "performance": "", "useCases": [""], "limitations": [""]}},
  "visualization": {{"complexityGraph": "", "comparisonChart": ""}}
}}

Consider all loops, nested structures and recursive calls. {JSON_ONLY}"#
    )
}
