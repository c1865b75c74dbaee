//! Static tool catalogue and dashboard highlights

use once_cell::sync::Lazy;

use crate::types::{ToolHighlight, ToolId, ToolInfo};

fn tool(
    id: ToolId,
    name: &str,
    description: &str,
    icon: &str,
    category: &str,
    features: &[&str],
) -> ToolInfo {
    ToolInfo {
        id,
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn highlight(
    tool: ToolId,
    title: &str,
    description: &str,
    icon: &str,
    color: &str,
) -> ToolHighlight {
    ToolHighlight {
        tool,
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

pub static TOOLS: Lazy<Vec<ToolInfo>> = Lazy::new(|| {
    vec![
        tool(
            ToolId::CodeGenerator,
            "Code Generator",
            "Generate clean, efficient code based on problem statements",
            "💻",
            "Development",
            &["Multiple languages", "Error handling", "Best practices"],
        ),
        tool(
            ToolId::ResumeAnalyzer,
            "Resume Analyzer & Optimizer",
            "Analyze resumes for ATS optimization and generate improved versions",
            "📄",
            "Career",
            &[
                "ATS scoring",
                "Keyword analysis",
                "Optimized resume generation",
                "Download functionality",
            ],
        ),
        tool(
            ToolId::InterviewQuestions,
            "Interview Questions",
            "Generate tailored interview questions based on your resume",
            "❓",
            "Career",
            &["Technical questions", "Behavioral questions", "Project-based questions"],
        ),
        tool(
            ToolId::CodeReviewer,
            "Code Reviewer",
            "Get detailed feedback and improvements for your code",
            "🔍",
            "Development",
            &["Security analysis", "Performance tips", "Best practices"],
        ),
        tool(
            ToolId::ComplexityAnalyzer,
            "Time Complexity Analyzer",
            "Analyze and explain the time and space complexity of a given code",
            "⏱️",
            "Development",
            &[
                "Time complexity analysis",
                "Space complexity analysis",
                "Optimization suggestions",
                "Performance insights",
            ],
        ),
        tool(
            ToolId::AlgorithmExplainer,
            "Algorithm Explainer",
            "Get detailed explanations of algorithms and data structures",
            "🧮",
            "Education",
            &["Step-by-step explanation", "Complexity analysis", "Use cases"],
        ),
        tool(
            ToolId::RoadmapGenerator,
            "Roadmap Generator",
            "Generate personalized learning roadmaps for tech domains",
            "🗺️",
            "Education",
            &["Structured learning paths", "Project-based learning", "Career guidance"],
        ),
    ]
});

pub static HIGHLIGHTS: Lazy<Vec<ToolHighlight>> = Lazy::new(|| {
    vec![
        highlight(
            ToolId::CodeGenerator,
            "Generate Code Instantly",
            "Describe your problem and get production-ready code in multiple languages",
            "💻",
            "blue",
        ),
        highlight(
            ToolId::ResumeAnalyzer,
            "Optimize Your Resume",
            "Get ATS-friendly resume analysis and generate an optimized version that passes screening",
            "📄",
            "green",
        ),
        highlight(
            ToolId::InterviewQuestions,
            "Prepare for Interviews",
            "Get personalized interview questions based on your experience",
            "❓",
            "purple",
        ),
        highlight(
            ToolId::CodeReviewer,
            "Review Your Code",
            "Get expert feedback on your code with security and performance tips",
            "🔍",
            "orange",
        ),
        highlight(
            ToolId::ComplexityAnalyzer,
            "Analyze Code Complexity",
            "Understand the time and space complexity of your algorithms with detailed analysis",
            "⏱️",
            "red",
        ),
        highlight(
            ToolId::AlgorithmExplainer,
            "Learn Algorithms",
            "Understand complex algorithms with step-by-step explanations",
            "🧮",
            "indigo",
        ),
        highlight(
            ToolId::RoadmapGenerator,
            "Plan Your Learning",
            "Generate personalized learning roadmaps for any tech domain",
            "🗺️",
            "yellow",
        ),
    ]
});

/// Pick one highlight uniformly at random.
pub fn random_highlight() -> Option<&'static ToolHighlight> {
    use rand::seq::SliceRandom;
    HIGHLIGHTS.choose(&mut rand::thread_rng())
}
