pub mod ai_tools;
pub mod code_cleanup;
pub mod degraded;
pub mod prompts;

pub use ai_tools::{AiToolsService, ComplexityOutcome};
