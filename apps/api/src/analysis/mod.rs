// Resume analysis: four prompt-driven flows plus reply post-processing.
// All model calls go through llm_client::TextGenerator.

pub mod comparison;
pub mod format;
pub mod handlers;
pub mod highlights;
pub mod prompts;
pub mod rating;
pub mod sections;
pub mod summary;
