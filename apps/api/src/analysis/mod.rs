// Contract analysis: validation, prompt assembly, model call, output repair.
// All model calls go through llm_client::TextGenerator.

pub mod analyzer;
pub mod handlers;
pub mod mock;
pub mod models;
pub mod prompts;
pub mod repair;
pub mod validation;
