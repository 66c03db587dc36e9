// Workload adjustment: prompt building, model call, and parsing of the free-text answer.
// All model calls go through llm_client; handlers only see the TextGenerator trait.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod sections;
