// Resume evaluation: prompt composition, model invocation and reply parsing.
// All model calls go through llm_client::ModelClient.

pub mod fence;
pub mod handlers;
pub mod parser;
pub mod pipeline;
pub mod prompts;
pub mod schema;
