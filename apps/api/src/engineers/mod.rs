// Engineer profiles: the enrichment workflow and its HTTP surface.
// All chat calls go through llm_client; no direct Anthropic API calls here.

pub mod handlers;
pub mod prompts;
pub mod service;

pub use service::EngineerService;
