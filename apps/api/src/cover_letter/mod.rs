// Cover letters: generation (model or fallback template), listing, lookup and deletion.
// All model calls go through llm_client.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
