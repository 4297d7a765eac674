// Industry insights: a per-industry market snapshot, generated on first request
// and regenerated once its refresh date has passed.

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
