// Interview preparation: multiple-choice quiz generation, grading with an
// improvement tip, and the caller's assessment history.

pub mod assessments;
pub mod fallback;
pub mod handlers;
pub mod prompts;
pub mod quiz;
pub mod scoring;
