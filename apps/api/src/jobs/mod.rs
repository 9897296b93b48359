// Job board operations: listing search, posting, applying, and AI description enhancement.
// All LLM calls go through llm_client; no direct HTTP calls here.

pub mod enhance;
pub mod handlers;
pub mod postings;
pub mod search;
