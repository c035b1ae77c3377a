//! AI search: adapts `/generate` payloads into search results and
//! per-document summaries.

pub mod handlers;
pub mod prompts;
pub mod results;

pub use results::build_search_result;
