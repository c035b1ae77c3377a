//! Document library: listing, single-document lookup and the client filter.

pub mod filter;
pub mod handlers;

pub use filter::{filter_documents, FilterCriteria};
