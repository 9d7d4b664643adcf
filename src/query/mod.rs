//! # Query Pipeline
//!
//! Parses listing query parameters into a structured query and applies
//! search, filter, sort, and pagination stages over a store snapshot.

pub mod params;
pub mod pipeline;

pub use params::{ListQuery, SortKey, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use pipeline::{run, FilterEcho, Pagination, QueryOutcome};
