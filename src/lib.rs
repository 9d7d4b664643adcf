//! stockroom - A small in-memory product catalog REST service
//!
//! CRUD, search, filtering, pagination, and aggregate statistics over an
//! in-memory product collection, behind a lightweight authentication gate
//! with centralized error-response mapping.

pub mod catalog;
pub mod cli;
pub mod errors;
pub mod http;
pub mod query;
