//! Data models for Circonus API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod alerts;
pub mod common;
pub mod search;

pub use alerts::Alert;
pub use common::ApiErrorBody;
pub use search::{SearchFilter, SearchQuery};
