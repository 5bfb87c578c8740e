//! Shared Utilities
//!
//! Error types, request validation helpers and ID generation used by every layer.

pub mod error;
pub mod snowflake;
pub mod validation;
