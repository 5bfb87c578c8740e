//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! ## Value Objects
//!
//! - **UserRole**: aspirant or company, fixed at registration

mod role;

pub use role::*;
