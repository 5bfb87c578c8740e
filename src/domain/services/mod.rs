//! # Domain Services
//!
//! Domain services encapsulate business rules that don't naturally
//! belong to a single entity.
//!
//! ## Services
//!
//! - **Ownership**: resolve an entity's owning user and authorize the caller
//! - **StatusPolicy**: which application status changes are allowed

mod ownership;
mod status_policy;

pub use ownership::*;
pub use status_policy::*;
