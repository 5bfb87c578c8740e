//! # Domain Layer
//!
//! The domain layer contains the core business rules of the recruitment platform.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, profiles, JobOffer, Application)
//! - **value_objects**: Immutable value types (UserRole)
//! - **services**: Ownership authorization and status transition rules
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
