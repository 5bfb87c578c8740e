//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod health;
pub mod auth;
pub mod job_offer;
pub mod aspirant_profile;
pub mod company_profile;
pub mod application;
