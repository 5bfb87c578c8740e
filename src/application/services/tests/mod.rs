//! Service tests against the in-memory store.

mod common;

mod profile_tests;
