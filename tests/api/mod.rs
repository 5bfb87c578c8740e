mod auth_tests;
mod health_tests;
mod validation_tests;
