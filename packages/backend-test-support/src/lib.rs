//! Shared helpers for backend unit and integration tests.

pub mod logging;
pub mod problem_details;
