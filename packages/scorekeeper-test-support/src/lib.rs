//! Test helpers shared by the scorekeeper integration tests.

pub mod logging;
pub mod problem_details;
