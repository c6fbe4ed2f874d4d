//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing: unified
//! logging initialization, Problem Details response assertions, and unique
//! test data helpers. It deliberately does not depend on the backend crate
//! so it can assert the wire contract from the outside.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
