//! Integration test utilities for the LendHub API
//!
//! Black-box helpers that boot the full application against the PostgreSQL
//! and Redis instances named in the environment and talk to it over HTTP.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
