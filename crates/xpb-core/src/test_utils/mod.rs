//! Test utilities: a canned in-process API server and addon JSON fixtures.
//!
//! Available to unit tests and, through the `test-utils` feature, to other
//! crates' integration tests.

pub mod api_server;
pub mod fixtures;
