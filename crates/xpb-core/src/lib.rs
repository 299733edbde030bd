pub mod addon;
pub mod checksum;
pub mod config;
pub mod fetch;
pub mod logging;
pub mod output;
pub mod pkgbuild;

// Canned API server and fixtures, shared with the CLI crate's tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
