//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! Manual mocks keep the async trait surface explicit and let each test
//! decide exactly what the store returns.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
