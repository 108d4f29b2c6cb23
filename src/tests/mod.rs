//! Crate-level test modules for Lanai.
//!
//! Component tests live next to their components; this module holds the
//! shared fixtures plus tests for configuration and error reporting.


pub use test_utils::{create_test_dir, key_strategy, TestFixture};
