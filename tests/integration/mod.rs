//! Integration Tests Module
//!
//! Shared setup for driving the full router over an in-memory database.

pub mod test_support;
