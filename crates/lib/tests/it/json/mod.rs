//! JSON integration tests
//!
//! This module tests JSON text parsing and rendering, conversion to and from
//! `serde_json::Value`, and embedding variants in serde data structures.

mod serialization_tests;
