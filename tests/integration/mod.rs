//! Integration tests for itemvault-rs
//!
//! These tests verify the interaction between multiple components
//! against a real in-memory database, without mocking.

pub mod api_tests;
