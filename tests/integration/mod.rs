//! Integration tests for the Tally binary
//!
//! These tests verify behavior from an external user's perspective.
