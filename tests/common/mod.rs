//! Common test utilities for Shotpack CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Helpers to seed the demo tables and run the `shotpack` binary

#![allow(dead_code)]

pub mod env;

pub use env::*;
