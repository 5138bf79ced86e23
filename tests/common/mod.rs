//! Common test utilities for solidkit CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working directory and config home
//! - `TestResult`: Captured exit status and output

#![allow(dead_code)]

pub mod env;

pub use env::*;
