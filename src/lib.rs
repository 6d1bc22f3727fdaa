//! Macrogen library exports for testing.
//!
//! This module exposes internal components for integration testing.

pub mod common;
pub mod config;
pub mod macros;
