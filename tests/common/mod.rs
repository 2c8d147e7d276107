//! Common test utilities for installer CLI and scenario tests.
//!
//! This module provides:
//! - `TestProject`: an isolated Laravel project in a temp directory, with
//!   stub `php` and `composer` executables that record their invocations
//! - Fixtures: project file contents as shipped by a fresh Laravel app

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
