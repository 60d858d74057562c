//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and types without I/O dependencies.

pub mod candidate;
pub mod digest;
pub mod report;
pub mod spec;
