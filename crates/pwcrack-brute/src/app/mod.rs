//! Application layer - Use case implementations
//!
//! This module drives the domain layer to implement the search use case.

pub mod searcher;
