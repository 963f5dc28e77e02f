//! # nestor-core
//!
//! Core types, traits, and utilities for NESTOR eco.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - Common error types
//! - Result type aliases and the service-result pattern
//! - Core traits (Document, Identifiable, Timestamped)
//! - Pagination types
//! - Configuration types

pub mod config;
pub mod error;
pub mod pagination;
pub mod result;
pub mod traits;

pub use error::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
