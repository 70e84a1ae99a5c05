//! Common Utilities and Types Library
//!
//! This crate provides shared NR types and numeric helpers used across the SSB tooling.

pub mod types;
pub mod utils;

// Re-export commonly used items
pub use types::*;
pub use utils::*;
