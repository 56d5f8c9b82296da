//! # Trait Compatibility and Utility

pub mod traits;
