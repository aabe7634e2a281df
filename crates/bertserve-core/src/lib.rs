//! bertserve Core
//!
//! Types shared across the bertserve crates.
//!
//! This crate provides:
//! - The `Label` returned by every classifier
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::Label;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::Label;
}
