//! Error handling for asset decoding operations
//!
//! This module re-exports the error types used throughout the crate.
//! The taxonomy itself lives in [`crate::common`] and uses thiserror for
//! ergonomic, context-carrying error variants.

pub use crate::common::AssetError;
pub use crate::common::Result;
