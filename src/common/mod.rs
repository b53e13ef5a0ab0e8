//! Common types shared across the index.
//!
//! - Configuration constants
//! - Error types
//! - Node handles

pub mod config;
pub mod error;
mod node_id;

pub use error::{Error, Result};
pub use node_id::NodeId;

/// The key type stored by the index.
pub type Key = i64;
