//! Index structures.
//!
//! - [`btree`] - In-memory B-tree over an append-only node arena

pub mod btree;
