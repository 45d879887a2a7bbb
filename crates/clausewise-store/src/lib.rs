//! Storage layer: a bounded in-memory store for analysis and comparison results.

mod cache;
mod error;
mod keys;

pub use cache::{DEFAULT_CAPACITY, ResultCache};
pub use error::StoreError;
pub use keys::{KeyStrategy, SequentialKeys, UuidKeys};
