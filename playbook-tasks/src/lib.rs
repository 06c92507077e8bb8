#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod classify;
pub mod error;
pub mod search;
pub mod summarize;

pub use classify::classify;
pub use error::TaskError;
pub use search::{SearchHit, semantic_search};
pub use summarize::summarize;
