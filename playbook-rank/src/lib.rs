#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

pub mod error;
pub mod search;
pub mod similarity;

pub use error::RankError;
pub use search::{ScoredMatch, top_k_search};
pub use similarity::{cosine_similarity, dot, norm};
