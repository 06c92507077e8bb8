#![doc = include_str!("../README.md")]

pub mod client;
pub(crate) mod chat;
pub(crate) mod embeddings;
pub(crate) mod error;
pub(crate) mod types;

pub use client::{AzureOpenAi, ConfigError};

// Re-export playbook-types for convenience
pub use playbook_types::{EmbeddingError, EmbeddingProvider, Provider, ProviderError};
