//! Mediary Core Library
//!
//! This crate provides the domain models, media-kind classification, error
//! types, and client configuration shared by the mediary client and CLI.

pub mod classify;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use classify::{bucket_by_kind, classify, classify_record, ClassifiedRecord, MediaKind};
pub use config::ClientConfig;
pub use error::ClientError;
