//! Shared types, errors, and configuration for filehelper.
//!
//! This crate provides the pieces every backend and decorator agrees on:
//! - `Credentials` and `FileInfo` value types
//! - The `FileService` capability contract
//! - The `FileError` taxonomy, including its sentinel variants
//! - Configuration loading

pub mod config;
pub mod error;
pub mod service;
pub mod types;

pub use config::FileHelperConfig;
pub use error::{BoxError, ErrorKind, FileError, FileResult};
pub use service::{FileReader, FileService};
pub use types::{Credentials, FileInfo};
