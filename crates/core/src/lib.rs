//! File service construction and decoration for filehelper.
//!
//! Callers ask [`new_service`] for a backend by type name and get back one
//! `Arc<dyn FileService>`. Whether a [`LoggingMiddleware`] sits in front of the
//! backend is decided once, at construction, by passing a logger or not.
//!
//! ```text
//! caller ──► new_service("s3", creds, logger)
//!                 │
//!                 ├─► S3Service::connect(creds)      (bucket must exist)
//!                 └─► LoggingMiddleware { logger, next }   (only if logger)
//! ```
//!
//! # Modules
//!
//! - `logging` - Structured logging decorator
//! - `service` - Backend selection and construction

pub mod logging;
pub mod service;

#[cfg(test)]
mod testing;

pub use logging::LoggingMiddleware;
pub use service::{ServiceType, decorate, new_service, new_service_from_config};

pub use filehelper_s3::{S3Error, S3Service};
pub use filehelper_shared::{
    Credentials, ErrorKind, FileError, FileHelperConfig, FileInfo, FileReader, FileResult,
    FileService,
};
