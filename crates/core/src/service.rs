//! Backend selection and construction.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{Dispatch, debug};

use filehelper_s3::S3Service;
use filehelper_shared::{Credentials, FileError, FileHelperConfig, FileResult, FileService};

use crate::logging::LoggingMiddleware;

/// Supported storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// S3-compatible object storage.
    S3,
}

impl ServiceType {
    /// Returns the identifier used to request this backend.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::S3 => "s3",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = FileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s3" => Ok(Self::S3),
            other => Err(FileError::unsupported_type(other)),
        }
    }
}

/// Creates a file service of the given type.
///
/// The type string is matched exactly. When `logger` is given, the backend is
/// wrapped in a [`LoggingMiddleware`] writing to it.
///
/// # Errors
///
/// Returns [`FileError::UnsupportedType`] for an unknown type, before any
/// network access. Otherwise propagates the backend's construction error
/// unchanged, e.g. [`FileError::BucketNotExists`].
pub async fn new_service(
    typ: &str,
    creds: Credentials,
    logger: Option<Dispatch>,
) -> FileResult<Arc<dyn FileService>> {
    let service_type: ServiceType = typ.parse()?;

    let backend: Arc<dyn FileService> = match service_type {
        ServiceType::S3 => Arc::new(S3Service::connect(creds).await?),
    };

    debug!(service = %service_type, logged = logger.is_some(), "File service created");

    Ok(decorate(backend, logger))
}

/// Wraps `service` in a [`LoggingMiddleware`] if a logger is given.
#[must_use]
pub fn decorate(service: Arc<dyn FileService>, logger: Option<Dispatch>) -> Arc<dyn FileService> {
    match logger {
        Some(logger) => Arc::new(LoggingMiddleware::new(logger, service)),
        None => service,
    }
}

/// Creates a file service from loaded configuration.
///
/// # Errors
///
/// Same as [`new_service`].
pub async fn new_service_from_config(
    config: &FileHelperConfig,
    logger: Option<Dispatch>,
) -> FileResult<Arc<dyn FileService>> {
    new_service(&config.service, config.credentials.clone(), logger).await
}
