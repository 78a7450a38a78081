//! File service error types.

use thiserror::Error;

/// Result type alias using `FileError`.
pub type FileResult<T> = Result<T, FileError>;

/// Boxed underlying cause carried by contextual errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Broad classes of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while building a service: bad credentials, missing bucket,
    /// unsupported backend type.
    Configuration,
    /// Raised by a store, delete, or URL request on a built service.
    Operation,
}

/// File service errors.
///
/// Contextual variants keep the original cause reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum FileError {
    /// The requested service type has no backend.
    #[error("service '{0}' unsupported: the given service type is unsupported")]
    UnsupportedType(String),

    /// The backend client could not be created.
    #[error("cannot create {service} client: {source}")]
    Client {
        /// Backend that failed to initialise.
        service: &'static str,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },

    /// Checking for the bucket failed.
    #[error("bucket error: {0}")]
    Bucket(#[source] BoxError),

    /// The configured bucket does not exist.
    #[error("bucket {0}: bucket doesn't exist")]
    BucketNotExists(String),

    /// Writing a file failed.
    #[error("failed to store file '{name}': {source}")]
    Store {
        /// Key that was being written.
        name: String,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },

    /// Deleting a file failed.
    #[error("cannot delete '{name}': {source}")]
    Delete {
        /// Key that was being deleted.
        name: String,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },

    /// Signing a public URL failed.
    #[error("unable to get S3 pre-signed URL for file '{name}': {source}")]
    PublicUrl {
        /// Key the URL was requested for.
        name: String,
        /// Underlying cause.
        #[source]
        source: BoxError,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl FileError {
    /// Create an unsupported service type error.
    #[must_use]
    pub fn unsupported_type(typ: impl Into<String>) -> Self {
        Self::UnsupportedType(typ.into())
    }

    /// Create a client construction error.
    pub fn client(service: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Client {
            service,
            source: source.into(),
        }
    }

    /// Create a bucket check error.
    pub fn bucket(source: impl Into<BoxError>) -> Self {
        Self::Bucket(source.into())
    }

    /// Create a missing bucket error.
    #[must_use]
    pub fn bucket_not_exists(bucket: impl Into<String>) -> Self {
        Self::BucketNotExists(bucket.into())
    }

    /// Create a store error.
    pub fn store(name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Store {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a delete error.
    pub fn delete(name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Delete {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a public URL error.
    pub fn public_url(name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::PublicUrl {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Returns the broad class of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedType(_)
            | Self::Client { .. }
            | Self::Bucket(_)
            | Self::BucketNotExists(_)
            | Self::Config(_) => ErrorKind::Configuration,
            Self::Store { .. } | Self::Delete { .. } | Self::PublicUrl { .. } => {
                ErrorKind::Operation
            }
        }
    }

    /// Returns true if no backend exists for the requested service type.
    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType(_))
    }

    /// Returns true if the configured bucket does not exist.
    #[must_use]
    pub const fn is_bucket_not_exists(&self) -> bool {
        matches!(self, Self::BucketNotExists(_))
    }

    /// Returns the underlying cause, if it is of type `E`.
    #[must_use]
    pub fn cause<E: std::error::Error + 'static>(&self) -> Option<&E> {
        std::error::Error::source(self).and_then(|source| source.downcast_ref::<E>())
    }
}
