//! Validation errors raised before any request reaches the endpoint.

use thiserror::Error;

/// S3 client-side errors.
///
/// These end up as the cause of a [`filehelper_shared::FileError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum S3Error {
    /// Endpoint is empty or not a valid host.
    #[error("Endpoint: {0} does not follow ip address or domain name standards.")]
    InvalidEndpoint(String),

    /// Bucket name is empty.
    #[error("Bucket name cannot be empty")]
    EmptyBucketName,

    /// Object key is empty.
    #[error("Object name cannot be empty")]
    EmptyObjectName,

    /// Upload exceeds the largest object a single PUT may create.
    #[error(
        "Your proposed upload size '{size}' exceeds the maximum allowed object size '{max}' for single PUT operation."
    )]
    EntityTooLarge {
        /// Requested size.
        size: u64,
        /// Maximum single PUT size.
        max: u64,
    },

    /// The reader ended before `size` bytes were read.
    #[error("Data read '{read}' is not equal to the size '{size}' of the input Reader.")]
    ShortRead {
        /// Bytes actually read.
        read: u64,
        /// Bytes the caller announced.
        size: u64,
    },
}
