//! Metadata describing a stored file.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Describes a file stored on a file service.
///
/// `Default` is the zero value: empty strings, size 0 and the Unix epoch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Backend-relative key the file was stored under.
    pub full_path: String,
    /// Bucket holding the file.
    pub bucket: String,
    /// Region of the bucket, as configured.
    pub region: String,
    /// MIME type inferred from the file name. Empty when unknown.
    pub mime_type: String,
    /// Number of bytes the backend accepted.
    pub size: u64,
    /// When the store completed.
    pub created_at: DateTime<Utc>,
}
