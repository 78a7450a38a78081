//! Connection parameters for a storage backend.

use std::fmt;

use serde::Deserialize;

/// Everything a backend needs to reach its bucket.
///
/// A backend takes ownership of the credentials it was built from and never
/// mutates them afterwards.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Host (and optional port) of the object-storage endpoint, e.g. `play.min.io:9000`.
    pub endpoint: String,
    /// Access key ID.
    pub client_id: String,
    /// Secret access key.
    pub client_secret: String,
    /// Whether to talk to the endpoint over TLS.
    #[serde(default = "default_use_ssl")]
    pub use_ssl: bool,
    /// Bucket (or container) holding the files.
    pub bucket: String,
    /// Region reported back in `FileInfo`. May be empty.
    #[serde(default)]
    pub region: String,
}

fn default_use_ssl() -> bool {
    true
}

impl Credentials {
    /// Creates a new set of credentials.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        use_ssl: bool,
        bucket: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            use_ssl,
            bucket: bucket.into(),
            region: region.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            use_ssl: default_use_ssl(),
            bucket: String::new(),
            region: String::new(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("use_ssl", &self.use_ssl)
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .finish()
    }
}
