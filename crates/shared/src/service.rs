//! The capability contract every file backend and decorator implements.

use async_trait::async_trait;
use tokio::io::AsyncRead;
use url::Url;

use crate::error::FileResult;
use crate::types::FileInfo;

/// Byte stream handed to [`FileService::store`].
///
/// Borrowed mutably, so a stream is consumed by exactly one store at a time.
pub type FileReader<'a> = &'a mut (dyn AsyncRead + Send + Unpin);

/// A service that can store files.
///
/// This is the only extension point for new backends. Decorators implement it
/// too, wrapping another `FileService`, so a caller holding an
/// `Arc<dyn FileService>` cannot tell what sits behind it.
#[async_trait]
pub trait FileService: Send + Sync {
    /// Stores `size` bytes read from `reader` under the key `name`.
    ///
    /// `name` is backend-relative and may contain `/` separators. Backends may
    /// normalize it (collapsing repeated `/`, dropping a leading `/`);
    /// [`FileInfo::full_path`] reports the key actually written. Callers must
    /// pass the actual byte count of the stream.
    async fn store(&self, name: &str, reader: FileReader<'_>, size: u64) -> FileResult<FileInfo>;

    /// Deletes the file stored under `name`.
    ///
    /// Deleting a missing key reports whatever the backend reports.
    async fn delete(&self, name: &str) -> FileResult<()>;

    /// Returns a time-limited URL that downloads the file stored under `name`.
    async fn public_url(&self, name: &str) -> FileResult<Url>;
}
