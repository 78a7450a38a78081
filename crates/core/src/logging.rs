//! Logging decorator for file services.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{Dispatch, info};
use url::Url;

use filehelper_shared::{FileError, FileInfo, FileReader, FileResult, FileService};

/// Marker logged for an absent error or URL.
const NO_VALUE: &str = "null";

/// Wraps a [`FileService`] and logs every call made through it.
///
/// Each call produces exactly one event on the `filehelper::files` target,
/// sent to the `Dispatch` given at construction rather than the global
/// subscriber. Arguments, results and errors pass through untouched.
///
/// Events are emitted at `INFO`. A build that enables one of tracing's
/// `max_level_*` or `release_max_level_*` features below `info` compiles
/// them out, and the middleware then logs nothing.
pub struct LoggingMiddleware {
    logger: Dispatch,
    next: Arc<dyn FileService>,
}

impl LoggingMiddleware {
    /// Create a new logging middleware in front of `next`.
    #[must_use]
    pub fn new(logger: Dispatch, next: Arc<dyn FileService>) -> Self {
        Self { logger, next }
    }

    fn emit(&self, event: impl FnOnce()) {
        tracing::dispatcher::with_default(&self.logger, event);
    }
}

fn error_field(err: Option<&FileError>) -> String {
    err.map_or_else(|| NO_VALUE.to_string(), ToString::to_string)
}

#[async_trait]
impl FileService for LoggingMiddleware {
    async fn store(&self, name: &str, reader: FileReader<'_>, size: u64) -> FileResult<FileInfo> {
        let begin = Instant::now();
        let result = self.next.store(name, reader, size).await;
        let took = begin.elapsed();

        // Zero values when the store failed.
        let stored = result.as_ref().ok();
        let stored_size = stored.map_or(0, |info| info.size);
        let mime_type = stored.map_or("", |info| info.mime_type.as_str());
        let err = error_field(result.as_ref().err());

        self.emit(|| {
            info!(
                target: "filehelper::files",
                method = %"files.Store",
                fname = %name,
                size = stored_size,
                mimetype = %mime_type,
                err = %err,
                took = ?took,
            );
        });

        result
    }

    async fn delete(&self, name: &str) -> FileResult<()> {
        let begin = Instant::now();
        let result = self.next.delete(name).await;
        let took = begin.elapsed();

        let err = error_field(result.as_ref().err());

        self.emit(|| {
            info!(
                target: "filehelper::files",
                method = %"files.Delete",
                fname = %name,
                err = %err,
                took = ?took,
            );
        });

        result
    }

    async fn public_url(&self, name: &str) -> FileResult<Url> {
        let begin = Instant::now();
        let result = self.next.public_url(name).await;
        let took = begin.elapsed();

        let url = result.as_ref().map_or(NO_VALUE, Url::as_str);
        let err = error_field(result.as_ref().err());

        self.emit(|| {
            info!(
                target: "filehelper::files",
                method = %"files.GetPublicURL",
                fname = %name,
                url = %url,
                err = %err,
                took = ?took,
            );
        });

        result
    }
}
