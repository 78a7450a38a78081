//! Test doubles shared by the core unit tests.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::io::AsyncReadExt;
use tracing::{Dispatch, Level};
use url::Url;

use filehelper_shared::{FileError, FileInfo, FileReader, FileResult, FileService};

/// In-memory `FileService` that succeeds or fails on every call.
pub struct StubService {
    fail: bool,
    calls: AtomicUsize,
}

impl StubService {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls that reached this service.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
            .single()
            .unwrap_or_default()
    }

    fn failure() -> io::Error {
        io::Error::other("stub failure")
    }
}

#[async_trait]
impl FileService for StubService {
    async fn store(&self, name: &str, reader: FileReader<'_>, size: u64) -> FileResult<FileInfo> {
        self.record();
        if self.fail {
            return Err(FileError::store(name, Self::failure()));
        }

        let mut data = Vec::new();
        reader
            .take(size)
            .read_to_end(&mut data)
            .await
            .map_err(|e| FileError::store(name, e))?;

        Ok(FileInfo {
            full_path: name.to_string(),
            bucket: "stub".to_string(),
            region: "us-east-1".to_string(),
            mime_type: "application/octet-stream".to_string(),
            size: data.len() as u64,
            created_at: Self::created_at(),
        })
    }

    async fn delete(&self, name: &str) -> FileResult<()> {
        self.record();
        if self.fail {
            return Err(FileError::delete(name, Self::failure()));
        }
        Ok(())
    }

    async fn public_url(&self, name: &str) -> FileResult<Url> {
        self.record();
        if self.fail {
            return Err(FileError::public_url(name, Self::failure()));
        }
        Url::parse("http://localhost/example.xml").map_err(|e| FileError::public_url(name, e))
    }
}

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// A dispatcher writing plain `key=value` lines into this capture.
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch_up_to(Level::TRACE)
    }

    /// Like [`LogCapture::dispatch`], dropping events more verbose than `max`.
    pub fn dispatch_up_to(&self, max: Level) -> Dispatch {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(max)
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_level(false)
            .finish();
        Dispatch::new(subscriber)
    }

    pub fn lines(&self) -> Vec<String> {
        let buf = self.buf.lock().expect("log buffer poisoned");
        String::from_utf8_lossy(&buf)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// The only captured line; panics if there is not exactly one.
    pub fn single_line(&self) -> String {
        let mut lines = self.lines();
        assert_eq!(lines.len(), 1, "expected one log line, got {lines:?}");
        lines.remove(0)
    }
}

impl Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .expect("log buffer poisoned")
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
