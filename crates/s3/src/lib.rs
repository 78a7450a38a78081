//! S3-compatible file service using Apache OpenDAL.
//!
//! Works against any endpoint speaking the S3 protocol:
//! - MinIO
//! - Cloudflare R2
//! - AWS S3, DigitalOcean Spaces
//!
//! # Operations
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          S3Service                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ connect   → op.lister("/")           (bucket must exist)        │
//! │ store     → op.writer_with(key).chunk(8 MiB).content_type(mime) │
//! │ delete    → op.delete(key)                                      │
//! │ public_url→ op.presign_read_with(key, 24h)                      │
//! │               .override_content_disposition(attachment)         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

mod error;
mod service;

pub use error::S3Error;
pub use service::S3Service;
