//! S3 file service implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use futures::StreamExt;
use opendal::raw::normalize_path;
use opendal::{ErrorKind, Operator, services};
use tokio::io::AsyncReadExt;
use tracing::debug;
use url::Url;

use filehelper_shared::{
    BoxError, Credentials, FileError, FileInfo, FileReader, FileResult, FileService,
};

use crate::error::S3Error;

/// File service for S3-compatible endpoints.
///
/// Holds only the credentials it was built from and a thread-safe OpenDAL
/// operator, so one instance can be shared across tasks.
pub struct S3Service {
    creds: Credentials,
    operator: Operator,
}

impl S3Service {
    /// Name used in client construction errors.
    pub const SERVICE_NAME: &'static str = "s3";
    /// How long a public URL stays valid.
    pub const PUBLIC_URL_TTL: Duration = Duration::from_secs(24 * 60 * 60);
    /// Largest object a single PUT may create: 5 TiB.
    pub const MAX_SINGLE_PUT_SIZE: u64 = 5 * 1024 * 1024 * 1024 * 1024;
    /// Size of the parts an upload is split into once it outgrows one PUT.
    const UPLOAD_CHUNK_SIZE: usize = 8 * 1024 * 1024;
    /// Bytes pulled from the caller's reader per read.
    const READ_BUFFER_SIZE: usize = 64 * 1024;
    /// Region used for request signing when none is configured.
    const DEFAULT_SIGNING_REGION: &'static str = "us-east-1";

    /// Connects to the endpoint and checks that the configured bucket exists.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint or credentials cannot produce a client
    /// - The bucket check fails (`FileError::Bucket`)
    /// - The bucket does not exist (`FileError::BucketNotExists`)
    pub async fn connect(creds: Credentials) -> FileResult<Self> {
        let service = Self::new(creds)?;
        service.verify_bucket().await?;
        Ok(service)
    }

    /// Builds the client without touching the network.
    pub(crate) fn new(creds: Credentials) -> FileResult<Self> {
        let endpoint =
            endpoint_url(&creds).map_err(|e| FileError::client(Self::SERVICE_NAME, e))?;

        if creds.bucket.is_empty() {
            return Err(FileError::bucket(S3Error::EmptyBucketName));
        }

        let region = if creds.region.is_empty() {
            Self::DEFAULT_SIGNING_REGION
        } else {
            creds.region.as_str()
        };

        let builder = services::S3::default()
            .endpoint(&endpoint)
            .bucket(&creds.bucket)
            .access_key_id(&creds.client_id)
            .secret_access_key(&creds.client_secret)
            .region(region)
            .disable_config_load()
            .disable_ec2_metadata();

        let operator = Operator::new(builder)
            .map_err(|e| FileError::client(Self::SERVICE_NAME, e))?
            .finish();

        debug!(endpoint = %endpoint, bucket = %creds.bucket, "s3 client created");

        Ok(Self { creds, operator })
    }

    /// Lists the bucket root once to prove the bucket is there.
    async fn verify_bucket(&self) -> FileResult<()> {
        let first = match self.operator.lister("/").await {
            Ok(mut lister) => lister.next().await.transpose().map(|_| ()),
            Err(err) => Err(err),
        };

        match first {
            Ok(()) => {
                debug!(bucket = %self.creds.bucket, "bucket verified");
                Ok(())
            }
            Err(err) if is_missing_bucket(&err) => {
                Err(FileError::bucket_not_exists(&self.creds.bucket))
            }
            Err(err) => Err(FileError::bucket(err)),
        }
    }

    /// Streams exactly `size` bytes from `reader` into the object at `key`.
    ///
    /// Nothing is committed unless the whole stream arrived.
    async fn put(
        &self,
        key: &str,
        reader: FileReader<'_>,
        size: u64,
        mime_type: &str,
    ) -> Result<u64, BoxError> {
        if key.is_empty() {
            return Err(S3Error::EmptyObjectName.into());
        }
        if size > Self::MAX_SINGLE_PUT_SIZE {
            return Err(S3Error::EntityTooLarge {
                size,
                max: Self::MAX_SINGLE_PUT_SIZE,
            }
            .into());
        }

        let mut writer = self
            .operator
            .writer_with(key)
            .chunk(Self::UPLOAD_CHUNK_SIZE);
        if !mime_type.is_empty() {
            writer = writer.content_type(mime_type);
        }
        let mut writer = writer.await?;

        let mut source = reader.take(size);
        let mut read = 0u64;
        let copied: Result<(), BoxError> = async {
            loop {
                let mut buf = vec![0u8; Self::READ_BUFFER_SIZE];
                let n = source.read(&mut buf).await?;
                if n == 0 {
                    return Ok(());
                }
                buf.truncate(n);
                writer.write(buf).await?;
                read += n as u64;
            }
        }
        .await;

        let failure = match copied {
            Err(err) => Some(err),
            Ok(()) if read != size => Some(S3Error::ShortRead { read, size }.into()),
            Ok(()) => None,
        };
        if let Some(err) = failure {
            if let Err(abort) = writer.abort().await {
                debug!(key, error = %abort, "aborting upload failed");
            }
            return Err(err);
        }

        writer.close().await?;
        Ok(read)
    }

    async fn presign(&self, name: &str) -> Result<Url, BoxError> {
        if name.is_empty() {
            return Err(S3Error::EmptyObjectName.into());
        }

        let presigned = self
            .operator
            .presign_read_with(name, Self::PUBLIC_URL_TTL)
            .override_content_disposition(&content_disposition(name))
            .await?;

        Ok(Url::parse(&presigned.uri().to_string())?)
    }

    /// Get the bucket name.
    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.creds.bucket
    }
}

#[async_trait]
impl FileService for S3Service {
    async fn store(&self, name: &str, reader: FileReader<'_>, size: u64) -> FileResult<FileInfo> {
        let mime_type = mime_type_for(name);
        let key = if name.is_empty() {
            String::new()
        } else {
            normalize_path(name)
        };

        let written = self
            .put(&key, reader, size, &mime_type)
            .await
            .map_err(|e| FileError::store(name, e))?;

        Ok(FileInfo {
            full_path: key,
            bucket: self.creds.bucket.clone(),
            region: self.creds.region.clone(),
            mime_type,
            size: written,
            created_at: Utc::now(),
        })
    }

    async fn delete(&self, name: &str) -> FileResult<()> {
        if name.is_empty() {
            return Err(FileError::delete(name, S3Error::EmptyObjectName));
        }

        self.operator
            .delete(name)
            .await
            .map_err(|e| FileError::delete(name, e))
    }

    async fn public_url(&self, name: &str) -> FileResult<Url> {
        self.presign(name)
            .await
            .map_err(|e| FileError::public_url(name, e))
    }
}

/// Full endpoint URL, with a scheme picked from `use_ssl` unless one is given.
fn endpoint_url(creds: &Credentials) -> Result<String, S3Error> {
    let endpoint = creds.endpoint.trim();
    let raw = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        let scheme = if creds.use_ssl { "https" } else { "http" };
        format!("{scheme}://{endpoint}")
    };

    match Url::parse(&raw) {
        Ok(url) if url.host_str().is_some_and(|host| !host.is_empty()) => {
            Ok(raw.trim_end_matches('/').to_string())
        }
        _ => Err(S3Error::InvalidEndpoint(creds.endpoint.clone())),
    }
}

/// Whether a failed root listing means the bucket is absent.
///
/// S3 answers a missing bucket with `404 NoSuchBucket`, which OpenDAL reports
/// as `ConfigInvalid`. A bare 404 comes back as `NotFound`.
fn is_missing_bucket(err: &opendal::Error) -> bool {
    matches!(err.kind(), ErrorKind::NotFound | ErrorKind::ConfigInvalid)
}

/// Best-effort MIME type from the file extension. Empty when unknown.
fn mime_type_for(name: &str) -> String {
    mime_guess::from_path(name)
        .first_raw()
        .unwrap_or_default()
        .to_string()
}

/// Last path segment of a key.
fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches('/');
    if trimmed.is_empty() {
        return name;
    }
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// `Content-Disposition` value that makes browsers download under the base name.
fn content_disposition(name: &str) -> String {
    let file_name = base_name(name).replace('\\', "\\\\").replace('"', "\\\"");
    format!("attachment; filename=\"{file_name}\"")
}
