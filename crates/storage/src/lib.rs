//! Object upload adapter.
//!
//! A narrow [`ObjectStore`] contract over binary image storage: store one
//! object under a caller-chosen key, get back a stable publicly
//! dereferenceable URL. Two backends: S3-compatible (production) and
//! in-memory (dev and tests). No retries -- a rejected write surfaces as a
//! single terminal [`StorageError`] and the caller re-invokes manually.
//!
//! Upload and record-save are not transactional: an uploaded object whose
//! URL never lands in a record is an accepted orphan.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use tokio::sync::RwLock;

use osaka_core::upload::CACHE_CONTROL_SECS;

/// Errors from the object store boundary.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The key is already taken; keys are never overwritten.
    #[error("Object key already exists: {0}")]
    AlreadyExists(String),

    /// The store rejected the write (quota, transport failure, ...).
    #[error("Object store rejected the write: {0}")]
    Rejected(String),
}

/// Content store returning a stable public URL per stored object.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under `bucket`/`key` and resolve its public URL.
    ///
    /// Never overwrites: a colliding key fails with
    /// [`StorageError::AlreadyExists`].
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError>;
}

// ---------------------------------------------------------------------------
// S3-compatible backend
// ---------------------------------------------------------------------------

/// Configuration for the S3-compatible backend, loaded from environment
/// variables by the API crate's config layer.
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Custom endpoint for S3-compatible stores; `None` uses AWS proper.
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    /// Base under which stored objects are publicly served, without a
    /// trailing slash, e.g. `https://cdn.example.com`.
    pub public_base_url: String,
}

/// [`ObjectStore`] backed by an S3-compatible service.
pub struct S3Store {
    client: aws_sdk_s3::Client,
    public_base_url: String,
}

impl S3Store {
    /// Build a client from explicit configuration.
    pub async fn new(config: S3Config) -> Self {
        let credentials = Credentials::from_keys(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            None,
        );

        let mut loader = aws_config::from_env()
            .region(aws_config::Region::new(config.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        // S3-compatible stores generally require path-style addressing.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.endpoint.is_some())
            .build();

        Self {
            client: aws_sdk_s3::Client::from_conf(s3_config),
            public_base_url: config.public_base_url,
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(content_type)
            .cache_control(format!("max-age={CACHE_CONTROL_SECS}"))
            // Conditional write: fail instead of silently overwriting.
            .if_none_match("*")
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                let service_err = e.raw_response().map(|r| r.status().as_u16());
                if service_err == Some(412) {
                    StorageError::AlreadyExists(key.to_string())
                } else {
                    StorageError::Rejected(e.to_string())
                }
            })?;

        tracing::info!(bucket, key, "Object stored");
        Ok(format!("{}/{bucket}/{key}", self.public_base_url))
    }
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

/// [`ObjectStore`] held entirely in process memory, for dev and tests.
#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored size of an object, if present. Test helper.
    pub async fn object_len(&self, bucket: &str, key: &str) -> Option<usize> {
        self.objects
            .read()
            .await
            .get(&(bucket.to_string(), key.to_string()))
            .map(Vec::len)
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        _content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, StorageError> {
        let mut objects = self.objects.write().await;
        let entry = (bucket.to_string(), key.to_string());
        if objects.contains_key(&entry) {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }
        objects.insert(entry, bytes);
        Ok(format!("memory://{bucket}/{key}"))
    }
}
