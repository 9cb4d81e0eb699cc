// File: crates/highlow-service/src/publish.rs
// Summary: Object keys, expiring signed URLs and the Publisher port with local-disk and HTTP PUT adapters.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

use crate::config::{PublisherConfig, PublisherKind};
use crate::error::PublishError;

type HmacSha256 = Hmac<Sha256>;

/// Storage path of one chart image: `{YYYYMMDD}/{CODE}_HIGHLOW_{YYYYMMDD}.png`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub fn for_chart(code: &str, generated_on: NaiveDate) -> Result<Self, PublishError> {
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(PublishError::Key(code.to_string()));
        }
        let day = generated_on.format("%Y%m%d");
        Ok(Self(format!("{day}/{code}_HIGHLOW_{day}.png")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Every URL expires at midnight UTC of this date.
    Fixed(NaiveDate),
    /// URLs expire at the midnight following the generation date.
    NextDay,
}

impl ExpiryPolicy {
    pub fn expires_at(&self, generated_on: NaiveDate) -> DateTime<Utc> {
        let day = match self {
            ExpiryPolicy::Fixed(date) => *date,
            ExpiryPolicy::NextDay => generated_on.succ_opt().unwrap_or(generated_on),
        };
        day.and_time(NaiveTime::MIN).and_utc()
    }
}

/// HMAC-SHA256 signer for retrieval URLs.
#[derive(Clone)]
pub struct UrlSigner {
    key: Vec<u8>,
}

impl fmt::Debug for UrlSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSigner").finish_non_exhaustive()
    }
}

impl UrlSigner {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into() }
    }

    fn mac(&self, key: &ObjectKey, expires: i64) -> Result<HmacSha256, PublishError> {
        let mut mac = HmacSha256::new_from_slice(&self.key).map_err(|_| PublishError::Signing)?;
        mac.update(key.as_str().as_bytes());
        mac.update(b"\n");
        mac.update(expires.to_string().as_bytes());
        Ok(mac)
    }

    /// Hex signature over `"{key}\n{expires_unix}"`.
    pub fn sign(&self, key: &ObjectKey, expires: i64) -> Result<String, PublishError> {
        Ok(hex::encode(self.mac(key, expires)?.finalize().into_bytes()))
    }

    pub fn verify(&self, key: &ObjectKey, expires: i64, signature: &str) -> bool {
        let Ok(raw) = hex::decode(signature) else {
            return false;
        };
        match self.mac(key, expires) {
            Ok(mac) => mac.verify_slice(&raw).is_ok(),
            Err(_) => false,
        }
    }

    pub fn signed_url(&self, base_url: &str, key: &ObjectKey, expires_at: DateTime<Utc>) -> Result<String, PublishError> {
        let expires = expires_at.timestamp();
        let signature = self.sign(key, expires)?;
        Ok(format!(
            "{}/{}?expires={}&signature={}",
            base_url.trim_end_matches('/'),
            key,
            expires,
            signature
        ))
    }
}

/// How published objects are turned into retrieval URLs.
#[derive(Clone, Debug)]
pub struct UrlPolicy {
    pub base_url: String,
    pub signer: UrlSigner,
    pub expiry: ExpiryPolicy,
}

impl UrlPolicy {
    pub fn published(&self, key: &ObjectKey, generated_on: NaiveDate) -> Result<PublishedChart, PublishError> {
        let expires_at = self.expiry.expires_at(generated_on);
        let url = self.signer.signed_url(&self.base_url, key, expires_at)?;
        Ok(PublishedChart { key: key.to_string(), url, expires_at })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublishedChart {
    pub key: String,
    pub url: String,
    pub expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait Publisher: Send + Sync + 'static {
    /// Store `png` under `key` and hand back a time-limited URL for it.
    async fn publish(&self, key: &ObjectKey, png: Vec<u8>, generated_on: NaiveDate) -> Result<PublishedChart, PublishError>;
}

pub fn from_config(config: &PublisherConfig) -> Result<Arc<dyn Publisher>, PublishError> {
    let urls = UrlPolicy {
        base_url: config.public_base_url.clone(),
        signer: UrlSigner::new(config.signing_key.as_bytes()),
        expiry: config.expiry.into(),
    };
    match config.kind {
        PublisherKind::Local => {
            let root = config
                .root
                .clone()
                .ok_or_else(|| PublishError::Misconfigured("local publisher needs `root`".into()))?;
            Ok(Arc::new(LocalPublisher::new(root, urls)))
        }
        PublisherKind::Http => {
            let upload_url = config
                .upload_url
                .clone()
                .ok_or_else(|| PublishError::Misconfigured("http publisher needs `upload_url`".into()))?;
            Ok(Arc::new(HttpPublisher::new(upload_url, config.token.clone(), urls)))
        }
    }
}

/// Writes objects below a directory; handy for development and tests.
#[derive(Clone, Debug)]
pub struct LocalPublisher {
    root: PathBuf,
    urls: UrlPolicy,
}

impl LocalPublisher {
    pub fn new(root: impl Into<PathBuf>, urls: UrlPolicy) -> Self {
        Self { root: root.into(), urls }
    }
}

#[async_trait]
impl Publisher for LocalPublisher {
    async fn publish(&self, key: &ObjectKey, png: Vec<u8>, generated_on: NaiveDate) -> Result<PublishedChart, PublishError> {
        let path = self.root.join(key.as_str());
        let io_err = |source| PublishError::Io { key: key.to_string(), source };
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        tokio::fs::write(&path, &png).await.map_err(io_err)?;
        tracing::debug!(path = %path.display(), bytes = png.len(), "chart stored");
        self.urls.published(key, generated_on)
    }
}

/// Uploads objects with `PUT {upload_url}/{key}`.
#[derive(Clone, Debug)]
pub struct HttpPublisher {
    client: reqwest::Client,
    upload_url: String,
    token: Option<String>,
    urls: UrlPolicy,
}

impl HttpPublisher {
    pub fn new(upload_url: impl Into<String>, token: Option<String>, urls: UrlPolicy) -> Self {
        Self { client: reqwest::Client::new(), upload_url: upload_url.into(), token, urls }
    }
}

#[async_trait]
impl Publisher for HttpPublisher {
    async fn publish(&self, key: &ObjectKey, png: Vec<u8>, generated_on: NaiveDate) -> Result<PublishedChart, PublishError> {
        let url = format!("{}/{}", self.upload_url.trim_end_matches('/'), key);
        let mut request = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "image/png")
            .body(png);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Status { status: status.as_u16(), body });
        }
        tracing::debug!(%url, status = status.as_u16(), "chart uploaded");
        self.urls.published(key, generated_on)
    }
}
