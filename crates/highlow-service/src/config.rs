// File: crates/highlow-service/src/config.rs
// Summary: Layered configuration: embedded defaults, optional user file, HIGHLOW__* environment.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::NaiveDate;
use config::{ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::publish::ExpiryPolicy;

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub logging: Logging,
    pub batch: Batch,
    pub rasterizer: RasterizerConfig,
    pub publisher: PublisherConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Logging {
    level: String,
    #[serde(default)]
    crates: BTreeMap<String, String>,
}

impl Logging {
    /// `EnvFilter` directives: the default level followed by per-crate overrides.
    pub fn levels(&self) -> String {
        std::iter::once(self.level.clone())
            .chain(self.crates.iter().map(|(lib, loglevel)| format!("{lib}={loglevel}")))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Batch {
    pub codes: Vec<String>,
    pub timeout_secs: u64,
    #[serde(default)]
    pub legend: bool,
}

impl Batch {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RasterizerKind {
    Skia,
    /// ImageMagick `convert` child process.
    Convert,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RasterizerConfig {
    pub kind: RasterizerKind,
    #[serde(default = "default_convert_program")]
    pub program: PathBuf,
}

fn default_convert_program() -> PathBuf {
    PathBuf::from("convert")
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PublisherKind {
    Local,
    Http,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PublisherConfig {
    pub kind: PublisherKind,
    #[serde(default)]
    pub root: Option<PathBuf>,
    pub public_base_url: String,
    #[serde(default)]
    pub upload_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    pub signing_key: String,
    pub expiry: ExpiryConfig,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "policy", rename_all = "kebab-case")]
pub enum ExpiryConfig {
    Fixed { date: NaiveDate },
    NextDay,
}

impl From<ExpiryConfig> for ExpiryPolicy {
    fn from(value: ExpiryConfig) -> Self {
        match value {
            ExpiryConfig::Fixed { date } => ExpiryPolicy::Fixed(date),
            ExpiryConfig::NextDay => ExpiryPolicy::NextDay,
        }
    }
}

impl Config {
    /// Defaults from the bundled `config.yml`, then `path` if given, then the environment
    /// (`HIGHLOW_BATCH__TIMEOUT_SECS=10`, `HIGHLOW_BATCH__CODES=USD,JPY`, ...).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(File::from_str(include_str!("../config.yml"), FileFormat::Yaml));
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(
                Environment::with_prefix("HIGHLOW")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("batch.codes"),
            )
            .build()?
            .try_deserialize()
    }
}
