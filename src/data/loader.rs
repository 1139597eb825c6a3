use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;
use tracing::{info, warn};

use super::normalize;
use crate::error::QuizError;
use crate::models::Character;

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/lonqie/SchaleDB/main/data/en/students.json";
const FETCH_TIMEOUT_SECS: u64 = 30;

/// Where the character document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// JSON document served over HTTP.
    Remote(String),
    /// JSON document on disk.
    File(PathBuf),
    /// JSON document already in memory.
    Inline(Value),
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Remote(DEFAULT_DATA_URL.to_string())
    }
}

impl DataSource {
    /// Retrieves the raw document without normalizing it.
    pub async fn fetch(&self) -> Result<Value, QuizError> {
        match self {
            DataSource::Remote(url) => fetch_remote(url).await,
            DataSource::File(path) => {
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    QuizError::FetchFailure(format!("failed to read {}: {}", path.display(), e))
                })?;
                serde_json::from_str(&content).map_err(|e| {
                    QuizError::FetchFailure(format!("failed to parse {}: {}", path.display(), e))
                })
            }
            DataSource::Inline(document) => Ok(document.clone()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Remote(url) => url.clone(),
            DataSource::File(path) => path.display().to_string(),
            DataSource::Inline(_) => "inline document".to_string(),
        }
    }
}

async fn fetch_remote(url: &str) -> Result<Value, QuizError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| QuizError::FetchFailure(e.to_string()))?;

    let response = client.get(url).send().await.map_err(|e| {
        if e.is_timeout() {
            QuizError::FetchFailure(format!("request timed out after {FETCH_TIMEOUT_SECS}s"))
        } else if e.is_connect() {
            QuizError::FetchFailure(format!("{url} is not reachable"))
        } else {
            QuizError::FetchFailure(e.to_string())
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(QuizError::FetchFailure(format!("HTTP {}", status.as_u16())));
    }

    response
        .json()
        .await
        .map_err(|e| QuizError::FetchFailure(format!("failed to parse response: {e}")))
}

/// Lazily loaded, normalized characters.
///
/// The document is fetched on the first call to [`characters`](Self::characters)
/// and kept for the rest of the process. A failed attempt leaves the cache
/// empty so the next call retries.
#[derive(Debug)]
pub struct DatasetCache {
    source: DataSource,
    characters: Option<Vec<Character>>,
}

impl DatasetCache {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            characters: None,
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.characters.is_some()
    }

    pub async fn characters(&mut self) -> Result<&[Character], QuizError> {
        if self.characters.is_none() {
            let source = self.source.describe();
            info!(%source, "fetching character data");

            let document = self.source.fetch().await.inspect_err(|e| {
                warn!(%source, error = %e, "character fetch failed");
            })?;
            let characters = normalize(document).inspect_err(|e| {
                warn!(%source, error = %e, "character data unusable");
            })?;

            info!(count = characters.len(), "characters with a valid age loaded");
            self.characters = Some(characters);
        }

        Ok(self.characters.as_deref().unwrap_or_default())
    }
}
