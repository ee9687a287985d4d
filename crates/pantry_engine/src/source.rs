use std::time::Duration;

use futures_util::StreamExt;
use pantry_core::Recipe;
use pantry_logging::{pantry_debug, pantry_warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{CategoryRow, MealRow, MealsEnvelope};
use crate::{FailureKind, FetchError};

pub const MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1/";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    /// Extra attempts after a retryable transport failure.
    pub max_retries: u32,
    /// Delay before retry `n` is `retry_backoff * n`.
    pub retry_backoff: Duration,
    /// Letter lookups in flight at once while assembling the full catalog.
    pub letter_concurrency: usize,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            base_url: MEALDB_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            max_retries: 2,
            retry_backoff: Duration::from_millis(250),
            letter_concurrency: 1,
        }
    }
}

/// Read-only access to a recipe database.
#[async_trait::async_trait]
pub trait RecipeSource: Send + Sync {
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Recipe>, FetchError>;

    /// Rows carry only id, name and thumbnail.
    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, FetchError>;

    /// `Ok(None)` when the id is unknown.
    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, FetchError>;

    async fn list_categories(&self) -> Result<Vec<String>, FetchError>;
}

/// [`RecipeSource`] backed by TheMealDB's JSON API.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    settings: FetchSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl MealDbClient {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut base = settings.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    fn endpoint(&self, path: &str, key: &str, value: &str) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn get_rows<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        value: &str,
    ) -> Result<Vec<T>, FetchError> {
        let url = self.endpoint(path, key, value)?;
        let body = self.get_with_retry(&url).await?;
        let envelope: MealsEnvelope<T> = serde_json::from_slice(&body)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))?;
        Ok(envelope.into_rows())
    }

    async fn get_with_retry(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.get_once(url).await {
                Ok(body) => return Ok(body),
                Err(err) if err.kind.is_retryable() && attempt < self.settings.max_retries => {
                    attempt += 1;
                    pantry_warn!("GET {} failed ({}), retry {}", url, err, attempt);
                    tokio::time::sleep(self.settings.retry_backoff * attempt).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_once(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        pantry_debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl RecipeSource for MealDbClient {
    async fn search_by_first_letter(&self, letter: char) -> Result<Vec<Recipe>, FetchError> {
        let rows: Vec<MealRow> = self
            .get_rows("search.php", "f", &letter.to_string())
            .await?;
        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn filter_by_category(&self, category: &str) -> Result<Vec<Recipe>, FetchError> {
        let rows: Vec<MealRow> = self.get_rows("filter.php", "c", category).await?;
        Ok(rows.into_iter().map(Recipe::from).collect())
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>, FetchError> {
        let rows: Vec<MealRow> = self.get_rows("lookup.php", "i", id).await?;
        Ok(rows.into_iter().next().map(Recipe::from))
    }

    async fn list_categories(&self) -> Result<Vec<String>, FetchError> {
        let rows: Vec<CategoryRow> = self.get_rows("list.php", "c", "list").await?;
        Ok(rows.into_iter().map(|row| row.name).collect())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
