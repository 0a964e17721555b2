use crate::config::{
    env_setting, AppConfig, API_KEY_VAR, DEFAULT_API_BASE, DEFAULT_TIMEOUT, DOMAIN_ID_VAR,
};
use crate::errors::FetchError;
use crate::models::RawClick;
use crate::sample::sample_clicks;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_LIMIT: u32 = 30;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortIoCredentials {
    pub api_key: String,
    pub domain_id: String,
}

impl ShortIoCredentials {
    /// Explicit values win; empty or missing ones are read from
    /// `SHORTIO_API_KEY` / `SHORTIO_DOMAIN_ID`.
    pub fn resolve(api_key: Option<&str>, domain_id: Option<&str>) -> Result<Self, FetchError> {
        Self::resolve_with(api_key, domain_id, env_setting)
    }

    pub fn resolve_with(
        api_key: Option<&str>,
        domain_id: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, FetchError> {
        let pick = |explicit: Option<&str>, var: &str| {
            explicit
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .or_else(|| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty()))
        };

        let api_key = pick(api_key, API_KEY_VAR).ok_or(FetchError::MissingApiKey)?;
        let domain_id = pick(domain_id, DOMAIN_ID_VAR).ok_or(FetchError::MissingDomainId)?;
        Ok(Self { api_key, domain_id })
    }
}

#[derive(Debug)]
pub enum FetchOutcome {
    Live(Vec<RawClick>),
    Sample(Vec<RawClick>),
    Fallback {
        records: Vec<RawClick>,
        reason: FetchError,
    },
}

impl FetchOutcome {
    pub fn records(&self) -> &[RawClick] {
        match self {
            FetchOutcome::Live(records) | FetchOutcome::Sample(records) => records.as_slice(),
            FetchOutcome::Fallback { records, .. } => records.as_slice(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }

    pub fn status_message(&self) -> String {
        match self {
            FetchOutcome::Live(records) => {
                format!("Fetched {} clicks from the short.io API.", records.len())
            }
            FetchOutcome::Sample(_) => {
                "Using sample data (enter an API key to use the live short.io API).".to_string()
            }
            FetchOutcome::Fallback { reason, .. } => {
                format!("short.io API request failed: {reason}. Using sample data instead.")
            }
        }
    }

    pub fn into_parts(self) -> (Vec<RawClick>, String) {
        let status = self.status_message();
        let records = match self {
            FetchOutcome::Live(records) | FetchOutcome::Sample(records) => records,
            FetchOutcome::Fallback { records, .. } => records,
        };
        (records, status)
    }
}

#[derive(Debug, Serialize)]
struct LastClicksRequest {
    limit: u32,
    include: IncludeFilter,
}

#[derive(Debug, Serialize)]
struct IncludeFilter {
    human: bool,
}

#[derive(Debug, Clone)]
pub struct ShortIoClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl Default for ShortIoClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_TIMEOUT)
    }
}

impl ShortIoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base.clone(), config.timeout)
    }

    pub fn last_clicks_url(&self, domain_id: &str) -> String {
        format!("{}/statistics/domain/{domain_id}/last_clicks", self.base_url)
    }

    pub async fn fetch_last_clicks(
        &self,
        credentials: &ShortIoCredentials,
        limit: u32,
    ) -> Result<Vec<RawClick>, FetchError> {
        let body = LastClicksRequest {
            limit,
            include: IncludeFilter { human: true },
        };

        let response = self
            .http
            .post(self.last_clicks_url(&credentials.domain_id))
            .header(ACCEPT, "*/*")
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, credentials.api_key.as_str())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice::<Vec<RawClick>>(&bytes).map_err(|err| FetchError::Decode(err.to_string()))
    }

    pub async fn get_clicks_data(
        &self,
        use_api: bool,
        api_key: Option<&str>,
        domain_id: Option<&str>,
        limit: u32,
    ) -> FetchOutcome {
        let has_key = api_key.is_some_and(|key| !key.trim().is_empty());
        if !use_api || !has_key {
            return FetchOutcome::Sample(sample_clicks());
        }

        let result = match ShortIoCredentials::resolve(api_key, domain_id) {
            Ok(credentials) => self.fetch_last_clicks(&credentials, limit).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(records) => {
                info!(count = records.len(), limit, "fetched clicks from short.io");
                FetchOutcome::Live(records)
            }
            Err(reason) => {
                warn!(error = %reason, "short.io request failed, using sample data");
                FetchOutcome::Fallback {
                    records: sample_clicks(),
                    reason,
                }
            }
        }
    }
}

pub async fn get_clicks_data(
    use_api: bool,
    api_key: Option<&str>,
    domain_id: Option<&str>,
    limit: u32,
) -> (Vec<RawClick>, String) {
    ShortIoClient::default()
        .get_clicks_data(use_api, api_key, domain_id, limit)
        .await
        .into_parts()
}

pub fn clamp_limit(limit: Option<u32>) -> u32 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}
