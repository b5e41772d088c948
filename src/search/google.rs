//! Google Custom Search JSON API provider.

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{ResultItem, SearchProvider, SearchRequest};
use crate::config::GoogleConfig;
use crate::error::{Result, XrayError};

const USER_AGENT: &str = concat!("xray/", env!("CARGO_PKG_VERSION"));

pub struct GoogleSearch {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    engine_id: String,
}

impl GoogleSearch {
    /// Build a provider from config, failing when credentials are absent.
    pub fn from_config(config: &GoogleConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| XrayError::MissingConfig("google.api_key".to_string()))?;
        let engine_id = config
            .engine_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| XrayError::MissingConfig("google.engine_id".to_string()))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| XrayError::Config(format!("build http client: {err}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: api_key.to_string(),
            engine_id: engine_id.to_string(),
        })
    }

    fn request_url(&self, request: &SearchRequest<'_>) -> Result<Url> {
        let num = request.page_size.to_string();
        let start = request.start.to_string();
        let mut params = vec![
            ("key", self.api_key.as_str()),
            ("cx", self.engine_id.as_str()),
            ("q", request.query),
            ("num", num.as_str()),
            ("start", start.as_str()),
        ];
        if let Some(restrict) = request.date_restrict {
            params.push(("dateRestrict", restrict.code()));
        }

        Url::parse_with_params(&self.endpoint, &params)
            .map_err(|err| XrayError::Config(format!("invalid endpoint {}: {err}", self.endpoint)))
    }
}

impl SearchProvider for GoogleSearch {
    fn search(&self, request: &SearchRequest<'_>) -> Result<Vec<ResultItem>> {
        let url = self.request_url(request)?;
        debug!(
            query = request.query,
            start = request.start,
            num = request.page_size,
            "custom search request"
        );

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| XrayError::SearchTransport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(XrayError::SearchTransport(format!(
                "HTTP {status}: {}",
                api_error_message(&body).unwrap_or(body)
            )));
        }

        let payload: SearchResponse = response
            .json()
            .map_err(|err| XrayError::SearchTransport(format!("decode response: {err}")))?;

        let raw_count = payload.items.len();
        let items: Vec<ResultItem> = payload
            .items
            .into_iter()
            .filter_map(RawItem::into_result_item)
            .collect();
        if items.len() < raw_count {
            warn!(
                dropped = raw_count - items.len(),
                "dropped search items without a link"
            );
        }
        Ok(items)
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    title: Option<String>,
    link: Option<String>,
    snippet: Option<String>,
}

impl RawItem {
    /// Items without a link are unusable; other missing fields become empty.
    fn into_result_item(self) -> Option<ResultItem> {
        let link = self.link.filter(|link| !link.trim().is_empty())?;
        Some(
            ResultItem::new(self.title.unwrap_or_default(), link)
                .with_snippet(self.snippet.unwrap_or_default()),
        )
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::DateRestrict;

    fn config() -> GoogleConfig {
        GoogleConfig {
            api_key: Some("key-123".to_string()),
            engine_id: Some("cx-456".to_string()),
            ..GoogleConfig::default()
        }
    }

    #[test]
    fn missing_api_key_is_missing_config() {
        let cfg = GoogleConfig {
            api_key: None,
            ..config()
        };
        let err = GoogleSearch::from_config(&cfg).err().unwrap();
        assert!(matches!(err, XrayError::MissingConfig(ref key) if key == "google.api_key"));
    }

    #[test]
    fn blank_engine_id_is_missing_config() {
        let cfg = GoogleConfig {
            engine_id: Some("   ".to_string()),
            ..config()
        };
        let err = GoogleSearch::from_config(&cfg).err().unwrap();
        assert!(matches!(err, XrayError::MissingConfig(ref key) if key == "google.engine_id"));
    }

    #[test]
    fn request_url_carries_all_params() {
        let provider = GoogleSearch::from_config(&config()).unwrap();
        let url = provider
            .request_url(&SearchRequest {
                query: "(site:jobs.lever.co) \"Security Engineer\"",
                page_size: 10,
                start: 11,
                date_restrict: Some(DateRestrict::W1),
            })
            .unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("cx".into(), "cx-456".into())));
        assert!(pairs.contains(&("q".into(), "(site:jobs.lever.co) \"Security Engineer\"".into())));
        assert!(pairs.contains(&("start".into(), "11".into())));
        assert!(pairs.contains(&("dateRestrict".into(), "w1".into())));
    }

    #[test]
    fn request_url_omits_absent_date_restrict() {
        let provider = GoogleSearch::from_config(&config()).unwrap();
        let url = provider
            .request_url(&SearchRequest {
                query: "q",
                page_size: 5,
                start: 1,
                date_restrict: None,
            })
            .unwrap();
        assert!(!url.query().unwrap_or_default().contains("dateRestrict"));
    }

    #[test]
    fn raw_item_without_link_is_dropped() {
        let raw = RawItem {
            title: Some("t".into()),
            link: None,
            snippet: None,
        };
        assert!(raw.into_result_item().is_none());
    }

    #[test]
    fn raw_item_missing_title_is_coerced() {
        let raw = RawItem {
            title: None,
            link: Some("https://x.co/a".into()),
            snippet: None,
        };
        let item = raw.into_result_item().unwrap();
        assert_eq!(item.title, "");
        assert_eq!(item.snippet, "");
    }

    #[test]
    fn api_error_message_is_extracted() {
        let body = r#"{"error":{"code":403,"message":"Daily Limit Exceeded"}}"#;
        assert_eq!(api_error_message(body).as_deref(), Some("Daily Limit Exceeded"));
        assert_eq!(api_error_message("<html>"), None);
    }
}
