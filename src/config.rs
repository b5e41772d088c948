use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, XrayError};
use crate::history::MAX_HISTORY;
use crate::quota::DAILY_LIMIT;

/// Public Custom Search JSON API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Largest page the Custom Search API will return.
pub const MAX_PAGE_SIZE: u32 = 10;

/// Most pages one search may walk; the API serves at most 100 results.
pub const MAX_PAGES: u32 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub quota: QuotaConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Config {
    /// Layer defaults, config files, and the environment.
    ///
    /// An explicit path (argument or `XRAY_CONFIG`) replaces the global and
    /// project files rather than stacking on them.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("XRAY_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(XrayError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Path of the per-user config file, if the platform has a config dir.
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xray/config.toml"))
    }

    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(".xray/config.toml")
    }

    /// Directory holding the quota, history, and saved-search documents.
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir().map_or_else(|| PathBuf::from(".xray"), |dir| dir.join("xray"))
        })
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&Self::project_path(project_root))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| XrayError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| XrayError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.google {
            self.google.merge(patch);
        }
        if let Some(patch) = patch.quota {
            self.quota.merge(patch);
        }
        if let Some(patch) = patch.history {
            self.history.merge(patch);
        }
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
        if let Some(patch) = patch.search {
            self.search.merge(patch);
        }
    }

    /// Apply environment overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        if let Some(value) = env.string("GOOGLE_API_KEY") {
            self.google.api_key = Some(value);
        }
        if let Some(value) = env.string("GOOGLE_CX") {
            self.google.engine_id = Some(value);
        }
        if let Some(value) = env.string("XRAY_API_KEY") {
            self.google.api_key = Some(value);
        }
        if let Some(value) = env.string("XRAY_ENGINE_ID") {
            self.google.engine_id = Some(value);
        }
        if let Some(value) = env.string("XRAY_ENDPOINT") {
            self.google.endpoint = value;
        }
        if let Some(value) = env.u64("XRAY_TIMEOUT_SECS")? {
            self.google.timeout_secs = value;
        }
        if let Some(value) = env.u32("XRAY_DAILY_LIMIT")? {
            self.quota.daily_limit = value;
        }
        if let Some(value) = env.u32("XRAY_HISTORY_MAX")? {
            self.history.max_entries = value as usize;
        }
        if let Some(value) = env.string("XRAY_DATA_DIR") {
            self.storage.data_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = env.u32("XRAY_PAGE_SIZE")? {
            self.search.page_size = value;
        }
        if let Some(value) = env.u32("XRAY_PAGES")? {
            self.search.pages = value;
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.search.page_size) {
            return Err(XrayError::Config(format!(
                "search.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.search.page_size
            )));
        }
        if !(1..=MAX_PAGES).contains(&self.search.pages) {
            return Err(XrayError::Config(format!(
                "search.pages must be between 1 and {MAX_PAGES}, got {}",
                self.search.pages
            )));
        }
        if self.google.timeout_secs == 0 {
            return Err(XrayError::Config(
                "google.timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GoogleConfig {
    fn merge(&mut self, patch: GooglePatch) {
        if let Some(value) = patch.api_key {
            self.api_key = Some(value);
        }
        if let Some(value) = patch.engine_id {
            self.engine_id = Some(value);
        }
        if let Some(value) = patch.endpoint {
            self.endpoint = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
    }

    /// Whether both credentials are present and non-blank.
    pub fn has_credentials(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        present(&self.api_key) && present(&self.engine_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaConfig {
    #[serde(default = "default_daily_limit")]
    pub daily_limit: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        Self {
            daily_limit: DAILY_LIMIT,
        }
    }
}

impl QuotaConfig {
    fn merge(&mut self, patch: QuotaPatch) {
        if let Some(value) = patch.daily_limit {
            self.daily_limit = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: MAX_HISTORY,
        }
    }
}

impl HistoryConfig {
    fn merge(&mut self, patch: HistoryPatch) {
        if let Some(value) = patch.max_entries {
            self.max_entries = value;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Defaults to the platform data dir joined with `xray`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.data_dir {
            self.data_dir = Some(value);
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_pages")]
    pub pages: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            pages: default_pages(),
        }
    }
}

impl SearchConfig {
    fn merge(&mut self, patch: SearchPatch) {
        if let Some(value) = patch.page_size {
            self.page_size = value;
        }
        if let Some(value) = patch.pages {
            self.pages = value;
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_daily_limit() -> u32 {
    DAILY_LIMIT
}

const fn default_max_entries() -> usize {
    MAX_HISTORY
}

const fn default_page_size() -> u32 {
    MAX_PAGE_SIZE
}

const fn default_pages() -> u32 {
    1
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub google: Option<GooglePatch>,
    pub quota: Option<QuotaPatch>,
    pub history: Option<HistoryPatch>,
    pub storage: Option<StoragePatch>,
    pub search: Option<SearchPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct GooglePatch {
    pub api_key: Option<String>,
    pub engine_id: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct QuotaPatch {
    pub daily_limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct HistoryPatch {
    pub max_entries: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchPatch {
    pub page_size: Option<u32>,
    pub pages: Option<u32>,
}

/// Typed access to environment-style variables.
struct Env<F>(F);

impl<F: Fn(&str) -> Option<String>> Env<F> {
    fn string(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    fn u32(&self, key: &str) -> Result<Option<u32>> {
        self.parsed(key)
    }

    fn u64(&self, key: &str) -> Result<Option<u64>> {
        self.parsed(key)
    }

    fn parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.string(key) {
            Some(value) => value.trim().parse::<T>().map(Some).map_err(|err| {
                XrayError::Config(format!("invalid {key} value {value}: {err}"))
            }),
            None => Ok(None),
        }
    }
}
