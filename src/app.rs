//! Application context shared by every command.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::Result;
use crate::history::{HistoryStore, SavedSearchStore};
use crate::quota::QuotaLedger;
use crate::search::{GoogleSearch, SearchProvider};
use crate::session::SearchSession;
use crate::storage::{DocumentStore, FileStore};

pub struct AppContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub robot_mode: bool,
    store: Box<dyn DocumentStore>,
    clock: Box<dyn Clock>,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &cwd)?;
        let data_dir = config.data_dir();
        debug!(data_dir = %data_dir.display(), "using data directory");

        Ok(Self {
            store: Box::new(FileStore::new(data_dir.clone())),
            clock: Box::new(SystemClock),
            data_dir,
            robot_mode: cli.output_format().is_machine_readable(),
            config,
        })
    }

    /// Context over caller-supplied storage and time.
    pub fn with_parts(
        config: Config,
        store: Box<dyn DocumentStore>,
        clock: Box<dyn Clock>,
        output_format: OutputFormat,
    ) -> Self {
        Self {
            data_dir: config.data_dir(),
            config,
            robot_mode: output_format.is_machine_readable(),
            store,
            clock,
        }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn ledger(&self) -> QuotaLedger<'_> {
        QuotaLedger::new(self.store(), self.clock(), self.config.quota.daily_limit)
    }

    pub fn history(&self) -> HistoryStore<'_> {
        HistoryStore::with_capacity(self.store(), self.clock(), self.config.history.max_entries)
    }

    pub fn saved(&self) -> SavedSearchStore<'_> {
        SavedSearchStore::new(self.store(), self.clock())
    }

    /// Pipeline over this context's storage, driving `provider`.
    pub fn session<'a>(&'a self, provider: &'a dyn SearchProvider) -> SearchSession<'a> {
        SearchSession::new(provider, self.ledger(), self.history(), self.saved())
    }

    /// The live search backend. Fails before any call when credentials
    /// are missing.
    pub fn search_provider(&self) -> Result<GoogleSearch> {
        GoogleSearch::from_config(&self.config.google)
    }
}
