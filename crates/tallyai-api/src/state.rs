//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI commands
//! and HTTP handlers. Everything inside is immutable after startup and
//! shared through `Arc`.

use std::path::PathBuf;
use std::sync::Arc;

use tallyai_core::chat::catalog::StaticChatCatalog;
use tallyai_core::tally::service::TallyService;
use tallyai_infra::config::load_global_config;
use tallyai_infra::filesystem::resolve_data_dir;
use tallyai_infra::tally::TallyHttpClient;
use tallyai_types::config::GlobalConfig;

use crate::http::views::PageRenderer;

pub type ConcreteTallyService = TallyService<TallyHttpClient>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<StaticChatCatalog>,
    pub tally: Arc<ConcreteTallyService>,
    pub pages: Arc<PageRenderer>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory and load `config.toml` from it.
    ///
    /// Returns the directory and config so CLI overrides can be applied
    /// before [`AppState::new`].
    pub async fn load_config() -> (PathBuf, GlobalConfig) {
        let data_dir = resolve_data_dir();
        let config = load_global_config(&data_dir).await;
        (data_dir, config)
    }

    /// Wire services from an already-resolved configuration.
    pub fn new(config: GlobalConfig, data_dir: PathBuf) -> anyhow::Result<Self> {
        let tally = TallyService::new(TallyHttpClient::new(&config.tally)?);
        let pages = PageRenderer::new()?;

        Ok(Self {
            catalog: Arc::new(StaticChatCatalog::new()),
            tally: Arc::new(tally),
            pages: Arc::new(pages),
            config: Arc::new(config),
            data_dir,
        })
    }
}
