//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by the HTTP handlers.
//! Services are generic over the store/verifier/provider traits, but
//! AppState pins them to the concrete infra implementations. The one
//! exception is the gateway, which stays behind [`BoxLlmProvider`] so tests
//! can inject a stub without touching the wiring.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use ecobot_core::llm::BoxLlmProvider;
use ecobot_core::service::account::AccountService;
use ecobot_core::service::assistant::AssistantService;
use ecobot_core::service::points::PointsService;
use ecobot_infra::config::{load_config, resolve_data_dir};
use ecobot_infra::credentials::PlaintextVerifier;
use ecobot_infra::llm::GeminiProvider;
use ecobot_infra::session::MemorySessionStore;
use ecobot_infra::store::JsonUserStore;
use ecobot_types::config::AppConfig;

/// One store instance shared across services, so all mutations go through
/// a single write lock.
pub type SharedUserStore = Arc<JsonUserStore>;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteAccountService = AccountService<SharedUserStore, PlaintextVerifier>;
pub type ConcretePointsService = PointsService<SharedUserStore>;
pub type ConcreteAssistantService = AssistantService<BoxLlmProvider>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<ConcreteAccountService>,
    pub points_service: Arc<ConcretePointsService>,
    pub assistant_service: Arc<ConcreteAssistantService>,
    pub sessions: Arc<MemorySessionStore>,
    pub config: AppConfig,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, load
    /// config, build the Gemini provider from `GEMINI_API_KEY`, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;

        let api_key = std::env::var("GEMINI_API_KEY")
            .context("GEMINI_API_KEY environment variable must be set")?;
        let provider = GeminiProvider::new(api_key.into(), &config.gemini);

        Ok(Self::with_provider(config, &data_dir, BoxLlmProvider::new(provider)))
    }

    /// Wire services around an already-built gateway provider.
    pub fn with_provider(config: AppConfig, data_dir: &Path, provider: BoxLlmProvider) -> Self {
        let store: SharedUserStore = Arc::new(JsonUserStore::new(data_dir.join(&config.users_file)));

        Self {
            account_service: Arc::new(AccountService::new(Arc::clone(&store), PlaintextVerifier)),
            points_service: Arc::new(PointsService::new(store)),
            assistant_service: Arc::new(AssistantService::new(provider)),
            sessions: Arc::new(MemorySessionStore::new()),
            config,
        }
    }
}
