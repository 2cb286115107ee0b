//! ReWear Core - Business logic for the clothing-swap marketplace
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Item, Swap, Session)
//! - **ports**: Trait definitions for external dependencies (Store)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (JSON file store, in-memory store)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::JsonFileStore;
use config::Config;
use ports::Store;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{Item, ItemStatus, Session, Swap, SwapKind, SwapStatus, User};
pub use services::{EntryPoint, LogEvent, LoggingService};

/// Main context for ReWear operations
///
/// This is the primary entry point for all business logic. It holds the
/// store, configuration, and all services.
pub struct ReWearContext {
    pub config: Config,
    pub store: Arc<dyn Store>,
    pub identity_service: IdentityService,
    pub marketplace_service: MarketplaceService,
    pub swap_service: SwapService,
    pub admin_service: AdminService,
    pub status_service: StatusService,
    pub demo_service: DemoService,
}

impl ReWearContext {
    /// Create a new ReWear context rooted at `data_dir`
    ///
    /// Demo mode switches the backing document to `demo.json` so real data
    /// is never mixed with sample data.
    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let config = Config::load(data_dir)?;

        let data_path = data_dir.join(config.data_filename());
        let store: Arc<dyn Store> = Arc::new(JsonFileStore::open(&data_path)?);

        let identity_service = IdentityService::new(Arc::clone(&store), &config);
        let marketplace_service = MarketplaceService::new(Arc::clone(&store), &config);
        let swap_service = SwapService::new(Arc::clone(&store));
        let admin_service = AdminService::new(Arc::clone(&store));
        let status_service = StatusService::new(Arc::clone(&store));
        let demo_service = DemoService::new(data_dir);

        Ok(Self {
            config,
            store,
            identity_service,
            marketplace_service,
            swap_service,
            admin_service,
            status_service,
            demo_service,
        })
    }
}
