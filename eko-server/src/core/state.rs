use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::services::{LogNotifier, Notifier};
use crate::tickets::{SiteLocks, TicketService};

/// Shared server state, cloned into every handler
///
/// Holds the embedded database handle plus the long-lived services.
/// All fields are cheap to clone (Arc or handle types).
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT signing and validation
    pub jwt_service: Arc<JwtService>,
    /// Per-site submission locks
    pub site_locks: Arc<SiteLocks>,
    /// Outbound notification channel
    pub notifier: Arc<dyn Notifier>,
}

impl ServerState {
    /// Initialize the server state: working directory layout, the
    /// embedded database under `work_dir/database/eko.db`, then the
    /// services.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("eko.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service: Arc::new(JwtService::new(config.jwt.clone())),
            site_locks: Arc::new(SiteLocks::new()),
            notifier: Arc::new(LogNotifier),
        })
    }

    /// In-memory variant for tests: no files on disk, log-only
    /// notifications
    pub async fn initialize_in_memory(config: &Config) -> anyhow::Result<Self> {
        let db_service = DbService::new_in_memory().await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            jwt_service: Arc::new(JwtService::new(config.jwt.clone())),
            site_locks: Arc::new(SiteLocks::new()),
            notifier: Arc::new(LogNotifier),
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// Build the guard-facing ticket service over this state
    pub fn ticket_service(&self) -> TicketService {
        TicketService::new(
            self.db.clone(),
            self.site_locks.clone(),
            self.notifier.clone(),
            self.config.internal_email.clone(),
        )
    }
}
