use std::sync::Arc;

use tracing::error;

use naija_db::Database;

use crate::config::Config;
use crate::error::ApiError;
use crate::middleware::AuthGate;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub gate: AuthGate,
}

impl AppStateInner {
    pub fn new(db: Database, config: &Config) -> Self {
        Self {
            db,
            gate: AuthGate::new(&config.jwt_secret, config.token_ttl_secs),
        }
    }
}

/// Runs blocking DB work off the async runtime.
pub async fn with_db<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.into())
        })?
}
