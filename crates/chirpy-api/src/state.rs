use std::sync::Arc;

use tracing::error;

use chirpy_db::Database;
use chirpy_filter::Blocklist;

use crate::config::Config;
use crate::error::ApiError;
use crate::metrics::VisitCounter;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub config: Config,
    pub db: Database,
    pub blocklist: Blocklist,
    pub hits: VisitCounter,
}

impl AppStateInner {
    pub fn new(config: Config, db: Database) -> AppState {
        let blocklist = Blocklist::new(&config.blocklist);
        Arc::new(Self {
            config,
            db,
            blocklist,
            hits: VisitCounter::new(),
        })
    }
}

/// Run a blocking database call off the async runtime. Failures surface as
/// `ApiError::Upstream` carrying the underlying message.
pub async fn with_db<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Database) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state.db))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::upstream(e)
        })?
        .map_err(ApiError::upstream)
}
