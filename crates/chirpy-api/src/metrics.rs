use std::sync::atomic::{AtomicU64, Ordering};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Hits on the static file tree since startup or the last reset.
#[derive(Debug, Default)]
pub struct VisitCounter {
    hits: AtomicU64,
}

impl VisitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}

/// Count every request that reaches the static file tree.
pub async fn count_visit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    state.hits.increment();
    next.run(req).await
}
