use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{suggest, Ctx};

/// Initialize HTTP routes.
pub fn init_handlers(ctx: Arc<Ctx>) -> Router {
    Router::new()
        .route("/api/suggest", get(suggest::suggest))
        .route("/api/select", post(suggest::select))
        .route("/api/words/{word}", get(suggest::get_word))
        .route("/api/stats", get(suggest::get_stats))
        .with_state(ctx)
}
