// HTTP surface: liveness check and the synchronous manual trigger.

use axum::{extract::State, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::cycle::{run_cycle, AppContext, CycleKind};

async fn home() -> &'static str {
    "COC War Bot is running"
}

/// Run one update cycle on the request path. Always 200; callers inspect
/// the body text to tell success from failure.
async fn manual_update(State(ctx): State<AppContext>) -> String {
    match run_cycle(&ctx, CycleKind::Manual).await {
        Ok(stamp) => format!("Manual update done at {stamp}"),
        Err(e) => {
            tracing::error!("manual update failed: {e}");
            format!("Error: {e}")
        }
    }
}

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/update", get(manual_update))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
