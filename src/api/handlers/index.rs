//! Handler for the root path.

use axum::extract::State;

use crate::state::AppState;

/// Plain-text greeting naming the serving host.
///
/// `GET /` is also the path load balancers probe, so it must stay cheap.
pub async fn index_handler(State(state): State<AppState>) -> String {
    format!("Hello from {}\n", state.visit_logger.host())
}
