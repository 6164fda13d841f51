use crate::api::middleware::VisitLogger;

/// Shared state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub visit_logger: VisitLogger,
}

impl AppState {
    pub fn new(visit_logger: VisitLogger) -> Self {
        Self { visit_logger }
    }
}
