//! Visit counting and request logging middleware.
//!
//! Every request passing through [`RequestLogger`] is classified by its
//! `User-Agent`, counted when it is a user visit, and logged as a single
//! `INFO` line before the inner service is called:
//!
//! ```text
//! host=web-1, type=USER_VISIT, time=2024-05-01 12:00:00, path=/?ref=x, counter=2, ua=Mozilla/5.0
//! host=web-1, type=HEALTH_CHECK, time=2024-05-01 12:00:05, path=/, counter=2, ua=ELB-HealthChecker/2.0
//! ```
//!
//! The layer is a plain tower [`Layer`], so it works with any tower-based
//! server. The request, response, and error of the inner service are passed
//! through unchanged.
//!
//! # Integration
//!
//! ```rust,ignore
//! let logger = VisitLogger::new(resolve_hostname());
//! let app = Router::new()
//!     .route("/", get(index_handler))
//!     .layer(RequestLoggerLayer::new(logger));
//! ```

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::http::{Request, header};
use tower::{Layer, Service};

use crate::domain::visit::{TIMESTAMP_FORMAT, full_path};
use crate::domain::{VisitCounter, VisitKind, VisitRecord};

/// `tracing` target of the per-request visit line.
pub const VISIT_LOG_TARGET: &str = "request_counter::visits";

/// Shared visit logging state: the host name and the visit counter.
///
/// Cheap to clone; clones share the same counter.
#[derive(Debug, Clone)]
pub struct VisitLogger {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    host: String,
    counter: Arc<VisitCounter>,
}

impl VisitLogger {
    /// Creates a logger with a fresh counter starting at zero.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_counter(host, Arc::new(VisitCounter::new()))
    }

    /// Creates a logger backed by an existing counter.
    pub fn with_counter(host: impl Into<String>, counter: Arc<VisitCounter>) -> Self {
        Self {
            inner: Arc::new(Inner {
                host: host.into(),
                counter,
            }),
        }
    }

    /// Host name written to every log line.
    pub fn host(&self) -> &str {
        &self.inner.host
    }

    /// Number of user visits seen so far.
    pub fn visits(&self) -> u64 {
        self.inner.counter.current()
    }

    /// Classifies the request and updates the counter.
    ///
    /// User visits increment the counter and carry the new value; health
    /// checks carry the current value and leave the counter untouched.
    pub fn record<B>(&self, req: &Request<B>) -> VisitRecord {
        let user_agent = req
            .headers()
            .get(header::USER_AGENT)
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

        let kind = VisitKind::classify(user_agent.as_deref());

        let counter = match kind {
            VisitKind::UserVisit => self.inner.counter.increment(),
            VisitKind::HealthCheck => self.inner.counter.current(),
        };

        VisitRecord {
            host: self.inner.host.clone(),
            kind,
            time: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
            path: full_path(req.uri().path(), req.uri().query()),
            counter,
            user_agent,
        }
    }

    /// Records the request and emits the visit line at `INFO`.
    pub fn observe<B>(&self, req: &Request<B>) -> VisitRecord {
        let record = self.record(req);
        tracing::info!(target: VISIT_LOG_TARGET, "{}", record);
        record
    }
}

/// [`Layer`] that wraps services in [`RequestLogger`].
#[derive(Debug, Clone)]
pub struct RequestLoggerLayer {
    logger: VisitLogger,
}

impl RequestLoggerLayer {
    pub fn new(logger: VisitLogger) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for RequestLoggerLayer {
    type Service = RequestLogger<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogger {
            inner,
            logger: self.logger.clone(),
        }
    }
}

/// Middleware service that logs each request, then calls `inner` exactly once.
#[derive(Debug, Clone)]
pub struct RequestLogger<S> {
    inner: S,
    logger: VisitLogger,
}

impl<S> RequestLogger<S> {
    pub fn new(inner: S, logger: VisitLogger) -> Self {
        Self { inner, logger }
    }
}

impl<S, B> Service<Request<B>> for RequestLogger<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        self.logger.observe(&req);
        self.inner.call(req)
    }
}
