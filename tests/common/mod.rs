#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, header};
use request_counter::api::middleware::VisitLogger;
use request_counter::routes::app_router;
use request_counter::state::AppState;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink for asserting on emitted visit lines.
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Installs a capturing subscriber as the thread default.
    pub fn install(&self) -> DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_max_level(tracing::Level::INFO)
            .finish();

        tracing::subscriber::set_default(subscriber)
    }

    /// Visit lines in emission order, starting at `host=`.
    pub fn visit_lines(&self) -> Vec<String> {
        let buf = self.buf.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .filter_map(|line| line.find("host=").map(|i| line[i..].to_string()))
            .collect()
    }

    /// Visit lines split into their key/value fields.
    pub fn visits(&self) -> Vec<HashMap<String, String>> {
        self.visit_lines().iter().map(|l| parse_fields(l)).collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Splits `host=a, type=b, ..., ua=c` into fields; `ua` keeps any commas.
pub fn parse_fields(line: &str) -> HashMap<String, String> {
    line.splitn(6, ", ")
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn create_test_state(host: &str) -> AppState {
    AppState::new(VisitLogger::new(host))
}

pub fn create_test_app(state: AppState) -> axum::Router {
    app_router(state)
}

pub fn get(uri: &str, user_agent: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(ua) = user_agent {
        builder = builder.header(header::USER_AGENT, ua);
    }
    builder.body(Body::empty()).unwrap()
}
