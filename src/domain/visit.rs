//! Request classification and the per-request visit record.

use std::fmt;

/// Marker substring sent by the AWS Elastic Load Balancer health checker.
pub const HEALTH_CHECK_MARKER: &str = "ELB-HealthChecker";

/// Timestamp pattern for visit records (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Classification of an inbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitKind {
    /// Load balancer liveness probe. Does not advance the counter.
    HealthCheck,
    /// Any other request, including ones without a `User-Agent`.
    UserVisit,
}

impl VisitKind {
    /// Classifies a request by its `User-Agent` header value.
    ///
    /// Matching is a case-sensitive substring search for
    /// [`HEALTH_CHECK_MARKER`]. A missing header is a user visit.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// assert_eq!(VisitKind::classify(Some("ELB-HealthChecker/2.0")), VisitKind::HealthCheck);
    /// assert_eq!(VisitKind::classify(Some("Mozilla/5.0")), VisitKind::UserVisit);
    /// assert_eq!(VisitKind::classify(None), VisitKind::UserVisit);
    /// ```
    pub fn classify(user_agent: Option<&str>) -> Self {
        match user_agent {
            Some(ua) if ua.contains(HEALTH_CHECK_MARKER) => Self::HealthCheck,
            _ => Self::UserVisit,
        }
    }

    /// Label written to the `type` field of the log line.
    pub fn label(self) -> &'static str {
        match self {
            Self::HealthCheck => "HEALTH_CHECK",
            Self::UserVisit => "USER_VISIT",
        }
    }
}

impl fmt::Display for VisitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Joins a request path and optional query string.
///
/// A present query (even an empty one) is appended after `?`.
pub fn full_path(path: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    }
}

/// One observed request, ready to be logged.
///
/// The [`Display`](fmt::Display) form is the log line itself:
///
/// ```text
/// host=web-1, type=USER_VISIT, time=2024-05-01 12:00:00, path=/?ref=x, counter=2, ua=Mozilla/5.0
/// ```
///
/// Field order is fixed. An absent user agent renders as an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub host: String,
    pub kind: VisitKind,
    pub time: String,
    pub path: String,
    pub counter: u64,
    pub user_agent: Option<String>,
}

impl fmt::Display for VisitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "host={}, type={}, time={}, path={}, counter={}, ua={}",
            self.host,
            self.kind,
            self.time,
            self.path,
            self.counter,
            self.user_agent.as_deref().unwrap_or_default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_health_checker() {
        assert_eq!(
            VisitKind::classify(Some("ELB-HealthChecker/2.0")),
            VisitKind::HealthCheck
        );
        assert_eq!(
            VisitKind::classify(Some("prefix ELB-HealthChecker suffix")),
            VisitKind::HealthCheck
        );
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(
            VisitKind::classify(Some("elb-healthchecker/2.0")),
            VisitKind::UserVisit
        );
    }

    #[test]
    fn test_classify_missing_or_other_agent() {
        assert_eq!(VisitKind::classify(None), VisitKind::UserVisit);
        assert_eq!(VisitKind::classify(Some("")), VisitKind::UserVisit);
        assert_eq!(VisitKind::classify(Some("Mozilla/5.0")), VisitKind::UserVisit);
    }

    #[test]
    fn test_full_path() {
        assert_eq!(full_path("/api/items", None), "/api/items");
        assert_eq!(full_path("/api/items", Some("id=5")), "/api/items?id=5");
        assert_eq!(full_path("/", Some("ref=x")), "/?ref=x");
    }

    #[test]
    fn test_record_display_field_order() {
        let record = VisitRecord {
            host: "web-1".to_string(),
            kind: VisitKind::UserVisit,
            time: "2024-05-01 12:00:00".to_string(),
            path: "/?ref=x".to_string(),
            counter: 2,
            user_agent: Some("Mozilla/5.0".to_string()),
        };

        assert_eq!(
            record.to_string(),
            "host=web-1, type=USER_VISIT, time=2024-05-01 12:00:00, path=/?ref=x, counter=2, ua=Mozilla/5.0"
        );
    }

    #[test]
    fn test_record_display_without_user_agent() {
        let record = VisitRecord {
            host: "unknown-host".to_string(),
            kind: VisitKind::HealthCheck,
            time: "2024-05-01 12:00:00".to_string(),
            path: "/".to_string(),
            counter: 0,
            user_agent: None,
        };

        assert!(record.to_string().ends_with(", counter=0, ua="));
        assert!(record.to_string().contains("type=HEALTH_CHECK"));
    }
}
