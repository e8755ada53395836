use std::time::Duration;

pub const REQUESTS_TOTAL: &str = "athletics_client_requests_total";
pub const REQUEST_DURATION_SECONDS: &str = "athletics_client_request_duration_seconds";

pub struct Health {
    pub ready: bool,
}

impl Health {
    pub fn readiness() -> Self {
        Self { ready: true }
    }
}

/// Record one store request. A no-op until a metrics recorder is installed.
pub fn record_request(operation: &'static str, ok: bool, elapsed: Duration) {
    let outcome = if ok { "ok" } else { "error" };
    metrics::counter!(REQUESTS_TOTAL, "operation" => operation, "outcome" => outcome).increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, "operation" => operation)
        .record(elapsed.as_secs_f64());
}
