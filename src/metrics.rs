use prometheus::core::Collector;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
const REQUEST_LABELS: [&str; 3] = ["method", "status_code", "path"];

/// Request counters plus the registry they are exposed through.
///
/// Cloning is cheap and every clone increments the same series, so one
/// instance is built at startup and handed to both the middleware and the
/// `/metrics` route. Tests create their own to stay isolated.
#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
}

impl HttpMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::with_registry(Registry::new())
    }

    pub fn with_registry(registry: Registry) -> Result<Self, prometheus::Error> {
        let requests_total = IntCounterVec::new(
            Opts::new(HTTP_REQUESTS_TOTAL, "Total number of HTTP requests"),
            &REQUEST_LABELS,
        )?;
        registry.register(Box::new(requests_total.clone()))?;

        Ok(Self { registry, requests_total })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Count one finished request. Never fails the caller.
    pub fn record_request(&self, method: &str, status_code: u16, path: &str) {
        let status_code = status_code.to_string();
        match self
            .requests_total
            .get_metric_with_label_values(&[method, status_code.as_str(), path])
        {
            Ok(counter) => counter.inc(),
            Err(e) => tracing::warn!("Failed to record request metric: {}", e),
        }
    }

    /// Current value of one series, 0 when it was never incremented.
    pub fn request_count(&self, method: &str, status_code: u16, path: &str) -> u64 {
        let status_code = status_code.to_string();
        let wanted = [("method", method), ("status_code", status_code.as_str()), ("path", path)];

        self.requests_total
            .collect()
            .iter()
            .flat_map(|family| family.get_metric())
            .find(|metric| {
                wanted.iter().all(|(name, value)| {
                    metric
                        .get_label()
                        .iter()
                        .any(|label| label.get_name() == *name && label.get_value() == *value)
                })
            })
            .map(|metric| metric.get_counter().get_value() as u64)
            .unwrap_or(0)
    }

    /// Prometheus text exposition of everything in the registry.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
