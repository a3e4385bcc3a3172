use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub const REASON_TRANSPORT: &str = "transport";
pub const REASON_STATUS: &str = "status";
pub const REASON_DECODE: &str = "decode";

/// Counters for one client instance, kept in a registry of their own.
#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token metrics
    pub token_refresh_requests: IntCounter,
    pub token_refresh_failures: IntCounterVec,
    pub token_refresh_duration: HistogramVec,
    pub token_cache_hits: IntCounter,

    // API metrics
    pub api_requests: IntCounterVec,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some("interbank".into()), None)?;

        let metrics = Self {
            token_refresh_requests: IntCounter::new("token_refresh_requests_total", "Token endpoint requests")?,
            token_refresh_failures: IntCounterVec::new(
                Opts::new("token_refresh_failures_total", "Token refresh failures by reason"),
                &["reason"],
            )?,
            token_refresh_duration: HistogramVec::new(
                HistogramOpts::new("token_refresh_duration_seconds", "Token refresh duration seconds")
                    .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
                &["outcome"],
            )?,
            token_cache_hits: IntCounter::new("token_cache_hits_total", "Token requests served from cache")?,

            api_requests: IntCounterVec::new(
                Opts::new("api_requests_total", "API requests by method and status class"),
                &["method", "status"],
            )?,

            registry,
        };

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_refresh_requests.clone()))?;
        reg.register(Box::new(metrics.token_refresh_failures.clone()))?;
        reg.register(Box::new(metrics.token_refresh_duration.clone()))?;
        reg.register(Box::new(metrics.token_cache_hits.clone()))?;
        reg.register(Box::new(metrics.api_requests.clone()))?;

        Ok(metrics)
    }

    /// Status label: `2xx`, `4xx`, ... or `transport` when nothing was received.
    pub fn status_class(status: u16) -> String {
        if status == 0 {
            REASON_TRANSPORT.to_owned()
        } else {
            format!("{}xx", status / 100)
        }
    }

    /// Prometheus text exposition of every metric in the registry.
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        if encoder.encode(&self.registry.gather(), &mut buffer).is_err() {
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}
