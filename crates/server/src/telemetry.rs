//! Metrics wiring
//!
//! Metric names, the per-message match recording and the Prometheus recorder
//! served at `/metrics`. Without an installed recorder every `metrics` call
//! is a no-op.

use matcher::MatchOutcome;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

pub const MATCH_DURATION_SECONDS: &str = "lineqa_match_duration_seconds";
pub const CORPUS_LINES: &str = "lineqa_corpus_lines";
pub const MESSAGES_TOTAL: &str = "lineqa_messages_total";
pub const CORPUS_FAILURES_TOTAL: &str = "lineqa_corpus_failures_total";

/// Record one answer selection: scoring latency, corpus size and outcome
pub fn record_match(latency: Duration, candidates: usize, outcome: &MatchOutcome) {
    metrics::histogram!(MATCH_DURATION_SECONDS).record(latency.as_secs_f64());
    metrics::histogram!(CORPUS_LINES).record(candidates as f64);
    metrics::counter!(MESSAGES_TOTAL, "outcome" => outcome_label(outcome)).increment(1);
}

pub fn outcome_label(outcome: &MatchOutcome) -> &'static str {
    if outcome.is_match() {
        "matched"
    } else {
        "no_match"
    }
}

/// Install the process-wide Prometheus recorder
///
/// Can only succeed once per process.
pub fn install_metrics() -> anyhow::Result<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// Initialize structured JSON logging
pub fn init_tracing(log_level: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .try_init();

    if let Err(err) = result {
        tracing::warn!(error = %err, "tracing subscriber already installed");
    }
}
