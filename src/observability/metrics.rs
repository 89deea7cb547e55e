//! Metrics emitted through the `metrics` facade.
//!
//! # Metrics
//! - `vfx_remote_calls_total` (counter): ledger/explorer calls by endpoint, outcome
//! - `vfx_remote_call_duration_seconds` (histogram): call latency by endpoint
//! - `vfx_pipeline_runs_total` (counter): transaction pipeline runs by outcome, step

use std::time::Duration;

use crate::error::PipelineStep;

/// Record one remote call.
pub fn record_remote_call(endpoint: &'static str, success: bool, elapsed: Duration) {
    let outcome = if success { "success" } else { "failure" };
    metrics::counter!("vfx_remote_calls_total", "endpoint" => endpoint, "outcome" => outcome)
        .increment(1);
    metrics::histogram!("vfx_remote_call_duration_seconds", "endpoint" => endpoint)
        .record(elapsed.as_secs_f64());
}

/// Record a finished pipeline run. `failed_at` is `None` on success.
pub fn record_pipeline_run(failed_at: Option<PipelineStep>, dry_run: bool) {
    let (outcome, step) = match failed_at {
        None if dry_run => ("dry_run", "none"),
        None => ("sent", "none"),
        Some(step) => ("failed", step.as_str()),
    };
    metrics::counter!("vfx_pipeline_runs_total", "outcome" => outcome, "step" => step)
        .increment(1);
}
