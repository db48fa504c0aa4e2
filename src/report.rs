//! Plain-text rendering of run results.
//!
//! The metrics boundary: after a run completes, per-process and aggregate
//! metrics are formatted for whatever presentation layer the caller uses.
//! Averages are rendered with two decimal places.

use std::fmt::Write;

use crate::models::{AggregateMetrics, ExecutionPlan};

/// Formats the aggregate averages, two decimal places each.
pub fn format_summary(aggregate: &AggregateMetrics) -> String {
    format!(
        "Average Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}",
        aggregate.avg_waiting, aggregate.avg_turnaround
    )
}

/// Formats the per-process metrics of a plan as an aligned table.
pub fn format_metrics_table(plan: &ExecutionPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>12} {:>12} {:>10}",
        "Process", "Completion", "Turnaround", "Waiting"
    );
    for m in &plan.metrics {
        let _ = writeln!(
            out,
            "{:<10} {:>12} {:>12} {:>10}",
            m.process_id, m.completion, m.turnaround, m.waiting
        );
    }
    out
}
