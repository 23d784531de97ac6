//! Pattern aggregation and summary composition.
//!
//! Everything here is a pure function over snapshots; the caller takes the
//! snapshots from the store and no lock is held while these run.

use chrono::NaiveDate;
use healthjournal_core::entry::{PatternResult, SymptomEntry};
use std::collections::HashMap;

use crate::response::AnalyzePatternsResponse;

/// Width of the `=` rule under the summary header.
const SUMMARY_RULE_WIDTH: usize = 50;

/// Group entries by exact symptom name and compute count and mean severity.
///
/// Groups are ordered by count, highest first. Groups with equal counts keep
/// the order in which their name first appeared in `entries`.
pub fn aggregate_patterns(entries: &[SymptomEntry]) -> Vec<PatternResult> {
    // (name, count, severity sum) in first-seen order
    let mut groups: Vec<(&str, usize, i64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.symptom.as_str()).or_insert_with(|| {
            groups.push((entry.symptom.as_str(), 0, 0));
            groups.len() - 1
        });
        groups[slot].1 += 1;
        groups[slot].2 += entry.severity;
    }

    let mut patterns: Vec<PatternResult> = groups
        .into_iter()
        .map(|(symptom, count, sum)| PatternResult {
            symptom: symptom.to_string(),
            count,
            avg_severity: mean_to_tenths(sum, count),
        })
        .collect();

    // `sort_by` is stable, which is what keeps first-seen order on ties.
    patterns.sort_by(|a, b| b.count.cmp(&a.count));
    patterns
}

/// `sum / count` rounded to one decimal place, half away from zero.
///
/// Works in integer tenths so ties like 6.25 round the same way on every
/// platform (6.3), instead of depending on binary float representation.
pub fn mean_to_tenths(sum: i64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let count = count as i64;
    let scaled = sum * 10;
    let mut tenths = scaled / count;
    if 2 * (scaled % count).abs() >= count {
        tenths += scaled.signum();
    }
    tenths as f64 / 10.0
}

/// Run pattern analysis over a symptom snapshot.
pub fn analyze_snapshot(snapshot: &[SymptomEntry]) -> AnalyzePatternsResponse {
    if snapshot.is_empty() {
        return AnalyzePatternsResponse::NoData {
            message: "No symptoms logged yet".into(),
        };
    }

    AnalyzePatternsResponse::Success {
        patterns: aggregate_patterns(snapshot),
        total_entries: snapshot.len(),
    }
}

/// Render one pattern as `"<symptom>: <count>x (avg severity <avg>)"`.
pub fn format_pattern(pattern: &PatternResult) -> String {
    format!(
        "{}: {}x (avg severity {:.1})",
        pattern.symptom, pattern.count, pattern.avg_severity
    )
}

/// Compose the fixed-layout summary text.
///
/// The "Top symptoms" block is only present when `analysis` succeeded.
pub fn compose_summary(
    date: NaiveDate,
    symptom_count: usize,
    medication_count: usize,
    analysis: &AnalyzePatternsResponse,
    top: usize,
) -> String {
    let mut summary = format!("Health Summary - {}\n", date.format("%Y-%m-%d"));
    summary.push_str(&"=".repeat(SUMMARY_RULE_WIDTH));
    summary.push('\n');
    summary.push_str(&format!("Symptoms logged: {symptom_count}\n"));
    summary.push_str(&format!("Medications tracked: {medication_count}\n"));

    if let AnalyzePatternsResponse::Success { patterns, .. } = analysis {
        summary.push_str("\nTop symptoms:\n");
        for pattern in patterns.iter().take(top) {
            summary.push_str(&format!("  - {}\n", format_pattern(pattern)));
        }
    }

    summary
}
