// ==============================================================================
// output.rs - Report Output Formatting
// ==============================================================================
// Description: Renders preview, report and search results for display
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================

use anyhow::{Context, Result};
use crate::models::{ReportRow, Table};

/// Rows shown in a table preview
pub const PREVIEW_ROWS: usize = 5;

/// Render the first rows of a table plus the total row count
pub fn format_preview(table: &Table) -> String {
    let mut out = String::new();
    for row in table.iter().take(PREVIEW_ROWS) {
        out.push_str(&row.join(" | "));
        out.push('\n');
    }
    out.push_str(&format!("Total rows: {}\n", table.len()));
    out
}

/// Render the full report as a text table, one line per reference entry
pub fn format_report_text(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            row.gene_id,
            row.label,
            row.observed_display(),
            row.resolved.display(),
        ));
    }
    out
}

/// Serialize the report as JSON for web delivery
pub fn format_report_json(rows: &[ReportRow]) -> Result<String> {
    serde_json::to_string_pretty(rows).context("Failed to serialize report")
}
