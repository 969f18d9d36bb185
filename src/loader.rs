// ==============================================================================
// loader.rs - Text Source Acquisition
// ==============================================================================
// Description: Reads and parses delimited text sources for the session
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================
// Binary spreadsheet decoding stays outside this crate: the decoding
// collaborator hands the session already-decoded rows (first sheet, header
// and blank rows dropped). This module only covers text sources.
// ==============================================================================

use std::path::Path;

use tracing::{info, warn};

use crate::error::ReportError;
use crate::models::{ReferenceEntry, Table};
use crate::parsers::{DelimitedTextParser, ParseOptions};
use crate::reference::entries_from_table;
use crate::validator::{FileRole, FileValidator};

/// Read a client CSV file into a table.
///
/// Blank rows are filtered; client files carry no header row. A failed read
/// or decode surfaces as `ParseFailure` and the user re-selects a file.
pub fn load_client_table(path: &Path) -> Result<Table, ReportError> {
    let validated = FileValidator::new().validate(path, FileRole::ClientData)?;

    let text = read_text(path)?;
    let table = DelimitedTextParser::new().parse(
        &text,
        ParseOptions {
            filter_blank_rows: true,
            drop_header_row: false,
        },
    );

    info!(
        "Loaded client table '{}': {} rows",
        validated.original_name,
        table.len()
    );

    Ok(table)
}

/// Read a reference knowledge CSV file into reference entries.
///
/// `has_header` is caller-specified, never auto-detected.
pub fn load_reference_entries(
    path: &Path,
    has_header: bool,
) -> Result<Vec<ReferenceEntry>, ReportError> {
    let validated = FileValidator::new().validate(path, FileRole::KnowledgeTableText)?;

    let text = read_text(path)?;
    let table = DelimitedTextParser::new().parse(
        &text,
        ParseOptions {
            filter_blank_rows: true,
            drop_header_row: has_header,
        },
    );

    let entries = entries_from_table(&table)
        .map_err(|e| ReportError::ParseFailure(e.to_string()))?;

    info!(
        "Loaded knowledge table '{}': {} entries",
        validated.original_name,
        entries.len()
    );

    Ok(entries)
}

fn read_text(path: &Path) -> Result<String, ReportError> {
    std::fs::read_to_string(path).map_err(|e| {
        warn!("Failed to read {}: {}", path.display(), e);
        ReportError::ParseFailure(format!("Failed to read {}: {e}", path.display()))
    })
}
