// ==============================================================================
// reference.rs - Reference Knowledge Table
// ==============================================================================
// Description: Builds the reference entry set from uploaded rows or bundled data
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================
// Format: one entry per row, 9 columns
//   gene_id, label, description, g1, d1, g2, d2, g3, d3
// where g1..g3 are the entry's three known genotypes and d1..d3 their
// interpretations.
// ==============================================================================

use thiserror::Error;
use tracing::info;

use crate::models::{GenotypeVariant, ReferenceEntry, Row, Table};

/// Columns expected per knowledge-table row
const ENTRY_COLUMNS: usize = 9;

/// Errors that can occur while building reference entries from rows
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("Row {row} has {found} columns, expected {ENTRY_COLUMNS}")]
    MissingColumns { row: usize, found: usize },

    #[error("Row {row} has empty gene identifier")]
    EmptyGeneId { row: usize },

    #[error("Row {row} has invalid genotype code '{value}' (expected two letters from A/C/G/T)")]
    InvalidGenotype { row: usize, value: String },

    #[error("Row {row} repeats genotype code '{value}'")]
    DuplicateGenotype { row: usize, value: String },
}

/// Build one reference entry from a knowledge-table row.
///
/// `row_number` is 1-based and only used for error reporting.
pub fn entry_from_row(row: &Row, row_number: usize) -> Result<ReferenceEntry, ReferenceError> {
    if row.len() < ENTRY_COLUMNS {
        return Err(ReferenceError::MissingColumns {
            row: row_number,
            found: row.len(),
        });
    }

    let gene_id = row[0].clone();
    if gene_id.is_empty() {
        return Err(ReferenceError::EmptyGeneId { row: row_number });
    }

    let mut variants = Vec::with_capacity(3);
    for i in 0..3 {
        let genotype = row[3 + i * 2].clone();
        let description = row[4 + i * 2].clone();

        if !is_valid_genotype(&genotype) {
            return Err(ReferenceError::InvalidGenotype {
                row: row_number,
                value: genotype,
            });
        }

        // The three genotype values of one entry are pairwise distinct
        if variants
            .iter()
            .any(|v: &GenotypeVariant| v.genotype.eq_ignore_ascii_case(&genotype))
        {
            return Err(ReferenceError::DuplicateGenotype {
                row: row_number,
                value: genotype,
            });
        }

        variants.push(GenotypeVariant {
            genotype,
            description,
        });
    }

    let variants: [GenotypeVariant; 3] = variants
        .try_into()
        .unwrap_or_else(|_| unreachable!("exactly three variants pushed"));

    Ok(ReferenceEntry {
        gene_id,
        label: row[1].clone(),
        description: row[2].clone(),
        variants,
    })
}

/// Build the full reference entry set from an uploaded table, in row order
pub fn entries_from_table(table: &Table) -> Result<Vec<ReferenceEntry>, ReferenceError> {
    let entries = table
        .iter()
        .enumerate()
        .map(|(index, row)| entry_from_row(row, index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    info!("Loaded {} reference entries", entries.len());

    Ok(entries)
}

fn is_valid_genotype(code: &str) -> bool {
    code.len() == 2
        && code
            .chars()
            .all(|c| matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T'))
}

/// Bundled reference panel, usable without an uploaded knowledge table.
/// Interchangeable with uploaded entries: both feed the same reconciler.
pub fn builtin_panel() -> Vec<ReferenceEntry> {
    let rows: Table = vec![
        string_row(&[
            "rs4988235",
            "MCM6",
            "Lactase persistence regulator",
            "CC",
            "Lactase non-persistent, likely lactose intolerant",
            "CT",
            "Intermediate lactase activity",
            "TT",
            "Lactase persistent",
        ]),
        string_row(&[
            "rs1801133",
            "MTHFR",
            "Folate metabolism enzyme",
            "CC",
            "Typical enzyme activity",
            "CT",
            "Mildly reduced enzyme activity",
            "TT",
            "Strongly reduced enzyme activity",
        ]),
        string_row(&[
            "rs1800562",
            "HFE",
            "Iron absorption regulator",
            "GG",
            "Typical iron absorption",
            "GA",
            "Carrier of one C282Y allele",
            "AA",
            "Elevated hereditary hemochromatosis risk",
        ]),
        string_row(&[
            "rs762551",
            "CYP1A2",
            "Caffeine metabolism enzyme",
            "AA",
            "Fast caffeine metabolizer",
            "AC",
            "Intermediate caffeine metabolizer",
            "CC",
            "Slow caffeine metabolizer",
        ]),
    ];

    entries_from_table(&rows).unwrap_or_else(|e| unreachable!("bundled panel is valid: {e}"))
}

fn string_row(cells: &[&str]) -> Row {
    cells.iter().map(|c| c.to_string()).collect()
}
