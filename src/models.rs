// ==============================================================================
// models.rs - Report Data Models
// ==============================================================================
// Description: Data structures for client tables, reference entries and report rows
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================

use serde::{Deserialize, Serialize};

/// One parsed line of delimited input: an ordered sequence of trimmed cells.
/// No fixed arity is enforced; rows are independent sequences.
pub type Row = Vec<String>;

/// Ordered rows in source order. First column is the lookup key for client tables.
pub type Table = Vec<Row>;

/// Display sentinel for "no client row carries this gene"
pub const NOT_FOUND: &str = "Not found";

/// One known genotype of a reference entry and its interpretation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeVariant {
    /// Two-letter allele-pair code (e.g., "CT")
    pub genotype: String,

    /// Health interpretation shown when this genotype is observed
    pub description: String,
}

/// One gene of interest from the knowledge table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Reference-marker key (e.g., "rs4988235"), unique within the panel
    pub gene_id: String,

    /// Display name of the gene
    pub label: String,

    /// Free-text description of the gene
    pub description: String,

    /// The three possible observed genotypes, pairwise distinct
    pub variants: [GenotypeVariant; 3],
}

impl ReferenceEntry {
    /// Combined "Label, description" field for matched report rows.
    /// The description's first character is lower-cased after the comma;
    /// this is a string-formatting rule, not a semantic one.
    pub fn display_label(&self) -> String {
        let mut chars = self.description.chars();
        match chars.next() {
            Some(first) => format!(
                "{}, {}{}",
                self.label,
                first.to_lowercase(),
                chars.as_str()
            ),
            None => self.label.clone(),
        }
    }
}

/// Outcome of resolving an observed genotype against a reference entry.
///
/// `Uninterpretable` (client row found, no known genotype matched) and
/// `NotFound` (no client row at all) are deliberately distinct outcomes;
/// collapsing them loses the difference between "observed but
/// uninterpretable" and "absent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "description")]
pub enum Interpretation {
    /// A class member matched one of the entry's known genotypes
    Resolved(String),
    /// Client row found but its genotype matched no known variant
    Uninterpretable,
    /// No client row carries this gene
    NotFound,
}

impl Interpretation {
    /// Display value: resolved description, empty string, or the not-found sentinel
    pub fn display(&self) -> &str {
        match self {
            Interpretation::Resolved(description) => description,
            Interpretation::Uninterpretable => "",
            Interpretation::NotFound => NOT_FOUND,
        }
    }
}

/// One output row of the reconciliation report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Reference-marker key from the reference entry
    pub gene_id: String,

    /// Combined label for matched rows, plain label otherwise
    pub label: String,

    /// Genotype read from the matched client row; None when no row matched
    pub observed_genotype: Option<String>,

    /// Resolved interpretation of the observed genotype
    pub resolved: Interpretation,
}

impl ReportRow {
    /// Display value of the observed genotype column
    pub fn observed_display(&self) -> &str {
        self.observed_genotype.as_deref().unwrap_or(NOT_FOUND)
    }
}
