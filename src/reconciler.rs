// ==============================================================================
// reconciler.rs - Genotype Reconciliation Core
// ==============================================================================
// Description: Cross-references client rows against reference entries by gene id
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================
// Algorithm:
//   For each reference entry, in reference order:
//   - find the first client row whose first cell equals the gene id
//     (case-insensitive, linear scan, first match wins)
//   - no row        -> observed and resolved both "not found"
//   - row found     -> observed genotype is the row's 4th cell; walk its
//                      equivalence class in class order and resolve to the
//                      first member matching one of the entry's three known
//                      genotypes; no member matching -> uninterpretable
// ==============================================================================

use tracing::debug;

use crate::equivalence::EquivalenceTable;
use crate::error::ReportError;
use crate::models::{Interpretation, ReferenceEntry, ReportRow, Row, Table};

/// Column of the client row that carries the observed genotype
const GENOTYPE_COLUMN: usize = 3;

/// Reconciles a client table against a reference entry set
#[derive(Debug, Clone, Default)]
pub struct GenotypeReconciler {
    equivalence: EquivalenceTable,
}

impl GenotypeReconciler {
    pub fn new() -> Self {
        Self {
            equivalence: EquivalenceTable::new(),
        }
    }

    /// Produce one report row per reference entry, in reference order.
    ///
    /// Pure function of its inputs: the same reference set and client table
    /// always produce the same report.
    pub fn reconcile(&self, reference: &[ReferenceEntry], client: &Table) -> Vec<ReportRow> {
        reference
            .iter()
            .map(|entry| self.reconcile_entry(entry, client))
            .collect()
    }

    fn reconcile_entry(&self, entry: &ReferenceEntry, client: &Table) -> ReportRow {
        let Some(row) = find_row(client, &entry.gene_id) else {
            debug!("No client row for gene {}", entry.gene_id);
            return ReportRow {
                gene_id: entry.gene_id.clone(),
                label: entry.label.clone(),
                observed_genotype: None,
                resolved: Interpretation::NotFound,
            };
        };

        // A short client row reads as an empty observed genotype, which
        // resolves through the singleton-class path below.
        let observed = row
            .get(GENOTYPE_COLUMN)
            .cloned()
            .unwrap_or_default();

        let resolved = self.resolve(entry, &observed);

        ReportRow {
            gene_id: entry.gene_id.clone(),
            label: entry.display_label(),
            observed_genotype: Some(observed),
            resolved,
        }
    }

    /// Walk the observed genotype's equivalence class in class order and
    /// resolve to the first member equal to one of the entry's known
    /// genotypes.
    fn resolve(&self, entry: &ReferenceEntry, observed: &str) -> Interpretation {
        for member in self.equivalence.class_of(observed) {
            for variant in &entry.variants {
                if variant.genotype.eq_ignore_ascii_case(&member) {
                    return Interpretation::Resolved(variant.description.clone());
                }
            }
        }
        Interpretation::Uninterpretable
    }
}

/// First client row whose first cell equals `key`, case-insensitively.
/// No uniqueness is assumed or enforced on the client table.
pub fn find_row<'a>(client: &'a Table, key: &str) -> Option<&'a Row> {
    client
        .iter()
        .find(|row| !row.is_empty() && row[0].eq_ignore_ascii_case(key))
}

/// Exact-match first-column search over the client table.
///
/// Reports the matched row's 2nd through 4th cells joined with ", ";
/// rows carrying only the key cell count as no match.
pub fn search(client: &Table, key: &str) -> Result<String, ReportError> {
    match find_row(client, key) {
        Some(row) if row.len() > 1 => {
            Ok(row[1..row.len().min(GENOTYPE_COLUMN + 1)].join(", "))
        }
        _ => Err(ReportError::NoMatch(key.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenotypeVariant;

    fn entry(gene_id: &str, genotypes: [(&str, &str); 3]) -> ReferenceEntry {
        ReferenceEntry {
            gene_id: gene_id.to_string(),
            label: "GENE".to_string(),
            description: "Some gene".to_string(),
            variants: genotypes.map(|(genotype, description)| GenotypeVariant {
                genotype: genotype.to_string(),
                description: description.to_string(),
            }),
        }
    }

    fn client_row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_not_found_path() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("rs1", [("CC", "a"), ("CT", "b"), ("TT", "c")])];
        let client = vec![client_row(&["rs2", "1", "100", "CC"])];

        let report = reconciler.reconcile(&reference, &client);

        assert_eq!(report.len(), 1);
        assert_eq!(report[0].gene_id, "rs1");
        assert_eq!(report[0].label, "GENE");
        assert_eq!(report[0].observed_genotype, None);
        assert_eq!(report[0].resolved, Interpretation::NotFound);
        assert_eq!(report[0].observed_display(), "Not found");
        assert_eq!(report[0].resolved.display(), "Not found");
    }

    #[test]
    fn test_direct_match_path() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("rs1", [("CC", "descA"), ("CT", "descB"), ("TT", "descC")])];
        let client = vec![client_row(&["rs1", "x", "y", "CC"])];

        let report = reconciler.reconcile(&reference, &client);

        assert_eq!(report[0].observed_genotype.as_deref(), Some("CC"));
        assert_eq!(
            report[0].resolved,
            Interpretation::Resolved("descA".to_string())
        );
        // Matched rows carry the combined label
        assert_eq!(report[0].label, "GENE, some gene");
    }

    #[test]
    fn test_equivalence_match_path() {
        // Entry knows GG but not CC; observed CC resolves through the
        // {CC, GG} strand class.
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("rs1", [("GG", "descA"), ("GA", "descB"), ("AA", "descC")])];
        let client = vec![client_row(&["rs1", "x", "y", "CC"])];

        let report = reconciler.reconcile(&reference, &client);

        assert_eq!(
            report[0].resolved,
            Interpretation::Resolved("descA".to_string())
        );
    }

    #[test]
    fn test_uninterpretable_is_distinct_from_not_found() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("rs1", [("CC", "a"), ("CT", "b"), ("TT", "c")])];
        // AT has no equivalence entry and matches no known genotype
        let client = vec![client_row(&["rs1", "x", "y", "AT"])];

        let report = reconciler.reconcile(&reference, &client);

        assert_eq!(report[0].observed_genotype.as_deref(), Some("AT"));
        assert_eq!(report[0].resolved, Interpretation::Uninterpretable);
        assert_eq!(report[0].resolved.display(), "");
    }

    #[test]
    fn test_gene_id_match_is_case_insensitive() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("RS1", [("CC", "a"), ("CT", "b"), ("TT", "c")])];
        let client = vec![client_row(&["rs1", "x", "y", "TT"])];

        let report = reconciler.reconcile(&reference, &client);
        assert_eq!(report[0].resolved, Interpretation::Resolved("c".to_string()));
    }

    #[test]
    fn test_genotype_match_is_case_insensitive() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("rs1", [("cc", "a"), ("ct", "b"), ("tt", "c")])];
        let client = vec![client_row(&["rs1", "x", "y", "Ct"])];

        let report = reconciler.reconcile(&reference, &client);
        assert_eq!(report[0].resolved, Interpretation::Resolved("b".to_string()));
    }

    #[test]
    fn test_first_client_match_wins() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("rs1", [("CC", "a"), ("CT", "b"), ("TT", "c")])];
        let client = vec![
            client_row(&["rs1", "x", "y", "CC"]),
            client_row(&["rs1", "x", "y", "TT"]),
        ];

        let report = reconciler.reconcile(&reference, &client);
        assert_eq!(report[0].resolved, Interpretation::Resolved("a".to_string()));
    }

    #[test]
    fn test_output_order_follows_reference_order() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![
            entry("rs2", [("CC", "a"), ("CT", "b"), ("TT", "c")]),
            entry("rs1", [("CC", "d"), ("CT", "e"), ("TT", "f")]),
        ];
        // Client rows in the opposite order
        let client = vec![
            client_row(&["rs1", "x", "y", "CC"]),
            client_row(&["rs2", "x", "y", "TT"]),
        ];

        let report = reconciler.reconcile(&reference, &client);
        assert_eq!(report[0].gene_id, "rs2");
        assert_eq!(report[1].gene_id, "rs1");
    }

    #[test]
    fn test_short_client_row_is_uninterpretable() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("rs1", [("CC", "a"), ("CT", "b"), ("TT", "c")])];
        let client = vec![client_row(&["rs1", "x"])];

        let report = reconciler.reconcile(&reference, &client);
        assert_eq!(report[0].observed_genotype.as_deref(), Some(""));
        assert_eq!(report[0].resolved, Interpretation::Uninterpretable);
    }

    #[test]
    fn test_reconcile_is_deterministic() {
        let reconciler = GenotypeReconciler::new();
        let reference = vec![entry("rs1", [("CC", "a"), ("CT", "b"), ("TT", "c")])];
        let client = vec![client_row(&["rs1", "x", "y", "GG"])];

        assert_eq!(
            reconciler.reconcile(&reference, &client),
            reconciler.reconcile(&reference, &client)
        );
    }

    #[test]
    fn test_search_case_insensitive() {
        let client = vec![
            client_row(&["rs1", "A", "B", "C"]),
            client_row(&["rs2", "D", "E", "F"]),
        ];
        assert_eq!(search(&client, "RS1").unwrap(), "A, B, C");
        assert_eq!(search(&client, "rs2").unwrap(), "D, E, F");
    }

    #[test]
    fn test_search_absent_key() {
        let client = vec![client_row(&["rs1", "A", "B", "C"])];
        assert_eq!(
            search(&client, "rs9"),
            Err(ReportError::NoMatch("rs9".to_string()))
        );
    }

    #[test]
    fn test_search_short_rows() {
        let client = vec![client_row(&["rs1", "A"]), client_row(&["rs2"])];
        // Shorter rows report what they have
        assert_eq!(search(&client, "rs1").unwrap(), "A");
        // A row with only the key cell counts as no match
        assert_eq!(
            search(&client, "rs2"),
            Err(ReportError::NoMatch("rs2".to_string()))
        );
    }
}
