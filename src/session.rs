// ==============================================================================
// session.rs - Report Session State
// ==============================================================================
// Description: Owns the loaded tables and recomputes the report on every change
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================
// State model: each input table is owned exclusively by the session and
// replaced atomically (last-write-wins). Changing either input triggers a
// full synchronous recomputation of the report; report rows are derived
// data and never mutated incrementally. Boundary failures land in a single
// most-recent-error slot and never abort the process.
// ==============================================================================

use std::path::Path;

use tracing::{info, warn};

use crate::error::ReportError;
use crate::loader;
use crate::models::{ReferenceEntry, ReportRow, Table};
use crate::reconciler::{search, GenotypeReconciler};
use crate::reference;

/// Process-wide state holder for one report session
#[derive(Debug, Default)]
pub struct ReportSession {
    reconciler: GenotypeReconciler,
    client: Option<Table>,
    reference: Option<Vec<ReferenceEntry>>,
    report: Vec<ReportRow>,
    last_error: Option<ReportError>,
}

impl ReportSession {
    /// Session with no inputs loaded
    pub fn new() -> Self {
        Self {
            reconciler: GenotypeReconciler::new(),
            client: None,
            reference: None,
            report: Vec::new(),
            last_error: None,
        }
    }

    /// Session pre-seeded with the bundled reference panel
    pub fn with_builtin_reference() -> Self {
        let mut session = Self::new();
        session.set_reference_entries(reference::builtin_panel());
        session
    }

    /// Replace the client table and recompute the report
    pub fn set_client_table(&mut self, table: Table) {
        self.client = Some(table);
        self.recompute();
    }

    /// Replace the reference entry set and recompute the report
    pub fn set_reference_entries(&mut self, entries: Vec<ReferenceEntry>) {
        self.reference = Some(entries);
        self.recompute();
    }

    /// Accept an already-decoded spreadsheet table as the reference source.
    /// The decoding collaborator has dropped the header and blank rows.
    pub fn set_reference_rows(&mut self, table: &Table) -> Result<(), ReportError> {
        let entries = self.capture(
            reference::entries_from_table(table)
                .map_err(|e| ReportError::ParseFailure(e.to_string())),
        )?;
        self.set_reference_entries(entries);
        Ok(())
    }

    /// Load the client table from a CSV file, superseding any prior client data
    pub fn load_client(&mut self, path: &Path) -> Result<(), ReportError> {
        let table = self.capture(loader::load_client_table(path))?;
        self.set_client_table(table);
        Ok(())
    }

    /// Load the reference entries from a CSV file, superseding any prior reference data
    pub fn load_reference(&mut self, path: &Path, has_header: bool) -> Result<(), ReportError> {
        let entries = self.capture(loader::load_reference_entries(path, has_header))?;
        self.set_reference_entries(entries);
        Ok(())
    }

    /// The derived report; empty until both inputs are loaded
    pub fn report(&self) -> &[ReportRow] {
        &self.report
    }

    /// The loaded client table, if any (for preview rendering)
    pub fn client_table(&self) -> Option<&Table> {
        self.client.as_ref()
    }

    /// Report retrieval that surfaces which input is missing
    pub fn try_report(&mut self) -> Result<&[ReportRow], ReportError> {
        if self.client.is_none() || self.reference.is_none() {
            let err = ReportError::MissingInput(
                "load the client table and the knowledge table first",
            );
            self.last_error = Some(err.clone());
            return Err(err);
        }
        Ok(&self.report)
    }

    /// Exact-match first-column search over the loaded client table
    pub fn search(&mut self, key: &str) -> Result<String, ReportError> {
        if key.trim().is_empty() {
            let err = ReportError::MissingInput("enter a search value");
            self.last_error = Some(err.clone());
            return Err(err);
        }
        let Some(client) = self.client.as_ref() else {
            let err = ReportError::MissingInput("load the client table first");
            self.last_error = Some(err.clone());
            return Err(err);
        };
        match search(client, key) {
            Ok(result) => {
                self.last_error = None;
                Ok(result)
            }
            Err(err) => {
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Most recent boundary error, if the last operation failed
    pub fn last_error(&self) -> Option<&ReportError> {
        self.last_error.as_ref()
    }

    /// Full synchronous recomputation; no incremental update
    fn recompute(&mut self) {
        match (&self.reference, &self.client) {
            (Some(reference), Some(client)) => {
                self.report = self.reconciler.reconcile(reference, client);
                info!("Report recomputed: {} rows", self.report.len());
            }
            _ => self.report.clear(),
        }
    }

    /// Record a failure in the error slot, clear it on success
    fn capture<T>(&mut self, result: Result<T, ReportError>) -> Result<T, ReportError> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Ok(value)
            }
            Err(err) => {
                warn!("{err}");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }
}
