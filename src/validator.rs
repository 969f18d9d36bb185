// ==============================================================================
// validator.rs - Input File Validation
// ==============================================================================
// Description: Validates uploaded table files by role before parsing
// Author: Matt Barham
// Created: 2026-06-02
// Modified: 2026-08-19
// Version: 1.0.0
// ==============================================================================
// The check is allowlist-by-extension only: the expected file class is
// decided by filename, not by content sniffing. Content problems surface
// later as parse failures.
// ==============================================================================

use std::path::Path;

use tracing::{debug, info};

use crate::error::ReportError;

const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024; // 50 MB

/// Role a selected file plays in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    /// Client genotype data, delimited text (.csv)
    ClientData,
    /// Reference knowledge table, binary spreadsheet (.xlsx/.xls)
    KnowledgeTable,
    /// Reference knowledge table, delimited text (.csv)
    KnowledgeTableText,
}

impl FileRole {
    fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            FileRole::ClientData | FileRole::KnowledgeTableText => &["csv"],
            FileRole::KnowledgeTable => &["xlsx", "xls"],
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            FileRole::ClientData | FileRole::KnowledgeTableText => "CSV",
            FileRole::KnowledgeTable => "XLSX or XLS",
        }
    }
}

/// Record of a file that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedFile {
    pub original_name: String,
    pub extension: String,
    pub size: u64,
    pub validated_at: chrono::DateTime<chrono::Utc>,
}

/// Validates selected files against the role's extension allowlist
#[derive(Debug, Clone, Copy, Default)]
pub struct FileValidator;

impl FileValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a selected file for `role`.
    ///
    /// Rejects files whose extension is outside the role's allowlist before
    /// any parsing is attempted, and files over the size cap.
    pub fn validate(&self, path: &Path, role: FileRole) -> Result<ValidatedFile, ReportError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| ReportError::InvalidFileType {
                expected: role.expected(),
                file_name: path.display().to_string(),
            })?;

        info!("Validating file: {}", file_name);

        let extension = file_name
            .rsplit('.')
            .next()
            .map(str::to_lowercase)
            .unwrap_or_default();

        if file_name.rfind('.').is_none()
            || !role.allowed_extensions().contains(&extension.as_str())
        {
            return Err(ReportError::InvalidFileType {
                expected: role.expected(),
                file_name,
            });
        }
        debug!("Extension check passed: {}", extension);

        let metadata = std::fs::metadata(path)
            .map_err(|e| ReportError::ParseFailure(format!("Failed to read metadata: {e}")))?;

        if metadata.len() > MAX_FILE_SIZE {
            return Err(ReportError::ParseFailure(format!(
                "File too large: {} bytes (max: {} bytes)",
                metadata.len(),
                MAX_FILE_SIZE
            )));
        }
        debug!("Size check passed: {} bytes", metadata.len());

        Ok(ValidatedFile {
            original_name: file_name,
            extension,
            size: metadata.len(),
            validated_at: chrono::Utc::now(),
        })
    }
}
