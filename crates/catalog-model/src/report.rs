use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Validation report for one container.
///
/// Maps record position (1-based, container order) to the error strings
/// recorded against that record. An empty mapping means every record passed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub errors: BTreeMap<usize, Vec<String>>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against a 1-based record position.
    pub fn push(&mut self, position: usize, message: String) {
        self.errors.entry(position).or_default().push(message);
    }

    /// True when no record produced any error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of error strings across all records.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Errors recorded against one record position, if any.
    pub fn record_errors(&self, position: usize) -> &[String] {
        self.errors
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
