//! Record Validator: parses a serialized container of catalog records and
//! applies field-level rules before the bytes cross the trust boundary.
//!
//! The validator inspects only the *first* occurrence of a repeated field
//! ([`parser::first_matching_child`]); the downstream consumer binds the
//! *last*. On success the caller forwards the original bytes unchanged;
//! nothing is ever re-serialized here, which is precisely why the two sides
//! can disagree about what was validated.

pub mod checks;
pub mod error;
pub mod issue;
pub mod parser;
pub mod payload;

pub use error::{Result, ValidateError};
pub use issue::Issue;
pub use payload::{ReportPayload, report_json, report_payload};

use catalog_model::ValidationReport;

/// Validate a serialized container.
///
/// Returns the mapping from 1-based record position to error strings; an
/// empty mapping means every record passed. A malformed serialization aborts
/// the whole pass with no partial results.
pub fn validate_catalog(input: &str) -> Result<ValidationReport> {
    let records = parser::parse_container(input)?;
    let mut report = ValidationReport::new();
    for (index, record) in records.iter().enumerate() {
        let position = index + 1;
        for issue in checks::run(record) {
            report.push(position, issue.message());
        }
    }
    tracing::debug!(
        records = records.len(),
        errors = report.error_count(),
        "validated container"
    );
    Ok(report)
}
