//! Serializable validation report payload.
//!
//! Reporting callers get a versioned JSON shape rather than the in-memory
//! mapping, so the schema can evolve without breaking consumers of the
//! report itself.

use serde::Serialize;

use catalog_model::ValidationReport;

const REPORT_SCHEMA: &str = "catalog-relay.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub record_count: usize,
    pub reports: Vec<RecordReportSummary>,
}

#[derive(Debug, Serialize)]
pub struct RecordReportSummary {
    pub position: usize,
    pub error_count: usize,
    pub errors: Vec<String>,
}

/// Build the payload for one validation pass over `record_count` records.
///
/// Only records that produced errors appear in `reports`.
pub fn report_payload(report: &ValidationReport, record_count: usize) -> ReportPayload {
    ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        record_count,
        reports: report
            .errors
            .iter()
            .map(|(position, errors)| RecordReportSummary {
                position: *position,
                error_count: errors.len(),
                errors: errors.clone(),
            })
            .collect(),
    }
}

/// Serialize the payload to pretty-printed JSON.
pub fn report_json(report: &ValidationReport, record_count: usize) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&report_payload(report, record_count))
}
