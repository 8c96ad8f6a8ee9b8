//! Record Consumer: re-parses forwarded container bytes into typed records.
//!
//! The consumer trusts that the payload was validated upstream and performs
//! no semantic validation of its own; it only converts field text into
//! typed values. Repeated fields bind through
//! [`parser::last_matching_child`], the opposite of the validator's
//! first-occurrence lookup, so a duplicated field can carry a value the
//! validator never inspected.

pub mod convert;
pub mod error;
pub mod parser;

pub use error::{ConsumeError, Result};

use catalog_model::{ConsumeBatch, RecordOutcome};

/// Consume a serialized container.
///
/// Produces, per record position, either a typed record or a
/// skip-with-reason diagnostic. One formatted summary is emitted per
/// converted record, in container order. Unparsable input is fatal to the
/// whole batch.
pub fn consume_catalog(input: &str) -> Result<ConsumeBatch> {
    let records = parser::parse_container(input)?;
    let mut batch = ConsumeBatch::default();
    for (index, record) in records.iter().enumerate() {
        let outcome = convert::convert_record(record);
        match &outcome {
            RecordOutcome::Converted(book) => {
                let summary = book.summary();
                tracing::info!(position = index + 1, summary = %summary, "record consumed");
                batch.summaries.push(summary);
            }
            RecordOutcome::Skipped { reason } => {
                tracing::debug!(position = index + 1, reason = %reason, "record skipped");
            }
        }
        batch.outcomes.push(outcome);
    }
    Ok(batch)
}
