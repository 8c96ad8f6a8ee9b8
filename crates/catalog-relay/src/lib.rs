//! Trust-boundary orchestration: validate, forward, consume.
//!
//! The validator and the consumer never share parsed state; only the
//! serialized payload crosses the boundary. Which bytes cross is the
//! [`ForwardMode`] decision, and it is the whole story of this pipeline:
//! forwarding the raw validated bytes preserves the duplicate-field
//! divergence between the two parsers, while reconstructing from the
//! validator's parsed view closes it.

pub mod reconstruct;

use anyhow::{Context, Result};

use catalog_model::{ConsumeBatch, ValidationReport};

/// How validated bytes are carried across the trust boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForwardMode {
    /// Forward the exact bytes that were validated. The validator never
    /// re-serializes, so duplicated fields survive the crossing.
    #[default]
    RawBytes,
    /// Re-serialize the validator's first-occurrence view. Duplicates are
    /// dropped and both sides necessarily agree on every field.
    Reconstruct,
}

/// Result of one relay pass.
#[derive(Debug, Clone)]
pub enum RelayOutcome {
    /// Validation recorded errors; nothing was forwarded.
    Rejected { report: ValidationReport },
    /// Validation passed; the payload crossed the boundary and was consumed.
    Forwarded {
        report: ValidationReport,
        payload: String,
        batch: ConsumeBatch,
    },
}

impl RelayOutcome {
    pub fn report(&self) -> &ValidationReport {
        match self {
            Self::Rejected { report } | Self::Forwarded { report, .. } => report,
        }
    }

    pub fn batch(&self) -> Option<&ConsumeBatch> {
        match self {
            Self::Rejected { .. } => None,
            Self::Forwarded { batch, .. } => Some(batch),
        }
    }
}

/// Run one buffer through the full pipeline.
///
/// Structural parse failures on either side of the boundary are fatal;
/// field-level failures reject the batch before anything is forwarded.
pub fn relay(input: &str, mode: ForwardMode) -> Result<RelayOutcome> {
    let report = catalog_validate::validate_catalog(input).context("validate container")?;
    if !report.is_clean() {
        tracing::debug!(errors = report.error_count(), "container rejected");
        return Ok(RelayOutcome::Rejected { report });
    }

    let payload = match mode {
        ForwardMode::RawBytes => input.to_string(),
        ForwardMode::Reconstruct => {
            reconstruct::reconstruct(input).context("reconstruct container")?
        }
    };

    let batch =
        catalog_consume::consume_catalog(&payload).context("consume forwarded payload")?;
    tracing::debug!(
        converted = batch.converted_count(),
        skipped = batch.skipped_count(),
        "container forwarded"
    );
    Ok(RelayOutcome::Forwarded {
        report,
        payload,
        batch,
    })
}
