//! Report writers for allocation results.

use crate::Allocation;
use std::io::Write;

/// Errors raised while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing to the sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON array of allocations
    Json,
}

/// Write one allocation as a human-readable listing.
///
/// ```text
/// Matching resources for task: Backend
/// Resource: Alice
///
/// ```
pub fn write_text(allocation: &Allocation, out: &mut impl Write) -> std::io::Result<()> {
    for task in &allocation.tasks {
        writeln!(out, "Matching resources for task: {}", task.task)?;
        for resource in &task.resources {
            writeln!(out, "Resource: {}", resource)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write every allocation as a JSON array.
pub fn write_json(allocations: &[Allocation], out: &mut impl Write) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut *out, allocations)?;
    writeln!(out)?;
    Ok(())
}

/// Write allocations in the given format.
pub fn write_report(
    allocations: &[Allocation],
    format: ReportFormat,
    out: &mut impl Write,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Text => {
            for allocation in allocations {
                write_text(allocation, out)?;
            }
            Ok(())
        }
        ReportFormat::Json => write_json(allocations, out),
    }
}
