//! JSON exporter

use crate::error::{BenchError, Result};
use crate::export::Exporter;
use crate::tools::{CollisionReport, ThroughputReport, ValidationReport};
use serde::Serialize;
use std::io::Write;

/// JSON output exporter
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonValidation<'a> {
    #[serde(flatten)]
    report: &'a ValidationReport,
    total_mismatches: usize,
}

fn write_json<T: Serialize>(value: &T, writer: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)
        .map_err(|e| BenchError::Other(format!("JSON serialization failed: {}", e)))?;
    writeln!(writer)?;
    Ok(())
}

impl Exporter for JsonExporter {
    fn export_collisions(&self, report: &CollisionReport, writer: &mut dyn Write) -> Result<()> {
        write_json(report, writer)
    }

    fn export_throughput(&self, report: &ThroughputReport, writer: &mut dyn Write) -> Result<()> {
        write_json(report, writer)
    }

    fn export_validation(
        &self,
        report: &ValidationReport,
        writer: &mut dyn Write,
    ) -> Result<()> {
        write_json(
            &JsonValidation {
                report,
                total_mismatches: report.mismatch_count(),
            },
            writer,
        )
    }
}
