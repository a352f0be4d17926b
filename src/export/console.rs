//! Console (plain text) exporter

use crate::error::Result;
use crate::export::Exporter;
use crate::tools::{CollisionReport, ThroughputReport, ValidationReport};
use std::io::Write;

/// Plain text exporter, one line per hash function
pub struct ConsoleExporter;

impl Exporter for ConsoleExporter {
    fn export_collisions(&self, report: &CollisionReport, writer: &mut dyn Write) -> Result<()> {
        writeln!(writer, "# hashbench distcomp {}", report.timestamp)?;
        writeln!(writer, "# user: {}", report.user)?;
        writeln!(writer, "# input file: {}", report.input_file)?;
        writeln!(writer, "# lines: {}", report.lines)?;
        writeln!(writer, "#")?;
        writeln!(writer, "# hashname  collisions")?;

        for result in &report.results {
            writeln!(writer, "{} {}", result.hash, result.collisions)?;
            for top in &result.top {
                writeln!(writer, "#   {} {}", top.digest, top.count)?;
            }
        }

        Ok(())
    }

    fn export_throughput(&self, report: &ThroughputReport, writer: &mut dyn Write) -> Result<()> {
        for result in &report.results {
            writeln!(writer, "{} {:.2}", result.hash, result.mib_per_sec)?;
        }
        Ok(())
    }

    fn export_validation(
        &self,
        report: &ValidationReport,
        writer: &mut dyn Write,
    ) -> Result<()> {
        for result in &report.results {
            writeln!(writer, "Checking {}", result.hash)?;
            for mismatch in &result.mismatches {
                writeln!(writer, "{}", mismatch)?;
            }
        }
        Ok(())
    }
}
