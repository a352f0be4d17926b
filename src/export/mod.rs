//! Export system for benchmark reports

mod console;
mod json;

use crate::config::OutputFormat;
use crate::error::{BenchError, Result};
use crate::tools::{CollisionReport, ThroughputReport, ValidationReport};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub use console::ConsoleExporter;
pub use json::JsonExporter;

/// Trait for output formatting
pub trait Exporter {
    /// Write the collision counter report
    fn export_collisions(&self, report: &CollisionReport, writer: &mut dyn Write) -> Result<()>;

    /// Write the timing summary
    fn export_throughput(&self, report: &ThroughputReport, writer: &mut dyn Write) -> Result<()>;

    /// Write the consistency validator report
    fn export_validation(&self, report: &ValidationReport, writer: &mut dyn Write)
        -> Result<()>;
}

/// Create an appropriate exporter based on configuration
pub fn create_exporter(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleExporter),
        OutputFormat::Json => Box::new(JsonExporter),
    }
}

/// Get a writer for the output (file or stdout)
pub fn get_output_writer(path: &str) -> Result<Box<dyn Write>> {
    if path == "-" {
        Ok(Box::new(BufWriter::new(io::stdout())))
    } else {
        let file = File::create(path).map_err(BenchError::Io)?;
        Ok(Box::new(BufWriter::new(file)))
    }
}
