use crate::common::pluralize;
use crate::core::CheckResults;
use anyhow::Context;
use colored::*;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Text,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &CheckResults) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    diagnostics: &'a [crate::core::Diagnostic],
    summary: &'a crate::core::CheckSummary,
    timestamp: String,
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &CheckResults) -> anyhow::Result<()> {
        let report = JsonReport {
            diagnostics: &results.diagnostics,
            summary: &results.summary,
            timestamp: results.timestamp.to_rfc3339(),
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// `path:line:col: message (analyzer)` lines followed by a summary
pub struct TextWriter<W: Write> {
    writer: W,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary(&mut self, results: &CheckResults) -> anyhow::Result<()> {
        let summary = &results.summary;
        let mut line = format!(
            "{} in {}",
            pluralize(summary.issues, "issue"),
            pluralize(summary.packages, "package")
        );
        if summary.skipped_files > 0 {
            line.push_str(&format!(
                " ({} skipped with syntax errors)",
                pluralize(summary.skipped_files, "file")
            ));
        }

        let line = if summary.issues == 0 {
            line.green()
        } else {
            line.red().bold()
        };
        writeln!(self.writer, "{line}")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_results(&mut self, results: &CheckResults) -> anyhow::Result<()> {
        for diagnostic in &results.diagnostics {
            writeln!(
                self.writer,
                "{}: {} {}",
                diagnostic.position.to_string().bold(),
                diagnostic.message,
                format!("({})", diagnostic.analyzer).dimmed()
            )?;
        }
        if !results.diagnostics.is_empty() {
            writeln!(self.writer)?;
        }
        self.write_summary(results)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writer for `format`, targeting `output` or stdout
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(sink)),
        OutputFormat::Text => Box::new(TextWriter::new(sink)),
    })
}
