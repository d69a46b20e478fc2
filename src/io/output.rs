use crate::comparison::ComparisonReport;
use crate::config;
use crate::formatting::{format_currency, format_months, format_optional, format_percent};
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter: std::fmt::Debug {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for JsonWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonWriter").finish_non_exhaustive()
    }
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for MarkdownWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownWriter").finish_non_exhaustive()
    }
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let output = config::get_config().output.clone();
        let symbol = output.currency_symbol.as_str();
        let na = output.na_label.as_str();

        writeln!(self.writer, "# Tool Cost Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;

        if report.mixed_horizons {
            writeln!(
                self.writer,
                "> Note: tools are evaluated over different horizons; TCO figures are not directly comparable."
            )?;
            writeln!(self.writer)?;
        }

        writeln!(
            self.writer,
            "| Tool | TCO | ROI | Payback | Migration cost |"
        )?;
        writeln!(self.writer, "|------|-----|-----|---------|----------------|")?;

        for (row, label) in report.rows.iter().zip(&report.labels) {
            let result = &row.result;
            let mark = |id: &str, cell: String| {
                if id == result.tool_id {
                    format!("**{cell}**")
                } else {
                    cell
                }
            };

            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                label,
                mark(
                    &report.best.lowest_tco,
                    format_currency(result.tco, symbol)
                ),
                mark(
                    &report.best.highest_roi,
                    format_optional(result.roi_percent, na, format_percent)
                ),
                mark(
                    &report.best.shortest_payback,
                    format_optional(result.payback_months, na, format_months)
                ),
                mark(
                    &report.best.lowest_migration_cost,
                    format_optional(result.migration_cost, na, |v| format_currency(v, symbol))
                ),
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Best value per metric in bold.")?;

        let warning_rows: Vec<_> = report
            .rows
            .iter()
            .zip(&report.labels)
            .filter(|(row, _)| !row.warnings.is_empty())
            .collect();
        if !warning_rows.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "## Incomplete benefit entries")?;
            writeln!(self.writer)?;
            for (row, label) in warning_rows {
                for warning in &row.warnings {
                    writeln!(
                        self.writer,
                        "- {}: \"{}\" ({})",
                        label, warning.description, warning.reason
                    )?;
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_comparison(&mut self, report: &ComparisonReport) -> anyhow::Result<()> {
        let output = config::get_config().output.clone();
        let symbol = output.currency_symbol.as_str();
        let na = output.na_label.as_str();

        println!("{}", "Tool Cost Comparison".bold().blue());
        println!("{}", "====================".blue());
        println!();

        if report.mixed_horizons {
            println!(
                "{}",
                "Note: tools are evaluated over different horizons; TCO figures are not directly comparable."
                    .yellow()
            );
            println!();
        }

        for (row, label) in report.rows.iter().zip(&report.labels) {
            let result = &row.result;
            println!("{}", label.bold());
            print_metric(
                "TCO",
                format_currency(result.tco, symbol),
                report.best.lowest_tco == result.tool_id,
            );
            print_metric(
                "ROI",
                format_optional(result.roi_percent, na, format_percent),
                report.best.highest_roi == result.tool_id,
            );
            print_metric(
                "Payback",
                format_optional(result.payback_months, na, format_months),
                report.best.shortest_payback == result.tool_id,
            );
            print_metric(
                "Migration cost",
                format_optional(result.migration_cost, na, |v| format_currency(v, symbol)),
                report.best.lowest_migration_cost == result.tool_id,
            );

            for warning in &row.warnings {
                println!(
                    "  {} benefit \"{}\": {}",
                    "warning:".yellow(),
                    warning.description,
                    warning.reason
                );
            }
            println!();
        }

        Ok(())
    }
}

fn print_metric(name: &str, value: String, is_best: bool) {
    if is_best {
        println!("  {:<16} {} {}", format!("{name}:"), value.green(), "(best)".green());
    } else {
        println!("  {:<16} {}", format!("{name}:"), value);
    }
}

/// Build a writer for the chosen format, to stdout or to a file.
///
/// Terminal output goes to stdout only; combining it with `--output` is
/// rejected rather than silently switching formats.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
        (OutputFormat::Terminal, Some(_)) => Err(anyhow::anyhow!(
            "terminal format writes to stdout; use --format json or markdown with --output"
        )),
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(File::create(path)?)))
        }
    }
}
