use crate::commands::load_profile;
use crate::comparison;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub profile: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

/// Single-tool analysis: rendered as the degenerate one-row comparison,
/// so all output formats share one report shape.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    config.formatting.apply();

    let profile = load_profile(&config.profile)?;
    let report = comparison::compare(std::slice::from_ref(&profile))?;

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_comparison(&report)
}
