use crate::commands::load_profile;
use crate::comparison;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct CompareConfig {
    pub profiles: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_compare(config: CompareConfig) -> Result<()> {
    config.formatting.apply();

    let profiles = config
        .profiles
        .iter()
        .map(|path| load_profile(path))
        .collect::<Result<Vec<_>>>()?;
    log::info!("Comparing {} profile(s)", profiles.len());

    let report = comparison::compare(&profiles)?;
    if report.mixed_horizons {
        log::warn!("Profiles use different evaluation horizons");
    }

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_comparison(&report)
}
