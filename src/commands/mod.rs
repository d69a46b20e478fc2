pub mod analyze;
pub mod compare;
pub mod init;

use crate::config;
use crate::core::errors::Error;
use crate::core::ToolProfile;
use crate::io;
use crate::validation::ProfileDraft;
use anyhow::Context;
use std::path::Path;

/// Load and validate one tool profile from a JSON file.
pub fn load_profile(path: &Path) -> anyhow::Result<ToolProfile> {
    let content = io::read_file(path)?;
    let draft: ProfileDraft = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let profile = draft
        .validate(config::get_config())
        .map_err(Error::Validation)
        .with_context(|| format!("Invalid profile in {}", path.display()))?;
    log::debug!("Loaded profile '{}' from {}", profile.id, path.display());
    Ok(profile)
}
