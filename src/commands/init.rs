use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from("toolcost.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Toolcost Configuration

[defaults]
# Evaluation horizon applied when a profile omits one
horizon_years = 3

[output]
currency_symbol = "$"
# Rendered for undefined metrics (never "0" or "NaN")
na_label = "N/A"

[migration]
# One-time cost categories that count toward migration cost
categories = ["dataMigration", "training", "downtime"]
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created toolcost.toml configuration file");

    Ok(())
}
