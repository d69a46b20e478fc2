use anyhow::Result;
use clap::Parser;
use toolcost::cli::{Cli, Commands};
use toolcost::formatting::FormattingConfig;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            profile,
            format,
            output,
            plain,
        } => {
            let config = toolcost::commands::analyze::AnalyzeConfig {
                profile,
                format: format.into(),
                output,
                formatting: create_formatting_config(plain),
            };
            toolcost::commands::analyze::handle_analyze(config)
        }
        Commands::Compare {
            profiles,
            format,
            output,
            plain,
        } => {
            let config = toolcost::commands::compare::CompareConfig {
                profiles,
                format: format.into(),
                output,
                formatting: create_formatting_config(plain),
            };
            toolcost::commands::compare::handle_compare(config)
        }
        Commands::Init { force } => toolcost::commands::init::init_config(force),
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
