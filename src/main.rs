use anyhow::Result;
use gatecheck::cli::{self, Commands};
use gatecheck::formatting::FormattingConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::parse_args();

    match cli.command {
        Commands::Gate {
            path,
            config,
            plain,
            verbosity,
        } => gatecheck::commands::gate::run(gatecheck::commands::gate::GateCommand {
            path,
            config,
            verbosity,
            formatting: formatting_config(plain),
        }),
        Commands::Report {
            path,
            config,
            format,
            output,
            plain,
        } => gatecheck::commands::report::run(gatecheck::commands::report::ReportCommand {
            path,
            config,
            format: format.into(),
            output,
            formatting: formatting_config(plain),
        }),
        Commands::Init { force } => gatecheck::commands::init::init_config(force),
    }
}

fn formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
