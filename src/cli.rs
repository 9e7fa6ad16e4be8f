use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gatecheck")]
#[command(about = "CI quality gate and code health reporting tool", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the quality gate and exit non-zero on failure
    Gate {
        /// Project root to evaluate
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Configuration file (defaults to discovering .gatecheck.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Disable colors and unicode glyphs
        #[arg(long)]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Build the unified quality report
    Report {
        /// Project root to evaluate
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Configuration file (defaults to discovering .gatecheck.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and unicode glyphs
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
