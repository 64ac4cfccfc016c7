use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "unirange-cmd")]
#[command(about = "Command-line utility for Unicode property range sets")]
#[command(version)]
struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the code point ranges of a property
    Ranges {
        /// Property name or alias, e.g. `Script`, `White_Space`, `Lu`
        property: String,

        /// Property value for enumerated properties, e.g. `Greek`
        value: Option<String>,

        /// Print the ranges of the complement instead
        #[arg(short, long)]
        complement: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check whether code points have a property
    Contains {
        /// Property name or alias
        property: String,

        /// Property value for enumerated properties
        #[arg(long)]
        value: Option<String>,

        /// Code points to check: hex `U+03B1` or `0x3B1`, decimal `945`, or a
        /// single character such as `α`. Digit strings are always decimal.
        #[arg(required = true)]
        code_points: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Ranges {
            property,
            value,
            complement,
            format,
        } => commands::ranges::run(property, value, complement, format),
        Commands::Contains {
            property,
            value,
            code_points,
        } => commands::contains::run(property, value, code_points),
    }
}

/// Installs `env_logger`. `RUST_LOG` wins over the `-v` default when set.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
