use anyhow::Result;
use clap::{Parser, Subcommand};
use fundcalc::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for fundcalc::AppCommand {
    fn from(cmd: Commands) -> fundcalc::AppCommand {
        match cmd {
            Commands::Invest => fundcalc::AppCommand::Invest,
            Commands::Quote { name, fund, amount } => {
                fundcalc::AppCommand::Quote { name, fund, amount }
            }
            Commands::Funds => fundcalc::AppCommand::Funds,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Interactively compute investments (default)
    Invest,
    /// Compute a single investment
    Quote {
        /// Investor name
        #[arg(short, long)]
        name: String,
        /// Fund ticker: SALEF, SALBF, or SALFIF
        #[arg(short, long)]
        fund: String,
        /// Amount to invest
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
    },
    /// List funds and the sales load schedule
    Funds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fundcalc::cli::setup::setup(),
        Some(cmd) => fundcalc::run_command(cmd.into(), cli.config_path.as_deref()),
        None => fundcalc::run_command(fundcalc::AppCommand::Invest, cli.config_path.as_deref()),
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
