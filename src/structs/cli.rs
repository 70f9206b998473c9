use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "fsb-report")]
#[clap(about = "Inspect FindSecBugs / SpotBugs XML reports", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
