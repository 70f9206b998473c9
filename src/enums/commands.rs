use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Parse one report and print a summary
    Inspect {
        report: PathBuf,
        /// Print the parsed report as JSON instead
        #[clap(long)]
        json: bool,
    },
    /// Parse every report given and report which ones fail
    Validate {
        #[clap(required = true)]
        reports: Vec<PathBuf>,
    },
}
