use clap::Parser;
use fsb_report_parser::structs::cli::Cli;
use fsb_report_parser::workers::command_runner::CommandRunner;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    CommandRunner::new(cli.config).run_command(cli.command)
}
