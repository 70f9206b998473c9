use std::path::{Path, PathBuf};
use std::time::Instant;
use anyhow::{bail, Context};
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, ReportError};
use crate::logger::report_logger::ReportLogger;
use crate::services::report_parser::ReportParser;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub fn run_command(&mut self, command: Commands) -> anyhow::Result<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Inspect { report, json } => self.inspect_command(&report, json),
            Commands::Validate { reports } => self.validate_command(&reports),
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> anyhow::Result<()> {
        log::info!("🚀 Initializing fsb-report configuration...");
        match ConfigManager::create_sample_config(self.config_path.as_deref()) {
            Ok(path) => {
                log::info!("📝 Edit {} to tune the parser.", path.display());
                Ok(())
            }
            Err(e) => {
                ErrorHandler::handle_error(&e);
                Err(e.into())
            }
        }
    }

    fn inspect_command(&self, report: &Path, json: bool) -> anyhow::Result<()> {
        let parser = self.load_parser()?;
        let collection = match parser.file(report) {
            Ok(collection) => collection,
            Err(e) => {
                ErrorHandler::handle_error(&e);
                return Err(e).with_context(|| format!("failed to inspect {}", report.display()));
            }
        };

        if json {
            let rendered = serde_json::to_string_pretty(&collection).context("failed to render report as JSON")?;
            println!("{}", rendered);
        } else {
            ReportLogger::print_report_summary(&collection);
        }
        Ok(())
    }

    fn validate_command(&self, reports: &[PathBuf]) -> anyhow::Result<()> {
        let parser = self.load_parser()?;
        let mut failures: Vec<(String, ReportError)> = Vec::new();

        for report in reports {
            match parser.file(report) {
                Ok(collection) => {
                    println!("✅ OK      {} ({} bug instances)", report.display(), collection.buginstances.len());
                }
                Err(e) => {
                    println!("❌ FAILED  {}", report.display());
                    failures.push((report.display().to_string(), e));
                }
            }
        }

        ErrorHandler::handle_multiple_errors(&failures, "validation");

        if !failures.is_empty() {
            bail!("{} of {} reports failed to parse", failures.len(), reports.len());
        }
        log::info!("✅ All {} reports parsed successfully", reports.len());
        Ok(())
    }

    fn load_parser(&self) -> anyhow::Result<ReportParser> {
        let config: Config = match ConfigManager::load(self.config_path.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                ErrorHandler::handle_error(&e);
                log::error!("💡 Run 'fsb-report init' to create a configuration file.");
                return Err(e.into());
            }
        };
        Ok(ReportParser::with_config(config.parser))
    }
}
