use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ReportError, ReportResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# fsb-report configuration

[parser]
# Map report sections and bug instances on a thread pool
parallel = true

# Minimum number of BugInstance elements before they are mapped in parallel
parallel_threshold = 64
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load from `path`, else from the default location, else built-in defaults.
    /// An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> ReportResult<Config> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> ReportResult<Config> {
        let display = path.display().to_string();
        log::info!("📋 Loading config from: {}", display);

        let content = fs::read_to_string(path)
            .map_err(|e| ReportError::config_error(&display, &e.to_string()))?;
        Self::parse(&content).map_err(|e| match e {
            ReportError::Config { reason, .. } => ReportError::config_error(&display, &reason),
            other => other,
        })
    }

    pub fn parse(content: &str) -> ReportResult<Config> {
        let config: Config = toml::from_str(content)
            .map_err(|e| ReportError::config_error("<inline>", e.message()))?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    pub fn validate_config(config: &Config) -> ReportResult<()> {
        if config.parser.parallel && config.parser.parallel_threshold == 0 {
            return Err(ReportError::config_error(
                "<parser>",
                "parallel_threshold must be at least 1 when parallel is enabled",
            ));
        }
        Ok(())
    }

    pub fn create_sample_config(path: Option<&Path>) -> ReportResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path().ok_or_else(|| {
                ReportError::config_error("<default>", "could not determine the user configuration directory")
            })?,
        };
        let display = config_file_path.display().to_string();

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ReportError::io_error(&display, e))?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG).map_err(|e| ReportError::io_error(&display, e))?;
        log::info!("✅ Created sample config at: {}", display);
        Ok(config_file_path)
    }
}
