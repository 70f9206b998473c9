use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    // Input errors
    #[error("Malformed XML: {0}")]
    MalformedXml(#[from] xmltree::ParseError),

    #[error("Failed to read report '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // Structural errors
    #[error("Missing required element <{expected}> in {parent}")]
    MissingElement {
        expected: String,
        parent: String,
    },

    // Field errors
    #[error("Malformed numeric field '{field}' in {element}: '{value}'")]
    MalformedNumber {
        element: String,
        field: String,
        value: String,
    },

    #[error("Malformed boolean field '{field}' in {element}: '{value}'")]
    MalformedBoolean {
        element: String,
        field: String,
        value: String,
    },

    // Configuration errors
    #[error("Configuration error at '{path}': {reason}")]
    Config {
        path: String,
        reason: String,
    },
}

impl ReportError {
    pub fn missing_element(expected: &str, parent: &str) -> Self {
        Self::MissingElement {
            expected: expected.to_string(),
            parent: parent.to_string(),
        }
    }

    pub fn malformed_number(element: &str, field: &str, value: &str) -> Self {
        Self::MalformedNumber {
            element: element.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn malformed_boolean(element: &str, field: &str, value: &str) -> Self {
        Self::MalformedBoolean {
            element: element.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn io_error(path: &str, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }

    pub fn config_error(path: &str, reason: &str) -> Self {
        Self::Config {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io { .. } => ErrorSeverity::High,
            Self::MalformedXml(_) => ErrorSeverity::High,
            Self::MissingElement { .. } => ErrorSeverity::Medium,
            Self::MalformedNumber { .. } => ErrorSeverity::Medium,
            Self::MalformedBoolean { .. } => ErrorSeverity::Medium,
            Self::Config { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        let suggestion = match self {
            Self::MalformedXml(_) => "Check that the report is complete and was not truncated",
            Self::Io { .. } => "Check file permissions and path",
            Self::MissingElement { .. } => "The report does not follow the FindBugs XML schema",
            Self::MalformedNumber { .. } | Self::MalformedBoolean { .. } => {
                "The attribute is present but its value has the wrong type"
            }
            Self::Config { .. } => "Run 'fsb-report init' to create a fresh configuration file",
        };
        format!("{}\n💡 {}", self, suggestion)
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl ErrorSeverity {
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

/// Result type alias for report parsing operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Error handler for consistent error reporting from the binary
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &ReportError) {
        let severity = error.severity();
        log::debug!("[{}] {}", severity.name(), error.technical_details());
        log::error!("{} {}", severity.emoji(), error.user_message());
    }

    /// Summarize failures from a batch validation, grouped by severity (highest first)
    pub fn handle_multiple_errors(errors: &[(String, ReportError)], context: &str) {
        if errors.is_empty() {
            return;
        }

        log::error!("❌ {} report(s) failed during {}:", errors.len(), context);

        let mut by_severity: BTreeMap<ErrorSeverity, Vec<&(String, ReportError)>> = BTreeMap::new();
        for entry in errors {
            by_severity.entry(entry.1.severity()).or_default().push(entry);
        }

        for (severity, entries) in by_severity.iter().rev() {
            log::error!("{} {} ({} errors):", severity.emoji(), severity.name(), entries.len());
            for (i, (path, error)) in entries.iter().enumerate() {
                log::error!("  {}. {}: {}", i + 1, path, error);
            }
        }
    }
}
