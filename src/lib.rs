//! Typed parser for FindSecBugs / SpotBugs XML reports.
//!
//! ```rust,no_run
//! use fsb_report_parser::ReportParser;
//!
//! let report = ReportParser::parse_from_file("findsecbugs.xml").unwrap();
//! for bug in &report.buginstances {
//!     println!("{} in {}", bug.bug_type, bug.bug_class.classname);
//! }
//! ```

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;

pub use errors::{ReportError, ReportResult};
pub use services::report_parser::ReportParser;
pub use structs::config::parser_config::ParserConfig;
pub use structs::report::bug_class::BugClass;
pub use structs::report::bug_collection::BugCollection;
pub use structs::report::bug_instance::BugInstance;
pub use structs::report::bug_method::BugMethod;
pub use structs::report::class_profile::ClassProfile;
pub use structs::report::class_stats::ClassStats;
pub use structs::report::errors::{Errors, ReportErrorEntry};
pub use structs::report::find_bugs_profile::FindBugsProfile;
pub use structs::report::find_bugs_summary::FindBugsSummary;
pub use structs::report::package_stats::PackageStats;
pub use structs::report::placeholders::{ClassFeatures, History};
pub use structs::report::project::Project;
pub use structs::report::source_line::SourceLine;
pub use traits::from_element::FromElement;
