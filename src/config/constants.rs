pub const DEFAULT_STRING: &str = "N/A";
pub const DEFAULT_INT: i64 = -1;
pub const DEFAULT_COUNT: i64 = 0;

pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

pub const CONFIG_DIR_NAME: &str = "fsb-report";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Element tags (fixed FindBugs schema, case-sensitive)
pub const PROJECT_TAG: &str = "Project";
pub const JAR_TAG: &str = "Jar";
pub const PLUGIN_TAG: &str = "Plugin";
pub const BUG_INSTANCE_TAG: &str = "BugInstance";
pub const STRING_TAG: &str = "String";
pub const CLASS_TAG: &str = "Class";
pub const METHOD_TAG: &str = "Method";
pub const SOURCE_LINE_TAG: &str = "SourceLine";
pub const ERRORS_TAG: &str = "Errors";
pub const ERROR_TAG: &str = "Error";
pub const MISSING_CLASS_TAG: &str = "MissingClass";
pub const FIND_BUGS_SUMMARY_TAG: &str = "FindBugsSummary";
pub const PACKAGE_STATS_TAG: &str = "PackageStats";
pub const CLASS_STATS_TAG: &str = "ClassStats";
pub const FIND_BUGS_PROFILE_TAG: &str = "FindBugsProfile";
pub const CLASS_PROFILE_TAG: &str = "ClassProfile";
pub const CLASS_FEATURES_TAG: &str = "ClassFeatures";
pub const HISTORY_TAG: &str = "History";

/// Attributes tried, in order, when describing an element in error messages.
pub const IDENTIFYING_ATTRIBUTES: &[&str] = &["type", "projectName", "classname", "name", "package", "class"];
