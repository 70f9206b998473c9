pub mod bug_collection;
pub mod bug_instance;
pub mod bug_class;
pub mod bug_method;
pub mod source_line;
pub mod project;
pub mod errors;
pub mod find_bugs_summary;
pub mod package_stats;
pub mod class_stats;
pub mod find_bugs_profile;
pub mod class_profile;
pub mod placeholders;
