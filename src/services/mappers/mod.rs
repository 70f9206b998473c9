pub mod project_mapper;
pub mod errors_mapper;
pub mod bug_instance_mapper;
pub mod summary_mapper;
pub mod placeholder_mapper;
