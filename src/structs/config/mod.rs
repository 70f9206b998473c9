pub mod config;
pub mod parser_config;
