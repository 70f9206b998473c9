pub mod mappers;
pub mod report_parser;
