mod parser_tests;
mod property_tests;

pub const SAMPLE_REPORT: &str = include_str!("fixtures/sample_report.xml");

pub fn sample_report_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_report.xml")
}
