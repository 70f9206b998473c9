use std::fs::File;
use fsb_report_parser::{BugCollection, ParserConfig, ReportParser};
use crate::{sample_report_path, SAMPLE_REPORT};

fn sample() -> BugCollection {
    ReportParser::parse_from_text(SAMPLE_REPORT).expect("sample report should parse")
}

#[test]
fn test_root_attributes() {
    let report = sample();
    assert_eq!(report.version, "3.1.5");
    assert_eq!(report.sequence, 0);
    assert_eq!(report.timestamp, 1_559_244_040_000);
    assert_eq!(report.analysis_timestamp, 1_559_244_097_257);
    // present but empty stays empty
    assert_eq!(report.release, "");
}

#[test]
fn test_root_timestamps_render_as_utc() {
    let report = sample();
    let built = report.timestamp_utc().unwrap();
    assert_eq!(built.to_rfc3339(), "2019-05-30T19:20:40+00:00");
    assert!(report.analysis_timestamp_utc().unwrap() > built);
}

#[test]
fn test_project() {
    let project = sample().project.expect("project should be present");
    assert_eq!(project.project_name, "webgoat-server");
    assert_eq!(project.jar, "/builds/webgoat/target/classes");
    assert_eq!(project.plugin.len(), 2);
    assert_eq!(project.plugin["id"], "com.h3xstream.findsecbugs");
    assert_eq!(project.plugin["enabled"], "true");
}

#[test]
fn test_bug_instances() {
    let report = sample();
    assert_eq!(report.buginstances.len(), 3);

    let sqli = &report.buginstances[0];
    assert_eq!(sqli.bug_type, "SQL_INJECTION_JDBC");
    assert_eq!(sqli.priority, "1");
    assert_eq!(sqli.rank, "5");
    assert_eq!(sqli.abbrev, "SECSQLIJDBC");
    assert_eq!(sqli.category, "SECURITY");

    let roles: Vec<&str> = sqli.strings.keys().map(String::as_str).collect();
    assert_eq!(roles, vec!["Sink method", "Sink parameter", "Unknown source"]);
    assert_eq!(sqli.strings["Sink parameter"], "0");

    assert_eq!(sqli.sourcelines.len(), 1);
    assert_eq!(sqli.sourcelines[0].start, 55);
    assert_eq!(sqli.sourcelines[0].start_bytecode, 26);
    assert_eq!(sqli.sourcelines[0].line_span(), Some(1));

    let order: Vec<&str> = report.buginstances.iter().map(|b| b.bug_type.as_str()).collect();
    assert_eq!(order, vec!["SQL_INJECTION_JDBC", "PREDICTABLE_RANDOM", "SPRING_CSRF_PROTECTION_DISABLED"]);
}

#[test]
fn test_bug_class_and_method() {
    let report = sample();
    let sqli = &report.buginstances[0];

    assert_eq!(sqli.bug_class.classname, "org.owasp.webgoat.sql_injection.SqlInjectionLesson5a");
    assert_eq!(sqli.bug_class.sourcelines.len(), 1);
    // class-level lines carry no bytecode range
    assert_eq!(sqli.bug_class.sourcelines[0].start_bytecode, -1);
    assert_eq!(sqli.bug_class.sourcelines[0].end_bytecode, -1);

    assert_eq!(sqli.bug_method.name, "injectableQuery");
    assert_eq!(sqli.bug_method.signature, "(Ljava/lang/String;)Lorg/owasp/webgoat/assignments/AttackResult;");
    assert!(!sqli.bug_method.is_static);
    assert_eq!(sqli.bug_method.sourcelines[0].end_bytecode, 312);

    let random = &report.buginstances[1];
    assert!(random.bug_method.is_static);
    assert_eq!(random.bug_method.qualified_name(), "org.owasp.webgoat.session.WebSession.newToken");
    assert_eq!(random.bug_class.sourcelines[0].start, -1);
    assert_eq!(random.bug_class.sourcelines[0].line_span(), None);

    // isStatic absent
    assert!(!report.buginstances[2].bug_method.is_static);
    assert!(report.buginstances[2].strings.is_empty());
}

#[test]
fn test_errors_section() {
    let errors = sample().errors.expect("errors should be present");
    assert_eq!(errors.num_errors, 0);
    assert_eq!(errors.num_missingclasses, 2);
    assert!(errors.errors.is_empty());
    assert_eq!(
        errors.missingclasses,
        vec![
            "javax.servlet.http.HttpServletRequest".to_string(),
            "org.springframework.web.bind.annotation.RequestParam".to_string(),
        ]
    );
}

#[test]
fn test_findbugs_summary() {
    let summary = sample().findbugssummary.expect("summary should be present");
    assert_eq!(summary.timestamp, "Thu, 30 May 2019 19:20:40 +0000");
    assert_eq!(summary.total_classes, "212");
    assert_eq!(summary.referenced_classes, "604");
    assert_eq!(summary.total_bugs, "3");
    assert_eq!(summary.java_version, "1.8.0_212");
    assert_eq!(summary.cpu_seconds, "41.92");
    assert_eq!(summary.priority_1, "1");
    assert_eq!(summary.priority_2, "2");
    assert_eq!(summary.priority_3, "N/A");

    assert_eq!(summary.packagestats.len(), 2);
    assert_eq!(summary.packagestats[0].package, "org.owasp.webgoat");
    assert_eq!(summary.packagestats[0].total_types, "2");
    assert_eq!(summary.packagestats[0].classstats.len(), 2);
    assert_eq!(summary.packagestats[1].classstats.len(), 1);

    let stats = &summary.packagestats[0].classstats[1];
    assert_eq!(stats.class_name, "org.owasp.webgoat.Main");
    assert_eq!(stats.source_file, "Main.java");
    assert_eq!(stats.interface, "false");
    assert_eq!(stats.size, 70);
    assert_eq!(stats.bugs, 0);

    let profiles = &summary.findbugsprofile.classprofiles;
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].name, "com.h3xstream.findsecbugs.injection.sql.SqlInjectionDetector");
    assert_eq!(profiles[0].total_milliseconds, 812);
    assert_eq!(profiles[0].invocations, 212);
    assert_eq!(profiles[0].avg_microseconds_per_invocation, 3832);
    assert_eq!(profiles[0].max_microseconds_per_invocation, 90211);
    assert_eq!(profiles[0].standard_deviation_microseconds_per_invocation, 9120);
}

#[test]
fn test_placeholder_sections_present() {
    let report = sample();
    assert!(report.classfeatures.is_some());
    assert!(report.history.is_some());
}

#[test]
fn test_category_and_priority_counts() {
    let report = sample();
    let categories = report.count_by_category();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories["SECURITY"], 3);

    let counts = report.count_by_priority();
    let priorities: Vec<(&str, usize)> = counts
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(priorities, vec![("1", 1), ("2", 2)]);
}

#[test]
fn test_parse_from_file_matches_text() {
    let from_file = ReportParser::parse_from_file(sample_report_path()).unwrap();
    assert_eq!(from_file, sample());
}

#[test]
fn test_parse_from_reader_handle() {
    let handle = File::open(sample_report_path()).unwrap();
    let from_handle = ReportParser::parse_from_reader(handle).unwrap();
    assert_eq!(from_handle, sample());
}

#[test]
fn test_parsing_is_repeatable() {
    assert_eq!(sample(), sample());
}

#[test]
fn test_parallel_and_sequential_agree() {
    let eager = ParserConfig {
        parallel: true,
        parallel_threshold: 1,
    };
    let parallel = ReportParser::with_config(eager).text(SAMPLE_REPORT).unwrap();
    let sequential = ReportParser::with_config(ParserConfig::sequential()).text(SAMPLE_REPORT).unwrap();
    assert_eq!(parallel, sequential);
}

#[test]
fn test_json_rendering_uses_schema_names() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["buginstances"][0]["type"], "SQL_INJECTION_JDBC");
    assert_eq!(json["buginstances"][0]["strings"]["Sink parameter"], "0");
    assert!(json["classfeatures"].is_object());
    assert!(json["history"].is_object());
}
