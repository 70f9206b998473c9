use fsb_report_parser::{ParserConfig, ReportParser};
use proptest::prelude::*;

proptest! {
    #[test]
    fn numeric_root_attributes_round_trip(sequence in any::<i64>(), timestamp in 0i64..4_102_444_800_000) {
        let xml = format!(r#"<BugCollection sequence="{}" timestamp="{}"/>"#, sequence, timestamp);
        let report = ReportParser::parse_from_text(&xml).unwrap();
        prop_assert_eq!(report.sequence, sequence);
        prop_assert_eq!(report.timestamp, timestamp);
    }

    #[test]
    fn string_roles_follow_first_seen_order(roles in proptest::collection::vec("[A-E]", 0..12)) {
        let strings: String = roles
            .iter()
            .enumerate()
            .map(|(i, role)| format!(r#"<String role="{}" value="{}"/>"#, role, i))
            .collect();
        let xml = format!(
            "<BugCollection><BugInstance><Class/><Method/>{}</BugInstance></BugCollection>",
            strings
        );
        let report = ReportParser::parse_from_text(&xml).unwrap();
        let mapped = &report.buginstances[0].strings;

        let mut expected_order: Vec<&str> = Vec::new();
        for role in &roles {
            if !expected_order.contains(&role.as_str()) {
                expected_order.push(role);
            }
        }
        let actual_order: Vec<&str> = mapped.keys().map(String::as_str).collect();
        prop_assert_eq!(actual_order, expected_order);

        for (key, value) in mapped {
            let last = roles.iter().rposition(|r| r == key).unwrap();
            prop_assert_eq!(value, &last.to_string());
        }
    }

    #[test]
    fn source_line_count_matches_children(count in 0usize..40, threshold in 1usize..8) {
        let bugs: String = (0..count)
            .map(|i| format!(
                r#"<BugInstance type="T{}"><Class/><Method/><SourceLine start="{}"/><SourceLine/></BugInstance>"#,
                i, i
            ))
            .collect();
        let xml = format!("<BugCollection>{}</BugCollection>", bugs);
        let config = ParserConfig { parallel: true, parallel_threshold: threshold };
        let report = ReportParser::with_config(config).text(&xml).unwrap();

        prop_assert_eq!(report.buginstances.len(), count);
        for (i, bug) in report.buginstances.iter().enumerate() {
            prop_assert_eq!(&bug.bug_type, &format!("T{}", i));
            prop_assert_eq!(bug.sourcelines.len(), 2);
            prop_assert_eq!(bug.sourcelines[0].start, i as i64);
            prop_assert_eq!(bug.sourcelines[1].start, -1);
        }
    }
}
