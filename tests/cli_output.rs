//! Tests for CLI output formatting: JSON with `--json`, pretty-print otherwise.

use depsdev::{Advisory, Dependencies, PrettyPrint, Project, Requirements, Version};

// ============================================================================
// JSON Output Tests
// ============================================================================

#[test]
fn test_json_output_uses_api_field_names() {
    let version = make_test_version();
    let json_output = serde_json::to_string_pretty(&version).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed["versionKey"]["name"], "lodash");
    assert_eq!(parsed["isDefault"], true);
    assert_eq!(parsed["advisoryKeys"][0]["id"], "GHSA-35jh-r3h4-6jhm");
}

#[test]
fn test_json_output_keeps_counters_as_strings() {
    // int64 counters travel as strings in the API's JSON mapping
    let project = make_test_project();
    let parsed = serde_json::to_value(&project).unwrap();

    assert_eq!(parsed["starsCount"], "1234");
    let back: Project = serde_json::from_value(parsed).unwrap();
    assert_eq!(back.stars_count, 1234);
}

#[test]
fn test_json_output_omits_other_systems_requirements() {
    let reqs: Requirements = serde_json::from_value(serde_json::json!({
        "npm": {"dependencies": {"dependencies": [{"name": "a", "requirement": "^1.0.0"}]}}
    }))
    .unwrap();
    let parsed = serde_json::to_value(&reqs).unwrap();

    assert!(parsed.get("npm").is_some());
    assert!(parsed.get("maven").is_none());
    assert!(parsed.get("nuget").is_none());
}

// ============================================================================
// Pretty-Print Tests
// ============================================================================

#[test]
fn test_default_output_is_not_json() {
    let project = make_test_project();
    let pretty_output = project.pretty_print();

    let parse_result: Result<serde_json::Value, _> = serde_json::from_str(&pretty_output);
    assert!(
        parse_result.is_err(),
        "Default output should NOT be valid JSON"
    );
}

#[test]
fn test_version_pretty_print_shows_key_fields() {
    let output = make_test_version().pretty_print();

    assert!(output.starts_with("Version: NPM:lodash@4.17.20"));
    assert!(output.contains("Licenses:       MIT"));
    assert!(output.contains("Advisories:     GHSA-35jh-r3h4-6jhm"));
    assert!(output.contains("Published:      2020-08-13"));
}

#[test]
fn test_project_pretty_print_shows_scorecard() {
    let output = make_test_project().pretty_print();

    assert!(output.contains("github.com/lodash/lodash"));
    assert!(output.contains("Stars:          1234"));
    assert!(output.contains("Scorecard:      5.5/10"));
}

#[test]
fn test_dependencies_pretty_print_counts() {
    let deps: Dependencies = serde_json::from_value(serde_json::json!({
        "nodes": [
            {"versionKey": {"system": "NPM", "name": "a", "version": "1.0.0"}, "relation": "SELF"},
            {"versionKey": {"system": "NPM", "name": "b", "version": "2.0.0"}, "relation": "DIRECT"}
        ],
        "edges": [{"fromNode": 0, "toNode": 1, "requirement": "^2.0.0"}],
        "error": "resolution incomplete"
    }))
    .unwrap();
    let output = deps.pretty_print();

    assert!(output.starts_with("Dependencies: NPM:a@1.0.0"));
    assert!(output.contains("Nodes:          2"));
    assert!(output.contains("Direct:         1"));
    assert!(output.contains("Error:          resolution incomplete"));
}

#[test]
fn test_advisory_pretty_print_shows_aliases() {
    let advisory: Advisory = serde_json::from_value(serde_json::json!({
        "advisoryKey": {"id": "GHSA-35jh-r3h4-6jhm"},
        "title": "Command Injection in lodash",
        "aliases": ["CVE-2021-23337"],
        "cvss3Score": 7.2
    }))
    .unwrap();
    let output = advisory.pretty_print();

    assert!(output.contains("Aliases:        CVE-2021-23337"));
    assert!(output.contains("HIGH (7.2)"));
}

#[test]
fn test_list_pretty_print_is_table() {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct TestRow {
        version: String,
        published: String,
    }

    let rows = vec![
        TestRow {
            version: "4.17.20".to_string(),
            published: "2020-08-13".to_string(),
        },
        TestRow {
            version: "4.17.21".to_string(),
            published: "2021-02-20".to_string(),
        },
    ];

    let table_output = Table::new(rows).to_string();

    assert!(table_output.contains("version"), "Should have column headers");
    assert!(table_output.contains("4.17.21"));
}

// ============================================================================
// Test Helpers
// ============================================================================

fn make_test_version() -> Version {
    serde_json::from_value(serde_json::json!({
        "versionKey": {"system": "NPM", "name": "lodash", "version": "4.17.20"},
        "publishedAt": "2020-08-13T16:53:54Z",
        "isDefault": true,
        "licenses": ["MIT"],
        "advisoryKeys": [{"id": "GHSA-35jh-r3h4-6jhm"}],
        "links": [{"label": "SOURCE_REPO", "url": "git+https://github.com/lodash/lodash.git"}]
    }))
    .unwrap()
}

fn make_test_project() -> Project {
    serde_json::from_value(serde_json::json!({
        "projectKey": {"id": "github.com/lodash/lodash"},
        "openIssuesCount": "200",
        "starsCount": "1234",
        "forksCount": 7000,
        "license": "NOASSERTION",
        "scorecard": {
            "date": "2023-05-01T00:00:00Z",
            "overallScore": 5.5,
            "checks": []
        }
    }))
    .unwrap()
}
