//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the patty engine.
//!
//! A fixture names one record and a list of cases. Each case holds a
//! specification in its plain data form, the expected boolean, and optionally
//! a record of its own that replaces the fixture's record for that case.
//!
//! ```yaml
//! name: path conditions
//! description: truthiness of resolved paths
//! record: { a: { b: { c: 10 } } }
//! cases:
//!   - name: present
//!     spec: { type: path, path: [a, b, c] }
//!     expect: true
//!   - name: against an empty record
//!     record: {}
//!     spec: { type: path, path: [a, b, c] }
//!     expect: false
//! ```

use patty::prelude::*;
use serde::Deserialize;
use serde_json::Value;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "empty_record")]
    pub record: Value,
    pub cases: Vec<TestCase>,
}

/// Test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub record: Option<Value>,
    pub spec: Specification,
    pub expect: bool,
}

fn empty_record() -> Value {
    Value::Object(serde_json::Map::new())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: bool,
    pub actual: bool,
    pub trace: SpecTrace,
}

impl TestCase {
    /// The record this case evaluates against.
    pub fn record<'a>(&'a self, fixture: &'a Fixture) -> &'a Value {
        self.record.as_ref().unwrap_or(&fixture.record)
    }
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Run all test cases and return results
    pub fn run(&self) -> Vec<CaseResult> {
        self.cases
            .iter()
            .map(|case| {
                let matcher = bind(case.record(self));
                let actual = matcher.matches(&case.spec);
                CaseResult {
                    case_name: case.name.clone(),
                    passed: actual == case.expect,
                    expected: case.expect,
                    actual,
                    trace: matcher.matches_with_trace(&case.spec),
                }
            })
            .collect()
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self.run();
        for result in results {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {}, got {}\ntrace: {:#?}",
                self.name, result.case_name, result.expected, result.actual, result.trace
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DOCS: &str = r#"
name: first
record: { y: 100 }
cases:
  - name: prop present
    spec: { type: prop, prop: y }
    expect: true
---
name: second
cases:
  - name: empty list on default record
    spec: []
    expect: true
"#;

    #[test]
    fn parses_multiple_documents() {
        let fixtures = Fixture::from_yaml_multi(TWO_DOCS).unwrap();
        assert_eq!(fixtures.len(), 2);
        assert_eq!(fixtures[0].name, "first");
        assert_eq!(fixtures[1].record, empty_record());
        assert!(fixtures[1].cases[0].spec.is_all());
    }

    #[test]
    fn case_record_overrides_fixture_record() {
        let fixture = Fixture::from_yaml(
            r#"
name: override
record: { y: 100 }
cases:
  - name: uses own record
    record: {}
    spec: { type: prop, prop: y }
    expect: false
"#,
        )
        .unwrap();
        let results = fixture.run();
        assert!(results[0].passed);
        assert!(!results[0].actual);
    }

    #[test]
    fn reports_failures_with_trace() {
        let fixture = Fixture::from_yaml(
            r#"
name: wrong expectation
record: { y: 100 }
cases:
  - name: deliberately wrong
    spec: { type: prop, prop: y }
    expect: false
"#,
        )
        .unwrap();
        let results = fixture.run();
        assert!(!results[0].passed);
        assert!(results[0].trace.matched());
    }

    #[test]
    #[should_panic(expected = "deliberately wrong")]
    fn run_and_assert_panics_on_failure() {
        let fixture = Fixture::from_yaml(
            r#"
name: wrong expectation
cases:
  - name: deliberately wrong
    spec: []
    expect: false
"#,
        )
        .unwrap();
        fixture.run_and_assert();
    }

    #[test]
    fn missing_expect_is_a_parse_error() {
        let result = Fixture::from_yaml(
            r#"
name: broken
cases:
  - name: no expectation
    spec: []
"#,
        );
        assert!(result.is_err());
    }
}
