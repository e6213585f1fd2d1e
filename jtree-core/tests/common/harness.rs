//! Test harness for running fixture cases with stochastic whitespace

use crate::common::{ExpectedNode, Gen, TestCase};
use jtree_core::{Lexer, Member, ParseError, Parser, ParserOptions, TokenKind, Value};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub expected: Vec<String>,
    pub actual: Vec<String>,
    pub seed: u64,
    pub errors: Vec<String>,
}

fn options_for(case: &TestCase) -> ParserOptions {
    match case.max_depth {
        Some(depth) => ParserOptions::new().with_max_depth(depth),
        None => ParserOptions::default(),
    }
}

/// Flatten a tree into a node sequence, depth first.
pub fn flatten(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    flatten_into(value, &mut out);
    out
}

fn flatten_into(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::Null => out.push("Null".to_string()),
        Value::Bool(true) => out.push("True".to_string()),
        Value::Bool(false) => out.push("False".to_string()),
        Value::Number(n) => out.push(format!("Number {:?}", n.to_string())),
        Value::String(s) => out.push(format!("String {:?}", s)),
        Value::Array(items) => {
            out.push("ArrayStart".to_string());
            for item in items {
                flatten_into(item, out);
            }
            out.push("ArrayEnd".to_string());
        }
        Value::Object(members) => {
            out.push("ObjectStart".to_string());
            for member in members {
                out.push(format!("Key {:?}", member.key));
                flatten_into(&member.value, out);
            }
            out.push("ObjectEnd".to_string());
        }
    }
}

/// Convert a serde_json tree into ours, for use as an oracle.
///
/// Needs serde_json's `preserve_order` so members keep source order. Only
/// meaningful for documents without string escapes, which serde_json
/// decodes and we keep verbatim.
pub fn from_serde(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => Value::Array(items.iter().map(from_serde).collect()),
        serde_json::Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| Member::new(k.as_str(), from_serde(v)))
                .collect(),
        ),
    }
}

fn format_error(err: &ParseError) -> String {
    format!("Error {:?}", err.code)
}

/// Format expected node for comparison
fn format_expected(node: &ExpectedNode) -> String {
    match node {
        ExpectedNode::Bare(name) => name.clone(),
        ExpectedNode::WithContent(name, content) => format!("{} {:?}", name, content),
    }
}

fn expected_lines(case: &TestCase) -> Vec<String> {
    match &case.error {
        Some(code) => vec![format!("Error {}", code)],
        None => case.tree.iter().map(format_expected).collect(),
    }
}

fn actual_lines(input: &str, options: ParserOptions) -> Vec<String> {
    match Parser::with_options(input, options).parse_document() {
        Ok(value) => flatten(&value),
        Err(err) => vec![format_error(&err)],
    }
}

fn compare(expected: &[String], actual: &[String]) -> Vec<String> {
    let mut errors = Vec::new();
    if actual.len() != expected.len() {
        errors.push(format!(
            "Node count mismatch: expected {}, got {}",
            expected.len(),
            actual.len()
        ));
    }
    for (i, (act, exp)) in actual.iter().zip(expected.iter()).enumerate() {
        if act != exp {
            errors.push(format!("Node {}: expected '{}', got '{}'", i, exp, act));
        }
    }
    errors
}

/// Run a single test case (canonical, no variations)
pub fn run_test(case: &TestCase) -> TestResult {
    let expected = expected_lines(case);
    let actual = actual_lines(&case.json, options_for(case));
    let errors = compare(&expected, &actual);

    TestResult {
        passed: errors.is_empty(),
        input: case.json.clone(),
        expected,
        actual,
        seed: 0,
        errors,
    }
}

/// Run a valid-document case with its whitespace re-randomized.
///
/// Every whitespace token is replaced with a fresh non-empty run, and a
/// possibly empty run is inserted between every other pair of tokens and
/// around the document. The tree must not change. Cases expecting an
/// error, or whose input does not lex, are returned as passed unchanged.
pub fn run_with_variations(case: &TestCase, gen: &mut Gen) -> TestResult {
    let expected = expected_lines(case);
    let tokens = match Lexer::new(&case.json).collect::<Result<Vec<_>, _>>() {
        Ok(tokens) if case.error.is_none() => tokens,
        _ => {
            return TestResult {
                passed: true,
                input: case.json.clone(),
                expected: expected.clone(),
                actual: expected,
                seed: gen.seed,
                errors: Vec::new(),
            }
        }
    };

    let mut input = gen.gap();
    for token in &tokens {
        if token.kind == TokenKind::Whitespace {
            input.push_str(&gen.whitespace());
        } else {
            input.push_str(token.text);
            input.push_str(&gen.gap());
        }
    }

    let actual = actual_lines(&input, options_for(case));
    let errors = compare(&expected, &actual);

    TestResult {
        passed: errors.is_empty(),
        input,
        expected,
        actual,
        seed: gen.seed,
        errors,
    }
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set JTREE_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput:");
        eprintln!("{:?}", self.input);
        eprintln!("\nExpected nodes:");
        for (i, e) in self.expected.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nActual nodes:");
        for (i, e) in self.actual.iter().enumerate() {
            eprintln!("  {}: {}", i, e);
        }
        eprintln!("\nErrors:");
        for e in &self.errors {
            eprintln!("  - {}", e);
        }
    }
}
