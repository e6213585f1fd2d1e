//! Fixture loading from YAML files

use serde::Deserialize;
use std::path::Path;

/// A single test case from a fixture file.
///
/// A case expects either a `tree` (flattened, see `harness::flatten`) or an
/// `error` code name, never both.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub desc: String,
    pub json: String,
    #[serde(default)]
    pub tree: Vec<ExpectedNode>,
    #[serde(default)]
    pub error: Option<String>,
    /// Override for `ParserOptions::max_depth`.
    #[serde(default)]
    pub max_depth: Option<usize>,
}

/// Expected node - either a bare name or [name, content]
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ExpectedNode {
    /// Structural or content-free node (ObjectStart, True, Null, ...)
    Bare(String),
    /// Node with content [Key, "name"], [Number, "1.5"], [String, "x"]
    WithContent(String, String),
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}
