//! Test fixture loader for Atlas golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One golden scenario: a raw selection and the values it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Habit id → raw level.
    pub selection: BTreeMap<String, i64>,
    pub expect: ScenarioExpectations,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScenarioExpectations {
    /// Metric name (snake_case) → exact value.
    pub metrics: BTreeMap<String, f64>,
    /// Organ id → vulnerability model score.
    pub organ_health: BTreeMap<String, f64>,
    /// Habit id → magnitude.
    pub positive_factors: BTreeMap<String, f64>,
    pub negative_factors: BTreeMap<String, f64>,
    /// Priorities in list order (`critical`, `high`, `moderate`).
    pub recommendation_priorities: Vec<String>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    // The fixtures folder is the one holding golden data, not this crate.
    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Load every scenario under `golden/scenarios`, sorted by file name.
pub fn load_scenarios() -> Vec<Scenario> {
    let dir = fixtures_root().join("golden").join("scenarios");
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|p| {
            let name = p
                .strip_prefix(fixtures_root())
                .unwrap_or(p)
                .to_string_lossy()
                .into_owned();
            load_fixture(&name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().join("golden").exists());
    }

    #[test]
    fn golden_scenarios_parse() {
        for f in [
            "golden/scenarios/all_zero.json",
            "golden/scenarios/heavy_smoker.json",
            "golden/scenarios/healthy_core.json",
            "golden/scenarios/harmful_max.json",
        ] {
            assert!(fixture_exists(f), "Missing fixture: {f}");
        }
        let scenarios = load_scenarios();
        assert_eq!(scenarios.len(), 4);
        assert!(scenarios.iter().all(|s| !s.name.is_empty()));
    }
}
