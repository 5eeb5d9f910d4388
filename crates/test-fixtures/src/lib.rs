//! Test fixture loader and builders for Tagfolio scenarios.
//!
//! JSON scenarios live under `crates/test-fixtures/scenarios/`; the builder
//! functions keep hand-written roadmaps short in unit and integration tests.

pub mod builders;

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Directory holding the scenario snapshots, resolved at compile time so
/// every dependent crate sees the same location.
pub fn scenarios_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

/// Deserialize `<relative_path>` under this crate, panicking with the
/// parse context on failure.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    try_load_fixture(relative_path).unwrap_or_else(|e| panic!("{e:#}"))
}

pub fn try_load_fixture<T: DeserializeOwned>(relative_path: &str) -> anyhow::Result<T> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(relative_path);
    read_json(&path)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading fixture {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing fixture {}", path.display()))
}

/// Every scenario snapshot by file stem, sorted by name.
pub fn all_scenarios<T: DeserializeOwned>() -> anyhow::Result<Vec<(String, T)>> {
    let dir = scenarios_dir();
    let mut names: Vec<PathBuf> = std::fs::read_dir(&dir)
        .with_context(|| format!("listing {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            Ok((stem, read_json(&path)?))
        })
        .collect()
}
