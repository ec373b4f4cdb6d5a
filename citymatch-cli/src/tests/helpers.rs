//! Fixture files for recommend CLI tests.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Write `contents` to `path`, failing the test on IO errors.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A city record that matches the default preferences exactly.
pub(super) fn city_json(name: &str) -> Value {
    json!({
        "name": name,
        "climate": 1,
        "population": 1,
        "city_rhythm": 1,
        "weather_stability": 1,
        "infrastructure": 2,
        "greenery": 2,
        "safety": 5,
        "cultural_activities": 5,
        "work_mode": [1, 2],
        "lifestyle": [2],
        "preferred_objects": [1, 3],
        "green_preference": 1,
    })
}

/// Temporary workspace holding a preferences file and a catalog.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write a JSON value under `name` and return its path.
    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.root.join(name);
        let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
        write_utf8(&path, &payload);
        path
    }

    /// Write a catalog with the given cities and return its path.
    pub(super) fn catalog(&self, cities: &[Value]) -> Utf8PathBuf {
        self.write_json("cities.json", &Value::Array(cities.to_vec()))
    }

    /// Write a preferences file and return its path.
    pub(super) fn preferences(&self, value: &Value) -> Utf8PathBuf {
        self.write_json("preferences.json", value)
    }
}
