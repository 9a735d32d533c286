use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding `.kay` test programs
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a test fixture from tests/fixtures/
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Discover all .kay files in a fixtures subdirectory
pub fn discover(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_dir().join(subdir);

    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", dir.display(), e))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                == Some("kay")
        })
        .collect();
    paths.sort();
    paths
}
