use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Fixture {
    pub name: String,
    pub category: String,
    pub path: PathBuf,
    pub expectations: Expectations,
}

/// Contents of a fixture's `expectations.json`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Expectations {
    pub exit_code: i32,
    pub mode: Option<String>,
    pub files: Vec<String>,
    pub contains: HashMap<String, Vec<String>>,
    pub absent: HashMap<String, Vec<String>>,
    pub diagnostics: Vec<String>,
    pub stderr: Vec<String>,
}

#[allow(dead_code)]
pub fn find_fixtures() -> Vec<Fixture> {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let base_path = Path::new(&manifest_dir).join("tests/fixtures");

    let categories = vec!["single-module", "multi-module", "edge-cases"];
    let mut fixtures = Vec::new();

    for category in categories {
        let category_path = base_path.join(category);
        if !category_path.exists() {
            continue;
        }

        let entries = std::fs::read_dir(&category_path)
            .unwrap_or_else(|_| panic!("Failed to read directory: {:?}", category_path));

        for entry in entries {
            let entry = entry.expect("Failed to read entry");
            let path = entry.path();

            if !path.is_dir() {
                continue;
            }

            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }

            let expectations_path = path.join("expectations.json");
            if !expectations_path.exists() {
                continue;
            }
            let content = std::fs::read_to_string(&expectations_path)
                .unwrap_or_else(|_| panic!("Failed to read {}", expectations_path.display()));
            let expectations: Expectations = serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Invalid {}: {}", expectations_path.display(), e));

            fixtures.push(Fixture {
                name,
                category: category.to_string(),
                path,
                expectations,
            });
        }
    }

    fixtures.sort_by(|a, b| a.category.cmp(&b.category).then(a.name.cmp(&b.name)));

    fixtures
}
