use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifestEntry {
    id: String,
    title: String,
    icon: String,
    #[serde(default)]
    hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct WindowManifest {
    schema_version: u32,
    windows: Vec<WindowManifestEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("windows.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: WindowManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = HashSet::new();
    for entry in &manifest.windows {
        if entry.id.is_empty() || entry.id.contains(',') {
            panic!("invalid window id `{}` in {}", entry.id, path.display());
        }
        if !seen.insert(entry.id.clone()) {
            panic!("duplicate window id `{}` in {}", entry.id, path.display());
        }
    }

    let json =
        serde_json::to_string_pretty(&manifest.windows).expect("serialize window catalog");
    let generated = format!(
        "/// Build-time generated window catalog JSON.\n\
pub const WINDOW_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
