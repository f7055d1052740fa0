use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_APP_IDS: [&str; 18] = [
    "about",
    "terminal",
    "projects",
    "youtube",
    "settings",
    "files",
    "calculator",
    "editor",
    "android",
    "chess",
    "ludo",
    "uno",
    "gamecenter",
    "devstudio",
    "word",
    "excel",
    "powerpoint",
    "odoo",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Icon {
    glyph: String,
    color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Position {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Size {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogEntry {
    id: String,
    icon: Icon,
    position: Position,
    size: Size,
    #[serde(default)]
    maximized: bool,
    #[serde(default)]
    open_at_boot: bool,
    show_in_dock: bool,
    show_on_desktop: bool,
}

#[derive(Debug, Deserialize)]
struct Catalog {
    schema_version: u32,
    apps: Vec<CatalogEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: Catalog = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &catalog.apps {
        if !KNOWN_APP_IDS.contains(&entry.id.as_str()) {
            panic!("unknown app id `{}` in {}", entry.id, path.display());
        }
        if !seen.insert(entry.id.as_str()) {
            panic!("duplicate app id `{}` in {}", entry.id, path.display());
        }
        if entry.size.width <= 0 || entry.size.height <= 0 {
            panic!("non-positive default size for `{}`", entry.id);
        }
    }
    let missing: Vec<_> = KNOWN_APP_IDS
        .iter()
        .filter(|id| !seen.contains(**id))
        .collect();
    if !missing.is_empty() {
        panic!("catalog {} is missing apps: {missing:?}", path.display());
    }

    let json = serde_json::to_string_pretty(&catalog.apps).expect("serialize app catalog");
    let generated = format!(
        "/// Build-time generated application catalog JSON.\n\
pub const APP_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
