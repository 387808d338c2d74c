use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    app_id: String,
    title: String,
    icon_id: String,
    base_width: f64,
    base_height: f64,
    #[serde(default)]
    fullscreen_capable: bool,
    #[serde(default = "default_true")]
    show_in_dock: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LinkManifest {
    name: String,
    icon_id: String,
    url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    apps: Vec<AppManifest>,
    #[serde(default)]
    links: Vec<LinkManifest>,
}

fn default_true() -> bool {
    true
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("app_catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if catalog.schema_version != 1 {
        panic!(
            "catalog schema mismatch in {}: expected 1 found {}",
            path.display(),
            catalog.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for app in &catalog.apps {
        if !seen.insert(app.app_id.clone()) {
            panic!("duplicate app id `{}` in {}", app.app_id, path.display());
        }
        if app.base_width <= 0.0 || app.base_height <= 0.0 {
            panic!(
                "app `{}` in {} must declare positive base dimensions",
                app.app_id,
                path.display()
            );
        }
    }
    for link in &catalog.links {
        if !link.url.starts_with("https://") {
            panic!("desktop link `{}` must use https", link.name);
        }
    }

    let json = serde_json::to_string_pretty(&catalog).expect("serialize app catalog");
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
