//! Test fixture helpers for creating site directories
//!
//! Provides utilities for setting up a temp directory holding a
//! `.velura.toml` and, optionally, a catalog document.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use velura::catalog::BUILTIN_CATALOG;
use velura::config::CONFIG_FILE_NAME;

/// Re-export anyhow for convenience
pub use anyhow;

/// A minimal catalog: three steps, one product, one ingredient, one
/// two-option question and one rule
pub const SMALL_CATALOG: &str = r#"
version = "small-1"

[[steps]]
id = "a"
name = "Cleanse"
time = "both"
category = "Cleanse"
description = "Wash"

[[steps]]
id = "b"
name = "Sunscreen"
time = "morning"
category = "Protect"
description = "Shield"

[[steps]]
id = "c"
name = "Night Cream"
time = "evening"
category = "Hydrate"
description = "Restore"

[[products]]
id = "p1"
name = "Daily Shield"
category = "SPF"
description = "Mineral sunscreen"
ingredients = ["Zinc"]
price = 30
rating = 4.5
reviews = 12
skin-types = ["All"]
color = "amber"

[[ingredients]]
id = "zinc"
name = "Zinc"
scientific-name = "Zinc Oxide"
icon = "Z"
color = "grey"
benefits = ["Protects"]
best-for = ["All"]
description = "Mineral filter"
avoid-with = []

[[questions]]
id = "sun"
prompt = "How much sun do you get?"
options = [
  { value = "lots", label = "Lots" },
  { value = "little", label = "Little" },
]

[[rules]]
question = "sun"
answer = "lots"
products = ["Daily Shield"]
ingredients = ["Zinc"]
"#;

/// A site directory with a `.velura.toml` holding `config`
pub fn site_with_config(config: &str) -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config)?;
    Ok(temp_dir)
}

/// A site directory whose config points at a catalog file
///
/// # Returns
///
/// A tuple of (TempDir, PathBuf to .velura.toml) - the TempDir must be kept alive
pub fn site_with_catalog(catalog: &str) -> anyhow::Result<(TempDir, PathBuf)> {
    let temp_dir = site_with_config("catalog = \"catalog.toml\"\n")?;
    fs::write(temp_dir.path().join("catalog.toml"), catalog)?;
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    Ok((temp_dir, config_path))
}

/// The built-in catalog document with a different version string
pub fn builtin_copy(version: &str) -> String {
    BUILTIN_CATALOG.replacen("version = \"2024.1\"", &format!("version = \"{}\"", version), 1)
}
