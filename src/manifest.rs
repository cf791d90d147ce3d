//! Loading class definitions from manifest files.
//!
//! A manifest is a serialized [`ClassDefinition`]:
//!
//! ```json
//! {
//!   "name": "SimplePrint",
//!   "members": [
//!     { "name": "constructor", "kind": "constructor", "params": [{ "name": "console" }] },
//!     { "name": "print", "params": [{ "name": "something", "type": "String" }], "returns": "i64" },
//!     { "name": "toString", "inherited": true }
//!   ]
//! }
//! ```
//!
//! Files ending in `.toml` are read as TOML, everything else as JSON.

use crate::class::ClassDefinition;
use crate::logging;
use crate::{MockError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Json,
    Toml,
}

impl ManifestFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ManifestFormat::Toml,
            _ => ManifestFormat::Json,
        }
    }
}

/// Read and parse a manifest file.
pub fn load(path: &Path) -> Result<ClassDefinition> {
    logging::log_loading_manifest(&path.to_string_lossy());

    let content = fs::read_to_string(path).map_err(|e| {
        MockError::FileError(format!("Failed to read manifest {:?}: {}", path, e))
    })?;
    let class = parse(&content, ManifestFormat::from_path(path))?;

    logging::log_manifest_loaded(&class.name, class.members.as_ref().map(Vec::len));
    Ok(class)
}

pub fn parse(content: &str, format: ManifestFormat) -> Result<ClassDefinition> {
    match format {
        ManifestFormat::Json => serde_json::from_str(content)
            .map_err(|e| MockError::ManifestError(format!("invalid JSON: {}", e))),
        ManifestFormat::Toml => toml::from_str(content)
            .map_err(|e| MockError::ManifestError(format!("invalid TOML: {}", e))),
    }
}
