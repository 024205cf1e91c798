//! Target package metadata resolution.
//! Reads the component library's package.json to discover the name under
//! which the library is importable; wrapper templates depend on it.

use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Manifest file name of the target package
pub const MANIFEST_FILE: &str = "package.json";

#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: Option<String>,
}

/// Resolved metadata of the target component library package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageContext {
    /// Name under which the library package is importable
    pub package_name: String,
}

/// Reads the target package's manifest and extracts its importable name.
///
/// This is a precondition of the whole run and is checked before any prompt
/// is shown.
///
/// # Arguments
/// * `package_dir` - Root directory of the component library package
///
/// # Errors
/// * `Error::ManifestError` if the manifest is unreadable, unparseable, or
///   carries no usable `name` field
pub fn resolve_package_context<P: AsRef<Path>>(package_dir: P) -> Result<PackageContext> {
    let manifest_path = package_dir.as_ref().join(MANIFEST_FILE);
    debug!("Reading package manifest from {}", manifest_path.display());

    let content = fs::read_to_string(&manifest_path).map_err(|e| {
        Error::ManifestError(format!("cannot read '{}': {}", manifest_path.display(), e))
    })?;

    let manifest: PackageManifest = serde_json::from_str(&content).map_err(|e| {
        Error::ManifestError(format!("invalid '{}': {}", manifest_path.display(), e))
    })?;

    let package_name = manifest
        .name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            Error::ManifestError(format!(
                "no \"name\" field in '{}'",
                manifest_path.display()
            ))
        })?;

    Ok(PackageContext { package_name })
}
