//! Reads the currently published version from a project manifest.
//!
//! `package.json` (and any other `.json` file) must carry a top-level string
//! `version`. TOML manifests are read from `package.version`, falling back to
//! `workspace.package.version`.

use std::fs;
use std::path::Path;

use crate::error::{ReleaseGateError, Result};

/// Manifest flavours release-gate understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    Json,
    Toml,
}

impl ManifestKind {
    /// Pick the flavour from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ManifestKind::Json),
            Some("toml") => Ok(ManifestKind::Toml),
            _ => Err(ReleaseGateError::manifest(format!(
                "unsupported manifest {}: expected a .json or .toml file",
                path.display()
            ))),
        }
    }
}

/// Read the current version string from the manifest at `path`.
pub fn read_current_version(path: &Path) -> Result<String> {
    let kind = ManifestKind::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|e| {
        ReleaseGateError::manifest(format!("cannot read {}: {}", path.display(), e))
    })?;

    let version = match kind {
        ManifestKind::Json => version_from_json(&text),
        ManifestKind::Toml => version_from_toml(&text),
    }
    .map_err(|reason| ReleaseGateError::manifest(format!("{}: {}", path.display(), reason)))?;

    tracing::debug!(path = %path.display(), %version, "read current version");
    Ok(version)
}

fn version_from_json(text: &str) -> std::result::Result<String, String> {
    let manifest: serde_json::Value =
        serde_json::from_str(text).map_err(|e| format!("invalid JSON: {}", e))?;

    match manifest.get("version") {
        Some(serde_json::Value::String(v)) if !v.is_empty() => Ok(v.clone()),
        _ => Err("could not read a valid \"version\" field".to_string()),
    }
}

fn version_from_toml(text: &str) -> std::result::Result<String, String> {
    let manifest: toml::Table = text
        .parse()
        .map_err(|e: toml::de::Error| format!("invalid TOML: {}", e))?;

    let package_version = manifest
        .get("package")
        .and_then(|package| package.get("version"));
    let workspace_version = manifest
        .get("workspace")
        .and_then(|workspace| workspace.get("package"))
        .and_then(|package| package.get("version"));

    match package_version.or(workspace_version) {
        Some(toml::Value::String(v)) if !v.is_empty() => Ok(v.clone()),
        _ => Err("could not read a valid \"package.version\" field".to_string()),
    }
}
