//! Root manifest inspection.
//!
//! The project root may carry its own `package.json` declaring helper
//! tools (typically `concurrently`, to start both tiers with one command).
//! A root install only makes sense when that manifest actually declares
//! something.

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct RootManifest {
    #[serde(default)]
    dependencies: serde_json::Map<String, serde_json::Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: serde_json::Map<String, serde_json::Value>,
}

/// Why the root install is or is not needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootInstall {
    /// No `package.json` at the root.
    NoManifest,
    /// A manifest exists but declares no dependencies.
    NoHelperDependencies,
    /// The manifest declares at least one dependency.
    Needed,
}

/// Inspect the root manifest to decide whether a root install is needed.
///
/// An unreadable or malformed manifest reads as "no helper dependencies":
/// npm itself would reject it anyway, and a broken root manifest must not
/// stop the per-tier steps.
pub fn root_install(manifest_path: &Path) -> RootInstall {
    if !manifest_path.is_file() {
        return RootInstall::NoManifest;
    }

    let parsed: RootManifest = std::fs::read_to_string(manifest_path)
        .ok()
        .and_then(|content| serde_json::from_str(&content).ok())
        .unwrap_or_default();

    if parsed.dependencies.is_empty() && parsed.dev_dependencies.is_empty() {
        RootInstall::NoHelperDependencies
    } else {
        RootInstall::Needed
    }
}
