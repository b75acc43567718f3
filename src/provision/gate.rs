//! Existence gating.
//!
//! Idempotence rests on one pure predicate: does the artifact a step would
//! create already exist? Kind matters; a file where a directory is
//! expected does not satisfy the gate. Filesystem errors (e.g. permission
//! denied on a parent) read as "absent": re-provisioning is preferred over
//! silently skipping, and if the provisioning action itself then fails the
//! step surfaces that as a non-fatal outcome.

use std::path::{Path, PathBuf};

/// What kind of filesystem entry a provisioning step produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Directory,
    File,
}

/// One thing that may or may not already exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningTarget {
    pub path: PathBuf,
    pub kind: TargetKind,
}

impl ProvisioningTarget {
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: TargetKind::Directory,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: TargetKind::File,
        }
    }
}

/// True iff the target exists with the expected kind.
pub fn exists(target: &ProvisioningTarget) -> bool {
    match target.kind {
        TargetKind::Directory => target.path.is_dir(),
        TargetKind::File => target.path.is_file(),
    }
}

/// Convenience gate for a directory path.
pub fn dir_exists(path: &Path) -> bool {
    exists(&ProvisioningTarget::directory(path))
}

/// Convenience gate for a regular-file path.
pub fn file_exists(path: &Path) -> bool {
    exists(&ProvisioningTarget::file(path))
}
