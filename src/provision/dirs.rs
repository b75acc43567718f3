//! Runtime directory provisioning.

use std::path::PathBuf;

use super::gate;
use super::outcome::StepOutcome;

/// Create each directory (and parents) if absent.
///
/// One aggregated outcome covers the whole sequence: all pre-existing →
/// skipped, anything created → succeeded. A creation error is recorded but
/// the remaining paths are still attempted.
pub fn ensure_all(name: &str, paths: &[PathBuf]) -> StepOutcome {
    let mut created = 0usize;
    let mut first_error: Option<String> = None;

    for path in paths {
        if gate::dir_exists(path) {
            continue;
        }
        match std::fs::create_dir_all(path) {
            Ok(()) => created += 1,
            Err(e) => {
                tracing::warn!("could not create {}: {}", path.display(), e);
                if first_error.is_none() {
                    first_error = Some(format!("{}: {}", path.display(), e));
                }
            }
        }
    }

    match first_error {
        Some(reason) => StepOutcome::failed(name, reason),
        None if created == 0 => StepOutcome::skipped(name, "all present"),
        None => StepOutcome::succeeded(name),
    }
}
