//! Run options.

/// Process-wide configuration, parsed once from the CLI surface and passed
/// by reference into every component. Never mutated after construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Re-run all install/migrate steps unconditionally.
    pub force: bool,
}
