//! Visual theme and styling.

use console::Style;

/// Groundwork's visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for success lines (green).
    pub success: Style,
    /// Style for error lines (red bold).
    pub error: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (bold).
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            error: Style::new().red().bold(),
            warning: Style::new().color256(208),
            dim: Style::new().dim(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            error: Style::new(),
            warning: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success line (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format an error line (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a warning line (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format a skipped line (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }
}
