//! Theme system for human-mode output.

use console::Style;

/// Visual theme for hashguard human-mode output.
///
/// Centralizes colors and styles for consistent rendering.
pub struct HgTheme {
    // Status colors
    pub success: Style,
    pub error: Style,
    pub warning: Style,

    // Component styles
    pub header: Style,
    pub label: Style,
    pub value: Style,
    pub algorithm: Style,
    pub hash: Style,
}

impl Default for HgTheme {
    fn default() -> Self {
        Self {
            success: Style::new().green().bold(),
            error: Style::new().red().bold(),
            warning: Style::new().yellow(),
            header: Style::new().bold(),
            label: Style::new().dim(),
            value: Style::new().bold(),
            algorithm: Style::new().cyan(),
            hash: Style::new().dim(),
        }
    }
}
