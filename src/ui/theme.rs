use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for the few kinds of line sug prints.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Listing headings
    pub heading: Style,
    /// "Successfully converted" lines
    pub converted: Style,
    /// Per-file conversion failures
    pub failed: Style,
    /// Batch summary warnings
    pub warning: Style,
    /// Output paths and summary labels
    pub path: Style,
}

impl Theme {
    /// Colors only when stdout is a terminal and console's color switch (`CLICOLOR`) is on.
    pub fn detect() -> Self {
        if console::Term::stdout().is_term() && console::colors_enabled() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn colored() -> Self {
        Self {
            heading: Style::new().cyan().bold(),
            converted: Style::new().green(),
            failed: Style::new().red(),
            warning: Style::new().yellow().bold(),
            path: Style::new().bright_black(),
        }
    }

    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            converted: Style::new(),
            failed: Style::new(),
            warning: Style::new(),
            path: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
