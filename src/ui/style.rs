//! Explicit style configuration handed to the views.
//!
//! Views never look the theme up themselves; callers build a [`TableStyle`]
//! from the active [`Theme`] (or any other source) and pass it in.

use ratatui::style::{Modifier, Style};

use crate::theme::Theme;

/// Check box glyph for checked rows.
pub const CHECKED_GLYPH: &str = "[x]";
/// Check box glyph for unchecked rows.
pub const UNCHECKED_GLYPH: &str = "[ ]";

/// Styles used by the paginated table views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableStyle {
    /// Pane background.
    pub background: Style,
    /// Border of an unfocused pane.
    pub border: Style,
    /// Border of the focused pane.
    pub border_focused: Style,
    /// Pane title.
    pub title: Style,
    /// Column header row.
    pub header: Style,
    /// Regular cell text.
    pub cell: Style,
    /// Secondary cell text (sizes, ids).
    pub cell_muted: Style,
    /// Ticked, user-controlled check box.
    pub checked: Style,
    /// Empty check box.
    pub unchecked: Style,
    /// Check box and label of a row locked by a selected configuration.
    pub disabled: Style,
    /// Row under the cursor while the pane is focused.
    pub cursor: Style,
    /// "No data" placeholder row.
    pub placeholder: Style,
    /// Pagination footer text.
    pub footer: Style,
    /// Error text.
    pub error: Style,
}

impl TableStyle {
    /// What: Derive table styles from a theme palette.
    ///
    /// Inputs:
    /// - `th`: Palette to draw colors from.
    ///
    /// Output:
    /// - Styles for every table element.
    #[must_use]
    pub fn from_theme(th: &Theme) -> Self {
        Self {
            background: Style::default().bg(th.base),
            border: Style::default().fg(th.surface2),
            border_focused: Style::default().fg(th.mauve),
            title: Style::default().fg(th.overlay1),
            header: Style::default()
                .fg(th.subtext0)
                .add_modifier(Modifier::BOLD),
            cell: Style::default().fg(th.text),
            cell_muted: Style::default().fg(th.overlay2),
            checked: Style::default().fg(th.green).add_modifier(Modifier::BOLD),
            unchecked: Style::default().fg(th.overlay1),
            disabled: Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::DIM),
            cursor: Style::default().bg(th.surface1),
            placeholder: Style::default()
                .fg(th.subtext0)
                .add_modifier(Modifier::ITALIC),
            footer: Style::default().fg(th.overlay1),
            error: Style::default().fg(th.red),
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}
