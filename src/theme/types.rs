use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Color;

use crate::logic::paginate::DEFAULT_PAGE_SIZE;
use crate::sources::DEFAULT_API_URL;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Subtle surface color for component backgrounds (level 1).
    pub surface1: Color,
    /// Subtle surface color for component backgrounds (level 2).
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            surface1: Color::Rgb(0x45, 0x47, 0x5a),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// API root used when no `--api-url` is given.
    pub api_url: String,
    /// Rows per page in the disk and image tables.
    pub page_size: usize,
    /// Per-request HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Whether the clone summary pane is shown under the disk table.
    pub show_summary_pane: bool,
    /// Default log level when neither `--log-level` nor `RUST_LOG` is set.
    pub log_level: String,
    /// Configurable key bindings parsed from `keybind_*` entries.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 15,
            show_summary_pane: true,
            log_level: "info".to_string(),
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// Return a short display label such as "Ctrl+R", "Space", "PgDn".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }

    /// Whether a key event with `code` and `mods` triggers this chord.
    #[must_use]
    pub fn matches(&self, code: KeyCode, mods: KeyModifiers) -> bool {
        self.code == code && self.mods == mods
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    /// Toggle the focused disk, config, or nothing in the image pane.
    pub toggle: Vec<KeyChord>,
    /// Move the cursor up.
    pub move_up: Vec<KeyChord>,
    /// Move the cursor down.
    pub move_down: Vec<KeyChord>,
    /// Show the next page of the focused table.
    pub next_page: Vec<KeyChord>,
    /// Show the previous page of the focused table.
    pub prev_page: Vec<KeyChord>,
    /// Cycle the page size of the focused table.
    pub page_size: Vec<KeyChord>,
    /// Move focus to the next pane.
    pub focus_next: Vec<KeyChord>,
    /// Re-fetch the image list.
    pub refresh: Vec<KeyChord>,
    /// Deselect everything.
    pub clear: Vec<KeyChord>,
    /// Re-read `theme.conf`.
    pub reload_theme: Vec<KeyChord>,
    /// Quit.
    pub exit: Vec<KeyChord>,
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{Char, Down, Esc, Left, PageDown, PageUp, Right, Tab, Up};
        let ctrl = |c: char| KeyChord {
            code: Char(c),
            mods: KeyModifiers::CONTROL,
        };
        Self {
            toggle: vec![KeyChord::plain(Char(' ')), KeyChord::plain(KeyCode::Enter)],
            move_up: vec![KeyChord::plain(Up), KeyChord::plain(Char('k'))],
            move_down: vec![KeyChord::plain(Down), KeyChord::plain(Char('j'))],
            next_page: vec![KeyChord::plain(Right), KeyChord::plain(PageDown)],
            prev_page: vec![KeyChord::plain(Left), KeyChord::plain(PageUp)],
            page_size: vec![KeyChord::plain(Char('s'))],
            focus_next: vec![KeyChord::plain(Tab)],
            refresh: vec![ctrl('r')],
            clear: vec![KeyChord::plain(Char('x'))],
            reload_theme: vec![ctrl('t')],
            exit: vec![KeyChord::plain(Char('q')), KeyChord::plain(Esc), ctrl('c')],
        }
    }
}

/// Whether any chord in `list` matches the pressed key.
#[must_use]
pub fn matches_any(list: &[KeyChord], code: KeyCode, mods: KeyModifiers) -> bool {
    list.iter().any(|c| c.matches(code, mods))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Chord labels render modifiers and special keys
    fn chord_labels() {
        assert_eq!(KeyChord::plain(KeyCode::Char(' ')).label(), "Space");
        assert_eq!(
            KeyChord {
                code: KeyCode::Char('r'),
                mods: KeyModifiers::CONTROL
            }
            .label(),
            "Ctrl+R"
        );
        assert_eq!(KeyChord::plain(KeyCode::PageDown).label(), "PgDn");
    }

    #[test]
    /// What: Default keymap toggles on Space and exits on q
    fn default_keymap_bindings() {
        let km = KeyMap::default();
        assert!(matches_any(
            &km.toggle,
            KeyCode::Char(' '),
            KeyModifiers::empty()
        ));
        assert!(matches_any(&km.exit, KeyCode::Char('q'), KeyModifiers::empty()));
        assert!(!matches_any(
            &km.exit,
            KeyCode::Char('q'),
            KeyModifiers::CONTROL
        ));
    }
}
