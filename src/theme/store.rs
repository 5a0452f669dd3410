use std::fs;
use std::path::Path;
use std::sync::{OnceLock, RwLock};

use super::parsing::{parse_assignment, parse_color_value};
use super::paths::resolve_theme_config_path;
use super::types::Theme;

/// Global theme store with live-reload capability.
static THEME_STORE: OnceLock<RwLock<Theme>> = OnceLock::new();

/// What: Parse theme overrides on top of the built-in palette.
///
/// Inputs:
/// - `content`: `theme.conf` contents with `name = color` lines.
///
/// Output:
/// - `Ok(Theme)` with every recognized override applied.
/// - `Err(message)` listing unknown keys or invalid colors (one per line).
///
/// # Errors
/// - Returns `Err` when any line names an unknown color or holds an invalid value.
pub fn parse_theme(content: &str) -> Result<Theme, String> {
    let mut t = Theme::default();
    let mut problems: Vec<String> = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let Some((key, val)) = parse_assignment(line) else {
            continue;
        };
        let Some(color) = parse_color_value(val) else {
            problems.push(format!("line {}: invalid color '{val}' for '{key}'", idx + 1));
            continue;
        };
        let slot = match key.as_str() {
            "base" | "background" => &mut t.base,
            "surface1" | "surface_level1" => &mut t.surface1,
            "surface2" | "surface_level2" => &mut t.surface2,
            "overlay1" | "overlay_primary" => &mut t.overlay1,
            "overlay2" | "overlay_secondary" => &mut t.overlay2,
            "text" | "text_primary" => &mut t.text,
            "subtext0" | "text_secondary" => &mut t.subtext0,
            "sapphire" | "accent_interactive" => &mut t.sapphire,
            "mauve" | "accent_heading" => &mut t.mauve,
            "green" | "semantic_success" => &mut t.green,
            "yellow" | "semantic_warning" => &mut t.yellow,
            "red" | "semantic_error" => &mut t.red,
            "lavender" | "accent_border" => &mut t.lavender,
            _ => {
                problems.push(format!("line {}: unknown color key '{key}'", idx + 1));
                continue;
            }
        };
        *slot = color;
    }
    if problems.is_empty() {
        Ok(t)
    } else {
        Err(problems.join("\n"))
    }
}

/// What: Load the theme from `path`.
///
/// # Errors
/// - Returns `Err` when the file is unreadable or contains invalid entries.
fn load_theme_from_file(path: &Path) -> Result<Theme, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse_theme(&content)
}

/// Load the startup theme; a missing or broken theme file falls back to the built-in palette.
fn load_initial_theme() -> Theme {
    let Some(path) = resolve_theme_config_path() else {
        return Theme::default();
    };
    match load_theme_from_file(&path) {
        Ok(t) => {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            t
        }
        Err(msg) => {
            tracing::error!(path = %path.display(), error = %msg, "theme configuration errors; using defaults");
            Theme::default()
        }
    }
}

/// Return the application's theme palette, loading `theme.conf` on first use.
#[must_use]
pub fn theme() -> Theme {
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_initial_theme()));
    *lock
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Reload the theme from disk without restarting the app.
///
/// # Errors
/// - Returns `Err(message)` when no theme file exists or it contains invalid entries.
pub fn reload_theme() -> Result<(), String> {
    let Some(path) = resolve_theme_config_path() else {
        return Err("No theme configuration file found".to_string());
    };
    let new_theme = load_theme_from_file(&path)?;
    let lock = THEME_STORE.get_or_init(|| RwLock::new(load_initial_theme()));
    let mut guard = lock
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *guard = new_theme;
    tracing::info!(path = %path.display(), "theme reloaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    /// What: Overrides apply and problems are reported per line
    fn parse_theme_overrides_and_errors() {
        let t = parse_theme("# palette\nbase = #000000\ntext_primary = 255,255,255\n")
            .expect("valid theme");
        assert_eq!(t.base, Color::Rgb(0, 0, 0));
        assert_eq!(t.text, Color::Rgb(255, 255, 255));
        assert_eq!(t.red, Theme::default().red);

        let err = parse_theme("base = nope\nsparkle = #ffffff\n").expect_err("invalid theme");
        assert!(err.contains("line 1"));
        assert!(err.contains("unknown color key 'sparkle'"));
    }
}
