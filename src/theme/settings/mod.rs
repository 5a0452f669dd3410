use std::fs;
use std::sync::{Mutex, OnceLock};
use std::time::SystemTime;

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;
use tracing::{debug, warn};

mod parse_keybinds;
mod parse_settings;

use parse_keybinds::parse_keybinds;
use parse_settings::parse_settings;

/// Last parsed settings together with the file mtime they came from.
struct SettingsCache {
    /// Parsed settings.
    settings: Settings,
    /// Modification time of the file when parsed.
    mtime: Option<SystemTime>,
    /// Whether `settings` holds a parsed value yet.
    initialized: bool,
}

static SETTINGS_CACHE: OnceLock<Mutex<SettingsCache>> = OnceLock::new();

/// What: Parse a complete settings file.
///
/// Inputs:
/// - `content`: File contents.
///
/// Output:
/// - Defaults overridden by every recognized setting and keybind.
#[must_use]
pub fn settings_from_str(content: &str) -> Settings {
    let mut out = Settings::default();
    parse_settings(content, &mut out);
    parse_keybinds(content, &mut out);
    out
}

/// What: Load user settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None (reads `settings.conf` if present)
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or unreadable.
///
/// Details:
/// - Re-parses only when the file's modification time changed since the last call.
#[must_use]
pub fn settings() -> Settings {
    let mut cache = SETTINGS_CACHE
        .get_or_init(|| {
            Mutex::new(SettingsCache {
                settings: Settings::default(),
                mtime: None,
                initialized: false,
            })
        })
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);

    let path = resolve_settings_config_path();
    let mtime = path
        .as_ref()
        .and_then(|p| fs::metadata(p).and_then(|m| m.modified()).ok());
    if cache.initialized && cache.mtime == mtime {
        return cache.settings.clone();
    }

    let out = match path.as_ref().map(|p| (p, fs::read_to_string(p))) {
        Some((p, Ok(content))) => {
            debug!(path = %p.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            settings_from_str(&content)
        }
        Some((p, Err(e))) => {
            warn!(path = %p.display(), error = %e, "[Config] settings.conf unreadable, using defaults");
            Settings::default()
        }
        None => {
            debug!("[Config] no settings.conf found, using defaults");
            Settings::default()
        }
    };
    cache.mtime = mtime;
    cache.settings = out.clone();
    cache.initialized = true;
    out
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Settings load from HOME and pick up both values and keybinds
    ///
    /// Inputs:
    /// - Temporary HOME containing `.config/clonedeck/settings.conf`.
    ///
    /// Output:
    /// - Parsed page size and exit binding.
    fn settings_load_from_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let base = tempfile::tempdir().expect("temp dir");
        let cfg = base.path().join(".config").join("clonedeck");
        std::fs::create_dir_all(&cfg).expect("create config dir");
        std::fs::write(
            cfg.join("settings.conf"),
            "page_size = 100\nkeybind_exit = Ctrl+Q\n",
        )
        .expect("write settings");
        unsafe { std::env::set_var("HOME", base.path()) };

        let s = super::settings();
        assert_eq!(s.page_size, 100);
        assert_eq!(s.keymap.exit.len(), 1);

        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
