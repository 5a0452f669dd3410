use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the config base.
const APP_DIR: &str = "clonedeck";

/// What: Collect candidate locations of a config file, in priority order.
///
/// Inputs:
/// - `file`: File name such as `settings.conf`.
///
/// Output:
/// - `$HOME/.config/clonedeck/<file>` then `$XDG_CONFIG_HOME/clonedeck/<file>`.
fn candidates(file: &str) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();
    if let Ok(h) = env::var("HOME") {
        out.push(Path::new(&h).join(".config").join(APP_DIR).join(file));
    }
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME")
        && !xdg.trim().is_empty()
    {
        out.push(Path::new(&xdg).join(APP_DIR).join(file));
    }
    out
}

/// Determine the settings file path, if one exists.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    candidates("settings.conf").into_iter().find(|p| p.is_file())
}

/// Determine the theme file path, if one exists.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    candidates("theme.conf").into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Config directory for clonedeck (ensured to exist).
///
/// Prefers `$HOME/.config/clonedeck`, falling back to `$XDG_CONFIG_HOME/clonedeck`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/clonedeck/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Config and log directories live under HOME and are created
    fn paths_config_logs_under_home() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let orig_home = std::env::var_os("HOME");
        let base = tempfile::tempdir().expect("temp dir");
        unsafe { std::env::set_var("HOME", base.path()) };
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        assert!(cfg.ends_with("clonedeck"));
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
        assert!(super::resolve_settings_config_path().is_none());
        std::fs::write(cfg.join("settings.conf"), "page_size = 50\n").expect("write settings");
        assert_eq!(
            super::resolve_settings_config_path(),
            Some(cfg.join("settings.conf"))
        );
        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
