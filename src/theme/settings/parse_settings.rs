use crate::logic::paginate::PAGE_SIZES;
use crate::theme::parsing::{parse_assignment, parse_bool};
use crate::theme::types::Settings;

/// What: Parse non-keybind settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Unknown keys and unparsable values are ignored so a typo never blocks startup.
/// - `page_size` must be one of the footer's page sizes.
/// - Intentionally ignores `keybind_*` entries (handled separately).
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = parse_assignment(line) else {
            continue;
        };
        match key.as_str() {
            "api_url" | "api_root" => {
                if !val.is_empty() {
                    settings.api_url = val.trim_end_matches('/').to_string();
                }
            }
            "page_size" | "rows_per_page" => {
                if let Ok(v) = val.parse::<usize>()
                    && PAGE_SIZES.contains(&v)
                {
                    settings.page_size = v;
                } else {
                    tracing::warn!(value = val, "[Config] ignoring unsupported page_size");
                }
            }
            "request_timeout_secs" | "timeout" => {
                if let Ok(v) = val.parse::<u64>()
                    && v > 0
                {
                    settings.request_timeout_secs = v;
                }
            }
            "show_summary_pane" | "summary_visible" => {
                settings.show_summary_pane = parse_bool(val);
            }
            "log_level" => {
                if !val.is_empty() {
                    settings.log_level = val.to_ascii_lowercase();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Known keys are applied and invalid values ignored
    ///
    /// - Input: settings text with a URL, valid and invalid sizes, and unknown keys
    /// - Output: URL and boolean applied; unsupported page size keeps the default
    fn parses_known_keys() {
        let mut s = Settings::default();
        parse_settings(
            "# comment\napi_url = https://api.example.test/v4/ # staging\npage_size = 30\nshow-summary-pane = off\ntimeout = 0\nlog_level = DEBUG\nmystery = 1\n",
            &mut s,
        );
        assert_eq!(s.api_url, "https://api.example.test/v4");
        assert_eq!(s.page_size, 25);
        assert!(!s.show_summary_pane);
        assert_eq!(s.request_timeout_secs, 15);
        assert_eq!(s.log_level, "debug");

        parse_settings("page_size = 75\ntimeout=30", &mut s);
        assert_eq!(s.page_size, 75);
        assert_eq!(s.request_timeout_secs, 30);
    }
}
