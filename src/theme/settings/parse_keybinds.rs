use crate::theme::parsing::{parse_assignment, parse_key_chord};
use crate::theme::types::{KeyChord, Settings};

/// What: Add a parsed key chord to a keymap field, avoiding duplicates.
///
/// Inputs:
/// - `chord`: Parsed key chord.
/// - `target`: Keymap field collecting chords from this file.
///
/// Details:
/// - The first binding found in the file replaces the defaults; later lines for
///   the same action add alternatives.
fn assign_keybind(chord: KeyChord, target: &mut Vec<KeyChord>, replaced: &mut bool) {
    if !*replaced {
        target.clear();
        *replaced = true;
    }
    if target
        .iter()
        .all(|c| c.code != chord.code || c.mods != chord.mods)
    {
        target.push(chord);
    }
}

/// What: Parse `keybind_*` entries from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings file.
/// - `settings`: Settings whose keymap is updated in-place.
///
/// Details:
/// - Unparsable chords are logged and skipped, keeping the previous binding.
pub fn parse_keybinds(content: &str, settings: &mut Settings) {
    let mut replaced = [false; 11];
    for line in content.lines() {
        let Some((key, val)) = parse_assignment(line) else {
            continue;
        };
        let Some(action) = key.strip_prefix("keybind_") else {
            continue;
        };
        let Some(chord) = parse_key_chord(val) else {
            tracing::warn!(key = %key, value = val, "[Config] invalid key chord");
            continue;
        };
        let km = &mut settings.keymap;
        let (slot, target) = match action {
            "toggle" | "select" => (0, &mut km.toggle),
            "move_up" | "up" => (1, &mut km.move_up),
            "move_down" | "down" => (2, &mut km.move_down),
            "next_page" => (3, &mut km.next_page),
            "prev_page" | "previous_page" => (4, &mut km.prev_page),
            "page_size" => (5, &mut km.page_size),
            "focus_next" | "pane_next" => (6, &mut km.focus_next),
            "refresh" | "reload" => (7, &mut km.refresh),
            "clear" => (8, &mut km.clear),
            "exit" | "quit" => (9, &mut km.exit),
            "reload_theme" => (10, &mut km.reload_theme),
            _ => continue,
        };
        assign_keybind(chord, target, &mut replaced[slot]);
    }
}
