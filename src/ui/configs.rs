use ratatui::{
    Frame,
    prelude::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
};

use crate::logic::clone_flow::CloneFlow;
use crate::state::types::Config;

use super::style::{CHECKED_GLYPH, TableStyle, UNCHECKED_GLYPH};

/// What: Build the text shown for one configuration entry.
///
/// Inputs:
/// - `cfg`: Configuration profile.
/// - `selected`: Whether the user picked it.
///
/// Output:
/// - Check box, label, and the number of disks the profile attaches.
#[must_use]
pub fn config_line(cfg: &Config, selected: bool) -> String {
    let glyph = if selected {
        CHECKED_GLYPH
    } else {
        UNCHECKED_GLYPH
    };
    let n = cfg.disk_ids().len();
    let noun = if n == 1 { "disk" } else { "disks" };
    format!("{glyph} {} ({n} {noun})", cfg.label)
}

/// What: Render the configuration list with check boxes.
///
/// Inputs:
/// - `f`: Frame to draw on.
/// - `area`: Target rectangle.
/// - `flow`: Clone flow holding configurations and picks.
/// - `cursor`: Focused row, if the pane has focus.
/// - `style`: Table styles.
pub fn render_configs(
    f: &mut Frame,
    area: Rect,
    flow: &CloneFlow,
    cursor: Option<usize>,
    style: &TableStyle,
) {
    let items: Vec<ListItem> = if flow.configs().is_empty() {
        vec![ListItem::new(Span::styled(
            "No configurations.",
            style.placeholder,
        ))]
    } else {
        flow.configs()
            .iter()
            .map(|cfg| {
                let selected = flow.is_config_selected(cfg.id);
                let s = if selected { style.checked } else { style.cell };
                ListItem::new(Line::from(Span::styled(config_line(cfg, selected), s)))
            })
            .collect()
    };
    let border = if cursor.is_some() {
        style.border_focused
    } else {
        style.border
    };
    let list = List::new(items)
        .style(style.background)
        .highlight_style(style.cursor)
        .block(
            Block::default()
                .title(Line::from(Span::styled(
                    format!("Configurations ({})", flow.configs().len()),
                    style.title,
                )))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
    let mut state = ListState::default();
    if !flow.configs().is_empty() {
        state.select(cursor);
    }
    f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::Device;
    use std::collections::BTreeMap;

    #[test]
    /// What: Config lines show the check box and attached disk count
    fn config_line_format() {
        let mut devices = BTreeMap::new();
        devices.insert(
            "sda".to_string(),
            Some(Device {
                disk_id: Some(1),
                volume_id: None,
            }),
        );
        devices.insert("sdb".to_string(), None);
        let cfg = Config {
            id: 5,
            label: "Boot".into(),
            devices,
        };
        assert_eq!(config_line(&cfg, false), "[ ] Boot (1 disk)");
        assert_eq!(config_line(&cfg, true), "[x] Boot (1 disk)");
    }
}
