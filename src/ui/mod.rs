//! Frame layout and the individual panes.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::{AppState, Focus, InstanceStatus};
use crate::theme::{KeyChord, KeyMap, theme};

pub mod configs;
pub mod disks;
pub mod images;
pub mod style;
pub mod summary;

use disks::DiskTable;
use style::TableStyle;

/// Height of the clone summary pane.
const SUMMARY_H: u16 = 5;

/// What: Draw one frame of the application.
///
/// Inputs:
/// - `f`: Frame to draw on.
/// - `app`: Application state.
///
/// Details:
/// - Layout: title bar, then configurations | disks (+ summary) | images, then a hint line.
pub fn ui(f: &mut Frame, app: &AppState) {
    let th = theme();
    let style = TableStyle::from_theme(&th);
    let area = f.area();
    f.render_widget(Block::default().style(style.background), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(title_spans(app, &style))).style(style.background),
        rows[0],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);

    configs::render_configs(
        f,
        cols[0],
        &app.flow,
        (app.focus == Focus::Configs).then_some(app.config_cursor),
        &style,
    );

    let summary_h = if app.show_summary_pane { SUMMARY_H } else { 0 };
    let center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(summary_h)])
        .split(cols[1]);
    if let InstanceStatus::Failed(msg) = &app.instance_status
        && app.flow.disks().is_empty()
    {
        let p = Paragraph::new(Line::from(Span::styled(msg.clone(), style.error)))
            .style(style.background)
            .block(Block::bordered().title("Disks").border_style(style.border));
        f.render_widget(p, center[0]);
    } else {
        DiskTable::from_flow(&app.flow, &app.disk_pager).render(
            f,
            center[0],
            (app.focus == Focus::Disks).then_some(app.disk_cursor),
            &style,
        );
    }
    if summary_h > 0 {
        summary::render_summary(f, center[1], &app.flow.summary(), &style);
    }

    images::render_images(
        f,
        cols[2],
        &app.images,
        &app.image_pager,
        (app.focus == Focus::Images).then_some(app.image_cursor),
        &style,
    );

    let bottom = app
        .status
        .clone()
        .unwrap_or_else(|| key_hints(&app.keymap));
    let bottom = truncate_to_width(&bottom, usize::from(rows[2].width));
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(bottom, style.footer)))
            .style(Style::default().bg(th.base)),
        rows[2],
    );
}

/// Title bar content: app name, instance, and loading state.
fn title_spans(app: &AppState, style: &TableStyle) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled("clonedeck", style.header)];
    if let Some(id) = app.instance_id {
        spans.push(Span::styled(format!("  instance {id}"), style.cell));
    }
    match &app.instance_status {
        InstanceStatus::Loading => spans.push(Span::styled("  loading…", style.cell_muted)),
        InstanceStatus::Failed(_) => spans.push(Span::styled("  failed", style.error)),
        InstanceStatus::Idle | InstanceStatus::Ready => {}
    }
    spans
}

/// What: Cut `s` so it fits in `width` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit.
/// - `width`: Available columns.
///
/// Output:
/// - `s` unchanged when it fits, otherwise a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

/// First chord of an action, rendered as a label.
fn first_label(list: &[KeyChord]) -> String {
    list.first().map_or_else(|| "-".to_string(), KeyChord::label)
}

/// What: Build the key hint line from the active key bindings.
///
/// Inputs:
/// - `km`: Key bindings.
///
/// Output:
/// - One line such as `"Space toggle · Tab focus · … · Q quit"`.
#[must_use]
pub fn key_hints(km: &KeyMap) -> String {
    [
        (first_label(&km.toggle), "toggle"),
        (first_label(&km.focus_next), "focus"),
        (
            format!("{}/{}", first_label(&km.prev_page), first_label(&km.next_page)),
            "page",
        ),
        (first_label(&km.page_size), "page size"),
        (first_label(&km.clear), "clear"),
        (first_label(&km.refresh), "refresh images"),
        (first_label(&km.exit), "quit"),
    ]
    .iter()
    .map(|(k, v)| format!("{k} {v}"))
    .collect::<Vec<_>>()
    .join(" · ")
}
