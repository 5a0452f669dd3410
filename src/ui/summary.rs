use ratatui::{
    Frame,
    prelude::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::logic::clone_flow::CloneSummary;

use super::style::TableStyle;

/// What: Build the lines of the clone summary pane.
///
/// Inputs:
/// - `summary`: Current picks.
///
/// Output:
/// - A hint when nothing is picked, otherwise counts and total size.
#[must_use]
pub fn summary_lines(summary: &CloneSummary) -> Vec<String> {
    if summary.is_empty() {
        return vec!["Select configurations or disks to clone.".to_string()];
    }
    vec![
        format!("Configurations: {}", summary.config_ids.len()),
        format!("Disks: {}", summary.disk_ids.len()),
        format!("Total size: {} MB", summary.total_size_mb),
    ]
}

/// Render the clone summary pane.
pub fn render_summary(f: &mut Frame, area: Rect, summary: &CloneSummary, style: &TableStyle) {
    let s = if summary.is_empty() {
        style.placeholder
    } else {
        style.cell
    };
    let lines: Vec<Line> = summary_lines(summary)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, s)))
        .collect();
    let p = Paragraph::new(lines)
        .style(style.background)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Line::from(Span::styled("Clone summary", style.title)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style.border),
        );
    f.render_widget(p, area);
}
