use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

use crate::logic::paginate::Paginator;
use crate::store::ImagesState;

use super::disks::{EMPTY_PLACEHOLDER, footer_text};
use super::style::TableStyle;

/// What: Pick the message shown instead of rows, if any.
///
/// Inputs:
/// - `images`: Image store.
///
/// Output:
/// - `Some(text)` while loading an empty collection or after a failure; `None` otherwise.
///
/// Details:
/// - A failure with stored entities still shows the entities; the error goes to the title.
#[must_use]
pub fn images_notice(images: &ImagesState) -> Option<String> {
    if images.entities.is_empty() {
        if images.loading {
            return Some("Loading images…".to_string());
        }
        if let Some(errs) = &images.error {
            let text = errs
                .iter()
                .map(|e| e.reason.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Some(text);
        }
    }
    None
}

/// What: Render the paginated image table.
///
/// Inputs:
/// - `f`: Frame to draw on.
/// - `area`: Target rectangle.
/// - `images`: Image store.
/// - `pager`: Paginator for the image list.
/// - `cursor`: Focused row within the page, if the pane has focus.
/// - `style`: Table styles.
pub fn render_images(
    f: &mut Frame,
    area: Rect,
    images: &ImagesState,
    pager: &Paginator,
    cursor: Option<usize>,
    style: &TableStyle,
) {
    let footer_h: u16 = u16::from(pager.footer_visible());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(footer_h)])
        .split(area);

    let mut title = vec![Span::styled(
        format!("Images ({})", images.entities.len()),
        style.title,
    )];
    if images.loading && !images.entities.is_empty() {
        title.push(Span::styled(" refreshing…", style.cell_muted));
    }
    if images.error.is_some() && !images.entities.is_empty() {
        title.push(Span::styled(" stale", style.error));
    }
    let border = if cursor.is_some() {
        style.border_focused
    } else {
        style.border
    };
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);

    if let Some(notice) = images_notice(images) {
        let s = if images.error.is_some() {
            style.error
        } else {
            style.placeholder
        };
        let p = Paragraph::new(Line::from(Span::styled(notice, s)))
            .style(style.background)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(p, chunks[0]);
        return;
    }

    let page = pager.slice(&images.entities);
    let rows: Vec<Row> = if page.is_empty() {
        vec![Row::new(vec![Cell::from(Span::styled(
            EMPTY_PLACEHOLDER,
            style.placeholder,
        ))])]
    } else {
        page.iter()
            .map(|img| {
                let vendor = img.vendor.clone().unwrap_or_default();
                let label_style = if img.deprecated {
                    style.cell_muted
                } else {
                    style.cell
                };
                Row::new(vec![
                    Cell::from(Span::styled(img.label.clone(), label_style)),
                    Cell::from(Span::styled(vendor, style.cell_muted)),
                    Cell::from(Span::styled(format!("{} MB", img.size), style.cell_muted)),
                ])
            })
            .collect()
    };
    let header = Row::new(vec![
        Cell::from("Label"),
        Cell::from("Vendor"),
        Cell::from("Size"),
    ])
    .style(style.header);
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ],
    )
    .header(header)
    .style(style.background)
    .row_highlight_style(style.cursor)
    .block(block);
    let mut state = TableState::default();
    if !page.is_empty() {
        state.select(cursor);
    }
    f.render_stateful_widget(table, chunks[0], &mut state);

    if footer_h > 0 {
        let footer = Paragraph::new(Line::from(Span::styled(
            footer_text(pager, "images"),
            style.footer,
        )));
        f.render_widget(footer, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::ApiFieldError;

    #[test]
    /// What: Notices cover loading and failure of an empty store only
    fn notice_states() {
        let mut st = ImagesState::default();
        assert_eq!(images_notice(&st), None);
        st.loading = true;
        assert_eq!(images_notice(&st).as_deref(), Some("Loading images…"));
        st.loading = false;
        st.error = Some(vec![
            ApiFieldError::reason("first"),
            ApiFieldError::reason("second"),
        ]);
        assert_eq!(images_notice(&st).as_deref(), Some("first; second"));
    }
}
