//! Paginated disk table with check boxes driven by the selection reconciler.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState},
};

use crate::logic::clone_flow::CloneFlow;
use crate::logic::paginate::Paginator;
use crate::logic::reconcile::{DisplayState, display_state};
use crate::state::selection::{DiskSelection, SelectedConfigIds};
use crate::state::types::{Disk, DiskId};

use super::style::{CHECKED_GLYPH, TableStyle, UNCHECKED_GLYPH};

/// Text of the row shown when the current page holds no disks.
pub const EMPTY_PLACEHOLDER: &str = "No data to display.";

/// Label column width in percent.
const LABEL_COL_PCT: u16 = 65;
/// Size column width in percent.
const SIZE_COL_PCT: u16 = 35;
/// Number of data columns; the placeholder row spans all of them.
const COLUMN_COUNT: usize = 2;

/// One rendered disk row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiskRow<'a> {
    /// Disk shown on this row.
    pub disk: &'a Disk,
    /// Check box state from the reconciler.
    pub state: DisplayState,
}

/// Body of the table for the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiskTableBody<'a> {
    /// The page is empty; a single placeholder row spanning every column is shown.
    Empty {
        /// Columns the placeholder spans.
        col_span: usize,
    },
    /// One row per disk in page order.
    Rows(Vec<DiskRow<'a>>),
}

/// Read-only view over the disks, the selection model, and the paginator.
///
/// The table never mutates the model; toggles are forwarded to a caller-supplied handler.
#[derive(Clone, Copy, Debug)]
pub struct DiskTable<'a> {
    /// Full disk list in API order.
    disks: &'a [Disk],
    /// Per-disk selection model.
    selection: &'a DiskSelection,
    /// Configurations chosen elsewhere in the flow.
    selected_config_ids: &'a SelectedConfigIds,
    /// Pagination collaborator.
    paginator: &'a Paginator,
}

impl<'a> DiskTable<'a> {
    /// Create a table view.
    #[must_use]
    pub const fn new(
        disks: &'a [Disk],
        selection: &'a DiskSelection,
        selected_config_ids: &'a SelectedConfigIds,
        paginator: &'a Paginator,
    ) -> Self {
        Self {
            disks,
            selection,
            selected_config_ids,
            paginator,
        }
    }

    /// Create a table view over a clone flow.
    #[must_use]
    pub fn from_flow(flow: &'a CloneFlow, paginator: &'a Paginator) -> Self {
        Self::new(
            flow.disks(),
            flow.selection(),
            flow.selected_config_ids(),
            paginator,
        )
    }

    /// Disks on the current page, in paginator order.
    #[must_use]
    pub fn page(&self) -> &'a [Disk] {
        self.paginator.slice(self.disks)
    }

    /// What: Build the table body for the current page.
    ///
    /// Output:
    /// - `Empty` for a page without disks, otherwise one row per disk with its display state.
    #[must_use]
    pub fn body(&self) -> DiskTableBody<'a> {
        let page = self.page();
        if page.is_empty() {
            return DiskTableBody::Empty {
                col_span: COLUMN_COUNT,
            };
        }
        DiskTableBody::Rows(
            page.iter()
                .map(|disk| DiskRow {
                    disk,
                    state: display_state(disk, self.selection, self.selected_config_ids),
                })
                .collect(),
        )
    }

    /// What: Forward a click on a row's check box.
    ///
    /// Inputs:
    /// - `row`: Row index within the current page.
    /// - `handle_select`: Called with the disk id when the row accepts toggles.
    ///
    /// Output:
    /// - `true` when `handle_select` was invoked (exactly once); `false` for
    ///   disabled rows or rows past the end of the page.
    pub fn toggle<F: FnOnce(DiskId)>(&self, row: usize, handle_select: F) -> bool {
        let Some(disk) = self.page().get(row) else {
            return false;
        };
        if display_state(disk, self.selection, self.selected_config_ids).disabled {
            return false;
        }
        handle_select(disk.id);
        true
    }

    /// What: Draw the table and its pagination footer.
    ///
    /// Inputs:
    /// - `f`: Frame to draw on.
    /// - `area`: Target rectangle.
    /// - `cursor`: Focused row within the page, if the pane has focus.
    /// - `style`: Styles for every table element.
    ///
    /// Details:
    /// - The footer is only drawn when the list outgrows the smallest page size.
    pub fn render(&self, f: &mut Frame, area: Rect, cursor: Option<usize>, style: &TableStyle) {
        let footer_h: u16 = u16::from(self.paginator.footer_visible());
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(footer_h)])
            .split(area);

        let header = Row::new(vec![Cell::from("Label"), Cell::from("Size")]).style(style.header);
        let body = self.body();
        let rows: Vec<Row> = match &body {
            DiskTableBody::Empty { .. } => Vec::new(),
            DiskTableBody::Rows(rows) => rows.iter().map(|r| disk_row(r, style)).collect(),
        };

        let title = format!("Disks ({})", self.disks.len());
        let border = if cursor.is_some() {
            style.border_focused
        } else {
            style.border
        };
        let block = Block::default()
            .title(Line::from(Span::styled(title, style.title)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(chunks[0]);
        let table = Table::new(
            rows,
            [
                Constraint::Percentage(LABEL_COL_PCT),
                Constraint::Percentage(SIZE_COL_PCT),
            ],
        )
        .header(header)
        .style(style.background)
        .row_highlight_style(style.cursor)
        .block(block);
        let mut state = TableState::default();
        if !self.page().is_empty() {
            state.select(cursor);
        }
        f.render_stateful_widget(table, chunks[0], &mut state);

        // The placeholder row spans every column: it gets the full width under the header.
        if matches!(body, DiskTableBody::Empty { .. }) && inner.height > 1 {
            let row_area = Rect {
                y: inner.y + 1,
                height: 1,
                ..inner
            };
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    EMPTY_PLACEHOLDER,
                    style.placeholder,
                ))),
                row_area,
            );
        }

        if footer_h > 0 {
            let footer = Paragraph::new(Line::from(Span::styled(
                footer_text(self.paginator, "disks"),
                style.footer,
            )));
            f.render_widget(footer, chunks[1]);
        }
    }
}

/// Build the ratatui row for one disk.
fn disk_row<'a>(row: &DiskRow<'a>, style: &TableStyle) -> Row<'a> {
    let (glyph, glyph_style) = match row.state {
        DisplayState { disabled: true, .. } => (CHECKED_GLYPH, style.disabled),
        DisplayState { checked: true, .. } => (CHECKED_GLYPH, style.checked),
        DisplayState { checked: false, .. } => (UNCHECKED_GLYPH, style.unchecked),
    };
    let label_style = if row.state.disabled {
        style.disabled
    } else {
        style.cell
    };
    let mut label = vec![
        Span::styled(format!("{glyph} "), glyph_style),
        Span::styled(row.disk.label.as_str(), label_style),
    ];
    if row.state.disabled {
        label.push(Span::styled(" (via config)", style.cell_muted));
    }
    Row::new(vec![
        Cell::from(Line::from(label)),
        Cell::from(Span::styled(row.disk.size_label(), style.cell_muted)),
    ])
}

/// What: Describe the paginator state for a footer line.
///
/// Inputs:
/// - `paginator`: Pagination state.
/// - `noun`: Plural name of the listed items.
///
/// Output:
/// - Text such as `"Page 2 of 3 · 60 disks · 25 per page"`.
#[must_use]
pub fn footer_text(paginator: &Paginator, noun: &str) -> String {
    format!(
        "Page {} of {} · {} {noun} · {} per page",
        paginator.page(),
        paginator.num_pages(),
        paginator.count(),
        paginator.page_size()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::selection::SelectionEntry;

    fn sda() -> Disk {
        Disk {
            id: 1,
            label: "sda".into(),
            size: 1024,
            filesystem: "ext4".into(),
            status: "ready".into(),
        }
    }

    fn model_with_config(cfg: u64) -> DiskSelection {
        let mut m = DiskSelection::default();
        m.insert(
            1,
            SelectionEntry {
                is_selected: false,
                associated_config_ids: vec![cfg],
            },
        );
        m
    }

    #[test]
    /// What: Disk referenced by a selected config renders checked and disabled
    fn row_locked_by_selected_config() {
        let disks = vec![sda()];
        let model = model_with_config(5);
        let selected: SelectedConfigIds = [5].into_iter().collect();
        let mut pager = Paginator::default();
        pager.set_count(disks.len());
        let table = DiskTable::new(&disks, &model, &selected, &pager);
        match table.body() {
            DiskTableBody::Rows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(
                    rows[0].state,
                    DisplayState {
                        checked: true,
                        disabled: true
                    }
                );
                assert_eq!(rows[0].disk.size_label(), "1024 MB");
            }
            DiskTableBody::Empty { .. } => panic!("expected rows"),
        }
        let mut calls = 0;
        assert!(!table.toggle(0, |_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    /// What: Same disk without selected configs is unchecked and forwards toggles once
    fn row_enabled_without_selected_config() {
        let disks = vec![sda()];
        let model = model_with_config(5);
        let selected = SelectedConfigIds::new();
        let pager = Paginator::default();
        let table = DiskTable::new(&disks, &model, &selected, &pager);
        let DiskTableBody::Rows(rows) = table.body() else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].state, DisplayState::default());
        let mut seen = Vec::new();
        assert!(table.toggle(0, |id| seen.push(id)));
        assert_eq!(seen, vec![1]);
        assert!(!table.toggle(4, |id| seen.push(id)));
        assert_eq!(seen, vec![1]);
    }

    #[test]
    /// What: Empty page yields one placeholder spanning both columns
    fn empty_page_placeholder() {
        let disks: Vec<Disk> = Vec::new();
        let model = DiskSelection::default();
        let selected = SelectedConfigIds::new();
        let pager = Paginator::default();
        let table = DiskTable::new(&disks, &model, &selected, &pager);
        assert_eq!(table.body(), DiskTableBody::Empty { col_span: 2 });
    }

    #[test]
    /// What: Rows follow the paginator's page
    fn rows_follow_page() {
        let disks: Vec<Disk> = (1..=30)
            .map(|id| Disk {
                id,
                label: format!("d{id}"),
                size: id,
                filesystem: String::new(),
                status: String::new(),
            })
            .collect();
        let model = DiskSelection::default();
        let selected = SelectedConfigIds::new();
        let mut pager = Paginator::default();
        pager.set_count(disks.len());
        pager.next_page();
        let table = DiskTable::new(&disks, &model, &selected, &pager);
        let DiskTableBody::Rows(rows) = table.body() else {
            panic!("expected rows");
        };
        let ids: Vec<u64> = rows.iter().map(|r| r.disk.id).collect();
        assert_eq!(ids, (26..=30).collect::<Vec<_>>());
        assert_eq!(footer_text(&pager, "disks"), "Page 2 of 2 · 30 disks · 25 per page");
    }
}
