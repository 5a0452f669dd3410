//! Cursor and page navigation across the three panes.

use crate::state::{AppState, Focus};

/// What: Move the cursor of the focused pane by `delta` rows.
///
/// Inputs:
/// - `app`: Application state.
/// - `delta`: Signed row offset; negative moves up.
///
/// Details:
/// - Clamps to the rows of the current page (or the configuration list);
///   an empty pane keeps the cursor at `0`.
pub fn move_cursor(app: &mut AppState, delta: isize) {
    let len = match app.focus {
        Focus::Configs => app.flow.configs().len(),
        Focus::Disks => app.disk_rows_on_page(),
        Focus::Images => app.image_rows_on_page(),
    };
    let cursor = match app.focus {
        Focus::Configs => &mut app.config_cursor,
        Focus::Disks => &mut app.disk_cursor,
        Focus::Images => &mut app.image_cursor,
    };
    if len == 0 {
        *cursor = 0;
        return;
    }
    *cursor = cursor.saturating_add_signed(delta).min(len - 1);
}

/// What: Switch the focused table to the next or previous page.
///
/// Inputs:
/// - `app`: Application state.
/// - `forward`: `true` for the next page.
///
/// Output:
/// - `true` when the page changed; the cursor then returns to the first row.
///
/// Details:
/// - The configuration list is not paginated and never changes page.
pub fn change_page(app: &mut AppState, forward: bool) -> bool {
    let (pager, cursor) = match app.focus {
        Focus::Configs => return false,
        Focus::Disks => (&mut app.disk_pager, &mut app.disk_cursor),
        Focus::Images => (&mut app.image_pager, &mut app.image_cursor),
    };
    let moved = if forward {
        pager.next_page()
    } else {
        pager.prev_page()
    };
    if moved {
        *cursor = 0;
    }
    moved
}

/// What: Cycle the page size of the focused table.
///
/// Inputs:
/// - `app`: Application state.
///
/// Output:
/// - The new page size, or `None` when the focused pane is not paginated.
pub fn cycle_page_size(app: &mut AppState) -> Option<usize> {
    let (pager, cursor) = match app.focus {
        Focus::Configs => return None,
        Focus::Disks => (&mut app.disk_pager, &mut app.disk_cursor),
        Focus::Images => (&mut app.image_pager, &mut app.image_cursor),
    };
    pager.cycle_page_size();
    *cursor = 0;
    tracing::debug!(page_size = pager.page_size(), "page size changed");
    Some(pager.page_size())
}
