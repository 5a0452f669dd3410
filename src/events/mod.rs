//! Event handling layer: maps key presses onto state changes.

use crossterm::event::{Event as CEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;

use crate::logic::{change_page, cycle_page_size, move_cursor};
use crate::state::{AppState, Focus};
use crate::theme::{matches_any, reload_theme};
use crate::ui::disks::DiskTable;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event.
/// - `app`: Application state.
/// - `images_req_tx`: Channel asking the image worker for a fresh fetch.
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    images_req_tx: &mpsc::UnboundedSender<()>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    handle_key(ke, app, images_req_tx)
}

/// Key press handling; see [`handle_event`].
fn handle_key(
    ke: KeyEvent,
    app: &mut AppState,
    images_req_tx: &mpsc::UnboundedSender<()>,
) -> bool {
    let (code, mods) = (ke.code, ke.modifiers);
    let km = &app.keymap;

    if matches_any(&km.exit, code, mods) {
        return true;
    }
    app.status = None;

    if matches_any(&km.focus_next, code, mods) {
        app.focus = app.focus.next();
    } else if matches_any(&km.move_up, code, mods) {
        move_cursor(app, -1);
    } else if matches_any(&km.move_down, code, mods) {
        move_cursor(app, 1);
    } else if matches_any(&km.next_page, code, mods) {
        change_page(app, true);
    } else if matches_any(&km.prev_page, code, mods) {
        change_page(app, false);
    } else if matches_any(&km.page_size, code, mods) {
        if let Some(size) = cycle_page_size(app) {
            app.status = Some(format!("{size} rows per page"));
        }
    } else if matches_any(&km.toggle, code, mods) {
        toggle_focused(app);
    } else if matches_any(&km.clear, code, mods) {
        app.flow.clear();
        app.status = Some("Selection cleared".to_string());
    } else if matches_any(&km.reload_theme, code, mods) {
        app.status = Some(match reload_theme() {
            Ok(()) => "Theme reloaded".to_string(),
            Err(msg) => msg,
        });
    } else if matches_any(&km.refresh, code, mods) {
        if images_req_tx.send(()).is_err() {
            tracing::warn!("image worker is gone; refresh ignored");
        }
    }
    false
}

/// What: Toggle the row under the cursor of the focused pane.
///
/// Inputs:
/// - `app`: Application state.
///
/// Details:
/// - Disk rows go through [`DiskTable::toggle`], which refuses rows locked by a
///   selected configuration; the status line explains the refusal.
/// - The image pane has nothing to toggle.
fn toggle_focused(app: &mut AppState) {
    match app.focus {
        Focus::Disks => {
            let mut picked = None;
            let accepted = DiskTable::from_flow(&app.flow, &app.disk_pager)
                .toggle(app.disk_cursor, |id| picked = Some(id));
            if let Some(id) = picked {
                app.flow.handle_select_disk(id);
            } else if !accepted && app.disk_rows_on_page() > 0 {
                app.status = Some("Disk is part of a selected configuration".to_string());
            }
        }
        Focus::Configs => {
            if let Some(id) = app.flow.configs().get(app.config_cursor).map(|c| c.id) {
                app.flow.handle_select_config(id);
            }
        }
        Focus::Images => {}
    }
}
