//! End-to-end selection scenarios driven through key events.

use std::collections::BTreeMap;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use clonedeck::events::handle_event;
use clonedeck::logic::DisplayState;
use clonedeck::state::{AppState, Config, Device, Disk, Focus};

fn press(app: &mut AppState, code: KeyCode) -> bool {
    let (tx, _rx) = mpsc::unbounded_channel();
    handle_event(
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty())),
        app,
        &tx,
    )
}

/// Instance with a boot config over `sda` + `swap` and a detached `data` disk.
fn loaded_app() -> AppState {
    let disks = vec![
        Disk {
            id: 10,
            label: "sda".into(),
            size: 20480,
            filesystem: "ext4".into(),
            status: "ready".into(),
        },
        Disk {
            id: 11,
            label: "swap".into(),
            size: 512,
            filesystem: "swap".into(),
            status: "ready".into(),
        },
        Disk {
            id: 12,
            label: "data".into(),
            size: 4096,
            filesystem: "ext4".into(),
            status: "ready".into(),
        },
    ];
    let mut devices = BTreeMap::new();
    devices.insert(
        "sda".to_string(),
        Some(Device {
            disk_id: Some(10),
            volume_id: None,
        }),
    );
    devices.insert(
        "sdb".to_string(),
        Some(Device {
            disk_id: Some(11),
            volume_id: None,
        }),
    );
    devices.insert(
        "sdc".to_string(),
        Some(Device {
            disk_id: None,
            volume_id: Some(99),
        }),
    );
    let configs = vec![Config {
        id: 1,
        label: "My Boot Profile".into(),
        devices,
    }];
    let mut app = AppState::default();
    app.set_instance(disks, configs);
    app
}

fn state_of(app: &AppState, idx: usize) -> DisplayState {
    app.flow.display_state(&app.flow.disks()[idx])
}

#[test]
/// What: Picking the config locks its disks while the detached disk stays free
fn selecting_config_locks_its_disks() {
    let mut app = loaded_app();
    app.focus = Focus::Configs;
    press(&mut app, KeyCode::Char(' '));

    let locked = DisplayState {
        checked: true,
        disabled: true,
    };
    assert_eq!(state_of(&app, 0), locked);
    assert_eq!(state_of(&app, 1), locked);
    assert_eq!(state_of(&app, 2), DisplayState::default());

    let summary = app.flow.summary();
    assert_eq!(summary.config_ids, vec![1]);
    assert_eq!(summary.disk_ids, vec![10, 11]);
    assert_eq!(summary.total_size_mb, 20992);
}

#[test]
/// What: A direct disk pick survives locking and unlocking by its config
fn direct_pick_survives_config_toggle() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Char(' '));
    assert!(app.flow.selection().is_selected(10));

    app.focus = Focus::Configs;
    press(&mut app, KeyCode::Char(' '));
    app.focus = Focus::Disks;
    press(&mut app, KeyCode::Char(' '));
    assert!(
        app.flow.selection().is_selected(10),
        "locked row ignores toggles"
    );

    app.focus = Focus::Configs;
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(
        state_of(&app, 0),
        DisplayState {
            checked: true,
            disabled: false
        }
    );
}

#[test]
/// What: Clear drops every pick and quit ends the loop
fn clear_then_quit() {
    let mut app = loaded_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.flow.summary().disk_ids, vec![12]);
    press(&mut app, KeyCode::Char('x'));
    assert!(app.flow.summary().is_empty());
    assert!(press(&mut app, KeyCode::Esc));
}
