//! Effective check state of a disk row.
//!
//! A disk reads as checked when the user ticked it directly or when any
//! configuration booting from it is selected. Disks pulled in through a
//! configuration are locked: they can only be released by deselecting the
//! owning configuration.

use crate::state::selection::{DiskSelection, SelectedConfigIds};
use crate::state::types::{ConfigId, Disk};

/// How a disk row's check box must be drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// Check box is ticked.
    pub checked: bool,
    /// Check box ignores user toggles.
    pub disabled: bool,
}

/// What: Test whether any of a disk's configurations is selected.
///
/// Inputs:
/// - `associated`: Configurations referencing the disk.
/// - `selected_config_ids`: Configurations currently chosen by the user.
///
/// Output:
/// - `true` when the two collections share at least one id.
#[must_use]
pub fn is_config_selected(associated: &[ConfigId], selected_config_ids: &SelectedConfigIds) -> bool {
    associated.iter().any(|id| selected_config_ids.contains(id))
}

/// What: Compute the display state of one disk row.
///
/// Inputs:
/// - `disk`: Disk being rendered.
/// - `selection`: Per-disk selection model.
/// - `selected_config_ids`: Configurations currently chosen by the user.
///
/// Output:
/// - `DisplayState` with `checked = direct || via_config` and `disabled = via_config`.
///
/// Details:
/// - A disk with no entry in `selection` is unchecked and enabled.
/// - Pure: identical inputs always yield identical output.
#[must_use]
pub fn display_state(
    disk: &Disk,
    selection: &DiskSelection,
    selected_config_ids: &SelectedConfigIds,
) -> DisplayState {
    let direct = selection.is_selected(disk.id);
    let via_config = is_config_selected(
        selection.associated_config_ids(disk.id),
        selected_config_ids,
    );
    DisplayState {
        checked: direct || via_config,
        disabled: via_config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::selection::SelectionEntry;

    fn disk(id: u64) -> Disk {
        Disk {
            id,
            label: format!("disk-{id}"),
            size: 1024,
            filesystem: String::new(),
            status: String::new(),
        }
    }

    fn ids(v: &[u64]) -> SelectedConfigIds {
        v.iter().copied().collect()
    }

    #[test]
    /// What: Disk without a model entry is unchecked and enabled
    fn missing_entry_is_unchecked_enabled() {
        let st = display_state(&disk(1), &DiskSelection::default(), &ids(&[5, 6]));
        assert_eq!(st, DisplayState::default());
    }

    #[test]
    /// What: Direct selection without a selected config is checked but enabled
    fn direct_selection_is_enabled() {
        let mut model = DiskSelection::default();
        model.insert(
            1,
            SelectionEntry {
                is_selected: true,
                associated_config_ids: vec![5],
            },
        );
        let st = display_state(&disk(1), &model, &ids(&[6]));
        assert!(st.checked);
        assert!(!st.disabled);
    }

    #[test]
    /// What: A selected associated config forces checked and disabled regardless of the flag
    fn via_config_locks_row() {
        for direct in [false, true] {
            let mut model = DiskSelection::default();
            model.insert(
                1,
                SelectionEntry {
                    is_selected: direct,
                    associated_config_ids: vec![3, 5, 8],
                },
            );
            let st = display_state(&disk(1), &model, &ids(&[8]));
            assert_eq!(
                st,
                DisplayState {
                    checked: true,
                    disabled: true
                }
            );
        }
    }

    #[test]
    /// What: Deselecting the owning config releases the row
    fn empty_config_set_releases_row() {
        let mut model = DiskSelection::default();
        model.insert(
            1,
            SelectionEntry {
                is_selected: false,
                associated_config_ids: vec![5],
            },
        );
        assert_eq!(
            display_state(&disk(1), &model, &ids(&[5])),
            DisplayState {
                checked: true,
                disabled: true
            }
        );
        assert_eq!(
            display_state(&disk(1), &model, &ids(&[])),
            DisplayState::default()
        );
    }

    #[test]
    /// What: Repeated calls with the same inputs agree
    fn reconciler_is_idempotent() {
        let mut model = DiskSelection::default();
        model.insert(
            2,
            SelectionEntry {
                is_selected: true,
                associated_config_ids: vec![1],
            },
        );
        let selected = ids(&[1]);
        let first = display_state(&disk(2), &model, &selected);
        let second = display_state(&disk(2), &model, &selected);
        assert_eq!(first, second);
    }

    #[test]
    /// What: Intersection ignores order
    fn intersection_is_order_insensitive() {
        assert!(is_config_selected(&[9, 2, 4], &ids(&[4])));
        assert!(!is_config_selected(&[], &ids(&[4])));
        assert!(!is_config_selected(&[1], &ids(&[])));
    }
}
