//! Per-disk selection model for the clone flow.

use std::collections::{BTreeSet, HashMap};

use crate::state::types::{Config, ConfigId, Disk, DiskId};

/// Configuration ids the user has chosen to clone.
pub type SelectedConfigIds = BTreeSet<ConfigId>;

/// Selection record for a single disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionEntry {
    /// Whether the user checked this disk directly.
    pub is_selected: bool,
    /// Configurations that boot from this disk, in configuration order.
    pub associated_config_ids: Vec<ConfigId>,
}

/// Selection entries keyed by disk id.
///
/// A disk without an entry behaves exactly like one holding
/// [`SelectionEntry::default`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiskSelection {
    /// Backing map.
    entries: HashMap<DiskId, SelectionEntry>,
}

impl DiskSelection {
    /// What: Build the selection model for a set of disks and their configurations.
    ///
    /// Inputs:
    /// - `disks`: Disks of the source instance.
    /// - `configs`: Configuration profiles of the source instance.
    ///
    /// Output:
    /// - A model with one unselected entry per disk.
    ///
    /// Details:
    /// - `associated_config_ids` lists every config whose devices reference the
    ///   disk, in the order the configs were given.
    /// - Configs referencing disks outside `disks` do not create entries.
    #[must_use]
    pub fn from_disks_and_configs(disks: &[Disk], configs: &[Config]) -> Self {
        let mut entries: HashMap<DiskId, SelectionEntry> = disks
            .iter()
            .map(|d| (d.id, SelectionEntry::default()))
            .collect();
        for cfg in configs {
            for disk_id in cfg.disk_ids() {
                if let Some(entry) = entries.get_mut(&disk_id)
                    && !entry.associated_config_ids.contains(&cfg.id)
                {
                    entry.associated_config_ids.push(cfg.id);
                }
            }
        }
        Self { entries }
    }

    /// Look up the entry for `id`, if one exists.
    #[must_use]
    pub fn entry(&self, id: DiskId) -> Option<&SelectionEntry> {
        self.entries.get(&id)
    }

    /// Insert or replace the entry for `id`.
    pub fn insert(&mut self, id: DiskId, entry: SelectionEntry) {
        self.entries.insert(id, entry);
    }

    /// Whether the disk was checked directly. Missing entries read as `false`.
    #[must_use]
    pub fn is_selected(&self, id: DiskId) -> bool {
        self.entries.get(&id).is_some_and(|e| e.is_selected)
    }

    /// Configurations referencing the disk. Missing entries read as empty.
    #[must_use]
    pub fn associated_config_ids(&self, id: DiskId) -> &[ConfigId] {
        self.entries
            .get(&id)
            .map_or(&[], |e| e.associated_config_ids.as_slice())
    }

    /// What: Flip the direct selection flag of a disk.
    ///
    /// Inputs:
    /// - `id`: Disk to toggle.
    ///
    /// Output:
    /// - The new value of `is_selected`.
    ///
    /// Details:
    /// - Unknown ids get a fresh entry, so the first toggle selects them.
    pub fn toggle(&mut self, id: DiskId) -> bool {
        let entry = self.entries.entry(id).or_default();
        entry.is_selected = !entry.is_selected;
        entry.is_selected
    }

    /// Clear every direct selection while keeping config associations.
    pub fn clear(&mut self) {
        for entry in self.entries.values_mut() {
            entry.is_selected = false;
        }
    }

    /// Number of disks tracked by the model.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the model tracks no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
