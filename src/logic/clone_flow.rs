//! The clone flow owns the selection model and applies user toggles.

use crate::logic::reconcile::{DisplayState, display_state};
use crate::state::selection::{DiskSelection, SelectedConfigIds};
use crate::state::types::{Config, ConfigId, Disk, DiskId};

/// What the user has picked for cloning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CloneSummary {
    /// Selected configuration ids in configuration order.
    pub config_ids: Vec<ConfigId>,
    /// Effectively selected disk ids (direct or through a config) in disk order.
    pub disk_ids: Vec<DiskId>,
    /// Combined size of the effectively selected disks in megabytes.
    pub total_size_mb: u64,
}

impl CloneSummary {
    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.config_ids.is_empty() && self.disk_ids.is_empty()
    }
}

/// Disks, configurations and the user's picks for one source instance.
#[derive(Clone, Debug, Default)]
pub struct CloneFlow {
    /// Disks of the source instance in API order.
    disks: Vec<Disk>,
    /// Configuration profiles of the source instance in API order.
    configs: Vec<Config>,
    /// Per-disk selection model.
    selection: DiskSelection,
    /// Configurations chosen by the user.
    selected_config_ids: SelectedConfigIds,
}

impl CloneFlow {
    /// What: Start a flow for freshly fetched disks and configurations.
    ///
    /// Inputs:
    /// - `disks`: Disks of the source instance.
    /// - `configs`: Configuration profiles of the source instance.
    ///
    /// Output:
    /// - Flow with nothing selected and a model entry for every disk.
    #[must_use]
    pub fn new(disks: Vec<Disk>, configs: Vec<Config>) -> Self {
        let selection = DiskSelection::from_disks_and_configs(&disks, &configs);
        tracing::debug!(
            disks = disks.len(),
            configs = configs.len(),
            "built disk selection model"
        );
        Self {
            disks,
            configs,
            selection,
            selected_config_ids: SelectedConfigIds::new(),
        }
    }

    /// Disks in API order.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Configurations in API order.
    #[must_use]
    pub fn configs(&self) -> &[Config] {
        &self.configs
    }

    /// The per-disk selection model.
    #[must_use]
    pub const fn selection(&self) -> &DiskSelection {
        &self.selection
    }

    /// Configurations currently chosen.
    #[must_use]
    pub const fn selected_config_ids(&self) -> &SelectedConfigIds {
        &self.selected_config_ids
    }

    /// Whether configuration `id` is chosen.
    #[must_use]
    pub fn is_config_selected(&self, id: ConfigId) -> bool {
        self.selected_config_ids.contains(&id)
    }

    /// Effective check state of `disk`.
    #[must_use]
    pub fn display_state(&self, disk: &Disk) -> DisplayState {
        display_state(disk, &self.selection, &self.selected_config_ids)
    }

    /// What: Apply a user toggle to a disk.
    ///
    /// Inputs:
    /// - `id`: Disk the user toggled.
    ///
    /// Output:
    /// - `true` when the model changed; `false` when the disk is locked by a selected config.
    ///
    /// Details:
    /// - Locked disks are left untouched so deselecting the config later
    ///   restores the disk's own choice.
    pub fn handle_select_disk(&mut self, id: DiskId) -> bool {
        let locked = crate::logic::reconcile::is_config_selected(
            self.selection.associated_config_ids(id),
            &self.selected_config_ids,
        );
        if locked {
            tracing::debug!(disk_id = id, "ignored toggle of disk locked by a selected config");
            return false;
        }
        let now = self.selection.toggle(id);
        tracing::debug!(disk_id = id, selected = now, "toggled disk");
        true
    }

    /// What: Apply a user toggle to a configuration.
    ///
    /// Inputs:
    /// - `id`: Configuration the user toggled.
    ///
    /// Output:
    /// - `true` when the selection changed; `false` for ids not in this flow.
    pub fn handle_select_config(&mut self, id: ConfigId) -> bool {
        if !self.configs.iter().any(|c| c.id == id) {
            return false;
        }
        if !self.selected_config_ids.remove(&id) {
            self.selected_config_ids.insert(id);
        }
        tracing::debug!(
            config_id = id,
            selected = self.selected_config_ids.contains(&id),
            "toggled config"
        );
        true
    }

    /// Deselect every disk and configuration.
    pub fn clear(&mut self) {
        self.selection.clear();
        self.selected_config_ids.clear();
    }

    /// What: Summarize the current picks.
    ///
    /// Output:
    /// - Selected configs, effectively checked disks, and their total size.
    #[must_use]
    pub fn summary(&self) -> CloneSummary {
        let config_ids: Vec<ConfigId> = self
            .configs
            .iter()
            .filter(|c| self.selected_config_ids.contains(&c.id))
            .map(|c| c.id)
            .collect();
        let mut disk_ids = Vec::new();
        let mut total_size_mb = 0u64;
        for disk in &self.disks {
            if self.display_state(disk).checked {
                disk_ids.push(disk.id);
                total_size_mb = total_size_mb.saturating_add(disk.size);
            }
        }
        CloneSummary {
            config_ids,
            disk_ids,
            total_size_mb,
        }
    }
}
