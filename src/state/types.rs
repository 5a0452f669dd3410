//! Core value types used by clonedeck state.

use std::collections::BTreeMap;

/// Identifier of a disk attached to a compute instance.
pub type DiskId = u64;

/// Identifier of a boot configuration profile.
pub type ConfigId = u64;

/// A storage volume belonging to a compute instance.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Disk {
    /// Unique disk identifier.
    pub id: DiskId,
    /// Human-readable label shown in the disk table.
    pub label: String,
    /// Size in megabytes.
    pub size: u64,
    /// Filesystem reported by the API (e.g., `ext4`, `swap`).
    #[serde(default)]
    pub filesystem: String,
    /// Provisioning status reported by the API (e.g., `ready`).
    #[serde(default)]
    pub status: String,
}

impl Disk {
    /// What: Format the disk size for table display.
    ///
    /// Inputs: none
    ///
    /// Output: Size as an integer followed by the fixed `MB` unit, e.g. `"1024 MB"`.
    #[must_use]
    pub fn size_label(&self) -> String {
        format!("{} MB", self.size)
    }
}

/// One device slot of a configuration profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Device {
    /// Disk bound to this slot, if any.
    #[serde(default)]
    pub disk_id: Option<DiskId>,
    /// Block-storage volume bound to this slot, if any.
    #[serde(default)]
    pub volume_id: Option<u64>,
}

/// A boot configuration referencing one or more disks.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// Unique configuration identifier.
    pub id: ConfigId,
    /// Human-readable label.
    #[serde(default)]
    pub label: String,
    /// Device slots (`sda`, `sdb`, ...) keyed by slot name. Empty slots are `null`.
    #[serde(default)]
    pub devices: BTreeMap<String, Option<Device>>,
}

impl Config {
    /// What: List the disks this configuration boots from.
    ///
    /// Inputs: none
    ///
    /// Output: Disk ids in slot order, without duplicates.
    ///
    /// Details:
    /// - Slots holding a volume instead of a disk are skipped.
    #[must_use]
    pub fn disk_ids(&self) -> Vec<DiskId> {
        let mut out: Vec<DiskId> = Vec::new();
        for device in self.devices.values().flatten() {
            if let Some(id) = device.disk_id
                && !out.contains(&id)
            {
                out.push(id);
            }
        }
        out
    }
}

/// A machine image as listed by the images endpoint.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Image {
    /// Image identifier such as `linode/debian12` or `private/1234`.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Image size in megabytes.
    #[serde(default)]
    pub size: u64,
    /// Whether the image is provided publicly by the platform.
    #[serde(default)]
    pub is_public: bool,
    /// Image type (`manual` or `automatic`).
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Distribution vendor for public images.
    #[serde(default)]
    pub vendor: Option<String>,
    /// Creation timestamp as reported by the API.
    #[serde(default)]
    pub created: Option<String>,
    /// Whether the image is deprecated.
    #[serde(default)]
    pub deprecated: bool,
}

/// Which pane currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Configuration list (left).
    Configs,
    /// Disk table (center).
    #[default]
    Disks,
    /// Image list (right).
    Images,
}

impl Focus {
    /// Return the pane that follows this one when cycling with Tab.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Configs => Self::Disks,
            Self::Disks => Self::Images,
            Self::Images => Self::Configs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Config disk ids skip empty and volume slots and keep slot order
    ///
    /// - Input: Config with sda/sdb disks, an empty slot and a volume slot
    /// - Output: Disk ids in slot order, deduplicated
    fn config_disk_ids_in_slot_order() {
        let mut devices = BTreeMap::new();
        devices.insert(
            "sda".to_string(),
            Some(Device {
                disk_id: Some(11),
                volume_id: None,
            }),
        );
        devices.insert(
            "sdb".to_string(),
            Some(Device {
                disk_id: Some(12),
                volume_id: None,
            }),
        );
        devices.insert("sdc".to_string(), None);
        devices.insert(
            "sdd".to_string(),
            Some(Device {
                disk_id: None,
                volume_id: Some(99),
            }),
        );
        devices.insert(
            "sde".to_string(),
            Some(Device {
                disk_id: Some(11),
                volume_id: None,
            }),
        );
        let cfg = Config {
            id: 5,
            label: "My Profile".into(),
            devices,
        };
        assert_eq!(cfg.disk_ids(), vec![11, 12]);
    }

    #[test]
    /// What: Disk size renders as integer plus fixed unit
    fn disk_size_label_has_unit() {
        let d = Disk {
            id: 1,
            label: "sda".into(),
            size: 1024,
            filesystem: String::new(),
            status: String::new(),
        };
        assert_eq!(d.size_label(), "1024 MB");
    }

    #[test]
    /// What: Config JSON with null device slots deserializes
    fn config_deserializes_api_shape() {
        let raw = r#"{"id":7,"label":"boot","devices":{"sda":{"disk_id":3,"volume_id":null},"sdb":null}}"#;
        let cfg: Config = serde_json::from_str(raw).expect("valid config json");
        assert_eq!(cfg.disk_ids(), vec![3]);
    }

    #[test]
    /// What: Focus cycles through all panes
    fn focus_cycles() {
        assert_eq!(Focus::Configs.next(), Focus::Disks);
        assert_eq!(Focus::Disks.next(), Focus::Images);
        assert_eq!(Focus::Images.next(), Focus::Configs);
    }
}
