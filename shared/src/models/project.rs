//! Saved doors, project metadata and the persisted project bundle
//!
//! A [`SavedDoor`] snapshots the configuration and freezes the price at
//! save time; the price is never recomputed from the config afterwards,
//! only replaced by an explicit edit-and-resave. The saved list is
//! partitioned into ordinary doors (WD), storage units (SB) and trim
//! materials (造作材) purely by family category — the partition is
//! derived for numbering and reporting, never stored.

use super::config::{ColorId, DoorConfiguration, FamilyCategory, HandleId};
use crate::error::{EngineError, EngineResult};
use crate::util;
use serde::{Deserialize, Serialize};

/// One door added to the quotation list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedDoor {
    pub id: String,
    /// Independently owned snapshot of the editing state
    pub config: DoorConfiguration,
    /// Price frozen at save time, yen
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
}

impl SavedDoor {
    pub fn new(config: DoorConfiguration, price: i64, room_name: Option<String>) -> Self {
        Self {
            id: util::saved_door_id(),
            config,
            price,
            room_name,
        }
    }

    /// Room name for display, with the unset-name placeholder.
    pub fn room_display(&self) -> &str {
        self.room_name.as_deref().filter(|r| !r.is_empty()).unwrap_or("名称未設定")
    }
}

/// Customer/site metadata plus the project-level defaults the deviation
/// checker treats as the expected baseline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub customer_name: String,
    pub construction_location: String,
    pub construction_company: String,
    /// Shipping cost in yen, looked up from the prefecture rate table
    pub shipping_cost: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_color: Option<ColorId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_handle: Option<HandleId>,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            construction_location: String::new(),
            construction_company: String::new(),
            shipping_cost: 0,
            default_height: Some(220.0),
            default_color: Some(ColorId::Ww),
            default_handle: Some(HandleId::SatinNickel),
        }
    }
}

/// Display label for a saved door: `WD3（寝室）`, `SB1（玄関）`,
/// `造作材（リビング）`. Numbering is the door's position within its
/// own partition of `doors`.
pub fn door_label(doors: &[SavedDoor], door: &SavedDoor) -> String {
    let room = door.room_display();
    match door.config.door_type.category() {
        FamilyCategory::Material => format!("造作材（{room}）"),
        FamilyCategory::Storage => {
            let idx = doors
                .iter()
                .filter(|d| d.config.door_type.is_storage())
                .position(|d| d.id == door.id)
                .map_or(0, |i| i + 1);
            format!("SB{idx}（{room}）")
        }
        FamilyCategory::Door => {
            let idx = doors
                .iter()
                .filter(|d| !d.config.door_type.is_storage() && !d.config.door_type.is_material())
                .position(|d| d.id == door.id)
                .map_or(0, |i| i + 1);
            format!("WD{idx}（{room}）")
        }
    }
}

/// Snapshot import/export format for a whole project.
///
/// Import is all-or-nothing: a bundle that fails to parse, or that is
/// missing the door list or project info, is rejected without touching
/// the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBundle {
    pub version: String,
    /// Unix millis at export time
    pub timestamp: i64,
    pub doors: Vec<SavedDoor>,
    pub project_info: ProjectInfo,
}

/// Bundle format version written by this release
pub const BUNDLE_VERSION: &str = "1.0";

impl ProjectBundle {
    pub fn new(doors: Vec<SavedDoor>, project_info: ProjectInfo) -> Self {
        Self {
            version: BUNDLE_VERSION.to_string(),
            timestamp: util::now_millis(),
            doors,
            project_info,
        }
    }

    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| EngineError::invalid_bundle(format!("無効なファイル形式です: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::DoorType;

    fn make_door(door_type: DoorType, room: &str) -> SavedDoor {
        let config = DoorConfiguration {
            door_type,
            ..DoorConfiguration::default()
        };
        SavedDoor::new(config, 30000, Some(room.to_string()))
    }

    #[test]
    fn test_door_label_partitions_independently() {
        let doors = vec![
            make_door(DoorType::Hinged, "寝室"),
            make_door(DoorType::Storage80, "玄関"),
            make_door(DoorType::Double, "納戸"),
            make_door(DoorType::MaterialSkirting, "リビング"),
            make_door(DoorType::Storage200L, "玄関"),
        ];
        assert_eq!(door_label(&doors, &doors[0]), "WD1（寝室）");
        assert_eq!(door_label(&doors, &doors[1]), "SB1（玄関）");
        assert_eq!(door_label(&doors, &doors[2]), "WD2（納戸）");
        assert_eq!(door_label(&doors, &doors[3]), "造作材（リビング）");
        assert_eq!(door_label(&doors, &doors[4]), "SB2（玄関）");
    }

    #[test]
    fn test_room_display_placeholder() {
        let mut door = make_door(DoorType::Hinged, "寝室");
        door.room_name = None;
        assert_eq!(door.room_display(), "名称未設定");
        door.room_name = Some(String::new());
        assert_eq!(door.room_display(), "名称未設定");
    }

    #[test]
    fn test_bundle_round_trip() {
        let bundle = ProjectBundle::new(
            vec![make_door(DoorType::Hinged, "寝室")],
            ProjectInfo::default(),
        );
        let json = bundle.to_json().unwrap();
        let back = ProjectBundle::from_json(&json).unwrap();
        assert_eq!(back, bundle);
        assert_eq!(back.version, BUNDLE_VERSION);
    }

    #[test]
    fn test_bundle_rejects_missing_sections() {
        // doors present but projectInfo missing: rejected wholesale
        let json = r#"{"version":"1.0","timestamp":0,"doors":[]}"#;
        assert!(ProjectBundle::from_json(json).is_err());

        let json = r#"{"version":"1.0","timestamp":0,"doors":"nope","projectInfo":{}}"#;
        assert!(ProjectBundle::from_json(json).is_err());

        assert!(ProjectBundle::from_json("not json at all").is_err());
    }
}
