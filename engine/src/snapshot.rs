//! Immutable hand-off snapshot
//!
//! Document and drawing generators receive one of these and never call
//! back into the engine: the price is final and every display name is
//! already resolved against the active catalog.

use serde::Serialize;

use pitta_shared::models::{AppSettings, DoorConfiguration, find_name};

use crate::pricing::compute_total_price;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    pub config: DoorConfiguration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// Resolved total, yen
    pub price: i64,
    pub door_type_name: String,
    pub color_name: String,
    pub handle_name: String,
    pub glass_style_name: String,
    pub lock_name: String,
    pub frame_name: String,
}

impl ConfigSnapshot {
    /// Freeze a configuration for downstream consumers.
    pub fn resolve(
        config: &DoorConfiguration,
        room_name: Option<&str>,
        settings: &AppSettings,
    ) -> Self {
        Self {
            config: config.clone(),
            room_name: room_name.map(str::to_string),
            price: compute_total_price(config, settings),
            door_type_name: find_name(&settings.door_types, config.door_type.as_str()).to_string(),
            color_name: find_name(&settings.colors, config.color.as_str()).to_string(),
            handle_name: find_name(&settings.handles, config.handle.as_str()).to_string(),
            glass_style_name: find_name(&settings.glass_styles, config.glass_style.as_str())
                .to_string(),
            lock_name: find_name(&settings.locks, config.lock.as_str()).to_string(),
            frame_name: find_name(&settings.frame_types, config.frame_type.as_str()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitta_shared::models::{DoorType, FrameType, LockId};

    #[test]
    fn test_snapshot_resolves_names_and_price() {
        let settings = AppSettings::default();
        let config = DoorConfiguration {
            door_type: DoorType::Hinged,
            frame_type: FrameType::ThreeWay,
            lock: LockId::DisplayLock,
            height: 220.0,
            ..DoorConfiguration::default()
        };
        let snapshot = ConfigSnapshot::resolve(&config, Some("寝室"), &settings);
        assert_eq!(snapshot.price, 29600);
        assert_eq!(snapshot.door_type_name, "片開き");
        assert_eq!(snapshot.color_name, "ピュアホワイト");
        assert_eq!(snapshot.lock_name, "表示錠");
        assert_eq!(snapshot.frame_name, "3方枠");
        assert_eq!(snapshot.room_name.as_deref(), Some("寝室"));
    }

    #[test]
    fn test_snapshot_wire_field_names() {
        let settings = AppSettings::default();
        let config = DoorConfiguration::default();
        let snapshot = ConfigSnapshot::resolve(&config, None, &settings);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json["doorTypeName"].is_string());
        assert!(json["glassStyleName"].is_string());
        assert!(json.get("roomName").is_none());
    }

    #[test]
    fn test_snapshot_price_matches_resolver() {
        let settings = AppSettings::default();
        let mut config = DoorConfiguration::default();
        config.door_type = DoorType::Storage200L;
        config.width = 80.0;
        let snapshot = ConfigSnapshot::resolve(&config, None, &settings);
        assert_eq!(snapshot.price, compute_total_price(&config, &settings));
    }
}
