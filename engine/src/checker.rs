//! Pre-export deviation report
//!
//! Scans the saved list against the project-level defaults and produces
//! the human-readable warning lines shown before document generation.
//! Pure classification; the acknowledgement gate lives with the caller.

use pitta_shared::models::{
    AppSettings, ColorId, FamilyCategory, FrameType, GlassStyleId, HandleId, LockId, ProjectInfo,
    SavedDoor, door_label, find_name,
};

/// Room-name substrings that require a display lock
const LOCK_REQUIRED_ROOMS: &[&str] = &["洗面", "脱衣", "トイレ"];

/// True when the door's width or height is not on its family's preset
/// list. Storage heights are tied to the family and never checked;
/// materials are cut to order and have no presets.
pub fn is_custom_size(door: &SavedDoor) -> bool {
    let config = &door.config;
    let traits = config.door_type.traits();
    let width_listed = traits.preset_widths.iter().any(|&w| w == config.width);
    match traits.category {
        FamilyCategory::Material => false,
        FamilyCategory::Storage => !width_listed,
        FamilyCategory::Door => {
            !width_listed || !traits.preset_heights.iter().any(|&h| h == config.height)
        }
    }
}

/// Collect every deviation warning for the saved list. Rules are
/// independent; one door can contribute several lines.
pub fn check_deviations(
    doors: &[SavedDoor],
    project_info: &ProjectInfo,
    settings: &AppSettings,
) -> Vec<String> {
    let mut messages = Vec::new();

    let expected_color = project_info.default_color.unwrap_or(ColorId::Ww);
    let expected_handle = project_info.default_handle.unwrap_or(HandleId::SatinNickel);

    let mut glass_count = 0;
    let mut display_lock_count = 0;

    for door in doors {
        let config = &door.config;
        let traits = config.door_type.traits();
        let label = door_label(doors, door);
        let plain_door = traits.category == FamilyCategory::Door;

        if plain_door && config.color != expected_color {
            let color_name = find_name(&settings.colors, config.color.as_str());
            messages.push(format!("{label} のドアが（{color_name}）で指定されています"));
        }

        if traits.visible_handle && plain_door && config.handle != expected_handle {
            let handle_name = find_name(&settings.handles, config.handle.as_str());
            messages.push(format!(
                "{label} のハンドルが（{handle_name}）で指定されています"
            ));
        }

        if is_custom_size(door) {
            messages.push(format!("{label} のドアが特寸で指定されています"));
        }

        if traits.lockable
            && config.lock != LockId::DisplayLock
            && let Some(room) = &door.room_name
            && LOCK_REQUIRED_ROOMS.iter().any(|needle| room.contains(needle))
        {
            messages.push(format!("【{label} に表示錠が選択されていません】"));
        }

        if plain_door && config.height < 220.0 && config.frame_type != FrameType::ThreeWay {
            messages.push(format!(
                "{label} のドア（H{}）が3方枠ではありません",
                format_cm(config.height)
            ));
        }

        if config.glass_style != GlassStyleId::None {
            glass_count += 1;
        }
        if config.lock == LockId::DisplayLock {
            display_lock_count += 1;
        }
    }

    if glass_count > 0 {
        messages.push(format!("【ガラスドアが（{glass_count}）か所指定されています】"));
    }
    if display_lock_count > 0 {
        messages.push(format!(
            "【表示錠が（{display_lock_count}）か所指定されています】"
        ));
    }

    messages.extend(duplicate_messages(doors, settings));
    messages
}

/// Duplicate confirmation lines for storage and material entries,
/// grouped by (family, width, height, color) in first-seen order.
fn duplicate_messages(doors: &[SavedDoor], settings: &AppSettings) -> Vec<String> {
    type Signature = (&'static str, u64, u64, &'static str);
    let mut groups: Vec<(Signature, u64)> = Vec::new();

    for door in doors {
        let config = &door.config;
        if !config.door_type.is_storage() && !config.door_type.is_material() {
            continue;
        }
        let signature: Signature = (
            config.door_type.as_str(),
            config.width.to_bits(),
            config.height.to_bits(),
            config.color.as_str(),
        );
        if let Some(group) = groups.iter_mut().find(|(s, _)| *s == signature) {
            group.1 += 1;
        } else {
            groups.push((signature, 1));
        }
    }

    groups
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|((type_id, ..), count)| {
            let name = find_name(&settings.door_types, type_id);
            format!("【重複確認】{name} がリストに {count} 件含まれています")
        })
        .collect()
}

fn format_cm(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
