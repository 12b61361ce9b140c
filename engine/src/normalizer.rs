//! Field-change normalization
//!
//! Every edit to a configuration goes through [`apply_field_change`],
//! which applies the cross-field cascade rules and returns the settled
//! configuration. Pure and deterministic; an edit that cannot be
//! honored settles on the nearest valid value and carries a notice
//! instead of failing.

use tracing::debug;

use pitta_shared::models::{
    ColorId, DoorConfiguration, DoorType, FamilyCategory, FrameType, GlassStyleId, HandleId,
    HingeSide, LockId,
};

/// Width applied when a storage family is first entered, cm
const STORAGE_ENTRY_WIDTH: f64 = 160.0;

/// One edit to a single configuration field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldChange {
    DoorType(DoorType),
    Color(ColorId),
    Handle(HandleId),
    GlassStyle(GlassStyleId),
    Lock(LockId),
    Width(f64),
    Height(f64),
    Count(i32),
    HingeSide(HingeSide),
    FrameType(FrameType),
}

/// Why a change was adjusted rather than applied verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionNotice {
    /// The requested size does not exist for this family; the
    /// configuration settled on the nearest available one.
    SizeUnavailable { message: String },
}

impl TransitionNotice {
    pub fn message(&self) -> &str {
        match self {
            Self::SizeUnavailable { message } => message,
        }
    }
}

/// The settled configuration after an edit
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub config: DoorConfiguration,
    pub notice: Option<TransitionNotice>,
}

impl Transition {
    fn settled(config: DoorConfiguration) -> Self {
        Self { config, notice: None }
    }
}

/// Apply one field edit and settle the dependent fields.
pub fn apply_field_change(config: &DoorConfiguration, change: FieldChange) -> Transition {
    let mut next = config.clone();
    match change {
        FieldChange::Color(color) => {
            next.color = color;
            Transition::settled(next)
        }
        FieldChange::Handle(handle) => {
            next.handle = handle;
            Transition::settled(next)
        }
        FieldChange::GlassStyle(glass_style) => {
            next.glass_style = glass_style;
            Transition::settled(next)
        }
        FieldChange::Lock(lock) => {
            next.lock = lock;
            Transition::settled(next)
        }
        FieldChange::Count(count) => {
            next.count = count;
            Transition::settled(next)
        }
        FieldChange::HingeSide(hinge_side) => {
            next.hinge_side = hinge_side;
            Transition::settled(next)
        }
        FieldChange::FrameType(frame_type) => {
            next.frame_type = frame_type;
            Transition::settled(next)
        }
        FieldChange::Width(width) => apply_width(next, width),
        FieldChange::Height(height) => apply_height(next, height),
        FieldChange::DoorType(door_type) => apply_door_type(next, door_type),
    }
}

fn apply_width(mut next: DoorConfiguration, width: f64) -> Transition {
    // The L and U shapes have no 80cm variant; that width belongs to
    // the floor type.
    if width == 80.0
        && matches!(
            next.door_type,
            DoorType::Storage200L | DoorType::Storage200U
        )
    {
        debug!(from = %next.door_type, "width 80 downgrades to the floor type");
        next.door_type = DoorType::Storage80;
        next.width = 80.0;
        next.height = 90.0;
        return Transition::settled(next);
    }

    if width == 200.0 && next.door_type == DoorType::Storage200Full {
        next.width = 160.0;
        return Transition {
            config: next,
            notice: Some(TransitionNotice::SizeUnavailable {
                message: "サイズがありませんので他のサイズを選んでください".to_string(),
            }),
        };
    }

    next.width = width;
    Transition::settled(next)
}

fn apply_height(mut next: DoorConfiguration, height: f64) -> Transition {
    next.height = height;
    if height == 200.0 {
        next.frame_type = FrameType::ThreeWay;
    }
    // Low double doors only exist as 3方枠 panels.
    if next.door_type == DoorType::Double && (height == 90.0 || height == 120.0) {
        next.frame_type = FrameType::ThreeWay;
    }
    Transition::settled(next)
}

fn apply_door_type(mut next: DoorConfiguration, door_type: DoorType) -> Transition {
    let was_storage = next.door_type.is_storage();
    next.door_type = door_type;
    let traits = door_type.traits();

    if traits.forces_three_way {
        next.frame_type = FrameType::ThreeWay;
    }
    if let Some(width) = traits.canonical_width {
        next.width = width;
    }

    if !traits.glass {
        next.glass_style = GlassStyleId::None;
    }
    if !traits.visible_handle {
        next.handle = HandleId::SatinNickel;
    }
    if !traits.lockable {
        next.lock = LockId::None;
    }

    if traits.category == FamilyCategory::Material {
        next.count = 1;
        next.color = ColorId::Ww;
    }

    if was_storage && !door_type.is_storage() {
        next.height = 220.0;
    } else if door_type.is_storage() {
        if !was_storage {
            next.width = STORAGE_ENTRY_WIDTH;
        }
        // Heights are fixed per storage family, the width is what varies.
        next.height = if door_type == DoorType::Storage80 { 90.0 } else { 200.0 };
        if matches!(door_type, DoorType::Storage200L | DoorType::Storage200U) {
            next.hinge_side = HingeSide::Left;
        }
    }

    Transition::settled(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(door_type: DoorType) -> DoorConfiguration {
        DoorConfiguration {
            door_type,
            ..DoorConfiguration::default()
        }
    }

    fn settle(config: &DoorConfiguration, change: FieldChange) -> DoorConfiguration {
        let t = apply_field_change(config, change);
        assert!(t.notice.is_none(), "unexpected notice");
        t.config
    }

    #[test]
    fn test_switch_to_double_snaps_width_and_frame() {
        let config = make_config(DoorType::Hinged);
        let next = settle(&config, FieldChange::DoorType(DoorType::Double));
        assert_eq!(next.width, 73.5);
        assert_eq!(next.frame_type, FrameType::ThreeWay);
    }

    #[test]
    fn test_canonical_widths() {
        let cases = [
            (DoorType::Hinged, 77.8),
            (DoorType::SlidingInset, 164.5),
            (DoorType::SlidingKata3, 321.5),
            (DoorType::Folding8, 325.8),
            (DoorType::HingedStorage, 43.5),
        ];
        for (dt, width) in cases {
            let next = settle(&make_config(DoorType::Unselected), FieldChange::DoorType(dt));
            assert_eq!(next.width, width, "{dt}");
        }
    }

    #[test]
    fn test_entering_storage_sets_width_and_height() {
        let config = make_config(DoorType::Hinged);
        let next = settle(&config, FieldChange::DoorType(DoorType::Storage200Full));
        assert_eq!(next.width, 160.0);
        assert_eq!(next.height, 200.0);

        let next = settle(&config, FieldChange::DoorType(DoorType::Storage80));
        assert_eq!(next.height, 90.0);
    }

    #[test]
    fn test_moving_between_storage_families_keeps_width() {
        let mut config = make_config(DoorType::Storage200Full);
        config.width = 120.0;
        config.height = 200.0;
        let next = settle(&config, FieldChange::DoorType(DoorType::Storage200L));
        assert_eq!(next.width, 120.0);
        assert_eq!(next.hinge_side, HingeSide::Left);

        // the family height still applies on every storage entry
        let next = settle(&config, FieldChange::DoorType(DoorType::Storage80));
        assert_eq!(next.width, 120.0);
        assert_eq!(next.height, 90.0);
    }

    #[test]
    fn test_leaving_storage_restores_height() {
        let mut config = make_config(DoorType::Storage200L);
        config.height = 200.0;
        let next = settle(&config, FieldChange::DoorType(DoorType::Hinged));
        assert_eq!(next.height, 220.0);
        assert_eq!(next.width, 77.8);
    }

    #[test]
    fn test_width_80_downgrades_l_shape_to_floor_type() {
        let mut config = make_config(DoorType::Storage200U);
        config.width = 120.0;
        config.height = 200.0;
        let next = settle(&config, FieldChange::Width(80.0));
        assert_eq!(next.door_type, DoorType::Storage80);
        assert_eq!(next.width, 80.0);
        assert_eq!(next.height, 90.0);
    }

    #[test]
    fn test_width_200_rejected_on_tall_unit() {
        let mut config = make_config(DoorType::Storage200Full);
        config.width = 120.0;
        let t = apply_field_change(&config, FieldChange::Width(200.0));
        assert_eq!(t.config.width, 160.0);
        let notice = t.notice.unwrap();
        assert_eq!(
            notice.message(),
            "サイズがありませんので他のサイズを選んでください"
        );
    }

    #[test]
    fn test_height_200_forces_three_way() {
        let config = make_config(DoorType::Hinged);
        let next = settle(&config, FieldChange::Height(200.0));
        assert_eq!(next.frame_type, FrameType::ThreeWay);

        let next = settle(&config, FieldChange::Height(220.0));
        assert_eq!(next.frame_type, FrameType::TwoWay);
    }

    #[test]
    fn test_low_double_forces_three_way() {
        let mut config = make_config(DoorType::Double);
        config.frame_type = FrameType::TwoWay;
        let next = settle(&config, FieldChange::Height(90.0));
        assert_eq!(next.frame_type, FrameType::ThreeWay);
        let next = settle(&config, FieldChange::Height(120.0));
        assert_eq!(next.frame_type, FrameType::ThreeWay);
    }

    #[test]
    fn test_glass_and_lock_reset_on_unsupporting_family() {
        let mut config = make_config(DoorType::Hinged);
        config.glass_style = GlassStyleId::Clear;
        config.lock = LockId::DisplayLock;
        let next = settle(&config, FieldChange::DoorType(DoorType::Folding4));
        assert_eq!(next.glass_style, GlassStyleId::None);
        assert_eq!(next.lock, LockId::None);

        // single sliders keep both
        let next = settle(&config, FieldChange::DoorType(DoorType::SlidingOutset));
        assert_eq!(next.glass_style, GlassStyleId::Clear);
        assert_eq!(next.lock, LockId::DisplayLock);
    }

    #[test]
    fn test_handle_kept_on_multi_panel_sliding_reset_on_folding() {
        let mut config = make_config(DoorType::Hinged);
        config.handle = HandleId::Black;
        let next = settle(&config, FieldChange::DoorType(DoorType::Sliding3));
        assert_eq!(next.handle, HandleId::Black);

        let next = settle(&config, FieldChange::DoorType(DoorType::Folding2));
        assert_eq!(next.handle, HandleId::SatinNickel);
    }

    #[test]
    fn test_material_resets_count_and_color() {
        let mut config = make_config(DoorType::Hinged);
        config.color = ColorId::Dg;
        config.count = 5;
        let next = settle(&config, FieldChange::DoorType(DoorType::MaterialSkirting));
        assert_eq!(next.count, 1);
        assert_eq!(next.color, ColorId::Ww);
    }

    #[test]
    fn test_cascade_is_idempotent() {
        let config = make_config(DoorType::Hinged);
        let once = settle(&config, FieldChange::DoorType(DoorType::Storage200L));
        let twice = settle(&once, FieldChange::DoorType(DoorType::Storage200L));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_plain_field_edits_pass_through() {
        let config = make_config(DoorType::Hinged);
        let next = settle(&config, FieldChange::Color(ColorId::Ga));
        assert_eq!(next.color, ColorId::Ga);
        let next = settle(&next, FieldChange::HingeSide(HingeSide::Left));
        assert_eq!(next.hinge_side, HingeSide::Left);
    }
}
