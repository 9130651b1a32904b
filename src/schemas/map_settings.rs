//! Map layout: board size, how many boards, and which boards.

use super::{MISSING, UNKNOWN};
use crate::schema::{Field, FieldCodec, FieldInfo, SchemaRecord, ValueKind};
use crate::snapshot::MapLayout;

pub const MARKER: &str = "MAP_SETTINGS_V1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MapSettingsField {
    BoardWidth = 0,
    BoardHeight = 1,
    MapWidth = 2,
    MapHeight = 3,
    Medium = 4,
    Boards = 5,
}

const FIELD_INFO: [FieldInfo; 6] = [
    FieldInfo::new("BOARD_WIDTH", ValueKind::Int),
    FieldInfo::new("BOARD_HEIGHT", ValueKind::Int),
    FieldInfo::new("MAP_WIDTH", ValueKind::Int),
    FieldInfo::new("MAP_HEIGHT", ValueKind::Int),
    FieldInfo::new("MEDIUM", ValueKind::Text),
    FieldInfo::new("BOARDS", ValueKind::TextList),
];

impl Field for MapSettingsField {
    const ALL: &'static [Self] = &[
        MapSettingsField::BoardWidth,
        MapSettingsField::BoardHeight,
        MapSettingsField::MapWidth,
        MapSettingsField::MapHeight,
        MapSettingsField::Medium,
        MapSettingsField::Boards,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        FIELD_INFO[self as usize].name
    }

    fn kind(self) -> ValueKind {
        FIELD_INFO[self as usize].kind
    }
}

pub fn codec() -> FieldCodec<MapSettingsField> {
    FieldCodec::new(MARKER)
}

pub fn map_settings_record(layout: Option<&MapLayout>) -> SchemaRecord<MapSettingsField> {
    use MapSettingsField as F;
    let int = |get: fn(&MapLayout) -> Option<i32>| layout.and_then(get).unwrap_or(MISSING);

    let mut r = SchemaRecord::new();
    r.put(F::BoardWidth, int(|m: &MapLayout| m.board_width))
        .put(F::BoardHeight, int(|m: &MapLayout| m.board_height))
        .put(F::MapWidth, int(|m: &MapLayout| m.map_width))
        .put(F::MapHeight, int(|m: &MapLayout| m.map_height))
        .put(
            F::Medium,
            layout
                .and_then(|m| m.medium.clone())
                .unwrap_or_else(|| UNKNOWN.to_string()),
        )
        .put(F::Boards, layout.map(|m| m.boards.clone()).unwrap_or_default());
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_with_boards() {
        let layout = MapLayout {
            board_width: Some(16),
            board_height: Some(17),
            map_width: Some(2),
            map_height: Some(1),
            medium: Some("GROUND".into()),
            boards: vec!["grass/Open 1".into(), "hills/Rolling Hills 2".into()],
        };
        let line = codec().encode(&map_settings_record(Some(&layout)));
        assert_eq!(
            line,
            "MAP_SETTINGS_V1\t16\t17\t2\t1\tGROUND\tgrass/Open_1 hills/Rolling_Hills_2"
        );
        let back = codec().decode(&line).unwrap();
        assert_eq!(
            back.get_as::<Vec<String>>(MapSettingsField::Boards),
            Some(vec!["grass/Open_1".to_string(), "hills/Rolling_Hills_2".to_string()])
        );
    }

    #[test]
    fn missing_layout() {
        assert_eq!(
            codec().encode(&map_settings_record(None)),
            "MAP_SETTINGS_V1\t-1\t-1\t-1\t-1\tUNKNOWN\t"
        );
    }
}
