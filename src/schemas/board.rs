//! Board dimensions plus the hex grid.
//!
//! Besides its single data line, the board writes a column-header line
//! (`COL_0 COL_1 ...`) and one line per row (`ROW_n` then one hex token per
//! column). Every line carries the board marker.

use super::{MISSING, UNKNOWN};
use crate::schema::format::{column_label, join_line, row_label};
use crate::schema::{Field, FieldCodec, FieldInfo, SchemaRecord, ValueKind};
use crate::snapshot::{Board, Coords};

pub const MARKER: &str = "BOARD_V1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BoardField {
    Name = 0,
    Width = 1,
    Height = 2,
}

const FIELD_INFO: [FieldInfo; 3] = [
    FieldInfo::new("NAME", ValueKind::Text),
    FieldInfo::new("WIDTH", ValueKind::Int),
    FieldInfo::new("HEIGHT", ValueKind::Int),
];

impl Field for BoardField {
    const ALL: &'static [Self] = &[BoardField::Name, BoardField::Width, BoardField::Height];

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

pub fn codec() -> FieldCodec<BoardField> {
    FieldCodec::new(MARKER)
}

pub fn board_record(board: Option<&Board>) -> SchemaRecord<BoardField> {
    let name = board
        .and_then(|b| b.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());
    SchemaRecord::new()
        .with(BoardField::Name, name)
        .with(BoardField::Width, board.map_or(MISSING, |b| b.width))
        .with(BoardField::Height, board.map_or(MISSING, |b| b.height))
}

/// All lines for a board: optional header, data line, then the grid.
/// Unknown hexes produce empty cells. Without a board only the header and
/// a sentinel data line are written.
pub fn board_lines(board: Option<&Board>, with_header: bool) -> Vec<String> {
    let codec = codec();
    let mut lines = Vec::new();
    if with_header {
        lines.push(codec.header_line());
    }
    lines.push(codec.encode(&board_record(board)));

    let Some(board) = board else {
        return lines;
    };
    let width = board.width.max(0);
    let height = board.height.max(0);

    lines.push(join_line(MARKER, (0..width as usize).map(column_label)));
    for y in 0..height {
        let row = row_label(y as usize);
        let cells = (0..width).map(|x| {
            board
                .hex(Coords::new(x, y))
                .map(|h| h.token())
                .unwrap_or_default()
        });
        lines.push(join_line(MARKER, std::iter::once(row).chain(cells)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Hex, Terrain};

    #[test]
    fn grid_follows_data_line() {
        let mut board = Board::flat(3, 2);
        board.name = Some("Grassland #1".into());
        board.set_hex(
            Coords::new(1, 1),
            Hex { level: 2, terrains: vec![Terrain { kind: "woods".into(), level: 1 }] },
        );
        board.hexes[2] = None;

        let lines = board_lines(Some(&board), true);
        assert_eq!(
            lines,
            vec![
                "BOARD_V1\tNAME\tWIDTH\tHEIGHT".to_string(),
                "BOARD_V1\tGrassland #1\t3\t2".to_string(),
                "BOARD_V1\tCOL_0\tCOL_1\tCOL_2".to_string(),
                "BOARD_V1\tROW_0\t0\t0\t".to_string(),
                "BOARD_V1\tROW_1\t0\t2;woods:1\t0".to_string(),
            ]
        );
    }

    #[test]
    fn missing_board_writes_sentinels_only() {
        let lines = board_lines(None, false);
        assert_eq!(lines, vec!["BOARD_V1\tUNKNOWN\t-1\t-1".to_string()]);
    }

    #[test]
    fn data_line_decodes() {
        let board = Board::flat(16, 17);
        let lines = board_lines(Some(&board), false);
        let record = codec().decode(&lines[0]).unwrap();
        assert_eq!(record.get_as::<i64>(BoardField::Width), Some(16));
        assert_eq!(record.get_as::<i64>(BoardField::Height), Some(17));
        assert_eq!(lines.len(), 2 + 17);
    }
}
