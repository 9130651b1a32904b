//! Writes round snapshots as one multi-schema, tab-separated log.
//!
//! Per round the writer emits, in order: the game line; the planetary,
//! map and board lines (first round only); enrichment for units not seen
//! before; one action line per movement path; one attack line per attack;
//! one state line per unit. With headers enabled, each schema's header line
//! precedes its first data line.

use std::collections::HashSet;
use std::io::{self, Write};

use log::debug;

use crate::config::ExportConfig;
use crate::schema::{Field, FieldCodec, SchemaRecord};
use crate::schemas::{
    attack_record, board_lines, enrichment, enrichment_record, game, game_record, map_settings,
    map_settings_record, planetary, planetary_record, unit_action, unit_attack, unit_state,
    SchemaKind, UnitAction, UnitState,
};
use crate::snapshot::RoundSnapshot;

pub struct GameLogWriter<W: Write> {
    out: W,
    config: ExportConfig,
    headers_written: HashSet<SchemaKind>,
    enriched: HashSet<i32>,
    static_written: bool,
    lines: usize,
}

impl<W: Write> GameLogWriter<W> {
    pub fn new(out: W, config: ExportConfig) -> Self {
        GameLogWriter {
            out,
            config,
            headers_written: HashSet::new(),
            enriched: HashSet::new(),
            static_written: false,
            lines: 0,
        }
    }

    /// Lines written so far, headers included.
    pub fn lines_written(&self) -> usize {
        self.lines
    }

    /// Writes every line for one round and returns how many were written.
    pub fn write_round(&mut self, round: &RoundSnapshot) -> io::Result<usize> {
        let before = self.lines;
        let g = &round.game;

        self.record(SchemaKind::Game, &game::codec(), &game_record(g))?;

        if !self.static_written {
            self.record(
                SchemaKind::PlanetaryConditions,
                &planetary::codec(),
                &planetary_record(g.planetary.as_ref()),
            )?;
            self.record(
                SchemaKind::MapSettings,
                &map_settings::codec(),
                &map_settings_record(g.map.as_ref()),
            )?;
            if self.config.include_board {
                let with_header = self.claim_header(SchemaKind::Board);
                for line in board_lines(g.board.as_ref(), with_header) {
                    self.line(&line)?;
                }
            }
            self.static_written = true;
        }

        if self.config.include_enrichment {
            let codec = enrichment::codec();
            for entity in &g.entities {
                if self.enriched.insert(entity.id) {
                    self.record(SchemaKind::UnitEnrichment, &codec, &enrichment_record(entity))?;
                }
            }
        }

        let codec = unit_action::codec();
        for path in &round.moves {
            let action = UnitAction::from_path(g, path);
            self.record(SchemaKind::UnitAction, &codec, &action.to_record())?;
        }

        if self.config.include_attacks {
            let codec = unit_attack::codec();
            for attack in &round.attacks {
                self.record(SchemaKind::UnitAttack, &codec, &attack_record(g, attack))?;
            }
        }

        let codec = unit_state::codec();
        for entity in &g.entities {
            let state = UnitState::from_entity(g, entity);
            self.record(SchemaKind::UnitState, &codec, &state.to_record())?;
        }

        let written = self.lines - before;
        debug!("round {:?}: {} lines", g.round, written);
        Ok(written)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Returns true if the header for `kind` is still due, marking it done.
    fn claim_header(&mut self, kind: SchemaKind) -> bool {
        self.config.write_headers && self.headers_written.insert(kind)
    }

    fn record<F: Field>(
        &mut self,
        kind: SchemaKind,
        codec: &FieldCodec<F>,
        record: &SchemaRecord<F>,
    ) -> io::Result<()> {
        if self.claim_header(kind) {
            self.line(&codec.header_line())?;
        }
        self.line(&codec.encode(record))
    }

    fn line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.lines += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_action_states;
    use crate::snapshot::{
        AttackKind, AttackSnapshot, Board, Coords, EntitySnapshot, GameSnapshot, MovePathSnapshot,
    };

    fn round(n: i32) -> RoundSnapshot {
        let mut a = EntitySnapshot::new(1);
        a.position = Some(Coords::new(n, 2));
        let mut b = EntitySnapshot::new(2);
        b.position = Some(Coords::new(5, 5));
        RoundSnapshot {
            game: GameSnapshot {
                round: Some(n),
                entities: vec![a, b],
                board: Some(Board::flat(2, 2)),
                ..Default::default()
            },
            moves: vec![MovePathSnapshot { entity_id: 1, legal: true, ..Default::default() }],
            attacks: vec![AttackSnapshot::new(2, AttackKind::Punch)],
        }
    }

    fn markers(text: &str) -> Vec<&str> {
        text.lines().map(|l| l.split('\t').next().unwrap_or("")).collect()
    }

    #[test]
    fn first_round_layout() {
        let mut writer = GameLogWriter::new(Vec::new(), ExportConfig::default());
        let n = writer.write_round(&round(1)).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(n, text.lines().count());
        assert_eq!(
            markers(&text),
            vec![
                "GAME_V1", "GAME_V1",
                "PLANETARY_CONDITIONS_V1", "PLANETARY_CONDITIONS_V1",
                "MAP_SETTINGS_V1", "MAP_SETTINGS_V1",
                "BOARD_V1", "BOARD_V1", "BOARD_V1", "BOARD_V1", "BOARD_V1",
                "UNIT_ENRICHMENT_V1", "UNIT_ENRICHMENT_V1", "UNIT_ENRICHMENT_V1",
                "UNIT_ACTION_V1", "UNIT_ACTION_V1",
                "UNIT_ATTACK_V1", "UNIT_ATTACK_V1",
                "UNIT_STATE_V1", "UNIT_STATE_V1", "UNIT_STATE_V1",
            ]
        );
    }

    #[test]
    fn later_rounds_skip_static_lines_and_headers() {
        let mut writer = GameLogWriter::new(Vec::new(), ExportConfig::default());
        writer.write_round(&round(1)).unwrap();
        let first = writer.lines_written();
        writer.write_round(&round(2)).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let tail: Vec<&str> = markers(&text).into_iter().skip(first).collect();
        assert_eq!(
            tail,
            vec!["GAME_V1", "UNIT_ACTION_V1", "UNIT_ATTACK_V1", "UNIT_STATE_V1", "UNIT_STATE_V1"]
        );
    }

    #[test]
    fn options_drop_sections() {
        let config = ExportConfig {
            write_headers: false,
            include_board: false,
            include_attacks: false,
            include_enrichment: false,
            ..Default::default()
        };
        let mut writer = GameLogWriter::new(Vec::new(), config);
        writer.write_round(&round(1)).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(
            markers(&text),
            vec![
                "GAME_V1",
                "PLANETARY_CONDITIONS_V1",
                "MAP_SETTINGS_V1",
                "UNIT_ACTION_V1",
                "UNIT_STATE_V1",
                "UNIT_STATE_V1",
            ]
        );
    }

    #[test]
    fn written_log_reads_back() {
        let mut writer = GameLogWriter::new(Vec::new(), ExportConfig::default());
        for n in 1..=3 {
            writer.write_round(&round(n)).unwrap();
        }
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let items = parse_action_states(&text).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].round(), 3);
        assert_eq!(items[2].board_units().len(), 2);
        assert_eq!(items[2].acting_unit_state().map(|u| u.x), Some(3));
    }
}
