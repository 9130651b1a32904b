//! Integration tests for the battlelog and pairs binaries.
//!
//! Spawns each binary, feeds it input on stdin, and checks stdout.

use std::io::{Read, Write};
use std::process::{Command, Stdio};

use battlelog::snapshot::{
    Board, Coords, EntitySnapshot, GameSnapshot, MovePathSnapshot, MoveStep, RoundSnapshot,
};

/// Runs a binary with `args`, writes `input` to its stdin, and returns
/// (success, stdout).
fn run(exe: &str, args: &[&str], input: &str) -> (bool, String) {
    let mut child = Command::new(exe)
        .args(args)
        .env("RUST_LOG", "error")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start binary");

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(input.as_bytes()).unwrap();
    drop(stdin);

    let mut out = String::new();
    child.stdout.take().unwrap().read_to_string(&mut out).unwrap();
    let status = child.wait().expect("failed to wait on child");
    (status.success(), out)
}

fn battlelog(args: &[&str], input: &str) -> (bool, String) {
    run(env!("CARGO_BIN_EXE_battlelog"), args, input)
}

fn pairs(args: &[&str], input: &str) -> (bool, String) {
    run(env!("CARGO_BIN_EXE_pairs"), args, input)
}

/// Two units advancing one hex per round for `rounds` rounds.
fn snapshots(rounds: i32) -> String {
    let mut jsonl = String::new();
    for r in 1..=rounds {
        let mut entities = Vec::new();
        let mut moves = Vec::new();
        for id in [1, 2] {
            let mut e = EntitySnapshot::new(id);
            e.owner_id = Some(id - 1);
            e.team_id = Some(id);
            e.chassis = Some(format!("Mech {}", id));
            e.position = Some(Coords::new(id * 4, r));
            e.walk_mp = Some(4);
            entities.push(e);
            moves.push(MovePathSnapshot {
                entity_id: id,
                start: Some(Coords::new(id * 4, r - 1)),
                end: Some(Coords::new(id * 4, r)),
                steps: vec![MoveStep::Forwards],
                legal: true,
                mp_used: Some(1),
                hexes_moved: Some(1),
                ..Default::default()
            });
        }
        let round = RoundSnapshot {
            game: GameSnapshot {
                round: Some(r),
                entities,
                board: Some(Board::flat(12, 12)),
                ..Default::default()
            },
            moves,
            attacks: vec![],
        };
        jsonl.push_str(&serde_json::to_string(&round).unwrap());
        jsonl.push('\n');
    }
    jsonl
}

#[test]
fn battlelog_writes_every_schema() {
    let (ok, out) = battlelog(&[], &snapshots(2));
    assert!(ok);
    for marker in [
        "GAME_V1\t",
        "PLANETARY_CONDITIONS_V1\t",
        "MAP_SETTINGS_V1\t",
        "BOARD_V1\tCOL_0",
        "BOARD_V1\tROW_11",
        "UNIT_ENRICHMENT_V1\t",
        "UNIT_ACTION_V1\tROUND",
        "UNIT_STATE_V1\tROUND",
    ] {
        assert!(out.lines().any(|l| l.starts_with(marker)), "missing {}", marker);
    }
    assert_eq!(out.lines().filter(|l| l.starts_with("UNIT_ACTION_V1\t")).count(), 5);
    assert_eq!(out.lines().filter(|l| l.starts_with("UNIT_ENRICHMENT_V1\t")).count(), 3);
}

#[test]
fn battlelog_flags_drop_headers_and_board() {
    let (ok, out) = battlelog(&["--no-headers", "--no-board"], &snapshots(1));
    assert!(ok);
    assert!(!out.lines().any(|l| l.starts_with("BOARD_V1")));
    assert!(!out.contains("\tROUND\t"));
}

#[test]
fn battlelog_rejects_bad_json() {
    let (ok, _) = battlelog(&[], "{\"game\": 5}\n");
    assert!(!ok);
}

#[test]
fn pairs_samples_from_log() {
    let (ok, log) = battlelog(&[], &snapshots(4));
    assert!(ok);

    let (ok, out) = pairs(&["--batch", "4", "--seed", "7", "--sorted"], &log);
    assert!(ok);
    let blocks: Vec<&str> = out.split("\n\n").filter(|b| !b.trim().is_empty()).collect();
    assert_eq!(blocks.len(), 4);
    for block in blocks {
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 2);
        let before: Vec<&str> = lines[0].split('\t').collect();
        let after: Vec<&str> = lines[1].split('\t').collect();
        // Same unit, consecutive rounds.
        assert_eq!(before[2], after[2]);
        let r0: i32 = before[1].parse().unwrap();
        let r1: i32 = after[1].parse().unwrap();
        assert_eq!(r1, r0 + 1);
    }
}

#[test]
fn pairs_is_reproducible_with_seed() {
    let (_, log) = battlelog(&[], &snapshots(6));
    let (_, a) = pairs(&["--batch", "5", "--seed", "99"], &log);
    let (_, b) = pairs(&["--batch", "5", "--seed", "99"], &log);
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn pairs_caps_oversized_batch() {
    let (_, log) = battlelog(&[], &snapshots(2));
    let (ok, out) = pairs(&["--batch", "50", "--seed", "1"], &log);
    assert!(ok);
    assert_eq!(out.lines().filter(|l| l.starts_with("UNIT_ACTION_V1")).count(), 4);
}
