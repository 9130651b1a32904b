use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use battlelog::config::ExportConfig;
use battlelog::dataset::{parse_action_states, ActionAndState, TrainingDataset};
use battlelog::gamelog::GameLogWriter;
use battlelog::schemas::{unit_state, UnitAction, UnitState};
use battlelog::snapshot::{
    Coords, EntitySnapshot, FiringArc, GameSnapshot, MovePathSnapshot, MoveStep, RoundSnapshot,
    WeaponMount, WeaponStats,
};

const UNITS: i32 = 12;
const ROUNDS: i32 = 40;

fn unit(id: i32, round: i32) -> EntitySnapshot {
    let mut e = EntitySnapshot::new(id);
    e.owner_id = Some(id % 2);
    e.team_id = Some(id % 2);
    e.chassis = Some("Warhammer".into());
    e.model = Some("WHM-6R".into());
    e.position = Some(Coords::new(id, round % 30));
    e.walk_mp = Some(4);
    e.run_mp = Some(6);
    e.armor_remaining = Some(0.75);
    e.internal_remaining = Some(1.0);
    for _ in 0..4 {
        e.weapons.push(WeaponMount::new(
            "PPC",
            FiringArc::Front,
            WeaponStats { damage: 10, short_range: 6, medium_range: 12, long_range: 18 },
        ));
    }
    e
}

fn round(r: i32) -> RoundSnapshot {
    RoundSnapshot {
        game: GameSnapshot {
            round: Some(r),
            entities: (0..UNITS).map(|id| unit(id, r)).collect(),
            ..Default::default()
        },
        moves: (0..UNITS)
            .map(|id| MovePathSnapshot {
                entity_id: id,
                start: Some(Coords::new(id, r - 1)),
                end: Some(Coords::new(id, r)),
                steps: vec![MoveStep::Forwards; 3],
                legal: true,
                mp_used: Some(3),
                psr_targets: vec![6],
                ..Default::default()
            })
            .collect(),
        attacks: vec![],
    }
}

fn items() -> Vec<ActionAndState> {
    (1..=ROUNDS)
        .flat_map(|r| {
            let snap = round(r);
            let states: Vec<UnitState> = snap
                .game
                .entities
                .iter()
                .map(|e| UnitState::from_entity(&snap.game, e))
                .collect();
            snap.moves
                .iter()
                .map(|p| ActionAndState::new(r, UnitAction::from_path(&snap.game, p), states.clone()))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn bench_encode_state(c: &mut Criterion) {
    let snap = round(1);
    let codec = unit_state::codec();
    let state = UnitState::from_entity(&snap.game, &snap.game.entities[0]);
    c.bench_function("encode_unit_state", |b| {
        b.iter(|| codec.encode(black_box(&state.to_record())))
    });
}

fn bench_write_round(c: &mut Criterion) {
    let snap = round(3);
    c.bench_function("write_round_12_units", |b| {
        b.iter(|| {
            let mut writer = GameLogWriter::new(Vec::with_capacity(64 * 1024), ExportConfig::default());
            writer.write_round(black_box(&snap)).unwrap();
            writer.into_inner()
        })
    });
}

fn bench_parse_log(c: &mut Criterion) {
    let mut writer = GameLogWriter::new(Vec::new(), ExportConfig::default());
    for r in 1..=ROUNDS {
        writer.write_round(&round(r)).unwrap();
    }
    let text = String::from_utf8(writer.into_inner()).unwrap();
    c.bench_function("parse_log_40_rounds", |b| {
        b.iter(|| parse_action_states(black_box(&text)).unwrap())
    });
}

fn bench_build_dataset(c: &mut Criterion) {
    let items = items();
    c.bench_function("build_dataset_480_items", |b| {
        b.iter(|| TrainingDataset::from_items(black_box(items.clone())))
    });
}

fn bench_sample(c: &mut Criterion) {
    let dataset = TrainingDataset::from_items(items());
    let mut rng = SmallRng::seed_from_u64(42);
    c.bench_function("sample_batch_64", |b| {
        b.iter(|| dataset.sample(black_box(64), &mut rng))
    });
}

criterion_group!(
    benches,
    bench_encode_state,
    bench_write_round,
    bench_parse_log,
    bench_build_dataset,
    bench_sample,
);
criterion_main!(benches);
