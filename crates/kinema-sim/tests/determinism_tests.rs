//! Determinism is the core contract: identical initial state and identical
//! `dt` sequences must produce bit-identical simulation state. Verified by
//! serializing snapshots (which carry raw fixed-point integers) and
//! comparing the bytes.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use kinema_core::fixed::Fixed;
use kinema_core::vec2::Vec2f;
use kinema_sim::world::{BodyId, World};

const DT: f32 = 1.0 / 30.0;

fn setup_scenario(world: &mut World) -> Vec<BodyId> {
    // A handful of bodies with varied masses and initial motion.
    let bodies = [
        (2_097_152i64, -655_360i64, 1.0f32), // (32, -10) at Q47.16
        (-131_072, 98_304, 0.5),
        (65_536, 65_536, 2.0),
        (0, -3_276_800, 4.0),
    ];

    let mut ids = Vec::new();
    for (vx, vy, mass) in bodies {
        let id = world.create_body();
        world.set_mass(id, mass).unwrap();
        world
            .set_velocity(id, Vec2f::new(Fixed::new(vx, -16), Fixed::new(vy, -16)))
            .unwrap();
        ids.push(id);
    }
    ids
}

/// Run the scenario for `ticks` steps, feeding every body a seeded
/// pseudo-random force each tick, and serialize the final snapshot.
fn run_scenario(ticks: u64) -> String {
    let mut world = World::new();
    let ids = setup_scenario(&mut world);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..ticks {
        for &id in &ids {
            let force = Vec2f::new(
                Fixed::new(rng.gen_range(-100_000..=100_000), -16),
                Fixed::new(rng.gen_range(-100_000..=100_000), -16),
            );
            world.add_force(id, force).unwrap();
        }
        world.step(DT).unwrap();
    }

    serde_json::to_string(&world.snapshot()).unwrap()
}

#[test]
fn identical_conditions_produce_identical_snapshots() {
    let run1 = run_scenario(120);
    let run2 = run_scenario(120);

    assert_eq!(
        run1, run2,
        "Two identical simulation runs must produce byte-identical snapshots"
    );
}

#[test]
fn determinism_over_longer_run() {
    let run1 = run_scenario(300);
    let run2 = run_scenario(300);

    assert_eq!(
        run1, run2,
        "Determinism must hold over 300 ticks (10 seconds)"
    );
}

#[test]
fn different_tick_counts_diverge() {
    let run_120 = run_scenario(120);
    let run_121 = run_scenario(121);

    assert_ne!(
        run_120, run_121,
        "An extra tick must change the final snapshot"
    );
}

#[test]
fn separate_worlds_stay_in_lockstep() {
    let mut world_a = World::new();
    let mut world_b = World::new();
    let ids_a = setup_scenario(&mut world_a);
    let ids_b = setup_scenario(&mut world_b);

    let force = Vec2f::new(Fixed::new(4_096, -16), Fixed::new(-8_192, -16));
    for tick in 0..200 {
        for (&a, &b) in ids_a.iter().zip(&ids_b) {
            world_a.add_force(a, force).unwrap();
            world_b.add_force(b, force).unwrap();
        }
        world_a.step(DT).unwrap();
        world_b.step(DT).unwrap();

        // bit-identical at every tick, not just at the end
        assert_eq!(
            serde_json::to_string(&world_a.snapshot()).unwrap(),
            serde_json::to_string(&world_b.snapshot()).unwrap(),
            "worlds diverged at tick {tick}"
        );
    }
}
