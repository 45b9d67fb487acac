//! Frame-loop integration tests: steering, speed band, hover freeze, skipped
//! frames and the unmeasured arena.

use std::sync::Arc;

use glam::Vec2;

use moodtank::aquarium::Aquarium;
use moodtank::components::diaryentry::{DiaryEntry, Mood};
use moodtank::components::mapposition::MapPosition;
use moodtank::components::rigidbody::RigidBody;
use moodtank::components::visualbinding::{TransformSlot, VisualBinding};
use moodtank::entries::demo_entries;
use moodtank::resources::aquariumconfig::AquariumConfig;
use moodtank::resources::random::{ScriptedRandom, SimRng};

const EPSILON: f32 = 1e-4;
const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn entry(id: &str) -> DiaryEntry {
    DiaryEntry::new(id, "2025-04-09", Mood::Blue)
}

/// Every draw is 0.5: no wander, fish spawn in the middle of the arena with
/// traits in the middle of every range.
fn still_water(width: f32, height: f32, ids: &[&str]) -> Aquarium {
    let mut aquarium = Aquarium::new(
        AquariumConfig::new(),
        SimRng::new(ScriptedRandom::constant(0.5)),
    );
    let entries: Vec<DiaryEntry> = ids.iter().map(|id| entry(id)).collect();
    aquarium.mount(width, height, &entries).unwrap();
    aquarium
}

fn attach(aquarium: &mut Aquarium, id: &str) -> Arc<TransformSlot> {
    let slot = TransformSlot::shared();
    aquarium.attach_visual(id, slot.clone()).unwrap();
    slot
}

fn place(aquarium: &mut Aquarium, id: &str, position: Vec2, velocity: Vec2) {
    let entity = aquarium.agent(id).unwrap().entity;
    let world = aquarium.world_mut();
    world.get_mut::<MapPosition>(entity).unwrap().pos = position;
    world.get_mut::<RigidBody>(entity).unwrap().velocity = velocity;
}

#[test]
fn speed_stays_inside_band_after_every_frame() {
    let mut aquarium = Aquarium::new(AquariumConfig::new(), SimRng::seeded(42));
    aquarium.mount(800.0, 600.0, &demo_entries()).unwrap();
    for id in aquarium.agent_ids() {
        attach(&mut aquarium, &id);
    }

    for _ in 0..500 {
        aquarium.tick(DT);
        for fish in aquarium.snapshots() {
            let speed = fish.velocity.length();
            let max = fish.traits.max_speed;
            assert!(
                speed >= 0.5 * max - EPSILON && speed <= max + EPSILON,
                "fish '{}' at speed {} outside [{}, {}]",
                fish.entry.id,
                speed,
                0.5 * max,
                max
            );
        }
    }
}

#[test]
fn fish_moves_by_its_new_velocity() {
    let mut aquarium = still_water(800.0, 600.0, &["a"]);
    attach(&mut aquarium, "a");
    place(&mut aquarium, "a", Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0));

    aquarium.tick(DT);

    let fish = aquarium.agent("a").unwrap();
    assert!(approx_eq(fish.velocity.x, 1.0));
    assert!(approx_eq(fish.position.x, 401.0));
    assert!(approx_eq(fish.position.y, 300.0));
    assert!(approx_eq(fish.rotation, 0.0));
}

#[test]
fn right_wall_turns_fish_back_every_frame() {
    let mut aquarium = still_water(800.0, 600.0, &["a"]);
    attach(&mut aquarium, "a");
    place(&mut aquarium, "a", Vec2::new(750.0, 300.0), Vec2::new(1.0, 0.0));
    let turn_speed = aquarium.agent("a").unwrap().traits.turn_speed;

    let mut previous = 1.0;
    for _ in 0..10 {
        aquarium.tick(DT);
        let fish = aquarium.agent("a").unwrap();
        assert!(fish.position.x > 700.0);
        assert!(approx_eq(fish.velocity.x, previous - turn_speed));
        assert!(fish.velocity.x < previous);
        previous = fish.velocity.x;
    }
}

#[test]
fn corner_pushes_on_both_axes() {
    let mut aquarium = still_water(800.0, 600.0, &["a"]);
    attach(&mut aquarium, "a");
    place(&mut aquarium, "a", Vec2::new(20.0, 20.0), Vec2::new(-0.7, -0.7));

    aquarium.tick(DT);

    let fish = aquarium.agent("a").unwrap();
    assert!(approx_eq(fish.velocity.x, -0.67));
    assert!(approx_eq(fish.velocity.y, -0.67));
}

#[test]
fn hovered_fish_holds_still_at_hover_scale() {
    let mut aquarium = still_water(800.0, 600.0, &["a"]);
    let slot = attach(&mut aquarium, "a");
    place(&mut aquarium, "a", Vec2::new(300.0, 200.0), Vec2::new(0.8, 0.3));
    aquarium.tick(DT);
    assert_eq!(slot.latest().unwrap().scale, 1.0);

    aquarium.pointer_enter("a").unwrap();
    let frozen = aquarium.agent("a").unwrap();
    let writes = slot.writes();
    for _ in 0..30 {
        aquarium.tick(DT);
    }

    let fish = aquarium.agent("a").unwrap();
    assert!(fish.hovered);
    assert_eq!(fish.position, frozen.position);
    assert_eq!(fish.velocity, frozen.velocity);
    assert!(approx_eq(fish.scale, 1.3));
    let transform = slot.latest().unwrap();
    assert!(approx_eq(transform.scale, 1.3));
    assert!(approx_eq(transform.x, frozen.position.x));
    // Hovered fish still get a transform every frame.
    assert_eq!(slot.writes(), writes + 30);

    aquarium.pointer_leave("a").unwrap();
    aquarium.tick(DT);
    let fish = aquarium.agent("a").unwrap();
    assert!(!fish.hovered);
    assert_ne!(fish.position, frozen.position);
    assert_eq!(slot.latest().unwrap().scale, 1.0);
}

#[test]
fn fish_without_visual_skips_frames() {
    let mut aquarium = still_water(800.0, 600.0, &["a"]);
    place(&mut aquarium, "a", Vec2::new(400.0, 300.0), Vec2::new(1.0, 0.0));

    for _ in 0..5 {
        aquarium.tick(DT);
    }
    let fish = aquarium.agent("a").unwrap();
    assert_eq!(fish.position, Vec2::new(400.0, 300.0));
    let binding = aquarium.world().get::<VisualBinding>(fish.entity).unwrap();
    assert_eq!(binding.skipped_frames, 5);

    let slot = attach(&mut aquarium, "a");
    aquarium.tick(DT);
    let fish = aquarium.agent("a").unwrap();
    assert!(approx_eq(fish.position.x, 401.0));
    assert_eq!(slot.writes(), 1);
    let binding = aquarium.world().get::<VisualBinding>(fish.entity).unwrap();
    assert_eq!(binding.skipped_frames, 0);
}

#[test]
fn detached_visual_pauses_the_fish() {
    let mut aquarium = still_water(800.0, 600.0, &["a"]);
    let slot = attach(&mut aquarium, "a");
    aquarium.tick(DT);
    aquarium.detach_visual("a").unwrap();
    let before = aquarium.agent("a").unwrap().position;

    aquarium.tick(DT);

    assert_eq!(aquarium.agent("a").unwrap().position, before);
    assert_eq!(slot.writes(), 1);
}

#[test]
fn unmeasured_arena_keeps_fish_in_place() {
    let mut aquarium = Aquarium::new(AquariumConfig::new(), SimRng::seeded(3));
    aquarium.set_visible_entries(&[entry("a")]).unwrap();
    let slot = attach(&mut aquarium, "a");
    let spawned = aquarium.agent("a").unwrap();
    assert_eq!(spawned.position, Vec2::ZERO);

    for _ in 0..10 {
        aquarium.tick(DT);
    }
    let fish = aquarium.agent("a").unwrap();
    assert_eq!(fish.position, Vec2::ZERO);
    assert_eq!(fish.velocity, spawned.velocity);
    assert_eq!(slot.writes(), 10);

    aquarium.resize(640.0, 480.0);
    aquarium.tick(DT);
    assert_ne!(aquarium.agent("a").unwrap().position, Vec2::ZERO);
}

#[test]
fn bogus_resize_is_treated_as_unmeasured() {
    let mut aquarium = still_water(800.0, 600.0, &["a"]);
    attach(&mut aquarium, "a");
    aquarium.resize(f32::NAN, -20.0);
    assert!(!aquarium.arena().is_measured());

    let before = aquarium.agent("a").unwrap().position;
    aquarium.tick(DT);
    assert_eq!(aquarium.agent("a").unwrap().position, before);
}

#[test]
fn transform_carries_tail_beat() {
    // Mid-range draws give every fish a 0.4 s tail period.
    let mut aquarium = still_water(800.0, 600.0, &["a"]);
    let slot = attach(&mut aquarium, "a");
    assert!(approx_eq(aquarium.agent("a").unwrap().traits.tail_period, 0.4));

    // A quarter beat in: full swing to one side.
    for _ in 0..6 {
        aquarium.tick(DT);
    }
    assert!((slot.latest().unwrap().tail_angle - 12.0).abs() < 1e-2);

    // Three quarters in: full swing to the other side.
    for _ in 0..12 {
        aquarium.tick(DT);
    }
    assert!((slot.latest().unwrap().tail_angle + 12.0).abs() < 1e-2);
}

#[test]
fn same_seed_same_swim() {
    let run = || {
        let mut aquarium = Aquarium::new(AquariumConfig::new(), SimRng::seeded(99));
        aquarium.mount(1024.0, 768.0, &demo_entries()).unwrap();
        for id in aquarium.agent_ids() {
            attach(&mut aquarium, &id);
        }
        for _ in 0..120 {
            aquarium.tick(DT);
        }
        aquarium
            .snapshots()
            .into_iter()
            .map(|s| (s.entry.id, s.position, s.velocity))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
