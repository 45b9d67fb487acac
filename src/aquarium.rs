//! The aquarium view: one ECS world holding every fish of the visible set.
//!
//! [`Aquarium`] is what a host embeds. It owns the `World` and the frame
//! `Schedule`, and it is the only place fish are born and cancelled:
//!
//! - [`mount`](Aquarium::mount) measures the container and spawns one fish per
//!   visible entry.
//! - [`set_visible_entries`](Aquarium::set_visible_entries) reconciles the
//!   swimming set with a new visible set; survivors keep their state.
//! - [`tick`](Aquarium::tick) runs exactly one frame for every fish.
//! - [`remove_agent`](Aquarium::remove_agent) and
//!   [`unmount`](Aquarium::unmount) cancel fish. Cancelling goes through the
//!   [`AgentRegistry`], so it happens once per fish and the despawned entity
//!   is never driven again.
//!
//! Pointer input arrives either per fish ([`pointer_enter`](Aquarium::pointer_enter),
//! [`pointer_leave`](Aquarium::pointer_leave)) or as a raw cursor position
//! ([`pointer_moved`](Aquarium::pointer_moved)) that is hit tested each frame.
//! Focus changes come back out through [`focus_receiver`](Aquarium::focus_receiver).

use std::sync::Arc;

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use glam::Vec2;
use log::{debug, info, warn};
use rustc_hash::FxHashSet;

use crate::components::diaryentry::DiaryEntry;
use crate::components::fishtraits::FishTraits;
use crate::components::hoverstate::HoverState;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::visualbinding::{VisualBinding, VisualHandle};
use crate::components::zindex::ZIndex;
use crate::error::AquariumError;
use crate::events::arena::{ArenaResizedEvent, arena_resized_observer};
use crate::events::focus::{FishUnfocusedEvent, FocusChange};
use crate::events::pointer::{PointerEnterEvent, PointerLeaveEvent};
use crate::resources::aquariumconfig::AquariumConfig;
use crate::resources::arena::ArenaBounds;
use crate::resources::focusbridge::FocusBridge;
use crate::resources::frameclock::FrameClock;
use crate::resources::pointer::PointerState;
use crate::resources::random::SimRng;
use crate::resources::registry::AgentRegistry;
use crate::systems::hover::pointer_hover_system;
use crate::systems::interaction::{
    forward_focus_observer, forward_unfocus_observer, pointer_enter_observer,
    pointer_leave_observer,
};
use crate::systems::swim::swim_system;
use crate::systems::time::update_frame_clock;

/// Read-only copy of one fish's state.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentSnapshot {
    pub entity: Entity,
    pub entry: DiaryEntry,
    pub position: Vec2,
    pub velocity: Vec2,
    pub traits: FishTraits,
    pub hovered: bool,
    pub rotation: f32,
    pub scale: f32,
    pub z: ZIndex,
}

/// Outcome of reconciling the swimming set with a new visible set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub added: usize,
    pub removed: usize,
    pub kept: usize,
}

pub struct Aquarium {
    world: World,
    frame: Schedule,
}

impl Aquarium {
    /// Build an empty, unmeasured aquarium.
    pub fn new(config: AquariumConfig, rng: SimRng) -> Self {
        let mut world = World::new();
        world.insert_resource(FrameClock::default());
        world.insert_resource(ArenaBounds::default());
        world.insert_resource(AgentRegistry::new());
        world.insert_resource(PointerState::default());
        world.insert_resource(FocusBridge::new());
        world.insert_resource(config);
        world.insert_resource(rng);

        world.add_observer(arena_resized_observer);
        world.add_observer(pointer_enter_observer);
        world.add_observer(pointer_leave_observer);
        world.add_observer(forward_focus_observer);
        world.add_observer(forward_unfocus_observer);
        // Ensure the observers are registered before anything triggers events.
        world.flush();

        let mut frame = Schedule::default();
        frame.add_systems(pointer_hover_system.before(swim_system));
        frame.add_systems(swim_system);

        Self { world, frame }
    }

    /// Default configuration with an unseeded generator.
    pub fn with_defaults() -> Self {
        Self::new(AquariumConfig::new(), SimRng::from_entropy())
    }

    /// Measure the container, then spawn one fish per entry.
    pub fn mount(
        &mut self,
        width: f32,
        height: f32,
        entries: &[DiaryEntry],
    ) -> Result<SyncReport, AquariumError> {
        self.resize(width, height);
        let report = self.set_visible_entries(entries)?;
        info!(
            "Aquarium mounted at {}x{} with {} fish",
            width,
            height,
            self.agent_count()
        );
        Ok(report)
    }

    /// Cancel every fish. The arena size and configuration are kept.
    pub fn unmount(&mut self) {
        let drained = self.world.resource_mut::<AgentRegistry>().drain();
        let count = drained.len();
        for (id, entity) in drained {
            self.cancel(&id, entity);
        }
        info!("Aquarium unmounted, {} fish cancelled", count);
    }

    /// Reconcile the swimming set with `entries`.
    ///
    /// Ids that left are cancelled, new ids are spawned in list order, and
    /// fish whose id is still visible are left exactly as they are. The whole
    /// list is validated first; on error nothing changes.
    pub fn set_visible_entries(
        &mut self,
        entries: &[DiaryEntry],
    ) -> Result<SyncReport, AquariumError> {
        let mut incoming: FxHashSet<&str> = FxHashSet::default();
        for entry in entries {
            if entry.id.is_empty() {
                return Err(AquariumError::EmptyId);
            }
            if !incoming.insert(entry.id.as_str()) {
                warn!("entry '{}' appears twice in the visible set", entry.id);
                return Err(AquariumError::DuplicateAgent(entry.id.clone()));
            }
        }

        let leaving: Vec<String> = self
            .world
            .resource::<AgentRegistry>()
            .ids()
            .filter(|id| !incoming.contains(id))
            .map(str::to_string)
            .collect();
        let mut report = SyncReport::default();
        for id in &leaving {
            if self.remove_agent(id) {
                report.removed += 1;
            }
        }

        for entry in entries {
            if self.world.resource::<AgentRegistry>().contains(&entry.id) {
                report.kept += 1;
            } else {
                self.spawn_agent(entry.clone())?;
                report.added += 1;
            }
        }
        debug!(
            "visible set synced: +{} -{} ={}",
            report.added, report.removed, report.kept
        );
        Ok(report)
    }

    /// Spawn the fish for one entry.
    ///
    /// Position is uniform inside the current arena (the origin if it is not
    /// measured yet), velocity components are uniform in `[-1, 1)`, and the
    /// traits are drawn from the configured ranges.
    pub fn spawn_agent(&mut self, entry: DiaryEntry) -> Result<Entity, AquariumError> {
        if entry.id.is_empty() {
            return Err(AquariumError::EmptyId);
        }
        if self.world.resource::<AgentRegistry>().contains(&entry.id) {
            warn!("refusing a second fish for entry '{}'", entry.id);
            return Err(AquariumError::DuplicateAgent(entry.id));
        }

        let arena = *self.world.resource::<ArenaBounds>();
        let config = self.world.resource::<AquariumConfig>().clone();
        let (position, velocity, traits) = {
            let mut rng = self.world.resource_mut::<SimRng>();
            let source = rng.source();
            let position = Vec2::new(source.unit() * arena.width, source.unit() * arena.height);
            let velocity = Vec2::new(source.range(-1.0, 1.0), source.range(-1.0, 1.0));
            let traits = FishTraits::roll(source, &config);
            (position, velocity, traits)
        };
        let body = RigidBody::with_velocity(velocity);
        let z = self.world.resource_mut::<AgentRegistry>().next_z();
        let id = entry.id.clone();

        let entity = self
            .world
            .spawn((
                MapPosition::from_vec(position),
                body,
                traits,
                HoverState::default(),
                Rotation {
                    degrees: body.heading_degrees(),
                },
                Scale::default(),
                z,
                VisualBinding::default(),
                entry,
            ))
            .id();
        self.world
            .resource_mut::<AgentRegistry>()
            .insert(&id, entity);
        debug!(
            "fish '{}' spawned at ({:.1}, {:.1}), max_speed={:.2}",
            id, position.x, position.y, traits.max_speed
        );
        Ok(entity)
    }

    /// Cancel the fish for `id`. Returns false when no such fish is swimming,
    /// including when it was already cancelled.
    pub fn remove_agent(&mut self, id: &str) -> bool {
        let Some(entity) = self.world.resource_mut::<AgentRegistry>().remove(id) else {
            debug!("no fish '{}' to cancel", id);
            return false;
        };
        self.cancel(id, entity);
        true
    }

    fn cancel(&mut self, id: &str, entity: Entity) {
        {
            let mut pointer = self.world.resource_mut::<PointerState>();
            if pointer.hovered == Some(entity) {
                pointer.hovered = None;
            }
        }
        let was_focused = self
            .world
            .resource::<FocusBridge>()
            .focused
            .as_ref()
            .is_some_and(|(focused, _)| *focused == entity);
        self.world.despawn(entity);
        if was_focused {
            // The panel would otherwise keep showing an entry that is gone.
            self.world.trigger(FishUnfocusedEvent { entity });
            self.world.flush();
        }
        debug!("fish '{}' cancelled", id);
    }

    /// Publish a new container size to every fish.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.trigger(ArenaResizedEvent { width, height });
        self.world.flush();
    }

    /// Attach (or replace) the visual that receives a fish's transforms.
    pub fn attach_visual(
        &mut self,
        id: &str,
        handle: Arc<dyn VisualHandle>,
    ) -> Result<(), AquariumError> {
        let entity = self.entity(id)?;
        if let Some(mut binding) = self.world.get_mut::<VisualBinding>(entity) {
            binding.handle = Some(handle);
        }
        Ok(())
    }

    /// Detach a fish's visual; it holds still until one is attached again.
    pub fn detach_visual(&mut self, id: &str) -> Result<(), AquariumError> {
        let entity = self.entity(id)?;
        if let Some(mut binding) = self.world.get_mut::<VisualBinding>(entity) {
            binding.handle = None;
        }
        Ok(())
    }

    /// The pointer entered the fish for `id`.
    pub fn pointer_enter(&mut self, id: &str) -> Result<(), AquariumError> {
        let entity = self.entity(id)?;
        self.world.trigger(PointerEnterEvent { entity });
        self.world.flush();
        Ok(())
    }

    /// The pointer left the fish for `id`.
    pub fn pointer_leave(&mut self, id: &str) -> Result<(), AquariumError> {
        let entity = self.entity(id)?;
        self.world.trigger(PointerLeaveEvent { entity });
        self.world.flush();
        Ok(())
    }

    /// Report the cursor position in arena pixels, or `None` when it left the
    /// arena. Hit testing happens at the start of the next frame.
    pub fn pointer_moved(&mut self, position: Option<Vec2>) {
        self.world.resource_mut::<PointerState>().position = position;
    }

    /// Run one frame. `dt` is the wall-clock time since the previous frame
    /// and only drives time-based presentation.
    pub fn tick(&mut self, dt: f32) {
        update_frame_clock(&mut self.world, dt);
        self.frame.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// A new receiver for focus notifications. Receivers share one queue:
    /// each notification is delivered to exactly one of them. An undrained
    /// queue keeps only the most recent
    /// [`FOCUS_QUEUE_CAPACITY`](crate::resources::focusbridge::FOCUS_QUEUE_CAPACITY)
    /// notifications.
    pub fn focus_receiver(&self) -> Receiver<FocusChange> {
        self.world.resource::<FocusBridge>().rx.clone()
    }

    /// The entry currently shown by the detail panel, if any.
    pub fn focused(&self) -> Option<DiaryEntry> {
        self.world
            .resource::<FocusBridge>()
            .focused
            .as_ref()
            .map(|(_, entry)| entry.clone())
    }

    pub fn agent_count(&self) -> usize {
        self.world.resource::<AgentRegistry>().len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.world.resource::<AgentRegistry>().contains(id)
    }

    /// Ids of all swimming fish, bottom to top.
    pub fn agent_ids(&mut self) -> Vec<String> {
        self.snapshots().into_iter().map(|s| s.entry.id).collect()
    }

    /// State of the fish for `id`.
    pub fn agent(&self, id: &str) -> Option<AgentSnapshot> {
        let entity = self.world.resource::<AgentRegistry>().get(id)?;
        let e = self.world.get_entity(entity).ok()?;
        Some(AgentSnapshot {
            entity,
            entry: e.get::<DiaryEntry>()?.clone(),
            position: e.get::<MapPosition>()?.pos,
            velocity: e.get::<RigidBody>()?.velocity,
            traits: *e.get::<FishTraits>()?,
            hovered: e.get::<HoverState>()?.is_hovered(),
            rotation: e.get::<Rotation>()?.degrees,
            scale: e.get::<Scale>()?.scale,
            z: *e.get::<ZIndex>()?,
        })
    }

    /// State of every fish, bottom to top.
    pub fn snapshots(&mut self) -> Vec<AgentSnapshot> {
        let mut query = self.world.query::<(
            Entity,
            &DiaryEntry,
            &MapPosition,
            &RigidBody,
            &FishTraits,
            &HoverState,
            &Rotation,
            &Scale,
            &ZIndex,
        )>();
        let mut snapshots: Vec<AgentSnapshot> = query
            .iter(&self.world)
            .map(
                |(entity, entry, pos, body, traits, hover, rot, scale, z)| AgentSnapshot {
                    entity,
                    entry: entry.clone(),
                    position: pos.pos,
                    velocity: body.velocity,
                    traits: *traits,
                    hovered: hover.is_hovered(),
                    rotation: rot.degrees,
                    scale: scale.scale,
                    z: *z,
                },
            )
            .collect();
        snapshots.sort_by_key(|s| s.z);
        snapshots
    }

    pub fn arena(&self) -> ArenaBounds {
        *self.world.resource::<ArenaBounds>()
    }

    pub fn clock(&self) -> FrameClock {
        *self.world.resource::<FrameClock>()
    }

    pub fn config(&self) -> &AquariumConfig {
        self.world.resource::<AquariumConfig>()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn entity(&self, id: &str) -> Result<Entity, AquariumError> {
        self.world
            .resource::<AgentRegistry>()
            .get(id)
            .ok_or_else(|| AquariumError::UnknownAgent(id.to_string()))
    }
}

impl Drop for Aquarium {
    fn drop(&mut self) {
        if self.agent_count() > 0 {
            self.unmount();
        }
    }
}
