use std::hash::{Hash, Hasher};

use redlilium_inspect::strategy::handle::{self, Handle};
use redlilium_inspect::{Inspect, InspectContext, Shape, ShapeFacts};

/// Entity identifier: a slot index plus the spawn tick of its occupant.
///
/// - **index**: slot in the entity allocator, reused after despawn
/// - **spawn_tick**: world tick when the slot was last filled; a recycled
///   slot gets a new tick, so stale handles stop matching
///
/// In inspectors an entity is an opaque handle and shows only its index.
#[derive(Clone, Copy)]
pub struct Entity {
    index: u32,
    spawn_tick: u64,
}

impl Entity {
    pub(crate) fn new(index: u32, spawn_tick: u64) -> Self {
        Self { index, spawn_tick }
    }

    /// Returns the slot index of this entity.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the spawn tick of this entity.
    pub fn spawn_tick(&self) -> u64 {
        self.spawn_tick
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.spawn_tick == other.spawn_tick
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.spawn_tick.hash(state);
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({}@{})", self.index, self.spawn_tick)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({}@{})", self.index, self.spawn_tick)
    }
}

// ---------------------------------------------------------------------------
// Inspection
// ---------------------------------------------------------------------------

impl Handle for Entity {
    type Raw = u32;

    fn raw(&self) -> u32 {
        self.index
    }
}

impl Inspect for Entity {
    const SHAPE: Shape = Shape::of(ShapeFacts {
        opaque: true,
        ..ShapeFacts::NONE
    });

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        handle::show_handle(self, name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        handle::edit_handle(self, name, cx);
    }
}

// ---------------------------------------------------------------------------
// Allocation
// ---------------------------------------------------------------------------

/// Allocates and recycles entity slots with spawn-tick tracking.
///
/// Despawned slots go onto a LIFO free list. The next spawn reuses the slot
/// with the current tick, invalidating any old handle to it.
pub(crate) struct EntityAllocator {
    /// Spawn tick for each slot. Index = entity index.
    spawn_ticks: Vec<u64>,
    alive: Vec<bool>,
    free_list: Vec<u32>,
    count: u32,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self {
            spawn_ticks: Vec::new(),
            alive: Vec::new(),
            free_list: Vec::new(),
            count: 0,
        }
    }

    /// Allocates a new entity, reusing a recycled slot if available.
    pub fn allocate(&mut self, tick: u64) -> Entity {
        self.count += 1;

        if let Some(index) = self.free_list.pop() {
            let idx = index as usize;
            self.alive[idx] = true;
            self.spawn_ticks[idx] = tick;
            Entity::new(index, tick)
        } else {
            let index = self.spawn_ticks.len() as u32;
            self.spawn_ticks.push(tick);
            self.alive.push(true);
            Entity::new(index, tick)
        }
    }

    /// Deallocates an entity. Returns false if already dead or stale.
    pub fn deallocate(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        let idx = entity.index() as usize;
        self.alive[idx] = false;
        self.free_list.push(entity.index());
        self.count -= 1;
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        let idx = entity.index() as usize;
        idx < self.alive.len() && self.alive[idx] && self.spawn_ticks[idx] == entity.spawn_tick()
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Iterates over alive entities in index order.
    pub fn iter_alive(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(idx, _)| Entity::new(idx as u32, self.spawn_ticks[idx]))
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
