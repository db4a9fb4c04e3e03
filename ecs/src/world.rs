use std::any::TypeId;
use std::collections::HashMap;

use crate::component::Component;
use crate::entity::{Entity, EntityAllocator};
use crate::sparse_set::ComponentStorage;

/// Errors returned by [`World`] component operations.
#[derive(Debug, thiserror::Error)]
pub enum EcsError {
    /// The component type was never passed to [`World::register_component`].
    #[error("Component type `{type_name}` has never been registered. Call register_component() first.")]
    ComponentNotRegistered { type_name: &'static str },
}

/// An independent entity-component store.
///
/// Each World is fully self-contained. Multiple worlds can coexist
/// in the same process, sharing no data between them.
///
/// # Example
///
/// ```
/// use redlilium_ecs::World;
///
/// #[derive(Clone)]
/// struct Position { x: f32, y: f32 }
///
/// let mut world = World::new();
/// world.register_component::<Position>();
///
/// let entity = world.spawn();
/// world.insert(entity, Position { x: 0.0, y: 0.0 }).unwrap();
/// world.get_mut::<Position>(entity).unwrap().x = 4.0;
///
/// let copy = world.spawn();
/// world.clone_components(entity, copy);
/// assert_eq!(world.get::<Position>(copy).map(|p| p.x), Some(4.0));
/// ```
pub struct World {
    entities: EntityAllocator,
    components: HashMap<TypeId, ComponentStorage>,
    /// Advanced on every spawn so recycled slots get a fresh spawn tick.
    tick: u64,
}

impl World {
    pub fn new() -> Self {
        Self {
            entities: EntityAllocator::new(),
            components: HashMap::new(),
            tick: 0,
        }
    }

    // ---- Entity management ----

    /// Spawns a new empty entity and returns its ID.
    pub fn spawn(&mut self) -> Entity {
        self.tick += 1;
        self.entities.allocate(self.tick)
    }

    /// Despawns an entity, removing all its components.
    ///
    /// Returns `false` if the entity was already dead.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if !self.entities.deallocate(entity) {
            return false;
        }

        let index = entity.index();
        for storage in self.components.values_mut() {
            storage.remove_untyped(index);
        }
        true
    }

    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// Returns the number of alive entities.
    pub fn entity_count(&self) -> u32 {
        self.entities.count()
    }

    /// Iterates over all alive entities in index order.
    pub fn iter_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter_alive()
    }

    // ---- Component management ----

    /// Registers a component type. Registering twice is a no-op.
    pub fn register_component<T: Component>(&mut self) {
        self.components.entry(TypeId::of::<T>()).or_insert_with(|| {
            log::debug!("Registered component storage {}", std::any::type_name::<T>());
            ComponentStorage::new::<T>()
        });
    }

    pub fn is_component_registered<T: 'static>(&self) -> bool {
        self.components.contains_key(&TypeId::of::<T>())
    }

    /// Adds or replaces a component on an entity.
    ///
    /// # Errors
    ///
    /// Returns [`EcsError::ComponentNotRegistered`] if `T` has never been
    /// registered via [`register_component`](World::register_component).
    ///
    /// # Panics
    ///
    /// Panics if the entity is not alive.
    pub fn insert<T: Component>(&mut self, entity: Entity, component: T) -> Result<(), EcsError> {
        assert!(
            self.entities.is_alive(entity),
            "Cannot insert component on dead entity {entity}"
        );

        let not_registered = || EcsError::ComponentNotRegistered {
            type_name: std::any::type_name::<T>(),
        };
        self.components
            .get_mut(&TypeId::of::<T>())
            .and_then(ComponentStorage::typed_mut::<T>)
            .ok_or_else(not_registered)?
            .insert(entity.index(), component);
        Ok(())
    }

    /// Removes a component from an entity.
    ///
    /// Returns the removed value, or `None` if the entity did not have it.
    pub fn remove<T: 'static>(&mut self, entity: Entity) -> Option<T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.components
            .get_mut(&TypeId::of::<T>())?
            .typed_mut::<T>()?
            .remove(entity.index())
    }

    pub fn get<T: 'static>(&self, entity: Entity) -> Option<&T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.components
            .get(&TypeId::of::<T>())?
            .typed::<T>()?
            .get(entity.index())
    }

    pub fn get_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        if !self.is_alive(entity) {
            return None;
        }
        self.components
            .get_mut(&TypeId::of::<T>())?
            .typed_mut::<T>()?
            .get_mut(entity.index())
    }

    pub fn contains<T: 'static>(&self, entity: Entity) -> bool {
        self.is_alive(entity)
            && self
                .components
                .get(&TypeId::of::<T>())
                .is_some_and(|storage| storage.contains_untyped(entity.index()))
    }

    /// Iterates over every registered storage, in no particular order.
    pub fn storages(&self) -> impl Iterator<Item = &ComponentStorage> + '_ {
        self.components.values()
    }

    /// Deep-copies every component `source` carries onto `target`.
    ///
    /// Components `target` already has are replaced. Returns the number of
    /// components copied, or 0 if either entity is dead.
    pub fn clone_components(&mut self, source: Entity, target: Entity) -> usize {
        if !self.is_alive(source) || !self.is_alive(target) || source == target {
            return 0;
        }

        let (from, to) = (source.index(), target.index());
        self.components
            .values_mut()
            .map(|storage| storage.clone_untyped(from, to))
            .filter(|&copied| copied)
            .count()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for World {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World")
            .field("entities", &self.entity_count())
            .field("storages", &self.components.len())
            .finish()
    }
}
