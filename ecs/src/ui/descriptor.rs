//! Per-component-type operations used by the registry editor.

use std::marker::PhantomData;

use redlilium_inspect::strategy::NOT_CONSTRUCTIBLE;
use redlilium_inspect::{ButtonKind, Inspect, Inspector, Tone, Widgets};

use crate::component::Component;
use crate::{Entity, World};

/// What the add-component menu offered for one descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    /// The entity already carries the component; nothing was drawn.
    Present,
    /// An entry was drawn but not chosen.
    Offered,
    /// The entry was chosen this frame.
    Chosen,
}

/// Type-erased handle on one registered component type.
///
/// The editor keeps a list of these and never names component types itself.
pub trait ComponentDescriptor {
    /// Display name, unique within an editor.
    fn name(&self) -> &str;

    fn has(&self, world: &World, entity: Entity) -> bool;

    /// Returns false if the entity did not carry the component.
    fn remove(&self, world: &mut World, entity: Entity) -> bool;

    /// Whether a fresh value can be built for the add-component menu.
    fn can_add(&self, inspector: &Inspector) -> bool;

    /// Inserts a freshly constructed value. Returns false if the type has no
    /// default value or the entity already carries it.
    fn add(&self, world: &mut World, entity: Entity, inspector: &Inspector) -> bool;

    /// Draws this component's row in the add-component menu.
    fn menu_entry(
        &self,
        ui: &mut dyn Widgets,
        world: &World,
        entity: Entity,
        inspector: &Inspector,
    ) -> MenuEntry;

    /// Draws the `-` button and the component value. Returns true when the
    /// `-` button was clicked; the caller performs the removal.
    fn draw(
        &self,
        ui: &mut dyn Widgets,
        world: &mut World,
        entity: Entity,
        inspector: &Inspector,
    ) -> bool;
}

/// The [`ComponentDescriptor`] for a concrete component type `T`.
pub struct TypedDescriptor<T> {
    name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedDescriptor<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _marker: PhantomData,
        }
    }
}

impl<T: Component + Inspect> ComponentDescriptor for TypedDescriptor<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn has(&self, world: &World, entity: Entity) -> bool {
        world.contains::<T>(entity)
    }

    fn remove(&self, world: &mut World, entity: Entity) -> bool {
        world.remove::<T>(entity).is_some()
    }

    fn can_add(&self, inspector: &Inspector) -> bool {
        inspector.can_construct::<T>()
    }

    fn add(&self, world: &mut World, entity: Entity, inspector: &Inspector) -> bool {
        if world.contains::<T>(entity) {
            return false;
        }
        let Some(value) = inspector.construct::<T>() else {
            return false;
        };

        world.register_component::<T>();
        match world.insert(entity, value) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to add {} to {entity}: {err}", self.name);
                false
            }
        }
    }

    fn menu_entry(
        &self,
        ui: &mut dyn Widgets,
        world: &World,
        entity: Entity,
        inspector: &Inspector,
    ) -> MenuEntry {
        if world.contains::<T>(entity) {
            return MenuEntry::Present;
        }

        if !self.can_add(inspector) {
            ui.disabled_label(&self.name, NOT_CONSTRUCTIBLE);
            return MenuEntry::Offered;
        }

        let chosen = ui.selectable(&self.name, false);
        let type_name = inspector.type_names().of::<T>();
        ui.hover_text(&type_name, Tone::Info);
        if chosen {
            MenuEntry::Chosen
        } else {
            MenuEntry::Offered
        }
    }

    fn draw(
        &self,
        ui: &mut dyn Widgets,
        world: &mut World,
        entity: Entity,
        inspector: &Inspector,
    ) -> bool {
        let Some(component) = world.get_mut::<T>(entity) else {
            return false;
        };

        let mut remove = false;
        ui.id_scope(&self.name, &mut |ui: &mut dyn Widgets| {
            remove = ui.button("-", ButtonKind::Remove);
        });
        ui.hover_text(&format!("Remove {}", self.name), Tone::Normal);
        if !remove {
            inspector.show_mut(ui, component, &self.name);
        }
        remove
    }
}
