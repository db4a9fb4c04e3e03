//! Two-panel entity browser: component filters on the left, entities on the right.

use std::cell::RefCell;

use redlilium_inspect::{ButtonKind, Inspect, Inspector, Tone, Widgets, short_name};

use super::config::{ConfigError, EditorConfig};
use super::descriptor::{ComponentDescriptor, MenuEntry, TypedDescriptor};
use crate::component::Component;
use crate::{Entity, World};

/// Callback producing the tree-node title of an entity.
pub type EntityTitle = Box<dyn Fn(&World, Entity) -> String>;

/// Structural change requested while drawing. Applied once the entity
/// loop is done so no storage is mutated mid-iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Create,
    Clone(Entity),
    Delete(Entity),
    Add { entity: Entity, descriptor: usize },
    Remove { entity: Entity, descriptor: usize },
}

/// Browses and edits the entities of a [`World`].
///
/// Component types are registered once up front; each frame [`render`]
/// re-derives the whole view from the world and the enabled filters, which
/// are the only state kept between frames.
///
/// ```ignore
/// let mut editor = RegistryEditor::new();
/// editor.register::<Position>().register::<Velocity>();
///
/// editor.show_window(ctx, &mut world);
/// ```
///
/// [`render`]: RegistryEditor::render
pub struct RegistryEditor {
    config: EditorConfig,
    inspector: Inspector,
    descriptors: Vec<Box<dyn ComponentDescriptor>>,
    /// Indices into `descriptors`, in the order they were enabled.
    enabled: Vec<usize>,
    entity_title: Option<EntityTitle>,
}

impl RegistryEditor {
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            inspector: Inspector::new(),
            descriptors: Vec::new(),
            enabled: Vec::new(),
            entity_title: None,
        }
    }

    /// Builds an editor from `config`, registering its type-name rules.
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        let inspector = Inspector::new();
        for rule in &config.type_rules {
            inspector.add_type_rule(&rule.pattern, &rule.replacement)?;
        }
        Ok(Self {
            config,
            inspector,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    /// Mutable access for registering overrides and default values.
    pub fn inspector_mut(&mut self) -> &mut Inspector {
        &mut self.inspector
    }

    /// Titles entity tree nodes with `title` instead of `Entity {index}`.
    pub fn set_entity_title(
        &mut self,
        title: impl Fn(&World, Entity) -> String + 'static,
    ) -> &mut Self {
        self.entity_title = Some(Box::new(title));
        self
    }

    // ---- Registration ----

    /// Registers `T` under its short normalized type name.
    ///
    /// # Panics
    ///
    /// Panics if the name is already registered.
    pub fn register<T: Component + Inspect>(&mut self) -> &mut Self {
        let name = short_name(&self.inspector.type_names().of::<T>());
        self.register_named::<T>(name)
    }

    /// Registers `T` under `name`.
    ///
    /// # Panics
    ///
    /// Panics if `name` is already registered.
    pub fn register_named<T: Component + Inspect>(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        assert!(
            self.descriptor_index(&name).is_none(),
            "Component name `{name}` is already registered"
        );
        log::debug!("Registered editor component {name}");
        self.descriptors.push(Box::new(TypedDescriptor::<T>::new(name)));
        self
    }

    pub fn descriptor_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.descriptors.iter().map(|descriptor| descriptor.name())
    }

    pub fn descriptor_index(&self, name: &str) -> Option<usize> {
        self.descriptors
            .iter()
            .position(|descriptor| descriptor.name() == name)
    }

    // ---- Filters ----

    /// Enables the filter at `index` if disabled and vice versa. Returns the
    /// new state. Out-of-range indices are ignored and report `false`.
    pub fn toggle_filter(&mut self, index: usize) -> bool {
        if index >= self.descriptors.len() {
            return false;
        }
        if let Some(pos) = self.enabled.iter().position(|&i| i == index) {
            self.enabled.remove(pos);
            false
        } else {
            self.enabled.push(index);
            true
        }
    }

    /// Enabled filter indices, in the order they were turned on.
    pub fn enabled_filters(&self) -> &[usize] {
        &self.enabled
    }

    /// Alive entities carrying every filtered component, in index order.
    pub fn visible_entities(&self, world: &World) -> Vec<Entity> {
        world
            .iter_entities()
            .filter(|&entity| self.passes_filters(world, entity))
            .collect()
    }

    fn passes_filters(&self, world: &World, entity: Entity) -> bool {
        self.enabled
            .iter()
            .all(|&index| self.descriptors[index].has(world, entity))
    }

    /// How many entities carry the component at `index`, and that count as
    /// a percentage of all entities (0 for an empty world).
    pub fn component_share(&self, world: &World, index: usize) -> (usize, f32) {
        let Some(descriptor) = self.descriptors.get(index) else {
            return (0, 0.0);
        };
        let total = world.entity_count();
        let matching = world
            .iter_entities()
            .filter(|&entity| descriptor.has(world, entity))
            .count();
        let percentage = if total > 0 {
            matching as f32 / total as f32 * 100.0
        } else {
            0.0
        };
        (matching, percentage)
    }

    // ---- Entity operations ----

    /// Spawns a new entity carrying deep copies of every component `entity`
    /// has, registered with this editor or not.
    pub fn clone_entity(world: &mut World, entity: Entity) -> Option<Entity> {
        if !world.is_alive(entity) {
            return None;
        }
        let copy = world.spawn();
        let copied = world.clone_components(entity, copy);
        log::debug!("Cloned {entity} into {copy} ({copied} components)");
        Some(copy)
    }

    pub fn entity_title(&self, world: &World, entity: Entity) -> String {
        match &self.entity_title {
            Some(title) => title(world, entity),
            None => format!("Entity {}", entity.index()),
        }
    }

    // ---- Rendering ----

    /// Draws the editor inside its own egui window.
    pub fn show_window(&mut self, ctx: &egui::Context, world: &mut World) {
        let name = self.config.window_name.clone();
        egui::Window::new(name).show(ctx, |ui| {
            self.render(&mut redlilium_inspect::EguiWidgets::new(ui), world);
        });
    }

    /// Draws both panels and applies the actions they produced.
    pub fn render(&mut self, ui: &mut dyn Widgets, world: &mut World) {
        let mut actions = Vec::new();
        let mut toggled = Vec::new();
        let width = self.config.filter_panel_width;

        // The panels are drawn one after the other, never both at once.
        let world_cell = RefCell::new(&mut *world);
        let this = &*self;
        ui.split(
            width,
            &mut |ui: &mut dyn Widgets| {
                this.filter_panel(ui, &world_cell.borrow(), &mut toggled);
            },
            &mut |ui: &mut dyn Widgets| {
                this.entity_panel(ui, &mut world_cell.borrow_mut(), &mut actions);
            },
        );

        for index in toggled {
            self.toggle_filter(index);
        }
        for action in actions {
            self.apply(world, action);
        }
    }

    fn filter_panel(&self, ui: &mut dyn Widgets, world: &World, toggled: &mut Vec<usize>) {
        ui.label("Component Filters", Tone::Normal);
        ui.separator();
        ui.label(&format!("Entities: {}", world.entity_count()), Tone::Normal);

        for (index, descriptor) in self.descriptors.iter().enumerate() {
            let mut enabled = self.enabled.contains(&index);
            if ui.checkbox(descriptor.name(), &mut enabled) {
                toggled.push(index);
            }
            if ui.is_hovered() {
                let (matching, percentage) = self.component_share(world, index);
                ui.hover_text(
                    &format!("{matching} ({percentage:.1}%) entities have this component"),
                    Tone::Normal,
                );
            }
        }
    }

    fn entity_panel(&self, ui: &mut dyn Widgets, world: &mut World, actions: &mut Vec<Action>) {
        if ui.button("Create", ButtonKind::Add) {
            actions.push(Action::Create);
        }

        let entity_type = self.inspector.type_names().of::<Entity>();
        for entity in self.visible_entities(world) {
            let title = self.entity_title(world, entity);
            ui.tree_node(&title, &entity_type, &mut |ui: &mut dyn Widgets| {
                self.entity_node(ui, world, entity, actions);
            });
        }
    }

    fn entity_node(
        &self,
        ui: &mut dyn Widgets,
        world: &mut World,
        entity: Entity,
        actions: &mut Vec<Action>,
    ) {
        let shared: &World = world;
        ui.horizontal(&mut |ui: &mut dyn Widgets| {
            if ui.button("Clone", ButtonKind::Normal) {
                actions.push(Action::Clone(entity));
            }
            ui.menu("Add Component", ButtonKind::Add, &mut |ui: &mut dyn Widgets| {
                self.add_component_menu(ui, shared, entity, actions);
            });
            if ui.button("Delete", ButtonKind::Remove) {
                actions.push(Action::Delete(entity));
            }
        });

        if self.config.show_entity_ids {
            self.inspector.show(ui, &entity, "id");
        }

        for (index, descriptor) in self.descriptors.iter().enumerate() {
            if descriptor.has(world, entity) && descriptor.draw(ui, world, entity, &self.inspector) {
                actions.push(Action::Remove {
                    entity,
                    descriptor: index,
                });
            }
        }
    }

    fn add_component_menu(
        &self,
        ui: &mut dyn Widgets,
        world: &World,
        entity: Entity,
        actions: &mut Vec<Action>,
    ) {
        let mut offered = false;
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            match descriptor.menu_entry(ui, world, entity, &self.inspector) {
                MenuEntry::Present => {}
                MenuEntry::Offered => offered = true,
                MenuEntry::Chosen => {
                    offered = true;
                    actions.push(Action::Add {
                        entity,
                        descriptor: index,
                    });
                    ui.close_menu();
                }
            }
        }

        if !offered {
            ui.label(
                &format!(
                    "All {} components have been already added!",
                    self.descriptors.len()
                ),
                Tone::Error,
            );
        }
    }

    fn apply(&self, world: &mut World, action: Action) {
        match action {
            Action::Create => {
                let entity = world.spawn();
                log::debug!("Created {entity}");
            }
            Action::Clone(entity) => {
                Self::clone_entity(world, entity);
            }
            Action::Delete(entity) => {
                if world.despawn(entity) {
                    log::debug!("Deleted {entity}");
                }
            }
            Action::Add { entity, descriptor } => {
                let descriptor = &self.descriptors[descriptor];
                if world.is_alive(entity) && descriptor.add(world, entity, &self.inspector) {
                    log::debug!("Added {} to {entity}", descriptor.name());
                }
            }
            Action::Remove { entity, descriptor } => {
                let descriptor = &self.descriptors[descriptor];
                if descriptor.remove(world, entity) {
                    log::debug!("Removed {} from {entity}", descriptor.name());
                }
            }
        }
    }
}

impl Default for RegistryEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RegistryEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEditor")
            .field("window_name", &self.config.window_name)
            .field("components", &self.descriptors.len())
            .field("enabled", &self.enabled)
            .finish()
    }
}
