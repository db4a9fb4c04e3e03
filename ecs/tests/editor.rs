//! End-to-end tests of the registry editor driven through scripted widgets.

use redlilium_ecs::ui::{ConfigError, EditorConfig, RegistryEditor};
use redlilium_ecs::{Entity, World};
use redlilium_inspect::Inspect;
use redlilium_inspect::testing::{EventKind, ScriptedWidgets};

fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Inspect)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, PartialEq, Inspect)]
struct Name(String);

#[derive(Debug, Clone, PartialEq, Inspect)]
struct Velocity {
    x: f32,
    y: f32,
}

#[derive(Debug, Clone, PartialEq, Inspect)]
struct Inventory {
    items: Vec<String>,
    gold: u32,
}

const SHARE_SUFFIX: &str = "entities have this component";

/// A world holding one hero with `Position{1,2}` and `Name("Hero")`.
/// `Velocity` is never registered with the world.
fn hero_world() -> (World, Entity) {
    let mut world = World::new();
    world.register_component::<Position>();
    world.register_component::<Name>();
    world.register_component::<Inventory>();

    let hero = world.spawn();
    world.insert(hero, Position { x: 1.0, y: 2.0 }).unwrap();
    world.insert(hero, Name("Hero".into())).unwrap();
    (world, hero)
}

/// Editor with filters 0 = Position, 1 = Name, 2 = Velocity, 3 = Inventory.
fn full_editor() -> RegistryEditor {
    let mut editor = RegistryEditor::new();
    editor
        .register::<Position>()
        .register::<Name>()
        .register::<Velocity>()
        .register::<Inventory>();
    editor
}

fn share_texts(ui: &ScriptedWidgets) -> Vec<&str> {
    ui.labels(EventKind::HoverText)
        .into_iter()
        .filter(|text| text.ends_with(SHARE_SUFFIX))
        .collect()
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[test]
fn register_uses_short_type_names() {
    let editor = full_editor();
    let names: Vec<&str> = editor.descriptor_names().collect();
    assert_eq!(names, vec!["Position", "Name", "Velocity", "Inventory"]);
}

#[test]
fn register_named_allows_aliases() {
    let mut editor = RegistryEditor::new();
    editor.register_named::<Position>("Pos").register::<Position>();
    assert_eq!(editor.descriptor_index("Pos"), Some(0));
    assert_eq!(editor.descriptor_index("Position"), Some(1));
}

#[test]
#[should_panic(expected = "already registered")]
fn duplicate_registration_panics() {
    let mut editor = RegistryEditor::new();
    editor.register::<Position>();
    editor.register::<Position>();
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[test]
fn name_filter_shows_exactly_the_hero() {
    let (mut world, hero) = hero_world();
    let extra = world.spawn();
    world.insert(extra, Position { x: 0.0, y: 0.0 }).unwrap();
    let mut editor = full_editor();

    assert_eq!(editor.visible_entities(&world), vec![hero, extra]);
    assert!(editor.toggle_filter(1));
    assert_eq!(editor.visible_entities(&world), vec![hero]);
}

#[test]
fn filter_on_absent_component_shows_nothing() {
    let (world, _) = hero_world();

    // Velocity: registered with the editor, never with the world.
    let mut editor = full_editor();
    editor.toggle_filter(2);
    assert!(editor.visible_entities(&world).is_empty());

    // Inventory: registered with both, carried by nobody.
    let mut editor = full_editor();
    editor.toggle_filter(3);
    assert!(editor.visible_entities(&world).is_empty());
}

#[test]
fn filters_combine_with_and() {
    let (mut world, hero) = hero_world();
    let extra = world.spawn();
    world.insert(extra, Position { x: 0.0, y: 0.0 }).unwrap();
    let mut editor = full_editor();

    editor.toggle_filter(1);
    editor.toggle_filter(0);
    assert_eq!(editor.enabled_filters(), &[1, 0]);
    assert_eq!(editor.visible_entities(&world), vec![hero]);

    assert!(!editor.toggle_filter(1));
    assert_eq!(editor.enabled_filters(), &[0]);
    assert_eq!(editor.visible_entities(&world), vec![hero, extra]);
}

#[test]
fn out_of_range_filter_is_ignored() {
    let mut editor = full_editor();
    assert!(!editor.toggle_filter(42));
    assert!(editor.enabled_filters().is_empty());
}

#[test]
fn component_share_counts_carriers() {
    let (mut world, _) = hero_world();
    world.spawn();
    let editor = full_editor();

    assert_eq!(editor.component_share(&world, 1), (1, 50.0));
    assert_eq!(editor.component_share(&world, 2), (0, 0.0));
    assert_eq!(editor.component_share(&World::new(), 0), (0, 0.0));
}

#[test]
fn checkbox_toggles_filter() {
    let (mut world, _) = hero_world();
    let mut editor = full_editor();

    let mut ui = ScriptedWidgets::new();
    ui.set_checkbox("Name", true);
    editor.render(&mut ui, &mut world);
    assert_eq!(editor.enabled_filters(), &[1]);

    let mut ui = ScriptedWidgets::new();
    ui.set_checkbox("Name", false);
    editor.render(&mut ui, &mut world);
    assert!(editor.enabled_filters().is_empty());
}

#[test]
fn share_tooltip_only_while_hovered() {
    init_logger();
    let (mut world, _) = hero_world();
    world.spawn();
    let mut editor = full_editor();

    let mut ui = ScriptedWidgets::new();
    editor.render(&mut ui, &mut world);
    assert!(share_texts(&ui).is_empty());

    let mut ui = ScriptedWidgets::new();
    ui.hover("Name");
    editor.render(&mut ui, &mut world);
    assert_eq!(
        share_texts(&ui),
        vec!["1 (50.0%) entities have this component"]
    );
}

// ---------------------------------------------------------------------------
// Entity panel
// ---------------------------------------------------------------------------

#[test]
fn panels_list_filters_and_entities() {
    let (mut world, _) = hero_world();
    let mut editor = full_editor();
    let mut ui = ScriptedWidgets::new();
    editor.render(&mut ui, &mut world);

    assert!(ui.shows("Component Filters"));
    assert!(ui.shows("Entities: 1"));
    assert_eq!(
        ui.labels(EventKind::Checkbox),
        vec!["Position", "Name", "Velocity", "Inventory"]
    );
    assert!(ui.find(EventKind::Button, "Create").is_some());
    assert!(ui.find(EventKind::TreeNode, "Entity 0").is_some());
    assert!(ui.find(EventKind::Button, "Entity 0/Clone").is_some());
    assert!(ui.find(EventKind::Menu, "Entity 0/Add Component").is_some());
    assert!(ui.find(EventKind::Button, "Entity 0/Delete").is_some());
}

#[test]
fn components_are_drawn_through_the_inspector() {
    let (mut world, hero) = hero_world();
    let mut editor = full_editor();
    let mut ui = ScriptedWidgets::new();
    ui.set_float("Position/x", 5.0).set_text("Name/Name", "Villain");
    editor.render(&mut ui, &mut world);

    assert!(ui.pending().is_empty());
    assert_eq!(
        world.get::<Position>(hero),
        Some(&Position { x: 5.0, y: 2.0 })
    );
    assert_eq!(world.get::<Name>(hero), Some(&Name("Villain".into())));
    assert!(ui.find(EventKind::Button, "Entity 0/Position/-").is_some());
    assert!(ui.find(EventKind::Button, "Entity 0/Velocity/-").is_none());
}

#[test]
fn entity_id_row_follows_config() {
    let (mut world, _) = hero_world();

    let mut editor = full_editor();
    let mut ui = ScriptedWidgets::new();
    editor.render(&mut ui, &mut world);
    let id = ui.find(EventKind::ReadonlyText, "Entity 0/id").unwrap();
    assert_eq!(id.detail, "0");

    let config = EditorConfig {
        show_entity_ids: false,
        ..EditorConfig::default()
    };
    let mut editor = RegistryEditor::with_config(config).unwrap();
    editor.register::<Position>();
    let mut ui = ScriptedWidgets::new();
    editor.render(&mut ui, &mut world);
    assert!(ui.find(EventKind::ReadonlyText, "Entity 0/id").is_none());
}

#[test]
fn entity_title_callback_names_nodes() {
    let (mut world, _) = hero_world();
    world.spawn();
    let mut editor = full_editor();
    editor.set_entity_title(|world, entity| match world.get::<Name>(entity) {
        Some(name) => name.0.clone(),
        None => format!("Entity {}", entity.index()),
    });

    let mut ui = ScriptedWidgets::new();
    editor.render(&mut ui, &mut world);
    let nodes = ui.labels(EventKind::TreeNode);
    assert!(nodes.contains(&"Hero"));
    assert!(nodes.contains(&"Entity 1"));
}

#[test]
fn create_spawns_an_empty_entity() {
    let (mut world, _) = hero_world();
    let mut editor = full_editor();
    let mut ui = ScriptedWidgets::new();
    ui.click("Create");
    editor.render(&mut ui, &mut world);

    assert_eq!(world.entity_count(), 2);
    let created = world.iter_entities().last().unwrap();
    assert!(!world.contains::<Position>(created));
    assert!(!world.contains::<Name>(created));
}

#[test]
fn delete_destroys_after_the_frame() {
    let (mut world, hero) = hero_world();
    let mut editor = full_editor();
    let mut ui = ScriptedWidgets::new();
    ui.click("Entity 0/Delete");
    editor.render(&mut ui, &mut world);

    // The entity's components were still drawn during the frame.
    assert!(ui.find(EventKind::Button, "Entity 0/Position/-").is_some());
    assert!(!world.is_alive(hero));
    assert_eq!(world.entity_count(), 0);
}

#[test]
fn remove_button_detaches_one_component() {
    let (mut world, hero) = hero_world();
    let mut editor = full_editor();
    let mut ui = ScriptedWidgets::new();
    ui.click("Entity 0/Position/-");
    editor.render(&mut ui, &mut world);

    assert!(!world.contains::<Position>(hero));
    assert!(world.contains::<Name>(hero));
}

// ---------------------------------------------------------------------------
// Add component
// ---------------------------------------------------------------------------

#[test]
fn add_menu_offers_missing_components() {
    let (mut world, hero) = hero_world();
    let mut editor = full_editor();

    let mut ui = ScriptedWidgets::new();
    editor.render(&mut ui, &mut world);
    assert_eq!(
        ui.labels(EventKind::Selectable),
        vec!["Velocity", "Inventory"]
    );

    let mut ui = ScriptedWidgets::new();
    ui.click("Entity 0/Add Component/Velocity");
    editor.render(&mut ui, &mut world);
    assert_eq!(ui.count(EventKind::CloseMenu), 1);
    assert_eq!(
        world.get::<Velocity>(hero),
        Some(&Velocity { x: 0.0, y: 0.0 })
    );
}

#[test]
fn add_menu_uses_registered_default_value() {
    let (mut world, hero) = hero_world();
    let mut editor = full_editor();
    editor.inspector_mut().overrides_mut().default_value(|| Inventory {
        items: vec!["torch".into()],
        gold: 10,
    });

    let mut ui = ScriptedWidgets::new();
    ui.click("Add Component/Inventory");
    editor.render(&mut ui, &mut world);
    assert_eq!(world.get::<Inventory>(hero).map(|inv| inv.gold), Some(10));
}

#[test]
fn full_entity_shows_red_notice() {
    let (mut world, _) = hero_world();
    let mut editor = RegistryEditor::new();
    editor.register::<Position>().register::<Name>();

    let mut ui = ScriptedWidgets::new();
    editor.render(&mut ui, &mut world);
    let notice = ui
        .find(
            EventKind::Label,
            "Entity 0/Add Component/All 2 components have been already added!",
        )
        .unwrap();
    assert_eq!(notice.detail, "Error");
    assert_eq!(ui.count(EventKind::Selectable), 0);
}

// ---------------------------------------------------------------------------
// Clone
// ---------------------------------------------------------------------------

#[test]
fn clone_copies_are_independent() {
    let (mut world, hero) = hero_world();
    world
        .insert(
            hero,
            Inventory {
                items: vec!["sword".into()],
                gold: 3,
            },
        )
        .unwrap();

    let copy = RegistryEditor::clone_entity(&mut world, hero).unwrap();
    assert_ne!(copy, hero);
    assert_eq!(world.get::<Position>(copy), world.get::<Position>(hero));
    assert_eq!(world.get::<Inventory>(copy), world.get::<Inventory>(hero));

    world
        .get_mut::<Inventory>(copy)
        .unwrap()
        .items
        .push("shield".into());
    assert_eq!(
        world.get::<Inventory>(hero).unwrap().items,
        vec!["sword".to_owned()]
    );
    assert_eq!(world.get::<Inventory>(copy).unwrap().items.len(), 2);
}

#[test]
fn clone_button_spawns_a_copy() {
    init_logger();
    let (mut world, _) = hero_world();
    let mut editor = full_editor();
    let mut ui = ScriptedWidgets::new();
    ui.click("Entity 0/Clone");
    editor.render(&mut ui, &mut world);

    assert_eq!(world.entity_count(), 2);
    editor.toggle_filter(1);
    let named: Vec<String> = editor
        .visible_entities(&world)
        .into_iter()
        .filter_map(|entity| world.get::<Name>(entity).map(|name| name.0.clone()))
        .collect();
    assert_eq!(named, vec!["Hero".to_owned(), "Hero".to_owned()]);
}

#[test]
fn clone_of_dead_entity_is_none() {
    let (mut world, hero) = hero_world();
    world.despawn(hero);
    assert!(RegistryEditor::clone_entity(&mut world, hero).is_none());
    assert_eq!(world.entity_count(), 0);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_rules_shape_registered_names() {
    let config = EditorConfig::from_toml_str(
        r#"
        window_name = "Scene"

        [[type_rule]]
        pattern = "Position"
        replacement = "Pos"
        "#,
    )
    .unwrap();
    let mut editor = RegistryEditor::with_config(config).unwrap();
    editor.register::<Position>();

    assert_eq!(editor.config().window_name, "Scene");
    assert_eq!(editor.descriptor_names().collect::<Vec<_>>(), vec!["Pos"]);
}

#[test]
fn invalid_config_rule_is_rejected() {
    let config = EditorConfig::from_toml_str(
        r#"
        [[type_rule]]
        pattern = "("
        replacement = ""
        "#,
    )
    .unwrap();
    let result = RegistryEditor::with_config(config);
    assert!(matches!(result, Err(ConfigError::TypeRule(_))));
}
