//! End-to-end dispatch tests driven through the scripted widget backend.

use std::collections::BTreeMap;

use redlilium_inspect::strategy::{ALTERNATIVE_NOT_CONSTRUCTIBLE, NOT_CONSTRUCTIBLE};
use redlilium_inspect::testing::{EventKind, ScriptedWidgets};
use redlilium_inspect::{
    DEPTH_PLACEHOLDER, Inspect, Inspector, MAX_DEPTH, Overrides, READONLY_REASON, Shape,
    Tone, TypeNameError, current_depth, impl_inspect_flags,
};

fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .is_test(true)
        .try_init();
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

#[derive(Inspect, Debug, Clone, PartialEq)]
struct Settings {
    volume: f32,
    muted: bool,
    title: String,
    tags: Vec<u16>,
    limit: Option<i32>,
}

impl Settings {
    fn sample() -> Self {
        Self {
            volume: 0.5,
            muted: false,
            title: "Main".to_owned(),
            tags: vec![1, 2],
            limit: Some(10),
        }
    }
}

#[derive(Inspect, Debug, PartialEq)]
enum Geometry {
    Circle { radius: f32 },
    Rect(f32, f32),
    Label(&'static str),
}

#[derive(Inspect, Debug, Clone, Copy, PartialEq)]
enum Quality {
    Low,
    Medium,
    High,
}

#[derive(Inspect)]
struct Node {
    value: i32,
    next: Option<Box<Node>>,
}

fn chain(len: usize) -> Node {
    let mut head = Node {
        value: 0,
        next: None,
    };
    for value in 1..len as i32 {
        head = Node {
            value,
            next: Some(Box::new(head)),
        };
    }
    head
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Layers: u8 {
        const WORLD = 1 << 0;
        const UI = 1 << 1;
        const DEBUG = 1 << 2;
        const SHADOW = 1 << 3;
        const GIZMO = 1 << 4;
    }
}

impl_inspect_flags!(Layers);

#[derive(Inspect, Debug, Clone, PartialEq)]
#[inspect(no_default)]
struct Seed(u32);

#[derive(Inspect, Debug, PartialEq)]
enum Source {
    Fixed(u32),
    Seeded(Seed),
}

#[derive(Inspect, Debug, PartialEq)]
struct Spawner {
    rate: f32,
    seed: Seed,
}

#[derive(Inspect, Debug, Clone, Copy, PartialEq)]
#[inspect(opaque)]
#[repr(u16)]
enum Slot {
    A = 10,
    B = 20,
}

// ---------------------------------------------------------------------------
// Shapes
// ---------------------------------------------------------------------------

#[test]
fn derived_shapes() {
    assert_eq!(Settings::SHAPE, Shape::ReflectableAggregate);
    assert_eq!(Geometry::SHAPE, Shape::SumType);
    assert_eq!(Quality::SHAPE, Shape::EnumerationScalar);
    assert_eq!(Layers::SHAPE, Shape::BitflagScalar);
}

#[test]
fn derived_construct_is_field_wise() {
    assert_eq!(
        Settings::construct(),
        Some(Settings {
            volume: 0.0,
            muted: false,
            title: String::new(),
            tags: Vec::new(),
            limit: None,
        })
    );
    assert_eq!(Quality::construct(), Some(Quality::Low));
    assert_eq!(Geometry::construct(), Some(Geometry::Circle { radius: 0.0 }));
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

#[test]
fn positional_elements_are_labelled_by_index() {
    init_logger();
    let inspector = Inspector::new();
    let mut values = vec![10i32, 20, 30];
    let mut ui = ScriptedWidgets::new();
    inspector.show_mut(&mut ui, &mut values, "values");

    assert_eq!(ui.labels(EventKind::IntEdit), ["[0]", "[1]", "[2]"]);
    assert!(ui.find(EventKind::Menu, "values/Show Info").is_some());
    assert!(ui.shows("Size: 3"));
}

#[test]
fn erase_and_emplace_back() {
    let inspector = Inspector::new();
    let mut values = vec![10i32, 20, 30];

    let mut ui = ScriptedWidgets::new();
    ui.click("1/-");
    inspector.show_mut(&mut ui, &mut values, "values");
    assert_eq!(values, [10, 30]);
    // The frame stops drawing elements after an erase.
    assert_eq!(ui.labels(EventKind::IntEdit), ["[0]"]);

    let mut ui = ScriptedWidgets::new();
    ui.click("Emplace Back");
    inspector.show_mut(&mut ui, &mut values, "values");
    assert_eq!(values, [10, 30, 0]);
}

#[test]
fn arrays_cannot_grow() {
    let inspector = Inspector::new();
    let mut values = [1u8, 2];
    let mut ui = ScriptedWidgets::new();
    ui.click("Emplace Back").click("0/-");
    inspector.show_mut(&mut ui, &mut values, "pair");

    assert_eq!(values, [1, 2]);
    assert_eq!(ui.pending().len(), 2);
    assert_eq!(ui.count(EventKind::DisabledButton), 3);
}

#[test]
fn keyed_entries_are_labelled_by_key() {
    let inspector = Inspector::new();
    let scores = BTreeMap::from([("alice".to_owned(), 3u32), ("bob".to_owned(), 5)]);
    let mut ui = ScriptedWidgets::new();
    inspector.show(&mut ui, &scores, "scores");

    assert_eq!(ui.labels(EventKind::ReadonlyText), ["alice", "bob"]);
    let emplace = ui.find(EventKind::DisabledButton, "Emplace").unwrap();
    assert_eq!(emplace.detail, READONLY_REASON);
}

#[test]
fn keyed_emplace_uses_default_key_once() {
    let inspector = Inspector::new();
    let mut scores: BTreeMap<String, u32> = BTreeMap::new();

    let mut ui = ScriptedWidgets::new();
    ui.click("Emplace");
    inspector.show_mut(&mut ui, &mut scores, "scores");
    assert_eq!(scores.len(), 1);
    assert_eq!(scores.get(""), Some(&0));

    let mut ui = ScriptedWidgets::new();
    ui.click("Emplace");
    inspector.show_mut(&mut ui, &mut scores, "scores");
    assert_eq!(scores.len(), 1);
    assert!(ui.find(EventKind::DisabledButton, "Emplace").is_some());
}

// ---------------------------------------------------------------------------
// Aggregates, enums and sum types
// ---------------------------------------------------------------------------

#[test]
fn aggregate_fields_follow_declaration_order() {
    let inspector = Inspector::new();
    let mut settings = Settings::sample();
    let mut ui = ScriptedWidgets::new();
    inspector.show_mut(&mut ui, &mut settings, "settings");

    let node = ui.find(EventKind::TreeNode, "settings").unwrap();
    assert!(node.detail.ends_with("Settings"));
    assert_eq!(ui.labels(EventKind::FloatEdit), ["volume"]);
    assert_eq!(ui.labels(EventKind::Checkbox), ["muted"]);
    assert_eq!(ui.labels(EventKind::TextEdit), ["title"]);
    assert_eq!(ui.labels(EventKind::IntEdit), ["[0]", "[1]", "limit"]);
}

#[test]
fn scalar_edits_write_back() {
    let inspector = Inspector::new();
    let mut settings = Settings::sample();
    let mut ui = ScriptedWidgets::new();
    ui.set_float("volume", 0.25)
        .set_checkbox("muted", true)
        .set_text("title", "Pause")
        .set_int("tags/1/[1]", 70_000);
    inspector.show_mut(&mut ui, &mut settings, "settings");

    assert_eq!(settings.volume, 0.25);
    assert!(settings.muted);
    assert_eq!(settings.title, "Pause");
    // Saturates at the element type's bound.
    assert_eq!(settings.tags, [1, u16::MAX]);
    assert!(ui.pending().is_empty());
}

#[test]
fn enumeration_switches_variant() {
    let inspector = Inspector::new();
    let mut quality = Quality::Medium;
    let mut ui = ScriptedWidgets::new();
    ui.click("quality/High");
    inspector.show_mut(&mut ui, &mut quality, "quality");

    assert_eq!(quality, Quality::High);
    assert_eq!(ui.labels(EventKind::Selectable), ["Low", "Medium", "High"]);
}

#[test]
fn sum_type_switch_constructs_new_alternative() {
    init_logger();
    let inspector = Inspector::new();
    let mut geometry = Geometry::Circle { radius: 2.0 };
    let mut ui = ScriptedWidgets::new();
    ui.click("Change/Rect");
    inspector.show_mut(&mut ui, &mut geometry, "geometry");

    assert_eq!(geometry, Geometry::Rect(0.0, 0.0));
    assert!(ui.shows("Current Type: Circle"));
    assert!(ui.shows(ALTERNATIVE_NOT_CONSTRUCTIBLE));
    assert_eq!(ui.count(EventKind::CloseMenu), 1);
    assert_eq!(ui.labels(EventKind::FloatEdit), [".0", ".1"]);
}

#[test]
fn sum_type_on_const_path_cannot_change() {
    let inspector = Inspector::new();
    let geometry = Geometry::Label("hello");
    let mut ui = ScriptedWidgets::new();
    inspector.show(&mut ui, &geometry, "geometry");

    let change = ui.find(EventKind::DisabledButton, "Change").unwrap();
    assert_eq!(change.detail, READONLY_REASON);
    let payload = ui.find(EventKind::ReadonlyText, "Label").unwrap();
    assert_eq!(payload.detail, "hello");
}

// ---------------------------------------------------------------------------
// Optional
// ---------------------------------------------------------------------------

#[test]
fn optional_create_and_clear() {
    let inspector = Inspector::new();

    let mut value: Option<i32> = None;
    let mut ui = ScriptedWidgets::new();
    ui.click("+");
    inspector.show_mut(&mut ui, &mut value, "limit");
    assert_eq!(value, Some(0));

    let mut value = Some(5);
    let mut ui = ScriptedWidgets::new();
    ui.click("-");
    inspector.show_mut(&mut ui, &mut value, "limit");
    assert_eq!(value, None);
}

#[test]
fn optional_without_default_is_disabled() {
    let inspector = Inspector::new();
    let mut value: Option<&'static str> = None;
    let mut ui = ScriptedWidgets::new();
    ui.click("+");
    inspector.show_mut(&mut ui, &mut value, "label");

    assert_eq!(value, None);
    let plus = ui.find(EventKind::DisabledButton, "label/+").unwrap();
    assert_eq!(plus.detail, NOT_CONSTRUCTIBLE);
}

// ---------------------------------------------------------------------------
// Bitflags
// ---------------------------------------------------------------------------

#[test]
fn bitflag_toggle_and_clear() {
    let inspector = Inspector::new();
    let mut layers = Layers::WORLD | Layers::GIZMO;

    let mut ui = ScriptedWidgets::new();
    ui.set_checkbox("flags/DEBUG", true);
    inspector.show_mut(&mut ui, &mut layers, "layers");
    assert_eq!(layers, Layers::WORLD | Layers::DEBUG | Layers::GIZMO);
    assert_eq!(ui.count(EventKind::Checkbox), 5);
    assert_eq!(ui.find(EventKind::Grid, "flags").unwrap().detail, "2");

    let mut ui = ScriptedWidgets::new();
    ui.click("layers/Clear");
    inspector.show_mut(&mut ui, &mut layers, "layers");
    assert_eq!(layers, Layers::empty());
}

// ---------------------------------------------------------------------------
// Depth bound
// ---------------------------------------------------------------------------

#[test]
fn deep_chain_stops_at_depth_limit() {
    init_logger();
    let inspector = Inspector::new();
    let mut head = chain(50);
    let mut ui = ScriptedWidgets::new();
    inspector.show_mut(&mut ui, &mut head, "head");

    assert!(ui.max_depth() <= MAX_DEPTH);
    let placeholder = ui
        .events()
        .iter()
        .find(|event| event.label.ends_with(DEPTH_PLACEHOLDER))
        .unwrap();
    assert_eq!(placeholder.detail, format!("{:?}", Tone::Warning));
    assert_eq!(current_depth(), 0);
}

#[test]
fn shallow_chain_renders_fully() {
    let inspector = Inspector::new();
    let head = chain(4);
    let mut ui = ScriptedWidgets::new();
    inspector.show(&mut ui, &head, "head");

    assert!(!ui.events().iter().any(|e| e.label.ends_with(DEPTH_PLACEHOLDER)));
    assert_eq!(ui.labels(EventKind::ReadonlyText), ["value"; 4]);
}

// ---------------------------------------------------------------------------
// Overrides and the read-only path
// ---------------------------------------------------------------------------

#[test]
fn override_wins_over_structural_strategy() {
    let mut overrides = Overrides::new();
    overrides.render::<i32>(|value, name, cx| {
        cx.ui().label(&format!("{name} = {value}!"), Tone::Info);
    });
    let inspector = Inspector::with_overrides(overrides);

    let mut settings = Settings::sample();
    let mut ui = ScriptedWidgets::new();
    inspector.show_mut(&mut ui, &mut settings, "settings");

    assert!(ui.shows("limit = 10!"));
    assert!(ui.find(EventKind::IntEdit, "limit").is_none());
}

#[test]
fn default_override_feeds_emplace() {
    let mut inspector = Inspector::new();
    inspector.overrides_mut().default_value(|| 42i32);

    let mut values: Vec<i32> = Vec::new();
    let mut ui = ScriptedWidgets::new();
    ui.click("Emplace Back");
    inspector.show_mut(&mut ui, &mut values, "values");
    assert_eq!(values, [42]);
}

#[test]
fn default_provider_enables_sum_alternative() {
    init_logger();
    let mut inspector = Inspector::new();
    let mut source = Source::Fixed(1);

    let mut ui = ScriptedWidgets::new();
    ui.click("Change/Seeded");
    inspector.show_mut(&mut ui, &mut source, "source");
    assert_eq!(source, Source::Fixed(1));
    assert!(ui.shows(ALTERNATIVE_NOT_CONSTRUCTIBLE));

    inspector.overrides_mut().default_value(|| Seed(7));
    let mut ui = ScriptedWidgets::new();
    ui.click("Change/Seeded");
    inspector.show_mut(&mut ui, &mut source, "source");
    assert_eq!(source, Source::Seeded(Seed(7)));
    assert!(!ui.shows(ALTERNATIVE_NOT_CONSTRUCTIBLE));
}

#[test]
fn default_provider_reaches_nested_members() {
    let mut inspector = Inspector::new();
    assert!(!inspector.can_construct::<(Seed, u8)>());
    assert!(!inspector.can_construct::<Spawner>());

    inspector.overrides_mut().default_value(|| Seed(7));
    assert_eq!(inspector.construct::<(Seed, u8)>(), Some((Seed(7), 0)));
    assert_eq!(inspector.construct::<[Seed; 2]>(), Some([Seed(7), Seed(7)]));
    assert_eq!(
        inspector.construct::<Spawner>(),
        Some(Spawner {
            rate: 0.0,
            seed: Seed(7),
        })
    );

    let mut pair: Option<(Seed, u8)> = None;
    let mut ui = ScriptedWidgets::new();
    ui.click("+");
    inspector.show_mut(&mut ui, &mut pair, "pair");
    assert_eq!(pair, Some((Seed(7), 0)));
}

#[test]
fn opaque_enum_shows_its_discriminant() {
    let inspector = Inspector::new();
    assert_eq!(Slot::SHAPE, Shape::OpaqueHandle);

    let mut ui = ScriptedWidgets::new();
    inspector.show(&mut ui, &Slot::B, "slot");
    assert_eq!(ui.find(EventKind::ReadonlyText, "slot").unwrap().detail, "20");

    let mut slot = Slot::A;
    let mut ui = ScriptedWidgets::new();
    ui.set_int("slot", 20);
    inspector.show_mut(&mut ui, &mut slot, "slot");
    assert_eq!(slot, Slot::B);

    // Values with no matching variant are rejected.
    let mut ui = ScriptedWidgets::new();
    ui.set_int("slot", 15);
    inspector.show_mut(&mut ui, &mut slot, "slot");
    assert_eq!(slot, Slot::B);
}

#[test]
fn const_path_suppresses_structural_actions() {
    let inspector = Inspector::new();
    let settings = Settings::sample();
    let mut ui = ScriptedWidgets::new();
    ui.click("Emplace Back").click("-").click("+");
    inspector.show(&mut ui, &settings, "settings");

    assert_eq!(ui.pending().len(), 3);
    assert_eq!(ui.count(EventKind::Button), 0);
    assert!(
        ui.events()
            .iter()
            .filter(|e| e.kind == EventKind::DisabledButton)
            .all(|e| e.detail == READONLY_REASON)
    );
    assert_eq!(settings, Settings::sample());
}

// ---------------------------------------------------------------------------
// Type names
// ---------------------------------------------------------------------------

#[test]
fn type_names_are_cached_across_frames() {
    let inspector = Inspector::new();
    let settings = Settings::sample();

    inspector.show(&mut ScriptedWidgets::new(), &settings, "settings");
    let first = inspector.type_names().stats();
    inspector.show(&mut ScriptedWidgets::new(), &settings, "settings");
    let second = inspector.type_names().stats();

    assert_eq!(second.misses, first.misses);
    assert!(second.hits > first.hits);
}

#[test]
fn custom_type_rules_are_idempotent() {
    let inspector = Inspector::new();
    let before = inspector.type_names().rule_count();

    assert!(inspector.add_type_rule(r"\bSettings\b", "Config").unwrap());
    assert!(!inspector.add_type_rule(r"\bSettings\b", "Config").unwrap());
    assert_eq!(inspector.type_names().rule_count(), before + 1);
    assert!(matches!(
        inspector.add_type_rule("[", ""),
        Err(TypeNameError::InvalidPattern { .. })
    ));

    let mut ui = ScriptedWidgets::new();
    inspector.show(&mut ui, &Settings::sample(), "settings");
    let node = ui.find(EventKind::TreeNode, "settings").unwrap();
    assert!(node.detail.ends_with("Config"));
}
