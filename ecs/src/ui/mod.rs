//! Registry editor UI drawn through [`redlilium_inspect::Widgets`].
//!
//! - **Component filters** (left panel): one checkbox per registered
//!   component. Hovering one shows how many entities carry it. Only entities
//!   carrying every checked component are listed.
//! - **Entity list** (right panel): `Create` spawns an empty entity. Each
//!   entity expands to `Clone`, an `Add Component` menu and `Delete`,
//!   followed by its registered components, each with a `-` button and the
//!   inspector view of its value.
//!
//! # Usage
//!
//! ```ignore
//! use redlilium_ecs::ui::{EditorConfig, RegistryEditor};
//!
//! let config = EditorConfig::load(Path::new("editor.toml"))?;
//! let mut editor = RegistryEditor::with_config(config)?;
//! editor.register::<Position>().register_named::<Label>("Name");
//!
//! // During frame:
//! editor.show_window(ctx, &mut world);
//! ```

mod config;
mod descriptor;
mod editor;

pub use config::{ConfigError, EditorConfig, TypeRule};
pub use descriptor::{ComponentDescriptor, MenuEntry, TypedDescriptor};
pub use editor::{EntityTitle, RegistryEditor};
