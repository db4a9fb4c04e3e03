//! Runtime per-type customization.
//!
//! An [`Overrides`] table lets an application replace how a specific type is
//! drawn, or how a fresh instance of it is built, without touching the
//! type's [`Inspect`](crate::Inspect) impl. Entries are keyed by exact
//! [`TypeId`] and always take precedence over the type's own strategy.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::context::InspectContext;

type RenderFn = Box<dyn Fn(&dyn Any, &str, &mut InspectContext<'_, '_>)>;
type RenderMutFn = Box<dyn Fn(&mut dyn Any, &str, &mut InspectContext<'_, '_>)>;
type DefaultFn = Box<dyn Fn() -> Box<dyn Any>>;

/// Per-type render strategies and default-value providers.
#[derive(Default)]
pub struct Overrides {
    render: HashMap<TypeId, RenderFn>,
    render_mut: HashMap<TypeId, RenderMutFn>,
    defaults: HashMap<TypeId, DefaultFn>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the read-only rendering of `T`.
    ///
    /// Also used on the mutable path when no [`render_mut`](Self::render_mut)
    /// entry exists for `T`.
    pub fn render<T: 'static>(
        &mut self,
        render: impl Fn(&T, &str, &mut InspectContext<'_, '_>) + 'static,
    ) -> &mut Self {
        self.render.insert(
            TypeId::of::<T>(),
            Box::new(move |value: &dyn Any, name: &str, cx: &mut InspectContext<'_, '_>| {
                if let Some(value) = value.downcast_ref::<T>() {
                    render(value, name, cx);
                }
            }),
        );
        log::debug!("Registered render override for {}", std::any::type_name::<T>());
        self
    }

    /// Replaces the editable rendering of `T`.
    pub fn render_mut<T: 'static>(
        &mut self,
        render: impl Fn(&mut T, &str, &mut InspectContext<'_, '_>) + 'static,
    ) -> &mut Self {
        self.render_mut.insert(
            TypeId::of::<T>(),
            Box::new(move |value: &mut dyn Any, name: &str, cx: &mut InspectContext<'_, '_>| {
                if let Some(value) = value.downcast_mut::<T>() {
                    render(value, name, cx);
                }
            }),
        );
        log::debug!(
            "Registered mutable render override for {}",
            std::any::type_name::<T>()
        );
        self
    }

    /// Supplies the value used whenever a fresh `T` is needed.
    pub fn default_value<T: 'static>(&mut self, make: impl Fn() -> T + 'static) -> &mut Self {
        self.defaults
            .insert(TypeId::of::<T>(), Box::new(move || Box::new(make()) as Box<dyn Any>));
        log::debug!(
            "Registered default provider for {}",
            std::any::type_name::<T>()
        );
        self
    }

    /// Whether any rendering override exists for `T`.
    pub fn renders<T: 'static>(&self) -> bool {
        let id = TypeId::of::<T>();
        self.render.contains_key(&id) || self.render_mut.contains_key(&id)
    }

    pub fn has_default<T: 'static>(&self) -> bool {
        self.defaults.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.render.len() + self.render_mut.len() + self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Draws `value` through its read-only override. Returns `false` when
    /// `T` has none.
    pub(crate) fn show<T: 'static>(
        &self,
        value: &T,
        name: &str,
        cx: &mut InspectContext<'_, '_>,
    ) -> bool {
        match self.render.get(&TypeId::of::<T>()) {
            Some(render) => {
                render(value as &dyn Any, name, cx);
                true
            }
            None => false,
        }
    }

    /// Draws `value` through its editable override, falling back to the
    /// read-only one. Returns `false` when `T` has neither.
    pub(crate) fn show_mut<T: 'static>(
        &self,
        value: &mut T,
        name: &str,
        cx: &mut InspectContext<'_, '_>,
    ) -> bool {
        match self.render_mut.get(&TypeId::of::<T>()) {
            Some(render) => {
                render(value as &mut dyn Any, name, cx);
                true
            }
            None => self.show(&*value, name, cx),
        }
    }

    /// Builds `T` from its registered provider, if any.
    pub(crate) fn construct<T: 'static>(&self) -> Option<T> {
        let make = self.defaults.get(&TypeId::of::<T>())?;
        make().downcast::<T>().ok().map(|boxed| *boxed)
    }
}

impl std::fmt::Debug for Overrides {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overrides")
            .field("render", &self.render.len())
            .field("render_mut", &self.render_mut.len())
            .field("defaults", &self.defaults.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_builds_value() {
        let mut overrides = Overrides::new();
        overrides.default_value(|| 7u32);
        assert!(overrides.has_default::<u32>());
        assert!(!overrides.has_default::<i32>());
        assert_eq!(overrides.construct::<u32>(), Some(7));
        assert_eq!(overrides.construct::<i32>(), None);
    }

    #[test]
    fn counts_entries() {
        let mut overrides = Overrides::new();
        assert!(overrides.is_empty());
        overrides
            .render::<u8>(|_, _, _| {})
            .render_mut::<u8>(|_, _, _| {})
            .default_value(|| 1u8);
        assert_eq!(overrides.len(), 3);
        assert!(overrides.renders::<u8>());
        assert!(!overrides.renders::<u16>());
    }
}
