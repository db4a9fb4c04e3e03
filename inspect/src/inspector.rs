use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::overrides::Overrides;
use crate::type_name::{TypeNameError, TypeNames};
use crate::widgets::Widgets;

/// Owns the state shared by every inspection pass: the type-name cache with
/// its rewrite rules, and the user override table.
///
/// ```ignore
/// let mut inspector = Inspector::new();
/// inspector
///     .overrides_mut()
///     .default_value(|| Health(100.0));
///
/// inspector.show_mut(&mut EguiWidgets::new(ui), &mut player, "player");
/// ```
#[derive(Default)]
pub struct Inspector {
    type_names: TypeNames,
    overrides: Overrides,
}

impl Inspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: Overrides) -> Self {
        Self {
            type_names: TypeNames::new(),
            overrides,
        }
    }

    pub fn type_names(&self) -> &TypeNames {
        &self.type_names
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn overrides_mut(&mut self) -> &mut Overrides {
        &mut self.overrides
    }

    /// Registers a type-name rewrite rule. See [`TypeNames::add_rule`].
    pub fn add_type_rule(&self, pattern: &str, replacement: &str) -> Result<bool, TypeNameError> {
        self.type_names.add_rule(pattern, replacement)
    }

    /// Fresh `T`, preferring a registered default provider over the type's own.
    /// Members of composite values are looked up the same way.
    pub fn construct<T: Inspect>(&self) -> Option<T> {
        self.overrides
            .construct::<T>()
            .or_else(|| T::construct_with(self))
    }

    pub fn can_construct<T: Inspect>(&self) -> bool {
        self.overrides.has_default::<T>() || T::constructible_with(self)
    }

    /// Renders `value` read-only.
    pub fn show<T: Inspect>(&self, ui: &mut dyn Widgets, value: &T, name: &str) {
        InspectContext::new(ui, self).show(value, name);
    }

    /// Renders `value` editable.
    pub fn show_mut<T: Inspect>(&self, ui: &mut dyn Widgets, value: &mut T, name: &str) {
        InspectContext::new(ui, self).show_mut(value, name);
    }
}

impl std::fmt::Debug for Inspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspector")
            .field("type_rules", &self.type_names.rule_count())
            .field("cached_names", &self.type_names.cached())
            .field("overrides", &self.overrides)
            .finish()
    }
}
