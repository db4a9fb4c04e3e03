//! Small vector and color types edited with the multi-component widgets.

use egui::{Color32, Rgba, Vec2};

use super::PRIMITIVE;
use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::shape::Shape;

fn components_text(components: &[f32]) -> String {
    let parts: Vec<String> = components.iter().map(|c| format!("{c:.3}")).collect();
    format!("[{}]", parts.join(", "))
}

impl Inspect for Vec2 {
    const SHAPE: Shape = PRIMITIVE;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(Vec2::ZERO)
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.readonly::<Vec2>(name, &components_text(&[self.x, self.y]));
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        let type_name = cx.type_name::<Vec2>();
        let mut value = [self.x, self.y];
        if cx.ui().vec2_edit(name, &mut value, &type_name) {
            *self = Vec2::from(value);
        }
    }
}

impl Inspect for Rgba {
    const SHAPE: Shape = PRIMITIVE;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(Rgba::WHITE)
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        cx.readonly::<Rgba>(name, &components_text(&self.to_rgba_unmultiplied()));
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        let type_name = cx.type_name::<Rgba>();
        let mut rgba = self.to_rgba_unmultiplied();
        if cx.ui().color_edit(name, &mut rgba, &type_name) {
            let [r, g, b, a] = rgba;
            *self = Rgba::from_rgba_unmultiplied(r, g, b, a);
        }
    }
}

impl Inspect for Color32 {
    const SHAPE: Shape = PRIMITIVE;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(Color32::WHITE)
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        let [r, g, b, a] = self.to_srgba_unmultiplied();
        cx.readonly::<Color32>(name, &format!("#{r:02x}{g:02x}{b:02x}{a:02x}"));
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        let type_name = cx.type_name::<Color32>();
        let mut rgba = self.to_srgba_unmultiplied().map(|c| f32::from(c) / 255.0);
        if cx.ui().color_edit(name, &mut rgba, &type_name) {
            let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
            *self = Color32::from_rgba_unmultiplied(r, g, b, a);
        }
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_impls {
    use nalgebra::{Vector2, Vector4};

    use super::{PRIMITIVE, components_text};
    use crate::context::InspectContext;
    use crate::inspect::Inspect;
    use crate::shape::Shape;

    impl Inspect for Vector2<f32> {
        const SHAPE: Shape = PRIMITIVE;
        const CONSTRUCTIBLE: bool = true;

        fn construct() -> Option<Self> {
            Some(Vector2::zeros())
        }

        fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
            cx.readonly::<Self>(name, &components_text(self.as_slice()));
        }

        fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
            let type_name = cx.type_name::<Self>();
            let mut value = [self.x, self.y];
            if cx.ui().vec2_edit(name, &mut value, &type_name) {
                *self = Vector2::from(value);
            }
        }
    }

    impl Inspect for Vector4<f32> {
        const SHAPE: Shape = PRIMITIVE;
        const CONSTRUCTIBLE: bool = true;

        fn construct() -> Option<Self> {
            Some(Vector4::zeros())
        }

        fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
            cx.readonly::<Self>(name, &components_text(self.as_slice()));
        }

        fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
            let type_name = cx.type_name::<Self>();
            let mut value = [self.x, self.y, self.z, self.w];
            if cx.ui().vec4_edit(name, &mut value, &type_name) {
                *self = Vector4::from(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_text() {
        assert_eq!(components_text(&[1.0, 0.5]), "[1.000, 0.500]");
    }

    #[test]
    fn math_types_are_primitive() {
        assert_eq!(Vec2::SHAPE, Shape::Primitive);
        assert_eq!(Color32::SHAPE, Shape::Primitive);
    }
}
