//! Pointer-like values. The target is drawn under the pointer's name; a
//! missing target renders as `null (<type>)`.

use crate::context::InspectContext;
use crate::inspect::Inspect;

fn show_null<P: ?Sized>(name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<P>();
    cx.readonly::<P>(name, &format!("null ({type_name})"));
}

/// Read-only view of a possibly missing target. `P` is the pointer type.
pub fn show_pointer<P: ?Sized, T: Inspect>(
    target: Option<&T>,
    name: &str,
    cx: &mut InspectContext<'_, '_>,
) {
    match target {
        Some(target) => cx.show(target, name),
        None => show_null::<P>(name, cx),
    }
}

/// Editable view of a possibly missing target.
pub fn edit_pointer<P: ?Sized, T: Inspect>(
    target: Option<&mut T>,
    name: &str,
    cx: &mut InspectContext<'_, '_>,
) {
    match target {
        Some(target) => cx.show_mut(target, name),
        None => show_null::<P>(name, cx),
    }
}
