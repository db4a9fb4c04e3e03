//! Containers: positional (`[i]` labels), keyed (key text labels) and sets.
//!
//! Every container renders as a collapsible node whose first row carries the
//! structural actions: a `Show Info` popup with size details and an
//! `Emplace Back` button. Elements get a red `-` button; erasing one ends the
//! element loop for the frame so no stale index is drawn.

use std::fmt::Display;

use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::strategy::{FIXED_SIZE, NOT_CONSTRUCTIBLE, READONLY_REASON};
use crate::widgets::{ButtonKind, Tone};

/// Index-addressed container.
pub trait Positional: Inspect {
    type Item: Inspect;

    /// Whether elements can be appended and erased.
    const RESIZABLE: bool;

    fn len(&self) -> usize;

    fn item(&self, index: usize) -> Option<&Self::Item>;

    fn item_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Appends an element. Only called when [`RESIZABLE`](Self::RESIZABLE).
    fn push(&mut self, _item: Self::Item) {}

    /// Removes an element. Only called when [`RESIZABLE`](Self::RESIZABLE).
    fn erase(&mut self, _index: usize) {}
}

/// Key-addressed container. Entries are labelled with the key's text.
pub trait Keyed: Inspect {
    type Key: Inspect + Display + Clone;
    type Value: Inspect;

    fn len(&self) -> usize;

    fn contains_key(&self, key: &Self::Key) -> bool;

    fn insert(&mut self, key: Self::Key, value: Self::Value);

    fn remove(&mut self, key: &Self::Key);

    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    fn entries_mut(&mut self) -> impl Iterator<Item = (&Self::Key, &mut Self::Value)>;
}

/// Set of unique elements. Elements are immutable in place.
pub trait SetLike: Inspect {
    type Item: Inspect + Clone;

    fn len(&self) -> usize;

    fn contains(&self, item: &Self::Item) -> bool;

    fn insert(&mut self, item: Self::Item);

    fn remove(&mut self, item: &Self::Item);

    fn items(&self) -> impl Iterator<Item = &Self::Item>;
}

fn info_popup(len: usize, cx: &mut InspectContext<'_, '_>) {
    cx.menu("Show Info", ButtonKind::Normal, |cx| {
        cx.ui().label(&format!("Size: {len}"), Tone::Normal);
        cx.ui().label(&format!("Is empty: {}", len == 0), Tone::Normal);
    });
}

fn index_label(index: usize) -> String {
    format!("[{index}]")
}

// ---------------------------------------------------------------------------
// Positional
// ---------------------------------------------------------------------------

pub fn show_positional<C: Positional>(container: &C, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<C>();
    let len = container.len();
    cx.id_scope(name, |cx| {
        cx.tree_node(name, &type_name, |cx| {
            cx.horizontal(|cx| {
                info_popup(len, cx);
                cx.ui().disabled_button("Emplace Back", READONLY_REASON);
            });
            for index in 0..len {
                if let Some(item) = container.item(index) {
                    cx.id_scope(&index.to_string(), |cx| cx.show(item, &index_label(index)));
                }
            }
        });
    });
}

pub fn edit_positional<C: Positional>(
    container: &mut C,
    name: &str,
    cx: &mut InspectContext<'_, '_>,
) {
    let type_name = cx.type_name::<C>();
    cx.id_scope(name, |cx| {
        cx.tree_node(name, &type_name, |cx| {
            cx.horizontal(|cx| {
                info_popup(container.len(), cx);
                if !C::RESIZABLE {
                    cx.ui().disabled_button("Emplace Back", FIXED_SIZE);
                } else if !cx.can_construct::<C::Item>() {
                    cx.ui().disabled_button("Emplace Back", NOT_CONSTRUCTIBLE);
                } else if cx.ui().button("Emplace Back", ButtonKind::Add)
                    && let Some(item) = cx.construct::<C::Item>()
                {
                    container.push(item);
                }
            });

            let mut erase = None;
            for index in 0..container.len() {
                cx.id_scope(&index.to_string(), |cx| {
                    cx.horizontal(|cx| {
                        if !C::RESIZABLE {
                            cx.ui().disabled_button("-", FIXED_SIZE);
                        } else if cx.ui().button("-", ButtonKind::Remove) {
                            erase = Some(index);
                            return;
                        }
                        if let Some(item) = container.item_mut(index) {
                            cx.show_mut(item, &index_label(index));
                        }
                    });
                });
                if erase.is_some() {
                    break;
                }
            }

            if let Some(index) = erase {
                container.erase(index);
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Keyed
// ---------------------------------------------------------------------------

pub fn show_keyed<M: Keyed>(map: &M, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<M>();
    cx.id_scope(name, |cx| {
        cx.tree_node(name, &type_name, |cx| {
            cx.horizontal(|cx| {
                info_popup(map.len(), cx);
                cx.ui().disabled_button("Emplace", READONLY_REASON);
            });
            for (index, (key, value)) in map.entries().enumerate() {
                let label = key.to_string();
                cx.id_scope(&index.to_string(), |cx| cx.show(value, &label));
            }
        });
    });
}

pub fn edit_keyed<M: Keyed>(map: &mut M, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<M>();
    cx.id_scope(name, |cx| {
        cx.tree_node(name, &type_name, |cx| {
            cx.horizontal(|cx| {
                info_popup(map.len(), cx);
                emplace_entry(map, cx);
            });

            let mut erase = None;
            for (index, (key, value)) in map.entries_mut().enumerate() {
                let label = key.to_string();
                cx.id_scope(&index.to_string(), |cx| {
                    cx.horizontal(|cx| {
                        if cx.ui().button("-", ButtonKind::Remove) {
                            erase = Some(key.clone());
                            return;
                        }
                        cx.show_mut(value, &label);
                    });
                });
                if erase.is_some() {
                    break;
                }
            }

            if let Some(key) = erase {
                map.remove(&key);
            }
        });
    });
}

fn emplace_entry<M: Keyed>(map: &mut M, cx: &mut InspectContext<'_, '_>) {
    if !cx.can_construct::<M::Key>() || !cx.can_construct::<M::Value>() {
        cx.ui().disabled_button("Emplace", NOT_CONSTRUCTIBLE);
        return;
    }
    match cx.construct::<M::Key>() {
        Some(key) if map.contains_key(&key) => {
            let reason = format!("An entry with key `{key}` already exists");
            cx.ui().disabled_button("Emplace", &reason);
        }
        Some(key) => {
            if cx.ui().button("Emplace", ButtonKind::Add)
                && let Some(value) = cx.construct::<M::Value>()
            {
                map.insert(key, value);
            }
        }
        None => cx.ui().disabled_button("Emplace", NOT_CONSTRUCTIBLE),
    }
}

// ---------------------------------------------------------------------------
// Sets
// ---------------------------------------------------------------------------

pub fn show_set<S: SetLike>(set: &S, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<S>();
    cx.id_scope(name, |cx| {
        cx.tree_node(name, &type_name, |cx| {
            cx.horizontal(|cx| {
                info_popup(set.len(), cx);
                cx.ui().disabled_button("Emplace", READONLY_REASON);
            });
            for (index, item) in set.items().enumerate() {
                cx.id_scope(&index.to_string(), |cx| cx.show(item, &index_label(index)));
            }
        });
    });
}

/// Set elements are drawn read-only; changes go through `-` and `Emplace`.
pub fn edit_set<S: SetLike>(set: &mut S, name: &str, cx: &mut InspectContext<'_, '_>) {
    let type_name = cx.type_name::<S>();
    cx.id_scope(name, |cx| {
        cx.tree_node(name, &type_name, |cx| {
            cx.horizontal(|cx| {
                info_popup(set.len(), cx);
                match cx.construct::<S::Item>() {
                    Some(item) if set.contains(&item) => {
                        cx.ui()
                            .disabled_button("Emplace", "The default element is already present");
                    }
                    Some(item) => {
                        if cx.ui().button("Emplace", ButtonKind::Add) {
                            set.insert(item);
                        }
                    }
                    None => cx.ui().disabled_button("Emplace", NOT_CONSTRUCTIBLE),
                }
            });

            let mut erase = None;
            for (index, item) in set.items().enumerate() {
                cx.id_scope(&index.to_string(), |cx| {
                    cx.horizontal(|cx| {
                        if cx.ui().button("-", ButtonKind::Remove) {
                            erase = Some(item.clone());
                            return;
                        }
                        cx.show(item, &index_label(index));
                    });
                });
                if erase.is_some() {
                    break;
                }
            }

            if let Some(item) = erase {
                set.remove(&item);
            }
        });
    });
}
