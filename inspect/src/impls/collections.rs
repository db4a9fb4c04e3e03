use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};

use super::sequence;
use crate::context::InspectContext;
use crate::inspect::Inspect;
use crate::inspector::Inspector;
use crate::shape::{SequenceKind, Shape};
use crate::strategy::sequence::{
    Keyed, Positional, SetLike, edit_keyed, edit_positional, edit_set, show_keyed,
    show_positional, show_set,
};

const POSITIONAL: Shape = sequence(SequenceKind::Positional);
const KEYED: Shape = sequence(SequenceKind::Keyed);

/// `Inspect` for a positional container via its [`Positional`] impl.
macro_rules! inspect_positional {
    () => {
        fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
            show_positional(self, name, cx);
        }

        fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
            edit_positional(self, name, cx);
        }
    };
}

// ---------------------------------------------------------------------------
// Positional
// ---------------------------------------------------------------------------

impl<T: Inspect> Inspect for Vec<T> {
    const SHAPE: Shape = POSITIONAL;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(Vec::new())
    }

    inspect_positional!();
}

impl<T: Inspect> Positional for Vec<T> {
    type Item = T;
    const RESIZABLE: bool = true;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn erase(&mut self, index: usize) {
        if index < Vec::len(self) {
            self.remove(index);
        }
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    const SHAPE: Shape = POSITIONAL;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(VecDeque::new())
    }

    inspect_positional!();
}

impl<T: Inspect> Positional for VecDeque<T> {
    type Item = T;
    const RESIZABLE: bool = true;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn erase(&mut self, index: usize) {
        self.remove(index);
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    const SHAPE: Shape = POSITIONAL;
    const CONSTRUCTIBLE: bool = N == 0 || T::CONSTRUCTIBLE;

    fn construct() -> Option<Self> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(T::construct()?);
        }
        items.try_into().ok()
    }

    fn construct_with(inspector: &Inspector) -> Option<Self> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(inspector.construct::<T>()?);
        }
        items.try_into().ok()
    }

    fn constructible_with(inspector: &Inspector) -> bool {
        N == 0 || inspector.can_construct::<T>()
    }

    inspect_positional!();
}

impl<T: Inspect, const N: usize> Positional for [T; N] {
    type Item = T;
    const RESIZABLE: bool = false;

    fn len(&self) -> usize {
        N
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }
}

impl<T: Inspect> Inspect for Box<[T]> {
    const SHAPE: Shape = POSITIONAL;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(Box::default())
    }

    inspect_positional!();
}

impl<T: Inspect> Positional for Box<[T]> {
    type Item = T;
    const RESIZABLE: bool = true;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    fn push(&mut self, item: T) {
        let mut items = std::mem::take(self).into_vec();
        items.push(item);
        *self = items.into_boxed_slice();
    }

    fn erase(&mut self, index: usize) {
        let mut items = std::mem::take(self).into_vec();
        if index < items.len() {
            items.remove(index);
        }
        *self = items.into_boxed_slice();
    }
}

// ---------------------------------------------------------------------------
// Keyed
// ---------------------------------------------------------------------------

impl<K, V, S> Inspect for HashMap<K, V, S>
where
    K: Inspect + Display + Clone + Eq + Hash,
    V: Inspect,
    S: BuildHasher + Default + 'static,
{
    const SHAPE: Shape = KEYED;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(HashMap::default())
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_keyed(self, name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_keyed(self, name, cx);
    }
}

impl<K, V, S> Keyed for HashMap<K, V, S>
where
    K: Inspect + Display + Clone + Eq + Hash,
    V: Inspect,
    S: BuildHasher + Default + 'static,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        HashMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) {
        HashMap::remove(self, key);
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn entries_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.iter_mut()
    }
}

impl<K, V> Inspect for BTreeMap<K, V>
where
    K: Inspect + Display + Clone + Ord,
    V: Inspect,
{
    const SHAPE: Shape = KEYED;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(BTreeMap::new())
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_keyed(self, name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_keyed(self, name, cx);
    }
}

impl<K, V> Keyed for BTreeMap<K, V>
where
    K: Inspect + Display + Clone + Ord,
    V: Inspect,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn contains_key(&self, key: &K) -> bool {
        BTreeMap::contains_key(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }

    fn remove(&mut self, key: &K) {
        BTreeMap::remove(self, key);
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn entries_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.iter_mut()
    }
}

// ---------------------------------------------------------------------------
// Sets
// ---------------------------------------------------------------------------

impl<T, S> Inspect for HashSet<T, S>
where
    T: Inspect + Clone + Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    const SHAPE: Shape = POSITIONAL;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(HashSet::default())
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_set(self, name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_set(self, name, cx);
    }
}

impl<T, S> SetLike for HashSet<T, S>
where
    T: Inspect + Clone + Eq + Hash,
    S: BuildHasher + Default + 'static,
{
    type Item = T;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn insert(&mut self, item: T) {
        HashSet::insert(self, item);
    }

    fn remove(&mut self, item: &T) {
        HashSet::remove(self, item);
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

impl<T: Inspect + Clone + Ord> Inspect for BTreeSet<T> {
    const SHAPE: Shape = POSITIONAL;
    const CONSTRUCTIBLE: bool = true;

    fn construct() -> Option<Self> {
        Some(BTreeSet::new())
    }

    fn inspect(&self, name: &str, cx: &mut InspectContext<'_, '_>) {
        show_set(self, name, cx);
    }

    fn inspect_mut(&mut self, name: &str, cx: &mut InspectContext<'_, '_>) {
        edit_set(self, name, cx);
    }
}

impl<T: Inspect + Clone + Ord> SetLike for BTreeSet<T> {
    type Item = T;

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        BTreeSet::contains(self, item)
    }

    fn insert(&mut self, item: T) {
        BTreeSet::insert(self, item);
    }

    fn remove(&mut self, item: &T) {
        BTreeSet::remove(self, item);
    }

    fn items(&self) -> impl Iterator<Item = &T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shapes() {
        assert_eq!(<Vec<u8>>::SHAPE, Shape::Sequence(SequenceKind::Positional));
        assert_eq!(<[f32; 3]>::SHAPE, Shape::Sequence(SequenceKind::Positional));
        assert_eq!(
            <BTreeMap<String, i32>>::SHAPE,
            Shape::Sequence(SequenceKind::Keyed)
        );
        assert_eq!(
            <std::path::PathBuf>::SHAPE,
            Shape::Sequence(SequenceKind::PathLike)
        );
    }

    #[test]
    fn array_construct() {
        assert_eq!(<[u16; 3]>::construct(), Some([0, 0, 0]));
        assert!(!<[&'static str; 2]>::CONSTRUCTIBLE);
        assert!(<[&'static str; 0]>::CONSTRUCTIBLE);
    }

    #[test]
    fn boxed_slice_grows_and_shrinks() {
        let mut items: Box<[u8]> = vec![1, 2, 3].into_boxed_slice();
        Positional::push(&mut items, 4);
        Positional::erase(&mut items, 0);
        assert_eq!(&*items, &[2, 3, 4]);
        Positional::erase(&mut items, 10);
        assert_eq!(Positional::len(&items), 3);
    }
}
