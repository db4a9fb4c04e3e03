use std::any::{Any, TypeId};

use crate::component::Component;

/// Typed sparse set storing components of type T.
///
/// Uses a sparse array (entity index → dense index) and a dense array
/// (contiguous component data + entity mapping) for O(1) insert/remove/get
/// and cache-friendly iteration.
pub struct SparseSetInner<T: 'static> {
    /// Sparse array: `entity_index -> dense_index`. `None` means the entity
    /// does not have this component.
    sparse: Vec<Option<u32>>,
    dense: Vec<T>,
    /// Entity indices corresponding to each dense element.
    entities: Vec<u32>,
}

impl<T: 'static> SparseSetInner<T> {
    pub fn new() -> Self {
        Self {
            sparse: Vec::new(),
            dense: Vec::new(),
            entities: Vec::new(),
        }
    }

    /// Inserts a component for the given entity index.
    /// If the entity already has this component, the value is replaced.
    pub fn insert(&mut self, entity_index: u32, value: T) {
        let idx = entity_index as usize;

        if idx >= self.sparse.len() {
            self.sparse.resize(idx + 1, None);
        }

        if let Some(dense_idx) = self.sparse[idx] {
            self.dense[dense_idx as usize] = value;
        } else {
            let dense_idx = self.dense.len() as u32;
            self.sparse[idx] = Some(dense_idx);
            self.dense.push(value);
            self.entities.push(entity_index);
        }
    }

    /// Removes a component for the given entity index.
    /// Returns the removed value, or `None` if the entity did not have this component.
    pub fn remove(&mut self, entity_index: u32) -> Option<T> {
        let idx = entity_index as usize;
        let dense_idx = (*self.sparse.get(idx)?)? as usize;
        self.sparse[idx] = None;

        let last_dense = self.dense.len() - 1;
        if dense_idx != last_dense {
            // Swap-remove: move last element into the removed slot
            let swapped_entity = self.entities[last_dense];
            self.sparse[swapped_entity as usize] = Some(dense_idx as u32);
            self.entities[dense_idx] = swapped_entity;
        }

        self.entities.pop();
        Some(self.dense.swap_remove(dense_idx))
    }

    pub fn get(&self, entity_index: u32) -> Option<&T> {
        let dense_idx = (*self.sparse.get(entity_index as usize)?)? as usize;
        Some(&self.dense[dense_idx])
    }

    pub fn get_mut(&mut self, entity_index: u32) -> Option<&mut T> {
        let dense_idx = (*self.sparse.get(entity_index as usize)?)? as usize;
        Some(&mut self.dense[dense_idx])
    }

    pub fn contains(&self, entity_index: u32) -> bool {
        matches!(self.sparse.get(entity_index as usize), Some(Some(_)))
    }

    /// Returns the number of components stored.
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }

    /// Iterates over `(entity_index, &component)` pairs in dense order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.entities.iter().copied().zip(self.dense.iter())
    }

    /// Returns a slice of entity indices in dense order.
    pub fn entities(&self) -> &[u32] {
        &self.entities
    }
}

impl<T: Clone + 'static> SparseSetInner<T> {
    /// Copies the component of `from` onto `to`. Returns false if `from`
    /// has none.
    pub fn clone_between(&mut self, from: u32, to: u32) -> bool {
        match self.get(from).cloned() {
            Some(value) => {
                self.insert(to, value);
                true
            }
            None => false,
        }
    }
}

impl<T: 'static> Default for SparseSetInner<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Type-erased operation function signatures
type RemoveFn = fn(&mut dyn Any, u32) -> bool;
type ContainsFn = fn(&dyn Any, u32) -> bool;
type CloneFn = fn(&mut dyn Any, u32, u32) -> bool;
type LenFn = fn(&dyn Any) -> usize;

/// A type-erased sparse set that stores components of a single type.
///
/// The function pointers let the [`World`](crate::World) despawn and clone
/// entities without knowing every component type it holds.
pub struct ComponentStorage {
    inner: Box<dyn Any + Send + Sync>,
    type_id: TypeId,
    /// Human-readable type name for error messages.
    type_name: &'static str,
    remove_fn: RemoveFn,
    contains_fn: ContainsFn,
    clone_fn: CloneFn,
    len_fn: LenFn,
}

impl ComponentStorage {
    /// Creates a new component storage for type `T`.
    pub fn new<T: Component>() -> Self {
        Self {
            inner: Box::new(SparseSetInner::<T>::new()),
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            remove_fn: |any, entity_index| {
                any.downcast_mut::<SparseSetInner<T>>()
                    .is_some_and(|set| set.remove(entity_index).is_some())
            },
            contains_fn: |any, entity_index| {
                any.downcast_ref::<SparseSetInner<T>>()
                    .is_some_and(|set| set.contains(entity_index))
            },
            clone_fn: |any, from, to| {
                any.downcast_mut::<SparseSetInner<T>>()
                    .is_some_and(|set| set.clone_between(from, to))
            },
            len_fn: |any| {
                any.downcast_ref::<SparseSetInner<T>>()
                    .map_or(0, SparseSetInner::len)
            },
        }
    }

    /// Downcasts to the typed sparse set. `None` if `T` is not the stored type.
    pub fn typed<T: 'static>(&self) -> Option<&SparseSetInner<T>> {
        self.inner.downcast_ref::<SparseSetInner<T>>()
    }

    pub fn typed_mut<T: 'static>(&mut self) -> Option<&mut SparseSetInner<T>> {
        self.inner.downcast_mut::<SparseSetInner<T>>()
    }

    pub fn component_type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Removes a component by entity index (type-erased). Returns true if removed.
    pub fn remove_untyped(&mut self, entity_index: u32) -> bool {
        (self.remove_fn)(self.inner.as_mut(), entity_index)
    }

    /// Checks if the entity has this component (type-erased).
    pub fn contains_untyped(&self, entity_index: u32) -> bool {
        (self.contains_fn)(self.inner.as_ref(), entity_index)
    }

    /// Deep-copies the component of `from` onto `to` (type-erased).
    pub fn clone_untyped(&mut self, from: u32, to: u32) -> bool {
        (self.clone_fn)(self.inner.as_mut(), from, to)
    }

    pub fn len(&self) -> usize {
        (self.len_fn)(self.inner.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ComponentStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentStorage")
            .field("type_name", &self.type_name)
            .field("len", &self.len())
            .finish()
    }
}
