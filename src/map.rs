//! This module provides an insertion-ordered map that can populate missing
//! entries on demand from a stored default factory.

// TODO: Clone (blocked on the boxed factory; entries alone are cloneable)

use core::fmt;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::ExactSizeIterator;
use core::ops::Index;
use core::ops::IndexMut;
use std::hash::RandomState;
use indexmap::Equivalent;
use indexmap::IndexMap;
use indexmap::map::Entry;
use indexmap::map::IntoIter;
use indexmap::map::Iter;
use indexmap::map::IterMut;
use thiserror::Error;

/// A boxed zero-argument function producing default values on demand.

pub type Factory<V> = Box<dyn FnMut() -> V>;

/// Error returned by [`DefaultMap::get_or_default`] when the key is absent
/// and no default factory is configured.

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no default factory is configured")]
pub struct NoFactoryError;

/// An insertion-ordered map that can populate missing entries on demand from
/// a stored default factory.
///
/// Entries iterate in the order their keys were first inserted, whether that
/// insertion was explicit or produced by [`DefaultMap::get_or_default`].
/// Updating the value of an existing key does not move it.

pub struct DefaultMap<K, V, S = RandomState> {
  entries: IndexMap<K, V, S>,
  factory: Option<Factory<V>>,
}

impl<K, V> DefaultMap<K, V> {
  /// Creates an empty map with no default factory.

  #[must_use]
  pub fn new() -> Self {
    return Self { entries: IndexMap::new(), factory: None };
  }

  /// Creates an empty map with the given default factory.

  #[must_use]
  pub fn with_factory(factory: impl FnMut() -> V + 'static) -> Self {
    return Self { entries: IndexMap::new(), factory: Some(Box::new(factory)) };
  }

  /// Creates a map with the given default factory, pre-populated from a
  /// sequence of key-value pairs. A key occurring more than once keeps the
  /// position of its first occurrence and the value of its last.

  #[must_use]
  pub fn with_factory_and_entries<I>(factory: impl FnMut() -> V + 'static, entries: I) -> Self
  where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, V)>,
  {
    return Self { entries: entries.into_iter().collect(), factory: Some(Box::new(factory)) };
  }
}

impl<K, V, S> DefaultMap<K, V, S> {
  /// Creates an empty map with no default factory, hashing with the given
  /// hash builder.

  #[must_use]
  pub fn with_hasher(hash_builder: S) -> Self {
    return Self { entries: IndexMap::with_hasher(hash_builder), factory: None };
  }

  /// Returns whether a default factory is configured.

  #[inline(always)]
  #[must_use]
  pub fn has_factory(&self) -> bool {
    return self.factory.is_some();
  }

  /// Configures the given default factory, replacing the previous one if any.

  #[inline(always)]
  pub fn set_factory(&mut self, factory: impl FnMut() -> V + 'static) {
    self.factory = Some(Box::new(factory));
  }

  /// Removes and returns the default factory. Afterwards, default-triggering
  /// lookups of absent keys fail until a factory is configured again.

  #[inline(always)]
  pub fn take_factory(&mut self) -> Option<Factory<V>> {
    return self.factory.take();
  }

  /// Returns the number of items.

  #[inline(always)]
  #[must_use]
  pub fn len(&self) -> usize {
    return self.entries.len();
  }

  /// Returns whether the map contains zero items.

  #[inline(always)]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    return self.entries.is_empty();
  }

  /// Returns an iterator yielding each key and a reference to its associated
  /// value, in insertion order. The iterator item type is `(&'_ K, &'_ V)`.

  #[inline(always)]
  #[must_use]
  pub fn iter(&self) -> Iter<'_, K, V> {
    return self.entries.iter();
  }

  /// Returns an iterator yielding each key and a mutable reference to its
  /// associated value, in insertion order. The iterator item type is
  /// `(&'_ K, &'_ mut V)`.

  #[inline(always)]
  #[must_use]
  pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
    return self.entries.iter_mut();
  }

  /// Returns an iterator yielding each key in insertion order. The iterator
  /// item type is `&'_ K`.

  #[inline(always)]
  #[must_use]
  pub fn keys(&self) -> impl ExactSizeIterator<Item = &K> + use<'_, K, V, S> {
    return self.entries.keys();
  }

  /// Returns an iterator yielding a reference to each value in insertion
  /// order. The iterator item type is `&'_ V`.

  #[inline(always)]
  #[must_use]
  pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + use<'_, K, V, S> {
    return self.entries.values();
  }

  /// Returns an iterator yielding a mutable reference to each value in
  /// insertion order. The iterator item type is `&'_ mut V`.

  #[inline(always)]
  #[must_use]
  pub fn values_mut(&mut self) -> impl ExactSizeIterator<Item = &mut V> + use<'_, K, V, S> {
    return self.entries.values_mut();
  }
}

impl<K: Hash + Eq, V, S: BuildHasher> DefaultMap<K, V, S> {
  /// Returns whether the map contains the given key. Never invokes the
  /// default factory.

  #[inline(always)]
  #[must_use]
  pub fn contains_key<Q>(&self, key: &Q) -> bool
  where
    Q: ?Sized + Hash + Equivalent<K>,
  {
    return self.entries.contains_key(key);
  }

  /// Returns a reference to the value associated with the given key, if
  /// present. Never invokes the default factory.

  #[inline(always)]
  #[must_use]
  pub fn get<Q>(&self, key: &Q) -> Option<&V>
  where
    Q: ?Sized + Hash + Equivalent<K>,
  {
    return self.entries.get(key);
  }

  /// Returns a mutable reference to the value associated with the given key,
  /// if present. Never invokes the default factory.

  #[inline(always)]
  #[must_use]
  pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
  where
    Q: ?Sized + Hash + Equivalent<K>,
  {
    return self.entries.get_mut(key);
  }

  /// Returns a mutable reference to the value associated with the given key,
  /// inserting a value produced by the default factory if the key is absent.
  /// A key inserted this way takes the last position in iteration order.
  ///
  /// The factory runs at most once per call, and not at all when the key is
  /// already present.
  ///
  /// # Errors
  ///
  /// Fails with [`NoFactoryError`] if the key is absent and no default
  /// factory is configured. The map is left unchanged.

  pub fn get_or_default(&mut self, key: K) -> Result<&mut V, NoFactoryError> {
    return match self.entries.entry(key) {
      Entry::Occupied(o) => Ok(o.into_mut()),
      Entry::Vacant(v) => {
        match self.factory.as_mut() {
          None => Err(NoFactoryError),
          Some(f) => Ok(v.insert(f())),
        }
      }
    };
  }

  /// Returns a mutable reference to the value associated with the given key,
  /// inserting a value produced by the given closure if the key is absent.
  /// The stored default factory is not consulted.

  pub fn get_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
    return self.entries.entry(key).or_insert_with(default);
  }

  /// Inserts the given key and value into the map. Returns the previous
  /// value associated with the given key, if one was present.
  ///
  /// An existing key keeps its position in iteration order; a new key is
  /// appended at the end. Never invokes the default factory.

  #[inline(always)]
  #[must_use]
  pub fn get_insert(&mut self, key: K, value: V) -> Option<V> {
    return self.entries.insert(key, value);
  }

  /// Inserts the given key and value into the map.

  #[inline(always)]
  pub fn insert(&mut self, key: K, value: V) {
    let _: Option<V> = self.get_insert(key, value);
  }

  /// Removes the given key from the map, preserving the order of the
  /// remaining entries. Returns the previous value associated with the given
  /// key, if one was present.

  #[inline(always)]
  #[must_use]
  pub fn get_remove<Q>(&mut self, key: &Q) -> Option<V>
  where
    Q: ?Sized + Hash + Equivalent<K>,
  {
    return self.entries.shift_remove(key);
  }

  /// Removes the given key from the map, preserving the order of the
  /// remaining entries.

  #[inline(always)]
  pub fn remove<Q>(&mut self, key: &Q)
  where
    Q: ?Sized + Hash + Equivalent<K>,
  {
    let _: Option<V> = self.get_remove(key);
  }

  /// Removes every item from the map. Retains heap-allocated memory. The
  /// default factory, if any, is left in place.

  pub fn clear(&mut self) {
    self.entries.clear();
  }

  /// Removes every item from the map. Releases heap-allocated memory. The
  /// default factory, if any, is left in place.

  pub fn reset(&mut self) {
    self.entries.clear();
    self.entries.shrink_to_fit();
  }
}

impl<K, V, S: Default> Default for DefaultMap<K, V, S> {
  fn default() -> Self {
    return Self { entries: IndexMap::default(), factory: None };
  }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for DefaultMap<K, V, S> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    return f.debug_map().entries(self.entries.iter()).finish();
  }
}

impl<K, V, Q, S> Index<&Q> for DefaultMap<K, V, S>
where
  K: Hash + Eq,
  Q: ?Sized + Hash + Equivalent<K>,
  S: BuildHasher,
{
  type Output = V;

  #[inline(always)]
  fn index(&self, index: &Q) -> &Self::Output {
    return self.get(index).unwrap();
  }
}

// NB: The standard library hash map does *NOT* implement `IndexMut`, because
// people might try to do
//
//   map[k] = ...;
//
// when `k` is not present in the map. With other programming languages'
// standard behavior, this would insert the key. Here, indexing never
// consults the default factory; only `get_or_default` inserts.

impl<K, V, Q, S> IndexMut<&Q> for DefaultMap<K, V, S>
where
  K: Hash + Eq,
  Q: ?Sized + Hash + Equivalent<K>,
  S: BuildHasher,
{
  #[inline(always)]
  fn index_mut(&mut self, index: &Q) -> &mut Self::Output {
    return self.get_mut(index).unwrap();
  }
}

impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for DefaultMap<K, V, S> {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    return Self { entries: IndexMap::from_iter(iter), factory: None };
  }
}

impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for DefaultMap<K, V, S> {
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    self.entries.extend(iter);
  }
}

impl<K, V, S> IntoIterator for DefaultMap<K, V, S> {
  type Item = (K, V);
  type IntoIter = IntoIter<K, V>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    return self.entries.into_iter();
  }
}

impl<'a, K, V, S> IntoIterator for &'a DefaultMap<K, V, S> {
  type Item = (&'a K, &'a V);
  type IntoIter = Iter<'a, K, V>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    return self.entries.iter();
  }
}

impl<'a, K, V, S> IntoIterator for &'a mut DefaultMap<K, V, S> {
  type Item = (&'a K, &'a mut V);
  type IntoIter = IterMut<'a, K, V>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    return self.entries.iter_mut();
  }
}

pub mod internal {
  //! Unstable API exposing implementation details for benchmarks and tests.

  #![allow(missing_docs)]

  use super::DefaultMap;

  #[must_use]
  pub fn capacity<K, V, S>(t: &DefaultMap<K, V, S>) -> usize {
    return t.entries.capacity();
  }
}
