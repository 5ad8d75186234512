use alloc::vec::Vec;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::mem;

use crate::errors::InvalidKeyError;
use crate::errors::KeyNotFoundError;

/// The capacity every freshly constructed array starts with.
pub const DEFAULT_CAPACITY: usize = 16;

/// One populated slot: a key and the value it maps to.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// An insertion-ordered associative array with linear lookup.
///
/// `AssocArray<K, V>` stores unique key/value pairs in a growable contiguous
/// slot buffer. Keys only need `Eq`; every lookup scans the populated prefix
/// of the buffer in insertion order, and that scan is the single authority
/// for equality and ordering across `set`, `get`, `has_key`, and `remove`.
///
/// # Performance Characteristics
///
/// - `set`/`get`/`has_key`/`remove` are O(len); `len` is O(1)
/// - Capacity starts at [`DEFAULT_CAPACITY`] and doubles when an insertion
///   needs more room; it never shrinks
/// - Removal compacts in place by shifting later entries one slot earlier,
///   so relative order is preserved
///
/// Lookup cost is intentionally linear. If your maps are large or
/// lookup-heavy, reach for a hash map instead.
#[derive(Clone)]
pub struct AssocArray<K, V> {
    /// Slot buffer. Its length is the capacity; populated slots occupy the
    /// prefix `[0, len)` and every slot past that is `None`.
    slots: Vec<Option<Entry<K, V>>>,
    /// Count of populated slots.
    len: usize,
}

impl<K, V> Debug for AssocArray<K, V>
where
    K: Debug + Eq,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(k, v);
        }
        map.finish()
    }
}

impl<K, V> AssocArray<K, V>
where
    K: Eq,
{
    /// Creates a new, empty array at the default capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::{AssocArray, DEFAULT_CAPACITY};
    ///
    /// let map: AssocArray<i32, &str> = AssocArray::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new, empty array with room for at least `capacity` entries
    /// before growing.
    ///
    /// The capacity never goes below [`DEFAULT_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let map: AssocArray<i32, &str> = AssocArray::with_capacity(100);
    /// assert!(map.capacity() >= 100);
    ///
    /// let small: AssocArray<i32, &str> = AssocArray::with_capacity(0);
    /// assert_eq!(small.capacity(), 16);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(DEFAULT_CAPACITY);
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        AssocArray { slots, len: 0 }
    }

    /// Returns the number of key/value pairs in the array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// assert_eq!(map.len(), 0);
    /// map.set(1, "a").unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    ///
    /// This is how many entries the array can hold before the next doubling.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Removes all entries, keeping the allocated capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set(1, "a").unwrap();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert!(!map.has_key(&1));
    /// ```
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Sets the value associated with `key`, inserting or updating.
    ///
    /// If an entry with an equal key exists, its value is overwritten in
    /// place and the previous value is returned; the entry keeps its position
    /// and `len` is unchanged. Otherwise the pair is appended after the last
    /// entry (doubling the capacity first if the array is full) and `Ok(None)`
    /// is returned.
    ///
    /// The key parameter accepts `K` directly or `Option<K>`; passing `None`
    /// is the one way to name the absent key, and it is rejected with
    /// [`InvalidKeyError`] rather than stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::{AssocArray, InvalidKeyError};
    ///
    /// let mut map = AssocArray::new();
    /// assert_eq!(map.set(37, "a"), Ok(None));
    /// assert_eq!(map.set(37, "b"), Ok(Some("a")));
    /// assert_eq!(map.get(&37), Ok(&"b"));
    ///
    /// assert_eq!(map.set(None, "c"), Err(InvalidKeyError));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(
        &mut self,
        key: impl Into<Option<K>>,
        value: V,
    ) -> Result<Option<V>, InvalidKeyError> {
        let Some(key) = key.into() else {
            return Err(InvalidKeyError);
        };

        if let Some(index) = self.find(&key)
            && let Some(entry) = self.slots[index].as_mut()
        {
            return Ok(Some(mem::replace(&mut entry.value, value)));
        }

        if self.len == self.slots.len() {
            self.grow();
        }
        self.slots[self.len] = Some(Entry { key, value });
        self.len += 1;
        Ok(None)
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// Fails with [`KeyNotFoundError`] if no entry has an equal key, which
    /// includes the empty array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::{AssocArray, KeyNotFoundError};
    ///
    /// let mut map = AssocArray::new();
    /// assert_eq!(map.get(&1), Err(KeyNotFoundError));
    /// map.set(1, "a").unwrap();
    /// assert_eq!(map.get(&1), Ok(&"a"));
    /// ```
    pub fn get(&self, key: &K) -> Result<&V, KeyNotFoundError> {
        self.find(key)
            .and_then(|index| self.slots[index].as_ref())
            .map(|entry| &entry.value)
            .ok_or(KeyNotFoundError)
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set(1, "a").unwrap();
    /// if let Ok(value) = map.get_mut(&1) {
    ///     *value = "b";
    /// }
    /// assert_eq!(map.get(&1), Ok(&"b"));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Result<&mut V, KeyNotFoundError> {
        self.find(key)
            .and_then(|index| self.slots[index].as_mut())
            .map(|entry| &mut entry.value)
            .ok_or(KeyNotFoundError)
    }

    /// Returns `true` if an entry with an equal key exists.
    ///
    /// Never fails; an empty array simply reports `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// assert!(!map.has_key(&1));
    /// map.set(1, "a").unwrap();
    /// assert!(map.has_key(&1));
    /// ```
    pub fn has_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes the entry with an equal key, returning its value.
    ///
    /// The gap is closed by shifting every later entry one slot earlier, so
    /// the relative order of the remaining entries is preserved. Removing a
    /// key that is not present is a silent no-op returning `None`; it never
    /// fails, including on an empty array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set(1, "a").unwrap();
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.find(key)?;
        let removed = self.slots[index].take()?;
        // Shift `i + 1 -> i` for everything after the hole; the vacated last
        // populated slot ends up cleared.
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        Some(removed.value)
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut map = AssocArray::new();
    /// map.set("a", 1).unwrap();
    /// map.set("b", 2).unwrap();
    ///
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(pairs, [(&"a", &1), (&"b", &2)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values, in insertion order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Finds the index of the first slot whose key equals `key`.
    ///
    /// This scan is the one place equality and scan order are decided;
    /// `set`, `get`, `has_key`, and `remove` all go through it.
    fn find(&self, key: &K) -> Option<usize> {
        // A populated array always has its first slot filled, so an empty
        // first slot means there is nothing to scan.
        if self.slots[0].is_none() {
            return None;
        }
        self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|entry| entry.key == *key))
    }

    /// Doubles the slot buffer.
    ///
    /// Existing entries stay at their indices and `len` is unchanged.
    fn grow(&mut self) {
        let doubled = self.slots.len() * 2;
        self.slots.resize_with(doubled, || None);
    }
}

impl<K, V> Default for AssocArray<K, V>
where
    K: Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the array as `{K0:V0, K1:V1, ..., KN:VN}` in insertion order, or
/// `{}` when empty.
///
/// Values are rendered through their own `Display`; a [`Nullable`] value with
/// no payload appears as the literal `null`.
///
/// [`Nullable`]: crate::Nullable
///
/// # Examples
///
/// ```rust
/// use assoc_array::AssocArray;
///
/// let mut map = AssocArray::new();
/// assert_eq!(map.to_string(), "{}");
///
/// map.set("A", 1).unwrap();
/// map.set("B", 2).unwrap();
/// assert_eq!(map.to_string(), "{A:1, B:2}");
/// ```
impl<K, V> Display for AssocArray<K, V>
where
    K: Display + Eq,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("}")
    }
}

/// An iterator over the key-value pairs of an `AssocArray`, in insertion
/// order.
pub struct Iter<'a, K, V> {
    inner: core::slice::Iter<'a, Option<Entry<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .and_then(|slot| slot.as_ref())
            .map(|entry| (&entry.key, &entry.value))
    }
}

/// An iterator over the keys of an `AssocArray`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of an `AssocArray`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}
