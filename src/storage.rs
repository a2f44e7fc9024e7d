//! SymbolStorage: the storage wrapper and its write-once policy.

use crate::error::ReassignmentError;
use crate::symbol::Symbol;
use core::fmt;
use hashbrown::HashMap;

/// An ephemeral map from [`Symbol`] tokens to values of one type `T`.
///
/// The surface is deliberately weak-map-shaped: bind, read, probe, unbind.
/// There is no iteration and no way to reach a binding without holding its
/// token. A storage owns its entries outright; dropping the storage drops
/// every binding.
///
/// The write policy is fixed at construction. [`SymbolStorage::new`] builds
/// a reassignable storage where `set` always overwrites;
/// [`SymbolStorage::write_once`] builds a storage where a live binding never
/// changes its value.
///
/// ```
/// use symbol_storage::{Symbol, SymbolStorage};
///
/// let session = Symbol::with_description("session");
/// let mut storage = SymbolStorage::new();
/// storage.set(&session, 41)?;
/// storage.set(&session, 42)?;
/// assert_eq!(storage.get(&session), Some(&42));
/// assert_eq!(storage.remove(&session), Some(42));
/// assert!(!storage.contains_key(&session));
/// # Ok::<(), symbol_storage::ReassignmentError>(())
/// ```
pub struct SymbolStorage<T> {
    entries: HashMap<Symbol, T>,
    // Write-once storages capture their value equality here at construction;
    // `None` means reassignable. Keeps `set` itself free of bounds.
    same_value: Option<fn(&T, &T) -> bool>,
}

impl<T> SymbolStorage<T> {
    /// Create an empty, reassignable storage: `set` may freely overwrite.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            same_value: None,
        }
    }

    /// Whether `set` may rebind a key to a different value.
    pub fn is_reassignable(&self) -> bool {
        self.same_value.is_none()
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value bound to `key`, or `None` when the key is unbound. `None`
    /// is a genuine absence marker: it is never a stored value.
    pub fn get(&self, key: &Symbol) -> Option<&T> {
        self.entries.get(key)
    }

    /// Whether `key` is currently bound in this storage.
    pub fn contains_key(&self, key: &Symbol) -> bool {
        self.entries.contains_key(key)
    }

    /// Bind `key` to `value`, returning the storage for call chaining.
    ///
    /// On a reassignable storage this always binds. On a write-once storage
    /// it binds when the key is unbound, accepts an equal value as a no-op,
    /// and rejects a different value with [`ReassignmentError`] while
    /// leaving the binding untouched. The policy applies to live bindings
    /// only: a removed key may be bound afresh to any value.
    ///
    /// The storage clones the token only when a new binding is created; the
    /// caller keeps its `Symbol`.
    ///
    /// ```
    /// use symbol_storage::{Symbol, SymbolStorage};
    ///
    /// let key = Symbol::new();
    /// let mut versions = SymbolStorage::write_once();
    /// versions.set(&key, "1.0.0")?.set(&key, "1.0.0")?;
    /// assert!(versions.set(&key, "2.0.0").is_err());
    /// assert_eq!(versions.get(&key), Some(&"1.0.0"));
    /// # Ok::<(), symbol_storage::ReassignmentError>(())
    /// ```
    pub fn set(&mut self, key: &Symbol, value: T) -> Result<&mut Self, ReassignmentError> {
        if let Some(same_value) = self.same_value {
            if let Some(bound) = self.entries.get(key) {
                if !same_value(bound, &value) {
                    return Err(ReassignmentError::new(key.clone()));
                }
                // Re-binding the identical value is an accepted no-op.
                return Ok(self);
            }
        }
        self.entries.insert(key.clone(), value);
        Ok(self)
    }

    /// Remove the binding for `key`, yielding the previously bound value.
    /// `None` reports that nothing was bound, and therefore nothing removed.
    pub fn remove(&mut self, key: &Symbol) -> Option<T> {
        self.entries.remove(key)
    }
}

impl<T: PartialEq> SymbolStorage<T> {
    /// Create an empty storage in write-once mode: once a key is bound, a
    /// later `set` must carry an equal value or fail. Comparability is
    /// demanded here, and only here, because this is the one policy that
    /// ever compares values.
    pub fn write_once() -> Self {
        Self {
            entries: HashMap::new(),
            same_value: Some(T::eq),
        }
    }
}

impl<T> Default for SymbolStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

// The fixed type tag plus the two observable facts about a storage. Entries
// are never listed: the surface has no enumeration, so the debug form does
// not leak one.
impl<T> fmt::Debug for SymbolStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolStorage")
            .field("reassignable", &self.is_reassignable())
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
