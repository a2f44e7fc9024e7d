//! symbol-storage: an ephemeral, symbol-keyed storage map with an optional
//! write-once policy.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a weak-map-shaped storage surface (bind/read/probe/unbind) over
//!   opaque symbol tokens, for code that mints tokens as keys and keeps the
//!   bindings reachable only through them.
//! - Layers:
//!   - symbol::Symbol: identity-compared key tokens. Identity is the
//!     backing allocation; clones are the same token, fresh mints never
//!     collide, and a per-thread registry shares tokens under a name.
//!   - SymbolStorage<T>: the storage wrapper. Owns a symbol -> value map as
//!     a plain field and enforces the write policy fixed at construction.
//!
//! Constraints
//! - Single-threaded: `Symbol` is `Rc`-backed, so tokens and storages are
//!   `!Send`/`!Sync` by design (no atomics).
//! - A storage owns its entry map outright: the mapping lives exactly as
//!   long as its storage, is reclaimed by `Drop`, and holds no reference
//!   back to the storage.
//! - Keys are unique per mapping; insertion order never affects behavior.
//! - Write-once mode: a live binding never changes value. Equal re-binds
//!   are accepted no-ops; a different value is rejected with
//!   `ReassignmentError` and no mutation. Removal frees the key.
//!
//! Why this split?
//! - Token identity and write policy are separate concerns: `symbol` knows
//!   nothing about storages, and `storage` treats tokens as ordinary map
//!   keys with the identity semantics baked into their `Eq`/`Hash`.
//! - The policy is captured at construction (a stored equality fn for
//!   write-once, nothing for reassignable), so `set` stays one code path
//!   and comparability is only demanded where a comparison can occur.
//!
//! Notes and non-goals
//! - No iteration, enumeration, or serialization of entries: the surface
//!   deliberately mirrors a weak map, not a collection. `Debug` reports the
//!   type tag, policy, and binding count, never the entries.
//! - No weak keying: an entry lives until removed or until its storage
//!   drops. Token liveness and binding liveness are independent.
//! - No `get_mut`: mutable access to a bound value would bypass the
//!   write-once comparison, so reads are shared under both policies.
//! - No `clear`: `remove` unbinds one key at a time; the whole mapping dies
//!   only with its storage.
//!
//! Implementation note
//! - The write-once comparison runs user code (`T::eq`) only while the map
//!   is structurally consistent; no operation re-enters the storage.
//!
//! ```
//! use symbol_storage::{Symbol, SymbolStorage};
//!
//! let token = Symbol::with_description("request id");
//! let mut ids = SymbolStorage::write_once();
//! ids.set(&token, 7031)?.set(&token, 7031)?;
//! assert!(ids.set(&token, 1).is_err());
//! assert_eq!(ids.get(&token), Some(&7031));
//! # Ok::<(), symbol_storage::ReassignmentError>(())
//! ```

mod error;
mod storage;
pub mod symbol;

// Public surface
pub use error::ReassignmentError;
pub use storage::SymbolStorage;
pub use symbol::Symbol;
