//! Identity-compared symbol tokens and the per-thread name registry.
//!
//! A `Symbol` is an opaque token whose identity is its backing allocation:
//! clones of one token compare equal, every fresh mint is distinct, and the
//! optional description is purely diagnostic. Registry symbols minted with
//! `Symbol::for_key` are shared per thread under their name.

use core::fmt;
use core::hash::{Hash, Hasher};
use hashbrown::HashMap;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    // Name -> shared token. Entries live for the thread's lifetime so that
    // every `for_key` call with the same name observes the same identity.
    static REGISTRY: RefCell<HashMap<Box<str>, Symbol>> = RefCell::new(HashMap::new());
}

/// An opaque, identity-compared token used as a storage key.
///
/// Two symbols are equal only if one is a clone of the other; minting twice
/// with the same description still yields two distinct tokens. Cloning is an
/// `Rc` strong-count bump, and the `Rc` backing keeps symbols (and anything
/// keyed by them) `!Send`/`!Sync`.
#[derive(Clone)]
pub struct Symbol {
    inner: Rc<Inner>,
}

struct Inner {
    description: Option<Box<str>>,
    // Set only by `for_key`; makes the description double as the registry name.
    registered: bool,
}

impl Symbol {
    /// Mint a fresh token with no description. Every call returns a new
    /// identity; only clones of the returned value compare equal to it.
    pub fn new() -> Self {
        Self::mint(None, false)
    }

    /// Mint a fresh token carrying a diagnostic description. The description
    /// takes no part in identity.
    pub fn with_description(description: impl Into<Box<str>>) -> Self {
        Self::mint(Some(description.into()), false)
    }

    /// Look up `name` in this thread's registry, minting and registering a
    /// token on first use. Repeated calls with the same name on one thread
    /// return the same token; plain mints are never returned.
    pub fn for_key(name: &str) -> Self {
        REGISTRY.with(|registry| {
            let mut registry = registry.borrow_mut();
            if let Some(existing) = registry.get(name) {
                return existing.clone();
            }
            let minted = Self::mint(Some(name.into()), true);
            registry.insert(name.into(), minted.clone());
            minted
        })
    }

    fn mint(description: Option<Box<str>>, registered: bool) -> Self {
        Self {
            inner: Rc::new(Inner {
                description,
                registered,
            }),
        }
    }

    /// The diagnostic description, if one was given at mint time. For
    /// registry symbols this is the registry name.
    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// The name this token is registered under, or `None` for plain mints.
    /// Inverse of [`Symbol::for_key`] within one thread.
    pub fn registry_key(&self) -> Option<&str> {
        if self.inner.registered {
            self.description()
        } else {
            None
        }
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (Rc::as_ptr(&self.inner) as usize).hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => write!(f, "Symbol({:?})", description),
            None => f.write_str("Symbol"),
        }
    }
}
