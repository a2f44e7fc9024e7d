//! Write-once policy violation error.

use crate::symbol::Symbol;
use thiserror::Error;

/// Returned by `set` on a non-reassignable storage when the key is already
/// bound to a different value. The storage is left untouched: the bound
/// value of a write-once entry never changes while the binding lives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot reassign write-once binding for {key:?}")]
pub struct ReassignmentError {
    key: Symbol,
}

impl ReassignmentError {
    pub(crate) fn new(key: Symbol) -> Self {
        Self { key }
    }

    /// The symbol whose binding the rejected `set` tried to change.
    pub fn key(&self) -> &Symbol {
        &self.key
    }
}
