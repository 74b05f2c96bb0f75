//! # Collection Mutations
//!
//! Structural operations on the backing collection.
//!
//! ## Semantics
//!
//! - Item identity is purely positional: indices are renumbered after every
//!   structural change and there is no stable per-item id.
//! - Indices are derived from the current render state and every mutation is
//!   synchronous, so an index cannot go stale within one operation. An
//!   out-of-range index is therefore a programming slip, not a runtime
//!   condition: the operation is a silent no-op, never an error.
//! - Boundary moves (`MoveUp` at the head, `MoveDown` at the tail) are
//!   likewise no-ops.

use crate::store::ArrayStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structural operations over the backing collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArrayOp {
    /// Insert at the tail
    Push { value: Value },

    /// Insert at the head, shifting all existing indices by one
    Unshift { value: Value },

    /// Delete the entry at `index`
    Remove { index: usize },

    /// Duplicate the entry at `index`, inserting the copy immediately after
    Copy { index: usize },

    /// Swap the entry at `index` with its predecessor
    MoveUp { index: usize },

    /// Swap the entry at `index` with its successor
    MoveDown { index: usize },
}

/// Operation kind carried by a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpKind {
    Add,
    Remove,
    Copy,
    MoveUp,
    MoveDown,
}

/// The notification an applied operation owes its observer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub kind: OpKind,
    /// Insertions report where the new entry landed; every other kind
    /// reports the operand index.
    pub index: usize,
}

/// Result of applying an operation to a store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Changed(Notification),
    Noop,
}

impl ArrayOp {
    /// Apply the operation to `store`
    pub fn apply<S: ArrayStore>(&self, store: &mut S) -> Applied {
        match self {
            ArrayOp::Push { value } => {
                store.push(value.clone());
                Applied::Changed(Notification {
                    kind: OpKind::Add,
                    index: store.len() - 1,
                })
            }

            ArrayOp::Unshift { value } => {
                store.unshift(value.clone());
                Applied::Changed(Notification {
                    kind: OpKind::Add,
                    index: 0,
                })
            }

            ArrayOp::Remove { index } => {
                if *index >= store.len() {
                    return Applied::Noop;
                }
                store.remove(*index);
                Applied::Changed(Notification {
                    kind: OpKind::Remove,
                    index: *index,
                })
            }

            ArrayOp::Copy { index } => {
                let Some(value) = store.get(*index).cloned() else {
                    return Applied::Noop;
                };
                store.insert(*index + 1, value);
                Applied::Changed(Notification {
                    kind: OpKind::Copy,
                    index: *index,
                })
            }

            ArrayOp::MoveUp { index } => {
                if *index == 0 || *index >= store.len() {
                    return Applied::Noop;
                }
                store.swap(*index, *index - 1);
                Applied::Changed(Notification {
                    kind: OpKind::MoveUp,
                    index: *index,
                })
            }

            ArrayOp::MoveDown { index } => {
                if *index + 1 >= store.len() {
                    return Applied::Noop;
                }
                store.swap(*index, *index + 1);
                Applied::Changed(Notification {
                    kind: OpKind::MoveDown,
                    index: *index,
                })
            }
        }
    }
}
