//! Permission-gated mutation protocol over the backing collection.
//!
//! Gating runs in a fixed order: the caller-level suspension flag first, the
//! field's edit pattern second, and only then the operation itself. `Disabled`
//! admits mutations at this level — the original distinction is between a
//! structurally editable field and one whose interaction is temporarily
//! suspended, and the two are modeled separately.

use crate::mutations::{Applied, ArrayOp, Notification, OpKind};
use crate::store::ArrayStore;
use formweave_schema::{default_value, Pattern, SchemaNode};
use serde_json::Value;
use tracing::{debug, warn};

/// Callbacks fired after each successful structural mutation, one per
/// operation kind. Implementations are free to ignore any of them.
pub trait ArrayEvents {
    fn on_add(&mut self, _index: usize) {}
    fn on_remove(&mut self, _index: usize) {}
    fn on_copy(&mut self, _index: usize) {}
    fn on_move_up(&mut self, _index: usize) {}
    fn on_move_down(&mut self, _index: usize) {}
}

/// Sink for embedders that do not observe mutations
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEvents;

impl ArrayEvents for NullEvents {}

/// What became of a requested operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpOutcome {
    /// The collection changed and the matching event fired
    Applied(Notification),
    /// The permission gate turned the request away before it ran
    Refused,
    /// Boundary or stale-index request; the collection is unchanged
    Noop,
}

/// Owns the mutation protocol for one repeating list
pub struct ArrayController<S: ArrayStore> {
    store: S,
    pattern: Pattern,
    suspended: bool,
    events: Box<dyn ArrayEvents>,
}

impl<S: ArrayStore> ArrayController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            pattern: Pattern::Editable,
            suspended: false,
            events: Box::new(NullEvents),
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_events(mut self, events: Box<dyn ArrayEvents>) -> Self {
        self.events = events;
        self
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn set_pattern(&mut self, pattern: Pattern) {
        self.pattern = pattern;
    }

    /// Temporarily suspend interaction without changing the edit pattern
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn values(&self) -> &[Value] {
        self.store.as_slice()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Run one operation through the gate
    pub fn apply(&mut self, op: ArrayOp) -> OpOutcome {
        if self.suspended {
            debug!(?op, "operations suspended, refusing");
            return OpOutcome::Refused;
        }
        if !self.pattern.allows_mutation() {
            debug!(?op, pattern = ?self.pattern, "pattern forbids structural mutation");
            return OpOutcome::Refused;
        }

        match op.apply(&mut self.store) {
            Applied::Changed(notification) => {
                self.dispatch(notification);
                OpOutcome::Applied(notification)
            }
            Applied::Noop => {
                warn!(?op, len = self.store.len(), "mutation fell outside the collection, ignoring");
                OpOutcome::Noop
            }
        }
    }

    pub fn push(&mut self, value: Value) -> OpOutcome {
        self.apply(ArrayOp::Push { value })
    }

    pub fn unshift(&mut self, value: Value) -> OpOutcome {
        self.apply(ArrayOp::Unshift { value })
    }

    pub fn remove_at(&mut self, index: usize) -> OpOutcome {
        self.apply(ArrayOp::Remove { index })
    }

    pub fn copy_at(&mut self, index: usize) -> OpOutcome {
        self.apply(ArrayOp::Copy { index })
    }

    pub fn move_up(&mut self, index: usize) -> OpOutcome {
        self.apply(ArrayOp::MoveUp { index })
    }

    pub fn move_down(&mut self, index: usize) -> OpOutcome {
        self.apply(ArrayOp::MoveDown { index })
    }

    /// Append a freshly synthesized item. `addition` is the control node
    /// whose explicit default, when present, seeds the new entry.
    pub fn push_default(
        &mut self,
        array_schema: &SchemaNode,
        addition: Option<&SchemaNode>,
    ) -> OpOutcome {
        self.push(synthesized(array_schema, addition))
    }

    /// Prepend a freshly synthesized item
    pub fn unshift_default(
        &mut self,
        array_schema: &SchemaNode,
        addition: Option<&SchemaNode>,
    ) -> OpOutcome {
        self.unshift(synthesized(array_schema, addition))
    }

    fn dispatch(&mut self, notification: Notification) {
        match notification.kind {
            OpKind::Add => self.events.on_add(notification.index),
            OpKind::Remove => self.events.on_remove(notification.index),
            OpKind::Copy => self.events.on_copy(notification.index),
            OpKind::MoveUp => self.events.on_move_up(notification.index),
            OpKind::MoveDown => self.events.on_move_down(notification.index),
        }
    }
}

/// An item with no synthesizable default is still inserted; the hole is
/// represented as JSON null and rendering tolerates it.
fn synthesized(array_schema: &SchemaNode, addition: Option<&SchemaNode>) -> Value {
    let explicit = addition.and_then(|node| node.default.as_ref());
    default_value::synthesize(explicit, Some(array_schema)).unwrap_or(Value::Null)
}
