//! # Formweave Editor
//!
//! The write side of the repeating-list engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: declarative field model             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: collection lifecycle + mutations    │
//! │  - Apply gated structural operations        │
//! │  - Synthesize defaults for insertions       │
//! │  - Notify observers per operation kind      │
//! │  - Coordinate mutate → render pipeline      │
//! │  - Resolve trigger-driven subschemas        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator: schema + collection → VDOM       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Single writer**: the controller is the only component that mutates
//!    the backing collection; renderers are pure readers.
//! 2. **Synchronous, single-threaded**: every operation runs to completion
//!    or is refused before starting; mutations never interleave.
//! 3. **Silent degradation**: stale indices and boundary moves are no-ops;
//!    only a missing schema is fatal.
//! 4. **Explicit reactivity boundary**: re-rendering is pulled through the
//!    pipeline after each mutation, not pushed by hidden subscriptions.

mod controller;
mod dynamic;
mod errors;
mod mutations;
mod pipeline;
mod store;

pub use controller::{ArrayController, ArrayEvents, NullEvents, OpOutcome};
pub use dynamic::{FieldGraph, ResolverState, SubschemaResolver};
pub use errors::EditorError;
pub use mutations::{Applied, ArrayOp, Notification, OpKind};
pub use pipeline::{Pipeline, PipelineResult};
pub use store::{ArrayStore, ValueList};

// Re-export common types for convenience
pub use formweave_evaluator::VNode;
pub use formweave_schema::{Pattern, SchemaNode};
