//! # Formweave Evaluator
//!
//! Renders schema-driven repeating lists into a virtual form tree.
//!
//! ## Purpose
//!
//! The evaluator is the read side of the engine: given an array schema and
//! the current backing collection, it composes one item view per entry
//! (header, operation controls, content), threads the addition control in at
//! index 0 only, and emits a placeholder when the collection is empty.
//!
//! ## Determinism
//!
//! Rendering is a pure function of schema + collection + options. The same
//! inputs always produce the same tree; there is no hidden state, no
//! time/random dependence, and properties render in declaration order.
//!
//! ## Error boundaries
//!
//! A missing or non-array schema is fatal for the render pass
//! ([`EvalError::MissingSchema`]). Everything else degrades locally: an index
//! without an item schema is skipped with a warning, and an entry whose value
//! synthesized to nothing still renders.

pub mod composer;
pub mod recursion;
pub mod renderer;
pub mod validator;
pub mod vdom;

#[cfg(test)]
mod tests_composer;

#[cfg(test)]
mod tests_renderer;

pub use composer::{ComposerOptions, ItemComposer, ItemViews};
pub use recursion::{FieldRenderer, RecursionOptions};
pub use renderer::{EvalError, EvalResult, ListRenderer};
pub use validator::{ValidationLevel, ValidationWarning, Validator};
pub use vdom::VNode;
