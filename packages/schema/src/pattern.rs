use serde::{Deserialize, Serialize};

/// Edit capability of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum Pattern {
    #[default]
    Editable,
    /// Mutation controls still render, but interaction is blocked at the
    /// click boundary rather than by hiding them
    Disabled,
    ReadOnly,
}

impl Pattern {
    /// Whether structural mutation UI is admitted at all
    pub fn allows_mutation(self) -> bool {
        matches!(self, Pattern::Editable | Pattern::Disabled)
    }
}
