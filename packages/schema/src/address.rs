use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dotted path identifying a field region in the externally owned state
/// graph. Segments are field names or collection indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldAddress {
    segments: Vec<String>,
}

impl FieldAddress {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            segments: vec![name.into()],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Address of a named child
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Address of a positional child
    pub fn child_index(&self, index: usize) -> Self {
        self.join(index.to_string())
    }

    /// Pattern matching exactly this address
    pub fn exact(&self) -> AddressPattern {
        AddressPattern {
            base: self.clone(),
            wildcard: false,
        }
    }

    /// Pattern matching every strict descendant of this address (`addr.*`)
    pub fn wildcard(&self) -> AddressPattern {
        AddressPattern {
            base: self.clone(),
            wildcard: true,
        }
    }
}

impl fmt::Display for FieldAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl FromStr for FieldAddress {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SchemaError::Address("empty address".to_string()));
        }
        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(SchemaError::Address(format!("empty segment in '{s}'")));
        }
        if segments.iter().any(|segment| segment == "*") {
            return Err(SchemaError::Address(format!(
                "wildcard segment in address '{s}'; build patterns via FieldAddress::wildcard"
            )));
        }
        Ok(Self { segments })
    }
}

/// A field address with an optional trailing wildcard, selecting either one
/// field or a whole subtree for invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPattern {
    base: FieldAddress,
    wildcard: bool,
}

impl AddressPattern {
    pub fn base(&self) -> &FieldAddress {
        &self.base
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether the pattern selects the given address. A wildcard selects
    /// strict descendants only, never the base field itself.
    pub fn matches(&self, address: &FieldAddress) -> bool {
        let base = self.base.segments();
        let segments = address.segments();
        if self.wildcard {
            segments.len() > base.len() && &segments[..base.len()] == base
        } else {
            segments == base
        }
    }
}

impl fmt::Display for AddressPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wildcard {
            write!(f, "{}.*", self.base)
        } else {
            write!(f, "{}", self.base)
        }
    }
}
