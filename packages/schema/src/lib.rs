pub mod address;
pub mod default_value;
pub mod error;
pub mod node;
pub mod pattern;
pub mod role;
pub mod visitor;

pub use address::{AddressPattern, FieldAddress};
pub use default_value::{shape_default, synthesize};
pub use error::{SchemaError, SchemaResult};
pub use node::{Property, SchemaItems, SchemaNode, SchemaType};
pub use pattern::Pattern;
pub use role::{classify, OperationRole};
pub use visitor::{walk_node, walk_property, Visitor};
