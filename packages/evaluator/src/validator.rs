/// Development mode validators for detecting unstable schema patterns
use formweave_schema::{
    classify, walk_node, walk_property, OperationRole, Property, SchemaNode, SchemaType, Visitor,
};

/// Validation warning level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLevel {
    /// Warning that should be addressed
    Warning,
    /// Error that will cause issues
    Error,
}

/// Validation warning
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    pub level: ValidationLevel,
    pub message: String,
    /// Dotted property path from the validated root, empty at the root
    pub path: String,
}

/// Validator for schema trees
pub struct Validator {
    /// Whether dev mode is enabled
    dev_mode: bool,
    path: Vec<String>,
    warnings: Vec<ValidationWarning>,
}

impl Validator {
    pub fn new(dev_mode: bool) -> Self {
        Self {
            dev_mode,
            path: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Validate a schema tree, returning every structural complaint found
    pub fn validate(&mut self, schema: &SchemaNode) -> Vec<ValidationWarning> {
        self.warnings.clear();
        self.path.clear();

        if !self.dev_mode {
            return vec![];
        }

        self.visit_node(schema);
        self.warnings.clone()
    }

    fn push(&mut self, level: ValidationLevel, message: String) {
        self.warnings.push(ValidationWarning {
            level,
            message,
            path: self.path.join("."),
        });
    }

    fn check_node(&mut self, node: &SchemaNode) {
        if node.items.is_some() && node.ty != SchemaType::Array {
            self.push(
                ValidationLevel::Error,
                format!("'items' declared on a {:?}-typed node", node.ty),
            );
        }
        if !node.properties.is_empty()
            && !matches!(node.ty, SchemaType::Object | SchemaType::Void)
        {
            self.push(
                ValidationLevel::Error,
                format!("'properties' declared on a {:?}-typed node", node.ty),
            );
        }
        if let Some(component) = node.component.as_deref() {
            if marker_count(component) > 1 {
                self.push(
                    ValidationLevel::Warning,
                    format!(
                        "component '{component}' contains several role markers; \
                         resolves to {:?} by priority",
                        classify(node)
                    ),
                );
            }
        }
        if let (Some(role), Some(component)) = (node.role, node.component.as_deref()) {
            let marker_role = classify(&SchemaNode {
                role: None,
                ..node.clone()
            });
            if marker_role != role && marker_role != OperationRole::Content {
                self.push(
                    ValidationLevel::Warning,
                    format!(
                        "explicit role {role:?} shadows marker classification \
                         {marker_role:?} of component '{component}'"
                    ),
                );
            }
        }
    }
}

fn marker_count(component: &str) -> usize {
    ["Addition", "Remove", "Copy", "MoveDown", "MoveUp", "Index"]
        .iter()
        .filter(|marker| component.contains(*marker))
        .count()
}

impl Visitor for Validator {
    fn visit_node(&mut self, node: &SchemaNode) {
        self.check_node(node);
        walk_node(self, node);
    }

    fn visit_property(&mut self, property: &Property) {
        self.path.push(property.name.clone());
        walk_property(self, property);
        self.path.pop();
    }
}
