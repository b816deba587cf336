//! Component definitions offered in the editor's insert panel

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One insertable component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDefinition {
    /// Component type, e.g. `"Button"`
    #[serde(rename = "type")]
    pub component_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Default props, icon, category, ...
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl ComponentDefinition {
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            label: None,
            payload: Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Source of the built-in component definitions
pub trait ComponentCatalog {
    fn base_components(&self) -> Vec<ComponentDefinition>;
}

/// Catalog backed by a fixed list
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    components: Vec<ComponentDefinition>,
}

impl StaticCatalog {
    pub fn new(components: Vec<ComponentDefinition>) -> Self {
        Self { components }
    }
}

impl ComponentCatalog for StaticCatalog {
    fn base_components(&self) -> Vec<ComponentDefinition> {
        self.components.clone()
    }
}

/// Built-ins first, then caller-supplied definitions
pub fn component_models(
    catalog: &dyn ComponentCatalog,
    custom: Option<&[ComponentDefinition]>,
) -> Vec<ComponentDefinition> {
    let mut models = catalog.base_components();
    models.extend(custom.unwrap_or_default().iter().cloned());
    models
}
