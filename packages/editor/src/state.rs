//! # Editor State Snapshot
//!
//! Read-only snapshot of the editor state the derived views work from.
//! The rest of the editor (history, persistence, input handling) produces
//! these snapshots; this crate only reads them.

use crate::composer::{ViewportOverrides, DEFAULT_VIEWPORT};
use crate::element::Element;
use crate::styles::StyleMap;
use crate::EditorError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    /// Base (default viewport) elements
    #[serde(default)]
    pub elements: Vec<Element>,

    /// Override elements per non-default viewport
    #[serde(default)]
    pub alternative_viewports: ViewportOverrides,

    #[serde(default)]
    pub ui: UiState,

    /// Flat attribute rows (`className`, `style`, ...)
    #[serde(default)]
    pub attributes: Vec<ElementAttribute>,

    /// Selector table used to resolve class names into styles
    #[serde(default)]
    pub css_selectors: Vec<CssSelector>,

    #[serde(default)]
    pub assets: Assets,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub selected: Selection,
}

/// Current editor selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    #[serde(default = "default_viewport")]
    pub viewport: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

fn default_viewport() -> String {
    DEFAULT_VIEWPORT.to_string()
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            element: None,
            page: None,
            image: None,
        }
    }
}

/// One attribute row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementAttribute {
    pub element_id: String,
    pub attr_name: String,
    #[serde(default)]
    pub attr_value: Value,
}

impl ElementAttribute {
    pub fn new(element_id: impl Into<String>, name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            element_id: element_id.into(),
            attr_name: name.into(),
            attr_value: value.into(),
        }
    }
}

/// Selector table entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CssSelector {
    pub selector: String,
    #[serde(default)]
    pub styles: StyleMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assets {
    #[serde(default)]
    pub images: Vec<ImageAsset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl EditorState {
    /// Create a state with only base elements
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Default::default()
        }
    }

    /// Parse a JSON snapshot
    pub fn from_json(source: &str) -> Result<Self, EditorError> {
        let state: EditorState = serde_json::from_str(source)?;
        debug!(
            elements = state.elements.len(),
            viewports = state.alternative_viewports.len(),
            "Loaded editor state"
        );
        Ok(state)
    }

    /// Load a JSON snapshot from disk
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Builder: set overrides for a viewport
    pub fn with_viewport_overrides(mut self, viewport: impl Into<String>, overrides: Vec<Element>) -> Self {
        self.alternative_viewports.insert(viewport.into(), overrides);
        self
    }

    /// Builder: select a viewport
    pub fn with_viewport(mut self, viewport: impl Into<String>) -> Self {
        self.ui.selected.viewport = viewport.into();
        self
    }

    /// Attribute rows for one element, in declaration order
    pub fn attributes_for<'a>(&'a self, element_id: &'a str) -> impl Iterator<Item = &'a ElementAttribute> + 'a {
        self.attributes
            .iter()
            .filter(move |attr| attr.element_id == element_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_state() {
        let json = r#"{
            "elements": [
                { "_id": "root", "_page": "home" },
                { "_id": "title", "_parentId": "root", "_page": "home", "type": "h1" }
            ],
            "alternativeViewports": {
                "md": [{ "_id": "title", "_parentId": "root", "_page": "home", "type": "h2" }]
            },
            "ui": { "selected": { "viewport": "md", "element": "title", "page": "home" } },
            "attributes": [
                { "element_id": "title", "attr_name": "className", "attr_value": "heading" }
            ],
            "cssSelectors": [
                { "selector": ".heading", "styles": { "fontSize": "32px" } }
            ],
            "assets": { "images": [{ "_id": "logo", "src": "/logo.png" }] }
        }"#;

        let state = EditorState::from_json(json).unwrap();
        assert_eq!(state.elements.len(), 2);
        assert_eq!(state.alternative_viewports["md"].len(), 1);
        assert_eq!(state.ui.selected.viewport, "md");
        assert_eq!(state.ui.selected.element.as_deref(), Some("title"));
        assert_eq!(state.attributes[0].attr_value, "heading");
        assert_eq!(state.css_selectors[0].styles["fontSize"], "32px");
        assert_eq!(state.assets.images[0].payload["src"], "/logo.png");
    }

    #[test]
    fn test_missing_sections_default() {
        let state = EditorState::from_json("{}").unwrap();
        assert!(state.elements.is_empty());
        assert!(state.alternative_viewports.is_empty());
        assert_eq!(state.ui.selected.viewport, DEFAULT_VIEWPORT);
        assert!(state.ui.selected.element.is_none());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let result = EditorState::from_json("{ \"elements\": 3 }");
        assert!(matches!(result, Err(EditorError::Json(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = EditorState::load(Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(EditorError::Io(_))));
    }

    #[test]
    fn test_attributes_for_filters_by_element() {
        let mut state = EditorState::default();
        state.attributes = vec![
            ElementAttribute::new("a", "className", "x"),
            ElementAttribute::new("b", "className", "y"),
            ElementAttribute::new("a", "style", serde_json::json!({ "color": "red" })),
        ];

        let names: Vec<&str> = state
            .attributes_for("a")
            .map(|attr| attr.attr_name.as_str())
            .collect();
        assert_eq!(names, vec!["className", "style"]);
    }
}
