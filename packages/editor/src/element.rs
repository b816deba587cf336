//! # Page Elements
//!
//! A page is a flat, ordered list of elements. Each element points at its
//! logical parent by id, so the tree is implicit and render order is the list
//! order, not a depth-first walk.
//!
//! ## Wire format
//!
//! ```json
//! { "_id": "hero", "_parentId": "root", "_page": "home", "type": "div" }
//! ```
//!
//! `_parentId` may be missing, `null` or `""` for page roots. Every other key
//! is kept as opaque payload and written back unchanged.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Node in the flattened page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Stable id, shared by the base element and its viewport overrides
    #[serde(rename = "_id")]
    pub id: String,

    /// Logical parent (None for page roots)
    #[serde(
        rename = "_parentId",
        default,
        deserialize_with = "deserialize_parent_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<String>,

    /// Page this element belongs to
    #[serde(rename = "_page", default)]
    pub page_id: String,

    /// Everything else (type, content, editor metadata)
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

impl Element {
    /// Create a page root
    pub fn new(id: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            page_id: page_id.into(),
            payload: Map::new(),
        }
    }

    /// Set the parent id
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        let parent_id = parent_id.into();
        self.parent_id = (!parent_id.is_empty()).then_some(parent_id);
        self
    }

    /// Attach an opaque payload field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// True if `parent_id` names this element's parent
    pub fn is_child_of(&self, parent_id: &str) -> bool {
        self.parent_id.as_deref() == Some(parent_id)
    }
}

/// Treat `""` and `null` the same as a missing parent
fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let parent_id = Option::<String>::deserialize(deserializer)?;
    Ok(parent_id.filter(|id| !id.is_empty()))
}
