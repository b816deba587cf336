//! # Style Resolution
//!
//! Styles shown in the editor's style panel are layered, later layers
//! winning:
//!
//! 1. [`initial_styles`]
//! 2. styles derived from the element's `className` via a [`StyleResolver`]
//! 3. the element's inline `style` attribute

use crate::state::{CssSelector, EditorState};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// CSS property (camelCase) → value
pub type StyleMap = BTreeMap<String, String>;

/// Styles every element starts from
pub fn initial_styles() -> StyleMap {
    [
        ("display", "block"),
        ("position", "static"),
        ("flexDirection", "row"),
        ("alignItems", "flex-start"),
        ("justifyContent", "flex-start"),
        ("color", "rgba(0, 0, 0, 1)"),
        ("backgroundColor", "rgba(255, 255, 255, 1)"),
    ]
    .into_iter()
    .map(|(property, value)| (property.to_string(), value.to_string()))
    .collect()
}

/// Turns a class string and a selector table into styles
pub trait StyleResolver {
    fn resolve(&self, class_name: &str, selectors: &[CssSelector]) -> StyleMap;
}

impl<F> StyleResolver for F
where
    F: Fn(&str, &[CssSelector]) -> StyleMap,
{
    fn resolve(&self, class_name: &str, selectors: &[CssSelector]) -> StyleMap {
        self(class_name, selectors)
    }
}

/// Plain class lookup: `.name` or `name` selectors, applied in class order
#[derive(Debug, Default, Clone, Copy)]
pub struct ClassSelectorResolver;

impl StyleResolver for ClassSelectorResolver {
    fn resolve(&self, class_name: &str, selectors: &[CssSelector]) -> StyleMap {
        let mut styles = StyleMap::new();

        for class in class_name.split_whitespace() {
            for selector in selectors.iter().filter(|s| matches_class(&s.selector, class)) {
                styles.extend(
                    selector
                        .styles
                        .iter()
                        .map(|(property, value)| (property.clone(), value.clone())),
                );
            }
        }

        styles
    }
}

fn matches_class(selector: &str, class: &str) -> bool {
    selector.trim().strip_prefix('.').unwrap_or(selector.trim()) == class
}

/// Resolve the layered styles for one element
///
/// With no element, only the defaults and the resolver's output for an
/// empty class string apply.
pub fn resolve_element_styles(
    state: &EditorState,
    element_id: Option<&str>,
    resolver: &dyn StyleResolver,
) -> StyleMap {
    // Later rows with the same name win
    let attributes: HashMap<&str, &Value> = element_id
        .map(|id| {
            state
                .attributes_for(id)
                .map(|attr| (attr.attr_name.as_str(), &attr.attr_value))
                .collect()
        })
        .unwrap_or_default();

    let class_name = attributes
        .get("className")
        .and_then(|value| value.as_str())
        .unwrap_or("");

    let mut styles = initial_styles();
    styles.extend(resolver.resolve(class_name, &state.css_selectors));

    if let Some(Value::Object(inline)) = attributes.get("style") {
        for (property, value) in inline {
            if let Some(value) = style_value(value) {
                styles.insert(property.clone(), value);
            }
        }
    }

    debug!(element_id = ?element_id, class_name = %class_name, properties = styles.len(), "Resolved element styles");

    styles
}

fn style_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
