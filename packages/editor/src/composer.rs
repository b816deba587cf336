//! # Viewport Composition
//!
//! Computes the elements the editor shows for the selected viewport.
//!
//! The default viewport owns the base element list. Every other viewport may
//! carry an override list keyed by the same element ids. Composition grafts
//! each override onto a copy of the base list:
//!
//! ```text
//! base:      [A, B(A), C(A), D]
//! overrides: [A', X(A)]
//!
//! A'  → replace A in place
//!     → drop A's base descendants (B, C)
//!     → splice A's override children (X) right after A'
//!
//! result:    [A', X, D]
//! ```
//!
//! Descendants are always collected from the base list, never from the
//! partially composed result, so one graft cannot hide another graft's
//! subtree.

use crate::element::Element;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

/// Id of the viewport that owns the base element list
pub const DEFAULT_VIEWPORT: &str = "xs";

/// Override lists keyed by viewport id
pub type ViewportOverrides = HashMap<String, Vec<Element>>;

/// Overlays per-viewport overrides onto the base element list
#[derive(Debug, Clone)]
pub struct ViewportComposer {
    default_viewport: String,
}

impl ViewportComposer {
    pub fn new() -> Self {
        Self::with_default_viewport(DEFAULT_VIEWPORT)
    }

    /// Use a different id for the base viewport
    pub fn with_default_viewport(viewport: impl Into<String>) -> Self {
        Self {
            default_viewport: viewport.into(),
        }
    }

    pub fn default_viewport(&self) -> &str {
        &self.default_viewport
    }

    pub fn is_default(&self, viewport: &str) -> bool {
        viewport == self.default_viewport
    }

    /// Compute the effective elements for `selected_viewport`
    ///
    /// Returns the base list borrowed when there is nothing to overlay (the
    /// default viewport, or a viewport without overrides). Otherwise returns a
    /// new list; the inputs are never modified.
    #[instrument(skip(self, base, alternative_viewports), fields(base = base.len()))]
    pub fn compose<'a>(
        &self,
        base: &'a [Element],
        alternative_viewports: &ViewportOverrides,
        selected_viewport: &str,
    ) -> Cow<'a, [Element]> {
        if self.is_default(selected_viewport) {
            return Cow::Borrowed(base);
        }

        let overrides = match alternative_viewports.get(selected_viewport) {
            Some(overrides) if !overrides.is_empty() => overrides,
            _ => {
                debug!(viewport = %selected_viewport, "No overrides for viewport, using base elements");
                return Cow::Borrowed(base);
            }
        };

        let index = ParentIndex::new(base);
        let mut result = base.to_vec();

        for override_element in overrides {
            graft(&mut result, override_element, overrides, &index);
        }

        debug!(
            viewport = %selected_viewport,
            overrides = overrides.len(),
            effective = result.len(),
            "Composed viewport elements"
        );

        Cow::Owned(result)
    }
}

impl Default for ViewportComposer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compose with the standard default viewport (`"xs"`)
pub fn compose_viewport_elements<'a>(
    base: &'a [Element],
    alternative_viewports: &ViewportOverrides,
    selected_viewport: &str,
) -> Cow<'a, [Element]> {
    ViewportComposer::new().compose(base, alternative_viewports, selected_viewport)
}

/// Apply one override to the composed list
fn graft(
    result: &mut Vec<Element>,
    override_element: &Element,
    overrides: &[Element],
    index: &ParentIndex<'_>,
) {
    let id = override_element.id.as_str();
    let removed = index.descendants(id);
    let children: Vec<&Element> = overrides
        .iter()
        .filter(|el| el.is_child_of(id) && el.id != id)
        .collect();

    for el in result.iter_mut().filter(|el| el.id == id) {
        *el = override_element.clone();
    }

    // A spliced child may already sit elsewhere in the list (moved under a
    // new parent). Drop the old copy so ids stay unique.
    let spliced: HashSet<&str> = children.iter().map(|el| el.id.as_str()).collect();
    result.retain(|el| {
        let el_id = el.id.as_str();
        !removed.contains(el_id) && !spliced.contains(el_id)
    });

    let Some(position) = result.iter().position(|el| el.id == id) else {
        debug!(element_id = %id, children = children.len(), "Override has no position yet, skipping splice");
        return;
    };

    let at = position + 1;
    result.splice(at..at, children.into_iter().cloned());
}

/// Child ids per parent id, built once over the base list
struct ParentIndex<'a> {
    children: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> ParentIndex<'a> {
    fn new(elements: &'a [Element]) -> Self {
        let mut children: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for el in elements {
            if let Some(parent_id) = el.parent_id.as_deref() {
                children.entry(parent_id).or_default().push(el.id.as_str());
            }
        }
        Self { children }
    }

    /// Transitive descendants of `root` (excluding `root`)
    ///
    /// Terminates on cyclic parent chains.
    fn descendants(&self, root: &str) -> HashSet<&'a str> {
        let mut visited = HashSet::new();
        let mut stack = vec![root];

        while let Some(parent_id) = stack.pop() {
            let Some(children) = self.children.get(parent_id) else {
                continue;
            };
            for &child in children {
                if child != root && visited.insert(child) {
                    stack.push(child);
                }
            }
        }

        visited
    }
}
