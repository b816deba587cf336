//! # Editor View
//!
//! Read-only derivations over one [`EditorState`] snapshot. The composed
//! viewport elements are computed once when the view is built; every lookup
//! afterwards reads from them.
//!
//! ```rust,ignore
//! use folio_editor::{EditorState, EditorView, ClassSelectorResolver};
//!
//! let state = EditorState::load(path)?;
//! let view = EditorView::new(&state);
//!
//! let element = view.selected_element();
//! let styles = view.selected_element_styles(&ClassSelectorResolver);
//! ```

use crate::components::{self, ComponentCatalog, ComponentDefinition};
use crate::composer::ViewportComposer;
use crate::element::Element;
use crate::state::{EditorState, ImageAsset};
use crate::styles::{self, StyleMap, StyleResolver};
use std::borrow::Cow;

pub struct EditorView<'a> {
    state: &'a EditorState,
    elements: Cow<'a, [Element]>,
}

/// Image lookup result
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage<'a> {
    /// Matching asset, if any
    pub image: Option<&'a ImageAsset>,

    /// The explicitly requested id, or `""` when the selection was used
    pub image_src_id: String,
}

impl<'a> EditorView<'a> {
    pub fn new(state: &'a EditorState) -> Self {
        Self::with_composer(state, &ViewportComposer::new())
    }

    pub fn with_composer(state: &'a EditorState, composer: &ViewportComposer) -> Self {
        let elements = composer.compose(
            &state.elements,
            &state.alternative_viewports,
            &state.ui.selected.viewport,
        );
        Self { state, elements }
    }

    /// Build a view over elements that were already composed
    pub(crate) fn from_parts(state: &'a EditorState, elements: &'a [Element]) -> Self {
        Self {
            state,
            elements: Cow::Borrowed(elements),
        }
    }

    pub fn state(&self) -> &'a EditorState {
        self.state
    }

    /// Effective elements for the selected viewport
    pub fn current_viewport_elements(&self) -> &[Element] {
        &self.elements
    }

    /// The selected element as it appears in the selected viewport
    pub fn selected_element(&self) -> Option<&Element> {
        let id = self.state.ui.selected.element.as_deref()?;
        self.elements.iter().find(|el| el.id == id)
    }

    /// Effective elements on the selected page, in render order
    pub fn selected_page_elements(&self) -> Vec<&Element> {
        let Some(page) = self.state.ui.selected.page.as_deref() else {
            return Vec::new();
        };
        self.elements.iter().filter(|el| el.page_id == page).collect()
    }

    /// Layered styles for the selected element
    pub fn selected_element_styles(&self, resolver: &dyn StyleResolver) -> StyleMap {
        styles::resolve_element_styles(
            self.state,
            self.state.ui.selected.element.as_deref(),
            resolver,
        )
    }

    /// Look up `image_id`, or the selected image when `None`
    pub fn selected_image(&self, image_id: Option<&str>) -> SelectedImage<'a> {
        let state = self.state;
        let lookup = image_id.or(state.ui.selected.image.as_deref());
        let image = lookup.and_then(|id| state.assets.images.iter().find(|image| image.id == id));

        SelectedImage {
            image,
            image_src_id: image_id.unwrap_or_default().to_string(),
        }
    }

    pub fn component_models(
        &self,
        catalog: &dyn ComponentCatalog,
        custom: Option<&[ComponentDefinition]>,
    ) -> Vec<ComponentDefinition> {
        components::component_models(catalog, custom)
    }

    /// Take ownership of the effective elements
    pub fn into_elements(self) -> Vec<Element> {
        self.elements.into_owned()
    }
}
