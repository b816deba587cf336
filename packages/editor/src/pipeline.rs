//! # Viewport Pipeline
//!
//! Owns an [`EditorState`] and keeps the composed viewport elements cached
//! between edits.
//!
//! The cache is dropped only when an input of the composition changes:
//! - the base elements
//! - the overrides of the selected viewport
//! - the selected viewport
//!
//! Element, page and image selection never touch it.

use crate::composer::ViewportComposer;
use crate::element::Element;
use crate::state::EditorState;
use crate::view::EditorView;
use std::borrow::Cow;
use tracing::debug;

/// Manages the state → effective elements derivation
pub struct ViewportPipeline {
    state: EditorState,
    composer: ViewportComposer,
    effective: Option<Effective>,
    compositions: u64,
}

enum Effective {
    /// Composition was the identity
    Base,
    Composed(Vec<Element>),
}

impl ViewportPipeline {
    /// Create pipeline for state
    pub fn new(state: EditorState) -> Self {
        Self::with_composer(state, ViewportComposer::new())
    }

    pub fn with_composer(state: EditorState, composer: ViewportComposer) -> Self {
        Self {
            state,
            composer,
            effective: None,
            compositions: 0,
        }
    }

    /// Effective elements for the selected viewport (cached)
    pub fn effective_elements(&mut self) -> &[Element] {
        self.ensure_composed();
        match &self.effective {
            Some(Effective::Composed(elements)) => elements,
            _ => &self.state.elements,
        }
    }

    /// Derived view backed by the cached elements
    pub fn view(&mut self) -> EditorView<'_> {
        self.ensure_composed();
        let elements = match &self.effective {
            Some(Effective::Composed(elements)) => elements.as_slice(),
            _ => self.state.elements.as_slice(),
        };
        EditorView::from_parts(&self.state, elements)
    }

    fn ensure_composed(&mut self) {
        if self.effective.is_some() {
            return;
        }

        let composed = self.composer.compose(
            &self.state.elements,
            &self.state.alternative_viewports,
            &self.state.ui.selected.viewport,
        );
        self.compositions += 1;

        self.effective = Some(match composed {
            Cow::Borrowed(_) => Effective::Base,
            Cow::Owned(elements) => Effective::Composed(elements),
        });
    }

    /// Replace the base elements
    pub fn set_elements(&mut self, elements: Vec<Element>) {
        self.state.elements = elements;
        self.invalidate("elements");
    }

    /// Replace the overrides of one viewport
    pub fn set_viewport_overrides(&mut self, viewport: impl Into<String>, overrides: Vec<Element>) {
        let viewport = viewport.into();
        let selected = viewport == self.state.ui.selected.viewport;
        self.state.alternative_viewports.insert(viewport, overrides);
        if selected {
            self.invalidate("overrides");
        }
    }

    /// Drop the overrides of one viewport
    pub fn remove_viewport_overrides(&mut self, viewport: &str) -> Option<Vec<Element>> {
        let removed = self.state.alternative_viewports.remove(viewport);
        if removed.is_some() && viewport == self.state.ui.selected.viewport {
            self.invalidate("overrides");
        }
        removed
    }

    pub fn select_viewport(&mut self, viewport: impl Into<String>) {
        let viewport = viewport.into();
        if viewport != self.state.ui.selected.viewport {
            self.state.ui.selected.viewport = viewport;
            self.invalidate("viewport");
        }
    }

    pub fn select_element(&mut self, element_id: Option<String>) {
        self.state.ui.selected.element = element_id;
    }

    pub fn select_page(&mut self, page_id: Option<String>) {
        self.state.ui.selected.page = page_id;
    }

    pub fn select_image(&mut self, image_id: Option<String>) {
        self.state.ui.selected.image = image_id;
    }

    /// Arbitrary state edit; always drops the cache
    pub fn update_state(&mut self, f: impl FnOnce(&mut EditorState)) {
        f(&mut self.state);
        self.invalidate("state");
    }

    /// Get current state
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn into_state(self) -> EditorState {
        self.state
    }

    /// Number of compositions run so far
    pub fn compositions(&self) -> u64 {
        self.compositions
    }

    /// Force recomposition on next access
    pub fn clear_cache(&mut self) {
        self.effective = None;
    }

    fn invalidate(&mut self, reason: &'static str) {
        if self.effective.take().is_some() {
            debug!(reason, "Invalidated composed viewport elements");
        }
    }
}
