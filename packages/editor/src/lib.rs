//! # Folio Editor
//!
//! Viewport-aware element derivations for the Folio page editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ state: EditorState snapshot                 │
//! │  - base elements (default viewport)         │
//! │  - override elements per viewport           │
//! │  - selection, attributes, selectors, assets │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ composer: base + overrides → effective list │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ view: selection, page, styles, images       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Base is source of truth**: viewport overrides never mutate it
//! 2. **Flat list, parent ids**: render order is list order
//! 3. **Pure derivation**: same inputs, same output; safe to cache
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_editor::{EditorState, ViewportPipeline};
//!
//! let state = EditorState::load(Path::new("page.json"))?;
//! let mut pipeline = ViewportPipeline::new(state);
//!
//! pipeline.select_viewport("md");
//! let elements = pipeline.effective_elements();
//! ```

mod components;
mod composer;
mod element;
mod errors;
mod pipeline;
mod state;
mod styles;
mod view;

pub use components::{component_models, ComponentCatalog, ComponentDefinition, StaticCatalog};
pub use composer::{compose_viewport_elements, ViewportComposer, ViewportOverrides, DEFAULT_VIEWPORT};
pub use element::Element;
pub use errors::EditorError;
pub use pipeline::ViewportPipeline;
pub use state::{
    Assets, CssSelector, EditorState, ElementAttribute, ImageAsset, Selection, UiState,
};
pub use styles::{initial_styles, resolve_element_styles, ClassSelectorResolver, StyleMap, StyleResolver};
pub use view::{EditorView, SelectedImage};
