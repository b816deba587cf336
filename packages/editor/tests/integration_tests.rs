//! Integration tests for editor crate

use folio_editor::{
    ClassSelectorResolver, ComponentDefinition, EditorState, EditorView, StaticCatalog,
    ViewportComposer, ViewportPipeline,
};
use std::io::Write;

const PAGE_STATE: &str = r#"{
    "elements": [
        { "_id": "page-root", "_page": "landing", "type": "div" },
        { "_id": "hero", "_parentId": "page-root", "_page": "landing", "type": "section" },
        { "_id": "hero-title", "_parentId": "hero", "_page": "landing", "type": "h1" },
        { "_id": "hero-copy", "_parentId": "hero", "_page": "landing", "type": "p" },
        { "_id": "footer", "_parentId": "page-root", "_page": "landing", "type": "footer" },
        { "_id": "blog-root", "_page": "blog", "type": "div" }
    ],
    "alternativeViewports": {
        "md": [
            { "_id": "hero", "_parentId": "page-root", "_page": "landing", "type": "section", "layout": "split" },
            { "_id": "hero-image", "_parentId": "hero", "_page": "landing", "type": "img" },
            { "_id": "hero-title", "_parentId": "hero", "_page": "landing", "type": "h1" }
        ],
        "lg": []
    },
    "ui": { "selected": { "viewport": "xs", "element": "hero", "page": "landing", "image": "banner" } },
    "attributes": [
        { "element_id": "hero", "attr_name": "className", "attr_value": "hero dark" },
        { "element_id": "hero", "attr_name": "style", "attr_value": { "color": "blue" } }
    ],
    "cssSelectors": [
        { "selector": ".hero", "styles": { "display": "flex", "color": "red" } },
        { "selector": ".dark", "styles": { "backgroundColor": "rgba(0, 0, 0, 1)" } }
    ],
    "assets": { "images": [{ "_id": "banner", "src": "/banner.png" }] }
}"#;

fn ids(elements: &[folio_editor::Element]) -> Vec<&str> {
    elements.iter().map(|el| el.id.as_str()).collect()
}

#[test]
fn test_state_lifecycle() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(PAGE_STATE.as_bytes())?;

    let state = EditorState::load(file.path())?;
    assert_eq!(state.elements.len(), 6);

    let view = EditorView::new(&state);
    assert_eq!(view.current_viewport_elements(), state.elements.as_slice());
    Ok(())
}

#[test]
fn test_viewport_switching_through_pipeline() {
    let state = EditorState::from_json(PAGE_STATE).unwrap();
    let mut pipeline = ViewportPipeline::new(state);

    assert_eq!(
        ids(pipeline.effective_elements()),
        vec!["page-root", "hero", "hero-title", "hero-copy", "footer", "blog-root"]
    );

    pipeline.select_viewport("md");
    assert_eq!(
        ids(pipeline.effective_elements()),
        vec!["page-root", "hero", "hero-image", "hero-title", "footer", "blog-root"]
    );

    // Empty override list falls back to base
    pipeline.select_viewport("lg");
    assert_eq!(pipeline.effective_elements().len(), 6);
    assert_eq!(pipeline.compositions(), 3);
}

#[test]
fn test_view_derivations_for_viewport() {
    let state = EditorState::from_json(PAGE_STATE).unwrap().with_viewport("md");
    let view = EditorView::new(&state);

    let hero = view.selected_element().unwrap();
    assert_eq!(hero.payload["layout"], "split");

    let page_ids: Vec<&str> = view
        .selected_page_elements()
        .iter()
        .map(|el| el.id.as_str())
        .collect();
    assert_eq!(
        page_ids,
        vec!["page-root", "hero", "hero-image", "hero-title", "footer"]
    );

    let styles = view.selected_element_styles(&ClassSelectorResolver);
    assert_eq!(styles["display"], "flex");
    assert_eq!(styles["color"], "blue");
    assert_eq!(styles["backgroundColor"], "rgba(0, 0, 0, 1)");
    assert_eq!(styles["position"], "static");

    let image = view.selected_image(None);
    assert_eq!(image.image.unwrap().payload["src"], "/banner.png");
    assert_eq!(image.image_src_id, "");

    let catalog = StaticCatalog::new(vec![ComponentDefinition::new("Box")]);
    assert_eq!(view.component_models(&catalog, None).len(), 1);
}

#[test]
fn test_custom_default_viewport() {
    let state = EditorState::from_json(PAGE_STATE).unwrap().with_viewport("md");
    let composer = ViewportComposer::with_default_viewport("md");

    let view = EditorView::with_composer(&state, &composer);
    assert_eq!(view.current_viewport_elements().len(), 6);
    assert_eq!(view.into_elements(), state.elements);
}

#[test]
fn test_effective_elements_serialize_with_wire_names() {
    let state = EditorState::from_json(PAGE_STATE).unwrap().with_viewport("md");
    let elements = EditorView::new(&state).into_elements();

    let json = serde_json::to_value(&elements).unwrap();
    assert_eq!(json[2]["_id"], "hero-image");
    assert_eq!(json[2]["_parentId"], "hero");
    assert_eq!(json[2]["type"], "img");
    assert!(json[0].get("_parentId").is_none());
}
