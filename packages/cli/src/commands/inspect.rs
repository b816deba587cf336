use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use folio_editor::{
    ClassSelectorResolver, ComponentDefinition, EditorState, EditorView, StaticCatalog,
    ViewportComposer, ViewportPipeline,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Editor state file
    pub input: PathBuf,

    /// Viewport to inspect (overrides the saved selection)
    #[arg(short, long)]
    pub viewport: Option<String>,

    /// Element to select (overrides the saved selection)
    #[arg(short, long)]
    pub element: Option<String>,

    /// Page to select (overrides the saved selection)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Image id to look up (defaults to the selected image)
    #[arg(long)]
    pub image: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

/// Components every project can insert
pub fn builtin_catalog() -> StaticCatalog {
    StaticCatalog::new(
        ["Box", "Typography", "Button", "Image", "Link", "List"]
            .into_iter()
            .map(|kind| ComponentDefinition::new(kind).with_label(kind))
            .collect(),
    )
}

pub fn inspect(args: InspectArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let custom = config.load_custom_components(cwd)?;

    let state = EditorState::load(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let composer = ViewportComposer::with_default_viewport(config.default_viewport.as_str());
    let mut pipeline = ViewportPipeline::with_composer(state, composer);

    if let Some(viewport) = args.viewport.clone() {
        pipeline.select_viewport(viewport);
    }
    if args.element.is_some() {
        pipeline.select_element(args.element.clone());
    }
    if args.page.is_some() {
        pipeline.select_page(args.page.clone());
    }

    let view = pipeline.view();
    let catalog = builtin_catalog();

    if args.format == "json" {
        print_json(&view, &args, &catalog, &custom)?;
    } else {
        print_text(&view, &args, &catalog, &custom);
    }

    Ok(())
}

fn print_json(
    view: &EditorView<'_>,
    args: &InspectArgs,
    catalog: &StaticCatalog,
    custom: &[ComponentDefinition],
) -> Result<()> {
    let selected = view.state().ui.selected.clone();
    let image = view.selected_image(args.image.as_deref());

    let report = json!({
        "viewport": selected.viewport,
        "elements": view.current_viewport_elements(),
        "selectedElement": view.selected_element(),
        "pageElements": view
            .selected_page_elements()
            .iter()
            .map(|el| el.id.as_str())
            .collect::<Vec<_>>(),
        "styles": view.selected_element_styles(&ClassSelectorResolver),
        "image": image.image,
        "imageSrcId": image.image_src_id,
        "components": view.component_models(catalog, Some(custom)),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_text(
    view: &EditorView<'_>,
    args: &InspectArgs,
    catalog: &StaticCatalog,
    custom: &[ComponentDefinition],
) {
    let selected = &view.state().ui.selected;

    println!("🔍 {} {}", "Inspecting".green().bold(), args.input.display());
    println!("   Viewport: {}", selected.viewport.cyan());
    println!(
        "   Elements: {}",
        view.current_viewport_elements().len()
    );
    println!();

    match view.selected_element() {
        Some(el) => println!("{} {}", "Selected element:".bold(), el.id),
        None => println!("{} {}", "Selected element:".bold(), "none".dimmed()),
    }

    match selected.page.as_deref() {
        Some(page) => {
            let page_elements = view.selected_page_elements();
            println!("{} {} ({} elements)", "Page:".bold(), page, page_elements.len());
            for el in page_elements {
                println!("  {} {}", "•".dimmed(), el.id);
            }
        }
        None => println!("{} {}", "Page:".bold(), "none".dimmed()),
    }

    println!("{}", "Styles:".bold());
    for (property, value) in view.selected_element_styles(&ClassSelectorResolver) {
        println!("  {}: {}", property, value);
    }

    let image = view.selected_image(args.image.as_deref());
    match image.image {
        Some(asset) => println!("{} {}", "Image:".bold(), asset.id),
        None => println!("{} {}", "Image:".bold(), "none".dimmed()),
    }

    let models = view.component_models(catalog, Some(custom));
    let names: Vec<&str> = models.iter().map(|m| m.component_type.as_str()).collect();
    println!("{} {}", "Components:".bold(), names.join(", "));
}
