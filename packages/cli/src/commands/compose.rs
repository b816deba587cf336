use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use folio_editor::{EditorState, Element, ViewportComposer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Editor state file, or a directory of state files
    pub input: PathBuf,

    /// Viewport to compose (defaults to each state's selected viewport)
    #[arg(short, long)]
    pub viewport: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn compose(args: ComposeArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let composer = ViewportComposer::with_default_viewport(config.default_viewport.as_str());
    let json = args.format == "json";

    let files = if args.input.is_file() {
        vec![args.input.clone()]
    } else if args.input.is_dir() {
        find_state_files(&args.input)
    } else {
        return Err(anyhow!(
            "Input path does not exist: {}",
            args.input.display()
        ));
    };

    if !json {
        println!("🧩 {} Folio Composer", "Starting".green().bold());
        println!("   Input: {}", args.input.display());
        println!("   Found {} state files", files.len());
        println!();
    }

    for file in &files {
        compose_file(file, &args, &composer, json)?;
    }

    if !json {
        println!("✨ {} Composition complete!", "Done".green().bold());
    }

    Ok(())
}

fn compose_file(path: &Path, args: &ComposeArgs, composer: &ViewportComposer, json: bool) -> Result<()> {
    let state = EditorState::load(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;

    let viewport = args
        .viewport
        .as_deref()
        .unwrap_or(&state.ui.selected.viewport);
    debug!(file = %path.display(), viewport = %viewport, "Composing state file");

    let elements = composer.compose(&state.elements, &state.alternative_viewports, viewport);

    if json {
        println!("{}", serde_json::to_string_pretty(elements.as_ref())?);
        return Ok(());
    }

    let label = if composer.is_default(viewport) {
        format!("{} (base)", viewport)
    } else {
        viewport.to_string()
    };
    println!("{} [{}]", path.display(), label.cyan());
    print_outline(&elements);
    println!();

    Ok(())
}

/// Indent each element under the nearest parent printed before it
fn print_outline(elements: &[Element]) {
    let mut depths: HashMap<&str, usize> = HashMap::new();

    for el in elements {
        let depth = el
            .parent_id
            .as_deref()
            .and_then(|parent| depths.get(parent))
            .map(|d| d + 1)
            .unwrap_or(0);
        depths.insert(el.id.as_str(), depth);

        let kind = el
            .payload
            .get("type")
            .and_then(|t| t.as_str())
            .unwrap_or("element");

        println!(
            "  {}{} {}",
            "  ".repeat(depth),
            el.id,
            format!("<{}>", kind).dimmed()
        );
    }
}

fn find_state_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false))
        .filter(|path| path.file_name().map(|n| n != crate::config::DEFAULT_CONFIG_NAME).unwrap_or(true))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_state_files_skips_config_and_other_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::write(dir.path().join(crate::config::DEFAULT_CONFIG_NAME), "{}").unwrap();

        let files = find_state_files(dir.path());
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_compose_missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let args = ComposeArgs {
            input: dir.path().join("missing.json"),
            viewport: None,
            format: "text".to_string(),
        };

        assert!(compose(args, dir.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_compose_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = dir.path().join("page.json");
        std::fs::write(
            &state,
            r#"{
                "elements": [{ "_id": "a", "_page": "home" }],
                "alternativeViewports": { "md": [{ "_id": "a", "_page": "home", "type": "section" }] }
            }"#,
        )
        .unwrap();

        let args = ComposeArgs {
            input: state,
            viewport: Some("md".to_string()),
            format: "json".to_string(),
        };

        assert!(compose(args, dir.path().to_str().unwrap()).is_ok());
    }
}
