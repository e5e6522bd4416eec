//! boxgrid CLI
//!
//! Lays out a JSON box document and prints it as a character grid.
//!
//! ```text
//! boxgrid page.json                 # render into an 80x24 grid
//! boxgrid --width 40 --height 12 -  # read the document from stdin
//! boxgrid --dump-layout page.json   # print the laid-out box tree as JSON
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use boxgrid_css::{
    CharGrid, DocumentSpec, LayoutTree, Node, RawValue, Style, layout_tree, render,
};
use clap::Parser;
use owo_colors::OwoColorize;

/// boxgrid: block layout rendered onto a character grid
#[derive(Parser, Debug)]
#[command(name = "boxgrid")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render the built-in demo box
    boxgrid

    # Render a document with a dotted background
    boxgrid --fill . page.json

    # Pipe a document in
    echo '{"name":"box","style":{"border-width":1,"height":3}}' | boxgrid -
"#)]
struct Cli {
    /// JSON document to render, or "-" for stdin
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Viewport width in cells
    #[arg(long, default_value = "80")]
    width: usize,

    /// Viewport height in cells
    #[arg(long, default_value = "24")]
    height: usize,

    /// Character for cells no box paints
    #[arg(long, default_value = " ")]
    fill: char,

    /// Draw a frame around the grid
    #[arg(long)]
    frame: bool,

    /// Print the laid-out box tree as JSON instead of the grid
    #[arg(long)]
    dump_layout: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let root = match &cli.input {
        Some(path) => load_document(path)?,
        None => demo_document()?,
    };

    #[allow(clippy::cast_precision_loss)]
    let tree = layout_tree(&root, cli.width as f32, cli.height as f32);

    if cli.dump_layout {
        println!("{}", layout_json(&tree)?);
        return Ok(());
    }

    let grid = render(&tree, cli.width, cli.height, cli.fill);
    if cli.frame {
        print_framed(&grid);
    } else {
        println!("{grid}");
    }
    Ok(())
}

/// Read and normalize a document from `path` ("-" is stdin).
fn load_document(path: &Path) -> anyhow::Result<Node> {
    let json = if path.as_os_str() == "-" {
        let mut json = String::new();
        let _ = io::stdin()
            .read_to_string(&mut json)
            .context("failed to read document from stdin")?;
        json
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    let spec: DocumentSpec =
        serde_json::from_str(&json).context("document is not a valid box description")?;
    spec.into_node().context("document has an invalid style")
}

/// A bordered box centered by auto margins, holding one nested box.
fn demo_document() -> anyhow::Result<Node> {
    let outer = Style::from_declarations([
        ("border-width", RawValue::from(1)),
        ("width", RawValue::from("50%")),
        ("margin", RawValue::from("auto")),
        ("margin-top", RawValue::from(1)),
        ("padding", RawValue::from(1)),
    ])?;
    let inner = Style::from_declarations([
        ("border-width", RawValue::from(1)),
        ("height", RawValue::from(2)),
    ])?;
    Ok(Node::new("outer", outer).with_child(Node::new("inner", inner)))
}

/// The laid-out box tree as pretty JSON; `null` when the root made no box.
fn layout_json(tree: &LayoutTree<'_>) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&tree.snapshot()).context("failed to serialize layout")
}

fn print_framed(grid: &CharGrid) {
    let rule = "─".repeat(grid.width());
    println!("{}", format!("┌{rule}┐").dimmed());
    for row in grid.rows() {
        println!("{}{row}{}", "│".dimmed(), "│".dimmed());
    }
    println!("{}", format!("└{rule}┘").dimmed());
}

#[cfg(test)]
mod tests {
    use std::env;

    use boxgrid_css::paint::glyph;
    use clap::CommandFactory;

    use super::*;

    fn temp_document(tag: &str, json: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("boxgrid-{}-{tag}.json", std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_demo_document_renders_two_bordered_boxes() {
        let root = demo_document().unwrap();
        let tree = layout_tree(&root, 40.0, 12.0);
        let grid = render(&tree, 40, 12, '.');

        assert_eq!(grid.width(), 40);
        assert_eq!(grid.height(), 12);
        let text = grid.to_string();
        assert_eq!(text.matches(glyph::TOP_LEFT).count(), 2);
        assert_eq!(text.matches(glyph::BOTTOM_RIGHT).count(), 2);
        // Auto margins leave the first columns unpainted.
        assert!(grid.rows().iter().all(|row| row.starts_with('.')));
    }

    #[test]
    fn test_layout_json_names_every_box() {
        let root = demo_document().unwrap();
        let tree = layout_tree(&root, 40.0, 12.0);
        let json: serde_json::Value = serde_json::from_str(&layout_json(&tree).unwrap()).unwrap();

        assert_eq!(json["node"], "outer");
        assert_eq!(json["children"][0]["node"], "inner");
    }

    #[test]
    fn test_load_document_reads_a_file() {
        let path = temp_document(
            "ok",
            r#"{"name":"page","style":{"height":3},"children":[{"name":"child"}]}"#,
        );
        let node = load_document(&path);
        fs::remove_file(&path).unwrap();

        let node = node.unwrap();
        assert_eq!(node.name, "page");
        assert_eq!(node.children.len(), 1);
    }

    #[test]
    fn test_load_document_reports_bad_style() {
        let path = temp_document("bad-style", r#"{"name":"page","style":{"display":"auto"}}"#);
        let err = load_document(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert_eq!(err.to_string(), "document has an invalid style");
    }

    #[test]
    fn test_load_document_reports_missing_file() {
        let path = env::temp_dir().join("boxgrid-does-not-exist.json");
        let err = load_document(&path).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }
}
