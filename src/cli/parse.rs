//! Wireframe inspection command.

use crate::cli::common::{CliError, CliResult};
use crate::models::{DocumentKind, LayoutFragment, Page, WireframeDocument};
use crate::parser::parse_wireframe_file;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Parse a text wireframe and summarize what was recognized
#[derive(Debug, Clone, Args)]
pub struct ParseArgs {
    /// Wireframe text file
    #[arg(short, long, value_name = "FILE")]
    pub wireframe: PathBuf,

    /// Output the parsed document as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ParseResponse<'a> {
    kind: DocumentKind,
    #[serde(flatten)]
    document: &'a WireframeDocument,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> CliResult<()> {
        let doc = load_wireframe(&self.wireframe)?;

        if self.json {
            let response = ParseResponse {
                kind: doc.kind(),
                document: &doc,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print_summary(&doc);
        }

        Ok(())
    }
}

/// Reads a wireframe for a command.
///
/// A missing file is an I/O error; anything the parser rejects is a
/// validation error.
pub fn load_wireframe(path: &Path) -> CliResult<WireframeDocument> {
    if !path.is_file() {
        return Err(CliError::io(format!(
            "Wireframe file not found: {}",
            path.display()
        )));
    }

    parse_wireframe_file(path)
        .map_err(|e| CliError::validation(format!("Failed to parse wireframe: {e:#}")))
}

fn print_summary(doc: &WireframeDocument) {
    match doc.kind() {
        DocumentKind::Empty => {
            println!("No pages or layouts recognized.");
            return;
        }
        DocumentKind::Pages => println!("Wireframe: {} page(s)", doc.pages.len()),
        DocumentKind::Layouts => println!("Wireframe: {} layout(s)", doc.layouts.len()),
    }
    println!();

    for page in &doc.pages {
        print_page(page);
    }

    if !doc.layouts.is_empty() {
        println!("Layouts:");
        for (mode, fragment) in &doc.layouts {
            println!("  {mode}: {}", describe_fragment(fragment));
        }
        println!();
    }

    let defaults = &doc.defaults;
    if let (Some(width), Some(height)) = (defaults.width, defaults.height) {
        println!("Canvas: {width}x{height}");
    }
}

fn print_page(page: &Page) {
    let mode = page
        .layout_mode
        .map_or_else(|| "(no layout)".to_string(), |m| m.to_string());
    println!("Page {}: {} [{mode}]", page.number, page.name);

    if let Some(grid) = &page.grid {
        if let Some(list) = grid.row_column_list() {
            let cols: Vec<String> = list.iter().map(u32::to_string).collect();
            println!("  Grid: columns per row {}", cols.join(", "));
        } else if let (Some(rows), Some(columns)) = (grid.rows, grid.columns) {
            println!("  Grid: {rows}x{columns}");
        }
    }

    for visual in &page.visuals {
        let label = visual.label.replace('\n', " / ");
        println!("  {}. {} - {label}", visual.index + 1, visual.kind);
    }
    println!();
}

fn describe_fragment(fragment: &LayoutFragment) -> String {
    let mut parts = Vec::new();
    if let (Some(rows), Some(columns)) = (fragment.grid.rows, fragment.grid.columns) {
        parts.push(format!("{rows}x{columns} grid"));
    }
    if let Some(kpis) = fragment.kpi_count() {
        parts.push(format!("{kpis} KPIs"));
    }
    if let Some(visuals) = fragment.visual_count() {
        parts.push(format!("{visuals} visuals"));
    }
    if !fragment.visuals.is_empty() {
        parts.push(format!("{} listed visuals", fragment.visuals.len()));
    }

    if parts.is_empty() {
        "defaults".to_string()
    } else {
        parts.join(", ")
    }
}
