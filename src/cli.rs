use crate::error::ErrorKind;
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use portfolio_common::{CategoryFilter, ProjectDirectory, ProjectsSnapshot, ProjectsView};
use std::fmt::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "portfolio-ai")]
#[command(about = "Portfolio project list and AI-assisted project entries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the projects section for a category
    Projects {
        /// Category label ("Semua" shows everything)
        #[arg(short, long, default_value = "Semua")]
        category: String,

        /// Show every match instead of the preview
        #[arg(short, long)]
        expand: bool,

        /// JSON file with project records (default: built-in projects)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the category labels of the filter bar
    Categories,

    /// Turn a rough note into a project entry
    Suggest {
        /// Rough description of the project
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Append the suggestion to this project file
        #[arg(long)]
        merge_into: Option<PathBuf>,
    },

    /// Show or change settings
    Config {
        /// Save the API key
        #[arg(long)]
        set_api_key: Option<String>,

        /// Print current settings
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Message shown next to a failed `suggest`
pub fn failure_hint(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Configuration => "AI assistant is not configured.",
        ErrorKind::Transport => "AI assistant could not be reached. Try again later.",
        ErrorKind::Parse => "AI assistant returned something unusable. Try rephrasing the note.",
        ErrorKind::Other => "AI assistant failed.",
    }
}

/// Output of the `projects` command; reads no settings
pub fn run_projects(
    category: &str,
    expand: bool,
    file: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let directory = match file {
        Some(path) => ProjectDirectory::load(path)
            .with_context(|| format!("failed to load projects from {}", path.display()))?,
        None => ProjectDirectory::seed(),
    };

    let mut view = ProjectsView::new(directory);
    view.select_category(CategoryFilter::from_label(category));
    if expand && view.snapshot().toggle_available {
        view.toggle_disclosure();
    }

    let snapshot = view.snapshot();
    Ok(match format {
        OutputFormat::Text => render_text(&snapshot),
        OutputFormat::Json => format!("{}\n", render_json(&snapshot)?),
    })
}

pub fn render_text(snapshot: &ProjectsSnapshot<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Projects: {} ({} of {} shown)",
        snapshot.selected.label(),
        snapshot.cards.len(),
        snapshot.filtered_len
    );

    for card in &snapshot.cards {
        let r = card.record;
        let _ = writeln!(out, "\n[{}] {} ({})", r.id, r.title, r.category);
        if !r.description.is_empty() {
            let _ = writeln!(out, "    {}", r.description);
        }
        if !r.tags.is_empty() {
            let _ = writeln!(out, "    tags: {}", r.tags.join(", "));
        }
        if card.has_controls {
            let _ = writeln!(
                out,
                "    image {}/{}: {}",
                card.image_index + 1,
                r.gallery().len(),
                card.image
            );
        } else {
            let _ = writeln!(out, "    image: {}", card.image);
        }
        if let Some(link) = &r.link {
            let _ = writeln!(out, "    link: {}", link);
        }
    }

    if snapshot.empty_state {
        let _ = writeln!(
            out,
            "\nNo projects in \"{}\". Use --category Semua to view all projects.",
            snapshot.selected.label()
        );
    } else if snapshot.toggle_available {
        if snapshot.expanded {
            let _ = writeln!(out, "\n(show less: drop --expand)");
        } else {
            let hidden = snapshot.filtered_len - snapshot.cards.len();
            let _ = writeln!(out, "\n(show more: {} hidden, use --expand)", hidden);
        }
    }

    out
}

pub fn render_json(snapshot: &ProjectsSnapshot<'_>) -> serde_json::Result<String> {
    let cards: Vec<_> = snapshot
        .cards
        .iter()
        .map(|c| {
            serde_json::json!({
                "project": c.record,
                "imageIndex": c.image_index,
                "image": c.image,
                "hasControls": c.has_controls,
            })
        })
        .collect();

    serde_json::to_string_pretty(&serde_json::json!({
        "selectedCategory": snapshot.selected.label(),
        "cards": cards,
        "filteredCount": snapshot.filtered_len,
        "expanded": snapshot.expanded,
        "toggleAvailable": snapshot.toggle_available,
        "emptyState": snapshot.empty_state,
    }))
}
