use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use studio::kernel::preview::{compose_document, EntryFiles};
use studio::kernel::services::adapters::{import_directory, template_files, write_records, TemplateKind};
use studio::models::{build_file_tree, FileTreeNode, ProjectFiles, ProjectId};

#[derive(Parser, Debug)]
#[command(name = "studio")]
#[command(about = "Inspect, preview and scaffold web projects")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the file tree of a local project
    Tree {
        dir: PathBuf,

        /// Output the tree as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compose the preview document of a local project
    Preview {
        dir: PathBuf,

        /// Write the document here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Write a project template (nextjs, vite-vue, static) into a directory
    New { template: String, dir: PathBuf },
}

fn main() -> Result<()> {
    let _logging = studio::logging::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Tree { dir, json } => run_tree(&dir, json),
        Commands::Preview { dir, out } => run_preview(&dir, out.as_deref()),
        Commands::New { template, dir } => run_new(&template, &dir),
    }
}

fn local_project(dir: &Path) -> Result<ProjectFiles> {
    let project = ProjectId::new(dir.display().to_string());
    let records = import_directory(dir, &project)
        .with_context(|| format!("failed to import {}", dir.display()))?;
    Ok(ProjectFiles::new(records))
}

fn run_tree(dir: &Path, json: bool) -> Result<()> {
    let files = local_project(dir)?;
    let tree = build_file_tree(files.records());
    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }
    let mut out = String::new();
    for node in &tree {
        print_node(node, 0, &mut out);
    }
    print!("{out}");
    Ok(())
}

fn print_node(node: &FileTreeNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(&node.name);
    if node.is_folder {
        out.push('/');
    }
    out.push('\n');
    for child in node.children() {
        print_node(child, depth + 1, out);
    }
}

fn run_preview(dir: &Path, out: Option<&Path>) -> Result<()> {
    let files = local_project(dir)?;
    let inputs = EntryFiles::select(&files).resolve(|path| files.content(path));
    let document = compose_document(&inputs);
    match out {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {} ({} bytes)", path.display(), document.len());
        }
        None => print!("{document}"),
    }
    Ok(())
}

fn run_new(template: &str, dir: &Path) -> Result<()> {
    let kind = TemplateKind::parse(template);
    let project = ProjectId::new(dir.display().to_string());
    let records = template_files(kind, &project);
    let written = write_records(dir, &records)
        .with_context(|| format!("failed to write template into {}", dir.display()))?;
    println!("{} template: {written} files written to {}", kind.name(), dir.display());
    Ok(())
}
