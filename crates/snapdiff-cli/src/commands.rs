use std::path::{Path, PathBuf};

use colored::Colorize;
use serde_json::json;

use snapdiff_core::{compare_snapshots, diff_lines};
use snapdiff_fs::{
    list_files, list_projects, list_versions, locate_file, read_lines, version_dir,
    FilePresence,
};
use snapdiff_render::term;
use snapdiff_server::{ServerConfig, SnapdiffServer};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let root = cli
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from("projects"));
    match cli.command {
        Command::Projects(_) => cmd_projects(&root, &cli.format),
        Command::Versions(args) => cmd_versions(&root, args, &cli.format),
        Command::Status(args) => cmd_status(&root, args, &cli.format),
        Command::Diff(args) => cmd_diff(&root, args, &cli.format),
        // serve keeps the distinction: an absent flag lets a config
        // file's projects_root take effect.
        Command::Serve(args) => cmd_serve(cli.root.as_deref(), args),
    }
}

fn cmd_projects(root: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let projects = list_projects(root)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&projects)?),
        OutputFormat::Text => {
            if projects.is_empty() {
                println!("No projects under {}.", root.display());
            }
            for project in projects {
                println!("{}", project);
            }
        }
    }
    Ok(())
}

fn cmd_versions(root: &Path, args: VersionsArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let versions = list_versions(root, &args.project)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&versions)?),
        OutputFormat::Text => {
            if versions.is_empty() {
                println!("Project {} has no versions.", args.project.bold());
            }
            for version in versions {
                println!("{}", version);
            }
        }
    }
    Ok(())
}

fn cmd_status(root: &Path, args: StatusArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let old_dir = version_dir(root, &args.project, &args.old_version)?;
    let new_dir = version_dir(root, &args.project, &args.new_version)?;
    let comparison = compare_snapshots(&list_files(&old_dir)?, &list_files(&new_dir)?);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&comparison)?),
        OutputFormat::Text => {
            print!("{}", term::render_comparison(&comparison));
            println!(
                "{} unchanged, {}, {}",
                comparison.unchanged(),
                format!("{} removed", comparison.removals()).red(),
                format!("{} added", comparison.additions()).green(),
            );
        }
    }
    Ok(())
}

fn cmd_diff(root: &Path, args: DiffArgs, format: &OutputFormat) -> anyhow::Result<()> {
    let old_dir = version_dir(root, &args.project, &args.old_version)?;
    let new_dir = version_dir(root, &args.project, &args.new_version)?;

    match locate_file(&old_dir, &new_dir, &args.file) {
        FilePresence::Both => {
            let old_lines = read_lines(&old_dir.join(&args.file))?;
            let new_lines = read_lines(&new_dir.join(&args.file))?;
            let old_refs: Vec<&str> = old_lines.iter().map(String::as_str).collect();
            let new_refs: Vec<&str> = new_lines.iter().map(String::as_str).collect();
            let diff = diff_lines(&old_refs, &new_refs);

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
                OutputFormat::Text => print!("{}", term::render_diff(&diff)),
            }
        }
        FilePresence::OldOnly => print_single_sided(&old_dir, &args.file, "old", format)?,
        FilePresence::NewOnly => print_single_sided(&new_dir, &args.file, "new", format)?,
        FilePresence::Absent => {
            anyhow::bail!("{} not found in either version", args.file)
        }
    }
    Ok(())
}

fn print_single_sided(
    dir: &Path,
    file: &str,
    side: &str,
    format: &OutputFormat,
) -> anyhow::Result<()> {
    let lines = read_lines(&dir.join(file))?;
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "file": file,
                "side": side,
                "lines": lines,
            }))?
        ),
        OutputFormat::Text => {
            println!("{} (only in the {} version)", file.bold(), side);
            for (i, line) in lines.iter().enumerate() {
                println!("{:>4} {}", i + 1, line);
            }
        }
    }
    Ok(())
}

fn cmd_serve(root: Option<&Path>, args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse()?;
    }
    if let Some(root) = root {
        config.projects_root = root.to_path_buf();
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(SnapdiffServer::new(config).serve())?;
    Ok(())
}
