use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "snapdiff",
    about = "Compare version snapshots of a project, file by file and line by line",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory containing one subdirectory per project (default: projects)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List projects under the root
    Projects(ProjectsArgs),
    /// List the version snapshots of a project
    Versions(VersionsArgs),
    /// Show per-file status between two versions
    Status(StatusArgs),
    /// Show the line diff of one file between two versions
    Diff(DiffArgs),
    /// Start the snapdiff web server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ProjectsArgs {}

#[derive(Args)]
pub struct VersionsArgs {
    pub project: String,
}

#[derive(Args)]
pub struct StatusArgs {
    pub project: String,
    pub old_version: String,
    pub new_version: String,
}

#[derive(Args)]
pub struct DiffArgs {
    pub project: String,
    pub old_version: String,
    pub new_version: String,
    pub file: String,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on; overrides the config file
    #[arg(long)]
    pub bind: Option<String>,
    /// Optional TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
