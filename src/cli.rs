use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{CommandFactory, Parser, Subcommand};

pub use crate::cli_ops::*;

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::BrightCyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::BrightYellow.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::BrightMagenta.on_default())
}

pub fn styled_command() -> clap::Command {
    Cli::command()
}

#[derive(Debug, Parser)]
#[command(name = "showcase")]
#[command(bin_name = "showcase")]
#[command(version)]
#[command(about = "Keep a small catalog of projects: add, edit, search, tag and sort.")]
#[command(styles = cli_styles())]
pub struct Cli {
    #[arg(
        long,
        env = "SHOWCASE_DB_PATH",
        default_value = ".showcase/storage.sqlite",
        help = "Path to the local storage database."
    )]
    pub db: String,

    #[arg(
        short = 'c',
        long,
        env = "SHOWCASE_CONFIG",
        default_value = ".showcase/config.toml",
        help = "Optional TOML config file (storage_key, default_sort)."
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Add a project to the front of the catalog.")]
    Add(AddArgs),
    #[command(about = "Edit fields of one project.")]
    Edit(EditArgs),
    #[command(about = "Delete one project.")]
    Rm(RemoveArgs),
    #[command(about = "List projects with search, tag filter and sort.")]
    Ls(ListArgs),
    #[command(about = "Show one project by id.")]
    Show(ShowArgs),
    #[command(about = "List every tag in the catalog.")]
    Tags(TagsArgs),
    #[command(about = "Forget the stored catalog and start from the default projects.")]
    Reset,
    #[command(about = "Print shell completions.")]
    Completions(CompletionsArgs),
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
