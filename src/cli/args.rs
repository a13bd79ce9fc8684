// src/cli/args.rs
use crate::domain::TagFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides config and NOTEHUB_BASE_URL
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token, overrides config and NOTEHUB_TOKEN
    #[arg(long, value_name = "TOKEN", global = true)]
    pub token: Option<String>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List one page of notes
    List {
        /// Optional search term
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Tag filter: all, Todo, Work, Personal, Meeting or Shopping
        #[arg(short, long, default_value = "all")]
        tag: TagFilter,

        /// Open the page in the browser
        #[arg(long)]
        browser: bool,
    },

    /// Show a single note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON
        #[arg(long, conflicts_with = "browser")]
        json: bool,

        /// Open the note in the browser
        #[arg(long)]
        browser: bool,
    },

    /// Create a note
    Create {
        /// Title, 3 to 50 characters
        #[arg(long)]
        title: String,

        /// Content, up to 500 characters
        #[arg(long, default_value = "")]
        content: String,

        /// One of Todo, Work, Personal, Meeting, Shopping
        #[arg(long, default_value = "Todo")]
        tag: String,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Browse notes interactively
    Shell,

    /// Write a default config file
    InitConfig {
        /// Target path, defaults to the user config directory
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// One line typed into the interactive shell
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Show the current page
    #[command(alias = "ls")]
    List,

    /// Search notes, no words clears the search
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Filter by tag, or `all`
    Tag {
        filter: TagFilter,
    },

    /// Jump to a page
    Page {
        number: u32,
    },

    /// Next page
    #[command(alias = "n")]
    Next,

    /// Previous page
    #[command(alias = "p")]
    Prev,

    /// Show a note
    View {
        note_id: String,
    },

    /// Create a note
    New,

    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        note_id: String,
    },

    /// Leave the shell
    #[command(aliases = ["exit", "q"])]
    Quit,
}
