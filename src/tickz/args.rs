use clap::{Parser, Subcommand};

/// Version shown by `--version`. Development builds append the commit
/// hash and date so bug reports can be pinned to a revision.
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let hash = env!("GIT_HASH");
        if env!("IS_RELEASE") == "true" || hash.is_empty() {
            version.to_string()
        } else {
            format!("{version}@{hash} {}", env!("GIT_COMMIT_DATE"))
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "tickz", bin_name = "tickz", version = get_version())]
#[command(about = "To-do lists of lists in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the lists overview
    #[command(alias = "ls")]
    Lists {
        /// Status filter: all, pending or done
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Create a new list
    #[command(alias = "a")]
    Add {
        /// Name of the list
        name: String,
    },

    /// Rename a list
    Rename {
        /// Id of the list
        id: i64,
        /// New name
        name: String,
    },

    /// Delete a list permanently
    #[command(alias = "rm")]
    Remove {
        /// Id of the list
        id: i64,
    },

    /// Toggle a list done/undone
    Check {
        /// Id of the list
        id: i64,
    },

    /// Toggle every list at once
    CheckAll,

    /// Remove every done list (asks for confirmation)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show one list's items
    #[command(alias = "i")]
    Items {
        /// Id of the list
        id: i64,
        /// Status filter: all, pending or done
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Add an item to a list
    Todo {
        /// Id of the list
        id: i64,
        /// Item text
        text: String,
    },

    /// Rewrite an item's text
    Edit {
        /// Id of the list
        id: i64,
        /// Id of the item
        item: i64,
        /// New text
        text: String,
    },

    /// Delete an item permanently
    Drop {
        /// Id of the list
        id: i64,
        /// Id of the item
        item: i64,
    },

    /// Toggle an item done/undone
    Tick {
        /// Id of the list
        id: i64,
        /// Id of the item
        item: i64,
    },

    /// Toggle every item in a list
    TickAll {
        /// Id of the list
        id: i64,
    },

    /// Remove every done item in a list (no confirmation)
    Sweep {
        /// Id of the list
        id: i64,
    },

    /// Read-only preview of a list
    #[command(alias = "p")]
    Peek {
        /// Id of the list
        id: i64,
        /// Maximum preview rows
        #[arg(long, default_value_t = tickz::view::preview::PREVIEW_ROWS)]
        lines: usize,
    },
}
