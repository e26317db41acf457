use std::path::PathBuf;

use clap::Subcommand;

mod cli_exec;
mod cli_runtime;
mod cli_subcommands;

use cli_subcommands::{ConfigCommands, ContentCommands, CreatorCommands};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List creators with their content counts
    Creators {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Add or remove a creator
    Creator {
        #[command(subcommand)]
        command: CreatorCommands,
    },

    /// List, add, edit, or remove content items
    Content {
        #[command(subcommand)]
        command: ContentCommands,
    },

    /// Upload a media file for a content item
    Upload {
        content_id: i64,
        path: PathBuf,
    },

    /// Print the download URL for a stored file path
    Url { path: String },

    /// Play a content item's stored file with a local player
    Play { creator_id: i64, content_id: i64 },

    /// Open a content item's download URL with the system opener
    Download { creator_id: i64, content_id: i64 },

    /// Show or change client settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
