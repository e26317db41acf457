use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum CreatorCommands {
    /// Create a creator
    Add { name: String },
    /// Delete a creator (and, server side, its content)
    Rm { creator_id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum ContentCommands {
    /// List a creator's content
    List {
        creator_id: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a content item for a creator
    Add {
        creator_id: i64,
        title: String,
        kind: String,
    },
    /// Change the title and/or kind of a content item
    Edit {
        content_id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        kind: Option<String>,
    },
    /// Delete a content item
    Rm { content_id: i64 },
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Print the settings file location and contents
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Persist a new API base URL
    SetUrl { url: String },
}
