use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;

use crate::commands::{
    ListFilter, cmd_add, cmd_archive, cmd_config_get, cmd_config_set, cmd_config_show, cmd_ls,
    cmd_rm, cmd_ui, cmd_unarchive,
};
use crate::error::Result;

#[derive(Parser)]
#[command(name = "noteboard")]
#[command(about = "Terminal client for a remote notes service")]
#[command(version)]
pub struct Cli {
    /// Use a throwaway in-memory store instead of the notes service
    #[arg(long, global = true)]
    pub memory: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        self.command.unwrap_or(Commands::Ui).run(self.memory).await
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the notes board (default)
    Ui,

    /// List notes
    #[command(visible_alias = "l")]
    Ls {
        /// Only show active notes
        #[arg(long, conflicts_with = "archived")]
        active: bool,

        /// Only show archived notes
        #[arg(long)]
        archived: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a note
    #[command(visible_alias = "a")]
    Add {
        /// Note title (at least 3 characters)
        title: String,

        /// Note body (at least 5 characters)
        body: String,
    },

    /// Delete a note
    Rm {
        /// Note ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move a note to the archived list
    Archive {
        /// Note ID
        id: String,
    },

    /// Move a note back to the active list
    Unarchive {
        /// Note ID
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show all configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one configuration value
    Get {
        /// Key, e.g. api.base_url
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value
    Set {
        /// Key, e.g. api.base_url
        key: String,

        /// New value
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub async fn run(self, memory: bool) -> Result<()> {
        match self {
            Commands::Ui => cmd_ui(memory).await,
            Commands::Ls {
                active,
                archived,
                json,
            } => cmd_ls(ListFilter::from_flags(active, archived), memory, json).await,
            Commands::Add { title, body } => cmd_add(&title, &body, memory).await,
            Commands::Rm { id, yes } => cmd_rm(&id, yes, memory).await,
            Commands::Archive { id } => cmd_archive(&id, memory).await,
            Commands::Unarchive { id } => cmd_unarchive(&id, memory).await,
            Commands::Config { action } => match action {
                ConfigAction::Show { json } => cmd_config_show(json),
                ConfigAction::Get { key, json } => cmd_config_get(&key, json),
                ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

/// Generate shell completions and print them to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "noteboard", &mut io::stdout());
}
