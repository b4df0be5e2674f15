use clap::{Parser, Subcommand};
use std::path::PathBuf;
use userdir::model::{RecordId, Role, Status};

#[derive(Parser, Debug)]
#[command(name = "userdir", version)]
#[command(about = "Keep a small directory of users: add, edit, search, activate", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding users.json and config.json (defaults to $USERDIR_HOME, then the OS data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a user
    #[command(alias = "a")]
    Add {
        name: String,
        email: String,
        phone: String,

        /// Admin, Editor or User (defaults to the configured default-role)
        #[arg(short, long)]
        role: Option<Role>,

        /// Active or Inactive (defaults to the configured default-status)
        #[arg(short, long)]
        status: Option<Status>,
    },

    /// Edit a user; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        id: RecordId,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(short, long)]
        role: Option<Role>,

        #[arg(short, long)]
        status: Option<Status>,
    },

    /// Delete one or more users
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<RecordId>,
    },

    /// Mark a user as Active
    Activate { id: RecordId },

    /// Mark a user as Inactive
    Deactivate { id: RecordId },

    /// Flip a user between Active and Inactive
    Toggle { id: RecordId },

    /// List users, most recent first
    #[command(alias = "ls")]
    List {
        /// Case-insensitive name search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show users with this role
        #[arg(short, long)]
        role: Option<Role>,
    },

    /// Show a single user
    Show { id: RecordId },

    /// Show total, active and inactive counts
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, default-role, default-status)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
