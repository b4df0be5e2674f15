//! # CLI Layer
//!
//! This module is **one possible UI client** for userdir. It is the only place
//! that knows about stdout/stderr, exit codes and argument parsing; everything
//! else goes through [`DirectoryApi`].
//!
//! - `run()`: parse arguments, set up logging, dispatch
//! - `init_context()`: resolve the data directory, load config, open the store
//! - `handle_*()`: per-command handlers that call the API and print the result

mod args;
mod render;

use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use render::{print_messages, render_stats, render_user_table};
use std::path::{Path, PathBuf};
use userdir::api::{ConfigAction, DirectoryApi};
use userdir::config::DirectoryConfig;
use userdir::error::{Result, UserdirError};
use userdir::model::{RecordId, Role, Status, UserDraft};
use userdir::store::fs::FileStore;

const HOME_ENV: &str = "USERDIR_HOME";

struct AppContext {
    api: DirectoryApi<FileStore>,
    config: DirectoryConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir.clone())?;
    log::debug!("data dir: {}", data_dir.display());

    let command = cli.command.unwrap_or(Commands::List {
        search: String::new(),
        role: None,
    });

    let open = || init_context(&data_dir);

    match command {
        // Config does not need the record store, so it still works when
        // users.json is unreadable.
        Commands::Config { key, value } => handle_config(&data_dir, key, value),
        Commands::Add {
            name,
            email,
            phone,
            role,
            status,
        } => handle_add(&mut open()?, name, email, phone, role, status),
        Commands::Edit {
            id,
            name,
            email,
            phone,
            role,
            status,
        } => handle_edit(
            &mut open()?,
            id,
            DraftChanges {
                name,
                email,
                phone,
                role,
                status,
            },
        ),
        Commands::Delete { ids } => handle_delete(&mut open()?, &ids),
        Commands::Activate { id } => handle_set_status(&mut open()?, id, Status::Active),
        Commands::Deactivate { id } => handle_set_status(&mut open()?, id, Status::Inactive),
        Commands::Toggle { id } => handle_toggle(&mut open()?, id),
        Commands::List { search, role } => handle_list(&open()?, &search, role),
        Commands::Show { id } => handle_show(&open()?, id),
        Commands::Stats => handle_stats(&open()?),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "userdir", "userdir")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| UserdirError::Api("Could not determine data directory".to_string()))
}

fn init_context(data_dir: &Path) -> Result<AppContext> {
    let config = DirectoryConfig::load(data_dir)?;
    let store = FileStore::new(data_dir.to_path_buf());
    let api = DirectoryApi::open(store, &config.storage_key)?;
    Ok(AppContext { api, config })
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    email: String,
    phone: String,
    role: Option<Role>,
    status: Option<Status>,
) -> Result<()> {
    let draft = UserDraft::new(
        name,
        email,
        phone,
        role.unwrap_or(ctx.config.default_role),
        status.unwrap_or(ctx.config.default_status),
    );
    let result = ctx.api.submit(&draft)?;
    print_messages(&result.messages);
    Ok(())
}

struct DraftChanges {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    role: Option<Role>,
    status: Option<Status>,
}

impl DraftChanges {
    fn apply_to(self, draft: &mut UserDraft) {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(phone) = self.phone {
            draft.phone = phone;
        }
        if let Some(role) = self.role {
            draft.role = role;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

fn handle_edit(ctx: &mut AppContext, id: RecordId, changes: DraftChanges) -> Result<()> {
    let mut draft = ctx.api.begin_edit(id)?;
    changes.apply_to(&mut draft);
    let result = ctx.api.submit(&draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[RecordId]) -> Result<()> {
    let result = ctx.api.delete_users(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_set_status(ctx: &mut AppContext, id: RecordId, status: Status) -> Result<()> {
    let result = ctx.api.set_status(id, status)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, id: RecordId) -> Result<()> {
    let result = ctx.api.toggle_status(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: &str, role: Option<Role>) -> Result<()> {
    let result = ctx.api.query(search, role)?;
    print!("{}", render_user_table(&result.listed_records));
    println!();
    print!("{}", render_stats(&ctx.api.current_stats()));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: RecordId) -> Result<()> {
    let result = ctx.api.get_user(id)?;
    print!("{}", render_user_table(&result.listed_records));
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = userdir::commands::config::run(data_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in userdir::config::KEYS {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
