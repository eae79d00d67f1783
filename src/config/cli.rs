use clap::Subcommand;
use std::env;
use std::path::{Path, PathBuf};

use crate::core::Status;

pub const WL_PATH_ENV: &str = "WL_PATH";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add an item
    #[command(visible_alias = "a")]
    Add {
        /// Name of the new item
        name: String,

        /// Status for the new item
        #[arg(short, long, default_value_t = Status::Unwatched)]
        status: Status,
    },

    /// Remove an item
    #[command(visible_alias = "rm")]
    Remove {
        /// Name of the item to remove
        name: String,
    },

    /// Update the status of an item
    #[command(visible_alias = "u")]
    Update {
        /// Name of the item to update
        name: String,

        /// Updated status of the item
        #[arg(default_value_t = Status::Watched)]
        status: Status,
    },

    /// Rename an item
    #[command(visible_alias = "r")]
    Rename {
        /// Current name of the item
        name: String,

        /// New name for the item
        new_name: String,
    },

    /// Search for an item
    #[command(visible_alias = "s")]
    Search {
        /// Search string
        search: String,

        /// Status to filter by
        #[arg(short, long)]
        status: Option<Status>,
    },

    /// List all items
    #[command(visible_alias = "ls")]
    List,

    /// Show a summary of your watchlist
    #[command(visible_aliases = ["sum", "m"])]
    Summary,
}

/// Precedence: explicit flag, then $WL_PATH, then `wl` in the home
/// directory (falling back to the working directory when no home can
/// be determined).
pub fn resolve_watchlist_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }

    if let Ok(path) = env::var(WL_PATH_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    match dirs::home_dir() {
        Some(home) => home.join("wl"),
        None => PathBuf::from("wl"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flag_wins() {
        let path = resolve_watchlist_path(Some(Path::new("/tmp/somewhere/wl")));
        assert_eq!(path, PathBuf::from("/tmp/somewhere/wl"));
    }

    #[test]
    fn test_default_lands_in_home() {
        if env::var(WL_PATH_ENV).is_ok() {
            return; // ambient override in this environment, nothing to assert
        }
        let path = resolve_watchlist_path(None);
        assert_eq!(path.file_name().unwrap(), "wl");
    }
}
