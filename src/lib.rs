pub mod config;
pub mod core;
pub mod utils;

pub use config::{cli::Command, CliConfig};
pub use core::{AddOutcome, Item, Status, Watchlist};
pub use utils::error::{Result, WlError};
