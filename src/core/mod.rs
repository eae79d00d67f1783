pub mod status;
pub mod store;
pub mod watchlist;

pub use status::Status;
pub use watchlist::{AddOutcome, Item, Watchlist};
