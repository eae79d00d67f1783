use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::WlError;

/// The fixed set of watch statuses. Variant order is display order
/// for `summary`, so keep it stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Unwatched,
    Watching,
    Watched,
    #[serde(rename = "on hold")]
    #[value(name = "on hold", alias = "on-hold")]
    OnHold,
    Dropped,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Unwatched,
        Status::Watching,
        Status::Watched,
        Status::OnHold,
        Status::Dropped,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Unwatched => "unwatched",
            Status::Watching => "watching",
            Status::Watched => "watched",
            Status::OnHold => "on hold",
            Status::Dropped => "dropped",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = WlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| WlError::InvalidStatusError {
                status: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trips_every_status_string() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn test_rejects_unknown_status() {
        let err = "binged".parse::<Status>().unwrap_err();
        assert!(matches!(err, WlError::InvalidStatusError { status } if status == "binged"));
    }

    #[test]
    fn test_on_hold_keeps_its_space() {
        assert_eq!(Status::OnHold.as_str(), "on hold");
        assert_eq!("on hold".parse::<Status>().unwrap(), Status::OnHold);
    }
}
