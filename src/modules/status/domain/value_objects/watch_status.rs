use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user's relationship to a series. One bucket at a time; the composite
/// primary key on (user, series) makes anything else unrepresentable.
#[derive(
    diesel_derive_enum::DbEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::WatchStatus"]
pub enum WatchStatus {
    Favorites,
    Watching,
    Seen,
    Watchlist,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 4] = [
        WatchStatus::Favorites,
        WatchStatus::Watching,
        WatchStatus::Seen,
        WatchStatus::Watchlist,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WatchStatus::Favorites => "Favorites",
            WatchStatus::Watching => "Watching",
            WatchStatus::Seen => "Seen",
            WatchStatus::Watchlist => "Watchlist",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WatchStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "favorites" => Ok(WatchStatus::Favorites),
            "watching" => Ok(WatchStatus::Watching),
            "seen" => Ok(WatchStatus::Seen),
            "watchlist" => Ok(WatchStatus::Watchlist),
            other => Err(format!("Unknown watch status '{}'", other)),
        }
    }
}
