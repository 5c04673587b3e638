// Library root: transfer record loading, the three report builders, and the
// text writers that render them.

pub mod club;
pub mod league;
pub mod position;
pub mod record;
pub mod report;

pub use club::{ClubStats, IncomingPlayer};
pub use league::{LeagueStats, LeagueTotal};
pub use position::PositionStats;
pub use record::TransferRecord;

use thiserror::Error;

/// Validation failures raised by the report builders when the requested
/// clubs or position do not occur in the loaded transfers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("the following clubs never appear as a destination in the transfer data: {}", .clubs.join(","))]
    UnknownClubs { clubs: Vec<String> },

    #[error("invalid position `{position}`: no transfer lists this position")]
    UnknownPosition { position: String },
}
