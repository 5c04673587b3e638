// Players for one position, grouped by league and season.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::record::TransferRecord;
use crate::ReportError;

/// Season -> sorted player names.
pub type SeasonPlayers = BTreeMap<String, Vec<String>>;

/// `(league, seasons)` pairs in the order each league first appears in the
/// source transfers.
pub type PositionStats = Vec<(String, SeasonPlayers)>;

/// Collect the players who moved in `position`, matched case-insensitively.
///
/// Fails when no transfer at all carries the requested position. Leagues with
/// no player in that position are left out.
pub fn build_position_stats(
    transfers: &[TransferRecord],
    position: &str,
) -> Result<PositionStats, ReportError> {
    let wanted = position.to_lowercase();

    let known: HashSet<String> = transfers.iter().map(|t| t.position.to_lowercase()).collect();
    if !known.contains(&wanted) {
        return Err(ReportError::UnknownPosition {
            position: position.to_string(),
        });
    }

    let mut stats: PositionStats = Vec::new();
    let mut seen_leagues: HashSet<&str> = HashSet::new();
    for transfer in transfers {
        // League order is decided by the whole data set, not only by
        // matching transfers.
        if seen_leagues.insert(transfer.league.as_str()) {
            stats.push((transfer.league.clone(), SeasonPlayers::new()));
        }
        if transfer.position.to_lowercase() != wanted {
            continue;
        }
        if let Some((_, seasons)) = stats.iter_mut().find(|(l, _)| *l == transfer.league) {
            seasons
                .entry(transfer.season.clone())
                .or_default()
                .push(transfer.player.clone());
        }
    }

    stats.retain(|(_, seasons)| !seasons.is_empty());
    for (_, seasons) in &mut stats {
        for players in seasons.values_mut() {
            players.sort();
        }
    }

    debug!(
        "position stats for '{}': {} leagues",
        position,
        stats.len()
    );

    Ok(stats)
}
