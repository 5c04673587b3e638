// Per-league transfer counts and spend.

use std::collections::BTreeMap;

use tracing::debug;

use crate::record::TransferRecord;

/// Aggregate for one league.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueTotal {
    pub league: String,
    /// Number of transfers, priced or not.
    pub count: usize,
    /// Sum of known prices. Unpriced transfers contribute nothing.
    pub total_price: f64,
}

/// League aggregates sorted by league name.
pub type LeagueStats = Vec<LeagueTotal>;

/// Count transfers and sum prices per league.
///
/// Leagues are taken as given and the result is ordered by the raw league
/// string, independent of the input order.
pub fn build_league_stats(transfers: &[TransferRecord]) -> LeagueStats {
    let mut totals: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for transfer in transfers {
        let entry = totals.entry(transfer.league.as_str()).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += transfer.price.unwrap_or(0.0);
    }

    debug!("league stats: {} leagues", totals.len());

    totals
        .into_iter()
        .map(|(league, (count, total_price))| LeagueTotal {
            league: league.to_string(),
            count,
            total_price,
        })
        .collect()
}
