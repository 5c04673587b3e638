// One report run: load the transfers, build the three reports, write them.

use anyhow::Context;
use tracing::info;

use transfer_stats_core::club::build_club_stats;
use transfer_stats_core::league::build_league_stats;
use transfer_stats_core::position::build_position_stats;
use transfer_stats_core::record::load_transfers;
use transfer_stats_core::report::{save_club_report, save_league_report, save_position_report};

use crate::config::Config;

/// Sizes of what a run produced, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub transfers: usize,
    pub clubs: usize,
    pub leagues: usize,
    pub position_leagues: usize,
}

/// Execute the whole pipeline described by `config`.
///
/// All three reports are built before anything is written, so a validation
/// failure leaves existing output files untouched.
pub fn run(config: &Config) -> anyhow::Result<RunSummary> {
    let transfers = load_transfers(&config.transfers_path).context("failed to load transfers")?;
    info!(
        "Loaded {} transfers from {}",
        transfers.len(),
        config.transfers_path.display()
    );

    let clubs = build_club_stats(&transfers, &config.clubs).context("failed to build club stats")?;
    let leagues = build_league_stats(&transfers);
    let positions = build_position_stats(&transfers, &config.position)
        .context("failed to build position stats")?;

    save_club_report(&clubs, &config.output.club_stats)?;
    save_league_report(&leagues, &config.output.league_stats)?;
    save_position_report(&positions, &config.output.position_stats)?;

    Ok(RunSummary {
        transfers: transfers.len(),
        clubs: clubs.len(),
        leagues: leagues.len(),
        position_leagues: positions.len(),
    })
}
