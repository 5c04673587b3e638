// Plain-text rendering of the three reports, plus a reader for the club
// report layout.
//
// Every `write_*` function renders into any `io::Write`; the `save_*`
// variants create or truncate a file at the given path.

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::club::{ClubStats, IncomingPlayer};
use crate::league::LeagueTotal;
use crate::position::PositionStats;

pub const LEAGUE_REPORT_HEADER: &str = "league,total_transfer_no,total_transfer_price";

const PLAYER_PREFIX: &str = " -";
const FROM_SEPARATOR: &str = "), from ";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to write report {path}: {source}")]
    Io {
        path: String,
        source: io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line_no}: expected ` -player (position), from club`, got `{line}`")]
    MalformedPlayerLine { line_no: usize, line: String },

    #[error("line {line_no}: player listed before any club")]
    PlayerBeforeClub { line_no: usize },

    #[error("failed to read club report: {0}")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Render a price total: whole numbers without a fractional part, anything
/// else in its shortest decimal form. Magnitudes below 1e-4 use exponent
/// notation with at least two exponent digits (`1e-05`).
pub fn format_price(total: f64) -> String {
    if total.is_finite() && total.fract() == 0.0 {
        if total == 0.0 {
            // Avoid "-0".
            return "0".to_string();
        }
        format!("{total:.0}")
    } else if total.is_finite() && total.abs() < 1e-4 {
        let exp = format!("{total:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) => {
                let (sign, digits) = match power.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', power),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => exp,
        }
    } else {
        format!("{total}")
    }
}

// ---------------------------------------------------------------------------
// Writers
// ---------------------------------------------------------------------------

pub fn write_club_report<W: Write>(stats: &ClubStats, mut out: W) -> io::Result<()> {
    for (club, players) in stats.iter() {
        writeln!(out, "{club}")?;
        for p in players {
            writeln!(out, "{PLAYER_PREFIX}{} ({}), from {}", p.player, p.position, p.from)?;
        }
    }
    out.flush()
}

pub fn write_league_report<W: Write>(stats: &[LeagueTotal], mut out: W) -> io::Result<()> {
    writeln!(out, "{LEAGUE_REPORT_HEADER}")?;
    for total in stats {
        writeln!(
            out,
            "{},{},{}",
            total.league,
            total.count,
            format_price(total.total_price)
        )?;
    }
    out.flush()
}

/// Each league block ends with a blank line, including the last one.
pub fn write_position_report<W: Write>(stats: &PositionStats, mut out: W) -> io::Result<()> {
    for (league, seasons) in stats {
        writeln!(out, "{league}")?;
        for (season, players) in seasons {
            writeln!(out, "{season},{}", players.join(","))?;
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn save_club_report(stats: &ClubStats, path: &Path) -> Result<(), WriteError> {
    save_with(path, |out| write_club_report(stats, out))?;
    info!("wrote club report for {} clubs to {}", stats.len(), path.display());
    Ok(())
}

pub fn save_league_report(stats: &[LeagueTotal], path: &Path) -> Result<(), WriteError> {
    save_with(path, |out| write_league_report(stats, out))?;
    info!("wrote league report for {} leagues to {}", stats.len(), path.display());
    Ok(())
}

pub fn save_position_report(stats: &PositionStats, path: &Path) -> Result<(), WriteError> {
    save_with(path, |out| write_position_report(stats, out))?;
    info!("wrote position report for {} leagues to {}", stats.len(), path.display());
    Ok(())
}

fn save_with<F>(path: &Path, render: F) -> Result<(), WriteError>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let to_error = |e: io::Error| WriteError::Io {
        path: path.display().to_string(),
        source: e,
    };
    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    render(&mut out).map_err(to_error)
}

// ---------------------------------------------------------------------------
// Club report reader
// ---------------------------------------------------------------------------

/// Parse text produced by [`write_club_report`] back into `ClubStats`.
///
/// Lines starting with ` -` are players of the most recent club line; every
/// other line, blank included, starts a new club (the writer prints an empty
/// club name as a blank line).
pub fn parse_club_report<R: BufRead>(input: R) -> Result<ClubStats, ParseError> {
    let mut entries: Vec<(String, Vec<IncomingPlayer>)> = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;

        let Some(rest) = line.strip_prefix(PLAYER_PREFIX) else {
            entries.push((line, Vec::new()));
            continue;
        };

        let player = parse_player_line(rest).ok_or_else(|| ParseError::MalformedPlayerLine {
            line_no,
            line: line.clone(),
        })?;
        match entries.last_mut() {
            Some((_, players)) => players.push(player),
            None => return Err(ParseError::PlayerBeforeClub { line_no }),
        }
    }

    Ok(ClubStats::from_entries(entries))
}

/// `player (position), from club` with the leading ` -` already removed.
///
/// The player name ends at the first ` (`, so positions may carry their own
/// parenthesised detail (`Forward (CF)`). A player name containing ` (` does
/// not survive the round trip.
fn parse_player_line(rest: &str) -> Option<IncomingPlayer> {
    let (head, from) = rest.split_once(FROM_SEPARATOR)?;
    let (player, position) = head.split_once(" (")?;
    Some(IncomingPlayer {
        player: player.to_string(),
        position: position.to_string(),
        from: from.to_string(),
    })
}
