// Transfer CSV loading.
//
// One row per transfer with the columns player, position, from, to, league,
// season and price. Only the price column is interpreted; everything else is
// kept exactly as it appears in the file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// A single player's move between two clubs.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRecord {
    pub player: String,
    pub position: String,
    /// Source club.
    pub from: String,
    /// Destination club.
    pub to: String,
    pub league: String,
    pub season: String,
    /// `None` when the price column was blank or not a number.
    pub price: Option<f64>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// Header-keyed row. Columns not named here are ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct RawTransfer {
    player: String,
    position: String,
    from: String,
    to: String,
    league: String,
    season: String,
    #[serde(default)]
    price: Option<String>,
}

impl RawTransfer {
    fn into_record(self, row: usize) -> TransferRecord {
        let price = self.price.as_deref().and_then(|raw| {
            let parsed = parse_price(raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                warn!(
                    "row {}: discarding non-numeric price '{}' for '{}'",
                    row, raw, self.player
                );
            }
            parsed
        });

        TransferRecord {
            player: self.player,
            position: self.position,
            from: self.from,
            to: self.to,
            league: self.league,
            season: self.season,
            price,
        }
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Coerce a raw price cell. Blank, non-numeric and non-finite values all
/// become `None`.
pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Read transfers from any CSV source with a header row.
pub fn load_transfers_from_reader<R: Read>(rdr: R) -> Result<Vec<TransferRecord>, csv::Error> {
    let mut reader = csv::Reader::from_reader(rdr);
    let mut transfers = Vec::new();
    for (idx, result) in reader.deserialize::<RawTransfer>().enumerate() {
        let raw = result?;
        // Header is line 1, so the first data row is row 2.
        transfers.push(raw.into_record(idx + 2));
    }
    debug!("parsed {} transfer rows", transfers.len());
    Ok(transfers)
}

/// Load transfers from a CSV file.
pub fn load_transfers(path: &Path) -> Result<Vec<TransferRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_transfers_from_reader(file).map_err(|e| LoadError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
