// Per-club incoming-player rosters.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::record::TransferRecord;
use crate::ReportError;

/// A player arriving at a club, as listed in the club report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingPlayer {
    pub player: String,
    pub position: String,
    /// Club the player left.
    pub from: String,
}

/// Incoming players grouped by destination club.
///
/// Clubs keep the order in which they were first requested; players keep the
/// order in which their transfers appear in the source data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClubStats {
    entries: Vec<(String, Vec<IncomingPlayer>)>,
}

impl ClubStats {
    /// Build from already grouped entries. Repeated club names are merged into
    /// the first occurrence.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<IncomingPlayer>)>,
    {
        let mut stats = ClubStats::default();
        for (club, players) in entries {
            match stats.index_of(&club) {
                Some(i) => stats.entries[i].1.extend(players),
                None => stats.entries.push((club, players)),
            }
        }
        stats
    }

    /// Players recorded for `club`, or `None` if the club was not requested.
    pub fn get(&self, club: &str) -> Option<&[IncomingPlayer]> {
        self.index_of(club).map(|i| self.entries[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[IncomingPlayer])> {
        self.entries
            .iter()
            .map(|(club, players)| (club.as_str(), players.as_slice()))
    }

    pub fn clubs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(club, _)| club.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, club: &str) -> Option<usize> {
        self.entries.iter().position(|(name, _)| name == club)
    }
}

/// Group incoming players by the requested destination clubs.
///
/// Club names are trimmed before use. Every requested club that never
/// appears as a `to` club fails the build, and all of them are reported
/// together.
pub fn build_club_stats<S: AsRef<str>>(
    transfers: &[TransferRecord],
    clubs: &[S],
) -> Result<ClubStats, ReportError> {
    let requested: Vec<&str> = clubs.iter().map(|c| AsRef::<str>::as_ref(c).trim()).collect();

    let destinations: HashSet<&str> = transfers.iter().map(|t| t.to.as_str()).collect();
    let mut missing: Vec<String> = Vec::new();
    for club in &requested {
        if !destinations.contains(club) && !missing.iter().any(|m| m == club) {
            missing.push(club.to_string());
        }
    }
    if !missing.is_empty() {
        return Err(ReportError::UnknownClubs { clubs: missing });
    }

    let mut entries: Vec<(String, Vec<IncomingPlayer>)> = Vec::new();
    let mut slot: HashMap<&str, usize> = HashMap::new();
    for club in requested {
        slot.entry(club).or_insert_with(|| {
            entries.push((club.to_string(), Vec::new()));
            entries.len() - 1
        });
    }

    for transfer in transfers {
        if let Some(&i) = slot.get(transfer.to.as_str()) {
            entries[i].1.push(IncomingPlayer {
                player: transfer.player.clone(),
                position: transfer.position.clone(),
                from: transfer.from.clone(),
            });
        }
    }

    debug!(
        "club stats: {} clubs, {} incoming players",
        entries.len(),
        entries.iter().map(|(_, p)| p.len()).sum::<usize>()
    );

    Ok(ClubStats { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transfer(player: &str, from: &str, to: &str) -> TransferRecord {
        TransferRecord {
            player: player.into(),
            position: "Midfielder".into(),
            from: from.into(),
            to: to.into(),
            league: "La Liga".into(),
            season: "2019/20".into(),
            price: None,
        }
    }

    fn sample() -> Vec<TransferRecord> {
        vec![
            transfer("Hazard", "Chelsea", "Real Madrid"),
            transfer("Griezmann", "Atletico", "Barcelona"),
            transfer("Jovic", "Frankfurt", "Real Madrid"),
            transfer("Joao Felix", "Benfica", "Atletico"),
        ]
    }

    #[test]
    fn groups_players_by_destination_in_source_order() {
        let stats = build_club_stats(&sample(), &["Real Madrid", "Barcelona"]).unwrap();

        assert_eq!(stats.len(), 2);
        let madrid = stats.get("Real Madrid").unwrap();
        assert_eq!(madrid.len(), 2);
        assert_eq!(madrid[0].player, "Hazard");
        assert_eq!(madrid[0].from, "Chelsea");
        assert_eq!(madrid[0].position, "Midfielder");
        assert_eq!(madrid[1].player, "Jovic");

        let barca = stats.get("Barcelona").unwrap();
        assert_eq!(barca.len(), 1);
        assert_eq!(barca[0].player, "Griezmann");

        assert!(stats.get("Atletico").is_none());
    }

    #[test]
    fn keeps_requested_club_order() {
        let stats = build_club_stats(&sample(), &["Barcelona", "Atletico", "Real Madrid"]).unwrap();
        let clubs: Vec<&str> = stats.clubs().collect();
        assert_eq!(clubs, vec!["Barcelona", "Atletico", "Real Madrid"]);
    }

    #[test]
    fn requested_names_are_trimmed_and_duplicates_collapse() {
        let stats =
            build_club_stats(&sample(), &["  Real Madrid ", "Real Madrid", "Barcelona"]).unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats.get("Real Madrid").unwrap().len(), 2);
    }

    #[test]
    fn reports_every_missing_club() {
        let err = build_club_stats(&sample(), &["Real Madrid", "Nonexistent FC", "AlsoFake"])
            .unwrap_err();
        assert_eq!(
            err,
            ReportError::UnknownClubs {
                clubs: vec!["Nonexistent FC".into(), "AlsoFake".into()],
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("Nonexistent FC,AlsoFake"), "got: {msg}");
    }

    #[test]
    fn source_only_club_is_missing() {
        // Chelsea only ever sells in the sample data.
        let err = build_club_stats(&sample(), &["Chelsea"]).unwrap_err();
        assert!(matches!(err, ReportError::UnknownClubs { ref clubs } if clubs == &["Chelsea"]));
    }

    #[test]
    fn empty_request_yields_empty_stats() {
        let stats = build_club_stats::<&str>(&sample(), &[]).unwrap();
        assert!(stats.is_empty());
    }

    #[test]
    fn from_entries_merges_repeated_clubs() {
        let p = |name: &str| IncomingPlayer {
            player: name.into(),
            position: "Defender".into(),
            from: "Ajax".into(),
        };
        let stats = ClubStats::from_entries(vec![
            ("Juventus".to_string(), vec![p("de Ligt")]),
            ("Barcelona".to_string(), vec![p("de Jong")]),
            ("Juventus".to_string(), vec![p("Ronaldo")]),
        ]);
        assert_eq!(stats.len(), 2);
        let juve: Vec<&str> = stats
            .get("Juventus")
            .unwrap()
            .iter()
            .map(|p| p.player.as_str())
            .collect();
        assert_eq!(juve, vec!["de Ligt", "Ronaldo"]);
    }
}
