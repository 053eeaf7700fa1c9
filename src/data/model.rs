use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// SeasonCode – normalised "YYyy" season identifier
// ---------------------------------------------------------------------------

/// Four-character, zero-padded season code such as `"1516"`.
///
/// Source files written by pandas store the code as an integer, so
/// `405` arrives without its leading zero and is padded to `"0405"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeasonCode(String);

impl SeasonCode {
    /// Normalise a raw code. Returns `None` for empty, non-numeric or
    /// over-long input.
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.trim();
        if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(SeasonCode(format!("{digits:0>4}")))
    }

    /// Display label, `"1516"` → `"2015/16"`.
    pub fn label(&self) -> String {
        format!("20{}/{}", &self.0[..2], &self.0[2..])
    }
}

impl fmt::Display for SeasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Table rows
// ---------------------------------------------------------------------------

/// Final season table for one team (one row per season and team).
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRecord {
    pub season: SeasonCode,
    pub season_order: i64,
    pub team: String,
    pub games: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: i64,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goal_difference: i64,
    /// Straight red cards.
    pub straight_reds: u32,
    /// Reds from a second yellow.
    pub second_yellows: u32,
    pub yellows: u32,
}

impl SeasonRecord {
    pub fn total_reds(&self) -> u32 {
        self.straight_reds + self.second_yellows
    }
}

/// Cumulative table entry for one team after one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundStanding {
    pub season: SeasonCode,
    pub season_order: i64,
    pub round: u32,
    pub team: String,
    pub total_points: i64,
    pub position: u32,
}

/// A fixture with its Bet365 closing odds and the result label.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub season: SeasonCode,
    pub season_order: i64,
    pub round: u32,
    pub date: String,
    pub odds_home: Option<f64>,
    pub odds_draw: Option<f64>,
    pub odds_away: Option<f64>,
    pub result: String,
}

/// Which player table a [`PlayerStat`] row comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMetric {
    Goals(u32),
    Assists(u32),
    Cards {
        yellows: u32,
        straight_reds: u32,
        second_yellows: u32,
    },
}

/// One row of a pre-sorted player leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStat {
    pub season: SeasonCode,
    pub season_order: i64,
    pub player: String,
    pub team: String,
    pub metric: PlayerMetric,
}

// ---------------------------------------------------------------------------
// LeagueDataset – the immutable context every view is built from
// ---------------------------------------------------------------------------

/// Everything loaded at startup. Never mutated afterwards; replacing the
/// data means building a new `LeagueDataset`.
#[derive(Debug, Clone)]
pub struct LeagueDataset {
    pub seasons: Vec<SeasonRecord>,
    pub round_standings: Vec<RoundStanding>,
    pub matches: Vec<Match>,
    pub scorers: Vec<PlayerStat>,
    pub assists: Vec<PlayerStat>,
    pub discipline: Vec<PlayerStat>,
    /// Encoded header image (PNG).
    pub logo: Arc<[u8]>,
}

impl LeagueDataset {
    /// Distinct season orders present in the final tables, ascending,
    /// with their display labels.
    pub fn season_options(&self) -> Vec<(i64, String)> {
        let mut seen = BTreeSet::new();
        let mut options: Vec<(i64, String)> = self
            .seasons
            .iter()
            .filter(|r| seen.insert(r.season_order))
            .map(|r| (r.season_order, r.season.label()))
            .collect();
        options.sort_by_key(|(order, _)| *order);
        options
    }

    /// Display label for a season order, looked up across all tables.
    pub fn season_label(&self, season_order: i64) -> Option<String> {
        self.seasons
            .iter()
            .map(|r| (r.season_order, &r.season))
            .chain(self.round_standings.iter().map(|r| (r.season_order, &r.season)))
            .chain(self.matches.iter().map(|r| (r.season_order, &r.season)))
            .find(|(order, _)| *order == season_order)
            .map(|(_, code)| code.label())
    }

    /// Sorted distinct rounds recorded for a season.
    pub fn rounds_for(&self, season_order: i64) -> Vec<u32> {
        self.round_standings
            .iter()
            .filter(|r| r.season_order == season_order)
            .map(|r| r.round)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Highest round recorded in any retained season.
    pub fn max_round(&self) -> Option<u32> {
        self.round_standings.iter().map(|r| r.round).max()
    }

    /// Distinct teams that appear in a season's round-by-round tables.
    pub fn team_count(&self, season_order: i64) -> usize {
        self.round_standings
            .iter()
            .filter(|r| r.season_order == season_order)
            .map(|r| r.team.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_code_pads_and_labels() {
        let code = SeasonCode::parse("1516").unwrap();
        assert_eq!(code.to_string(), "1516");
        assert_eq!(code.label(), "2015/16");

        let padded = SeasonCode::parse("405").unwrap();
        assert_eq!(padded.to_string(), "0405");
        assert_eq!(padded.label(), "2004/05");

        assert_eq!(SeasonCode::parse(" 910 ").unwrap().label(), "2009/10");
    }

    #[test]
    fn season_code_rejects_garbage() {
        assert!(SeasonCode::parse("").is_none());
        assert!(SeasonCode::parse("15/16").is_none());
        assert!(SeasonCode::parse("20152016").is_none());
        assert!(SeasonCode::parse("15a6").is_none());
    }

    #[test]
    fn season_options_are_distinct_and_ordered() {
        let ds = crate::data::fixtures::dataset();
        let options = ds.season_options();
        assert_eq!(
            options,
            vec![(15, "2014/15".to_string()), (16, "2015/16".to_string())]
        );
        assert_eq!(ds.rounds_for(16), vec![1, 2, 3]);
        assert_eq!(ds.max_round(), Some(3));
        assert_eq!(ds.season_label(15).as_deref(), Some("2014/15"));
        assert_eq!(ds.season_label(99), None);
        assert_eq!(ds.team_count(16), 4);
        assert_eq!(ds.team_count(15), 3);
    }
}
