use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use super::model::{
    LeagueDataset, Match, PlayerMetric, PlayerStat, RoundStanding, SeasonCode, SeasonRecord,
};
use crate::config::DashboardConfig;

pub const CLASS_FILE: &str = "df_class.csv";
pub const ROUNDS_FILE: &str = "df_bcr.csv";
pub const GAMES_FILE: &str = "df_games.csv";
pub const SCORERS_FILE: &str = "df_scorers.csv";
pub const ASSISTS_FILE: &str = "df_assists.csv";
pub const CARDS_FILE: &str = "df_player_cards.csv";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing the '{column}' column")]
    MissingColumn { path: String, column: &'static str },

    #[error("{path}: invalid season code '{code}'")]
    SeasonCode { path: String, code: String },

    #[error("invalid settings in {path}: {source}")]
    Config {
        path: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load all six tables and the logo from `dir`.
///
/// Any missing file, missing column or bad value fails the whole load;
/// callers never see a partially populated dataset.
pub fn load_dir(dir: &Path, config: &DashboardConfig) -> Result<LeagueDataset, LoadError> {
    let cutoff = config.first_season_order;

    let seasons = load_table::<RawClass>(dir, CLASS_FILE, cutoff)?;
    let round_standings = load_table::<RawRoundStanding>(dir, ROUNDS_FILE, cutoff)?;
    let matches = load_table::<RawGame>(dir, GAMES_FILE, cutoff)?;
    let scorers = load_table::<RawScorer>(dir, SCORERS_FILE, cutoff)?;
    let assists = load_table::<RawAssist>(dir, ASSISTS_FILE, cutoff)?;
    let discipline = load_table::<RawCards>(dir, CARDS_FILE, cutoff)?;

    let logo_path = dir.join(&config.logo_file);
    let logo: Arc<[u8]> = std::fs::read(&logo_path)
        .map_err(|source| LoadError::Io {
            path: logo_path.display().to_string(),
            source,
        })?
        .into();

    log::info!(
        "Loaded seasons from order {cutoff} in {}: {} team seasons, {} round standings, {} matches",
        dir.display(),
        seasons.len(),
        round_standings.len(),
        matches.len()
    );
    if let Some(latest) = seasons.iter().max_by_key(|r| r.season_order) {
        log::debug!("Latest season {} (order {})", latest.season, latest.season_order);
    }

    Ok(LeagueDataset {
        seasons,
        round_standings,
        matches,
        scorers,
        assists,
        discipline,
        logo,
    })
}

fn load_table<T: RawRow>(dir: &Path, file: &str, cutoff: i64) -> Result<Vec<T::Row>, LoadError> {
    let path = dir.join(file);
    let display = path.display().to_string();
    let handle = File::open(&path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;
    let rows = parse_table::<T, _>(handle, &display, cutoff)?;
    log::info!("{file}: {} rows retained", rows.len());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Reader-based parsing (usable without files)
// ---------------------------------------------------------------------------

/// A raw CSV row carrying the `Season` / `SeasonOrder` pair every table has.
pub(crate) trait RawRow: DeserializeOwned {
    type Row;
    /// Columns that must appear in the header.
    const COLUMNS: &'static [&'static str];

    fn season(&self) -> &str;
    fn season_order(&self) -> i64;
    fn into_row(self, season: SeasonCode) -> Self::Row;
}

/// Parse one table, dropping rows whose `SeasonOrder` is below `cutoff`.
///
/// A leading unnamed index column (pandas `to_csv` default) is ignored.
pub(crate) fn parse_table<T: RawRow, R: Read>(
    rdr: R,
    path: &str,
    cutoff: i64,
) -> Result<Vec<T::Row>, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_string(),
        source,
    };

    let mut reader = csv::Reader::from_reader(rdr);
    let headers = reader.headers().map_err(csv_err)?.clone();
    if let Some(column) = T::COLUMNS
        .iter()
        .copied()
        .find(|col| !headers.iter().any(|h| h.trim() == *col))
    {
        return Err(LoadError::MissingColumn {
            path: path.to_string(),
            column,
        });
    }

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        let raw = result.map_err(csv_err)?;
        if raw.season_order() < cutoff {
            continue;
        }
        let season = SeasonCode::parse(raw.season()).ok_or_else(|| LoadError::SeasonCode {
            path: path.to_string(),
            code: raw.season().to_string(),
        })?;
        rows.push(raw.into_row(season));
    }
    Ok(rows)
}

/// Card counts come out of pandas as `2`, `2.0` or an empty cell.
fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let text = raw.trim();
    if text.is_empty() {
        return Ok(0);
    }
    let value: f64 = text.parse().map_err(D::Error::custom)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(D::Error::custom(format!("'{text}' is not a count")));
    }
    Ok(value as u32)
}

// ---------------------------------------------------------------------------
// Raw CSV serde structs (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct RawClass {
    Season: String,
    SeasonOrder: i64,
    Team: String,
    Games: u32,
    Won: u32,
    Drawn: u32,
    Lost: u32,
    Points: i64,
    GoalsScored: u32,
    GoalsConceded: u32,
    GoalsDifference: i64,
    #[serde(deserialize_with = "count")]
    VE: u32,
    #[serde(rename = "2A", deserialize_with = "count")]
    SecondYellow: u32,
    #[serde(deserialize_with = "count")]
    A: u32,
}

impl RawRow for RawClass {
    type Row = SeasonRecord;
    const COLUMNS: &'static [&'static str] = &[
        "Season",
        "SeasonOrder",
        "Team",
        "Games",
        "Won",
        "Drawn",
        "Lost",
        "Points",
        "GoalsScored",
        "GoalsConceded",
        "GoalsDifference",
        "VE",
        "2A",
        "A",
    ];

    fn season(&self) -> &str {
        &self.Season
    }

    fn season_order(&self) -> i64 {
        self.SeasonOrder
    }

    fn into_row(self, season: SeasonCode) -> SeasonRecord {
        SeasonRecord {
            season,
            season_order: self.SeasonOrder,
            team: self.Team.trim().to_string(),
            games: self.Games,
            won: self.Won,
            drawn: self.Drawn,
            lost: self.Lost,
            points: self.Points,
            goals_scored: self.GoalsScored,
            goals_conceded: self.GoalsConceded,
            goal_difference: self.GoalsDifference,
            straight_reds: self.VE,
            second_yellows: self.SecondYellow,
            yellows: self.A,
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct RawRoundStanding {
    Season: String,
    SeasonOrder: i64,
    Round: u32,
    Team: String,
    TotalPoints: i64,
    Position: u32,
}

impl RawRow for RawRoundStanding {
    type Row = RoundStanding;
    const COLUMNS: &'static [&'static str] =
        &["Season", "SeasonOrder", "Round", "Team", "TotalPoints", "Position"];

    fn season(&self) -> &str {
        &self.Season
    }

    fn season_order(&self) -> i64 {
        self.SeasonOrder
    }

    fn into_row(self, season: SeasonCode) -> RoundStanding {
        RoundStanding {
            season,
            season_order: self.SeasonOrder,
            round: self.Round,
            team: self.Team.trim().to_string(),
            total_points: self.TotalPoints,
            position: self.Position,
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct RawGame {
    Season: String,
    SeasonOrder: i64,
    Round: u32,
    Date: String,
    B365H: Option<f64>,
    B365D: Option<f64>,
    B365A: Option<f64>,
    Match: String,
}

impl RawRow for RawGame {
    type Row = Match;
    const COLUMNS: &'static [&'static str] = &[
        "Season",
        "SeasonOrder",
        "Round",
        "Date",
        "B365H",
        "B365D",
        "B365A",
        "Match",
    ];

    fn season(&self) -> &str {
        &self.Season
    }

    fn season_order(&self) -> i64 {
        self.SeasonOrder
    }

    fn into_row(self, season: SeasonCode) -> Match {
        Match {
            season,
            season_order: self.SeasonOrder,
            round: self.Round,
            date: self.Date,
            odds_home: self.B365H,
            odds_draw: self.B365D,
            odds_away: self.B365A,
            result: self.Match,
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct RawScorer {
    Season: String,
    SeasonOrder: i64,
    Player: String,
    Team: String,
    #[serde(deserialize_with = "count")]
    G: u32,
}

impl RawRow for RawScorer {
    type Row = PlayerStat;
    const COLUMNS: &'static [&'static str] = &["Season", "SeasonOrder", "Player", "Team", "G"];

    fn season(&self) -> &str {
        &self.Season
    }

    fn season_order(&self) -> i64 {
        self.SeasonOrder
    }

    fn into_row(self, season: SeasonCode) -> PlayerStat {
        PlayerStat {
            season,
            season_order: self.SeasonOrder,
            player: self.Player.trim().to_string(),
            team: self.Team.trim().to_string(),
            metric: PlayerMetric::Goals(self.G),
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct RawAssist {
    Season: String,
    SeasonOrder: i64,
    Player: String,
    Team: String,
    #[serde(deserialize_with = "count")]
    ASS: u32,
}

impl RawRow for RawAssist {
    type Row = PlayerStat;
    const COLUMNS: &'static [&'static str] = &["Season", "SeasonOrder", "Player", "Team", "ASS"];

    fn season(&self) -> &str {
        &self.Season
    }

    fn season_order(&self) -> i64 {
        self.SeasonOrder
    }

    fn into_row(self, season: SeasonCode) -> PlayerStat {
        PlayerStat {
            season,
            season_order: self.SeasonOrder,
            player: self.Player.trim().to_string(),
            team: self.Team.trim().to_string(),
            metric: PlayerMetric::Assists(self.ASS),
        }
    }
}

#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
pub(crate) struct RawCards {
    Season: String,
    SeasonOrder: i64,
    Player: String,
    Team: String,
    #[serde(deserialize_with = "count")]
    A: u32,
    #[serde(deserialize_with = "count")]
    VE: u32,
    #[serde(rename = "2A", deserialize_with = "count")]
    SecondYellow: u32,
}

impl RawRow for RawCards {
    type Row = PlayerStat;
    const COLUMNS: &'static [&'static str] =
        &["Season", "SeasonOrder", "Player", "Team", "A", "VE", "2A"];

    fn season(&self) -> &str {
        &self.Season
    }

    fn season_order(&self) -> i64 {
        self.SeasonOrder
    }

    fn into_row(self, season: SeasonCode) -> PlayerStat {
        PlayerStat {
            season,
            season_order: self.SeasonOrder,
            player: self.Player.trim().to_string(),
            team: self.Team.trim().to_string(),
            metric: PlayerMetric::Cards {
                yellows: self.A,
                straight_reds: self.VE,
                second_yellows: self.SecondYellow,
            },
        }
    }
}
