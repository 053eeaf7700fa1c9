use crate::data::filter;
use crate::data::model::{LeagueDataset, Match, PlayerMetric, PlayerStat, SeasonRecord};

// ---------------------------------------------------------------------------
// View model: everything the window shows, already formatted
// ---------------------------------------------------------------------------

pub const STANDINGS_COLUMNS: [&str; 10] = [
    "Position",
    "Team",
    "Games",
    "Won",
    "Drawn",
    "Lost",
    "Points",
    "GoalsScored",
    "GoalsConceded",
    "GoalsDifference",
];

pub const FIXTURE_COLUMNS: [&str; 5] = ["Date", "B365H", "B365D", "B365A", "Match"];

#[derive(Debug, Clone, PartialEq)]
pub struct StandingRow {
    pub position: usize,
    pub team: String,
    pub games: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points: i64,
    pub goals_scored: u32,
    pub goals_conceded: u32,
    pub goal_difference: i64,
}

impl StandingRow {
    fn new(position: usize, record: &SeasonRecord) -> Self {
        Self {
            position,
            team: record.team.clone(),
            games: record.games,
            won: record.won,
            drawn: record.drawn,
            lost: record.lost,
            points: record.points,
            goals_scored: record.goals_scored,
            goals_conceded: record.goals_conceded,
            goal_difference: record.goal_difference,
        }
    }

    /// Cell texts in [`STANDINGS_COLUMNS`] order.
    pub fn cells(&self) -> [String; 10] {
        [
            self.position.to_string(),
            self.team.clone(),
            self.games.to_string(),
            self.won.to_string(),
            self.drawn.to_string(),
            self.lost.to_string(),
            self.points.to_string(),
            self.goals_scored.to_string(),
            self.goals_conceded.to_string(),
            self.goal_difference.to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRow {
    pub date: String,
    pub odds_home: Option<f64>,
    pub odds_draw: Option<f64>,
    pub odds_away: Option<f64>,
    pub result: String,
}

impl FixtureRow {
    fn new(game: &Match) -> Self {
        Self {
            date: game.date.clone(),
            odds_home: game.odds_home,
            odds_draw: game.odds_draw,
            odds_away: game.odds_away,
            result: game.result.clone(),
        }
    }

    /// Cell texts in [`FIXTURE_COLUMNS`] order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.date.clone(),
            odds_cell(self.odds_home),
            odds_cell(self.odds_draw),
            odds_cell(self.odds_away),
            self.result.clone(),
        ]
    }
}

/// Two decimals, or a dash when the bookmaker line is missing.
fn odds_cell(odds: Option<f64>) -> String {
    odds.map_or_else(|| "–".to_string(), |o| format!("{o:.2}"))
}

/// A highlighted team with its detail line, e.g. ("Benfica", "88 Goals Scored").
#[derive(Debug, Clone, PartialEq)]
pub struct Superlative {
    pub team: String,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Lines with markers, x = round, y = position.
    LineMarkers,
    /// Horizontal bars, x = points, y = category index.
    HorizontalBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    /// Axis label for categorical charts (team name on the bar chart).
    pub category: Option<String>,
    /// Annotation drawn next to the point.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub season_order: i64,
    pub round: u32,
    pub season_label: String,

    pub season_title: String,
    pub round_title: String,
    pub standings_title: String,
    pub fixtures_title: String,

    /// Rounds recorded for the season; bounds and marks of the round slider.
    pub round_marks: Vec<u32>,

    pub standings: Vec<StandingRow>,
    pub best_attack: Option<Superlative>,
    pub best_defence: Option<Superlative>,
    pub most_undisciplined: Option<Superlative>,

    pub top_scorers: Vec<String>,
    pub top_assists: Vec<String>,
    pub top_discipline: Vec<String>,

    pub position_trend: ChartSpec,
    pub round_snapshot: ChartSpec,
    pub fixtures: Vec<FixtureRow>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Recompute the whole view for one (season, round) pair.
///
/// Pairs with no matching rows produce empty tables and charts.
pub fn build_view(dataset: &LeagueDataset, season_order: i64, round: u32, top_n: usize) -> ViewModel {
    let season_label = dataset.season_label(season_order).unwrap_or_default();
    let season_string = format!("Season {season_label}");

    let table = filter::season_table(dataset, season_order);
    if table.is_empty() {
        log::warn!("No final table for season order {season_order}");
    }
    let standings: Vec<StandingRow> = table
        .iter()
        .enumerate()
        .map(|(i, record)| StandingRow::new(i + 1, record))
        .collect();

    let best_attack = filter::best_attack(&table).map(|r| Superlative {
        team: r.team.clone(),
        detail: format!("{} Goals Scored", r.goals_scored),
    });
    let best_defence = filter::best_defence(&table).map(|r| Superlative {
        team: r.team.clone(),
        detail: format!("{} Goals Conceded", r.goals_conceded),
    });
    let most_undisciplined = filter::most_undisciplined(&table).map(|r| Superlative {
        team: r.team.clone(),
        detail: format!("{} Reds, {} Yellows", r.total_reds(), r.yellows),
    });

    let top_list = |players: &[PlayerStat]| -> Vec<String> {
        filter::top_players(players, season_order, top_n)
            .into_iter()
            .enumerate()
            .map(|(i, stat)| format_player(i + 1, stat))
            .collect()
    };

    let champion = standings.first().map(|row| row.team.as_str());
    let position_trend = trend_chart(dataset, season_order, champion);
    let round_snapshot = snapshot_chart(dataset, season_order, round);

    let fixtures = filter::round_fixtures(dataset, season_order, round)
        .into_iter()
        .map(FixtureRow::new)
        .collect();

    log::debug!("Rebuilt view for season {season_order} ({season_label}), round {round}");

    ViewModel {
        season_order,
        round,
        season_title: format!(
            "Check how your team performed along the years - now rewinding {season_string}"
        ),
        round_title: format!("{season_string} storyline, by the times of round {round}"),
        standings_title: format!("{season_string} - Final Classification"),
        fixtures_title: format!("Round {round} Matches - Betting Odds and Results"),
        season_label,
        round_marks: dataset.rounds_for(season_order),
        best_attack,
        best_defence,
        most_undisciplined,
        top_scorers: top_list(&dataset.scorers),
        top_assists: top_list(&dataset.assists),
        top_discipline: top_list(&dataset.discipline),
        standings,
        position_trend,
        round_snapshot,
        fixtures,
    }
}

/// `"1. Jonas (Benfica) - 32 Goals"` and its assist / card variants.
fn format_player(rank: usize, stat: &PlayerStat) -> String {
    let metric = match stat.metric {
        PlayerMetric::Goals(goals) => format!("{goals} Goals"),
        PlayerMetric::Assists(assists) => format!("{assists} Assists"),
        PlayerMetric::Cards {
            yellows,
            straight_reds,
            second_yellows,
        } => format!("{yellows} Y, {} R", straight_reds + second_yellows),
    };
    format!("{rank}. {} ({}) - {metric}", stat.player, stat.team)
}

fn trend_chart(dataset: &LeagueDataset, season_order: i64, champion: Option<&str>) -> ChartSpec {
    let Some(team) = champion else {
        return ChartSpec {
            kind: ChartKind::LineMarkers,
            title: String::new(),
            points: Vec::new(),
        };
    };

    let points = filter::position_trend(dataset, season_order, team)
        .into_iter()
        .map(|r| ChartPoint {
            x: f64::from(r.round),
            y: f64::from(r.position),
            category: None,
            text: r.position.to_string(),
        })
        .collect();

    ChartSpec {
        kind: ChartKind::LineMarkers,
        title: format!("{team} - Road to the Top (position by round)"),
        points,
    }
}

fn snapshot_chart(dataset: &LeagueDataset, season_order: i64, round: u32) -> ChartSpec {
    let points = filter::round_snapshot(dataset, season_order, round)
        .into_iter()
        .enumerate()
        .map(|(i, r)| ChartPoint {
            x: r.total_points as f64,
            y: i as f64,
            category: Some(r.team.clone()),
            text: r.total_points.to_string(),
        })
        .collect();

    ChartSpec {
        kind: ChartKind::HorizontalBar,
        title: format!("Round {round} Live Classification"),
        points,
    }
}
