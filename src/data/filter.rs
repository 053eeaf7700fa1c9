use super::model::{LeagueDataset, Match, PlayerStat, RoundStanding, SeasonRecord};

// ---------------------------------------------------------------------------
// Row selection for a (season, round) pair
// ---------------------------------------------------------------------------
//
// Every function here only selects and orders borrowed rows; turning them
// into display strings happens in `view`. A key with no matching rows gives
// an empty result, never an error.

/// Final-table rows of one season in source order (source order is rank).
pub fn season_table(dataset: &LeagueDataset, season_order: i64) -> Vec<&SeasonRecord> {
    dataset
        .seasons
        .iter()
        .filter(|r| r.season_order == season_order)
        .collect()
}

/// First row with the most goals scored.
pub fn best_attack<'a>(table: &[&'a SeasonRecord]) -> Option<&'a SeasonRecord> {
    table.iter().copied().fold(None, |best, row| match best {
        Some(b) if b.goals_scored >= row.goals_scored => Some(b),
        _ => Some(row),
    })
}

/// First row with the fewest goals conceded.
pub fn best_defence<'a>(table: &[&'a SeasonRecord]) -> Option<&'a SeasonRecord> {
    table.iter().copied().fold(None, |best, row| match best {
        Some(b) if b.goals_conceded <= row.goals_conceded => Some(b),
        _ => Some(row),
    })
}

/// Head of a stable descending sort on (straight reds, second yellows, yellows).
pub fn most_undisciplined<'a>(table: &[&'a SeasonRecord]) -> Option<&'a SeasonRecord> {
    let mut sorted = table.to_vec();
    sorted.sort_by(|a, b| discipline_key(b).cmp(&discipline_key(a)));
    sorted.first().copied()
}

fn discipline_key(row: &SeasonRecord) -> (u32, u32, u32) {
    (row.straight_reds, row.second_yellows, row.yellows)
}

/// Leading `n` rows of a pre-sorted player table for one season.
pub fn top_players(players: &[PlayerStat], season_order: i64, n: usize) -> Vec<&PlayerStat> {
    players
        .iter()
        .filter(|p| p.season_order == season_order)
        .take(n)
        .collect()
}

/// One team's cumulative standings across the season, by round.
pub fn position_trend<'a>(
    dataset: &'a LeagueDataset,
    season_order: i64,
    team: &str,
) -> Vec<&'a RoundStanding> {
    let mut rows: Vec<&RoundStanding> = dataset
        .round_standings
        .iter()
        .filter(|r| r.season_order == season_order && r.team == team)
        .collect();
    rows.sort_by_key(|r| r.round);
    rows
}

/// Cumulative standings after `round`, ascending by points (stable).
pub fn round_snapshot(dataset: &LeagueDataset, season_order: i64, round: u32) -> Vec<&RoundStanding> {
    let mut rows: Vec<&RoundStanding> = dataset
        .round_standings
        .iter()
        .filter(|r| r.season_order == season_order && r.round == round)
        .collect();
    rows.sort_by_key(|r| r.total_points);
    rows
}

/// Fixtures of one round in source order.
pub fn round_fixtures(dataset: &LeagueDataset, season_order: i64, round: u32) -> Vec<&Match> {
    dataset
        .matches
        .iter()
        .filter(|m| m.season_order == season_order && m.round == round)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::fixtures;
    use crate::data::model::PlayerMetric;

    #[test]
    fn season_table_keeps_source_order() {
        let ds = fixtures::dataset();
        let table = season_table(&ds, 16);
        let teams: Vec<&str> = table.iter().map(|r| r.team.as_str()).collect();
        assert_eq!(teams, ["Benfica", "Sporting", "Porto", "Braga"]);
        assert_eq!(table.len(), ds.team_count(16));
    }

    #[test]
    fn superlatives_pick_extremes() {
        let ds = fixtures::dataset();
        let table = season_table(&ds, 16);

        let attack = best_attack(&table).unwrap();
        let max_scored = table.iter().map(|r| r.goals_scored).max().unwrap();
        assert_eq!(attack.team, "Benfica");
        assert_eq!(attack.goals_scored, max_scored);

        let defence = best_defence(&table).unwrap();
        let min_conceded = table.iter().map(|r| r.goals_conceded).min().unwrap();
        assert_eq!(defence.team, "Sporting");
        assert_eq!(defence.goals_conceded, min_conceded);

        // Sporting and Porto share (2, 1, _); Porto has more yellows.
        assert_eq!(most_undisciplined(&table).unwrap().team, "Porto");
    }

    #[test]
    fn ties_go_to_the_first_row() {
        let ds = fixtures::dataset();
        let original = season_table(&ds, 15);
        // Porto and Sporting are tied on every card count in 14/15.
        assert_eq!(most_undisciplined(&original).unwrap().team, "Porto");

        let mut tied = original[2].clone();
        tied.goals_scored = original[0].goals_scored;
        tied.goals_conceded = original[1].goals_conceded;
        let table = vec![original[0], original[1], &tied];
        assert_eq!(best_attack(&table).unwrap().team, "Benfica");
        assert_eq!(best_defence(&table).unwrap().team, "Porto");
    }

    #[test]
    fn superlatives_of_empty_season_are_absent() {
        let ds = fixtures::dataset();
        let table = season_table(&ds, 30);
        assert!(table.is_empty());
        assert!(best_attack(&table).is_none());
        assert!(best_defence(&table).is_none());
        assert!(most_undisciplined(&table).is_none());
    }

    #[test]
    fn top_players_take_the_head_of_the_season() {
        let ds = fixtures::dataset();
        let top = top_players(&ds.scorers, 16, 3);
        let goals: Vec<u32> = top
            .iter()
            .map(|p| match p.metric {
                PlayerMetric::Goals(g) => g,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(goals, [32, 27, 20]);

        assert_eq!(top_players(&ds.scorers, 15, 3).len(), 2);
        assert!(top_players(&ds.assists, 15, 3).is_empty());
    }

    #[test]
    fn trend_is_ordered_by_round() {
        let ds = fixtures::dataset();
        let trend = position_trend(&ds, 16, "Benfica");
        let points: Vec<(u32, u32)> = trend.iter().map(|r| (r.round, r.position)).collect();
        assert_eq!(points, [(1, 3), (2, 2), (3, 1)]);
        assert_eq!(trend.len(), ds.rounds_for(16).len());
        assert!(trend.windows(2).all(|w| w[0].round < w[1].round));
    }

    #[test]
    fn snapshot_is_ascending_and_stable() {
        let ds = fixtures::dataset();
        let snapshot = round_snapshot(&ds, 16, 2);
        let rows: Vec<(&str, i64)> = snapshot
            .iter()
            .map(|r| (r.team.as_str(), r.total_points))
            .collect();
        assert_eq!(
            rows,
            [("Braga", 1), ("Benfica", 4), ("Porto", 4), ("Sporting", 6)]
        );
        let teams: BTreeSet<&str> = rows.iter().map(|(t, _)| *t).collect();
        assert_eq!(teams.len(), rows.len());
    }

    #[test]
    fn fixtures_keep_source_order() {
        let ds = fixtures::dataset();
        let games = round_fixtures(&ds, 16, 1);
        let results: Vec<&str> = games.iter().map(|m| m.result.as_str()).collect();
        assert_eq!(results, ["Benfica 4-0 Estoril", "Braga 1-3 Sporting"]);
    }

    #[test]
    fn unknown_round_selects_nothing() {
        let ds = fixtures::dataset();
        assert!(round_fixtures(&ds, 16, 3).is_empty());
        assert!(round_fixtures(&ds, 16, 40).is_empty());
        assert!(round_snapshot(&ds, 16, 40).is_empty());
        assert!(position_trend(&ds, 16, "Nacional").is_empty());
    }
}
