use std::path::Path;

use crate::config::DashboardConfig;
use crate::data::loader::{load_dir, LoadError};
use crate::data::model::LeagueDataset;
use crate::view::{build_view, ViewModel};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded tables, immutable until a new folder is opened.
    pub dataset: LeagueDataset,

    /// Season slider domain: (SeasonOrder, label), ascending.
    pub seasons: Vec<(i64, String)>,

    /// Currently selected season order.
    pub season_order: i64,

    /// Currently selected round, always inside the season's recorded rounds
    /// when the season has any.
    pub round: u32,

    /// View for the current selection, rebuilt on every change.
    pub view: ViewModel,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Bumped on every successful folder load. egui caches image bytes by
    /// URI, so each dataset's logo needs its own.
    logo_generation: u64,
}

impl AppState {
    /// Build the initial state: latest season, `initial_round_offset`
    /// rounds before the last recorded round.
    pub fn new(config: DashboardConfig, dataset: LeagueDataset) -> Self {
        let seasons = dataset.season_options();
        let season_order = seasons.last().map(|(order, _)| *order).unwrap_or_default();
        let round = dataset
            .max_round()
            .unwrap_or_default()
            .saturating_sub(config.initial_round_offset);
        let round = clamp_to_season(&dataset, season_order, round);
        let view = build_view(&dataset, season_order, round, config.top_n);

        Self {
            config,
            dataset,
            seasons,
            season_order,
            round,
            view,
            status_message: None,
            logo_generation: 0,
        }
    }

    /// Ingest a newly loaded dataset, resetting the selection.
    pub fn set_dataset(&mut self, dataset: LeagueDataset) {
        let config = self.config.clone();
        *self = Self::new(config, dataset);
    }

    /// Load another data folder. On failure the current dataset stays.
    pub fn open_folder(&mut self, dir: &Path) -> Result<(), LoadError> {
        let dataset = load_dir(dir, &self.config)?;
        log::info!("Switched dataset to {}", dir.display());
        self.config.data_dir = dir.to_path_buf();
        let generation = self.logo_generation + 1;
        self.set_dataset(dataset);
        self.logo_generation = generation;
        Ok(())
    }

    /// Move the season slider. The round is re-scoped to the new season.
    pub fn select_season(&mut self, season_order: i64) {
        if season_order == self.season_order {
            return;
        }
        self.season_order = season_order;
        self.clamp_round();
        self.rebuild();
    }

    pub fn select_round(&mut self, round: u32) {
        if round == self.round {
            return;
        }
        self.round = round;
        self.clamp_round();
        self.rebuild();
    }

    /// Image URI of the current dataset's logo.
    pub fn logo_uri(&self) -> String {
        format!("bytes://league-logo-{}.png", self.logo_generation)
    }

    /// Recorded rounds of the selected season.
    pub fn round_range(&self) -> Option<(u32, u32)> {
        let marks = &self.view.round_marks;
        Some((*marks.first()?, *marks.last()?))
    }

    /// Position of the selected season inside [`AppState::seasons`].
    pub fn season_index(&self) -> usize {
        self.seasons
            .iter()
            .position(|(order, _)| *order == self.season_order)
            .unwrap_or_default()
    }

    fn clamp_round(&mut self) {
        self.round = clamp_to_season(&self.dataset, self.season_order, self.round);
    }

    /// Recompute the view from scratch for the current selection.
    fn rebuild(&mut self) {
        self.view = build_view(
            &self.dataset,
            self.season_order,
            self.round,
            self.config.top_n,
        );
    }
}

/// Pull `round` into the season's recorded rounds; seasons without any
/// round data leave it untouched.
fn clamp_to_season(dataset: &LeagueDataset, season_order: i64, round: u32) -> u32 {
    let rounds = dataset.rounds_for(season_order);
    match (rounds.first(), rounds.last()) {
        (Some(&min), Some(&max)) => round.clamp(min, max),
        _ => round,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::data::model::RoundStanding;

    fn state() -> AppState {
        AppState::new(DashboardConfig::default(), fixtures::dataset())
    }

    #[test]
    fn starts_on_latest_season_with_clamped_round() {
        let st = state();
        assert_eq!(st.season_order, 16);
        // max round 3 minus offset 5 saturates to 0, clamped up to round 1
        assert_eq!(st.round, 1);
        assert_eq!(st.view.season_label, "2015/16");
        assert_eq!(st.view.round, 1);
        assert_eq!(st.season_index(), 1);
    }

    #[test]
    fn offset_is_applied_when_in_range() {
        let config = DashboardConfig {
            initial_round_offset: 1,
            ..DashboardConfig::default()
        };
        let st = AppState::new(config, fixtures::dataset());
        assert_eq!(st.round, 2);
        assert_eq!(st.round_range(), Some((1, 3)));
    }

    #[test]
    fn changing_season_rescopes_the_round() {
        let mut st = state();
        st.select_round(3);
        assert_eq!(st.round, 3);

        st.select_season(15);
        assert_eq!(st.round, 2);
        assert_eq!(st.round_range(), Some((1, 2)));
        assert_eq!(st.view.season_order, 15);
        assert_eq!(st.view.round, 2);
        assert_eq!(st.view.standings[0].team, "Benfica");
    }

    #[test]
    fn out_of_range_round_is_clamped() {
        let mut st = state();
        st.select_round(99);
        assert_eq!(st.round, 3);
        assert!(st.view.fixtures.is_empty());
    }

    #[test]
    fn rounds_are_rescoped_to_a_later_start() {
        let mut ds = fixtures::dataset();
        ds.round_standings
            .retain(|r: &RoundStanding| r.season_order != 15 || r.round == 2);
        let mut st = AppState::new(DashboardConfig::default(), ds);
        st.select_season(15);
        assert_eq!(st.round, 2);
        assert_eq!(st.round_range(), Some((2, 2)));
    }

    #[test]
    fn failed_reload_keeps_the_current_dataset() {
        let mut st = state();
        let missing = tempfile::tempdir().unwrap();
        assert!(st.open_folder(missing.path()).is_err());
        assert_eq!(st.view.standings.len(), 4);
        assert_eq!(st.config.data_dir, DashboardConfig::default().data_dir);
    }

    #[test]
    fn reload_resets_the_selection() {
        let mut st = state();
        st.select_season(15);

        let dir = tempfile::tempdir().unwrap();
        fixtures::write_dir(dir.path());
        st.open_folder(dir.path()).unwrap();
        assert_eq!(st.season_order, 16);
        assert_eq!(st.config.data_dir, dir.path());
    }

    #[test]
    fn each_successful_load_gets_a_fresh_logo_uri() {
        let mut st = state();
        let first = st.logo_uri();

        let missing = tempfile::tempdir().unwrap();
        assert!(st.open_folder(missing.path()).is_err());
        assert_eq!(st.logo_uri(), first);

        let dir = tempfile::tempdir().unwrap();
        fixtures::write_dir(dir.path());
        st.open_folder(dir.path()).unwrap();
        let second = st.logo_uri();
        assert_ne!(second, first);

        st.open_folder(dir.path()).unwrap();
        assert_ne!(st.logo_uri(), second);
    }
}
