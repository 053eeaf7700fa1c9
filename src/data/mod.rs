/// Data layer: core types, loading, and row selection.
///
/// Architecture:
/// ```text
///  df_class / df_bcr / df_games / df_scorers / df_assists / df_player_cards (.csv)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + season cutoff → LeagueDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LeagueDataset  │  immutable tables, owned by AppState
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (season, round) → borrowed rows
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;

#[cfg(test)]
pub(crate) mod fixtures;
