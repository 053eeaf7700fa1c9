use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::loader::LoadError;

/// Name of the optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

// ---------------------------------------------------------------------------
// DashboardConfig
// ---------------------------------------------------------------------------

/// Startup settings. Every field has a default, so a partial
/// `dashboard.json` only overrides what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory holding the six CSV tables and the logo.
    pub data_dir: PathBuf,
    /// Logo file name, relative to `data_dir`.
    pub logo_file: String,
    /// Seasons with a lower `SeasonOrder` are dropped at load time.
    pub first_season_order: i64,
    /// Length of the top scorers / assists / discipline lists.
    pub top_n: usize,
    /// The round selector starts this many rounds before the last one.
    pub initial_round_offset: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("assets"),
            logo_file: "liga-nos-png.png".to_string(),
            first_season_order: 15,
            top_n: 3,
            initial_round_offset: 5,
        }
    }
}

impl DashboardConfig {
    /// Read [`CONFIG_FILE`] from the working directory, falling back to
    /// defaults when it does not exist.
    pub fn load() -> Result<Self, LoadError> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            log::info!("No {CONFIG_FILE} found, using default settings");
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| LoadError::Config {
            path: path.display().to_string(),
            source,
        })
    }

    fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_published_dashboard() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.first_season_order, 15);
        assert_eq!(cfg.top_n, 3);
        assert_eq!(cfg.initial_round_offset, 5);
        assert_eq!(cfg.data_dir, PathBuf::from("assets"));
        assert_eq!(cfg.logo_file, "liga-nos-png.png");
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = DashboardConfig::from_json(r#"{ "data_dir": "data", "top_n": 5 }"#).unwrap();
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
        assert_eq!(cfg.top_n, 5);
        assert_eq!(cfg.first_season_order, 15);
        assert_eq!(cfg.logo_file, "liga-nos-png.png");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ top_n: ").unwrap();
        let err = DashboardConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, LoadError::Config { .. }));
    }
}
