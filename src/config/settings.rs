use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
    pub max_attempts: u32,
    pub retry_backoff_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.chess.com".to_string(),
            user_agent: "ChessEtl/0.1 (+https://www.chess.com/news/view/published-data-api)"
                .to_string(),
            timeout_secs: 10,
            rate_limit_ms: 250,
            max_attempts: 5,
            retry_backoff_ms: 1000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PathSettings {
    /// Raw API responses (basic.json, stats.json, match.json)
    pub data_dir: PathBuf,
    /// Normalized collections (player_profile.json, match_history.json)
    pub clean_data_dir: PathBuf,
    pub database_path: PathBuf,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            clean_data_dir: PathBuf::from("cleaned_data"),
            database_path: PathBuf::from("chess_etl.db"),
        }
    }
}

impl PathSettings {
    fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = env::var("DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Ok(dir) = env::var("CLEAN_DATA_DIR") {
            self.clean_data_dir = PathBuf::from(dir);
        }
        if let Ok(path) = env::var("DATABASE_PATH") {
            self.database_path = PathBuf::from(path);
        }
        self
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub paths: PathSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            paths: PathSettings::default(),
        }
    }

    /// Defaults with paths overridden by DATA_DIR, CLEAN_DATA_DIR and DATABASE_PATH
    pub fn from_env() -> Self {
        Self {
            api: ApiSettings::default(),
            paths: PathSettings::default().with_env_overrides(),
        }
    }

    pub fn with_paths(mut self, paths: PathSettings) -> Self {
        self.paths = paths;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::new();
        assert_eq!(config.paths.data_dir, PathBuf::from("data"));
        assert_eq!(config.paths.clean_data_dir, PathBuf::from("cleaned_data"));
        assert_eq!(config.api.max_attempts, 5);
        assert_eq!(config.api.base_url, "https://api.chess.com");
    }
}
