use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PathSettings;

/// Two-tier JSON file store: raw API responses and normalized collections
pub struct Cache {
    raw_dir: PathBuf,
    parsed_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance, creating both directories
    pub fn new<P: AsRef<Path>>(raw_dir: P, parsed_dir: P) -> Result<Self> {
        let raw_dir = raw_dir.as_ref().to_path_buf();
        let parsed_dir = parsed_dir.as_ref().to_path_buf();

        fs::create_dir_all(&raw_dir)
            .with_context(|| format!("Failed to create raw data directory {}", raw_dir.display()))?;
        fs::create_dir_all(&parsed_dir).with_context(|| {
            format!("Failed to create clean data directory {}", parsed_dir.display())
        })?;

        Ok(Self {
            raw_dir,
            parsed_dir,
        })
    }

    pub fn from_paths(paths: &PathSettings) -> Result<Self> {
        Self::new(&paths.data_dir, &paths.clean_data_dir)
    }

    /// Save raw API response to cache
    pub fn save_raw(&self, name: &str, data: &Value) -> Result<()> {
        let file_path = self.build_raw_path(name);
        self.write_json(&file_path, data)?;
        info!("Saved raw data to {}", file_path.display());
        Ok(())
    }

    /// Load raw API response from cache
    pub fn load_raw(&self, name: &str) -> Result<Option<Value>> {
        let file_path = self.build_raw_path(name);
        self.read_json_opt(&file_path)
    }

    /// Load raw API response, failing if it was never fetched
    pub fn require_raw(&self, name: &str) -> Result<Value> {
        self.load_raw(name)?.ok_or_else(|| {
            anyhow::anyhow!(
                "File not found: {} (run `fetch` first)",
                self.build_raw_path(name).display()
            )
        })
    }

    /// Save parsed data to cache
    pub fn save_parsed<T: Serialize>(&self, name: &str, data: &T) -> Result<()> {
        let file_path = self.build_parsed_path(name);
        self.write_json(&file_path, data)?;
        info!("{} has been saved in {}", name, file_path.display());
        Ok(())
    }

    /// Load parsed data from cache
    pub fn load_parsed<T: for<'de> Deserialize<'de>>(&self, name: &str) -> Result<Option<T>> {
        let file_path = self.build_parsed_path(name);
        self.read_json_opt(&file_path)
    }

    pub fn exists_raw(&self, name: &str) -> bool {
        self.build_raw_path(name).exists()
    }

    // --- Helper Methods ---

    fn build_raw_path(&self, name: &str) -> PathBuf {
        self.raw_dir.join(format!("{}.json", name))
    }

    fn build_parsed_path(&self, name: &str) -> PathBuf {
        self.parsed_dir.join(format!("{}.json", name))
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json).with_context(|| {
            format!(
                "Invalid JSON format in {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()
            )
        })?;
        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_cache(name: &str) -> (PathBuf, Cache) {
        let root = std::env::temp_dir().join(format!("chess_etl_cache_{}", name));
        let _ = fs::remove_dir_all(&root);
        let cache = Cache::new(root.join("data"), root.join("cleaned_data")).unwrap();
        (root, cache)
    }

    #[test]
    fn test_raw_save_and_load() {
        let (root, cache) = temp_cache("raw");

        let data = json!({ "username": "alice", "joined": 1 });
        cache.save_raw("basic", &data).unwrap();

        assert!(cache.exists_raw("basic"));
        assert_eq!(cache.load_raw("basic").unwrap(), Some(data));
        assert!(root.join("data").join("basic.json").exists());

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_missing_raw_file() {
        let (root, cache) = temp_cache("missing");

        assert_eq!(cache.load_raw("stats").unwrap(), None);
        let err = cache.require_raw("stats").unwrap_err();
        assert!(err.to_string().starts_with("File not found"));

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_parsed_round_trip_and_invalid_json() {
        let (root, cache) = temp_cache("parsed");

        cache.save_parsed("numbers", &vec![1, 2, 3]).unwrap();
        let loaded: Option<Vec<i32>> = cache.load_parsed("numbers").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));

        fs::write(root.join("cleaned_data").join("broken.json"), "{ not json").unwrap();
        let broken: Result<Option<Vec<i32>>> = cache.load_parsed("broken");
        assert!(broken.is_err());

        fs::remove_dir_all(root).unwrap();
    }
}
