//! Events Config - pool sizing and dispatch tracing
//!
//! Loaded from `events.json` in the global config directory
//! (`<config_dir>/kindle/`) and then the project directory (`.kindle/`);
//! project values win.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name
pub const EVENTS_CONFIG_FILE: &str = "events.json";

const PROJECT_CONFIG_DIR: &str = ".kindle";

// ============================================================================
// Pool Config
// ============================================================================

/// Event pool sizing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolConfig {
    /// Maximum retained records (None = unbounded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    /// Records constructed up front (None = 0)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preallocate: Option<usize>,
}

impl PoolConfig {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            preallocate: None,
        }
    }

    pub fn preallocate_count(&self) -> usize {
        self.preallocate.unwrap_or(0)
    }
}

// ============================================================================
// Events Config
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsConfig {
    #[serde(default)]
    pub pool: PoolConfig,

    /// Trace every dispatch (None = off)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_mode: Option<bool>,
}

impl EventsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_debug_mode(&self) -> bool {
        self.debug_mode.unwrap_or(false)
    }

    // ========================================================================
    // Load / Save
    // ========================================================================

    /// Global + project merged load. Missing files fall back to defaults.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| Error::Config(format!("Cannot get current directory: {}", e)))?;
        Self::load_from_dirs(global_dir().as_deref(), &cwd)
    }

    /// `<global>/events.json` merged with `<project_dir>/.kindle/events.json`
    pub fn load_from_dirs(global: Option<&Path>, project_dir: &Path) -> Result<Self> {
        let mut config = Self::new();

        if let Some(dir) = global {
            if let Some(global) = Self::load_optional(&dir.join(EVENTS_CONFIG_FILE))? {
                config.merge(global);
            }
        }

        let project_file = project_dir.join(PROJECT_CONFIG_DIR).join(EVENTS_CONFIG_FILE);
        if let Some(project) = Self::load_optional(&project_file)? {
            config.merge(project);
        }

        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(path).map(Some)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write {}: {}", path.display(), e)))
    }

    // ========================================================================
    // Merge
    // ========================================================================

    /// Merge another config (other wins wherever it sets a value)
    pub fn merge(&mut self, other: EventsConfig) {
        if let Some(capacity) = other.pool.capacity {
            self.pool.capacity = Some(capacity);
        }
        if let Some(count) = other.pool.preallocate {
            self.pool.preallocate = Some(count);
        }
        if let Some(enabled) = other.debug_mode {
            self.debug_mode = Some(enabled);
        }
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.pool.capacity = Some(capacity);
        self
    }

    pub fn preallocate(mut self, count: usize) -> Self {
        self.pool.preallocate = Some(count);
        self
    }

    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.debug_mode = Some(enabled);
        self
    }
}

fn global_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kindle"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_are_unbounded() {
        let config = EventsConfig::default();
        assert!(config.pool.capacity.is_none());
        assert_eq!(config.pool.preallocate_count(), 0);
        assert!(!config.is_debug_mode());
    }

    #[test]
    fn test_parse_camel_case() {
        let config: EventsConfig = serde_json::from_str(
            r#"{ "pool": { "capacity": 64, "preallocate": 8 }, "debugMode": true }"#,
        )
        .unwrap();
        assert_eq!(
            config.pool,
            PoolConfig {
                capacity: Some(64),
                preallocate: Some(8),
            }
        );
        assert!(config.is_debug_mode());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: EventsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EventsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(EVENTS_CONFIG_FILE);
        let config = EventsConfig::new().pool_capacity(16).preallocate(2);

        config.save_to(&path).unwrap();
        let loaded = EventsConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_optional_missing_file() {
        let dir = TempDir::new().unwrap();
        let loaded = EventsConfig::load_optional(&dir.path().join(EVENTS_CONFIG_FILE)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_invalid_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(EVENTS_CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let err = EventsConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = EventsConfig::new().pool_capacity(8).preallocate(4);
        base.merge(EventsConfig::new().pool_capacity(32).debug_mode(true));

        assert_eq!(base.pool.capacity, Some(32));
        assert_eq!(base.pool.preallocate, Some(4));
        assert!(base.is_debug_mode());
    }

    #[test]
    fn test_merge_explicit_off_overrides() {
        let mut global = EventsConfig::new().preallocate(4).debug_mode(true);
        global.merge(EventsConfig::new().preallocate(0).debug_mode(false));

        assert_eq!(global.pool.preallocate_count(), 0);
        assert!(!global.is_debug_mode());
    }

    #[test]
    fn test_absent_fields_do_not_override() {
        let mut global = EventsConfig::new().preallocate(4).debug_mode(true);
        global.merge(serde_json::from_str(r#"{ "pool": { "capacity": 8 } }"#).unwrap());

        assert_eq!(global.pool.capacity, Some(8));
        assert_eq!(global.pool.preallocate_count(), 4);
        assert!(global.is_debug_mode());
    }

    #[test]
    fn test_load_from_dirs_project_wins() {
        let global = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        std::fs::write(
            global.path().join(EVENTS_CONFIG_FILE),
            r#"{ "pool": { "capacity": 16, "preallocate": 4 }, "debugMode": true }"#,
        )
        .unwrap();
        let project_file = project.path().join(".kindle").join(EVENTS_CONFIG_FILE);
        std::fs::create_dir_all(project_file.parent().unwrap()).unwrap();
        std::fs::write(
            &project_file,
            r#"{ "pool": { "preallocate": 0 }, "debugMode": false }"#,
        )
        .unwrap();

        let config = EventsConfig::load_from_dirs(Some(global.path()), project.path()).unwrap();

        assert_eq!(config.pool.capacity, Some(16));
        assert_eq!(config.pool.preallocate_count(), 0);
        assert!(!config.is_debug_mode());
    }

    #[test]
    fn test_load_from_dirs_without_files_is_default() {
        let project = TempDir::new().unwrap();
        let config = EventsConfig::load_from_dirs(None, project.path()).unwrap();
        assert_eq!(config, EventsConfig::default());
    }
}
