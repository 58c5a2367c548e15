//! Shared application settings (catalog database location).
//!
//! Front ends read and write `~/.config/component-librarian/settings.toml`
//! through [`Settings`] so database-path resolution is consistent.

use std::io;
use std::path::{Path, PathBuf};

use librarian_db::DEFAULT_DB_NAME;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not encode settings: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Contents of `settings.toml`.
///
/// Keys this crate doesn't use are carried in `other` so a save never drops
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(flatten)]
    pub other: toml::Table,
}

/// The `[database]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(flatten)]
    pub other: toml::Table,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Like [`Settings::load`], but a missing or unreadable file yields the
    /// defaults. Anything other than a missing file is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                log::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Saved database path, if set and non-empty.
    pub fn database_path(&self) -> Option<&Path> {
        self.database
            .path
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    pub fn set_database_path(&mut self, path: Option<PathBuf>) {
        self.database.path = path;
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to `path`, creating parent directories. The file is replaced
    /// by rename so readers never see a partial write.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let encoded = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let staged = path.with_extension("toml.tmp");
        std::fs::write(&staged, encoded)?;
        std::fs::rename(&staged, path)?;
        log::debug!("Updated {}", path.display());
        Ok(())
    }
}

/// Canonical path to the settings file: `~/.config/component-librarian/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("component-librarian").join("settings.toml")
}

/// Resolve the catalog database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.path` in `settings.toml`
/// 3. `component_librarian.db` in the current directory
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    resolve_database_path_with(cli_override, &settings_path())
}

/// [`resolve_database_path`] against an explicit settings file.
pub fn resolve_database_path_with(cli_override: Option<PathBuf>, settings: &Path) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    Settings::load_or_default(settings)
        .database_path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_NAME))
}

/// Save (or clear) the database path in the shared settings file.
pub fn save_database_path(path: Option<&Path>) -> Result<(), SettingsError> {
    let file = settings_path();
    let mut settings = Settings::load_or_default(&file);
    settings.set_database_path(path.map(Path::to_path_buf));
    settings.save(&file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(dir: &Path, db: &str) -> PathBuf {
        let file = dir.join("settings.toml");
        let mut settings = Settings::default();
        settings.set_database_path(Some(PathBuf::from(db)));
        settings.save(&file).unwrap();
        file
    }

    #[test]
    fn cli_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let file = saved(dir.path(), "/saved.db");

        let resolved = resolve_database_path_with(Some(PathBuf::from("/cli.db")), &file);
        assert_eq!(resolved, PathBuf::from("/cli.db"));
    }

    #[test]
    fn saved_path_beats_default() {
        let dir = tempfile::tempdir().unwrap();
        let file = saved(dir.path(), "/saved.db");

        assert_eq!(
            resolve_database_path_with(None, &file),
            PathBuf::from("/saved.db")
        );
    }

    #[test]
    fn falls_back_to_default_name() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing.toml");
        assert_eq!(
            resolve_database_path_with(None, &file),
            PathBuf::from("component_librarian.db")
        );
    }

    #[test]
    fn clearing_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested").join("settings.toml");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(
            &file,
            "[database]\npath = \"/old.db\"\ntimeout = 5\n\n[ui]\ntheme = \"dark\"\n",
        )
        .unwrap();

        let mut settings = Settings::load(&file).unwrap();
        assert_eq!(settings.database_path(), Some(Path::new("/old.db")));
        settings.set_database_path(None);
        settings.save(&file).unwrap();

        let reloaded = Settings::load(&file).unwrap();
        assert_eq!(reloaded.database_path(), None);
        assert_eq!(reloaded.database.other["timeout"].as_integer(), Some(5));
        assert_eq!(reloaded.other["ui"]["theme"].as_str(), Some("dark"));
        assert!(!file.with_extension("toml.tmp").exists());
    }

    #[test]
    fn empty_or_malformed_values_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("settings.toml");
        std::fs::write(&file, "[database]\npath = \"\"\n").unwrap();
        assert_eq!(Settings::load_or_default(&file).database_path(), None);

        std::fs::write(&file, "not = [valid").unwrap();
        assert!(matches!(
            Settings::load(&file),
            Err(SettingsError::Parse(_))
        ));
        assert_eq!(Settings::load_or_default(&file), Settings::default());

        std::fs::write(&file, "[database]\npath = 42\n").unwrap();
        assert_eq!(
            resolve_database_path_with(None, &file),
            PathBuf::from("component_librarian.db")
        );
    }
}
