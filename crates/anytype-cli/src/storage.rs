//! API key storage for persisting login state.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use anytype::ApiKey;

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Stored key data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredKey {
    pub api_key: ApiKey,
    /// Base URL the key was issued by.
    pub base_url: String,
    pub app_name: String,
    pub created_at: DateTime<Utc>,
}

/// Get the key file path.
pub fn key_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "anytype").context("Could not determine data directory")?;

    Ok(dirs.data_dir().join("api_key.json"))
}

pub fn save(stored: &StoredKey) -> Result<PathBuf> {
    let path = key_path()?;
    save_at(&path, stored)?;
    Ok(path)
}

pub fn load() -> Result<Option<StoredKey>> {
    load_at(&key_path()?)
}

/// Returns whether a key was removed.
pub fn clear() -> Result<bool> {
    clear_at(&key_path()?)
}

fn save_at(path: &Path, stored: &StoredKey) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create data directory")?;
    }

    let json = serde_json::to_string_pretty(stored)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    // Private from creation (Unix only)
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).context("Failed to open key file")?;

    // An existing file keeps its old mode on open
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(0o600))
        .context("Failed to restrict key file permissions")?;

    file.write_all(json.as_bytes()).context("Failed to write key file")?;

    Ok(())
}

fn load_at(path: &Path) -> Result<Option<StoredKey>> {
    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(path).context("Failed to read key file")?;
    let stored = serde_json::from_str(&json).context("Invalid key file")?;

    Ok(Some(stored))
}

fn clear_at(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    fs::remove_file(path).context("Failed to remove key file")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> StoredKey {
        StoredKey {
            api_key: ApiKey::new("k-123456"),
            base_url: anytype::DEFAULT_BASE_URL.to_string(),
            app_name: "anytype-cli".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("api_key.json");

        save_at(&path, &stored()).unwrap();
        let loaded = load_at(&path).unwrap().unwrap();

        assert_eq!(loaded.api_key.expose(), "k-123456");
        assert_eq!(loaded.app_name, "anytype-cli");
    }

    #[cfg(unix)]
    #[test]
    fn key_file_is_private() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.json");

        save_at(&path, &stored()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn overwriting_tightens_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.json");
        fs::write(&path, "{}").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        save_at(&path, &stored()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(load_at(&path).unwrap().unwrap().api_key.expose(), "k-123456");
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_at(&dir.path().join("api_key.json")).unwrap().is_none());
    }

    #[test]
    fn clear_reports_removal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.json");

        assert!(!clear_at(&path).unwrap());
        save_at(&path, &stored()).unwrap();
        assert!(clear_at(&path).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.json");
        fs::write(&path, "not json").unwrap();
        assert!(load_at(&path).is_err());
    }
}
