//! JSON file persistence for the profile store.
//!
//! The store lives at `<dir>/.asd_config.json` where `<dir>` is
//! `$ASD_CONFIG_PATH` when set and non-empty, otherwise the current directory.
//!
//! Writes go through a temporary file created next to the target, which is
//! flushed to disk and then renamed over it.  Readers therefore see either the
//! old content or the new content, never a partial write.  There is no
//! locking: two concurrent writers both succeed and the last rename wins.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use asd_core::{decode_store, encode_store, LoadOutcome, ProfileStore};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::application::add_profile::{ProfileRepository, RepositoryError};
use crate::domain::config::{StoreConfig, CONFIG_DIR_ENV};

/// Builds the [`StoreConfig`] for this process from `ASD_CONFIG_PATH` and
/// the current directory.
///
/// # Errors
///
/// Returns the I/O error if the current directory cannot be determined.
pub fn store_config_from_env() -> io::Result<StoreConfig> {
    let working_dir = std::env::current_dir()?;
    Ok(store_config_from(std::env::var_os(CONFIG_DIR_ENV), working_dir))
}

/// Builds a [`StoreConfig`] from an already-read override value.
///
/// An empty override counts as unset.
pub fn store_config_from(config_dir: Option<OsString>, working_dir: PathBuf) -> StoreConfig {
    StoreConfig {
        config_dir: config_dir.filter(|dir| !dir.is_empty()).map(PathBuf::from),
        working_dir,
    }
}

/// [`ProfileRepository`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository for the store file `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository for the path `config` resolves to.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.resolve_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the store file lives in; `.` for a bare file name.
    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    fn write_error(&self, source: io::Error) -> RepositoryError {
        RepositoryError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl ProfileRepository for JsonFileRepository {
    fn location(&self) -> PathBuf {
        self.path.clone()
    }

    fn load(&self) -> Result<LoadOutcome, RepositoryError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode_store(&text).map_err(|source| RepositoryError::Decode {
                path: self.path.clone(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(LoadOutcome::Missing),
            Err(source) => Err(RepositoryError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn save(&self, store: &ProfileStore) -> Result<(), RepositoryError> {
        let text = encode_store(store).map_err(|source| RepositoryError::Encode {
            path: self.path.clone(),
            source,
        })?;

        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|source| RepositoryError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        // Same directory as the target so the final rename never crosses filesystems.
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        tmp.write_all(text.as_bytes())
            .map_err(|e| self.write_error(e))?;
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(|e| self.write_error(e))?;
        }
        tmp.as_file().sync_all().map_err(|e| self.write_error(e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        debug!(path = %self.path.display(), bytes = text.len(), "replaced profile store");
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use asd_core::{Profile, ProfileName};
    use tempfile::tempdir;

    fn named(name: &str) -> Profile {
        Profile::new(ProfileName::new(name).expect("valid name"))
    }

    // ── store_config_from ─────────────────────────────────────────────────────

    #[test]
    fn test_store_config_uses_override_dir() {
        let cfg = store_config_from(Some(OsString::from("/cfg")), PathBuf::from("/cwd"));
        assert_eq!(cfg.resolve_path(), PathBuf::from("/cfg/.asd_config.json"));
    }

    #[test]
    fn test_store_config_treats_empty_override_as_unset() {
        let cfg = store_config_from(Some(OsString::new()), PathBuf::from("/cwd"));
        assert_eq!(cfg.config_dir, None);
        assert_eq!(cfg.resolve_path(), PathBuf::from("/cwd/.asd_config.json"));
    }

    #[test]
    fn test_store_config_without_override_uses_working_dir() {
        let cfg = store_config_from(None, PathBuf::from("/cwd"));
        assert_eq!(cfg.resolve_path(), PathBuf::from("/cwd/.asd_config.json"));
    }

    // ── load ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_file_is_missing() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join(".asd_config.json"));
        assert_eq!(repo.load().unwrap(), LoadOutcome::Missing);
    }

    #[test]
    fn test_load_blank_file_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".asd_config.json");
        fs::write(&path, "  \n\n").unwrap();

        let outcome = JsonFileRepository::new(&path).load().unwrap();

        assert_eq!(outcome, LoadOutcome::Empty);
    }

    #[test]
    fn test_load_wrong_shape_is_not_a_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".asd_config.json");
        fs::write(&path, r#""not a list""#).unwrap();

        let outcome = JsonFileRepository::new(&path).load().unwrap();

        assert_eq!(outcome, LoadOutcome::NotAList { found: "string" });
    }

    #[test]
    fn test_load_invalid_json_is_decode_error_with_path() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join(".asd_config.json");
        fs::write(&path, "[{ broken").unwrap();

        // Act
        let err = JsonFileRepository::new(&path).load().unwrap_err();

        // Assert
        match err {
            RepositoryError::Decode { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[test]
    fn test_load_directory_in_place_of_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".asd_config.json");
        fs::create_dir(&path).unwrap();

        let err = JsonFileRepository::new(&path).load().unwrap_err();

        assert!(matches!(err, RepositoryError::Read { .. }));
    }

    // ── save ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_creates_missing_parent_directories() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join("a").join("b").join(".asd_config.json");
        let repo = JsonFileRepository::new(&path);

        // Act
        repo.save(&ProfileStore::from(vec![named("prod")])).unwrap();

        // Assert
        assert!(path.is_file());
    }

    #[test]
    fn test_save_then_load_returns_same_records() {
        // Arrange
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join(".asd_config.json"));
        let mut first = named("prod");
        first.mirror_url = Some("https://镜像.example".to_string());
        first.force_overwrite = true;
        let mut second = named("dev");
        second.choose_tag = Some("nightly".to_string());
        let store = ProfileStore::from(vec![first, second]);

        // Act
        repo.save(&store).unwrap();
        let loaded = repo.load().unwrap();

        // Assert
        assert_eq!(loaded, LoadOutcome::Loaded(store));
    }

    #[test]
    fn test_save_replaces_previous_content_completely() {
        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join(".asd_config.json");
        fs::write(&path, "x".repeat(4096)).unwrap();
        let repo = JsonFileRepository::new(&path);

        // Act
        repo.save(&ProfileStore::new()).unwrap();

        // Assert
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_save_leaves_no_temporary_files_behind() {
        let dir = tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join(".asd_config.json"));

        repo.save(&ProfileStore::from(vec![named("prod")])).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_when_parent_is_a_file_is_create_dir_error() {
        // Arrange
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();
        let repo = JsonFileRepository::new(blocker.join(".asd_config.json"));

        // Act
        let err = repo.save(&ProfileStore::new()).unwrap_err();

        // Assert
        assert!(matches!(err, RepositoryError::CreateDir { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_keeps_existing_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        // Arrange
        let dir = tempdir().unwrap();
        let path = dir.path().join(".asd_config.json");
        fs::write(&path, "[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        // Act
        JsonFileRepository::new(&path)
            .save(&ProfileStore::from(vec![named("prod")]))
            .unwrap();

        // Assert
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_bare_file_name_uses_current_directory_as_parent() {
        let repo = JsonFileRepository::new(".asd_config.json");
        assert_eq!(repo.parent_dir(), Path::new("."));
    }
}
