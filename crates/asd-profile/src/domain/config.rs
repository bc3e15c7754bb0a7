//! Store location configuration.
//!
//! [`StoreConfig`] is built once at startup and passed down explicitly.  The
//! domain never reads environment variables itself; the infrastructure layer
//! fills the struct from `ASD_CONFIG_PATH` and the current directory.

use std::path::PathBuf;

/// File name of the profile store inside its directory.
pub const STORE_FILE_NAME: &str = ".asd_config.json";

/// Environment variable that overrides the store directory.
pub const CONFIG_DIR_ENV: &str = "ASD_CONFIG_PATH";

/// Where to look for the profile store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory named by the override variable, if set.
    pub config_dir: Option<PathBuf>,
    /// Directory the tool was started in.
    pub working_dir: PathBuf,
}

impl StoreConfig {
    /// Resolves the store file path.
    ///
    /// The override directory wins whenever it is set, whether or not a
    /// store file exists there yet.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::path::PathBuf;
    /// use asd_profile::domain::StoreConfig;
    ///
    /// let cfg = StoreConfig {
    ///     config_dir: Some(PathBuf::from("/etc/asd")),
    ///     working_dir: PathBuf::from("/home/me"),
    /// };
    /// assert_eq!(cfg.resolve_path(), PathBuf::from("/etc/asd/.asd_config.json"));
    /// ```
    pub fn resolve_path(&self) -> PathBuf {
        self.config_dir
            .as_ref()
            .unwrap_or(&self.working_dir)
            .join(STORE_FILE_NAME)
    }
}
