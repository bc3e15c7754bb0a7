//! AddProfileUseCase: load, collect, merge, persist and report one profile.
//!
//! # Lifecycle of one invocation
//!
//! ```text
//! Resolve ──► Load ──► Collect ──► Merge ──► Persist ──► Report   (Reported)
//!               │                    │
//!               │                    └─ name taken, user declines  (Aborted)
//!               └─ unreadable / invalid JSON                        (Failed)
//! ```
//!
//! - A missing file, a blank file and a file whose top-level JSON value is
//!   not an array all start from an empty list.  Only the last one is worth
//!   a warning.
//! - When the new name already exists the user must answer `y` to replace
//!   it.  Any other answer leaves the store file untouched.
//! - Nothing is written until the merge is decided, so every failure before
//!   `Persist` leaves the file exactly as it was.

use std::path::{Path, PathBuf};

use asd_core::{CodecError, LoadOutcome, Profile, ProfileName, ProfileStore};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::collect_profile::{collect_profile, Prompt, PromptError};

/// Errors raised by a [`ProfileRepository`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store file exists but could not be read.
    #[error("error reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file was read but its content is not a valid store.
    #[error("error reading {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// The store's parent directory could not be created.
    #[error("could not create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store could not be serialized.
    #[error("error writing {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// The serialized store could not be written to disk.
    #[error("error writing {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error type for the add-profile flow.
#[derive(Debug, Error)]
pub enum AddProfileError {
    /// Loading the existing store failed; nothing was collected or written.
    #[error(transparent)]
    Load(RepositoryError),

    /// The terminal failed or closed while prompting; nothing was written.
    #[error(transparent)]
    Input(#[from] PromptError),

    /// Writing the merged store failed.
    #[error(transparent)]
    Persist(RepositoryError),
}

/// Final state of a completed add.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// The store was written with the new profile at the end.
    Added {
        path: PathBuf,
        /// Number of profiles in the store after the write.
        total: usize,
        profile: Profile,
        /// `true` if an existing profile with the same name was replaced.
        replaced: bool,
    },
    /// The name already existed and the user chose not to overwrite it.
    Declined { name: ProfileName },
}

/// Storage abstraction for the profile store.
///
/// The production implementation is
/// [`JsonFileRepository`](crate::infrastructure::storage::JsonFileRepository);
/// unit tests use the `mockall`-generated `MockProfileRepository`.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository {
    /// Path of the backing store, for messages.
    fn location(&self) -> PathBuf;

    /// Reads the current store.
    fn load(&self) -> Result<LoadOutcome, RepositoryError>;

    /// Replaces the stored content with `store`.
    fn save(&self, store: &ProfileStore) -> Result<(), RepositoryError>;
}

/// Returns `true` only for an explicit `y` (any case, surrounding blanks ignored).
pub fn confirms_overwrite(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Orchestrates one profile add against a repository and a prompt.
pub struct AddProfileUseCase<R, P> {
    repository: R,
    prompt: P,
}

impl<R: ProfileRepository, P: Prompt> AddProfileUseCase<R, P> {
    pub fn new(repository: R, prompt: P) -> Self {
        Self { repository, prompt }
    }

    /// Runs the whole flow once.
    ///
    /// # Errors
    ///
    /// - [`AddProfileError::Load`] if the existing store cannot be read or parsed.
    /// - [`AddProfileError::Input`] if the terminal fails during prompting.
    /// - [`AddProfileError::Persist`] if the merged store cannot be written.
    pub fn run(&mut self) -> Result<AddOutcome, AddProfileError> {
        let path = self.repository.location();
        debug!(path = %path.display(), "resolved profile store");

        let outcome = self.repository.load().map_err(AddProfileError::Load)?;
        self.announce_load(&path, &outcome)?;
        let mut store = outcome.into_store();

        self.prompt.say("")?;
        self.prompt.say(&format!("Adding a profile to {}", path.display()))?;
        let profile = collect_profile(&mut self.prompt)?;
        let added = profile.clone();

        let replaced = match store.append(profile) {
            Ok(()) => false,
            Err(profile) => {
                let question = format!(
                    "A profile named '{}' already exists. Overwrite? (y/n): ",
                    profile.name
                );
                let answer = self.prompt.ask(&question)?;
                if !confirms_overwrite(&answer) {
                    info!(name = %profile.name, "overwrite declined, store left unchanged");
                    self.prompt.say("No profile added.")?;
                    return Ok(AddOutcome::Declined { name: profile.name });
                }
                store.replace(profile);
                true
            }
        };

        self.repository
            .save(&store)
            .map_err(AddProfileError::Persist)?;
        info!(
            path = %path.display(),
            name = %added.name,
            total = store.len(),
            replaced,
            "profile store written"
        );

        self.report(&path, store.len(), &added)?;
        Ok(AddOutcome::Added {
            path,
            total: store.len(),
            profile: added,
            replaced,
        })
    }

    fn announce_load(&mut self, path: &Path, outcome: &LoadOutcome) -> Result<(), PromptError> {
        match outcome {
            LoadOutcome::Missing => {
                debug!(path = %path.display(), "profile store does not exist yet");
                self.prompt.say(&format!(
                    "Config file {} does not exist; it will be created.",
                    path.display()
                ))
            }
            LoadOutcome::NotAList { found } => {
                warn!(
                    path = %path.display(),
                    found,
                    "profile store is not a JSON array, starting empty"
                );
                self.prompt.say(&format!(
                    "Warning: {} does not contain a list; starting with an empty list.",
                    path.display()
                ))
            }
            LoadOutcome::Empty => {
                debug!(path = %path.display(), "profile store is blank");
                Ok(())
            }
            LoadOutcome::Loaded(store) => {
                let dups = store.duplicate_names();
                if !dups.is_empty() {
                    warn!(
                        path = %path.display(),
                        names = ?dups,
                        "profile store already holds duplicate names"
                    );
                }
                debug!(count = store.len(), "loaded profile store");
                Ok(())
            }
        }
    }

    fn report(&mut self, path: &Path, total: usize, profile: &Profile) -> Result<(), PromptError> {
        self.prompt.say("")?;
        self.prompt.say(&format!(
            "Added the profile to {}. The store now holds {total} profile(s).",
            path.display()
        ))?;
        self.prompt
            .say(&format!("Config file location: {}", path.display()))?;
        self.prompt.say("")?;
        self.prompt.say("New profile:")?;
        for (key, value) in profile.fields() {
            self.prompt.say(&format!("  {key}: {value}"))?;
        }
        Ok(())
    }
}
