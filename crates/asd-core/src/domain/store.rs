//! ProfileStore: the ordered list of records held in one store file.
//!
//! Order is significant: records are written back in the order they were
//! loaded, and new records go to the end.  Names are unique through the
//! public mutators; [`ProfileStore::duplicate_names`] exists because a file
//! edited by hand can still arrive with duplicates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::profile::{Profile, ProfileName};
use super::record::StoredProfile;

/// Ordered, name-keyed collection of [`StoredProfile`] records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileStore {
    records: Vec<StoredProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the records in store order.
    pub fn records(&self) -> &[StoredProfile] {
        &self.records
    }

    /// Returns the set of distinct names.
    pub fn names(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.name().as_str()).collect()
    }

    /// Returns `true` if a record named `name` exists.
    pub fn contains(&self, name: &ProfileName) -> bool {
        self.records.iter().any(|r| r.name() == name)
    }

    /// Returns the first record named `name`.
    pub fn get(&self, name: &ProfileName) -> Option<&StoredProfile> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Appends `profile` if its name is not taken.
    ///
    /// Returns the profile back in `Err` when the name already exists so the
    /// caller can decide whether to [`replace`](Self::replace) instead.
    pub fn append(&mut self, profile: Profile) -> Result<(), Profile> {
        if self.contains(&profile.name) {
            return Err(profile);
        }
        self.records.push(StoredProfile::from(profile));
        Ok(())
    }

    /// Removes every record sharing `profile`'s name, then appends `profile`.
    ///
    /// Returns the number of records removed.
    pub fn replace(&mut self, profile: Profile) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.name() != &profile.name);
        let removed = before - self.records.len();
        self.records.push(StoredProfile::from(profile));
        removed
    }

    /// Names that occur more than once, in first-seen order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut dups = Vec::new();
        for r in &self.records {
            let name = r.name().as_str();
            if !seen.insert(name) && !dups.contains(&name) {
                dups.push(name);
            }
        }
        dups
    }
}

impl From<Vec<StoredProfile>> for ProfileStore {
    fn from(records: Vec<StoredProfile>) -> Self {
        Self { records }
    }
}

impl From<Vec<Profile>> for ProfileStore {
    fn from(profiles: Vec<Profile>) -> Self {
        Self {
            records: profiles.into_iter().map(StoredProfile::from).collect(),
        }
    }
}
