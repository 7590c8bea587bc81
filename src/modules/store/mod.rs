pub mod export;

use crate::modules::cipher::Cipher;

/// A single user record as held by the store. The username and password
/// are always the cipher's forward transform of their plaintexts; the
/// password stays `None` until the user creates one during first login.
/// MFA codes are not obfuscated: they are fixed-width numbers, not
/// length-varying sensitive text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub password: Option<String>,
    pub code: i32,
}

/// In-memory record store acting as the database. Records are created at
/// seeding and never deleted during a run; only the password field is
/// mutated, through [`RecordStore::set_password`].
pub struct RecordStore {
    records: Vec<UserRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Create the store with its seed users. Usernames are stored
    /// obfuscated from the start; no seed user has a password yet.
    pub fn seed(cipher: &Cipher) -> Self {
        let mut store = Self::new();
        for (username, code) in [
            ("scientist", 1_374_628_910),
            ("engineer", 2_039_485_712),
            ("security", 1_748_392_023),
        ] {
            store.insert(UserRecord {
                username: cipher.obfuscate(username),
                password: None,
                code,
            });
        }
        store
    }

    /// Add a record. Seeding-time helper; the login flow never creates
    /// records.
    pub fn insert(&mut self, record: UserRecord) {
        self.records.push(record);
    }

    /// Look up a record by its obfuscated username.
    pub fn find_by_obfuscated_username(&self, obfuscated_username: &str) -> Option<&UserRecord> {
        self.records
            .iter()
            .find(|record| record.username == obfuscated_username)
    }

    /// Set (or replace) the password of the record with the given
    /// obfuscated username. Returns false when no such record exists.
    pub fn set_password(&mut self, obfuscated_username: &str, obfuscated_password: String) -> bool {
        match self
            .records
            .iter_mut()
            .find(|record| record.username == obfuscated_username)
        {
            Some(record) => {
                record.password = Some(obfuscated_password);
                true
            }
            None => false,
        }
    }

    /// Iterate over all (obfuscated username, obfuscated password) pairs
    /// for export.
    pub fn export_all(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.records
            .iter()
            .map(|record| (record.username.as_str(), record.password.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}
