//! In-memory application store.
//!
//! All mutable state lives behind one coarse lock inside an explicitly owned
//! [`Store`] passed to handlers through the shared HTTP state — never a
//! process-wide global. Accessors clone data out so callers cannot hold the
//! guard across an await point.
//!
//! Financial records are keyed by `user_id` with overwrite semantics: a
//! resubmission replaces the previous record, and concurrent submissions
//! resolve last-writer-wins under the lock.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::finance::FinancialRecord;
use crate::domain::user::User;

#[derive(Debug, Default)]
struct Inner {
    users: HashMap<String, User>,
    records: HashMap<String, FinancialRecord>,
}

/// Process-lifetime store for users and financial records.
///
/// Starts empty; cleared only at process restart.
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Inner>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means another request panicked mid-write; the
    // data itself stays usable for this mock service, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a user. Ids are caller-generated UUIDs; username duplicates
    /// are allowed.
    pub fn insert_user(&self, user: User) {
        self.write().users.insert(user.id.clone(), user);
    }

    /// Fetch a user by id.
    pub fn user(&self, id: &str) -> Option<User> {
        self.read().users.get(id).cloned()
    }

    /// Find a user matching both username and password exactly.
    ///
    /// Usernames are not unique, so candidates are scanned until one also
    /// passes the password check; iteration order is unspecified.
    pub fn user_matching(&self, username: &str, password: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|user| user.username == username && user.password_matches(password))
            .cloned()
    }

    /// Store a financial record, replacing any previous record for the same
    /// `user_id`.
    pub fn upsert_record(&self, record: FinancialRecord) {
        self.write()
            .records
            .insert(record.user_id.clone(), record);
    }

    /// Fetch the financial record for a user, if one was submitted.
    pub fn record(&self, user_id: &str) -> Option<FinancialRecord> {
        self.read().records.get(user_id).cloned()
    }
}
