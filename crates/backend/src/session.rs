use shared_types::{AppError, Session, TOKEN_KEY, USER_KEY};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key/value storage with whole-key set and remove, shaped like the
/// browser's `localStorage`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove_item(&self, key: &str);
}

/// Process-local storage. Used by tests and by builds with no browser.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

/// The browser's `window.localStorage`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "web")]
impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "web")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        let storage =
            Self::storage().ok_or_else(|| AppError::storage("localStorage is unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|_| AppError::storage(format!("Could not write {key} to localStorage")))
    }

    fn remove_item(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!(key, "Could not remove key from localStorage");
            }
        }
    }
}

/// Read, write and clear the persisted session.
pub trait SessionStore {
    /// The stored session, if both keys are present and readable.
    fn get(&self) -> Option<Session>;
    fn set(&self, session: &Session) -> Result<(), AppError>;
    /// Remove the token and user record. Always succeeds.
    fn clear(&self);
}

/// [`SessionStore`] that keeps the token and user record under the
/// [`TOKEN_KEY`] and [`USER_KEY`] entries of a [`KeyValueStorage`].
#[derive(Clone, Debug, Default)]
pub struct StorageSessionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> StorageSessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

impl<S: KeyValueStorage> SessionStore for StorageSessionStore<S> {
    fn get(&self) -> Option<Session> {
        let token = self.storage.get_item(TOKEN_KEY)?;
        let record = self.storage.get_item(USER_KEY)?;
        let session = Session::from_stored(&token, &record);
        if session.is_none() {
            tracing::warn!("Stored session record is unreadable, treating as signed out");
        }
        session
    }

    fn set(&self, session: &Session) -> Result<(), AppError> {
        let (token, record) = session
            .to_stored()
            .map_err(|e| AppError::storage(format!("Could not serialize session: {e}")))?;
        self.storage.set_item(TOKEN_KEY, &token)?;
        if let Err(e) = self.storage.set_item(USER_KEY, &record) {
            self.storage.remove_item(TOKEN_KEY);
            return Err(e);
        }
        Ok(())
    }

    fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }
}
