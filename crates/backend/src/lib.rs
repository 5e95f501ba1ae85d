pub mod api;
pub mod auth;
pub mod config;
pub mod rest;
pub mod session;

pub use api::AuthBackend;
pub use rest::RestBackend;
pub use session::{KeyValueStorage, MemoryStorage, SessionStore, StorageSessionStore};

#[cfg(feature = "web")]
pub use session::LocalStorage;
