use backend::{AuthBackend, RestBackend, SessionStore, StorageSessionStore};
use dioxus::prelude::*;
use shared_types::{Role, Session};
use std::rc::Rc;

/// The backend client and session store every page works through.
#[derive(Clone)]
pub struct Services {
    pub backend: Rc<dyn AuthBackend>,
    pub store: Rc<dyn SessionStore>,
}

impl Services {
    pub fn from_config() -> Self {
        let config = backend::config::load_config();
        Self {
            backend: Rc::new(RestBackend::new(&config.backend)),
            store: default_store(),
        }
    }

    /// Clear the stored session. The caller resets [`AuthState`] and navigates.
    pub fn sign_out(&self) {
        backend::auth::sign_out(&*self.store);
    }
}

#[cfg(feature = "web")]
fn default_store() -> Rc<dyn SessionStore> {
    Rc::new(StorageSessionStore::new(backend::LocalStorage))
}

#[cfg(not(feature = "web"))]
fn default_store() -> Rc<dyn SessionStore> {
    Rc::new(StorageSessionStore::new(backend::MemoryStorage::new()))
}

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    pub fn restore(services: &Services) -> Self {
        Self {
            session: Signal::new(backend::auth::current_session(&*services.store)),
        }
    }

    /// The session, if one is held and has not expired.
    pub fn valid_session(&self) -> Option<Session> {
        self.session.read().clone().filter(Session::is_valid)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().as_ref().map(Session::role)
    }

    pub fn set_session(&mut self, session: Session) {
        self.session.set(Some(session));
    }

    pub fn clear_auth(&mut self) {
        self.session.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Hook to access the backend client and session store.
pub fn use_services() -> Services {
    use_context::<Services>()
}
