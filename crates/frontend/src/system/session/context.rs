//! Session lifecycle in the browser
//!
//! One `SessionContext` is loaded from localStorage when the app starts and handed to
//! every list page. Starting a session, switching hotel and signing out go through
//! `SessionService` so the stored copy and the reactive copy never diverge.

use contracts::shared::session::{SessionContext, Theme};
use leptos::prelude::*;
use std::sync::Arc;

use crate::shared::storage::LocalStorageStore;

#[derive(Clone, Copy)]
pub struct SessionService {
    pub session: RwSignal<Arc<SessionContext>>,
    store: StoredValue<LocalStorageStore>,
}

impl SessionService {
    pub fn load(storage_prefix: &str) -> Self {
        let store = LocalStorageStore::new(storage_prefix);
        let session = SessionContext::load(&store);
        log::info!(
            "session restored: user={:?}, hotel={:?}",
            session.actor,
            session.hotel_id
        );
        Self {
            session: RwSignal::new(Arc::new(session)),
            store: StoredValue::new(store),
        }
    }

    /// Untracked snapshot for building requests
    pub fn current(&self) -> Arc<SessionContext> {
        self.session.get_untracked()
    }

    /// Opens a session on `hotel_id`. Tokens issued by the sign-on service are kept.
    pub fn start(&self, actor: String, hotel_id: String, remember_me: bool) {
        self.change(|session| {
            session.actor = Some(actor);
            session.hotel_id = Some(hotel_id);
            session.remember_me = remember_me;
        });
    }

    pub fn switch_hotel(&self, hotel_id: String) {
        self.change(|session| session.hotel_id = Some(hotel_id));
    }

    pub fn set_theme(&self, theme: Theme) {
        self.change(|session| session.preferences.theme = theme);
    }

    pub fn sign_out(&self) {
        let mut session = (*self.current()).clone();
        self.store.update_value(|store| session.teardown(store));
        log::info!("signed out");
        self.session.set(Arc::new(session));
    }

    fn change(&self, f: impl FnOnce(&mut SessionContext)) {
        let mut session = (*self.current()).clone();
        f(&mut session);
        self.store.update_value(|store| session.persist(store));
        self.session.set(Arc::new(session));
    }
}

pub fn use_session() -> SessionService {
    use_context::<SessionService>().expect("SessionService not found in component tree")
}
