//! Session-scoped client state: one cart and favourites list per session.
//!
//! The registry owns the live collections for this process. A session's
//! state is hydrated from the stash the first time the session is touched
//! and kept in memory afterwards; every mutation writes the raw entry list
//! back through the stash before returning. Mutations on one session are
//! serialized by that session's lock, so two rapid add calls both land.
//!
//! The in-memory state is authoritative: a failed stash write degrades
//! durability across restarts, never the running session.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use treasured_touch_core::collection::{Cart, Favourites};
use treasured_touch_core::types::SessionId;

use crate::models::CurrentUser;
use crate::stash::{Stash, keys, session_key};

/// The collections belonging to one client session.
#[derive(Debug, Default)]
pub struct ClientState {
    pub cart: Cart,
    pub favourites: Favourites,
    /// Mock-auth user; never persisted.
    pub user: Option<CurrentUser>,
}

/// Registry of live session state, keyed by session id.
pub struct SessionRegistry {
    stash: Stash,
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<ClientState>>>>,
}

impl SessionRegistry {
    /// Create a registry persisting through `stash`.
    #[must_use]
    pub fn new(stash: Stash) -> Self {
        Self {
            stash,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Run `f` against a read-only view of the session's state.
    pub async fn read<R>(&self, session_id: SessionId, f: impl FnOnce(&ClientState) -> R) -> R {
        let entry = self.entry(session_id).await;
        let state = entry.lock().await;
        f(&state)
    }

    /// Run `f` against the session's cart, then persist the line list.
    pub async fn with_cart<R>(&self, session_id: SessionId, f: impl FnOnce(&mut Cart) -> R) -> R {
        let entry = self.entry(session_id).await;
        let mut state = entry.lock().await;
        let out = f(&mut state.cart);
        self.stash
            .save(&session_key(session_id, keys::CART), state.cart.lines());
        out
    }

    /// Run `f` against the session's favourites, then persist the item list.
    pub async fn with_favourites<R>(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&mut Favourites) -> R,
    ) -> R {
        let entry = self.entry(session_id).await;
        let mut state = entry.lock().await;
        let out = f(&mut state.favourites);
        self.stash.save(
            &session_key(session_id, keys::FAVOURITES),
            state.favourites.items(),
        );
        out
    }

    /// Replace the session's mock-auth user.
    pub async fn set_user(&self, session_id: SessionId, user: Option<CurrentUser>) {
        let entry = self.entry(session_id).await;
        entry.lock().await.user = user;
    }

    async fn entry(&self, session_id: SessionId) -> Arc<Mutex<ClientState>> {
        if let Some(existing) = self.sessions.read().await.get(&session_id) {
            return Arc::clone(existing);
        }

        // Hydrate outside the write lock. Two requests racing to hydrate the
        // same fresh session produce identical state; only one wins the
        // insert and the other copy is dropped.
        let state = self.hydrate(session_id);
        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(session_id)
                .or_insert_with(|| Arc::new(Mutex::new(state))),
        )
    }

    fn hydrate(&self, session_id: SessionId) -> ClientState {
        let cart = Cart::from_lines(self.stash.load(&session_key(session_id, keys::CART)));
        let favourites =
            Favourites::from_items(self.stash.load(&session_key(session_id, keys::FAVOURITES)));
        ClientState {
            cart,
            favourites,
            user: None,
        }
    }
}
