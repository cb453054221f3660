//! # Session Store
//!
//! Process-wide holder of the current [`Session`] and [`UserIdentity`],
//! observable by any consumer and persisted across restarts.
//!
//! ## Semantics
//!
//! - Every setter is an atomic last-write-wins replacement; `None` denotes
//!   "signed out". No token validation happens here.
//! - [`SessionStore::set_session`] and [`SessionStore::set_user`] are
//!   independent; callers updating one without the other open a transient
//!   inconsistency window. Auth flows use the paired
//!   [`SessionStore::set_identity`] instead, which replaces both under one
//!   write lock.
//! - Every mutation is serialized to the durable backend under
//!   [`STORE_KEY`] and delivered to all subscribers. Persistence failures
//!   are logged and swallowed; the in-memory state stays authoritative for
//!   the running process.
//! - [`SessionStore::hydrate`] loads the persisted state on startup.
//!   A missing or unreadable value initializes the store to all-`None`.

pub mod persist;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::{Session, UserIdentity};
use std::sync::Arc;

use self::persist::{FileStore, KeyValue};

/// Fixed key under which the serialized state lives in the durable layer.
pub const STORE_KEY: &str = "fintechcrypto-user-store";

/// Snapshot of the session store's observable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub user: Option<UserIdentity>,
}

impl SessionState {
    /// True when both the session and the user identity are present.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some() && self.user.is_some()
    }
}

struct Inner {
    state: SessionState,
    hydrated: bool,
    subscribers: Vec<async_channel::Sender<SessionState>>,
    backend: Box<dyn KeyValue>,
}

/// Observable, persisted session store. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Inner>>,
}

impl SessionStore {
    /// Create an empty, not yet hydrated store over the given backend.
    pub fn new(backend: Box<dyn KeyValue>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: SessionState::default(),
                hydrated: false,
                subscribers: Vec::new(),
                backend,
            })),
        }
    }

    /// Open a file-backed store in `config.store_dir` and hydrate it.
    pub fn open(config: &crate::config::Config) -> Self {
        let store = Self::new(Box::new(FileStore::new(&config.store_dir)));
        store.hydrate();
        store
    }

    /// Load the persisted state. Runs once at startup, before consumers
    /// read the store; absent or unreadable state leaves the default.
    pub fn hydrate(&self) {
        let snapshot = {
            let mut inner = self.inner.write();
            match inner.backend.get(STORE_KEY) {
                Ok(Some(raw)) => match serde_json::from_str::<SessionState>(&raw) {
                    Ok(state) => inner.state = state,
                    Err(err) => {
                        tracing::warn!(error = %err, "Persisted session state unreadable, starting signed out");
                    }
                },
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "Session state load failed, starting signed out");
                }
            }
            inner.hydrated = true;
            Self::notify(&mut inner);
            inner.state.clone()
        };
        tracing::debug!(authenticated = snapshot.is_authenticated(), "Session store hydrated");
    }

    /// True once the hydration pass has run, regardless of its outcome.
    pub fn is_hydrated(&self) -> bool {
        self.inner.read().hydrated
    }

    /// Latest in-memory state. Never blocks on I/O.
    pub fn current(&self) -> SessionState {
        self.inner.read().state.clone()
    }

    /// Replace the stored session. `None` denotes signed out.
    pub fn set_session(&self, session: Option<Session>) {
        self.mutate(|state| state.session = session);
    }

    /// Replace the stored user identity, independent of the session.
    pub fn set_user(&self, user: Option<UserIdentity>) {
        self.mutate(|state| state.user = user);
    }

    /// Replace session and user as one atomic pair write.
    pub fn set_identity(&self, session: Option<Session>, user: Option<UserIdentity>) {
        self.mutate(|state| {
            state.session = session;
            state.user = user;
        });
    }

    /// Sign out: clear both slots.
    pub fn clear(&self) {
        self.set_identity(None, None);
    }

    /// Subscribe to state changes. Every mutation delivers the
    /// post-mutation snapshot; dropped receivers are pruned lazily.
    pub fn subscribe(&self) -> async_channel::Receiver<SessionState> {
        let (tx, rx) = async_channel::unbounded();
        self.inner.write().subscribers.push(tx);
        rx
    }

    fn mutate(&self, apply: impl FnOnce(&mut SessionState)) {
        let mut inner = self.inner.write();
        apply(&mut inner.state);
        Self::persist(&inner);
        Self::notify(&mut inner);
    }

    fn persist(inner: &Inner) {
        match serde_json::to_string(&inner.state) {
            Ok(raw) => {
                if let Err(err) = inner.backend.set(STORE_KEY, &raw) {
                    tracing::warn!(error = %err, "Session state persist failed, in-memory state unaffected");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "Session state serialization failed");
            }
        }
    }

    fn notify(inner: &mut Inner) {
        let snapshot = inner.state.clone();
        inner
            .subscribers
            .retain(|tx| tx.try_send(snapshot.clone()).is_ok());
    }
}
