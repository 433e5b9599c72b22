//! Signed-in session context.
//!
//! The context is process-wide but explicit: it is created by [`SessionContext::init`],
//! which subscribes to an auth-change source, and must be ended with
//! [`SessionContext::teardown`], which unsubscribes. Consumers read the
//! current session or watch it through a `tokio::sync::watch` receiver.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl Session {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            roles: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn(Session),
    SignedOut,
}

pub type SubscriptionId = u64;

pub type AuthListener = Box<dyn Fn(&AuthChange) + Send + Sync>;

type SharedListener = Arc<dyn Fn(&AuthChange) + Send + Sync>;

/// Auth-change collaborator.
pub trait AuthEvents {
    fn current(&self) -> Option<Session>;

    fn subscribe(&self, listener: AuthListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

pub struct SessionContext {
    rx: watch::Receiver<Option<Session>>,
    subscription: SubscriptionId,
}

impl SessionContext {
    pub fn init<A>(auth: &A) -> Self
    where
        A: AuthEvents + ?Sized,
    {
        let (tx, rx) = watch::channel(auth.current());
        let subscription = auth.subscribe(Box::new(move |change| {
            let next = match change {
                AuthChange::SignedIn(session) => Some(session.clone()),
                AuthChange::SignedOut => None,
            };
            tx.send_replace(next);
        }));
        tracing::debug!(subscription, "session context initialised");
        Self { rx, subscription }
    }

    pub fn current(&self) -> Option<Session> {
        self.rx.borrow().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.rx.borrow().is_some()
    }

    pub fn watch(&self) -> watch::Receiver<Option<Session>> {
        self.rx.clone()
    }

    pub fn teardown<A>(self, auth: &A)
    where
        A: AuthEvents + ?Sized,
    {
        auth.unsubscribe(self.subscription);
        tracing::debug!(subscription = self.subscription, "session context torn down");
    }
}

/// In-process auth source, e.g. a session restored from local configuration.
#[derive(Default)]
pub struct LocalAuth {
    session: Mutex<Option<Session>>,
    listeners: Mutex<BTreeMap<SubscriptionId, SharedListener>>,
    next_id: AtomicU64,
}

impl LocalAuth {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session: Mutex::new(session),
            ..Self::default()
        }
    }

    pub fn sign_in(&self, session: Session) {
        self.publish(AuthChange::SignedIn(session));
    }

    pub fn sign_out(&self) {
        self.publish(AuthChange::SignedOut);
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }

    fn publish(&self, change: AuthChange) {
        if let Ok(mut current) = self.session.lock() {
            *current = match &change {
                AuthChange::SignedIn(session) => Some(session.clone()),
                AuthChange::SignedOut => None,
            };
        }
        // Listeners run outside the lock so they may unsubscribe or subscribe
        let listeners: Vec<_> = match self.listeners.lock() {
            Ok(listeners) => listeners.values().cloned().collect(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(&change);
        }
    }
}

impl AuthEvents for LocalAuth {
    fn current(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|s| s.clone())
    }

    fn subscribe(&self, listener: AuthListener) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.insert(id, Arc::from(listener));
        }
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.remove(&id);
        }
    }
}
