//! Sidebar identity propagation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page with a sidebar shows the signed-in user's name, email, and
//! avatar. On load the propagator paints whatever the store has cached, then
//! reads `/api/auth/profile` once and repaints with the server's answer.
//! Other tabs signing in or out repaint through the storage subscription.
//!
//! ERROR HANDLING
//! ==============
//! Refresh failures are logged and swallowed: the cached values stay on
//! screen. A `401` is not surfaced and does not clear the credential.
//!
//! TRADE-OFFS
//! ==========
//! One fetch per page load, no retry or polling. Anything that changes later
//! arrives through storage events or the next navigation.

#[cfg(test)]
#[path = "profile_sync_test.rs"]
mod profile_sync_test;

use std::cell::Cell;
use std::rc::Rc;

use super::avatar::avatar_to_paint;
use super::storage::{KeyValueStore, StorageChange, Subscription, keys};
use crate::config::ClientConfig;
use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::state::session::{self, CachedIdentity};

/// The sidebar's identity elements.
pub trait SidebarHandle {
    fn set_name(&self, name: &str);
    fn set_email(&self, email: &str);
    /// The image currently shown, if any.
    fn avatar_src(&self) -> Option<String>;
    fn set_avatar_src(&self, src: &str);
}

/// A "Welcome back, <first name>" style element.
pub trait GreetingHandle {
    fn set_first_name(&self, first_name: &str);
}

/// Identity elements on the current page, resolved fresh on every paint.
pub trait PageSurface {
    type Sidebar: SidebarHandle;
    type Greeting: GreetingHandle;

    /// `None` on pages without a sidebar.
    fn sidebar(&self) -> Option<Self::Sidebar>;
    fn greetings(&self) -> Vec<Self::Greeting>;
}

/// Per-load progress. Terminal once the fetch settles or is skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPhase {
    #[default]
    Uninitialized,
    CachePainted,
    ServerFetchPending,
    /// No credential; the fetch was skipped.
    Idle,
    Updated,
    Unchanged,
}

/// Result of [`ProfilePropagator::refresh_from_server`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// No credential in the store; nothing was requested.
    Skipped,
    Updated,
    /// The server answered `401`.
    Unauthorized,
    /// Transport, status, or decode failure.
    Failed(AuthError),
}

pub struct ProfilePropagator<S, P, A> {
    store: S,
    page: P,
    api: A,
    config: ClientConfig,
    phase: Cell<SyncPhase>,
}

impl<S, P, A> ProfilePropagator<S, P, A>
where
    S: KeyValueStore,
    P: PageSurface,
    A: AuthApi,
{
    pub fn new(store: S, page: P, api: A, config: ClientConfig) -> Self {
        Self { store, page, api, config, phase: Cell::new(SyncPhase::Uninitialized) }
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase.get()
    }

    /// Paint the cached identity into the sidebar. Returns `false` when the
    /// page has no sidebar.
    pub fn paint_from_cache(&self) -> bool {
        if self.phase.get() == SyncPhase::Uninitialized {
            self.phase.set(SyncPhase::CachePainted);
        }
        let Some(sidebar) = self.page.sidebar() else {
            return false;
        };

        let cached = CachedIdentity::load(&self.store);
        let shown = cached.display(&self.config);
        sidebar.set_name(&shown.name);
        sidebar.set_email(&shown.email);
        for greeting in self.page.greetings() {
            greeting.set_first_name(&shown.first_name);
        }

        let current = sidebar.avatar_src();
        if let Some(src) = avatar_to_paint(cached.avatar_url.as_deref(), &shown.name, current.as_deref(), &self.config)
        {
            sidebar.set_avatar_src(&src);
        }
        true
    }

    /// Read the profile once and, on success, overwrite the cache and repaint.
    pub async fn refresh_from_server(&self) -> RefreshOutcome {
        let Some(token) = session::access_token(&self.store) else {
            log::debug!("profile refresh skipped: no access token");
            self.phase.set(SyncPhase::Idle);
            return RefreshOutcome::Skipped;
        };

        self.phase.set(SyncPhase::ServerFetchPending);
        match self.api.fetch_profile(&token).await {
            Ok(profile) => {
                session::persist_profile(&self.store, &profile);
                self.phase.set(SyncPhase::Updated);
                self.paint_from_cache();
                log::debug!("profile refreshed from server");
                RefreshOutcome::Updated
            }
            Err(AuthError::Unauthorized) => {
                log::debug!("profile refresh unauthorized; keeping cached identity");
                self.phase.set(SyncPhase::Unchanged);
                RefreshOutcome::Unauthorized
            }
            Err(e) => {
                log::warn!("profile refresh failed: {e}");
                self.phase.set(SyncPhase::Unchanged);
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Page-load sequence: paint the cache, then refresh once.
    pub async fn run(&self) -> RefreshOutcome {
        self.paint_from_cache();
        self.refresh_from_server().await
    }
}

impl<S, P, A> ProfilePropagator<S, P, A>
where
    S: KeyValueStore + 'static,
    P: PageSurface + 'static,
    A: AuthApi + 'static,
{
    /// Repaint whenever another tab changes a tracked key or clears storage.
    pub fn watch_storage(self: &Rc<Self>) -> Subscription {
        let propagator = Rc::clone(self);
        self.store.subscribe(Box::new(move |change: &StorageChange| {
            if change.touches(&keys::TRACKED) {
                propagator.paint_from_cache();
            }
        }))
    }
}
