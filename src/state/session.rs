//! Cached session identity kept in the key-value store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `access_token`, `userName`, `userEmail`, and `userAvatar` are a cache of
//! the last server-reported profile. They may be stale until the background
//! refresh lands; empty values count as absent.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::ClientConfig;
use crate::net::types::{Session, UserProfile};
use crate::util::storage::{KeyValueStore, keys};

/// Identity fields as last cached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CachedIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// What the sidebar shows for a cached identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub name: String,
    pub email: String,
    pub first_name: String,
    /// No name was cached; the placeholder identity is shown.
    pub is_placeholder: bool,
}

fn read(store: &impl KeyValueStore, key: &str) -> Option<String> {
    store.get(key).filter(|v| !v.trim().is_empty())
}

impl CachedIdentity {
    pub fn load(store: &impl KeyValueStore) -> Self {
        Self {
            name: read(store, keys::USER_NAME),
            email: read(store, keys::USER_EMAIL),
            avatar_url: read(store, keys::USER_AVATAR),
        }
    }

    pub fn display(&self, config: &ClientConfig) -> DisplayIdentity {
        match &self.name {
            Some(name) => DisplayIdentity {
                name: name.clone(),
                email: self.email.clone().unwrap_or_default(),
                first_name: first_name(name).to_owned(),
                is_placeholder: false,
            },
            None => DisplayIdentity {
                name: config.placeholder_name.clone(),
                email: config.placeholder_email.clone(),
                first_name: first_name(&config.placeholder_name).to_owned(),
                is_placeholder: true,
            },
        }
    }
}

/// First whitespace-delimited token of `full_name`.
pub fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or_default()
}

/// The stored bearer token, if any.
pub fn access_token(store: &impl KeyValueStore) -> Option<String> {
    read(store, keys::ACCESS_TOKEN)
}

/// Persist a login/registration result. The avatar is left to profile sync.
pub fn persist_session(store: &impl KeyValueStore, session: &Session) {
    store.set(keys::ACCESS_TOKEN, &session.access_token);
    if let Some(user) = &session.user {
        store.set(keys::USER_NAME, &user.full_name);
        store.set(keys::USER_EMAIL, &user.email);
    }
}

/// Overwrite the cached identity with a server-reported profile.
pub fn persist_profile(store: &impl KeyValueStore, profile: &UserProfile) {
    store.set(keys::USER_NAME, &profile.full_name);
    store.set(keys::USER_EMAIL, &profile.email);
    match profile.avatar_url.as_deref().filter(|url| !url.trim().is_empty()) {
        Some(url) => store.set(keys::USER_AVATAR, url),
        None => store.remove(keys::USER_AVATAR),
    }
}

/// Forget the credential and the cached identity.
pub fn clear(store: &impl KeyValueStore) {
    store.remove(keys::ACCESS_TOKEN);
    for key in keys::IDENTITY {
        store.remove(key);
    }
}
