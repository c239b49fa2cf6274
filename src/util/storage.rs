//! Key-value persistence seam shared by the theme and profile components.
//!
//! DESIGN
//! ======
//! Components depend on `KeyValueStore` instead of `window.localStorage`, so
//! browser builds plug in `LocalStorage` while tests and SSR use
//! `MemoryStore`. Change notifications follow browser semantics: a store
//! reports writes made by other tabs, never its own.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Storage keys shared with the rest of the site.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const USER_NAME: &str = "userName";
    pub const USER_EMAIL: &str = "userEmail";
    pub const USER_AVATAR: &str = "userAvatar";

    /// Keys whose change in another tab triggers a sidebar repaint.
    pub const TRACKED: [&str; 5] = [THEME, ACCESS_TOKEN, USER_NAME, USER_EMAIL, USER_AVATAR];

    /// Cached identity fields.
    pub const IDENTITY: [&str; 3] = [USER_NAME, USER_EMAIL, USER_AVATAR];
}

/// A write reported by another tab. `key` is `None` when storage was cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageChange {
    pub key: Option<String>,
    pub new_value: Option<String>,
}

impl StorageChange {
    /// Whether this change touches any of `keys`. A clear touches every key.
    pub fn touches(&self, keys: &[&str]) -> bool {
        self.key.as_deref().is_none_or(|key| keys.contains(&key))
    }
}

pub type ChangeListener = Box<dyn Fn(&StorageChange)>;

/// Keeps a change listener registered; dropping it unregisters.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription that was never registered.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Keep the listener for the rest of the page's life.
    pub fn detach(mut self) {
        if let Some(cancel) = self.cancel.take() {
            std::mem::forget(cancel);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

/// Flat string key-value store scoped to one origin.
///
/// Writes are best-effort: a rejected write (quota, privacy mode) is logged by
/// the implementation and otherwise ignored.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Register `listener` for changes made by other tabs.
    fn subscribe(&self, listener: ChangeListener) -> Subscription;
}

/// In-memory store. Clones share the same entries and listeners.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Rc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    entries: RefCell<HashMap<String, String>>,
    listeners: RefCell<Vec<(u64, Rc<dyn Fn(&StorageChange)>)>>,
    next_listener_id: Cell<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store
            .inner
            .entries
            .borrow_mut()
            .extend(entries.into_iter().map(|(k, v)| (k.to_owned(), v.to_owned())));
        store
    }

    pub fn len(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Apply a write as if another tab made it, notifying listeners.
    pub fn apply_remote(&self, key: &str, value: Option<&str>) {
        {
            let mut entries = self.inner.entries.borrow_mut();
            match value {
                Some(v) => entries.insert(key.to_owned(), v.to_owned()),
                None => entries.remove(key),
            };
        }
        self.notify(&StorageChange { key: Some(key.to_owned()), new_value: value.map(str::to_owned) });
    }

    /// Clear every entry as if another tab called `localStorage.clear()`.
    pub fn clear_remote(&self) {
        self.inner.entries.borrow_mut().clear();
        self.notify(&StorageChange { key: None, new_value: None });
    }

    fn notify(&self, change: &StorageChange) {
        // Snapshot first so a listener may subscribe or unsubscribe re-entrantly.
        let listeners: Vec<_> = self.inner.listeners.borrow().iter().map(|(_, l)| Rc::clone(l)).collect();
        for listener in listeners {
            listener(change);
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.inner.entries.borrow_mut().remove(key);
    }

    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, Rc::from(listener)));
        let inner = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }
}
