//! `window.localStorage` binding for [`KeyValueStore`].
//!
//! Cross-tab notifications come from the window `storage` event, which the
//! browser only fires in tabs other than the writer.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::storage::{ChangeListener, KeyValueStore, StorageChange, Subscription};

/// Handle to the origin's `localStorage`. Resolved on every call, so a
/// missing or blocked storage area degrades to "nothing stored".
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn storage_area() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage_area()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = storage_area() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage write rejected: key={key}");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = storage_area() {
            let _ = storage.remove_item(key);
        }
    }

    fn subscribe(&self, listener: ChangeListener) -> Subscription {
        let Some(window) = web_sys::window() else {
            return Subscription::noop();
        };
        let callback = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
            listener(&StorageChange { key: ev.key(), new_value: ev.new_value() });
        });
        if window
            .add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not register storage listener");
            return Subscription::noop();
        }
        Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
        })
    }
}
