use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::types::UserProfile;
use crate::test_helpers::{FakePage, ScriptedApi, SidebarView, jane};
use crate::util::avatar::generated_avatar_url;
use crate::util::storage::MemoryStore;

type Propagator = ProfilePropagator<MemoryStore, FakePage, ScriptedApi>;

fn propagator(store: &MemoryStore, page: &FakePage, api: &ScriptedApi) -> Propagator {
    ProfilePropagator::new(store.clone(), page.clone(), api.clone(), ClientConfig::default())
}

fn cached_jane() -> MemoryStore {
    MemoryStore::with_entries([
        (keys::ACCESS_TOKEN, "t1"),
        (keys::USER_NAME, "Jane Doe"),
        (keys::USER_EMAIL, "jane@x.com"),
    ])
}

// =============================================================
// paint_from_cache
// =============================================================

#[test]
fn paint_without_sidebar_does_nothing() {
    let store = cached_jane();
    let page = FakePage::bare();
    let sync = propagator(&store, &page, &ScriptedApi::default());
    assert!(!sync.paint_from_cache());
    assert_eq!(sync.phase(), SyncPhase::CachePainted);
}

#[test]
fn paint_writes_name_email_and_first_name_greetings() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(2);
    let sync = propagator(&store, &page, &ScriptedApi::default());

    assert!(sync.paint_from_cache());
    let view = page.view();
    assert_eq!(view.name.as_deref(), Some("Jane Doe"));
    assert_eq!(view.email.as_deref(), Some("jane@x.com"));
    assert_eq!(page.greeting_texts(), vec![Some("Jane".to_owned()), Some("Jane".to_owned())]);
}

#[test]
fn paint_without_cached_name_shows_placeholder() {
    let store = MemoryStore::new();
    let page = FakePage::with_sidebar(1);
    propagator(&store, &page, &ScriptedApi::default()).paint_from_cache();

    let view = page.view();
    assert_eq!(view.name.as_deref(), Some("Guest"));
    assert_eq!(view.email.as_deref(), Some("guest@example.com"));
    assert_eq!(page.greeting_texts(), vec![Some("Guest".to_owned())]);
}

#[test]
fn paint_uses_cached_avatar() {
    let store = cached_jane();
    store.set(keys::USER_AVATAR, "https://cdn.test/j.png");
    let page = FakePage::with_sidebar(0);
    propagator(&store, &page, &ScriptedApi::default()).paint_from_cache();
    assert_eq!(page.view().avatar_src.as_deref(), Some("https://cdn.test/j.png"));
}

#[test]
fn paint_keeps_default_logo_without_cached_avatar() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(0);
    if let Some(sidebar) = &page.sidebar {
        sidebar.0.borrow_mut().avatar_src = Some("/assets/images/logo.png".to_owned());
    }
    propagator(&store, &page, &ScriptedApi::default()).paint_from_cache();
    assert_eq!(page.view().avatar_src.as_deref(), Some("/assets/images/logo.png"));
}

#[test]
fn paint_generates_avatar_over_non_logo_image() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(0);
    if let Some(sidebar) = &page.sidebar {
        sidebar.0.borrow_mut().avatar_src = Some("https://cdn.test/someone-else.png".to_owned());
    }
    propagator(&store, &page, &ScriptedApi::default()).paint_from_cache();
    let expected = generated_avatar_url(&ClientConfig::default().avatar_service_url, "Jane Doe");
    assert_eq!(page.view().avatar_src, Some(expected));
}

#[test]
fn paint_is_idempotent() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(1);
    let sync = propagator(&store, &page, &ScriptedApi::default());
    sync.paint_from_cache();
    let first = page.view();
    sync.paint_from_cache();
    assert_eq!(page.view(), first);
}

// =============================================================
// refresh_from_server
// =============================================================

#[test]
fn refresh_without_token_makes_no_request() {
    let store = MemoryStore::with_entries([(keys::USER_NAME, "Old Name")]);
    let api = ScriptedApi::with_profile(Ok(jane()));
    let sync = propagator(&store, &FakePage::with_sidebar(0), &api);

    assert_eq!(block_on(sync.refresh_from_server()), RefreshOutcome::Skipped);
    assert_eq!(api.call_count(), 0);
    assert_eq!(store.get(keys::USER_NAME).as_deref(), Some("Old Name"));
    assert_eq!(sync.phase(), SyncPhase::Idle);
}

#[test]
fn refresh_success_overwrites_cache_and_repaints() {
    let store = MemoryStore::with_entries([
        (keys::ACCESS_TOKEN, "t1"),
        (keys::USER_NAME, "Old Name"),
        (keys::USER_AVATAR, "https://cdn.test/old.png"),
    ]);
    let page = FakePage::with_sidebar(1);
    let api = ScriptedApi::with_profile(Ok(UserProfile {
        avatar_url: Some("https://cdn.test/new.png".to_owned()),
        ..jane()
    }));
    let sync = propagator(&store, &page, &api);

    assert_eq!(block_on(sync.refresh_from_server()), RefreshOutcome::Updated);
    assert_eq!(api.profile_tokens.borrow().as_slice(), ["t1".to_owned()]);
    assert_eq!(store.get(keys::USER_NAME).as_deref(), Some("Jane Doe"));
    assert_eq!(store.get(keys::USER_EMAIL).as_deref(), Some("jane@x.com"));
    assert_eq!(
        page.view(),
        SidebarView {
            name: Some("Jane Doe".to_owned()),
            email: Some("jane@x.com".to_owned()),
            avatar_src: Some("https://cdn.test/new.png".to_owned()),
        }
    );
    assert_eq!(page.greeting_texts(), vec![Some("Jane".to_owned())]);
    assert_eq!(sync.phase(), SyncPhase::Updated);
}

#[test]
fn refresh_401_leaves_cache_view_and_token_untouched() {
    let store = MemoryStore::with_entries([
        (keys::ACCESS_TOKEN, "expired"),
        (keys::USER_NAME, "Old Name"),
        (keys::USER_EMAIL, "old@x.com"),
    ]);
    let page = FakePage::with_sidebar(1);
    let api = ScriptedApi::with_profile(Err(AuthError::Unauthorized));
    let sync = propagator(&store, &page, &api);
    sync.paint_from_cache();
    let before = page.view();

    assert_eq!(block_on(sync.refresh_from_server()), RefreshOutcome::Unauthorized);
    assert_eq!(page.view(), before);
    assert_eq!(store.get(keys::ACCESS_TOKEN).as_deref(), Some("expired"));
    assert_eq!(store.get(keys::USER_NAME).as_deref(), Some("Old Name"));
    assert_eq!(api.call_count(), 1);
    assert_eq!(sync.phase(), SyncPhase::Unchanged);
}

#[test]
fn refresh_transport_failure_is_swallowed() {
    let store = cached_jane();
    let api = ScriptedApi::with_profile(Err(AuthError::Transport("offline".to_owned())));
    let sync = propagator(&store, &FakePage::with_sidebar(0), &api);

    assert_eq!(
        block_on(sync.refresh_from_server()),
        RefreshOutcome::Failed(AuthError::Transport("offline".to_owned()))
    );
    assert_eq!(store.get(keys::USER_NAME).as_deref(), Some("Jane Doe"));
    assert_eq!(sync.phase(), SyncPhase::Unchanged);
}

#[test]
fn run_paints_cache_then_refreshes_once() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(0);
    let api = ScriptedApi::with_profile(Ok(UserProfile { full_name: "Jane Q Doe".to_owned(), ..jane() }));
    let sync = propagator(&store, &page, &api);

    assert_eq!(block_on(sync.run()), RefreshOutcome::Updated);
    assert_eq!(page.view().name.as_deref(), Some("Jane Q Doe"));
    assert_eq!(api.call_count(), 1);
}

// =============================================================
// watch_storage
// =============================================================

#[test]
fn remote_identity_change_repaints() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(1);
    let sync = Rc::new(propagator(&store, &page, &ScriptedApi::default()));
    let _sub = sync.watch_storage();
    sync.paint_from_cache();

    store.apply_remote(keys::USER_NAME, Some("Mary Ann"));
    assert_eq!(page.view().name.as_deref(), Some("Mary Ann"));
    assert_eq!(page.greeting_texts(), vec![Some("Mary".to_owned())]);
}

#[test]
fn remote_clear_repaints_placeholder() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(0);
    let sync = Rc::new(propagator(&store, &page, &ScriptedApi::default()));
    let _sub = sync.watch_storage();

    store.clear_remote();
    assert_eq!(page.view().name.as_deref(), Some("Guest"));
}

#[test]
fn untracked_key_change_is_ignored() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(0);
    let sync = Rc::new(propagator(&store, &page, &ScriptedApi::default()));
    let _sub = sync.watch_storage();

    store.apply_remote("unrelated", Some("x"));
    assert_eq!(page.view(), SidebarView::default());
}

#[test]
fn dropping_subscription_stops_repaints() {
    let store = cached_jane();
    let page = FakePage::with_sidebar(0);
    let sync = Rc::new(propagator(&store, &page, &ScriptedApi::default()));
    drop(sync.watch_storage());

    store.apply_remote(keys::USER_NAME, Some("Mary Ann"));
    assert_eq!(page.view().name, None);
    assert_eq!(store.listener_count(), 0);
}
