//! Sidebar with the signed-in user's avatar, name, and email.
//!
//! Mounting the sidebar is what tells the profile propagator there is
//! something to paint: the component flags `SidebarState::mounted` once it
//! is in the DOM and clears it on cleanup.

use leptos::prelude::*;

use super::theme_toggle::{ThemeToggle, ToggleVariant};
use crate::config::ClientConfig;
use crate::state::sidebar::SidebarState;

#[component]
pub fn Sidebar() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let sidebar = expect_context::<RwSignal<SidebarState>>();

    Effect::new(move || sidebar.update(|s| s.mounted = true));
    on_cleanup(move || sidebar.update(|s| s.mounted = false));

    let logo = config.default_logo_src.clone();
    let avatar = move || sidebar.with(|s| s.avatar_or(&logo).to_owned());
    let name = move || sidebar.with(|s| s.name.clone());
    let email = move || sidebar.with(|s| s.email.clone());

    let sign_out_config = config.clone();
    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::auth::{BrowserNavigator, sign_out};
            use crate::util::local_storage::LocalStorage;

            sign_out(&LocalStorage, &BrowserNavigator::default(), &sign_out_config);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &sign_out_config;
        }
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__profile">
                <img class="sidebar__avatar" src=avatar alt="Profile"/>
                <div class="sidebar__identity">
                    <span class="sidebar__name">{name}</span>
                    <span class="sidebar__email">{email}</span>
                </div>
            </div>
            <nav class="sidebar__nav">
                <a href=config.dashboard_path.clone() class="sidebar__link">
                    "Dashboard"
                </a>
            </nav>
            <div class="sidebar__footer">
                <ThemeToggle variant=ToggleVariant::Mobile/>
                <button type="button" class="btn sidebar__sign-out" on:click=on_sign_out>
                    "Sign out"
                </button>
            </div>
        </aside>
    }
}
