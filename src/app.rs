//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser, `App` also starts the two page-load components: the
//! theme controller applies the saved or platform theme, and the profile
//! propagator paints the cached identity and refreshes it once from the
//! server. Both listen for storage changes from other tabs for the rest of
//! the page's life.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::{ClientConfig, DEFAULT_LOGO_SRC};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::{sidebar::SidebarState, ui::UiState};

/// Document served for every dashboard route. The body starts without the
/// `dark-mode` class; the hydrated client adds it before the first paint of
/// the toggles, so the server never needs to know the visitor's theme.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href=DEFAULT_LOGO_SRC/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    let ui = RwSignal::new(UiState::default());
    let sidebar = RwSignal::new(SidebarState::default());

    provide_context(config.clone());
    provide_context(ui);
    provide_context(sidebar);

    #[cfg(feature = "hydrate")]
    start_page_behavior(config, ui, sidebar);
    #[cfg(not(feature = "hydrate"))]
    let _ = config;

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard-client.css"/>
        <Title text="Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

#[cfg(feature = "hydrate")]
fn start_page_behavior(config: ClientConfig, ui: RwSignal<UiState>, sidebar: RwSignal<SidebarState>) {
    use std::rc::Rc;

    use crate::net::api::HttpAuthApi;
    use crate::util::local_storage::LocalStorage;
    use crate::util::profile_sync::ProfilePropagator;
    use crate::util::surfaces::{SignalPage, UiThemeSurface};
    use crate::util::theme::{ThemeController, apply_body_class};

    // The server rendered the toggles from `UiState::default()`, and hydration
    // keeps that markup as-is. Only the body class is set up front; the
    // signal write waits for the post-hydration effect so the toggles rerender.
    let theme = Rc::new(ThemeController::new(LocalStorage, UiThemeSurface::new(ui)));
    apply_body_class(theme.preferred());
    let applier = Rc::clone(&theme);
    Effect::new(move || {
        let applied = applier.apply_theme();
        log::debug!("theme applied on load: {}", applied.as_str());
    });
    theme.watch_storage().detach();

    let api = HttpAuthApi::new(&config);
    let propagator = Rc::new(ProfilePropagator::new(LocalStorage, SignalPage::new(sidebar), api, config));
    propagator.watch_storage().detach();

    // A sidebar or greeting mounting (first render or route change) is the
    // signal to paint. Keyed on layout only, so paints don't retrigger it.
    let layout = Memo::new(move |_| sidebar.with(SidebarState::mount_key));
    let painter = Rc::clone(&propagator);
    Effect::new(move || {
        if layout.get().0 {
            painter.paint_from_cache();
        }
    });

    leptos::task::spawn_local(async move {
        let outcome = propagator.run().await;
        log::debug!("profile sync settled: {outcome:?} ({:?})", propagator.phase());
    });
}
