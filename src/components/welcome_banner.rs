//! "Welcome back" greeting filled with the user's first name.

use leptos::prelude::*;

use crate::state::sidebar::SidebarState;

#[component]
pub fn WelcomeBanner() -> impl IntoView {
    let sidebar = expect_context::<RwSignal<SidebarState>>();

    // Register as a greeting slot so the propagator repaints it.
    Effect::new(move || sidebar.update(|s| s.greeting_slots += 1));
    on_cleanup(move || sidebar.update(|s| s.greeting_slots = s.greeting_slots.saturating_sub(1)));

    let first_name = move || sidebar.with(|s| s.greeting_name.clone());

    view! {
        <section class="welcome">
            <h2 class="welcome__title">
                "Welcome back, " <span class="welcome__name">{first_name}</span> "!"
            </h2>
            <p class="welcome__subtitle">"Here is what's happening with your account today."</p>
        </section>
    }
}
