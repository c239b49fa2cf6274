//! Dashboard page: sidebar, header toggle, and the welcome greeting.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::welcome_banner::WelcomeBanner;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <Sidebar/>
            <main class="dashboard-page__main">
                <header class="dashboard-page__header">
                    <h1>"Dashboard"</h1>
                    <ThemeToggle/>
                </header>
                <WelcomeBanner/>
            </main>
        </div>
    }
}
