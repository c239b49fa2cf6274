//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Where the toggle sits; only the styling differs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleVariant {
    #[default]
    Desktop,
    Mobile,
}

impl ToggleVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Desktop => "theme-toggle theme-toggle--desktop",
            Self::Mobile => "theme-toggle theme-toggle--mobile",
        }
    }
}

/// Button showing the action it offers: a moon while light, a sun while dark.
#[component]
pub fn ThemeToggle(#[prop(optional)] variant: ToggleVariant) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::local_storage::LocalStorage;
            use crate::util::surfaces::UiThemeSurface;
            use crate::util::theme::ThemeController;

            ThemeController::new(LocalStorage, UiThemeSurface::new(ui)).toggle_theme();
        }
    };

    let icon = move || ui.get().toggle_icon;

    view! {
        <button
            type="button"
            class=variant.class()
            title=move || icon().label()
            aria-label=move || icon().label()
            on:click=on_click
        >
            {move || icon().glyph()}
        </button>
    }
}
