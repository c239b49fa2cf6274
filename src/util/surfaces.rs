//! Leptos-signal implementations of the theme and page surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ThemeController` and `ProfilePropagator` only see the `ThemeSurface` and
//! `PageSurface` traits. In the app those are backed by the `UiState` and
//! `SidebarState` signals provided at the root, and components render from
//! the signals. Every toggle button reads the same `toggle_icon`, so one
//! handle stands in for all of them.
//!
//! Reads are untracked: surfaces are driven from event handlers and effects
//! that must not subscribe to what they write.

#[cfg(test)]
#[path = "surfaces_test.rs"]
mod surfaces_test;

use leptos::prelude::*;

use super::profile_sync::{GreetingHandle, PageSurface, SidebarHandle};
use super::theme::{Theme, ThemeIcon, ThemeSurface, ToggleControl, apply_body_class, system_prefers_dark};
use crate::state::sidebar::SidebarState;
use crate::state::ui::UiState;

#[derive(Clone, Copy)]
pub struct UiThemeSurface {
    ui: RwSignal<UiState>,
}

impl UiThemeSurface {
    pub fn new(ui: RwSignal<UiState>) -> Self {
        Self { ui }
    }
}

#[derive(Clone, Copy)]
pub struct UiToggleIcon {
    ui: RwSignal<UiState>,
}

impl ToggleControl for UiToggleIcon {
    fn show_icon(&self, icon: ThemeIcon) {
        self.ui.update(|u| u.toggle_icon = icon);
    }
}

impl ThemeSurface for UiThemeSurface {
    type Toggle = UiToggleIcon;

    fn prefers_dark(&self) -> bool {
        system_prefers_dark()
    }

    fn current(&self) -> Theme {
        self.ui.with_untracked(|u| u.theme)
    }

    fn set_page_theme(&self, theme: Theme) {
        self.ui.update(|u| u.theme = theme);
        apply_body_class(theme);
    }

    fn toggle_controls(&self) -> Vec<UiToggleIcon> {
        vec![UiToggleIcon { ui: self.ui }]
    }
}

/// The current page's sidebar, as seen through `SidebarState`.
#[derive(Clone, Copy)]
pub struct SignalPage {
    sidebar: RwSignal<SidebarState>,
}

impl SignalPage {
    pub fn new(sidebar: RwSignal<SidebarState>) -> Self {
        Self { sidebar }
    }
}

#[derive(Clone, Copy)]
pub struct SidebarSignal(RwSignal<SidebarState>);

#[derive(Clone, Copy)]
pub struct GreetingSignal(RwSignal<SidebarState>);

impl SidebarHandle for SidebarSignal {
    fn set_name(&self, name: &str) {
        self.0.update(|s| s.name = name.to_owned());
    }

    fn set_email(&self, email: &str) {
        self.0.update(|s| s.email = email.to_owned());
    }

    fn avatar_src(&self) -> Option<String> {
        self.0.with_untracked(|s| s.avatar_src.clone())
    }

    fn set_avatar_src(&self, src: &str) {
        self.0.update(|s| s.avatar_src = Some(src.to_owned()));
    }
}

impl GreetingHandle for GreetingSignal {
    fn set_first_name(&self, first_name: &str) {
        self.0.update(|s| s.greeting_name = first_name.to_owned());
    }
}

impl PageSurface for SignalPage {
    type Sidebar = SidebarSignal;
    type Greeting = GreetingSignal;

    fn sidebar(&self) -> Option<SidebarSignal> {
        self.sidebar.with_untracked(|s| s.mounted).then_some(SidebarSignal(self.sidebar))
    }

    fn greetings(&self) -> Vec<GreetingSignal> {
        if self.sidebar.with_untracked(|s| s.greeting_slots) == 0 {
            Vec::new()
        } else {
            vec![GreetingSignal(self.sidebar)]
        }
    }
}
