//! Light/dark theme controller.
//!
//! Reads the preference from the `theme` storage key and falls back to the
//! platform `prefers-color-scheme` query when nothing is stored. The applied
//! theme becomes a page-wide `dark-mode` class on `<body>`, and every toggle
//! control shows the icon for the action it offers (moon while light, sun
//! while dark).
//!
//! TRADE-OFFS
//! ==========
//! Browser lookups are hydrate-only; SSR paths report "light, no system
//! preference" so server rendering stays deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::rc::Rc;

use super::storage::{KeyValueStore, StorageChange, Subscription, keys};

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `"dark"`/`"light"` counts as unset.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The icon a toggle shows while this theme is active.
    pub fn toggle_icon(self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Moon,
            Self::Dark => ThemeIcon::Sun,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeIcon {
    #[default]
    Moon,
    Sun,
}

impl ThemeIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Moon => "☾",
            Self::Sun => "☀",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Moon => "Switch to dark mode",
            Self::Sun => "Switch to light mode",
        }
    }
}

/// Pick the theme from a stored value and the platform preference.
pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// One theme-toggle button (desktop header, mobile drawer, ...).
pub trait ToggleControl {
    fn show_icon(&self, icon: ThemeIcon);
}

/// Page-level theme hooks, resolved fresh on every operation.
pub trait ThemeSurface {
    type Toggle: ToggleControl;

    /// Platform `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> bool;
    /// The theme currently applied to the page.
    fn current(&self) -> Theme;
    fn set_page_theme(&self, theme: Theme);
    /// Every toggle control present right now; may be empty.
    fn toggle_controls(&self) -> Vec<Self::Toggle>;
}

pub struct ThemeController<S, T> {
    store: S,
    surface: T,
}

impl<S: KeyValueStore, T: ThemeSurface> ThemeController<S, T> {
    pub fn new(store: S, surface: T) -> Self {
        Self { store, surface }
    }

    /// The theme `apply_theme` would apply, without touching the surface.
    pub fn preferred(&self) -> Theme {
        let stored = self.store.get(keys::THEME);
        resolve(stored.as_deref(), self.surface.prefers_dark())
    }

    /// Apply the persisted theme, or the platform preference when none is
    /// persisted. Returns the applied theme.
    pub fn apply_theme(&self) -> Theme {
        let theme = self.preferred();
        self.show(theme);
        theme
    }

    /// Flip the applied theme and persist the result.
    pub fn toggle_theme(&self) -> Theme {
        let next = self.surface.current().flipped();
        self.store.set(keys::THEME, next.as_str());
        self.show(next);
        log::debug!("theme toggled to {}", next.as_str());
        next
    }

    fn show(&self, theme: Theme) {
        self.surface.set_page_theme(theme);
        let icon = theme.toggle_icon();
        for control in self.surface.toggle_controls() {
            control.show_icon(icon);
        }
    }
}

impl<S, T> ThemeController<S, T>
where
    S: KeyValueStore + 'static,
    T: ThemeSurface + 'static,
{
    /// Re-apply whenever another tab writes the `theme` key.
    pub fn watch_storage(self: &Rc<Self>) -> Subscription {
        let controller = Rc::clone(self);
        self.store.subscribe(Box::new(move |change: &StorageChange| {
            if change.touches(&[keys::THEME]) {
                controller.apply_theme();
            }
        }))
    }
}

/// Read the platform dark-mode preference.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set or clear the `dark-mode` class on `<body>`.
pub fn apply_body_class(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
