//! Sidebar view model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile propagator paints into this through `util::surfaces`; the
//! `Sidebar` and `WelcomeBanner` components render from it and report when
//! they are mounted, which is what tells the propagator a sidebar exists on
//! the current page.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

/// Sidebar state shared through Leptos context as `RwSignal<SidebarState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    /// Set while a `Sidebar` component is mounted.
    pub mounted: bool,
    /// Number of mounted greeting elements.
    pub greeting_slots: u32,
    pub name: String,
    pub email: String,
    /// `None` until something has been painted.
    pub avatar_src: Option<String>,
    /// First name shown by greeting elements.
    pub greeting_name: String,
}

impl SidebarState {
    /// Mount layout; the propagator repaints whenever this changes.
    pub fn mount_key(&self) -> (bool, u32) {
        (self.mounted, self.greeting_slots)
    }

    /// Avatar to render, falling back to `logo` before the first paint.
    pub fn avatar_or<'a>(&'a self, logo: &'a str) -> &'a str {
        self.avatar_src.as_deref().unwrap_or(logo)
    }
}
