//! Local UI chrome state (theme and toggle icon).
//!
//! DESIGN
//! ======
//! The theme controller writes here through `util::surfaces`; toggle buttons
//! and the page shell only read it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::{Theme, ThemeIcon};

/// UI state shared through Leptos context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Theme currently applied to the page.
    pub theme: Theme,
    /// Icon every toggle control renders.
    pub toggle_icon: ThemeIcon,
}
