//! Reusable UI components.

pub mod sidebar;
pub mod theme_toggle;
pub mod welcome_banner;
