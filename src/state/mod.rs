//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome, `sidebar` view model, cached
//! `session` identity) so components depend on small focused models.

pub mod session;
pub mod sidebar;
pub mod ui;
