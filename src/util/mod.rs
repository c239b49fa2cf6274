//! Page behavior shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `theme` and `profile_sync` are the two components that run on every page
//! load; `auth` backs the sign-in and sign-up forms. They reach the browser
//! only through `storage` (key-value persistence) and `surfaces` (signals
//! the components render from).

pub mod auth;
pub mod avatar;
#[cfg(feature = "hydrate")]
pub mod local_storage;
pub mod profile_sync;
pub mod storage;
pub mod surfaces;
pub mod theme;
