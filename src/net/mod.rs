//! Networking for the backend auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the login, registration, and profile requests; `types`
//! defines their wire schema.

pub mod api;
pub mod types;
