//! Sign-in, sign-up, and sign-out flows behind the auth pages.
//!
//! Validation runs before any request; a form that fails it never reaches
//! the network. A successful response is persisted through
//! `state::session`, then the flow navigates to the dashboard through a
//! [`Navigator`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::config::ClientConfig;
use crate::error::AuthError;
use crate::net::api::AuthApi;
use crate::net::types::{LoginRequest, RegisterRequest, Session};
use crate::state::session;
use crate::util::storage::KeyValueStore;

pub const MISSING_LOGIN_FIELDS: &str = "Please fill in all fields";
pub const MISSING_SIGNUP_FIELDS: &str = "Please fill in all required fields";
pub const ACCOUNT_CREATED: &str = "Account created successfully";

/// Raw sign-in form input.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Raw sign-up form input. `referral_code` is optional.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub referral_code: String,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// # Errors
///
/// Returns [`AuthError::Validation`] if either field is blank.
pub fn validate_login(form: &LoginForm) -> Result<LoginRequest, AuthError> {
    if blank(&form.email) || blank(&form.password) {
        return Err(AuthError::Validation(MISSING_LOGIN_FIELDS.to_owned()));
    }
    Ok(LoginRequest { email: form.email.trim().to_owned(), password: form.password.clone() })
}

/// # Errors
///
/// Returns [`AuthError::Validation`] if a required field is blank or the
/// password is shorter than `config.min_password_len` characters.
pub fn validate_signup(form: &SignupForm, config: &ClientConfig) -> Result<RegisterRequest, AuthError> {
    if blank(&form.full_name) || blank(&form.email) || blank(&form.password) {
        return Err(AuthError::Validation(MISSING_SIGNUP_FIELDS.to_owned()));
    }
    if form.password.chars().count() < config.min_password_len {
        return Err(AuthError::Validation(format!(
            "Password must be at least {} characters long",
            config.min_password_len
        )));
    }
    let referral_code = Some(form.referral_code.trim()).filter(|c| !c.is_empty()).map(str::to_owned);
    Ok(RegisterRequest {
        full_name: form.full_name.trim().to_owned(),
        email: form.email.trim().to_owned(),
        password: form.password.clone(),
        role: config.default_role.clone(),
        referral_code,
    })
}

/// Where a finished auth flow sends the browser.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Full-page navigation, optionally after a pause (the sign-up page leaves
/// its confirmation on screen for a moment).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator {
    pub delay_ms: u64,
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        if self.delay_ms > 0 {
            let path = path.to_owned();
            let delay = std::time::Duration::from_millis(self.delay_ms);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                redirect(&path);
            });
            return;
        }
        redirect(path);
    }
}

/// Validate, log in, persist the session, and go to the dashboard.
///
/// # Errors
///
/// Returns the validation or request failure; nothing is persisted and no
/// navigation happens then.
pub async fn sign_in(
    api: &impl AuthApi,
    store: &impl KeyValueStore,
    nav: &impl Navigator,
    form: &LoginForm,
    config: &ClientConfig,
) -> Result<Session, AuthError> {
    let request = validate_login(form)?;
    let session = api.login(&request).await?;
    session::persist_session(store, &session);
    log::info!("signed in (profile returned: {})", session.user.is_some());
    nav.navigate(&config.dashboard_path);
    Ok(session)
}

/// Validate, register, persist the session, and go to the dashboard.
///
/// # Errors
///
/// Same as [`sign_in`].
pub async fn sign_up(
    api: &impl AuthApi,
    store: &impl KeyValueStore,
    nav: &impl Navigator,
    form: &SignupForm,
    config: &ClientConfig,
) -> Result<Session, AuthError> {
    let request = validate_signup(form, config)?;
    let session = api.register(&request).await?;
    session::persist_session(store, &session);
    log::info!("account created (profile returned: {})", session.user.is_some());
    nav.navigate(&config.dashboard_path);
    Ok(session)
}

/// Forget the credential and cached identity, then go to the login page.
/// There is no server-side session to end.
pub fn sign_out(store: &impl KeyValueStore, nav: &impl Navigator, config: &ClientConfig) {
    session::clear(store);
    log::info!("signed out");
    nav.navigate(&config.login_path);
}

/// Full-page navigation, so the next page starts from a clean load.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("redirect to {path} skipped outside the browser");
    }
}
