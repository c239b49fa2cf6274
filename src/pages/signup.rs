//! Sign-up page.
//!
//! Posts `{full_name, email, password, role}` plus an optional referral
//! code. On success the page shows a short confirmation before moving on to
//! the dashboard.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::ClientConfig;
use crate::util::auth::SignupForm;

#[cfg(feature = "hydrate")]
const CONFIRMATION_DELAY_MS: u64 = 1_000;

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let min_len = config.min_password_len;

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let referral_code = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignupForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            referral_code: referral_code.get_untracked(),
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::error::AuthFlow;
            use crate::net::api::HttpAuthApi;
            use crate::util::auth::{ACCOUNT_CREATED, BrowserNavigator, sign_up};
            use crate::util::local_storage::LocalStorage;

            let config = config.clone();
            leptos::task::spawn_local(async move {
                let api = HttpAuthApi::new(&config);
                let nav = BrowserNavigator { delay_ms: CONFIRMATION_DELAY_MS };
                match sign_up(&api, &LocalStorage, &nav, &form, &config).await {
                    Ok(_) => notice.set(Some(ACCOUNT_CREATED)),
                    Err(e) => {
                        leptos::logging::warn!("sign-up failed: {e}");
                        error.set(Some(e.user_message(AuthFlow::Register)));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&form, &config, notice);
        }
    };

    let field = move |label: &'static str, kind: &'static str, autocomplete: &'static str, value: RwSignal<String>| {
        view! {
            <label class="auth-form__field">
                {label}
                <input
                    type=kind
                    autocomplete=autocomplete
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <ThemeToggle/>
            </header>
            <form class="auth-form" on:submit=on_submit>
                <h1>"Create account"</h1>
                {field("Full name", "text", "name", full_name)}
                {field("Email", "email", "email", email)}
                {field("Password", "password", "new-password", password)}
                <p class="auth-form__hint">{format!("At least {min_len} characters.")}</p>
                {field("Referral code (optional)", "text", "off", referral_code)}
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <p class="auth-form__notice" role="status">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                </button>
                <p class="auth-form__switch">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
