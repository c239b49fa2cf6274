//! Sign-in page.
//!
//! The form posts `{email, password}` to the login endpoint. Validation and
//! persistence live in `util::auth`; this page owns only the busy flag and
//! the inline message.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::ClientConfig;
use crate::util::auth::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::error::AuthFlow;
            use crate::net::api::HttpAuthApi;
            use crate::util::auth::{BrowserNavigator, sign_in};
            use crate::util::local_storage::LocalStorage;

            let config = config.clone();
            leptos::task::spawn_local(async move {
                let api = HttpAuthApi::new(&config);
                if let Err(e) = sign_in(&api, &LocalStorage, &BrowserNavigator::default(), &form, &config).await {
                    leptos::logging::warn!("sign-in failed: {e}");
                    error.set(Some(e.user_message(AuthFlow::Login)));
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&form, &config);
        }
    };

    view! {
        <div class="auth-page">
            <header class="auth-page__header">
                <ThemeToggle/>
            </header>
            <form class="auth-form" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <label class="auth-form__field">
                    "Email"
                    <input
                        type="email"
                        name="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </label>
                <label class="auth-form__field">
                    "Password"
                    <input
                        type="password"
                        name="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-form__switch">
                    "No account yet? " <a href="/signup">"Create one"</a>
                </p>
            </form>
        </div>
    }
}
