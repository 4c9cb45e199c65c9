//! Login page with an email/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use showreel_session::guard::{self, GuardAction};

use crate::state::session::{self, SessionState};

/// Login page — authenticates against the API and redirects to the
/// library on success. An already signed-in visitor is redirected away.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    // Authenticated access of the login path goes to the main view.
    {
        let navigate = use_navigate();
        Effect::new(move || {
            let state = session.get();
            if !state.loading
                && guard::decide(guard::LOGIN_PATH, session::persisted_token_present())
                    == GuardAction::ToMain
            {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |()| {
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            return;
        }
        // The submit control is disabled while a call is outstanding;
        // this is the backstop for overlapping submissions.
        if session.get_untracked().loading {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if session::login(session, email_value, password_value).await {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
        }
    });

    view! {
        <div class="login-page">
            <h1>"Showreel Studio"</h1>
            <p>"Sign in with your admin account"</p>

            <label class="login-page__label">
                "Email"
                <input
                    class="login-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                "Password"
                <input
                    class="login-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>

            {move || {
                session
                    .get()
                    .last_error
                    .map(|err| view! { <p class="login-page__error">{err.to_string()}</p> })
            }}

            <button
                class="btn btn--primary"
                disabled=move || session.get().loading
                on:click=move |_| submit.run(())
            >
                {move || if session.get().loading { "Signing in..." } else { "Sign in" }}
            </button>
        </div>
    }
}
