//! Top navigation bar with the signed-in user and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use showreel_session::guard;

use crate::state::session::{self, SessionState};

/// Navigation bar shown on every protected page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        session::logout(session);
        navigate(guard::LOGIN_PATH, NavigateOptions::default());
    });

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"Showreel Studio"</a>
            <nav class="nav-bar__links">
                <a href="/upload">"Upload"</a>
            </nav>
            <Show when=move || session.get().is_authenticated()>
                <div class="nav-bar__user">
                    <span class="nav-bar__name">
                        {move || {
                            session
                                .get()
                                .session
                                .map(|s| s.display_name)
                                .unwrap_or_default()
                        }}
                    </span>
                    <button class="btn" on:click=move |_| on_logout.run(())>"Log out"</button>
                </div>
            </Show>
        </header>
    }
}
