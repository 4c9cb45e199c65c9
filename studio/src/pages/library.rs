//! Library page listing the content catalogue.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use showreel_session::guard::{self, GuardAction};

use crate::components::media_card::MediaCard;
use crate::components::nav::NavBar;
use crate::state::session::{self, SessionState};

/// Library page — the main view. Shows every media item with its
/// processing status. Redirects to `/login` when no token is persisted.
#[component]
pub fn LibraryPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Route guard: presence check only, the API is the authority.
    Effect::new(move || {
        let state = session.get();
        if !state.loading
            && guard::decide("/", session::persisted_token_present()) == GuardAction::ToLogin
        {
            navigate(guard::LOGIN_PATH, NavigateOptions::default());
        }
    });

    let media = LocalResource::new(|| crate::net::api::fetch_media());

    view! {
        <div class="library-page">
            <NavBar/>
            <header class="library-page__header">
                <h1>"Library"</h1>
                <a class="btn btn--primary" href="/upload">"+ Upload"</a>
            </header>

            <div class="library-page__grid">
                <Suspense fallback=move || view! { <p>"Loading library..."</p> }>
                    {move || {
                        media.get().map(|result| match result {
                            Ok(items) if items.is_empty() => {
                                view! { <p class="library-page__empty">"No videos yet."</p> }
                                    .into_any()
                            }
                            Ok(items) => {
                                view! {
                                    <div class="library-page__cards">
                                        {items
                                            .into_iter()
                                            .map(|item| view! { <MediaCard item=item/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="library-page__error">
                                        "Could not load the library: " {err.to_string()}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
