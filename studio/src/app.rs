//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{library::LibraryPage, login::LoginPage, media::MediaPage, upload::UploadPage};
use crate::state::session::{self, SessionState};

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The
/// session is hydrated from persisted storage once at mount; until that
/// finishes, pages hold off on guard redirects.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState {
        loading: true,
        ..SessionState::default()
    });
    provide_context(session);

    // One-shot: rebuild in-memory state from the token store.
    Effect::new(move || session::hydrate_session(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/showreel-studio.css"/>
        <Title text="Showreel Studio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=LibraryPage/>
                <Route path=StaticSegment("upload") view=UploadPage/>
                <Route path=(StaticSegment("media"), ParamSegment("id")) view=MediaPage/>
            </Routes>
        </Router>
    }
}
