//! Media detail page with playback address and delete action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use showreel_session::guard::{self, GuardAction};
use uuid::Uuid;

use crate::components::nav::NavBar;
use crate::net::types::{MediaItem, MediaStatus};
use crate::state::session::{self, SessionState};

/// Media page — reads the item ID from the route parameter, shows the
/// record, and offers deletion. Redirects to `/login` when no token is
/// persisted.
#[component]
pub fn MediaPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let params = use_params_map();

    {
        let navigate = use_navigate();
        Effect::new(move || {
            let state = session.get();
            if !state.loading
                && guard::decide("/media", session::persisted_token_present())
                    == GuardAction::ToLogin
            {
                navigate(guard::LOGIN_PATH, NavigateOptions::default());
            }
        });
    }

    // Item ID from the route; an unparseable ID renders the error branch.
    let media_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| Uuid::parse_str(&raw).ok())
    };

    let item = LocalResource::new(move || {
        let id = media_id();
        async move {
            match id {
                Some(id) => crate::net::api::fetch_media_item(id).await,
                None => Err(showreel_session::SessionError::Api {
                    status: 404,
                    message: "unknown media id".to_owned(),
                }),
            }
        }
    });

    view! {
        <div class="media-page">
            <NavBar/>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    item.get().map(|result| match result {
                        Ok(item) => view! { <MediaDetail item=item/> }.into_any(),
                        Err(err) => {
                            view! { <p class="media-page__error">{err.to_string()}</p> }
                                .into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}

/// The loaded record: metadata, download address when ready, delete.
#[component]
fn MediaDetail(item: MediaItem) -> impl IntoView {
    let navigate = use_navigate();
    let deleting = RwSignal::new(false);
    let id = item.id;

    let on_delete = move |_| {
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_media_item(id).await {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(err) => {
                        leptos::logging::warn!("delete failed: {err}");
                        deleting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, id);
        }
    };

    let status_label = match item.status {
        MediaStatus::Uploading => "uploading",
        MediaStatus::Processing => "processing",
        MediaStatus::Ready => "ready",
        MediaStatus::Failed => "failed",
    };

    view! {
        <article class="media-detail">
            <h1>{item.title}</h1>
            <p class="media-detail__status">{status_label}</p>
            {item
                .description
                .map(|text| view! { <p class="media-detail__description">{text}</p> })}
            {item
                .download_url
                .map(|url| {
                    view! {
                        <a class="media-detail__download" href=url.clone()>
                            {url.clone()}
                        </a>
                    }
                })}
            <button class="btn btn--danger" disabled=move || deleting.get() on:click=on_delete>
                {move || if deleting.get() { "Deleting..." } else { "Delete" }}
            </button>
        </article>
    }
}
