//! Upload page — creates the library record, then streams the file to
//! the object-storage service with resumable `PUT`s.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use showreel_session::guard::{self, GuardAction};

use crate::components::nav::NavBar;
use crate::state::session::{self, SessionState};

/// A file read into memory, ready to upload.
#[derive(Clone, Debug)]
struct PickedFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// Upload page. The selected file is read fully before the upload
/// starts; progress display is not part of this client.
#[component]
pub fn UploadPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    {
        let navigate = use_navigate();
        Effect::new(move || {
            let state = session.get();
            if !state.loading
                && guard::decide("/upload", session::persisted_token_present())
                    == GuardAction::ToLogin
            {
                navigate(guard::LOGIN_PATH, NavigateOptions::default());
            }
        });
    }

    let title = RwSignal::new(String::new());
    let picked = RwSignal::new(None::<PickedFile>);
    let busy = RwSignal::new(false);
    let message = RwSignal::new(None::<String>);

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            let name = file.name();
            let content_type = file.type_();
            leptos::task::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => {
                        let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                        picked.set(Some(PickedFile {
                            name,
                            content_type,
                            bytes,
                        }));
                        message.set(None);
                    }
                    Err(_) => message.set(Some("could not read the selected file".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let submit = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::NewMedia;

            let Some(file) = picked.get_untracked() else {
                message.set(Some("choose a file first".to_owned()));
                return;
            };
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            message.set(None);

            let upload_title = {
                let typed = title.get_untracked();
                if typed.trim().is_empty() {
                    file.name.clone()
                } else {
                    typed.trim().to_owned()
                }
            };

            leptos::task::spawn_local(async move {
                let meta = NewMedia {
                    title: upload_title,
                    content_type: file.content_type.clone(),
                    size: file.bytes.len() as u64,
                };
                let outcome = match crate::net::api::create_media(&meta).await {
                    Ok(ticket) => {
                        crate::net::upload::upload_bytes(&ticket, &file.content_type, &file.bytes)
                            .await
                    }
                    Err(err) => Err(err),
                };
                match outcome {
                    Ok(url) => {
                        picked.set(None);
                        title.set(String::new());
                        message.set(Some(format!("Upload complete: {url}")));
                    }
                    Err(err) => message.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    view! {
        <div class="upload-page">
            <NavBar/>
            <h1>"Upload"</h1>

            <label class="upload-page__label">
                "Title"
                <input
                    class="upload-page__input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>

            <input class="upload-page__file" type="file" accept="video/*" on:change=on_file/>

            {move || {
                picked
                    .get()
                    .map(|file| view! { <p class="upload-page__picked">{file.name}</p> })
            }}
            {move || message.get().map(|text| view! { <p class="upload-page__message">{text}</p> })}

            <button
                class="btn btn--primary"
                disabled=move || busy.get() || picked.get().is_none()
                on:click=submit
            >
                {move || if busy.get() { "Uploading..." } else { "Start upload" }}
            </button>
        </div>
    }
}
