//! The request pipeline every API call goes through.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning a transport error, since the API is only
//! reachable from the browser.
//!
//! PIPELINE
//! ========
//! Before send: the token store is read and, when a token is present,
//! attached under the custom `token` header (`Bearer <token>`). After
//! receipt: a 401 clears the token store and forces navigation to the
//! login view; every other error passes through to the caller. The
//! upstream host is never hardcoded — requests go through the
//! environment-configured base address (a relative `/api` proxy by
//! default).

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use showreel_session::SessionError;

use super::types::ErrorBody;

/// Environment-configured API base address. Tooling can bake in a
/// fully-qualified origin at build time; production uses the relative
/// proxy path to avoid cross-origin issues.
pub fn api_base() -> &'static str {
    option_env!("SHOWREEL_API_BASE").unwrap_or("/api")
}

/// Join the base address and an endpoint path.
pub(crate) fn join_base(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

pub fn api_url(path: &str) -> String {
    join_base(api_base(), path)
}

/// Pick the user-visible message out of an error response body.
pub(crate) fn error_message(status: u16, body: Option<ErrorBody>) -> String {
    body.and_then(|b| b.message.or(b.error))
        .unwrap_or_else(|| format!("status {status}"))
}

/// GET a JSON resource from the API.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        exec::get_json(path).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(not_in_browser())
    }
}

/// POST a JSON body and parse a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        exec::post_json(path, body, true).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(not_in_browser())
    }
}

/// POST a JSON body, ignoring the response payload.
pub async fn post_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        exec::post_json_unit(path, body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(not_in_browser())
    }
}

/// POST without the 401 interception. Used for the login call itself,
/// where a 401 means bad credentials rather than an expired session.
pub async fn post_json_public<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        exec::post_json(path, body, false).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(not_in_browser())
    }
}

/// DELETE a resource; the API answers with an empty body.
pub async fn delete(path: &str) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        exec::delete(path).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(not_in_browser())
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> SessionError {
    SessionError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
mod exec {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use showreel_session::SessionError;
    use showreel_session::guard::LOGIN_PATH;
    use showreel_session::store::{BrowserStorage, TokenStore};
    use showreel_session::wire::{ResponseClass, auth_header, classify_status};

    use super::super::types::ErrorBody;
    use super::{api_url, error_message};

    fn stored_token() -> Option<String> {
        TokenStore::new(BrowserStorage).access_token()
    }

    /// Attach the `token` header when a session token is present.
    fn with_auth(req: RequestBuilder) -> RequestBuilder {
        match auth_header(stored_token().as_deref()) {
            Some((name, value)) => req.header(name, &value),
            None => req,
        }
    }

    /// 401 handling: clear the token store and force the login view.
    fn force_login_redirect() {
        TokenStore::new(BrowserStorage).clear();
        leptos::logging::warn!("session rejected by the API, returning to login");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }

    fn transport(err: gloo_net::Error) -> SessionError {
        SessionError::Transport(err.to_string())
    }

    async fn api_error(resp: Response) -> SessionError {
        let status = resp.status();
        let body = resp.json::<ErrorBody>().await.ok();
        SessionError::Api {
            status,
            message: error_message(status, body),
        }
    }

    async fn handle<T: DeserializeOwned>(
        resp: Response,
        intercept_unauthorized: bool,
    ) -> Result<T, SessionError> {
        match classify_status(resp.status()) {
            ResponseClass::Ok => resp.json::<T>().await.map_err(transport),
            ResponseClass::Unauthorized if intercept_unauthorized => {
                force_login_redirect();
                Err(SessionError::Unauthorized)
            }
            ResponseClass::Unauthorized | ResponseClass::Failed => Err(api_error(resp).await),
        }
    }

    pub(super) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, SessionError> {
        let resp = with_auth(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(transport)?;
        handle(resp, true).await
    }

    pub(super) async fn post_json<B: Serialize, T: DeserializeOwned>(
        path: &str,
        body: &B,
        intercept_unauthorized: bool,
    ) -> Result<T, SessionError> {
        let resp = with_auth(Request::post(&api_url(path)))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        handle(resp, intercept_unauthorized).await
    }

    pub(super) async fn post_json_unit<B: Serialize>(
        path: &str,
        body: &B,
    ) -> Result<(), SessionError> {
        let resp = with_auth(Request::post(&api_url(path)))
            .json(body)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        match classify_status(resp.status()) {
            ResponseClass::Ok => Ok(()),
            ResponseClass::Unauthorized => {
                force_login_redirect();
                Err(SessionError::Unauthorized)
            }
            ResponseClass::Failed => Err(api_error(resp).await),
        }
    }

    pub(super) async fn delete(path: &str) -> Result<(), SessionError> {
        let resp = with_auth(Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(transport)?;
        match classify_status(resp.status()) {
            ResponseClass::Ok => Ok(()),
            ResponseClass::Unauthorized => {
                force_login_redirect();
                Err(SessionError::Unauthorized)
            }
            ResponseClass::Failed => Err(api_error(resp).await),
        }
    }
}
