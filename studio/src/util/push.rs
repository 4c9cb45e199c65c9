//! Device-token relay for the push-messaging service.
//!
//! The mobile shell obtains a push device token natively and hands it to
//! the web layer through localStorage. Once a session exists the token is
//! relayed to the API exactly once; the relayed value is recorded so a
//! changed token is sent again while an unchanged one is not. Message
//! delivery and re-registration are the messaging service's concern.

#[cfg(test)]
#[path = "push_test.rs"]
mod push_test;

/// Key the native shell writes the device token under.
pub const DEVICE_TOKEN_KEY: &str = "showreel_device_token";
/// Key the shell writes the platform name under ("ios", "android").
pub const DEVICE_PLATFORM_KEY: &str = "showreel_device_platform";
/// Key recording the last token relayed to the API.
pub const DEVICE_TOKEN_SENT_KEY: &str = "showreel_device_token_sent";

/// The token that still needs relaying, if any.
pub(crate) fn pending_token(token: Option<String>, sent: Option<String>) -> Option<String> {
    let token = token.filter(|t| !t.is_empty())?;
    if sent.as_deref() == Some(token.as_str()) {
        None
    } else {
        Some(token)
    }
}

/// Relay the shell-provided device token to the API, if one is pending.
/// Call after a session is established; a failure is logged and retried
/// only by a later call.
pub fn relay_device_token() {
    #[cfg(feature = "hydrate")]
    {
        use showreel_session::store::{BrowserStorage, StorageBackend};

        let storage = BrowserStorage;
        let Some(token) = pending_token(
            storage.get(DEVICE_TOKEN_KEY),
            storage.get(DEVICE_TOKEN_SENT_KEY),
        ) else {
            return;
        };
        let platform = storage
            .get(DEVICE_PLATFORM_KEY)
            .unwrap_or_else(|| "web".to_owned());

        leptos::task::spawn_local(async move {
            match crate::net::api::register_device_token(&token, &platform).await {
                Ok(()) => {
                    BrowserStorage.set(DEVICE_TOKEN_SENT_KEY, &token);
                }
                Err(err) => leptos::logging::warn!("device token relay failed: {err}"),
            }
        });
    }
}
