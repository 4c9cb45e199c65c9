//! Resumable upload to the object-storage service.
//!
//! PROTOCOL
//! ========
//! `POST /media` (see [`super::api::create_media`]) creates the library
//! record and hands back a pre-authorized upload session URL owned by
//! the storage service. The file body is sent in `Content-Range` chunks
//! against that URL; the service answers `308` with a `Range` header
//! naming the committed bytes until the final chunk, whose response
//! carries the retrievable download address. The session token header is
//! not attached here: authorization lives in the upload URL itself.
//!
//! No chunk is retried automatically; a failed `PUT` surfaces to the
//! caller and requires a new user action.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Chunk size for resumable `PUT`s.
pub const CHUNK_SIZE: usize = 4 * 1024 * 1024;

/// `Content-Range` value for a chunk of `len` bytes at `start` of a
/// `total`-byte upload. `len` must be non-zero.
pub(crate) fn content_range(start: u64, len: u64, total: u64) -> String {
    let end = start + len - 1;
    format!("bytes {start}-{end}/{total}")
}

/// Committed offset after a `308` response, read from its `Range` header
/// (`bytes=0-524287` means 524288 bytes are committed). An absent or
/// unreadable header means nothing is committed yet.
pub(crate) fn parse_committed_offset(range: Option<&str>) -> u64 {
    range
        .and_then(|r| r.rsplit('-').next())
        .and_then(|last| last.trim().parse::<u64>().ok())
        .map_or(0, |last| last + 1)
}

/// Send `data` to the upload session URL and return the download address.
#[cfg(feature = "hydrate")]
pub async fn upload_bytes(
    ticket: &super::types::UploadTicket,
    content_type: &str,
    data: &[u8],
) -> Result<String, showreel_session::SessionError> {
    use showreel_session::SessionError;

    use super::types::CompletedUpload;

    if data.is_empty() {
        return Err(SessionError::Transport("nothing to upload".to_owned()));
    }

    let total = data.len() as u64;
    let mut offset: u64 = 0;
    while offset < total {
        let end = usize::min(offset as usize + CHUNK_SIZE, data.len());
        let chunk = &data[offset as usize..end];

        let resp = gloo_net::http::Request::put(&ticket.upload_url)
            .header("Content-Type", content_type)
            .header(
                "Content-Range",
                &content_range(offset, chunk.len() as u64, total),
            )
            .body(js_sys::Uint8Array::from(chunk))
            .map_err(|e| SessionError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        match resp.status() {
            308 => {
                let committed = parse_committed_offset(resp.headers().get("Range").as_deref());
                if committed <= offset {
                    return Err(SessionError::Transport(
                        "upload made no progress".to_owned(),
                    ));
                }
                offset = committed;
            }
            200..=299 => {
                let done: CompletedUpload = resp
                    .json()
                    .await
                    .map_err(|e| SessionError::Transport(e.to_string()))?;
                return Ok(done.download_url);
            }
            status => {
                return Err(SessionError::Api {
                    status,
                    message: format!("storage service rejected the chunk at {offset}"),
                });
            }
        }
    }

    Err(SessionError::Transport(
        "upload ended without a completion response".to_owned(),
    ))
}
