/// Fetch-and-decode for a single image reference.
///
/// The reference forms accepted by the validator map onto three sources:
/// `data:` URIs decode in process, http(s) and protocol-relative URLs are
/// fetched over the network, and everything else is read from disk
/// relative to the working directory (rooted refs like `/images/g1.jpg`
/// are resolved against it too). Bytes are verified decodable before
/// becoming a handle so render-time never sees a broken image.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use iced::widget::image::Handle;
use thiserror::Error;

use crate::gallery::FALLBACK_IMAGE_REF;

/// Why a single reference failed to load. Kept `Clone` (with string
/// payloads) because it travels inside UI messages.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("unsupported data URI (expected a base64 payload)")]
    DataUri,
    #[error("invalid base64 payload: {0}")]
    Base64(String),
    #[error("request failed: {0}")]
    Http(String),
    #[error("could not read {0}: {1}")]
    Io(String, String),
    #[error("not a decodable image: {0}")]
    Decode(String),
}

/// Load one reference into an iced image handle.
pub async fn load_image(src: String) -> Result<Handle, LoadError> {
    let bytes = fetch_bytes(&src).await?;
    // Decode eagerly so a corrupt file surfaces here, where the caller
    // can swap in the placeholder, instead of at render time.
    image::load_from_memory(&bytes).map_err(|error| LoadError::Decode(error.to_string()))?;
    Ok(Handle::from_bytes(bytes))
}

/// Handle for the embedded 1x1 placeholder. Decoding a compile-time
/// constant cannot fail, so this is infallible.
pub fn fallback_handle() -> Handle {
    let payload = FALLBACK_IMAGE_REF
        .split_once(',')
        .map(|(_, payload)| payload)
        .unwrap_or_default();
    Handle::from_bytes(STANDARD.decode(payload).unwrap_or_default())
}

async fn fetch_bytes(src: &str) -> Result<Vec<u8>, LoadError> {
    if let Some(rest) = src.strip_prefix("data:") {
        decode_data_uri(rest)
    } else if src.starts_with("http://") || src.starts_with("https://") {
        fetch_remote(src.to_string()).await
    } else if src.starts_with("//") {
        // Protocol-relative: the desktop app has no page scheme to
        // inherit, so assume https.
        fetch_remote(format!("https:{}", src)).await
    } else {
        read_local(src).await
    }
}

fn decode_data_uri(rest: &str) -> Result<Vec<u8>, LoadError> {
    let (meta, payload) = rest.split_once(',').ok_or(LoadError::DataUri)?;
    if !meta.ends_with(";base64") {
        return Err(LoadError::DataUri);
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|error| LoadError::Base64(error.to_string()))
}

async fn fetch_remote(url: String) -> Result<Vec<u8>, LoadError> {
    let response = reqwest::get(&url)
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|error| LoadError::Http(error.to_string()))?;
    let bytes = response
        .bytes()
        .await
        .map_err(|error| LoadError::Http(error.to_string()))?;
    Ok(bytes.to_vec())
}

async fn read_local(src: &str) -> Result<Vec<u8>, LoadError> {
    // Rooted refs come from the web-era configuration; resolve them
    // against the working directory instead of the filesystem root.
    let relative = src.strip_prefix('/').unwrap_or(src);
    tokio::fs::read(relative)
        .await
        .map_err(|error| LoadError::Io(src.to_string(), error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fallback_data_uri_loads() {
        let result = load_image(FALLBACK_IMAGE_REF.to_string()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_local_file_fails() {
        let result = load_image("/no/such/photo.jpg".to_string()).await;
        assert!(matches!(result, Err(LoadError::Io(_, _))));
    }

    #[tokio::test]
    async fn test_non_base64_data_uri_rejected() {
        let result = load_image("data:text/plain,hello".to_string()).await;
        assert!(matches!(result, Err(LoadError::DataUri)));
    }

    #[tokio::test]
    async fn test_garbage_base64_rejected() {
        let result = load_image("data:image/png;base64,@@@".to_string()).await;
        assert!(matches!(result, Err(LoadError::Base64(_))));
    }

    #[tokio::test]
    async fn test_undecodable_bytes_rejected() {
        // Valid base64, but the payload is not an image.
        let result = load_image("data:image/png;base64,aGVsbG8=".to_string()).await;
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[test]
    fn test_fallback_payload_is_a_real_png() {
        let payload = FALLBACK_IMAGE_REF.split_once(',').unwrap().1;
        let bytes = STANDARD.decode(payload).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1, 1));
    }
}
