//! Kodi `.strm` stream descriptors.
//!
//! Kodi reads request headers from the part after `|`:
//! `url|Name=value&Name2=value2`, with each value percent-encoded.

use crate::curl::HeaderMap;
use crate::error::{Error, Result};

/// Compose the single-line `.strm` content for `url` and `headers`.
///
/// Values are percent-encoded with everything but ASCII alphanumerics and
/// `-_.~` escaped (space is `%20`); names are written as captured.
pub fn strm_content(url: &str, headers: &HeaderMap) -> Result<String> {
    if url.is_empty() {
        return Err(Error::InvalidInput);
    }
    if headers.is_empty() {
        return Ok(url.to_string());
    }

    let header_str = headers
        .iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    Ok(format!("{url}|{header_str}"))
}
