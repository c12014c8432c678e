//! Share-link codec.
//!
//! A share token is the JSON payload `{config, theme?, version}` compressed with raw
//! deflate and encoded with the URL-safe base64 alphabet without padding, so it can
//! be dropped into a query string as-is.

use crate::value::{ConfigValue, ConfigValues};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Payload version written by [`encode_config`].
pub const CURRENT_VERSION: u32 = 1;

/// Origin used for share links when the caller has none of its own.
pub const DEFAULT_SHARE_ORIGIN: &str = "https://spectre.dev";

/// Inflated payloads larger than this are rejected.
const MAX_PAYLOAD_BYTES: u64 = 1024 * 1024;

/// A decoded share payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareableConfig {
    pub config: ConfigValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub version: u32,
}

/// Result of looking for a share token in a URL or query string.
#[derive(Debug, Clone, PartialEq)]
pub enum ShareLookup {
    /// No `c` parameter, or an empty one.
    Missing,
    /// A token was present but did not decode.
    Invalid,
    Loaded(ShareableConfig),
}

impl ShareLookup {
    pub fn loaded(self) -> Option<ShareableConfig> {
        match self {
            ShareLookup::Loaded(shared) => Some(shared),
            ShareLookup::Missing | ShareLookup::Invalid => None,
        }
    }
}

/// Encode `config` and an optional theme name into a share token.
///
/// Empty theme names are left out of the payload. The output is deterministic for a
/// given input.
pub fn encode_config(config: &ConfigValues, theme: Option<&str>) -> String {
    let payload = ShareableConfig {
        config: config.clone(),
        theme: theme.filter(|t| !t.is_empty()).map(str::to_string),
        version: CURRENT_VERSION,
    };

    // Serializing a string-keyed map of plain scalars cannot fail.
    let json = serde_json::to_vec(&payload).unwrap_or_default();

    let mut encoder = DeflateEncoder::new(Vec::with_capacity(json.len()), Compression::best());
    let compressed = match encoder.write_all(&json).and_then(|_| encoder.finish()) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to compress share payload: {e}");
            Vec::new()
        }
    };

    URL_SAFE_NO_PAD.encode(compressed)
}

/// Decode a share token.
///
/// Returns `None` when any stage fails or when the payload has no `config` object.
/// Entries inside `config` that are not scalars or string lists are dropped.
pub fn decode_config(token: &str) -> Option<ShareableConfig> {
    let compressed = match URL_SAFE_NO_PAD.decode(token.trim().trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::debug!("Share token is not valid base64: {e}");
            return None;
        }
    };

    let mut json = String::new();
    let mut decoder = DeflateDecoder::new(compressed.as_slice()).take(MAX_PAYLOAD_BYTES + 1);
    if let Err(e) = decoder.read_to_string(&mut json) {
        log::debug!("Share token failed to inflate: {e}");
        return None;
    }
    if json.len() as u64 > MAX_PAYLOAD_BYTES {
        log::warn!("Share payload exceeds {MAX_PAYLOAD_BYTES} bytes, ignoring");
        return None;
    }

    let data: serde_json::Value = match serde_json::from_str(&json) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("Share payload is not JSON: {e}");
            return None;
        }
    };

    let entries = data.get("config")?.as_object()?;
    let mut config = ConfigValues::new();
    for (key, raw) in entries {
        match ConfigValue::from_json(raw) {
            Some(value) => {
                config.insert(key.clone(), value);
            }
            None => log::debug!("Dropping non-scalar share entry {key}"),
        }
    }

    let version = data
        .get("version")
        .and_then(serde_json::Value::as_u64)
        .map_or(CURRENT_VERSION, |v| u32::try_from(v).unwrap_or(u32::MAX));
    if version > CURRENT_VERSION {
        log::warn!(
            "Share link was made by a newer version (payload v{version}, supported v{CURRENT_VERSION})"
        );
    }

    let theme = data
        .get("theme")
        .and_then(serde_json::Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Some(ShareableConfig {
        config,
        theme,
        version,
    })
}

/// Build `{origin}/share?c={token}`.
pub fn build_share_url(origin: &str, config: &ConfigValues, theme: Option<&str>) -> String {
    format!(
        "{}/share?c={}",
        origin.trim_end_matches('/'),
        encode_config(config, theme)
    )
}

/// Extract and decode the `c` parameter of a full share URL.
///
/// A string that is not an absolute URL counts as [`ShareLookup::Missing`].
pub fn config_from_url(share_url: &str) -> ShareLookup {
    match url::Url::parse(share_url.trim()) {
        Ok(parsed) => lookup(parsed.query_pairs().find(|(k, _)| k == "c").map(|(_, v)| v.into_owned())),
        Err(e) => {
            log::debug!("Not a share URL ({e}): {share_url}");
            ShareLookup::Missing
        }
    }
}

/// Extract and decode the `c` parameter of a query string, with or without the
/// leading `?`.
pub fn config_from_query(query: &str) -> ShareLookup {
    let query = query.trim().trim_start_matches('?');
    lookup(
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == "c")
            .map(|(_, v)| v.into_owned()),
    )
}

fn lookup(token: Option<String>) -> ShareLookup {
    match token.as_deref().map(str::trim) {
        None | Some("") => ShareLookup::Missing,
        Some(token) => decode_config(token).map_or(ShareLookup::Invalid, ShareLookup::Loaded),
    }
}
