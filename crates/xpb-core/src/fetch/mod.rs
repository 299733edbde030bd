//! Addon metadata fetch.
//!
//! Uses the curl crate (libcurl) for one blocking GET against
//! `<api-base>/addons/addon/<id>` and decodes the JSON body into an
//! [`ExtensionRecord`]. No retries, no authentication.

mod error;
mod status;

pub use error::FetchError;

use crate::addon::ExtensionRecord;
use std::str;
use std::time::Duration;
use url::Url;

/// Resource path of the addon detail endpoint, relative to the API base.
pub const ADDON_API_PATH: &str = "addons/addon/";

const USER_AGENT: &str = concat!("xpi2pkgbuild/", env!("CARGO_PKG_VERSION"));

/// Transfer knobs; defaults leave everything to libcurl.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    pub connect_timeout: Option<Duration>,
}

/// Builds the addon detail URL.
///
/// Both steps are RFC 3986 reference resolution: a base without a trailing
/// slash has its last segment replaced, and an identifier is resolved
/// relative to `addons/addon/`.
pub fn addon_url(api_base: &str, id: &str) -> Result<Url, FetchError> {
    let base = Url::parse(api_base)?;
    let endpoint = base.join(ADDON_API_PATH)?;
    Ok(endpoint.join(id)?)
}

/// Fetches and decodes the addon detail for `id`.
pub fn fetch_addon(
    api_base: &str,
    id: &str,
    opts: FetchOptions,
) -> Result<ExtensionRecord, FetchError> {
    let url = addon_url(api_base, id)?;
    let body = get(&url, opts)?;
    let record: ExtensionRecord = serde_json::from_slice(&body)?;
    tracing::debug!(
        "addon {} version {} file {}",
        record.slug,
        record.current_version.version,
        record.current_version.file.id
    );
    Ok(record)
}

/// Performs a GET and returns the body of a 200 response.
///
/// Runs in the current thread. Redirects are followed; the request is pinned
/// to HTTP/1.1 so the reason phrase is available for error reporting.
pub fn get(url: &Url, opts: FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut headers: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    tracing::info!("GET {}", url);

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.http_version(curl::easy::HttpVersion::V11)?;
    easy.useragent(USER_AGENT)?;
    if let Some(timeout) = opts.connect_timeout {
        easy.connect_timeout(timeout)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if code != 200 {
        let reason = status::last_status_line(&headers)
            .filter(|s| s.code == code)
            .map(|s| s.reason)
            .unwrap_or_default();
        tracing::warn!("GET {} returned HTTP {} {}", url, code, reason);
        return Err(FetchError::Status { code, reason });
    }

    tracing::debug!("GET {} returned {} bytes", url, body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{api_server, fixtures};

    #[test]
    fn addon_url_default_api() {
        let url = addon_url("https://addons.mozilla.org/api/v5/", "ublock-origin").unwrap();
        assert_eq!(
            url.as_str(),
            "https://addons.mozilla.org/api/v5/addons/addon/ublock-origin"
        );
    }

    #[test]
    fn addon_url_numeric_id_and_guid() {
        let url = addon_url("https://addons.mozilla.org/api/v5/", "607454").unwrap();
        assert!(url.as_str().ends_with("/addons/addon/607454"));
        let url =
            addon_url("https://addons.mozilla.org/api/v5/", "uBlock0@raymondhill.net").unwrap();
        assert!(url.as_str().ends_with("/addons/addon/uBlock0@raymondhill.net"));
    }

    #[test]
    fn addon_url_base_without_trailing_slash_replaces_last_segment() {
        let url = addon_url("https://addons.mozilla.org/api/v5", "x").unwrap();
        assert_eq!(url.as_str(), "https://addons.mozilla.org/api/addons/addon/x");
    }

    #[test]
    fn addon_url_invalid_base() {
        assert!(matches!(
            addon_url("not a url", "x"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn fetch_addon_ok() {
        let server =
            api_server::start(api_server::CannedResponse::ok(fixtures::sample_addon_json()));
        let record =
            fetch_addon(&server.base_url, "ublock-origin", FetchOptions::default()).unwrap();
        assert_eq!(record.slug, "ublock-origin");
        assert_eq!(server.requested_paths(), vec!["/addons/addon/ublock-origin"]);
    }

    #[test]
    fn fetch_addon_not_found() {
        let server = api_server::start(api_server::CannedResponse::status("404 Not Found"));
        let err = fetch_addon(&server.base_url, "missing", FetchOptions::default()).unwrap_err();
        match err {
            FetchError::Status { code, reason } => {
                assert_eq!(code, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }
}
