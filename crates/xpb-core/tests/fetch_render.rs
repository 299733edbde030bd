//! Integration test: canned API server, fetch, render, write.
//!
//! Drives the whole library pipeline against a local HTTP server and checks
//! the PKGBUILD that lands on disk.

use xpb_core::fetch::{self, FetchError, FetchOptions};
use xpb_core::output;
use xpb_core::pkgbuild::{self, RenderOptions};
use xpb_core::test_utils::api_server::{self, CannedResponse};
use xpb_core::test_utils::fixtures::{self, AddonFixture};

#[test]
fn fetch_render_and_write() {
    let server = api_server::start(CannedResponse::ok(fixtures::sample_addon_json()));

    let record = fetch::fetch_addon(&server.base_url, "ublock-origin", FetchOptions::default())
        .expect("fetch");
    let opts = RenderOptions {
        pkgname_template: "firefox-extension-{slug}-xpi".to_string(),
        maintainer: Some("Packager <p@example.org>".to_string()),
    };
    let text = pkgbuild::render(&record, &opts).expect("render");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("PKGBUILD");
    output::write_output(&path, &text).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();

    assert_eq!(written, text);
    assert!(written.starts_with(
        "# This file was generated by xpi2pkgbuild\n# Maintainer: Packager <p@example.org>\n\n"
    ));
    assert!(written.contains("pkgname='firefox-extension-ublock-origin-xpi'\n"));
    assert!(written.contains("pkgver=1.58.0\n"));
    assert!(written.contains("_source_file_id=4261710\n"));
    assert!(written.contains(
        "source=('ublock-origin.xpi'::\"https://addons.mozilla.org/firefox/downloads/file/${_source_file_id}/ublock_origin-${pkgver}.xpi\")\n"
    ));
    assert!(written.contains("license=('GPL-3.0-or-later')\n"));
    assert_eq!(server.requested_paths(), vec!["/addons/addon/ublock-origin"]);
}

#[test]
fn api_base_with_path_prefix() {
    let body = fixtures::addon_json(&AddonFixture::default());
    let server = api_server::start(CannedResponse::ok(body));
    let base = format!("{}api/v5/", server.base_url);

    let record = fetch::fetch_addon(&base, "607454", FetchOptions::default()).unwrap();

    assert_eq!(record.slug, "example-ext");
    assert_eq!(server.requested_paths(), vec!["/api/v5/addons/addon/607454"]);
}

#[test]
fn server_error_reports_code_and_reason() {
    let server = api_server::start(CannedResponse::status("503 Service Unavailable"));

    let err = fetch::fetch_addon(&server.base_url, "x", FetchOptions::default()).unwrap_err();

    assert_eq!(err.to_string(), "HTTP 503 - Service Unavailable");
    assert!(matches!(err, FetchError::Status { code: 503, .. }));
}

#[test]
fn non_json_body_is_decode_error() {
    let server = api_server::start(CannedResponse {
        status: "200 OK".to_string(),
        content_type: "text/html",
        body: "<html>maintenance</html>".to_string(),
    });

    let err = fetch::fetch_addon(&server.base_url, "x", FetchOptions::default()).unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "{:?}", err);
}

#[test]
fn missing_field_names_the_field() {
    let server = api_server::start(CannedResponse::ok(
        r#"{"slug":"x","summary":{"en-US":"s"},"homepage":{"url":{"en-US":"u"}}}"#.to_string(),
    ));

    let err = fetch::fetch_addon(&server.base_url, "x", FetchOptions::default()).unwrap_err();

    assert!(err.to_string().contains("current_version"), "{}", err);
}

#[test]
fn connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let base = format!("http://127.0.0.1:{}/", port);

    let err = fetch::fetch_addon(&base, "x", FetchOptions::default()).unwrap_err();

    assert!(matches!(err, FetchError::Transport(_)), "{:?}", err);
}
