//! Addon JSON fixtures shaped like the AMO v5 addon detail response.

use serde_json::json;

/// The fields a fixture varies; everything else is fixed filler.
#[derive(Debug, Clone)]
pub struct AddonFixture {
    pub slug: String,
    pub summary: String,
    pub homepage: String,
    pub version: String,
    pub file_id: u64,
    pub file_url: String,
    pub hash: String,
    pub license_slug: String,
    pub license_is_custom: bool,
}

impl Default for AddonFixture {
    fn default() -> Self {
        Self {
            slug: "example-ext".to_string(),
            summary: "An example extension".to_string(),
            homepage: "https://example.org/ext".to_string(),
            version: "1.2.0".to_string(),
            file_id: 98765,
            file_url: "https://example.org/files/98765/ext-1.2.0.xpi".to_string(),
            hash: "sha256:abcd1234".to_string(),
            license_slug: "MPL-2.0".to_string(),
            license_is_custom: false,
        }
    }
}

/// Renders `f` as an API response body.
pub fn addon_json(f: &AddonFixture) -> String {
    json!({
        "id": 1,
        "guid": format!("{}@example.org", f.slug),
        "slug": f.slug,
        "type": "extension",
        "summary": { "en-US": f.summary },
        "homepage": {
            "url": { "en-US": f.homepage },
            "outgoing": { "en-US": "https://outgoing.prod.mozaws.net/v1/x" }
        },
        "current_version": {
            "id": 5000,
            "version": f.version,
            "file": {
                "id": f.file_id,
                "url": f.file_url,
                "hash": f.hash,
                "size": 1024,
                "status": "public"
            },
            "license": {
                "id": 7,
                "slug": f.license_slug,
                "is_custom": f.license_is_custom,
                "name": { "en-US": "License" }
            }
        }
    })
    .to_string()
}

/// A realistic uBlock Origin response.
pub fn sample_addon_json() -> String {
    addon_json(&AddonFixture {
        slug: "ublock-origin".to_string(),
        summary: "Finally, an efficient wide-spectrum content blocker. Easy on CPU and memory."
            .to_string(),
        homepage: "https://github.com/gorhill/uBlock#ublock-origin".to_string(),
        version: "1.58.0".to_string(),
        file_id: 4261710,
        file_url: "https://addons.mozilla.org/firefox/downloads/file/4261710/ublock_origin-1.58.0.xpi"
            .to_string(),
        hash: "sha256:3f9e0ba3b0bbd7ef5a2b1f6a7c1e0f0b2b8d0b3a6b3c5e0f9a1d2c3b4a5f6e7d".to_string(),
        license_slug: "GPL-3.0-or-later".to_string(),
        license_is_custom: false,
    })
}
