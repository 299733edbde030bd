//! Typed view of the AMO `addons/addon/<id>` response.
//!
//! Only the fields needed to render a PKGBUILD are modelled; everything else
//! in the response is ignored. A missing field fails deserialization with a
//! message naming that field.

use serde::Deserialize;

/// Addon detail as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtensionRecord {
    /// URL-safe identifier, e.g. `ublock-origin`.
    pub slug: String,
    pub summary: Localized,
    pub homepage: Homepage,
    pub current_version: CurrentVersion,
}

/// A translated string; only the `en-US` translation is used.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Localized {
    #[serde(rename = "en-US")]
    pub en_us: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Homepage {
    pub url: Localized,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CurrentVersion {
    pub version: String,
    pub file: VersionFile,
    pub license: License,
}

/// The distributable `.xpi` of a version.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionFile {
    pub id: u64,
    /// Download URL; normally contains both `id` and the version string.
    pub url: String,
    /// `<algorithm>:<hexdigest>`, see [`crate::checksum::Checksum`].
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct License {
    pub slug: String,
    pub is_custom: bool,
}

impl ExtensionRecord {
    pub fn summary(&self) -> &str {
        &self.summary.en_us
    }

    pub fn homepage_url(&self) -> &str {
        &self.homepage.url.en_us
    }

    pub fn version(&self) -> &str {
        &self.current_version.version
    }

    pub fn file(&self) -> &VersionFile {
        &self.current_version.file
    }

    pub fn license(&self) -> &License {
        &self.current_version.license
    }
}
