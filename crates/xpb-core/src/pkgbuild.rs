//! PKGBUILD rendering.
//!
//! [`render`] is a pure function of the addon record and the render options:
//! no I/O, no environment lookups, identical input gives identical output.

use crate::addon::ExtensionRecord;
use crate::checksum::{Checksum, ChecksumError};
use thiserror::Error;

/// Name written into the generated-by header.
pub const PROGNAME: &str = "xpi2pkgbuild";

/// Placeholder in the package name template replaced by the addon slug.
pub const SLUG_PLACEHOLDER: &str = "{slug}";

/// Where Firefox picks up system-wide extensions.
const EXTENSIONS_DIR: &str = "/usr/lib/firefox/browser/extensions";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error(transparent)]
    Checksum(#[from] ChecksumError),
}

/// Caller-supplied formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Package name; `{slug}` is replaced by the addon slug.
    pub pkgname_template: String,
    /// Written as `# Maintainer: ...` when set.
    pub maintainer: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pkgname_template: crate::config::DEFAULT_PKGNAME.to_string(),
            maintainer: None,
        }
    }
}

/// Renders the PKGBUILD for `record`.
pub fn render(record: &ExtensionRecord, opts: &RenderOptions) -> Result<String, RenderError> {
    let slug = record.slug.as_str();
    let version = record.version();
    let file = record.file();
    let checksum: Checksum = file.hash.parse()?;
    if !checksum.is_makepkg_algorithm() {
        tracing::warn!(
            "makepkg has no {} array; the PKGBUILD will not verify the download",
            checksum.sums_key()
        );
    }

    let license = record.license();
    let license = if license.is_custom {
        format!("custom:{}", license.slug)
    } else {
        license.slug.clone()
    };

    let xpi = format!("{}.xpi", slug);

    let mut lines = vec![format!("# This file was generated by {}", PROGNAME)];
    if let Some(maintainer) = &opts.maintainer {
        lines.push(format!("# Maintainer: {}", maintainer));
    }
    lines.push(String::new());

    lines.push(format!("pkgname={}", quote(&package_name(&opts.pkgname_template, slug))));
    lines.push(format!("pkgver={}", version));
    lines.push("pkgrel=1".to_string());
    lines.push(format!("pkgdesc={}", quote(record.summary())));
    lines.push("arch=('any')".to_string());
    lines.push(format!("url={}", quote(record.homepage_url())));
    lines.push(format!("license=({})", quote(&license)));
    lines.push("depends=('firefox')".to_string());
    lines.push(format!("_source_file_id={}", file.id));
    lines.push(format!(
        "source=({}::\"{}\")",
        quote(&xpi),
        source_url(&file.url, file.id, version)
    ));
    lines.push(format!("noextract=({})", quote(&xpi)));
    lines.push(format!("{}=({})", checksum.sums_key(), quote(&checksum.digest)));
    lines.push(String::new());

    lines.push("package() {".to_string());
    lines.push(format!(
        "  install -Dm644 {} \"${{pkgdir}}{}/{}\"",
        quote(&xpi),
        EXTENSIONS_DIR,
        xpi
    ));
    lines.push("}".to_string());
    lines.push(String::new());

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// Fills `{slug}` in the package name template. A template without the
/// placeholder is returned unchanged.
pub fn package_name(template: &str, slug: &str) -> String {
    template.replace(SLUG_PLACEHOLDER, slug)
}

/// Rewrites the download URL in terms of `${_source_file_id}` and `${pkgver}`
/// so that bumping `pkgver` and `_source_file_id` is enough for an update.
///
/// Replacement is textual and unscoped: every occurrence of the id, then of
/// the version, is replaced.
pub fn source_url(url: &str, file_id: u64, version: &str) -> String {
    let url = url.replace(&file_id.to_string(), "${_source_file_id}");
    if version.is_empty() {
        return url;
    }
    url.replace(version, "${pkgver}")
}

/// Single-quotes `s` for a shell assignment; embedded quotes become `'\''`.
fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
