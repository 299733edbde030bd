use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Production addons.mozilla.org API root.
pub const DEFAULT_API: &str = "https://addons.mozilla.org/api/v5/";

/// Package name template used when neither the flag nor the config sets one.
pub const DEFAULT_PKGNAME: &str = "firefox-extension-{slug}-xpi";

/// Optional user configuration loaded from `~/.config/xpi2pkgbuild/config.toml`.
///
/// Every key is optional; command-line flags win over these values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XpbConfig {
    /// API base URL (e.g. a staging AMO instance).
    #[serde(default)]
    pub api: Option<String>,
    /// Package name template; `{slug}` is replaced by the extension slug.
    #[serde(default)]
    pub pkgname: Option<String>,
    /// Maintainer written as a comment at the top of every PKGBUILD.
    #[serde(default)]
    pub maintainer: Option<String>,
    /// Connect timeout in seconds. Unset means libcurl's default.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl XpbConfig {
    pub fn api_or_default(&self) -> &str {
        self.api.as_deref().unwrap_or(DEFAULT_API)
    }

    pub fn pkgname_or_default(&self) -> &str {
        self.pkgname.as_deref().unwrap_or(DEFAULT_PKGNAME)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

/// Location of the user config file, if one exists under the XDG config dirs.
pub fn find_config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("xpi2pkgbuild")?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration.
///
/// An explicit path must exist. Without one, the XDG config file is read when
/// present and built-in defaults are used otherwise; nothing is written to disk.
pub fn load(explicit: Option<&Path>) -> Result<XpbConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match find_config_path()? {
            Some(p) => p,
            None => {
                tracing::debug!("no config file found, using defaults");
                return Ok(XpbConfig::default());
            }
        },
    };
    load_from(&path)
}

/// Parse a config file at `path`.
pub fn load_from(path: &Path) -> Result<XpbConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: XpbConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
