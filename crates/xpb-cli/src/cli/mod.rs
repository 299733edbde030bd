//! CLI for xpi2pkgbuild.

mod generate;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use xpb_core::config;

pub use generate::Settings;

/// PKGBUILD generator for Firefox extensions.
#[derive(Debug, Parser)]
#[command(name = "xpi2pkgbuild", version)]
#[command(about = "PKGBUILD generator for Firefox extensions", long_about = None)]
pub struct Cli {
    /// Extension identifier (numeric id, slug, or GUID).
    pub id: String,

    /// File to output to (default: stdout).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name to use in pkgname; `{slug}` is replaced by the extension slug
    /// (default: firefox-extension-{slug}-xpi).
    #[arg(short = 'n', long, value_name = "TEMPLATE")]
    pub pkgname: Option<String>,

    /// Maintainer to add as comment.
    #[arg(short, long)]
    pub maintainer: Option<String>,

    /// API URL to use (default: https://addons.mozilla.org/api/v5/).
    #[arg(long, value_name = "URL")]
    pub api: Option<String>,

    /// Read configuration from this file instead of ~/.config/xpi2pkgbuild/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load(cli.config.as_deref())?;
        let settings = Settings::resolve(&cli, &cfg);
        tracing::debug!("resolved settings: {:?}", settings);
        generate::run_generate(&settings)
    }
}
