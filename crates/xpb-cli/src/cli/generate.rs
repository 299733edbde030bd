//! The one command: fetch addon metadata, render, write.

use anyhow::Result;
use std::path::PathBuf;
use xpb_core::config::XpbConfig;
use xpb_core::fetch::{self, FetchOptions};
use xpb_core::output;
use xpb_core::pkgbuild::{self, RenderOptions};

use super::Cli;

/// Flags merged over the config file over built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub id: String,
    pub api: String,
    pub output: Option<PathBuf>,
    pub render: RenderOptions,
    pub fetch: FetchOptions,
}

impl Settings {
    pub fn resolve(cli: &Cli, cfg: &XpbConfig) -> Self {
        Settings {
            id: cli.id.clone(),
            api: cli
                .api
                .clone()
                .unwrap_or_else(|| cfg.api_or_default().to_string()),
            output: cli.output.clone(),
            render: RenderOptions {
                pkgname_template: cli
                    .pkgname
                    .clone()
                    .unwrap_or_else(|| cfg.pkgname_or_default().to_string()),
                maintainer: cli.maintainer.clone().or_else(|| cfg.maintainer.clone()),
            },
            fetch: FetchOptions {
                connect_timeout: cfg.connect_timeout(),
            },
        }
    }
}

/// Fetches the addon, renders the PKGBUILD in memory, then writes it in one go.
pub fn run_generate(settings: &Settings) -> Result<()> {
    let record = fetch::fetch_addon(&settings.api, &settings.id, settings.fetch)?;
    tracing::info!(
        "rendering PKGBUILD for {} {}",
        record.slug,
        record.current_version.version
    );
    let text = pkgbuild::render(&record, &settings.render)?;

    match &settings.output {
        Some(path) => output::write_output(path, &text)?,
        None => output::write_stdout(&text)?,
    }
    Ok(())
}
