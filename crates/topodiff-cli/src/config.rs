use std::fs;
use std::path::Path;

use anyhow::Context;
use topodiff_view::ViewConfig;
use tracing::debug;

use crate::cli::Cli;

/// View configuration from `--config`, with `--color` and `--indent`
/// applied on top.
pub fn load_view_config(cli: &Cli) -> anyhow::Result<ViewConfig> {
    let mut config = match &cli.config {
        Some(path) => read_view_config(path)?,
        None => ViewConfig::default(),
    };
    if let Some(color) = cli.color {
        config.color = color.into();
    }
    if let Some(indent) = cli.indent {
        config.indent_width = indent;
    }
    debug!(?config, "view config");
    Ok(config)
}

fn read_view_config(path: &Path) -> anyhow::Result<ViewConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}
