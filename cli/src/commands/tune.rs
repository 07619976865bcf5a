use anyhow::Context;
use tcptune_common::config::{Config, KeepAliveSettings};
use tcptune_common::success;
use tcptune_core::{ExtendedOptions, KeepAliveSnapshot};
use tracing::debug;

use crate::commands::connect;
use crate::terminal::{format, print};

pub async fn tune(addr: &str, settings: KeepAliveSettings, cfg: &Config) -> anyhow::Result<()> {
    settings.validate()?;

    let options = ExtendedOptions::system();
    options.initialize();

    let stream = connect(addr, cfg.connect_timeout).await?;
    debug!(peer = %stream.peer_addr()?, ?settings, "applying keep-alive settings");

    options
        .apply(&stream, &settings)
        .with_context(|| format!("failed to tune {addr}"))?;

    let snapshot: KeepAliveSnapshot = options
        .snapshot(&stream)
        .with_context(|| format!("failed to read back {addr}"))?;

    if cfg.quiet < 2 {
        print::tree_head(0, addr);
        print::as_tree_one_level(format::snapshot_details(&snapshot));
    }
    success!("Applied keep-alive settings to {addr}");
    Ok(())
}
