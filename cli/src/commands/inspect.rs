use tcptune_common::{TcpOption, config::Config, success};
use tcptune_core::ExtendedOptions;
use tracing::debug;

use crate::commands::connect;
use crate::terminal::{format, print};

/// Reads the keep-alive values of a fresh connection to `addr`; `only` narrows the
/// output to the given options, empty means all of them.
pub async fn inspect(addr: &str, only: &[TcpOption], cfg: &Config) -> anyhow::Result<()> {
    let options = ExtendedOptions::system();
    options.initialize();

    let stream = connect(addr, cfg.connect_timeout).await?;
    debug!(peer = %stream.peer_addr()?, "connected");

    // Each value is read on its own so one unsupported option does not hide the others.
    let selected: &[TcpOption] = if only.is_empty() { &TcpOption::ALL } else { only };
    let details: Vec<format::Detail> = selected
        .iter()
        .map(|option| format::value_detail(*option, options.get(&stream, *option)))
        .collect::<anyhow::Result<_>>()?;

    if cfg.quiet < 2 {
        print::tree_head(0, addr);
        print::as_tree_one_level(details);
    }
    success!("Read keep-alive values of {addr}");
    Ok(())
}
