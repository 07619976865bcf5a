use tcptune_common::{TcpOption, config::Config, info, success, warn};
use tcptune_core::ExtendedOptions;

use crate::mprint;
use crate::terminal::{format, print};

pub fn support(cfg: &Config) -> anyhow::Result<()> {
    let options = ExtendedOptions::system();
    options.initialize();
    info!("Opening throwaway sockets to probe {} options", TcpOption::ALL.len());

    let details: Vec<format::Detail> = TcpOption::ALL
        .iter()
        .map(|option| format::support_detail(*option, options.is_option_supported(*option)))
        .collect();

    let keep_alive: bool = options.is_keep_alive_tuning_supported();
    let flow: bool = options.is_flow_control_supported();

    if cfg.quiet < 2 {
        print::tree_head(0, "keep-alive tuning");
        print::as_tree_one_level(details);
        mprint!();
        print::aligned_line("Flow control", format::supported(flow));
    }

    if keep_alive {
        success!("Keep-alive tuning is available on this host");
    } else {
        warn!("Keep-alive tuning is not fully supported on this host");
    }
    Ok(())
}
