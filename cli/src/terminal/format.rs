use colored::*;
use tcptune_common::{SocketError, TcpOption};
use tcptune_core::KeepAliveSnapshot;
use tracing::warn;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn supported(flag: bool) -> ColoredString {
    if flag {
        "supported".color(colors::SUPPORTED).bold()
    } else {
        "unsupported".color(colors::UNSUPPORTED).bold()
    }
}

pub fn support_detail(option: TcpOption, flag: bool) -> Detail {
    (option.name().to_string(), supported(flag))
}

/// Renders a read option value; an unsupported option is a value too, any other failure is not.
pub fn value_detail(option: TcpOption, value: Result<i32, SocketError>) -> anyhow::Result<Detail> {
    let rendered: ColoredString = match value {
        Ok(v) => with_unit(option, v).color(colors::VALUE),
        Err(e) if e.is_unsupported() => {
            warn!(option = option.name(), "option not supported by this kernel");
            supported(false)
        }
        Err(e) => return Err(e.into()),
    };
    Ok((option.name().to_string(), rendered))
}

pub fn snapshot_details(snapshot: &KeepAliveSnapshot) -> Vec<Detail> {
    vec![
        (TcpOption::KeepAliveIdle.name().to_string(), with_unit(TcpOption::KeepAliveIdle, snapshot.idle).color(colors::VALUE)),
        (TcpOption::KeepAliveProbes.name().to_string(), with_unit(TcpOption::KeepAliveProbes, snapshot.probes).color(colors::VALUE)),
        (TcpOption::KeepAliveInterval.name().to_string(), with_unit(TcpOption::KeepAliveInterval, snapshot.interval).color(colors::VALUE)),
    ]
}

fn with_unit(option: TcpOption, value: i32) -> String {
    match option {
        TcpOption::KeepAliveProbes => format!("{value} probes"),
        TcpOption::KeepAliveIdle | TcpOption::KeepAliveInterval => format!("{value}s"),
    }
}
