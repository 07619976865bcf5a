//! # Keep-alive option model
//!
//! The three TCP keep-alive tunables and the raw `(level, name)` pair the OS
//! knows them by. Numeric values are platform specific and are resolved by the
//! core crate; this module only names things.

use std::fmt;
use std::str::FromStr;

/// A TCP keep-alive tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TcpOption {
    /// Number of unanswered probes before the connection is declared dead.
    KeepAliveProbes,
    /// Seconds of idle time before the first probe is sent.
    KeepAliveIdle,
    /// Seconds between two probes.
    KeepAliveInterval,
}

impl TcpOption {
    /// All tunables, in the order the composite support check probes them.
    pub const ALL: [TcpOption; 3] = [
        TcpOption::KeepAliveIdle,
        TcpOption::KeepAliveProbes,
        TcpOption::KeepAliveInterval,
    ];

    /// Name of the OS constant, used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TcpOption::KeepAliveProbes => "TCP_KEEPCNT",
            TcpOption::KeepAliveIdle => "TCP_KEEPIDLE",
            TcpOption::KeepAliveInterval => "TCP_KEEPINTVL",
        }
    }
}

impl fmt::Display for TcpOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TcpOption::KeepAliveProbes => write!(f, "keep-alive probes"),
            TcpOption::KeepAliveIdle => write!(f, "keep-alive idle time"),
            TcpOption::KeepAliveInterval => write!(f, "keep-alive interval"),
        }
    }
}

impl FromStr for TcpOption {
    type Err = String;

    /// Accepts short names ("probes", "idle", "interval") and the OS
    /// constant suffixes ("keepcnt", "keepidle", "keepintvl").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let lower = lower.strip_prefix("tcp_").unwrap_or(&lower);

        match lower {
            "probes" | "count" | "keepcnt" => Ok(TcpOption::KeepAliveProbes),
            "idle" | "time" | "keepidle" => Ok(TcpOption::KeepAliveIdle),
            "interval" | "intvl" | "keepintvl" => Ok(TcpOption::KeepAliveInterval),
            _ => Err(format!("unknown keep-alive option: {s}")),
        }
    }
}

/// A `(protocol level, option name)` pair as passed to `getsockopt`/`setsockopt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionDescriptor {
    pub level: i32,
    pub name: i32,
}

impl OptionDescriptor {
    pub const fn new(level: i32, name: i32) -> Self {
        Self { level, name }
    }
}
