//! Numeric keep-alive option identifiers for the compile target.

use tcptune_common::{OptionDescriptor, TcpOption};

#[cfg(unix)]
mod native {
    pub const LEVEL: i32 = libc::IPPROTO_TCP;
    pub const PROBES: i32 = libc::TCP_KEEPCNT;
    pub const INTERVAL: i32 = libc::TCP_KEEPINTVL;

    #[cfg(any(target_os = "linux", target_os = "android"))]
    pub const IDLE: i32 = libc::TCP_KEEPIDLE;

    // Apple names the idle time TCP_KEEPALIVE.
    #[cfg(any(target_os = "macos", target_os = "ios"))]
    pub const IDLE: i32 = libc::TCP_KEEPALIVE;

    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    )))]
    pub const IDLE: i32 = libc::TCP_KEEPIDLE;
}

#[cfg(windows)]
mod native {
    use windows_sys::Win32::Networking::WinSock as ws;

    pub const LEVEL: i32 = ws::IPPROTO_TCP as i32;
    pub const PROBES: i32 = ws::TCP_KEEPCNT as i32;
    pub const IDLE: i32 = ws::TCP_KEEPIDLE as i32;
    pub const INTERVAL: i32 = ws::TCP_KEEPINTVL as i32;
}

/// `(level, name)` of every keep-alive tunable on this platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionTable {
    pub probes: OptionDescriptor,
    pub idle: OptionDescriptor,
    pub interval: OptionDescriptor,
}

impl OptionTable {
    pub fn native() -> Self {
        Self {
            probes: OptionDescriptor::new(native::LEVEL, native::PROBES),
            idle: OptionDescriptor::new(native::LEVEL, native::IDLE),
            interval: OptionDescriptor::new(native::LEVEL, native::INTERVAL),
        }
    }

    pub fn descriptor(&self, option: TcpOption) -> OptionDescriptor {
        match option {
            TcpOption::KeepAliveProbes => self.probes,
            TcpOption::KeepAliveIdle => self.idle,
            TcpOption::KeepAliveInterval => self.interval,
        }
    }
}
