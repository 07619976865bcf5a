//! # Extended socket options
//!
//! Entry point for callers that own a socket and want to read or tune its
//! keep-alive behaviour, or ask whether the host supports doing so.
//!
//! ```no_run
//! use std::net::TcpStream;
//! use tcptune_core::ExtendedOptions;
//!
//! let options = ExtendedOptions::system();
//! options.initialize();
//!
//! let stream = TcpStream::connect("127.0.0.1:8080")?;
//! if options.is_keep_alive_tuning_supported() {
//!     options.set_keep_alive_idle_time(&stream, 30)?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use tcptune_common::config::KeepAliveSettings;
use tcptune_common::flow::SocketFlow;
use tcptune_common::{Result, SocketError, TcpOption};

use crate::accessor::OptionAccessor;
use crate::handle::{self, AsSocketHandle};
use crate::probe::Prober;
use crate::sys::{SocketApi, SystemSockets};

/// Current keep-alive values of one socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeepAliveSnapshot {
    pub probes: i32,
    pub idle: i32,
    pub interval: i32,
}

pub struct ExtendedOptions<A: SocketApi = SystemSockets> {
    api: A,
}

impl ExtendedOptions<SystemSockets> {
    /// Options backed by the real OS calls.
    pub fn system() -> Self {
        Self::with_api(SystemSockets::default())
    }
}

impl<A: SocketApi> ExtendedOptions<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// One-time process wide setup. Safe to call repeatedly and concurrently.
    pub fn initialize(&self) {
        handle::initialize();
    }

    /// Live-probes all three keep-alive tunables.
    pub fn is_keep_alive_tuning_supported(&self) -> bool {
        Prober::new(&self.api).keep_alive_supported()
    }

    /// Live-probes a single keep-alive tunable.
    pub fn is_option_supported(&self, option: TcpOption) -> bool {
        Prober::new(&self.api).is_supported(option)
    }

    /// Flow control is never available here; nothing is probed.
    pub fn is_flow_control_supported(&self) -> bool {
        false
    }

    pub fn set_keep_alive_probe_count<S>(&self, socket: &S, count: i32) -> Result<()>
    where
        S: AsSocketHandle + ?Sized,
    {
        self.set(socket, TcpOption::KeepAliveProbes, count)
    }

    pub fn set_keep_alive_idle_time<S>(&self, socket: &S, seconds: i32) -> Result<()>
    where
        S: AsSocketHandle + ?Sized,
    {
        self.set(socket, TcpOption::KeepAliveIdle, seconds)
    }

    pub fn set_keep_alive_interval<S>(&self, socket: &S, seconds: i32) -> Result<()>
    where
        S: AsSocketHandle + ?Sized,
    {
        self.set(socket, TcpOption::KeepAliveInterval, seconds)
    }

    pub fn get_keep_alive_probe_count<S>(&self, socket: &S) -> Result<i32>
    where
        S: AsSocketHandle + ?Sized,
    {
        self.get(socket, TcpOption::KeepAliveProbes)
    }

    pub fn get_keep_alive_idle_time<S>(&self, socket: &S) -> Result<i32>
    where
        S: AsSocketHandle + ?Sized,
    {
        self.get(socket, TcpOption::KeepAliveIdle)
    }

    pub fn get_keep_alive_interval<S>(&self, socket: &S) -> Result<i32>
    where
        S: AsSocketHandle + ?Sized,
    {
        self.get(socket, TcpOption::KeepAliveInterval)
    }

    pub fn set<S>(&self, socket: &S, option: TcpOption, value: i32) -> Result<()>
    where
        S: AsSocketHandle + ?Sized,
    {
        OptionAccessor::new(&self.api).set(socket.socket_handle(), option, value)
    }

    pub fn get<S>(&self, socket: &S, option: TcpOption) -> Result<i32>
    where
        S: AsSocketHandle + ?Sized,
    {
        OptionAccessor::new(&self.api).get(socket.socket_handle(), option)
    }

    /// Applies every given setting in the order idle, interval, probes.
    /// Stops at the first failure; settings applied before it stay applied.
    pub fn apply<S>(&self, socket: &S, settings: &KeepAliveSettings) -> Result<()>
    where
        S: AsSocketHandle + ?Sized,
    {
        let ordered = [
            (TcpOption::KeepAliveIdle, settings.idle),
            (TcpOption::KeepAliveInterval, settings.interval),
            (TcpOption::KeepAliveProbes, settings.probes),
        ];

        for (option, value) in ordered {
            if let Some(value) = value {
                self.set(socket, option, value)?;
            }
        }
        Ok(())
    }

    pub fn snapshot<S>(&self, socket: &S) -> Result<KeepAliveSnapshot>
    where
        S: AsSocketHandle + ?Sized,
    {
        Ok(KeepAliveSnapshot {
            probes: self.get_keep_alive_probe_count(socket)?,
            idle: self.get_keep_alive_idle_time(socket)?,
            interval: self.get_keep_alive_interval(socket)?,
        })
    }

    /// Always fails with [`SocketError::Unsupported`] without touching the socket.
    pub fn set_flow_option<S>(&self, _socket: &S, _flow: &SocketFlow) -> Result<()>
    where
        S: AsSocketHandle + ?Sized,
    {
        Err(SocketError::unsupported("set flow option"))
    }

    /// Always fails with [`SocketError::Unsupported`] and leaves `flow` untouched.
    pub fn get_flow_option<S>(&self, _socket: &S, _flow: &mut SocketFlow) -> Result<()>
    where
        S: AsSocketHandle + ?Sized,
    {
        Err(SocketError::unsupported("get flow option"))
    }
}
