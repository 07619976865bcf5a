//! The central **abstraction** over the OS socket calls.
//!
//! Probing and option access never call the OS directly; they go through
//! [`SocketApi`]. The real adapter is [`SystemSockets`]: libc on unix, Winsock
//! on Windows. Tests swap in a scripted stub to produce any error code on demand.

use std::io;

use tcptune_common::OptionDescriptor;

pub mod errno;
#[cfg(unix)]
mod libc_api;
pub mod platform;
#[cfg(test)]
pub(crate) mod stub;
#[cfg(windows)]
mod winsock_api;

#[cfg(unix)]
pub use libc_api::LibcSockets;
#[cfg(windows)]
pub use winsock_api::WinsockSockets;

/// Raw OS socket handle.
#[cfg(unix)]
pub type OsSocket = std::os::fd::RawFd;
#[cfg(windows)]
pub type OsSocket = std::os::windows::io::RawSocket;

/// The adapter for the compile target.
#[cfg(unix)]
pub type SystemSockets = LibcSockets;
#[cfg(windows)]
pub type SystemSockets = WinsockSockets;

/// Address family of a probe socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    Inet6,
    Inet,
}

impl AddressFamily {
    /// Families a probe socket is opened with, most preferred first.
    pub const PREFERENCE: [AddressFamily; 2] = [AddressFamily::Inet6, AddressFamily::Inet];
}

/// Raw socket operations the rest of the crate depends on.
///
/// Every failure is an [`io::Error`] built from the OS error code so the
/// classification in [`errno`] works the same for real and stubbed calls.
pub trait SocketApi {
    /// Brings up the platform networking subsystem. Must be idempotent and
    /// balanced by [`SocketApi::cleanup`].
    fn startup(&self) -> io::Result<()> {
        Ok(())
    }

    /// Releases one [`SocketApi::startup`] reference.
    fn cleanup(&self) {}

    /// Opens a TCP stream socket of the given family.
    fn open_stream(&self, family: AddressFamily) -> io::Result<OsSocket>;

    /// Closes a socket previously returned by [`SocketApi::open_stream`].
    fn close(&self, handle: OsSocket);

    /// `getsockopt` with a 4-byte integer buffer.
    fn get_int(&self, handle: OsSocket, descriptor: OptionDescriptor) -> io::Result<i32>;

    /// `setsockopt` with a 4-byte integer buffer.
    fn set_int(&self, handle: OsSocket, descriptor: OptionDescriptor, value: i32) -> io::Result<()>;
}

impl<T: SocketApi + ?Sized> SocketApi for &T {
    fn startup(&self) -> io::Result<()> {
        (**self).startup()
    }

    fn cleanup(&self) {
        (**self).cleanup()
    }

    fn open_stream(&self, family: AddressFamily) -> io::Result<OsSocket> {
        (**self).open_stream(family)
    }

    fn close(&self, handle: OsSocket) {
        (**self).close(handle)
    }

    fn get_int(&self, handle: OsSocket, descriptor: OptionDescriptor) -> io::Result<i32> {
        (**self).get_int(handle, descriptor)
    }

    fn set_int(&self, handle: OsSocket, descriptor: OptionDescriptor, value: i32) -> io::Result<()> {
        (**self).set_int(handle, descriptor, value)
    }
}
