//! # Handle resolution
//!
//! The accessors work on raw OS socket handles (a file descriptor on unix, a
//! `SOCKET` on Windows). Getting that integer out of
//! whatever owns the socket is the caller's job, expressed by
//! [`AsSocketHandle`].
//!
//! Before any accessor runs, the platform option table has to be resolved.
//! That happens once per process; [`initialize`] may be called any number of
//! times from any thread and only the first call does the work.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::sys::OsSocket;
use crate::sys::platform::OptionTable;

static OPTION_TABLE: OnceLock<OptionTable> = OnceLock::new();
static RESOLUTIONS: AtomicUsize = AtomicUsize::new(0);

/// Resolves the option table if it has not been resolved yet.
pub fn initialize() {
    option_table();
}

/// The resolved option table, resolving it on first use.
pub fn option_table() -> &'static OptionTable {
    OPTION_TABLE.get_or_init(|| {
        RESOLUTIONS.fetch_add(1, Ordering::SeqCst);
        let table = OptionTable::native();
        debug!(?table, "resolved keep-alive option table");
        table
    })
}

/// How many times the option table was actually resolved. Never more than one.
pub fn resolution_count() -> usize {
    RESOLUTIONS.load(Ordering::SeqCst)
}

/// Anything that can hand out the raw OS handle of an open socket.
pub trait AsSocketHandle {
    fn socket_handle(&self) -> OsSocket;
}

#[cfg(unix)]
impl<T: std::os::fd::AsRawFd + ?Sized> AsSocketHandle for T {
    fn socket_handle(&self) -> OsSocket {
        self.as_raw_fd()
    }
}

#[cfg(windows)]
impl<T: std::os::windows::io::AsRawSocket + ?Sized> AsSocketHandle for T {
    fn socket_handle(&self) -> OsSocket {
        self.as_raw_socket()
    }
}

/// A bare handle for callers that only hold the integer.
///
/// The handle is borrowed, never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocketHandle(pub OsSocket);

#[cfg(unix)]
impl std::os::fd::AsRawFd for SocketHandle {
    fn as_raw_fd(&self) -> OsSocket {
        self.0
    }
}

#[cfg(windows)]
impl std::os::windows::io::AsRawSocket for SocketHandle {
    fn as_raw_socket(&self) -> OsSocket {
        self.0
    }
}
