use std::io;
use std::mem;

use tcptune_common::OptionDescriptor;
use tracing::debug;

use super::{AddressFamily, OsSocket, SocketApi};

#[cfg(any(target_os = "linux", target_os = "android"))]
const STREAM_FLAGS: libc::c_int = libc::SOCK_STREAM | libc::SOCK_CLOEXEC;
#[cfg(not(any(target_os = "linux", target_os = "android")))]
const STREAM_FLAGS: libc::c_int = libc::SOCK_STREAM;

/// [`SocketApi`] backed by the libc socket calls.
///
/// POSIX needs no networking subsystem setup, so `startup`/`cleanup` keep
/// their no-op defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibcSockets;

impl SocketApi for LibcSockets {
    fn open_stream(&self, family: AddressFamily) -> io::Result<OsSocket> {
        let domain = match family {
            AddressFamily::Inet6 => libc::AF_INET6,
            AddressFamily::Inet => libc::AF_INET,
        };

        // SAFETY: FFI, no pointers passed
        let fd = unsafe { libc::socket(domain, STREAM_FLAGS, libc::IPPROTO_TCP) };
        if fd == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(fd)
    }

    fn close(&self, handle: OsSocket) {
        // SAFETY: FFI, caller owns the handle and never uses it again
        if unsafe { libc::close(handle) } == -1 {
            debug!(handle, error = %io::Error::last_os_error(), "close failed");
        }
    }

    fn get_int(&self, handle: OsSocket, descriptor: OptionDescriptor) -> io::Result<i32> {
        let mut value: libc::c_int = 0;
        let mut len = mem::size_of::<libc::c_int>() as libc::socklen_t;

        // SAFETY: value and len outlive the call and len matches the buffer size
        let rv = unsafe {
            libc::getsockopt(
                handle,
                descriptor.level,
                descriptor.name,
                (&mut value as *mut libc::c_int).cast(),
                &mut len,
            )
        };
        if rv == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(value)
    }

    fn set_int(&self, handle: OsSocket, descriptor: OptionDescriptor, value: i32) -> io::Result<()> {
        let value: libc::c_int = value;

        // SAFETY: value outlives the call and the length matches its size
        let rv = unsafe {
            libc::setsockopt(
                handle,
                descriptor.level,
                descriptor.name,
                (&value as *const libc::c_int).cast(),
                mem::size_of::<libc::c_int>() as libc::socklen_t,
            )
        };
        if rv == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}
