use std::io;
use std::mem;

use tcptune_common::OptionDescriptor;
use tracing::debug;
use windows_sys::Win32::Networking::WinSock::{
    AF_INET, AF_INET6, INVALID_SOCKET, IPPROTO_TCP, SOCK_STREAM, SOCKET, SOCKET_ERROR, WSACleanup,
    WSADATA, WSAGetLastError, WSAStartup, closesocket, getsockopt, setsockopt, socket,
};

use super::{AddressFamily, OsSocket, SocketApi};

/// Winsock 2.2, `MAKEWORD(2, 2)`.
const WINSOCK_VERSION: u16 = 0x0202;

fn last_error() -> io::Error {
    // SAFETY: FFI, reads thread-local state only
    io::Error::from_raw_os_error(unsafe { WSAGetLastError() })
}

/// [`SocketApi`] backed by Winsock.
///
/// Every `startup` is one `WSAStartup` reference and every `cleanup` releases
/// it again; Winsock counts them itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinsockSockets;

impl SocketApi for WinsockSockets {
    fn startup(&self) -> io::Result<()> {
        // SAFETY: all-zero is a valid WSADATA
        let mut data: WSADATA = unsafe { mem::zeroed() };

        // SAFETY: data outlives the call
        let rv = unsafe { WSAStartup(WINSOCK_VERSION, &mut data) };
        if rv != 0 {
            // WSAStartup returns its error code instead of setting the last error.
            return Err(io::Error::from_raw_os_error(rv));
        }
        Ok(())
    }

    fn cleanup(&self) {
        // SAFETY: FFI, balances a successful startup
        if unsafe { WSACleanup() } == SOCKET_ERROR {
            debug!(error = %last_error(), "WSACleanup failed");
        }
    }

    fn open_stream(&self, family: AddressFamily) -> io::Result<OsSocket> {
        let domain = match family {
            AddressFamily::Inet6 => AF_INET6,
            AddressFamily::Inet => AF_INET,
        };

        // SAFETY: FFI, no pointers passed
        let handle = unsafe { socket(domain as i32, SOCK_STREAM as i32, IPPROTO_TCP as i32) };
        if handle == INVALID_SOCKET {
            return Err(last_error());
        }
        Ok(handle as OsSocket)
    }

    fn close(&self, handle: OsSocket) {
        // SAFETY: FFI, caller owns the handle and never uses it again
        if unsafe { closesocket(handle as SOCKET) } == SOCKET_ERROR {
            debug!(handle, error = %last_error(), "closesocket failed");
        }
    }

    fn get_int(&self, handle: OsSocket, descriptor: OptionDescriptor) -> io::Result<i32> {
        let mut value: i32 = 0;
        let mut len = mem::size_of::<i32>() as i32;

        // SAFETY: value and len outlive the call and len matches the buffer size
        let rv = unsafe {
            getsockopt(
                handle as SOCKET,
                descriptor.level,
                descriptor.name,
                (&mut value as *mut i32).cast(),
                &mut len,
            )
        };
        if rv == SOCKET_ERROR {
            return Err(last_error());
        }
        Ok(value)
    }

    fn set_int(&self, handle: OsSocket, descriptor: OptionDescriptor, value: i32) -> io::Result<()> {
        // SAFETY: value outlives the call and the length matches its size
        let rv = unsafe {
            setsockopt(
                handle as SOCKET,
                descriptor.level,
                descriptor.name,
                (&value as *const i32).cast(),
                mem::size_of::<i32>() as i32,
            )
        };
        if rv == SOCKET_ERROR {
            return Err(last_error());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::errno;
    use crate::sys::platform::OptionTable;

    #[test]
    fn unknown_option_reports_no_protocol_option() {
        let api = WinsockSockets;
        api.startup().unwrap();

        let handle = AddressFamily::PREFERENCE
            .iter()
            .find_map(|family| api.open_stream(*family).ok())
            .unwrap();
        let bogus = OptionDescriptor::new(IPPROTO_TCP as i32, 0x7fff);
        let err = api.get_int(handle, bogus).unwrap_err();
        api.close(handle);
        api.cleanup();

        assert!(errno::is_option_not_recognized(&err), "unexpected error: {err:?}");
    }

    #[test]
    fn keep_alive_round_trip_on_real_socket() {
        let api = WinsockSockets;
        api.startup().unwrap();

        let handle = api.open_stream(AddressFamily::Inet).unwrap();
        let idle = OptionTable::native().idle;
        api.set_int(handle, idle, 42).unwrap();
        let value = api.get_int(handle, idle).unwrap();
        api.close(handle);
        api.cleanup();

        assert_eq!(value, 42);
    }

    #[test]
    fn invalid_handle_reports_not_a_socket() {
        let api = WinsockSockets;
        api.startup().unwrap();
        let err = api.get_int(INVALID_SOCKET as OsSocket, OptionTable::native().probes).unwrap_err();
        api.cleanup();

        assert_eq!(err.raw_os_error(), Some(errno::other::NOT_SOCKET));
    }
}
