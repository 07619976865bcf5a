//! # Capability probing
//!
//! Answers "does this OS know option X" by opening a throwaway TCP socket and
//! asking for the option. Only a "protocol option not recognized" failure
//! means no; every other outcome, including unrelated errors, means yes.
//!
//! The probe never reports errors. Anything that prevents it from asking at
//! all (subsystem startup, socket creation) collapses to "not supported".

use tcptune_common::{OptionDescriptor, TcpOption};
use tracing::debug;

use crate::handle;
use crate::sys::{AddressFamily, OsSocket, SocketApi, errno};

/// One `startup` reference on the networking subsystem, released on drop.
struct NetworkSession<'a, A: SocketApi> {
    api: &'a A,
}

impl<'a, A: SocketApi> NetworkSession<'a, A> {
    fn start(api: &'a A) -> Option<Self> {
        match api.startup() {
            Ok(()) => Some(Self { api }),
            Err(e) => {
                debug!(error = %e, "networking subsystem startup failed");
                None
            }
        }
    }
}

impl<A: SocketApi> Drop for NetworkSession<'_, A> {
    fn drop(&mut self) {
        self.api.cleanup();
    }
}

/// Socket owned by a single probe, closed on drop.
struct ProbeSocket<'a, A: SocketApi> {
    api: &'a A,
    handle: OsSocket,
}

impl<'a, A: SocketApi> ProbeSocket<'a, A> {
    /// Tries each family in preference order, moving on only when the family itself is unsupported.
    fn open(api: &'a A) -> Option<Self> {
        for family in AddressFamily::PREFERENCE {
            match api.open_stream(family) {
                Ok(handle) => return Some(Self { api, handle }),
                Err(e) if errno::is_family_unsupported(&e) => {
                    debug!(?family, "address family unsupported, falling back");
                }
                Err(e) => {
                    debug!(?family, error = %e, "probe socket creation failed");
                    return None;
                }
            }
        }
        None
    }
}

impl<A: SocketApi> Drop for ProbeSocket<'_, A> {
    fn drop(&mut self) {
        self.api.close(self.handle);
    }
}

pub struct Prober<'a, A: SocketApi> {
    api: &'a A,
}

impl<'a, A: SocketApi> Prober<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// `true` unless the OS rejects the option as unknown at its protocol level.
    pub fn is_option_supported(&self, descriptor: OptionDescriptor) -> bool {
        let Some(_session) = NetworkSession::start(self.api) else {
            return false;
        };
        let Some(socket) = ProbeSocket::open(self.api) else {
            return false;
        };

        match self.api.get_int(socket.handle, descriptor) {
            Err(e) if errno::is_option_not_recognized(&e) => {
                debug!(?descriptor, "option not recognized");
                false
            }
            _ => true,
        }
    }

    /// Support for one keep-alive tunable.
    pub fn is_supported(&self, option: TcpOption) -> bool {
        self.is_option_supported(handle::option_table().descriptor(option))
    }

    /// All keep-alive tunables must be recognised for tuning to be usable.
    pub fn keep_alive_supported(&self) -> bool {
        TcpOption::ALL.iter().all(|option| self.is_supported(*option))
    }
}
