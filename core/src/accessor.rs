//! Direct get/set of a single keep-alive option on an open socket.

use std::io;

use tcptune_common::{Result, SocketError, TcpOption};
use tracing::debug;

use crate::handle;
use crate::sys::{OsSocket, SocketApi, errno};

/// Maps a failed get/set of `action` (e.g. `get option TCP_KEEPCNT`) into the error taxonomy.
///
/// A capability gap keeps the bare action; any other failure reads `<action> failed`.
pub fn classify(err: io::Error, action: String) -> SocketError {
    if errno::is_option_not_recognized(&err) {
        SocketError::unsupported(action)
    } else {
        SocketError::failed(format!("{action} failed"), err)
    }
}

pub struct OptionAccessor<'a, A: SocketApi> {
    api: &'a A,
}

impl<'a, A: SocketApi> OptionAccessor<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub fn get(&self, handle: OsSocket, option: TcpOption) -> Result<i32> {
        let descriptor = handle::option_table().descriptor(option);
        let value = self
            .api
            .get_int(handle, descriptor)
            .map_err(|e| classify(e, format!("get option {}", option.name())))?;

        debug!(handle, option = option.name(), value, "got option");
        Ok(value)
    }

    pub fn set(&self, handle: OsSocket, option: TcpOption, value: i32) -> Result<()> {
        let descriptor = handle::option_table().descriptor(option);
        self.api
            .set_int(handle, descriptor, value)
            .map_err(|e| classify(e, format!("set option {}", option.name())))?;

        debug!(handle, option = option.name(), value, "set option");
        Ok(())
    }
}
