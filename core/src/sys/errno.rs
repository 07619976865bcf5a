//! OS error codes the probe and the accessor care about.

use std::io;

#[cfg(unix)]
mod codes {
    pub const OPTION_NOT_RECOGNIZED: i32 = libc::ENOPROTOOPT;
    pub const FAMILY_UNSUPPORTED: [i32; 2] = [libc::EAFNOSUPPORT, libc::EPFNOSUPPORT];
}

#[cfg(windows)]
mod codes {
    use windows_sys::Win32::Networking::WinSock::{WSAEAFNOSUPPORT, WSAENOPROTOOPT, WSAEPFNOSUPPORT};

    pub const OPTION_NOT_RECOGNIZED: i32 = WSAENOPROTOOPT as i32;
    pub const FAMILY_UNSUPPORTED: [i32; 2] = [WSAEAFNOSUPPORT as i32, WSAEPFNOSUPPORT as i32];
}

/// The option is not known at this protocol level.
pub const OPTION_NOT_RECOGNIZED: i32 = codes::OPTION_NOT_RECOGNIZED;

/// Address or protocol family codes that make a probe fall back to the next family.
pub const FAMILY_UNSUPPORTED: [i32; 2] = codes::FAMILY_UNSUPPORTED;

pub fn is_option_not_recognized(err: &io::Error) -> bool {
    err.raw_os_error() == Some(OPTION_NOT_RECOGNIZED)
}

pub fn is_family_unsupported(err: &io::Error) -> bool {
    err.raw_os_error()
        .is_some_and(|code| FAMILY_UNSUPPORTED.contains(&code))
}
