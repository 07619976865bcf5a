//! Helpers shared by the real-socket integration tests.

use std::net::{TcpListener, TcpStream};

/// A connected loopback pair: `(client, server side of the accepted connection)`.
pub fn loopback_pair() -> anyhow::Result<(TcpStream, TcpStream)> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let client = TcpStream::connect(listener.local_addr()?)?;
    let (server, _) = listener.accept()?;
    Ok((client, server))
}

/// Number of descriptors currently open in this process.
#[cfg(target_os = "linux")]
pub fn open_fd_count() -> anyhow::Result<usize> {
    Ok(std::fs::read_dir("/proc/self/fd")?.count())
}
