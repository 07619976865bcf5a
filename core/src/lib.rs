//! # tcptune core
//!
//! Native access to the TCP keep-alive tunables of an already open socket,
//! plus live detection of which tunables the host OS recognises.
//!
//! * **[`sys`]**: the [`SocketApi`](sys::SocketApi) port every OS call goes through, and its libc (unix) and Winsock (Windows) adapters.
//! * **[`handle`]**: one-time option table resolution and socket handle extraction.
//! * **[`probe`]**: capability probing on a throwaway socket.
//! * **[`accessor`]**: get/set of one option with failure classification.
//! * **[`extended`]**: the [`ExtendedOptions`] facade tying the above together.

pub mod accessor;
pub mod extended;
pub mod handle;
pub mod probe;
pub mod sys;

pub use extended::{ExtendedOptions, KeepAliveSnapshot};
pub use handle::{AsSocketHandle, SocketHandle};
