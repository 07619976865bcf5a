//! # tcptune common
//!
//! Types shared by every crate in the workspace:
//!
//! * **[`option`]**: the keep-alive tunables and their `(level, name)` descriptors.
//! * **[`flow`]**: the flow SLA descriptor passed to the flow-control entry points.
//! * **[`error`]**: the two-kind socket error taxonomy.
//! * **[`config`]**: runtime configuration and user supplied keep-alive settings.
//! * **[`log`]**: thin `tracing` macros used for user-facing status lines.

pub mod config;
pub mod error;
pub mod flow;
pub mod log;
pub mod option;

pub use error::{Result, SocketError};
pub use option::{OptionDescriptor, TcpOption};
