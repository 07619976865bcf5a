//! Flow SLA descriptor.
//!
//! Describes a per-socket traffic shaping request. No supported platform
//! implements flow control, so this is only ever carried to the flow entry
//! points and handed back untouched.

/// Priority of a flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowPriority {
    #[default]
    Normal,
    High,
}

/// Outcome of the last flow operation as the OS would report it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowStatus {
    #[default]
    NoStatus,
    Ok,
    NoPermission,
    NotConnected,
    NotSupported,
    AlreadyCreated,
    InProgress,
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocketFlow {
    pub priority: FlowPriority,
    /// Bandwidth cap in bytes per second, `None` for uncapped.
    pub bandwidth: Option<u64>,
    pub status: FlowStatus,
}

impl SocketFlow {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_priority(mut self, priority: FlowPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_bandwidth(mut self, bytes_per_sec: u64) -> Self {
        self.bandwidth = Some(bytes_per_sec);
        self
    }
}
