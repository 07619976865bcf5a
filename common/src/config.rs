use std::time::Duration;

use thiserror::Error;

use crate::option::TcpOption;

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(1500);

pub struct Config {
    /// Output verbosity reduction, 0 prints everything.
    pub quiet: u8,
    /// Upper bound for establishing the TCP connection that gets inspected or tuned.
    pub connect_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{option} must be a positive value, got {value}")]
    NotPositive { option: TcpOption, value: i32 },
    #[error("no keep-alive setting given")]
    Empty,
}

/// Keep-alive values requested by the user. `None` leaves the OS value alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepAliveSettings {
    pub probes: Option<i32>,
    /// Seconds.
    pub idle: Option<i32>,
    /// Seconds.
    pub interval: Option<i32>,
}

impl KeepAliveSettings {
    pub fn is_empty(&self) -> bool {
        self.probes.is_none() && self.idle.is_none() && self.interval.is_none()
    }

    /// Rejects empty settings and non-positive values before anything reaches the OS.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.is_empty() {
            return Err(SettingsError::Empty);
        }

        let checks = [
            (TcpOption::KeepAliveProbes, self.probes),
            (TcpOption::KeepAliveIdle, self.idle),
            (TcpOption::KeepAliveInterval, self.interval),
        ];

        for (option, value) in checks {
            if let Some(value) = value {
                if value <= 0 {
                    return Err(SettingsError::NotPositive { option, value });
                }
            }
        }

        Ok(())
    }
}
