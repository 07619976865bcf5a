pub mod inspect;
pub mod support;
pub mod tune;

use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tcptune_common::config::KeepAliveSettings;
use tcptune_common::TcpOption;
use tokio::net::TcpStream;
use tokio::time::timeout;

#[derive(Parser)]
#[command(name = "tcptune")]
#[command(about = "Inspect and tune TCP keep-alive behaviour.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output, repeat for less
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Connect timeout in milliseconds
    #[arg(long = "timeout", global = true)]
    pub timeout_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report which keep-alive tunables this host supports
    #[command(alias = "s")]
    Support,
    /// Connect to an address and show its keep-alive values
    #[command(alias = "i")]
    Inspect {
        addr: String,
        /// Only show this option (probes, idle, interval), repeatable
        #[arg(short, long = "option")]
        options: Vec<TcpOption>,
    },
    /// Connect to an address, apply keep-alive values and show the result
    #[command(alias = "t")]
    Tune {
        addr: String,
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Unanswered probes before the connection is dropped
    #[arg(long)]
    pub probes: Option<i32>,
    /// Idle seconds before the first probe
    #[arg(long)]
    pub idle: Option<i32>,
    /// Seconds between probes
    #[arg(long)]
    pub interval: Option<i32>,
}

impl From<SettingsArgs> for KeepAliveSettings {
    fn from(args: SettingsArgs) -> Self {
        KeepAliveSettings {
            probes: args.probes,
            idle: args.idle,
            interval: args.interval,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The `--timeout` override, if one was given.
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

/// Opens the connection whose socket gets inspected or tuned.
pub async fn connect(addr: &str, limit: Duration) -> anyhow::Result<TcpStream> {
    let stream = timeout(limit, TcpStream::connect(addr))
        .await
        .with_context(|| format!("timed out connecting to {addr}"))?
        .with_context(|| format!("failed to connect to {addr}"))?;
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tune_flags_map_to_settings() {
        let cli = CommandLine::parse_from(["tcptune", "tune", "127.0.0.1:80", "--idle", "30", "--probes", "4"]);
        match cli.command {
            Commands::Tune { addr, settings } => {
                assert_eq!(addr, "127.0.0.1:80");
                let settings: KeepAliveSettings = settings.into();
                assert_eq!(settings.idle, Some(30));
                assert_eq!(settings.probes, Some(4));
                assert_eq!(settings.interval, None);
            }
            _ => panic!("expected tune"),
        }
    }

    #[test]
    fn quiet_counts_and_timeout_defaults() {
        let cli = CommandLine::parse_from(["tcptune", "-qq", "s"]);
        assert_eq!(cli.quiet, 2);
        assert_eq!(cli.connect_timeout(), None);

        let cli = CommandLine::parse_from(["tcptune", "i", "localhost:22", "--timeout", "250"]);
        assert_eq!(cli.connect_timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn inspect_option_filter_accepts_aliases() {
        let cli = CommandLine::parse_from(["tcptune", "inspect", "localhost:22", "-o", "idle", "--option", "TCP_KEEPCNT"]);
        match cli.command {
            Commands::Inspect { options, .. } => {
                assert_eq!(options, vec![TcpOption::KeepAliveIdle, TcpOption::KeepAliveProbes]);
            }
            _ => panic!("expected inspect"),
        }

        let cli = CommandLine::parse_from(["tcptune", "i", "localhost:22"]);
        assert!(matches!(cli.command, Commands::Inspect { options, .. } if options.is_empty()));

        assert!(CommandLine::try_parse_from(["tcptune", "i", "localhost:22", "-o", "window"]).is_err());
    }

    #[tokio::test]
    async fn connect_reaches_local_listener() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let stream = connect(&addr, Duration::from_secs(2)).await.unwrap();
        assert_eq!(stream.peer_addr().unwrap().to_string(), addr);
    }
}
