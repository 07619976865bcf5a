mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, inspect, support, tune};
use tcptune_common::config::Config;
use tcptune_common::error;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let mut cfg = Config {
        quiet: commands.quiet,
        ..Default::default()
    };
    if let Some(limit) = commands.connect_timeout() {
        cfg.connect_timeout = limit;
    }

    print::banner(cfg.quiet);

    match run(commands.command, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, cfg: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Support => {
            print::header("probing host support", cfg.quiet);
            support::support(cfg)
        }
        Commands::Inspect { addr, options } => {
            print::header("inspecting connection", cfg.quiet);
            inspect::inspect(&addr, &options, cfg).await
        }
        Commands::Tune { addr, settings } => {
            print::header("tuning connection", cfg.quiet);
            tune::tune(&addr, settings.into(), cfg).await
        }
    }
}
