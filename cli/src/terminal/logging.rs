use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use tcptune_common::log::SUCCESS_TARGET;

const PRINT_TARGET: &str = "tcptune::print";

pub struct TcptuneFormatter;

impl<S, N> FormatEvent<S, N> for TcptuneFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // Pre-rendered terminal lines are written as they are.
        if meta.target() == PRINT_TARGET {
            let mut visitor = RawMessage(None);
            event.record(&mut visitor);
            return writeln!(writer, "{}", visitor.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::INFO if meta.target() == SUCCESS_TARGET => ("[✓]", |s| s.bright_green().bold()),
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
}

/// Installs the global subscriber. `RUST_LOG` wins over the quiet level; terminal
/// lines and success messages survive `-q`.
pub fn init_logging(quiet: u8) {
    let default_level: &str = if quiet > 0 {
        "warn,tcptune::print=info,tcptune::success=info"
    } else {
        "info"
    };
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(TcptuneFormatter)
        .init();
}
