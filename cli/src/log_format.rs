//! Event formatter for `LOG_FILE` output.
//!
//! `main` runs every subcommand inside a `command` span carrying `name` and `run_id`.
//! Lines emitted under it are tagged with that span's fields, so the lines of one
//! invocation can be picked out of an appended log file with a single grep on `run_id`.

use std::fmt;

use tracing_core::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormattedFields};
use tracing_subscriber::registry::LookupSpan;

/// `TIMESTAMP LEVEL [command name="parse" run_id=…] target: fields`.
///
/// The bracket holds the outermost span of the event (normally `command`); events emitted
/// outside any span, such as config warnings before dispatch, have no bracket.
#[derive(Default)]
pub struct CommandLineFormat {
    timer: SystemTime,
}

impl CommandLineFormat {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, N> FormatEvent<S, N> for CommandLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        self.timer.format_time(&mut writer)?;
        write!(writer, " {}", event.metadata().level())?;

        if let Some(command) = ctx.event_scope().and_then(|scope| scope.from_root().next()) {
            let extensions = command.extensions();
            match extensions.get::<FormattedFields<N>>() {
                Some(fields) if !fields.is_empty() => {
                    write!(writer, " [{} {}]", command.name(), fields)?
                }
                _ => write!(writer, " [{}]", command.name())?,
            }
        }

        write!(writer, " {}: ", event.metadata().target())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
