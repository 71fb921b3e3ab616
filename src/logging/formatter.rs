use std::fmt;
use tracing::{Event, Metadata, Subscriber};
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// One event per line, every part in brackets:
/// `[time] [LEVEL] [scope] [target: file:line]: fields`
///
/// The scope is the current span, or the event's module when no span is open.
pub struct LineFormatter;

fn module_name(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn location(metadata: &Metadata<'_>) -> String {
    match (metadata.file(), metadata.line()) {
        (Some(file), Some(line)) => format!("{}: {}:{}", metadata.target(), file, line),
        _ => metadata.target().to_string(),
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
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
        let metadata = event.metadata();
        let scope = ctx
            .lookup_current()
            .map(|span| span.name().to_string())
            .unwrap_or_else(|| module_name(metadata.target()).to_string());

        write!(
            writer,
            "[{}] [{:<5}] [{}] [{}]: ",
            chrono::Local::now().format(TIME_FORMAT),
            metadata.level().to_string(),
            scope,
            location(metadata),
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
