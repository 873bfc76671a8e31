//! Tracing configuration for the tessel-gallery binary.
//!
//! Webview chatter (`SelectionDidChange`, pointer moves) is dropped by a
//! formatter that checks each rendered line against the configured
//! patterns. Must run before Dioxus launches, or dioxus-logger installs its
//! own subscriber.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tessel_dioxus::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Formats events, then discards the ones matching a suppressed pattern.
struct SuppressingFormatter {
    inner: fmt::format::Format,
    patterns: Vec<String>,
}

impl SuppressingFormatter {
    fn new(patterns: &[String]) -> Self {
        Self {
            inner: fmt::format::Format::default().with_target(false),
            patterns: patterns.to_vec(),
        }
    }
}

fn is_suppressed(line: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .any(|pattern| !pattern.is_empty() && line.contains(pattern.as_str()))
}

impl<S, N> FormatEvent<S, N> for SuppressingFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;

        if is_suppressed(&line, &self.patterns) {
            return Ok(());
        }
        write!(writer, "{line}")
    }
}

/// Where formatted events are written.
enum Sink {
    File(PathBuf, File),
    Stderr,
}

impl Sink {
    /// The configured log file, or stderr when there is none or it cannot
    /// be created.
    fn open(log_file: Option<&Path>) -> Self {
        let Some(path) = log_file else {
            return Self::Stderr;
        };
        match File::create(path) {
            Ok(file) => Self::File(path.to_path_buf(), file),
            Err(err) => {
                eprintln!("Cannot create {}: {err}", path.display());
                Self::Stderr
            }
        }
    }

    /// Colours only make sense on a terminal.
    fn ansi(&self) -> bool {
        matches!(self, Self::Stderr)
    }

    fn into_writer(self) -> BoxMakeWriter {
        match self {
            Self::File(_, file) => BoxMakeWriter::new(Mutex::new(file)),
            Self::Stderr => BoxMakeWriter::new(io::stderr),
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// `RUST_LOG` wins over the configured level.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let sink = Sink::open(config.log_file.as_deref());
    if let Sink::File(path, _) = &sink {
        eprintln!("Logging to {}", path.display());
    }

    let fmt_layer = fmt::layer()
        .with_ansi(sink.ansi())
        .with_writer(sink.into_writer())
        .event_format(SuppressingFormatter::new(&config.suppressed_patterns));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
