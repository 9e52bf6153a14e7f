//! Optional per-mapper observability hook.
//!
//! A mapper reports each intermediate step (scale derivation, spiral position,
//! per-channel levels) to its sink, if it has one. Sinks run inline with every
//! color computation and must not block.

/// Receives one human-readable line per computation step.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn record(&self, message: &str) {
        self(message)
    }
}

/// Forwards every message to the `log` facade at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub const TARGET: &'static str = "archimedes";
}

impl DiagnosticSink for LogSink {
    fn record(&self, message: &str) {
        log::debug!(target: LogSink::TARGET, "{message}");
    }
}
