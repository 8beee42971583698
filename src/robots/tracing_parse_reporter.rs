use crate::robots::parse_event::{ParseEvent, Severity};
use crate::robots::parse_reporter::ParseReporter;

/// Forwards parse diagnostics to `tracing`, tagged with the line number
/// and the origin of the robots.txt body.
#[derive(Debug, Clone)]
pub struct TracingParseReporter {
    origin: String,
}

impl TracingParseReporter {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl ParseReporter for TracingParseReporter {
    fn report(&self, event: ParseEvent) {
        let origin = self.origin.as_str();
        match (event.severity(), event.line_number()) {
            (Severity::Info, Some(line)) => tracing::info!(origin, line, "{event}"),
            (Severity::Info, None) => tracing::info!(origin, "{event}"),
            (Severity::Warning, Some(line)) => tracing::warn!(origin, line, "{event}"),
            (Severity::Warning, None) => tracing::warn!(origin, "{event}"),
        }
    }
}
