use crate::robots::parse_event::ParseEvent;
use std::cell::RefCell;

/// Receives diagnostics while a robots.txt body is parsed.
pub trait ParseReporter {
    fn report(&self, event: ParseEvent);
}

impl<R: ParseReporter + ?Sized> ParseReporter for &R {
    fn report(&self, event: ParseEvent) {
        (**self).report(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopParseReporter;

impl ParseReporter for NoopParseReporter {
    fn report(&self, _event: ParseEvent) {}
}

/// Keeps every event in arrival order.
#[derive(Debug, Default)]
pub struct CollectingParseReporter {
    events: RefCell<Vec<ParseEvent>>,
}

impl CollectingParseReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ParseEvent> {
        self.events.borrow().clone()
    }

    pub fn into_events(self) -> Vec<ParseEvent> {
        self.events.into_inner()
    }
}

impl ParseReporter for CollectingParseReporter {
    fn report(&self, event: ParseEvent) {
        self.events.borrow_mut().push(event);
    }
}
