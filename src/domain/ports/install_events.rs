//! Install Event Port
//!
//! Provides an observable interface for install runs.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::entities::StepName;

/// Event emitted during an install run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallEvent {
    /// Install started
    Started {
        project_root: PathBuf,
        step_count: usize,
        dry_run: bool,
    },

    /// Step is about to run
    StepStarted {
        index: usize,
        step: StepName,
        description: String,
    },

    /// Step finished successfully
    StepCompleted { index: usize, step: StepName },

    /// Step was not run (resume point not reached, or dry run)
    StepSkipped {
        index: usize,
        step: StepName,
        reason: String,
    },

    /// File would change (dry run only)
    FilePreview { path: PathBuf, diff: String },

    /// Non-fatal problem the operator should act on
    Warning { message: String },

    /// Step failed; nothing after it runs
    Failed {
        index: usize,
        step: StepName,
        error: String,
    },

    /// Install completed
    Completed {
        executed_count: usize,
        skipped_count: usize,
        warning_count: usize,
    },
}

/// Trait for receiving install events
///
/// Implementations can be:
/// - TextEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait InstallEventSink {
    /// Handle an install event
    fn on_event(&self, event: InstallEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl InstallEventSink for NoopEventSink {
    fn on_event(&self, _event: InstallEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: RefCell<Vec<InstallEvent>>,
    }

    impl InstallEventSink for RecordingEventSink {
        fn on_event(&self, event: InstallEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink {
            events: RefCell::new(Vec::new()),
        };

        sink.on_event(InstallEvent::Started {
            project_root: PathBuf::from("."),
            step_count: 10,
            dry_run: false,
        });
        sink.on_event(InstallEvent::StepCompleted {
            index: 1,
            step: StepName::PublishSeeds,
        });

        assert_eq!(sink.events.borrow().len(), 2);
    }
}
