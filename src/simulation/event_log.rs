//! Event logging system for displaying recent run events.

use std::collections::VecDeque;

/// A logged event for display in the UI.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    /// Generation during which the event occurred
    pub generation: u32,
    /// Human-readable description of the event
    pub description: String,
    /// Category hint for the event (for UI display)
    pub kind: EventKind,
}

/// Event categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A bird died and its episode ended
    Death,
    /// The same bird was restarted by hand
    Restart,
    /// A generation was evolved
    Generation,
    /// A new best-so-far fitness was set
    Record,
    /// The run stopped
    RunComplete,
}

/// Event log that tracks recent run events
#[derive(Debug, Clone)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, generation: u32, description: String, kind: EventKind) {
        self.events.push_front(LoggedEvent {
            generation,
            description,
            kind,
        });

        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
