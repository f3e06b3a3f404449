//! Input events consumed by the orchestrator and the one-way actuator channel it
//! writes to.
//!
//! The actuator mirrors the jump key for an external device. It is fire-and-forget:
//! failures are logged and never stop the run.

use std::io::Write;

/// Discrete input events, polled once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to quit.
    Quit,
    /// The jump key went down.
    JumpPressed,
    /// The jump key went up.
    JumpReleased,
    /// An external timer asks for a pipe pair right now.
    SpawnPipe,
}

/// Message sent to the actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorSignal {
    /// Current jump state: pressed (`true`) or released.
    Level(bool),
    /// The run is over; the device should release and stay idle.
    Terminal,
}

/// One-way output channel for actuator signals.
pub trait ActuatorSink {
    /// Sends a signal. Implementations must not fail the caller.
    fn send(&mut self, signal: ActuatorSignal);
}

/// Discards every signal. Used when no device is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullActuator;

impl ActuatorSink for NullActuator {
    fn send(&mut self, _signal: ActuatorSignal) {}
}

/// Writes one byte per signal: `H` for pressed, `L` for released and terminal.
#[derive(Debug)]
pub struct WriterActuator<W: Write> {
    writer: W,
    last: Option<ActuatorSignal>,
}

impl<W: Write> WriterActuator<W> {
    /// Wraps a writer, typically a serial device opened as a file.
    pub fn new(writer: W) -> Self {
        Self { writer, last: None }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn encode(signal: ActuatorSignal) -> u8 {
        match signal {
            ActuatorSignal::Level(true) => b'H',
            ActuatorSignal::Level(false) | ActuatorSignal::Terminal => b'L',
        }
    }
}

impl<W: Write> ActuatorSink for WriterActuator<W> {
    fn send(&mut self, signal: ActuatorSignal) {
        let result = self
            .writer
            .write_all(&[Self::encode(signal)])
            .and_then(|()| self.writer.flush());
        if let Err(e) = result {
            // Only warn when the signal changes, otherwise a missing device floods the log.
            if self.last != Some(signal) {
                tracing::warn!(error = %e, ?signal, "actuator write failed");
            }
        }
        self.last = Some(signal);
    }
}

/// Records every signal. Useful to observe what a device would receive.
#[derive(Debug, Default, Clone)]
pub struct RecordingActuator {
    /// Signals in the order they were sent.
    pub signals: Vec<ActuatorSignal>,
}

impl ActuatorSink for RecordingActuator {
    fn send(&mut self, signal: ActuatorSignal) {
        self.signals.push(signal);
    }
}

impl<T: ActuatorSink + ?Sized> ActuatorSink for Box<T> {
    fn send(&mut self, signal: ActuatorSignal) {
        (**self).send(signal);
    }
}
