//! Recording bus for host-side tests
//!
//! Captures every command and data byte in order so tests can assert on
//! the exact sequence a display operation produces.

use heapless::Vec;

use crate::bus::DisplayBus;

/// Maximum number of bus events a [`RecordingBus`] holds
///
/// Large enough for an icon-bar clear followed by two full frame updates.
pub const RECORD_CAPACITY: usize = 4096;

/// One byte as seen on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusEvent {
    /// Byte sent with A0 low
    Command(u8),
    /// Byte sent with A0 high
    Data(u8),
}

/// Errors reported by the recording bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MockBusError {
    /// Event log is full
    Full,
    /// Failure injected with [`RecordingBus::fail_after`]
    Injected,
}

/// Bus that records every write
#[derive(Debug, Clone, Default)]
pub struct RecordingBus {
    events: Vec<BusEvent, RECORD_CAPACITY>,
    /// Remaining writes before an injected failure
    fail_after: Option<usize>,
}

impl RecordingBus {
    /// Create an empty recording bus
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            fail_after: None,
        }
    }

    /// Make the bus fail once `writes` more bytes have been accepted
    pub fn fail_after(&mut self, writes: usize) {
        self.fail_after = Some(writes);
    }

    /// All recorded events in order
    pub fn events(&self) -> &[BusEvent] {
        &self.events
    }

    /// Recorded command bytes in order
    pub fn commands(&self) -> impl Iterator<Item = u8> + '_ {
        self.events.iter().filter_map(|event| match event {
            BusEvent::Command(byte) => Some(*byte),
            BusEvent::Data(_) => None,
        })
    }

    /// Recorded data bytes in order
    pub fn data(&self) -> impl Iterator<Item = u8> + '_ {
        self.events.iter().filter_map(|event| match event {
            BusEvent::Data(byte) => Some(*byte),
            BusEvent::Command(_) => None,
        })
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: BusEvent) -> Result<(), MockBusError> {
        if let Some(remaining) = self.fail_after.as_mut() {
            if *remaining == 0 {
                return Err(MockBusError::Injected);
            }
            *remaining -= 1;
        }
        self.events.push(event).map_err(|_| MockBusError::Full)
    }
}

impl DisplayBus for RecordingBus {
    type Error = MockBusError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.record(BusEvent::Command(command))
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        self.record(BusEvent::Data(data))
    }
}
