//! 8080-style parallel bus on GPIO
//!
//! The controller latches D0..D7 on the rising edge of WR while CS is low.
//! A0 selects between command (low) and display data (high). RD is only
//! held high; the panel is never read back.

use embedded_hal::digital::{OutputPin, PinState};
use iconlcd_hal::DisplayBus;

/// Bus line that failed to switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    ChipSelect,
    /// A0
    DataCommand,
    Write,
    Read,
    /// Data line by bit index (0 = D0)
    Data(u8),
}

/// Parallel bus error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// A GPIO write failed
    Pin(Line),
}

/// Write-only 8-bit parallel bus
pub struct ParallelBus<CS, A0, WR, RD, D> {
    cs: CS,
    a0: A0,
    wr: WR,
    rd: RD,
    /// D0..D7, LSB first
    data: [D; 8],
}

fn drive<P: OutputPin>(pin: &mut P, high: bool, line: Line) -> Result<(), BusError> {
    pin.set_state(PinState::from(high))
        .map_err(|_| BusError::Pin(line))
}

impl<CS, A0, WR, RD, D> ParallelBus<CS, A0, WR, RD, D>
where
    CS: OutputPin,
    A0: OutputPin,
    WR: OutputPin,
    RD: OutputPin,
    D: OutputPin,
{
    /// Take ownership of the pins and park the bus idle
    ///
    /// Idle means WR, A0, CS and RD all high.
    pub fn new(cs: CS, a0: A0, wr: WR, rd: RD, data: [D; 8]) -> Result<Self, BusError> {
        let mut bus = Self {
            cs,
            a0,
            wr,
            rd,
            data,
        };
        bus.idle()?;
        Ok(bus)
    }

    /// Drive all control lines to their idle level
    pub fn idle(&mut self) -> Result<(), BusError> {
        drive(&mut self.wr, true, Line::Write)?;
        drive(&mut self.a0, true, Line::DataCommand)?;
        drive(&mut self.cs, true, Line::ChipSelect)?;
        drive(&mut self.rd, true, Line::Read)
    }

    /// Give the pins back
    pub fn release(self) -> (CS, A0, WR, RD, [D; 8]) {
        (self.cs, self.a0, self.wr, self.rd, self.data)
    }

    fn put_byte(&mut self, byte: u8) -> Result<(), BusError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            drive(pin, byte & (1 << bit) != 0, Line::Data(bit as u8))?;
        }
        Ok(())
    }
}

impl<CS, A0, WR, RD, D> DisplayBus for ParallelBus<CS, A0, WR, RD, D>
where
    CS: OutputPin,
    A0: OutputPin,
    WR: OutputPin,
    RD: OutputPin,
    D: OutputPin,
{
    type Error = BusError;

    fn send_command(&mut self, byte: u8) -> Result<(), BusError> {
        drive(&mut self.cs, false, Line::ChipSelect)?;
        drive(&mut self.a0, false, Line::DataCommand)?;
        drive(&mut self.rd, true, Line::Read)?;
        drive(&mut self.wr, false, Line::Write)?;
        self.put_byte(byte)?;
        drive(&mut self.wr, true, Line::Write)?;
        drive(&mut self.a0, true, Line::DataCommand)?;
        drive(&mut self.cs, true, Line::ChipSelect)
    }

    fn send_data(&mut self, byte: u8) -> Result<(), BusError> {
        drive(&mut self.a0, true, Line::DataCommand)?;
        drive(&mut self.cs, false, Line::ChipSelect)?;
        drive(&mut self.wr, false, Line::Write)?;
        self.put_byte(byte)?;
        drive(&mut self.wr, true, Line::Write)?;
        drive(&mut self.cs, true, Line::ChipSelect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    type Log = RefCell<heapless::Vec<(Line, bool), 256>>;

    /// Mock pin that appends every level change to a shared log
    struct LoggedPin<'a> {
        line: Line,
        log: &'a Log,
    }

    impl ErrorType for LoggedPin<'_> {
        type Error = Infallible;
    }

    impl OutputPin for LoggedPin<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, false)).unwrap();
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push((self.line, true)).unwrap();
            Ok(())
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl Error for Broken {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Mock pin that always fails
    struct FailingPin;

    impl ErrorType for FailingPin {
        type Error = Broken;
    }

    impl OutputPin for FailingPin {
        fn set_low(&mut self) -> Result<(), Broken> {
            Err(Broken)
        }

        fn set_high(&mut self) -> Result<(), Broken> {
            Err(Broken)
        }
    }

    fn pin(line: Line, log: &Log) -> LoggedPin<'_> {
        LoggedPin { line, log }
    }

    fn logged_bus(
        log: &Log,
    ) -> ParallelBus<LoggedPin<'_>, LoggedPin<'_>, LoggedPin<'_>, LoggedPin<'_>, LoggedPin<'_>>
    {
        ParallelBus::new(
            pin(Line::ChipSelect, log),
            pin(Line::DataCommand, log),
            pin(Line::Write, log),
            pin(Line::Read, log),
            core::array::from_fn(|bit| pin(Line::Data(bit as u8), log)),
        )
        .unwrap()
    }

    /// Expected data-line writes for one byte, D0 first
    fn byte_writes(byte: u8) -> impl Iterator<Item = (Line, bool)> {
        (0..8u8).map(move |bit| (Line::Data(bit), byte & (1 << bit) != 0))
    }

    #[test]
    fn test_new_parks_idle() {
        let log = Log::default();
        let _bus = logged_bus(&log);

        assert_eq!(
            log.borrow().as_slice(),
            &[
                (Line::Write, true),
                (Line::DataCommand, true),
                (Line::ChipSelect, true),
                (Line::Read, true),
            ]
        );
    }

    #[test]
    fn test_data_write_sequence() {
        let log = Log::default();
        let mut bus = logged_bus(&log);
        log.borrow_mut().clear();

        bus.send_data(0xA5).unwrap();

        let mut expected: heapless::Vec<(Line, bool), 16> = heapless::Vec::new();
        expected.push((Line::DataCommand, true)).unwrap();
        expected.push((Line::ChipSelect, false)).unwrap();
        expected.push((Line::Write, false)).unwrap();
        expected.extend(byte_writes(0xA5));
        expected.push((Line::Write, true)).unwrap();
        expected.push((Line::ChipSelect, true)).unwrap();

        assert_eq!(log.borrow().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_command_write_sequence() {
        let log = Log::default();
        let mut bus = logged_bus(&log);
        log.borrow_mut().clear();

        bus.send_command(0xE2).unwrap();

        let mut expected: heapless::Vec<(Line, bool), 16> = heapless::Vec::new();
        expected.push((Line::ChipSelect, false)).unwrap();
        expected.push((Line::DataCommand, false)).unwrap();
        expected.push((Line::Read, true)).unwrap();
        expected.push((Line::Write, false)).unwrap();
        expected.extend(byte_writes(0xE2));
        expected.push((Line::Write, true)).unwrap();
        expected.push((Line::DataCommand, true)).unwrap();
        expected.push((Line::ChipSelect, true)).unwrap();

        assert_eq!(log.borrow().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_data_lines_lsb_first() {
        let log = Log::default();
        let mut bus = logged_bus(&log);
        log.borrow_mut().clear();

        bus.send_data(0x01).unwrap();

        let levels: heapless::Vec<(Line, bool), 8> = log
            .borrow()
            .iter()
            .copied()
            .filter(|(line, _)| matches!(line, Line::Data(_)))
            .collect();
        assert_eq!(levels[0], (Line::Data(0), true));
        assert!(levels[1..].iter().all(|&(_, high)| !high));
    }

    #[test]
    fn test_failing_pin_reports_line() {
        let log = Log::default();
        let result = ParallelBus::new(
            FailingPin,
            pin(Line::DataCommand, &log),
            pin(Line::Write, &log),
            pin(Line::Read, &log),
            core::array::from_fn(|bit| pin(Line::Data(bit as u8), &log)),
        );

        assert!(matches!(result, Err(BusError::Pin(Line::ChipSelect))));
        // WR and A0 were parked before CS failed
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn test_failing_data_pin() {
        let log = Log::default();
        let mut bus = ParallelBus::new(
            pin(Line::ChipSelect, &log),
            pin(Line::DataCommand, &log),
            pin(Line::Write, &log),
            pin(Line::Read, &log),
            [FailingPin, FailingPin, FailingPin, FailingPin, FailingPin, FailingPin, FailingPin, FailingPin],
        )
        .unwrap();

        assert_eq!(bus.send_data(0xFF), Err(BusError::Pin(Line::Data(0))));
    }

    #[test]
    fn test_release_returns_pins() {
        let log = Log::default();
        let bus = logged_bus(&log);
        let (cs, _, _, _, data) = bus.release();

        assert_eq!(cs.line, Line::ChipSelect);
        assert_eq!(data[7].line, Line::Data(7));
    }
}
