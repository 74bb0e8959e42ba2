//! Controller bring-up
//!
//! Owns the bus and the active-low reset line until the panel has been
//! reset and configured, then hands the bus over to a [`Display`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use iconlcd_core::{Display, PanelConfig};
use iconlcd_hal::DisplayBus;

/// Width of the reset pulse and the recovery time after it
pub const RESET_PULSE_MS: u32 = 1;

/// Settle time after the init sequence
pub const INIT_SETTLE_MS: u32 = 1;

/// Bring-up error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError<E> {
    /// The bus rejected a command
    Bus(E),
    /// The reset line could not be driven
    Reset,
}

/// Panel controller before it is handed over for drawing
pub struct Controller<B, RST> {
    bus: B,
    rst: RST,
}

impl<B: DisplayBus, RST: OutputPin> Controller<B, RST> {
    pub fn new(bus: B, rst: RST) -> Self {
        Self { bus, rst }
    }

    /// Pulse the reset line low and wait for the controller to recover
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), InitError<B::Error>> {
        self.rst.set_low().map_err(|_| InitError::Reset)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(|_| InitError::Reset)?;
        delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }

    /// Hardware reset followed by the configured init sequence
    pub fn init<D: DelayNs>(
        &mut self,
        delay: &mut D,
        config: &PanelConfig,
    ) -> Result<(), InitError<B::Error>> {
        self.reset(delay)?;
        self.bus
            .send_commands(&config.init_commands())
            .map_err(InitError::Bus)?;
        delay.delay_ms(INIT_SETTLE_MS);
        Ok(())
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Hand the bus to a drawing facade, keeping the reset pin
    pub fn into_display(self) -> (Display<B>, RST) {
        (Display::new(self.bus), self.rst)
    }

    pub fn release(self) -> (B, RST) {
        (self.bus, self.rst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use core::convert::Infallible;
    use embedded_hal::digital::{Error, ErrorKind, ErrorType};
    use iconlcd_hal::mock::{MockBusError, RecordingBus};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Event {
        Reset(bool),
        DelayNs(u32),
    }

    type Log = RefCell<heapless::Vec<Event, 32>>;

    struct MockReset<'a> {
        log: &'a Log,
    }

    impl ErrorType for MockReset<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockReset<'_> {
        fn set_low(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Event::Reset(false)).unwrap();
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Infallible> {
            self.log.borrow_mut().push(Event::Reset(true)).unwrap();
            Ok(())
        }
    }

    struct MockDelay<'a> {
        log: &'a Log,
    }

    impl DelayNs for MockDelay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            self.log.borrow_mut().push(Event::DelayNs(ns)).unwrap();
        }
    }

    #[derive(Debug)]
    struct Stuck;

    impl Error for Stuck {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    struct StuckReset;

    impl ErrorType for StuckReset {
        type Error = Stuck;
    }

    impl OutputPin for StuckReset {
        fn set_low(&mut self) -> Result<(), Stuck> {
            Err(Stuck)
        }

        fn set_high(&mut self) -> Result<(), Stuck> {
            Err(Stuck)
        }
    }

    /// Total delay in milliseconds recorded in the log
    fn total_ms(log: &Log) -> u32 {
        log.borrow()
            .iter()
            .map(|event| match event {
                Event::DelayNs(ns) => *ns,
                Event::Reset(_) => 0,
            })
            .sum::<u32>()
            / 1_000_000
    }

    #[test]
    fn test_reset_pulse() {
        let log = Log::default();
        let mut controller = Controller::new(RecordingBus::new(), MockReset { log: &log });
        let mut delay = MockDelay { log: &log };

        controller.reset(&mut delay).unwrap();

        let events = log.borrow();
        assert_eq!(events.first(), Some(&Event::Reset(false)));
        let high = events
            .iter()
            .position(|event| *event == Event::Reset(true))
            .unwrap();
        // Held low for the pulse width, then given time to recover
        assert!(events[1..high]
            .iter()
            .all(|event| matches!(event, Event::DelayNs(_))));
        assert!(high < events.len() - 1);
        drop(events);

        assert_eq!(total_ms(&log), 2 * RESET_PULSE_MS);
        assert!(controller.bus_mut().events().is_empty());
    }

    #[test]
    fn test_init_sends_config() {
        let log = Log::default();
        let mut controller = Controller::new(RecordingBus::new(), MockReset { log: &log });
        let mut delay = MockDelay { log: &log };
        let config = PanelConfig::default();

        controller.init(&mut delay, &config).unwrap();

        assert_eq!(total_ms(&log), 2 * RESET_PULSE_MS + INIT_SETTLE_MS);

        let (display, _rst) = controller.into_display();
        let commands: heapless::Vec<u8, 16> = display.bus().commands().collect();
        assert_eq!(
            commands.as_slice(),
            &[0xE2, 0xC8, 0xA2, 0x2F, 0xA6, 0x27, 0x81, 0x0E, 0xAF, 0xA4]
        );
        assert!(display.buffer().is_blank());
    }

    #[test]
    fn test_reset_failure() {
        let log = Log::default();
        let mut controller = Controller::new(RecordingBus::new(), StuckReset);
        let mut delay = MockDelay { log: &log };

        let result = controller.init(&mut delay, &PanelConfig::default());

        assert_eq!(result, Err(InitError::Reset));
        let (bus, _) = controller.release();
        assert!(bus.events().is_empty());
    }

    #[test]
    fn test_bus_failure() {
        let log = Log::default();
        let mut bus = RecordingBus::new();
        bus.fail_after(3);
        let mut controller = Controller::new(bus, MockReset { log: &log });
        let mut delay = MockDelay { log: &log };

        let result = controller.init(&mut delay, &PanelConfig::default());

        assert_eq!(result, Err(InitError::Bus(MockBusError::Injected)));
        assert_eq!(controller.bus_mut().events().len(), 3);
        // No settle delay after a failed sequence
        assert_eq!(total_ms(&log), 2 * RESET_PULSE_MS);
    }
}
