//! Display bus abstraction
//!
//! Provides the transport trait the display logic is written against.
//! Implementations decide how a byte reaches the controller (parallel
//! 8080 bus, SPI with a D/C pin, a recording mock).

/// Write-only controller bus
///
/// Every byte is either a command (A0 low) or display data (A0 high).
/// Calls must reach the controller in the order they are made; the
/// controller's column pointer depends on it.
pub trait DisplayBus {
    /// Error type for bus operations
    type Error;

    /// Send one command byte (page/column addressing, mode commands)
    fn send_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send one data byte
    ///
    /// In page mode this is one column of 8 vertical pixels; on the icon
    /// page it is the state byte of a single icon column.
    fn send_data(&mut self, data: u8) -> Result<(), Self::Error>;

    /// Send a sequence of command bytes in order
    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        for &command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }
}

impl<T: DisplayBus + ?Sized> DisplayBus for &mut T {
    type Error = T::Error;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        (**self).send_command(command)
    }

    fn send_data(&mut self, data: u8) -> Result<(), Self::Error> {
        (**self).send_data(data)
    }

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        (**self).send_commands(commands)
    }
}
