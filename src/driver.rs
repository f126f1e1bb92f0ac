//! The module chain as seen by the compositor.

use max7219::{connectors::Connector, DataError, MAX7219};

/// Row registers start at 0x01 ("digit 0") on the MAX7219.
const REG_ROW0: u8 = 0x01;
const REG_SHUTDOWN: u8 = 0x0C;

/// Outbound hardware interface: a fixed chain of 8x8 modules.
///
/// Writes are expected to succeed; there is no retry path.
pub trait MatrixChain {
    type Error;

    /// Leaves shutdown mode.
    fn enable_module(&mut self, module: usize) -> Result<(), Self::Error>;

    /// `level` is already clamped to `0..=15`.
    fn set_intensity(&mut self, module: usize, level: u8) -> Result<(), Self::Error>;

    fn clear_module(&mut self, module: usize) -> Result<(), Self::Error>;

    fn write_row(&mut self, module: usize, row: usize, bits: u8) -> Result<(), Self::Error>;
}

impl<C: Connector> MatrixChain for MAX7219<C> {
    type Error = DataError;

    fn enable_module(&mut self, module: usize) -> Result<(), Self::Error> {
        self.write_raw_byte(module, REG_SHUTDOWN, 0x01)
    }

    fn set_intensity(&mut self, module: usize, level: u8) -> Result<(), Self::Error> {
        MAX7219::set_intensity(self, module, level)
    }

    fn clear_module(&mut self, module: usize) -> Result<(), Self::Error> {
        self.clear_display(module)
    }

    fn write_row(&mut self, module: usize, row: usize, bits: u8) -> Result<(), Self::Error> {
        self.write_raw_byte(module, REG_ROW0 + row as u8, bits)
    }
}
