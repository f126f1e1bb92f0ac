//! Packed one-bit framebuffer for the module chain.
//!
//! One byte per pixel column, left to right across the chain. Bit `n` of a
//! byte is row `n` counted from the top.

use core::convert::Infallible;

use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

use crate::config::{BUFFER_LEN, COLUMN_COUNT, ROWS_PER_MODULE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer([u8; BUFFER_LEN]);

impl Framebuffer {
    pub const fn new() -> Self {
        Self([0; BUFFER_LEN])
    }

    pub fn clear(&mut self) {
        self.0.fill(0);
    }

    /// Row bits of one column, 0 past the end.
    pub fn column(&self, column: usize) -> u8 {
        self.0.get(column).copied().unwrap_or(0)
    }

    /// Replaces a column. Writes past the end are ignored.
    pub fn set_column(&mut self, column: usize, bits: u8) {
        if let Some(slot) = self.0.get_mut(column) {
            *slot = bits;
        }
    }

    /// Adds bits to a column, keeping what is already lit.
    pub fn or_column(&mut self, column: usize, bits: u8) {
        if let Some(slot) = self.0.get_mut(column) {
            *slot |= bits;
        }
    }

    pub fn pixel(&self, column: usize, row: usize) -> bool {
        row < ROWS_PER_MODULE && self.column(column) & (1 << row) != 0
    }

    pub fn set_pixel(&mut self, column: usize, row: usize, lit: bool) {
        if row >= ROWS_PER_MODULE {
            return;
        }
        if let Some(slot) = self.0.get_mut(column) {
            if lit {
                *slot |= 1 << row;
            } else {
                *slot &= !(1 << row);
            }
        }
    }

    /// Complements every byte, guard slot included.
    pub fn invert(&mut self) {
        for bits in self.0.iter_mut() {
            *bits = !*bits;
        }
    }

    pub fn copy_from(&mut self, other: &Self) {
        self.0.copy_from_slice(&other.0);
    }

    /// The eight bytes shown by one module, in row register order.
    pub fn module(&self, module: usize) -> &[u8] {
        let start = (module * ROWS_PER_MODULE).min(COLUMN_COUNT);
        let end = (start + ROWS_PER_MODULE).min(COLUMN_COUNT);
        &self.0[start..end]
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.0
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(COLUMN_COUNT as u32, ROWS_PER_MODULE as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(column), Ok(row)) = (usize::try_from(point.x), usize::try_from(point.y))
            else {
                continue;
            };
            if column < COLUMN_COUNT {
                self.set_pixel(column, row, color.is_on());
            }
        }
        Ok(())
    }
}
