//! Host stand-ins for the module chain and the delay.
#![allow(dead_code)]

use core::convert::Infallible;

use embedded_hal::blocking::delay::DelayMs;
use matrix_clock::{DisplayConfig, LedRow, MatrixChain};

#[derive(Debug, Default)]
pub struct RecordingChain {
    pub enabled: Vec<usize>,
    pub intensities: Vec<(usize, u8)>,
    pub cleared: Vec<usize>,
    pub rows: Vec<(usize, usize, u8)>,
}

impl MatrixChain for RecordingChain {
    type Error = Infallible;

    fn enable_module(&mut self, module: usize) -> Result<(), Self::Error> {
        self.enabled.push(module);
        Ok(())
    }

    fn set_intensity(&mut self, module: usize, level: u8) -> Result<(), Self::Error> {
        self.intensities.push((module, level));
        Ok(())
    }

    fn clear_module(&mut self, module: usize) -> Result<(), Self::Error> {
        self.cleared.push(module);
        Ok(())
    }

    fn write_row(&mut self, module: usize, row: usize, bits: u8) -> Result<(), Self::Error> {
        self.rows.push((module, row, bits));
        Ok(())
    }
}

/// Records requested pauses instead of sleeping.
#[derive(Debug, Default)]
pub struct NoDelay {
    pub calls: Vec<u32>,
}

impl DelayMs<u32> for NoDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}

pub type TestRow = LedRow<RecordingChain, NoDelay>;

pub fn row() -> TestRow {
    LedRow::new(RecordingChain::default(), NoDelay::default(), DisplayConfig::default())
}

pub fn row_with(config: DisplayConfig) -> TestRow {
    LedRow::new(RecordingChain::default(), NoDelay::default(), config)
}

pub fn rows_written(row: &TestRow) -> usize {
    row.driver().rows.len()
}
