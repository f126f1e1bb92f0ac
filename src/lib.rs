//! Bitmap compositor and transition engine for a row of chained 8x8 LED
//! matrix modules (MAX7219 and friends).
//!
//! Scenes are composed into a staging [`Framebuffer`] and brought on screen
//! by [`LedRow`], either at once or with a rolling animation pushed frame by
//! frame to a [`MatrixChain`].
//!
//! ```no_run
//! # use matrix_clock::{DisplayConfig, LedRow, MatrixChain, Transition};
//! # fn demo<D: MatrixChain>(chain: D, delay: impl embedded_hal::blocking::delay::DelayMs<u32>) -> Result<(), D::Error> {
//! let mut row = LedRow::new(chain, delay, DisplayConfig::default());
//! row.initialise()?;
//! row.show_time(9, 5, Transition::Immediate)?;
//! row.show_time(9, 6, Transition::RollingVertical)?;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(test), no_std)]

pub mod animator;
pub mod clock;
pub mod compose;
pub mod config;
pub mod display;
pub mod driver;
pub mod font;
pub mod framebuffer;
pub mod layout;

pub use animator::{Animation, Transition};
pub use clock::ClockFace;
pub use config::{DisplayConfig, COLUMN_COUNT, MODULE_COUNT};
pub use display::LedRow;
pub use driver::MatrixChain;
pub use framebuffer::Framebuffer;
