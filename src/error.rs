//! Driver error type.

use core::fmt;

/// Failure of a panel operation. `E` is the SPI device error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// Addressing window outside the panel bounds or inverted. This is a
    /// caller bug: the controller would silently wrap its address pointer
    /// instead of reporting anything, so the driver refuses before any
    /// bus traffic.
    Window { x0: u16, y0: u16, x1: u16, y1: u16 },
    /// SPI transfer failed.
    Spi(E),
    /// A control line (DC, RST or backlight) could not be driven.
    Pin,
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Spi(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Window { x0, y0, x1, y1 } => {
                write!(f, "address window ({x0},{y0})..({x1},{y1}) out of bounds")
            }
            Error::Spi(e) => write!(f, "spi write failed: {e:?}"),
            Error::Pin => f.write_str("control line write failed"),
        }
    }
}
