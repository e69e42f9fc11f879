//! SPI command/data transport.
//!
//! The controller multiplexes commands and data over one serial line; the
//! DC pin classifies every byte group. The level must be settled before
//! the bytes clock out, and a data burst split into chunks is still one
//! logical data phase for the controller.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::error::Error;

/// Largest single transfer handed to the SPI device. spidev-class
/// transports cap one transfer at a 4096-byte page; larger payloads are
/// split at this boundary with DC left high across the whole burst.
pub const CHUNK_BYTES: usize = 4096;

pub struct SpiTransport<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC, E> SpiTransport<SPI, DC>
where
    SPI: SpiDevice<Error = E>,
    DC: OutputPin,
{
    /// Wrap an opened SPI device and its DC line. The device must already
    /// be configured for the panel: mode 0, clock at or below the rated
    /// maximum.
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// One command byte, DC held low.
    pub fn write_command(&mut self, cmd: u8) -> Result<(), Error<E>> {
        self.dc.set_low().map_err(|_| Error::Pin)?;
        self.spi.write(&[cmd])?;
        Ok(())
    }

    /// A data burst, DC held high. No retries: the first failed transfer
    /// aborts the burst and surfaces to the caller.
    pub fn write_data(&mut self, data: &[u8]) -> Result<(), Error<E>> {
        self.dc.set_high().map_err(|_| Error::Pin)?;
        for chunk in data.chunks(CHUNK_BYTES) {
            self.spi.write(chunk)?;
        }
        Ok(())
    }
}
