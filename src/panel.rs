//! ST7789 panel controller: reset, bring-up and addressing.
//!
//! The protocol is open-loop. There is no status read-back, so the settle
//! delays below are the only thing standing between the driver and a
//! controller that latched garbage; the tracked [`PanelState`] is the
//! driver's only record of what the hardware holds.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use log::info;

use crate::bus::SpiTransport;
use crate::encode::Rotation;
use crate::error::Error;

// Panel dimensions (physical)
pub const WIDTH: u16 = 240;
pub const HEIGHT: u16 = 240;

/// Rated SPI clock. The bus must be configured at or below this (mode 0)
/// before the driver sees it.
pub const SPI_MAX_HZ: u32 = 40_000_000;

// Settle times. Sleep-out is the critical one: the controller needs the
// full wake interval for oscillator start-up, and commands issued earlier
// leave it undefined, not merely mis-programmed.
const RESET_SETTLE_MS: u32 = 10;
const SLEEP_OUT_SETTLE_MS: u32 = 120;

// ST7789 commands
mod cmd {
    pub const SLPOUT: u8 = 0x11; // Sleep out
    pub const INVON: u8 = 0x21; // Display inversion on
    pub const DISPON: u8 = 0x29; // Display on
    pub const CASET: u8 = 0x2A; // Column address set
    pub const RASET: u8 = 0x2B; // Row address set
    pub const RAMWR: u8 = 0x2C; // Memory write
    pub const MADCTL: u8 = 0x36; // Memory access control
    pub const COLMOD: u8 = 0x3A; // Interface pixel format
}

// MADCTL stays at its reset value; orientation is remapped in software
// before encoding (see encode::Rotation).
const MADCTL_DEFAULT: u8 = 0x00;
// COLMOD 16 bits per pixel
const COLMOD_16BPP: u8 = 0x05;

/// Bring-up options.
#[derive(Clone, Copy, Debug)]
pub struct PanelConfig {
    /// Software rotation applied at encode time.
    pub rotation: Rotation,
    /// Issue display-inversion-on during init. The Waveshare modules this
    /// targets need it for correct color.
    pub invert_colors: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            rotation: Rotation::default(),
            invert_colors: true,
        }
    }
}

/// Last state written to the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub awake: bool,
    pub display_on: bool,
    pub madctl: u8,
    pub colmod: u8,
    pub inverted: bool,
}

pub struct Panel<SPI, DC, RST, BL> {
    bus: SpiTransport<SPI, DC>,
    rst: RST,
    backlight: BL,
    config: PanelConfig,
    state: PanelState,
}

impl<SPI, DC, RST, BL, E> Panel<SPI, DC, RST, BL>
where
    SPI: SpiDevice<Error = E>,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    pub fn new(spi: SPI, dc: DC, rst: RST, backlight: BL) -> Self {
        Self::with_config(spi, dc, rst, backlight, PanelConfig::default())
    }

    pub fn with_config(spi: SPI, dc: DC, rst: RST, backlight: BL, config: PanelConfig) -> Self {
        Self {
            bus: SpiTransport::new(spi, dc),
            rst,
            backlight,
            config,
            state: PanelState::default(),
        }
    }

    pub fn config(&self) -> PanelConfig {
        self.config
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Pulse the reset line. The only way to reach a known controller
    /// state, since nothing can be read back to confirm one.
    pub fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        self.rst.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_low().map_err(|_| Error::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        self.rst.set_high().map_err(|_| Error::Pin)?;
        delay.delay_ms(RESET_SETTLE_MS);
        self.state = PanelState::default();
        Ok(())
    }

    /// Reset and run the fixed bring-up sequence. Re-issues the same
    /// register values every time to keep [`PanelState`] honest.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        // Backlight comes up once here and no operation below ever
        // touches it again.
        self.backlight.set_high().map_err(|_| Error::Pin)?;

        self.hard_reset(delay)?;

        self.bus.write_command(cmd::SLPOUT)?;
        delay.delay_ms(SLEEP_OUT_SETTLE_MS);
        self.state.awake = true;

        self.bus.write_command(cmd::MADCTL)?;
        self.bus.write_data(&[MADCTL_DEFAULT])?;
        self.state.madctl = MADCTL_DEFAULT;

        self.bus.write_command(cmd::COLMOD)?;
        self.bus.write_data(&[COLMOD_16BPP])?;
        self.state.colmod = COLMOD_16BPP;

        if self.config.invert_colors {
            self.bus.write_command(cmd::INVON)?;
            self.state.inverted = true;
        }

        self.bus.write_command(cmd::DISPON)?;
        self.state.display_on = true;

        info!("[LCD] panel up ({WIDTH}x{HEIGHT}, {:?})", self.config.rotation);
        Ok(())
    }

    /// Set the rectangle subsequent RAM writes land in, inclusive corners.
    /// Bounds are a caller contract: the controller silently wraps its
    /// address pointer on out-of-range values instead of erroring, so the
    /// driver refuses before issuing anything.
    pub fn set_address_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), Error<E>> {
        if x0 > x1 || y0 > y1 || x1 >= WIDTH || y1 >= HEIGHT {
            return Err(Error::Window { x0, y0, x1, y1 });
        }

        self.bus.write_command(cmd::CASET)?;
        self.bus
            .write_data(&[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8])?;

        self.bus.write_command(cmd::RASET)?;
        self.bus
            .write_data(&[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8])?;

        Ok(())
    }

    /// Start a pixel burst. Every data byte until the next command is
    /// consumed as consecutive RAM content from the window origin,
    /// row-major.
    pub fn begin_ram_write(&mut self) -> Result<(), Error<E>> {
        self.bus.write_command(cmd::RAMWR)
    }

    /// Stream pixel bytes for an open RAM write.
    pub fn write_pixels(&mut self, data: &[u8]) -> Result<(), Error<E>> {
        self.bus.write_data(data)
    }
}
