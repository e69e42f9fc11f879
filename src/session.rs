//! Canvas-to-glass composition.
//!
//! One session owns the canvas, the panel and the SPI device underneath
//! it. Everything is `&mut self`, so same-thread callers get the required
//! serialization from the borrow checker; cross-thread callers wrap the
//! session in their own lock and hold it across draw-then-present pairs.

use alloc::vec::Vec;

use embedded_graphics_core::pixelcolor::Rgb888;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;

use crate::canvas::Canvas;
use crate::encode;
use crate::error::Error;
use crate::panel::{HEIGHT, Panel, PanelConfig, WIDTH};

pub struct LcdSession<SPI, DC, RST, BL> {
    panel: Panel<SPI, DC, RST, BL>,
    canvas: Canvas,
    // Encode scratch, sized on first present and reused per frame.
    stream: Vec<u8>,
}

impl<SPI, DC, RST, BL, E> LcdSession<SPI, DC, RST, BL>
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
            panel: Panel::with_config(spi, dc, rst, backlight, config),
            canvas: Canvas::new(),
            stream: Vec::new(),
        }
    }

    /// Bring the panel up. Must complete before the first `present`.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), Error<E>> {
        self.panel.init(delay)
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The raster to draw into. Mutations stay invisible until `present`.
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn panel(&self) -> &Panel<SPI, DC, RST, BL> {
        &self.panel
    }

    /// Push the whole canvas to the glass: encode with the configured
    /// rotation, set the full-frame window, then stream the pixels.
    /// Blocks for the full transfer. A failure mid-stream leaves panel
    /// RAM partially written until the next successful present.
    pub fn present(&mut self) -> Result<(), Error<E>> {
        encode::encode_frame(&self.canvas, self.panel.config().rotation, &mut self.stream);
        self.panel.set_address_window(0, 0, WIDTH - 1, HEIGHT - 1)?;
        self.panel.begin_ram_write()?;
        self.panel.write_pixels(&self.stream)
    }

    /// Fill the canvas with one color. Nothing reaches the glass until
    /// the next `present`.
    pub fn clear(&mut self, color: Rgb888) {
        self.canvas.fill(color);
    }
}
