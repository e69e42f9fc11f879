// Driver for the Waveshare 1.3" LCD HAT: an ST7789 panel behind a
// command/data-multiplexed SPI link, plus the HAT's keys and joystick.

#![no_std]

extern crate alloc;

pub mod buttons;
pub mod bus;
pub mod canvas;
pub mod encode;
pub mod error;
pub mod panel;
pub mod pins;
pub mod session;

#[cfg(test)]
pub(crate) mod mock;

pub use buttons::{Button, ButtonWatcher, EdgeInput};
pub use canvas::Canvas;
pub use encode::Rotation;
pub use error::Error;
pub use panel::{HEIGHT, Panel, PanelConfig, WIDTH};
pub use session::LcdSession;
