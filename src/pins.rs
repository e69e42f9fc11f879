//! BCM  |    Function    |      Notes
//! -----+----------------+----------------------------------
//!  27  | LCD RST        | Reset (pulsed low to reset)
//!  25  | LCD DC         | Data/command select
//!  24  | LCD BL         | Backlight, driven high at bring-up
//!   8  | SPI0 CE0       | Chip select (hardware-managed)
//!  11  | SPI0 SCLK      | Shared SPI clock
//!  10  | SPI0 MOSI      | SPI data out (panel is write-only)
//!  21  | KEY1           | Active low, needs pull-up
//!  20  | KEY2           | Active low, needs pull-up
//!  16  | KEY3           | Active low, needs pull-up
//!  13  | Joystick press | Active high, needs pull-down

// ----- LCD control lines -----
pub const LCD_RST: u8 = 27;
pub const LCD_DC: u8 = 25;
pub const LCD_BL: u8 = 24;

// ----- SPI bus (bus 0, device 0) -----
pub const LCD_CS: u8 = 8; // CE0; asserted by the SPI peripheral, not by us
pub const SPI_SCLK: u8 = 11;
pub const SPI_MOSI: u8 = 10;

// ----- Buttons -----
pub const KEY1: u8 = 21;
pub const KEY2: u8 = 20;
pub const KEY3: u8 = 16;
pub const JOYSTICK_PRESS: u8 = 13;
