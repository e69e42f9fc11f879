//! Recording hardware doubles for the unit tests. The DC pin and the SPI
//! device share one wire state so transfers get classified the way the
//! controller would see them.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{self, Operation, SpiDevice};

/// One DC-classified transfer as seen on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Xfer {
    Command(u8),
    Data(Vec<u8>),
}

#[derive(Default)]
struct WireState {
    dc_high: bool,
    xfers: Vec<Xfer>,
    fail_writes: bool,
}

/// Shared bus state; hand out `dc()` and `spi()` to the code under test.
#[derive(Clone, Default)]
pub struct Wire(Rc<RefCell<WireState>>);

impl Wire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dc(&self) -> DcPin {
        DcPin(Rc::clone(&self.0))
    }

    pub fn spi(&self) -> SpiPort {
        SpiPort(Rc::clone(&self.0))
    }

    pub fn fail_writes(&self, fail: bool) {
        self.0.borrow_mut().fail_writes = fail;
    }

    pub fn xfers(&self) -> Vec<Xfer> {
        self.0.borrow().xfers.clone()
    }
}

pub struct DcPin(Rc<RefCell<WireState>>);

impl digital::ErrorType for DcPin {
    type Error = Infallible;
}

impl OutputPin for DcPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().dc_high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().dc_high = true;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireError;

impl spi::Error for WireError {
    fn kind(&self) -> spi::ErrorKind {
        spi::ErrorKind::Other
    }
}

pub struct SpiPort(Rc<RefCell<WireState>>);

impl spi::ErrorType for SpiPort {
    type Error = WireError;
}

impl SpiDevice for SpiPort {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut state = self.0.borrow_mut();
        if state.fail_writes {
            return Err(WireError);
        }
        for op in operations.iter() {
            match op {
                Operation::Write(bytes) => {
                    if state.dc_high {
                        state.xfers.push(Xfer::Data(bytes.to_vec()));
                    } else {
                        assert_eq!(bytes.len(), 1, "command phase must be one byte");
                        state.xfers.push(Xfer::Command(bytes[0]));
                    }
                }
                _ => panic!("panel link is write-only"),
            }
        }
        Ok(())
    }
}

/// Output pin double recording every level it is driven to.
#[derive(Clone, Default)]
pub struct LevelPin(Rc<RefCell<Vec<bool>>>);

impl LevelPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn levels(&self) -> Vec<bool> {
        self.0.borrow().clone()
    }
}

impl digital::ErrorType for LevelPin {
    type Error = Infallible;
}

impl OutputPin for LevelPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(true);
        Ok(())
    }
}

/// Delay double recording each requested pause in milliseconds.
#[derive(Clone, Default)]
pub struct SpyDelay(Rc<RefCell<Vec<u32>>>);

impl SpyDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses_ms(&self) -> Vec<u32> {
        self.0.borrow().clone()
    }
}

impl DelayNs for SpyDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.0.borrow_mut().push(us / 1000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().push(ms);
    }
}
