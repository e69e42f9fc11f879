//! Key and joystick-press input for the HAT.
//!
//! The three keys are wired active-low with pull-ups; the joystick center
//! is active-high with a pull-down. Presses surface as falling edges with
//! a platform-side debounce. The platform owns the interrupt or polling
//! machinery, so registration is callback-based and the callback may fire
//! on a foreign thread; anything it does to shared display state must go
//! through the same lock as the rest of the drawing.

use alloc::boxed::Box;
use core::fmt;

use log::{debug, warn};

/// Debounce window handed to every registration. Duplicate edges inside
/// the window are suppressed by the platform.
pub const DEBOUNCE_MS: u32 = 300;

/// All pressable inputs on the HAT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Key1,
    Key2,
    Key3,
    JoystickPress,
}

impl Button {
    pub const fn name(self) -> &'static str {
        match self {
            Button::Key1 => "Key 1",
            Button::Key2 => "Key 2",
            Button::Key3 => "Key 3",
            Button::JoystickPress => "Joystick",
        }
    }

    /// Input bias the platform must apply to this line.
    pub const fn pull(self) -> Pull {
        match self {
            Button::JoystickPress => Pull::Down,
            _ => Pull::Up,
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    Up,
    Down,
}

/// Callback fired on a debounced falling edge.
pub type EdgeCallback = Box<dyn FnMut() + Send>;

/// Edge-detection capability of a platform input pin.
///
/// At most one registration may be live per pin; [`ButtonWatcher::rebind`]
/// guarantees that by clearing first. `clear_falling_edge` on a pin with
/// no active registration must be a no-op.
pub trait EdgeInput {
    type Error: fmt::Debug;

    fn set_falling_edge(
        &mut self,
        debounce_ms: u32,
        callback: EdgeCallback,
    ) -> Result<(), Self::Error>;

    fn clear_falling_edge(&mut self) -> Result<(), Self::Error>;
}

/// Registration failure for one button. Button input is best-effort
/// relative to display correctness; callers may log this and move on.
#[derive(Debug)]
pub struct BindError<E> {
    pub button: Button,
    pub source: E,
}

impl<E: fmt::Debug> fmt::Display for BindError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not bind {}: {:?}", self.button, self.source)
    }
}

pub struct ButtonWatcher<P: EdgeInput> {
    key1: P,
    key2: P,
    key3: P,
    joystick: P,
}

impl<P: EdgeInput> ButtonWatcher<P> {
    pub fn new(key1: P, key2: P, key3: P, joystick: P) -> Self {
        Self {
            key1,
            key2,
            key3,
            joystick,
        }
    }

    /// Replace whatever callback is bound to `button` with `callback`.
    ///
    /// The previous registration is always cleared first, so rebinding an
    /// already-bound pin succeeds and only the newest callback fires. A
    /// failed clear is tolerated (the pin may simply not have had a
    /// registration); a failed set is reported and logged.
    pub fn rebind(
        &mut self,
        button: Button,
        callback: EdgeCallback,
    ) -> Result<(), BindError<P::Error>> {
        let pin = self.pin_mut(button);
        if let Err(e) = pin.clear_falling_edge() {
            debug!("[BTN] clear before rebind of {button} failed: {e:?}");
        }
        match pin.set_falling_edge(DEBOUNCE_MS, callback) {
            Ok(()) => Ok(()),
            Err(source) => {
                warn!("[BTN] could not bind {button}: {source:?}");
                Err(BindError { button, source })
            }
        }
    }

    /// Drop the registration on `button`, if any.
    pub fn unbind(&mut self, button: Button) -> Result<(), BindError<P::Error>> {
        self.pin_mut(button)
            .clear_falling_edge()
            .map_err(|source| BindError { button, source })
    }

    fn pin_mut(&mut self, button: Button) -> &mut P {
        match button {
            Button::Key1 => &mut self.key1,
            Button::Key2 => &mut self.key2,
            Button::Key3 => &mut self.key3,
            Button::JoystickPress => &mut self.joystick,
        }
    }
}
