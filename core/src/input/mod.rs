//! Pointer events in, logical button actions out

mod turbo;

pub use turbo::{MAX_TURBO_ACTIONS, TurboActions};

use glam::IVec2;
use std::time::Duration;

/// Number of pointer devices with their own touch slots
pub const MAX_POINTERS: usize = 10;

/// First d-pad element; directions occupy `D_ELEM..D_ELEM + 9`
pub const D_ELEM: u16 = 0;
/// First center button element
pub const C_ELEM: u16 = 9;
/// First face button element (triggers share this range)
pub const F_ELEM: u16 = 11;
/// Size of the gamepad element space
pub const GAMEPAD_ELEMENTS: usize = 19;
/// Size of the on-screen keyboard element space (4 rows of 10 keys)
pub const KEYBOARD_KEYS: usize = 40;

/// Press or release of a logical button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Pushed,
    Released,
}

/// Emulated-system key code with an optional turbo flag in the top bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ButtonCode(u32);

impl ButtonCode {
    pub const TURBO_BIT: u32 = 1 << 31;
    pub const ACTION_MASK: u32 = !Self::TURBO_BIT;

    pub const fn new(code: u32) -> Self {
        Self(code & Self::ACTION_MASK)
    }

    pub const fn turbo(code: u32) -> Self {
        Self((code & Self::ACTION_MASK) | Self::TURBO_BIT)
    }

    /// Packed value as stored in a mapping table
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Key code without the turbo flag
    pub const fn code(self) -> u32 {
        self.0 & Self::ACTION_MASK
    }

    pub const fn is_turbo(self) -> bool {
        self.0 & Self::TURBO_BIT != 0
    }
}

/// Gamepad element to key code table, indexed by [`Element`]
pub type GamepadMap = [ButtonCode; GAMEPAD_ELEMENTS];
/// Keyboard key index to key code table
pub type KeyboardMap = [ButtonCode; KEYBOARD_KEYS];

/// Index of one virtual input.
///
/// In gamepad mode the index lives in the `D_ELEM`/`C_ELEM`/`F_ELEM`
/// ranges; in keyboard mode it is a flat key index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(pub u16);

impl Element {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Up to two elements resolved from one pointer position.
///
/// Slot 0 is always filled before slot 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementPair([Option<Element>; 2]);

impl ElementPair {
    pub const NONE: Self = Self([None, None]);

    pub fn single(elem: Element) -> Self {
        Self([Some(elem), None])
    }

    pub fn pair(first: Element, second: Element) -> Self {
        Self([Some(first), Some(second)])
    }

    /// Append an element; returns `false` when both slots are taken
    pub fn push(&mut self, elem: Element) -> bool {
        match self.0 {
            [None, _] => self.0[0] = Some(elem),
            [Some(_), None] => self.0[1] = Some(elem),
            _ => return false,
        }
        true
    }

    pub fn is_full(&self) -> bool {
        self.0[1].is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0[0].is_none()
    }

    pub fn contains(&self, elem: Element) -> bool {
        self.0.contains(&Some(elem))
    }

    pub fn first(&self) -> Option<Element> {
        self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Element> + '_ {
        self.0.iter().flatten().copied()
    }

    /// Shift every held element by `base`
    pub fn offset(self, base: u16) -> Self {
        Self(self.0.map(|e| e.map(|Element(i)| Element(i + base))))
    }
}

/// Pointer button that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Touch contact or primary mouse button
    Left,
    Right,
    Middle,
}

/// Phase of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    Pushed,
    /// Movement, with `held` set while the button stays down
    Moved { held: bool },
    Released,
}

/// Pointer event delivered by the host event loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Finger or mouse id
    pub device: usize,
    pub pos: IVec2,
    pub button: PointerButton,
    pub state: PointerState,
}

impl PointerEvent {
    pub fn pushed(device: usize, pos: IVec2) -> Self {
        Self {
            device,
            pos,
            button: PointerButton::Left,
            state: PointerState::Pushed,
        }
    }

    pub fn dragged(device: usize, pos: IVec2) -> Self {
        Self {
            device,
            pos,
            button: PointerButton::Left,
            state: PointerState::Moved { held: true },
        }
    }

    pub fn released(device: usize, pos: IVec2) -> Self {
        Self {
            device,
            pos,
            button: PointerButton::Left,
            state: PointerState::Released,
        }
    }

    /// Fresh press of the button
    pub fn is_push(&self) -> bool {
        self.state == PointerState::Pushed
    }

    /// Primary button is down: fresh press or drag, not hover
    pub fn is_primary_held(&self) -> bool {
        self.button == PointerButton::Left
            && matches!(
                self.state,
                PointerState::Pushed | PointerState::Moved { held: true }
            )
    }
}

/// Receiver of logical input produced by the overlay.
///
/// Implemented by the emulation core glue.
pub trait InputSink {
    /// Apply a press or release of `code` to the emulated system
    fn handle_input_action(&mut self, action: InputAction, code: u32);

    /// Request haptic feedback. Default does nothing.
    fn vibrate(&mut self, _duration: Duration) {}
}
