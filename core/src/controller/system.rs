//! Description of the emulated system's controls

use serde::{Deserialize, Serialize};

/// Buttons the emulated system exposes, which decides what the overlay
/// shows and how the face buttons are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInputLayout {
    /// Face buttons including triggers: 2, 3, 4, 6 or 8
    pub face_buttons: u8,
    /// 1 or 2
    pub center_buttons: u8,
    /// The last two face buttons are shoulder triggers
    pub has_trigger_buttons: bool,
    /// Swap the visual order of two-button and six-button layouts
    pub reversed_face_layout: bool,
    pub has_keyboard: bool,
}

impl Default for SystemInputLayout {
    fn default() -> Self {
        Self {
            face_buttons: 2,
            center_buttons: 2,
            has_trigger_buttons: false,
            reversed_face_layout: false,
            has_keyboard: false,
        }
    }
}

impl SystemInputLayout {
    /// Two face buttons, select and start
    pub fn two_button() -> Self {
        Self::default()
    }

    /// Four face buttons plus two shoulder triggers
    pub fn with_triggers() -> Self {
        Self {
            face_buttons: 6,
            has_trigger_buttons: true,
            ..Self::default()
        }
    }

    /// Two face buttons and an on-screen keyboard
    pub fn computer() -> Self {
        Self {
            has_keyboard: true,
            ..Self::default()
        }
    }
}
