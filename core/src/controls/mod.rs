//! On-screen controls and the interface the controller drives them through
//!
//! Every positionable control implements [`VirtualControl`]. Drawing goes
//! through [`RenderSurface`], which the host backs with its own renderer.

pub mod buttons;
pub mod center;
pub mod dpad;
pub mod keyboard;
pub mod trigger;
pub mod ui_button;

pub use buttons::{ButtonLayoutKey, ButtonSlot, FaceButtons, RowParams, layout_button_rows};
pub use center::CenterButtons;
pub use dpad::{DPad, DPadDirection, DPadInputMap, MapCell};
pub use keyboard::{KeyboardMode, VirtualKeyboard};
pub use trigger::Trigger;
pub use ui_button::{UiButton, UiButtonKind};

use glam::{IVec2, Vec4};

use crate::geometry::Rect;
use crate::input::ElementPair;

/// Explicit layout inputs shared by every placement call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Screen area every control is fitted into
    pub viewport: Rect,
}

impl LayoutContext {
    pub fn new(viewport: Rect) -> Self {
        Self { viewport }
    }
}

/// Visibility and activity of a control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ControlState {
    /// Not drawn and not hit tested
    Off,
    /// Drawn and active
    #[default]
    Shown,
    /// Active but drawn only when hidden controls are shown
    Hidden,
}

impl ControlState {
    pub fn is_active(self) -> bool {
        self != ControlState::Off
    }

    pub fn is_drawn(self, show_hidden: bool) -> bool {
        match self {
            ControlState::Off => false,
            ControlState::Shown => true,
            ControlState::Hidden => show_hidden,
        }
    }
}

/// Positionable controls in element-index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    DPad,
    CenterButtons,
    FaceButtons,
    Menu,
    FastForward,
    LeftTrigger,
    RightTrigger,
}

impl ControlId {
    pub const ALL: [ControlId; 7] = [
        ControlId::DPad,
        ControlId::CenterButtons,
        ControlId::FaceButtons,
        ControlId::Menu,
        ControlId::FastForward,
        ControlId::LeftTrigger,
        ControlId::RightTrigger,
    ];

    /// Map a stored element index back to its control.
    ///
    /// # Panics
    ///
    /// Panics on an index outside `0..7`; indices come from the
    /// controller's own element count.
    pub fn from_index(idx: usize) -> Self {
        match Self::ALL.get(idx) {
            Some(id) => *id,
            None => panic!("invalid control index {idx}"),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Texture region a sprite draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    DPad,
    /// Per-pixel d-pad input map shown with bounding-area visualization
    DPadMap,
    CenterButton(u8),
    FaceButton(u8),
    Keyboard(KeyboardMode),
    Menu,
    FastForward,
}

/// Draw-call sink implemented by the host renderer
pub trait RenderSurface {
    /// Modulation color for subsequent draws
    fn set_color(&mut self, color: Vec4);

    /// Draw a textured sprite into `rect`
    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect);

    /// Draw an untextured rectangle, used for hit-region visualization
    fn draw_rect(&mut self, rect: Rect);
}

/// Common interface of every on-screen control
pub trait VirtualControl {
    /// Region used for placement, in pixels
    fn bounds(&self) -> Rect;

    /// Center the control on `pos` and fit it into the viewport
    fn set_pos(&mut self, pos: IVec2, ctx: &LayoutContext);

    fn state(&self) -> ControlState;

    fn set_state(&mut self, state: ControlState);

    /// Elements under `point`, in this control's local element numbering
    fn hit_test(&self, point: IVec2) -> ElementPair;

    /// Issue draw calls. `show_hidden` also draws [`ControlState::Hidden`]
    /// controls.
    fn draw(&self, surface: &mut dyn RenderSurface, show_hidden: bool);
}
