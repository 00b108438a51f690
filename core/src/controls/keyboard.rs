//! On-screen keyboard
//!
//! A fixed grid of 4 rows by 10 columns. The second row (in primary mode)
//! and the third row are inset by half a key and hold 9 keys.

use glam::IVec2;

use super::{ControlState, LayoutContext, RenderSurface, Sprite, VirtualControl};
use crate::geometry::Rect;
use crate::input::{Element, ElementPair};

/// Keys per row in the flat key index
pub const KEYBOARD_COLS: i32 = 10;
/// Key that closes the keyboard
pub const KEY_DISMISS: u16 = 30;
/// Keys that switch between primary and shifted layouts
pub const KEY_MODE_TOGGLE: [u16; 2] = [31, 32];

/// Keyboard layout page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyboardMode {
    #[default]
    Primary,
    Shifted,
}

impl KeyboardMode {
    pub fn toggled(self) -> Self {
        match self {
            KeyboardMode::Primary => KeyboardMode::Shifted,
            KeyboardMode::Shifted => KeyboardMode::Primary,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Keyboard sprite and hit grid
#[derive(Debug, Clone)]
pub struct VirtualKeyboard {
    mode: KeyboardMode,
    region: Rect,
    key_w: i32,
    key_h: i32,
    state: ControlState,
}

impl Default for VirtualKeyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualKeyboard {
    pub fn new() -> Self {
        Self {
            mode: KeyboardMode::Primary,
            region: Rect::ZERO,
            key_w: 0,
            key_h: 0,
            state: ControlState::Shown,
        }
    }

    pub fn mode(&self) -> KeyboardMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: KeyboardMode) {
        self.mode = mode;
    }

    pub fn key_size(&self) -> IVec2 {
        IVec2::new(self.key_w, self.key_h)
    }

    /// Size and dock the keyboard at the bottom of the viewport.
    ///
    /// The keyboard keeps a 3:2 aspect, is at most ten buttons wide, and
    /// leaves `button_size * 3 / 4` pixels below and above it.
    pub fn place(&mut self, button_size: i32, ctx: &LayoutContext) {
        let viewport = ctx.viewport;
        let y_offset = button_size * 3 / 4;
        let mut width = (button_size * 10).min(viewport.w);
        let mut height = width * 2 / 3;
        let v_area = viewport.h - y_offset * 2;
        if height > v_area {
            height = v_area.max(0);
            width = height * 3 / 2;
        }
        self.region = Rect::new(
            viewport.x + (viewport.w - width) / 2,
            viewport.bottom() - y_offset - height,
            width,
            height,
        );
        self.key_w = width / KEYBOARD_COLS + width / 256;
        self.key_h = height / 4;
        tracing::debug!("key size {}x{}", self.key_w, self.key_h);
    }

    /// Flat key index under `point`
    pub fn key_at(&self, point: IVec2) -> Option<u16> {
        if !self.region.contains(point) || self.key_w <= 0 || self.key_h <= 0 {
            return None;
        }
        let mut rel_x = point.x - self.region.x;
        let rel_y = point.y - self.region.y;
        let mut row = rel_y / self.key_h;
        let col;
        if (self.mode == KeyboardMode::Primary && row == 1) || row == 2 {
            rel_x -= self.key_w / 2;
            col = if rel_x < 0 {
                0
            } else {
                (rel_x / self.key_w).min(8)
            };
        } else {
            row = row.min(3);
            col = (rel_x / self.key_w).min(9);
        }
        let idx = col + row * KEYBOARD_COLS;
        tracing::trace!("pointer {},{} key @ {},{}, idx {}", rel_x, rel_y, row, col, idx);
        Some(idx as u16)
    }
}

impl VirtualControl for VirtualKeyboard {
    fn bounds(&self) -> Rect {
        self.region
    }

    /// Center on `pos`; [`VirtualKeyboard::place`] is the usual entry point
    fn set_pos(&mut self, pos: IVec2, ctx: &LayoutContext) {
        self.region.set_center(pos);
        self.region.fit_in(ctx.viewport);
    }

    fn state(&self) -> ControlState {
        self.state
    }

    fn set_state(&mut self, state: ControlState) {
        self.state = state;
    }

    fn hit_test(&self, point: IVec2) -> ElementPair {
        match self.key_at(point) {
            Some(key) => ElementPair::single(Element(key)),
            None => ElementPair::NONE,
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface, show_hidden: bool) {
        if self.state.is_drawn(show_hidden) {
            surface.draw_sprite(Sprite::Keyboard(self.mode), self.region);
        }
    }
}
