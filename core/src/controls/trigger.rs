//! Stand-alone trigger buttons

use glam::IVec2;

use super::{ControlState, LayoutContext, RenderSurface, Sprite, VirtualControl};
use crate::geometry::Rect;
use crate::input::{Element, ElementPair};

/// A square trigger button placed apart from the face buttons.
///
/// Triggers share the face button element range: the left trigger is face
/// button `count - 2` and the right one `count - 1`.
#[derive(Debug, Clone)]
pub struct Trigger {
    face_index: u8,
    region: Rect,
    state: ControlState,
    show_bounding_area: bool,
}

impl Trigger {
    pub fn left(face_count: u8) -> Self {
        Self::new(face_count.saturating_sub(2))
    }

    pub fn right(face_count: u8) -> Self {
        Self::new(face_count.saturating_sub(1))
    }

    fn new(face_index: u8) -> Self {
        Self {
            face_index,
            region: Rect::ZERO,
            state: ControlState::Shown,
            show_bounding_area: false,
        }
    }

    /// Face button element this trigger reports
    pub fn face_index(&self) -> u8 {
        self.face_index
    }

    pub fn set_show_bounding_area(&mut self, on: bool) {
        self.show_bounding_area = on;
    }

    /// Resize. Position is reset; call `set_pos` afterwards.
    pub fn set_size(&mut self, button_size: i32) {
        self.region = Rect::with_size(button_size, button_size);
    }
}

impl VirtualControl for Trigger {
    fn bounds(&self) -> Rect {
        self.region
    }

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
        if self.state.is_active() && self.region.contains(point) {
            ElementPair::single(Element(u16::from(self.face_index)))
        } else {
            ElementPair::NONE
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface, show_hidden: bool) {
        if !self.state.is_drawn(show_hidden) {
            return;
        }
        if self.show_bounding_area {
            surface.draw_rect(self.region);
        }
        surface.draw_sprite(Sprite::FaceButton(self.face_index), self.region);
    }
}
