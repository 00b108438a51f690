//! Menu and fast-forward buttons

use glam::IVec2;

use super::{ControlState, LayoutContext, RenderSurface, Sprite, VirtualControl};
use crate::geometry::Rect;
use crate::input::ElementPair;

/// Which front-end button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiButtonKind {
    Menu,
    FastForward,
}

/// Front-end button handled by the host rather than the emulated system
#[derive(Debug, Clone)]
pub struct UiButton {
    kind: UiButtonKind,
    region: Rect,
    state: ControlState,
}

impl UiButton {
    pub fn new(kind: UiButtonKind) -> Self {
        Self {
            kind,
            region: Rect::ZERO,
            state: ControlState::Shown,
        }
    }

    pub fn kind(&self) -> UiButtonKind {
        self.kind
    }

    /// Resize. Position is reset; call `set_pos` afterwards.
    pub fn set_size(&mut self, size: i32) {
        if self.region.w != size {
            tracing::debug!("set UI button size: {}", size);
        }
        self.region = Rect::with_size(size, size);
    }

    /// Point is over an active button
    pub fn is_hit(&self, point: IVec2) -> bool {
        self.state.is_active() && self.region.contains(point)
    }

    fn sprite(&self) -> Sprite {
        match self.kind {
            UiButtonKind::Menu => Sprite::Menu,
            UiButtonKind::FastForward => Sprite::FastForward,
        }
    }
}

impl VirtualControl for UiButton {
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

    /// UI buttons have no element indices; see [`UiButton::is_hit`]
    fn hit_test(&self, _point: IVec2) -> ElementPair {
        ElementPair::NONE
    }

    fn draw(&self, surface: &mut dyn RenderSurface, show_hidden: bool) {
        if !self.state.is_drawn(show_hidden) {
            return;
        }
        surface.draw_sprite(self.sprite(), self.region);
    }
}
