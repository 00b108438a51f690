//! Center buttons (select/start style)

use glam::IVec2;

use super::{ControlState, LayoutContext, RenderSurface, Sprite, VirtualControl};
use crate::geometry::{Rect, make_even_rounded_up};
use crate::input::{Element, ElementPair};

/// One or two buttons sharing a centered strip
#[derive(Debug, Clone)]
pub struct CenterButtons {
    count: u8,
    button_size: i32,
    spacing: i32,
    extra_x_size: f32,
    region: Rect,
    sprites: [Rect; 2],
    hits: [Rect; 2],
    state: ControlState,
    show_bounding_area: bool,
}

impl CenterButtons {
    pub fn new(count: u8) -> Self {
        assert!(
            (1..=2).contains(&count),
            "{count} center buttons; expected 1 or 2"
        );
        Self {
            count,
            button_size: 0,
            spacing: 0,
            extra_x_size: 0.0,
            region: Rect::ZERO,
            sprites: [Rect::ZERO; 2],
            hits: [Rect::ZERO; 2],
            state: ControlState::Shown,
            show_bounding_area: false,
        }
    }

    pub fn count(&self) -> u8 {
        self.count
    }

    pub fn set_show_bounding_area(&mut self, on: bool) {
        self.show_bounding_area = on;
    }

    /// Resize for a new button size. Position is reset; call `set_pos`
    /// afterwards.
    pub fn set_size(&mut self, button_size: i32, spacing: i32, extra_x_size: f32) {
        self.button_size = button_size;
        self.spacing = spacing;
        self.extra_x_size = extra_x_size;
        let width = if self.count == 2 {
            button_size * 2 + spacing
        } else {
            button_size
        };
        let height = make_even_rounded_up((f64::from(button_size) * 1.25) as i32);
        self.region = Rect::with_size(width, height);
    }

    pub fn sprite_rect(&self, index: usize) -> Rect {
        self.sprites[index]
    }

    pub fn hit_rect(&self, index: usize) -> Rect {
        self.hits[index]
    }
}

impl VirtualControl for CenterButtons {
    fn bounds(&self) -> Rect {
        self.region
    }

    fn set_pos(&mut self, pos: IVec2, ctx: &LayoutContext) {
        self.region.set_center(pos);
        self.region.fit_in(ctx.viewport);
        let size = self.button_size;
        let extra = self.spacing + (size as f32 * self.extra_x_size) as i32;
        let sprite_y = self.region.center().y - self.region.h / 6;
        let r = self.region;

        self.hits[0] = Rect::new(r.x - extra / 2, r.y, size + extra, r.h);
        if self.count == 2 {
            self.hits[1] = Rect::new(r.right() - size - extra / 2, r.y, size + extra, r.h);
            self.sprites[0] = Rect::new(r.x, sprite_y, size, size / 2);
            self.sprites[1] = Rect::new(r.right() - size, sprite_y, size, size / 2);
        } else {
            self.sprites[0] = Rect::new(r.x, sprite_y, r.w, size / 2);
        }
    }

    fn state(&self) -> ControlState {
        self.state
    }

    fn set_state(&mut self, state: ControlState) {
        self.state = state;
    }

    fn hit_test(&self, point: IVec2) -> ElementPair {
        let mut hits = ElementPair::NONE;
        if !self.state.is_active() {
            return hits;
        }
        for (i, rect) in self.hits[..self.count as usize].iter().enumerate() {
            if rect.contains(point) {
                hits.push(Element(i as u16));
            }
        }
        hits
    }

    fn draw(&self, surface: &mut dyn RenderSurface, show_hidden: bool) {
        if !self.state.is_drawn(show_hidden) {
            return;
        }
        let count = self.count as usize;
        if self.show_bounding_area {
            for rect in &self.hits[..count] {
                surface.draw_rect(*rect);
            }
        }
        for (i, rect) in self.sprites[..count].iter().enumerate() {
            surface.draw_sprite(Sprite::CenterButton(i as u8), *rect);
        }
    }
}
