//! Face button layout engine
//!
//! Buttons are laid out left to right from the bottom-left corner of the
//! face button region, wrapping upwards into a new row every
//! `count / rows` buttons. Each button gets a drawn sprite rectangle and a
//! larger hit rectangle.

use glam::IVec2;

use super::{ControlState, LayoutContext, RenderSurface, Sprite, VirtualControl};
use crate::geometry::Rect;
use crate::input::{Element, ElementPair};

/// Most face buttons any system exposes
pub const MAX_FACE_BUTTONS: usize = 8;

/// Spacing and padding inputs of a layout pass, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowParams {
    pub size: i32,
    pub spacing: i32,
    pub row_shift: i32,
    pub stagger: i32,
    /// Extra hit width as a fraction of `size`
    pub extra_x_size: f32,
    /// Extra hit height for a single row
    pub extra_y_size: f32,
    /// Extra hit height when there are several rows
    pub extra_y_size_multi_row: f32,
}

impl RowParams {
    /// Total hit padding for a layout with `rows` rows
    pub fn extra_hit_size(&self, rows: usize) -> IVec2 {
        let extra_y_size = if rows == 1 {
            self.extra_y_size
        } else {
            self.extra_y_size_multi_row
        };
        let x_space = if self.extra_x_size != 0.0 {
            self.spacing * 2
        } else {
            self.spacing
        };
        let y_space = if extra_y_size != 0.0 {
            self.spacing * 2
        } else {
            self.spacing
        };
        IVec2::new(
            x_space + (self.size as f32 * self.extra_x_size) as i32,
            y_space + (self.size as f32 * extra_y_size) as i32,
        )
    }

    /// Size of the region holding `count` buttons in `rows` rows
    pub fn region_size(&self, count: usize, rows: usize) -> IVec2 {
        let rows = rows.max(1) as i32;
        let per_row = (count as i32 / rows).max(1);
        IVec2::new(
            self.size * per_row + self.spacing * (per_row - 1) + (self.row_shift * (rows - 1)).abs(),
            self.size * rows + self.spacing * (rows - 1) + (self.stagger * (per_row - 1)).abs(),
        )
    }
}

/// Placement of one face button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSlot {
    /// Logical face button occupying the slot
    pub index: u8,
    pub sprite: Rect,
    pub hit: Rect,
}

/// Lay out `order.len()` buttons in `rows` rows inside `region`.
///
/// `order[i]` is the logical button placed in visual slot `i`.
pub fn layout_button_rows(
    order: &[u8],
    rows: usize,
    region: Rect,
    params: &RowParams,
) -> Vec<ButtonSlot> {
    let rows = rows.max(1);
    let per_row = (order.len() / rows).max(1);
    let extra = params.extra_hit_size(rows);
    let left = region.x;
    let bottom = region.bottom();

    let mut row = 0i32;
    let mut pos_in_row = 0usize;
    let mut y_offset = if params.stagger < 0 {
        -params.stagger * (per_row as i32 - 1)
    } else {
        0
    };
    let mut x_offset = -params.row_shift * (rows as i32 - 1);
    let mut stagger_offset = 0;

    let mut slots = Vec::with_capacity(order.len());
    for &index in order {
        let sprite = Rect::new(
            left + x_offset,
            bottom - (y_offset + stagger_offset) - params.size,
            params.size,
            params.size,
        );
        x_offset += params.size + params.spacing;
        stagger_offset += params.stagger;
        pos_in_row += 1;
        if pos_in_row == per_row {
            row += 1;
            y_offset += params.size + params.spacing;
            stagger_offset = 0;
            x_offset = -params.row_shift * ((rows as i32 - 1) - row);
            pos_in_row = 0;
        }
        slots.push(ButtonSlot {
            index,
            sprite,
            hit: sprite.inflated(extra),
        });
    }
    slots
}

/// Selects the visual ordering table for a system's button arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonLayoutKey {
    /// System without trigger buttons, keyed by active button count
    NoTriggers { count: u8, reversed: bool },
    /// Triggers share the face button rows
    InlineTriggers { count: u8 },
    /// Triggers are placed on their own; only the remaining buttons are
    /// laid out here
    SeparateTriggers { count: u8 },
}

impl ButtonLayoutKey {
    /// Visual slot to logical button table
    pub fn order(self) -> &'static [u8] {
        match self {
            Self::NoTriggers { count: 6, reversed: true } => &[0, 1, 2, 3, 4, 5],
            Self::NoTriggers { count: 6, reversed: false } => &[2, 1, 0, 3, 4, 5],
            Self::NoTriggers { count: 4, .. } => &[0, 1, 2, 3],
            Self::NoTriggers { count: 3, .. } => &[0, 1, 2],
            Self::NoTriggers { reversed: true, .. } => &[0, 1],
            Self::NoTriggers { reversed: false, .. } => &[1, 0],
            Self::InlineTriggers { count: 8 } => &[0, 1, 2, 6, 3, 4, 5, 7],
            Self::InlineTriggers { count: 6 } => &[1, 0, 5, 3, 2, 4],
            Self::InlineTriggers { .. } => &[1, 0, 2, 3],
            Self::SeparateTriggers { count: 8 } => &[0, 1, 2, 3, 4, 5],
            Self::SeparateTriggers { count: 6 } => &[1, 0, 3, 2],
            Self::SeparateTriggers { .. } => &[1, 0],
        }
    }

    /// Number of rows for this arrangement
    pub fn rows(self) -> usize {
        match self {
            Self::NoTriggers { count, .. } => {
                if count > 3 {
                    2
                } else {
                    1
                }
            }
            Self::InlineTriggers { .. } => 2,
            Self::SeparateTriggers { count } => {
                if count < 6 {
                    1
                } else {
                    2
                }
            }
        }
    }
}

/// Face buttons, plus inline triggers when the system has them
#[derive(Debug, Clone)]
pub struct FaceButtons {
    /// Buttons the system defines, triggers included
    face_count: u8,
    /// Buttons the user chose to show
    active_count: u8,
    has_triggers: bool,
    triggers_inline: bool,
    reversed: bool,
    params: RowParams,
    region: Rect,
    sprites: [Rect; MAX_FACE_BUTTONS],
    hits: [Rect; MAX_FACE_BUTTONS],
    state: ControlState,
    show_bounding_area: bool,
}

impl FaceButtons {
    pub fn new(face_count: u8, has_triggers: bool, triggers_inline: bool, reversed: bool) -> Self {
        assert!(
            face_count as usize <= MAX_FACE_BUTTONS,
            "{face_count} face buttons exceeds the maximum of {MAX_FACE_BUTTONS}"
        );
        Self {
            face_count,
            active_count: face_count,
            has_triggers,
            triggers_inline,
            reversed,
            params: RowParams {
                size: 0,
                spacing: 0,
                row_shift: 0,
                stagger: 0,
                extra_x_size: 0.0,
                extra_y_size: 0.0,
                extra_y_size_multi_row: 0.0,
            },
            region: Rect::ZERO,
            sprites: [Rect::ZERO; MAX_FACE_BUTTONS],
            hits: [Rect::ZERO; MAX_FACE_BUTTONS],
            state: ControlState::Shown,
            show_bounding_area: false,
        }
    }

    pub fn face_count(&self) -> u8 {
        self.face_count
    }

    /// Triggers are laid out apart from the face buttons
    pub fn separate_triggers(&self) -> bool {
        self.has_triggers && !self.triggers_inline
    }

    pub fn active_count(&self) -> u8 {
        self.active_count
    }

    /// Limit the number of shown buttons and re-lay them out around the
    /// current center. Ignored for the buttons left after separating
    /// triggers.
    pub fn set_active_count(&mut self, count: u8, ctx: &LayoutContext) {
        let count = count.clamp(1, self.face_count.max(1));
        if count == self.active_count {
            return;
        }
        let center = self.region.center();
        self.active_count = count;
        self.set_params(self.params);
        self.set_pos(center, ctx);
    }

    pub fn set_triggers_inline(&mut self, inline: bool) {
        self.triggers_inline = inline;
    }

    pub fn set_show_bounding_area(&mut self, on: bool) {
        self.show_bounding_area = on;
    }

    /// Number of buttons laid out in this region
    pub fn laid_out_count(&self) -> usize {
        if self.separate_triggers() {
            self.face_count.saturating_sub(2) as usize
        } else {
            self.active_count as usize
        }
    }

    pub fn layout_key(&self) -> ButtonLayoutKey {
        if !self.has_triggers {
            ButtonLayoutKey::NoTriggers {
                count: self.active_count,
                reversed: self.reversed,
            }
        } else if self.triggers_inline {
            ButtonLayoutKey::InlineTriggers {
                count: self.face_count,
            }
        } else {
            ButtonLayoutKey::SeparateTriggers {
                count: self.face_count,
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.layout_key().rows()
    }

    /// Apply new size parameters and resize the region. Position is reset;
    /// call `set_pos` afterwards.
    pub fn set_params(&mut self, params: RowParams) {
        self.params = params;
        let size = params.region_size(self.laid_out_count(), self.rows());
        self.region = Rect::from_pos_size(IVec2::ZERO, size);
    }

    pub fn sprite_rect(&self, index: usize) -> Rect {
        self.sprites[index]
    }

    pub fn hit_rect(&self, index: usize) -> Rect {
        self.hits[index]
    }
}

impl VirtualControl for FaceButtons {
    fn bounds(&self) -> Rect {
        self.region
    }

    fn set_pos(&mut self, pos: IVec2, ctx: &LayoutContext) {
        self.region.set_center(pos);
        self.region.fit_in(ctx.viewport);
        let key = self.layout_key();
        let slots = layout_button_rows(key.order(), key.rows(), self.region, &self.params);
        for slot in slots {
            let i = slot.index as usize;
            self.sprites[i] = slot.sprite;
            self.hits[i] = slot.hit;
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
        for (i, rect) in self.hits[..self.laid_out_count()].iter().enumerate() {
            if rect.contains(point) {
                hits.push(Element(i as u16));
                if hits.is_full() {
                    break;
                }
            }
        }
        hits
    }

    fn draw(&self, surface: &mut dyn RenderSurface, show_hidden: bool) {
        if !self.state.is_drawn(show_hidden) {
            return;
        }
        let count = self.laid_out_count();
        if self.show_bounding_area {
            for rect in &self.hits[..count] {
                surface.draw_rect(*rect);
            }
        }
        for (i, rect) in self.sprites[..count].iter().enumerate() {
            surface.draw_sprite(Sprite::FaceButton(i as u8), *rect);
        }
    }
}
