//! Directional pad
//!
//! Directions follow a 3x3 keypad grid with y pointing down:
//!
//! ```text
//! 0 1 2
//! 3 . 5
//! 6 7 8
//! ```

use glam::IVec2;

use super::{ControlState, LayoutContext, RenderSurface, Sprite, VirtualControl};
use crate::geometry::{Rect, make_even_rounded_up};
use crate::input::{Element, ElementPair};

/// One of the eight pad directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DPadDirection {
    UpLeft = 0,
    Up = 1,
    UpRight = 2,
    Left = 3,
    Right = 5,
    DownLeft = 6,
    Down = 7,
    DownRight = 8,
}

impl DPadDirection {
    /// Grid cell to direction; the center cell (4) has none
    pub fn from_grid(cell: u8) -> Option<Self> {
        match cell {
            0 => Some(Self::UpLeft),
            1 => Some(Self::Up),
            2 => Some(Self::UpRight),
            3 => Some(Self::Left),
            5 => Some(Self::Right),
            6 => Some(Self::DownLeft),
            7 => Some(Self::Down),
            8 => Some(Self::DownRight),
            _ => None,
        }
    }

    pub fn grid_cell(self) -> u8 {
        self as u8
    }

    /// Up, down, left or right
    pub fn is_cardinal(self) -> bool {
        self.grid_cell() % 2 == 1
    }
}

/// Classification of one pixel in the visualization map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCell {
    NoInput,
    Cardinal,
    Diagonal,
}

/// Per-pixel direction map of the pad's hit area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DPadInputMap {
    pub width: usize,
    pub height: usize,
    cells: Vec<MapCell>,
}

impl DPadInputMap {
    pub fn get(&self, x: usize, y: usize) -> Option<MapCell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Text rendering sampled every `step` pixels.
    /// `.` no input, `+` cardinal, `x` diagonal.
    pub fn to_ascii(&self, step: usize) -> String {
        let step = step.max(1);
        let mut out = String::new();
        for y in (0..self.height).step_by(step) {
            for x in (0..self.width).step_by(step) {
                out.push(match self.cells[y * self.width + x] {
                    MapCell::NoInput => '.',
                    MapCell::Cardinal => '+',
                    MapCell::Diagonal => 'x',
                });
            }
            out.push('\n');
        }
        out
    }
}

fn assert_positive_sensitivity(sensitivity: f32) {
    assert!(
        sensitivity > 0.0,
        "diagonal sensitivity must be positive, got {sensitivity}"
    );
}

/// Directional pad with a rounded diagonal deadzone
#[derive(Debug, Clone)]
pub struct DPad {
    /// Drawn square
    base_area: Rect,
    /// Hit area, 1.5x the drawn square and centered on it
    pad_area: Rect,
    deadzone: i32,
    diagonal_sensitivity: f32,
    state: ControlState,
    visualize_bounds: bool,
    input_map: Option<DPadInputMap>,
}

impl DPad {
    /// # Panics
    ///
    /// Panics unless `diagonal_sensitivity` is positive.
    pub fn new(deadzone: i32, diagonal_sensitivity: f32) -> Self {
        assert_positive_sensitivity(diagonal_sensitivity);
        Self {
            base_area: Rect::ZERO,
            pad_area: Rect::ZERO,
            deadzone,
            diagonal_sensitivity,
            state: ControlState::Shown,
            visualize_bounds: false,
            input_map: None,
        }
    }

    /// Pad edge length for a given face button size
    pub fn size_for_button(button_size: i32) -> i32 {
        make_even_rounded_up((f64::from(button_size) * 2.5) as i32)
    }

    pub fn pad_area(&self) -> Rect {
        self.pad_area
    }

    pub fn deadzone(&self) -> i32 {
        self.deadzone
    }

    pub fn set_deadzone(&mut self, deadzone: i32) {
        if self.deadzone != deadzone {
            self.deadzone = deadzone;
            self.refresh_input_map();
        }
    }

    pub fn diagonal_sensitivity(&self) -> f32 {
        self.diagonal_sensitivity
    }

    /// Panics unless `sensitivity` is positive, like [`DPad::new`].
    pub fn set_diagonal_sensitivity(&mut self, sensitivity: f32) {
        assert_positive_sensitivity(sensitivity);
        if self.diagonal_sensitivity != sensitivity {
            tracing::debug!("set diagonal sensitivity: {}", sensitivity);
            self.diagonal_sensitivity = sensitivity;
            self.refresh_input_map();
        }
    }

    /// Resize the pad. Position is reset; call `set_pos` afterwards.
    pub fn set_size(&mut self, size: i32) {
        let rect = Rect::with_size(size, size);
        let changed = rect.w != self.base_area.w;
        self.base_area = rect;
        let outer = (f64::from(size) * 1.5) as i32;
        self.pad_area = Rect::with_size(outer, outer).centered_at(self.base_area.center());
        if changed {
            self.refresh_input_map();
        }
    }

    pub fn bounding_area_visible(&self) -> bool {
        self.visualize_bounds
    }

    pub fn set_bounding_area_visible(&mut self, on: bool) {
        if self.visualize_bounds == on {
            return;
        }
        self.visualize_bounds = on;
        if on {
            self.refresh_input_map();
        } else if self.input_map.take().is_some() {
            tracing::debug!("dropping d-pad bounding map");
        }
    }

    /// Visualization map, present while bounding areas are shown
    pub fn input_map(&self) -> Option<&DPadInputMap> {
        self.input_map.as_ref()
    }

    /// Build a direction map of the current hit area
    pub fn build_input_map(&self) -> DPadInputMap {
        let width = self.pad_area.w.max(0) as usize;
        let height = self.pad_area.h.max(0) as usize;
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..self.pad_area.h.max(0) {
            for x in 0..self.pad_area.w.max(0) {
                let p = IVec2::new(self.pad_area.x + x, self.pad_area.y + y);
                cells.push(match self.input_at(p) {
                    None => MapCell::NoInput,
                    Some(dir) if dir.is_cardinal() => MapCell::Cardinal,
                    Some(_) => MapCell::Diagonal,
                });
            }
        }
        DPadInputMap {
            width,
            height,
            cells,
        }
    }

    fn refresh_input_map(&mut self) {
        if self.visualize_bounds && !self.pad_area.is_empty() {
            self.input_map = Some(self.build_input_map());
        }
    }

    /// Direction under `point`, or `None` outside the pad or inside the
    /// deadzone
    pub fn input_at(&self, point: IVec2) -> Option<DPadDirection> {
        if !self.pad_area.contains(point) {
            return None;
        }
        let offset = point - self.pad_area.center();
        let (ax, ay) = (offset.x.abs(), offset.y.abs());
        let mut x_deadzone = self.deadzone;
        let mut y_deadzone = self.deadzone;
        // Growing the other axis' deadzone rounds off the diagonal corners
        if ax > self.deadzone {
            y_deadzone = y_deadzone
                .saturating_add(((ax - self.deadzone) as f32 / self.diagonal_sensitivity) as i32);
        }
        if ay > self.deadzone {
            x_deadzone = x_deadzone
                .saturating_add(((ay - self.deadzone) as f32 / self.diagonal_sensitivity) as i32);
        }

        let mut cell: i32 = 4;
        if ax > x_deadzone {
            cell = if offset.x > 0 { 5 } else { 3 };
        }
        if ay > y_deadzone {
            if offset.y > 0 {
                cell += 3;
            } else {
                cell -= 3;
            }
        }
        DPadDirection::from_grid(cell as u8)
    }
}

impl VirtualControl for DPad {
    fn bounds(&self) -> Rect {
        self.base_area
    }

    fn set_pos(&mut self, pos: IVec2, ctx: &LayoutContext) {
        self.base_area.set_center(pos);
        self.base_area.fit_in(ctx.viewport);
        // Input map coordinates are pad-relative
        self.pad_area.set_center(self.base_area.center());
    }

    fn state(&self) -> ControlState {
        self.state
    }

    fn set_state(&mut self, state: ControlState) {
        self.state = state;
    }

    fn hit_test(&self, point: IVec2) -> ElementPair {
        match self.input_at(point) {
            Some(dir) => ElementPair::single(Element(u16::from(dir.grid_cell()))),
            None => ElementPair::NONE,
        }
    }

    fn draw(&self, surface: &mut dyn RenderSurface, show_hidden: bool) {
        if !self.state.is_drawn(show_hidden) {
            return;
        }
        surface.draw_sprite(Sprite::DPad, self.base_area);
        if self.visualize_bounds && self.input_map.is_some() {
            surface.draw_sprite(Sprite::DPadMap, self.pad_area);
        }
    }
}
