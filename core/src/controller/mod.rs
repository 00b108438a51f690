//! Virtual controller: owns every control and turns pointer events into
//! logical button presses

mod system;
#[cfg(test)]
mod tests;

pub use system::SystemInputLayout;

use glam::{IVec2, Vec4};
use std::time::Duration;

use crate::config::{Config, InputConfig, LayoutConfig};
use crate::controls::keyboard::{KEY_DISMISS, KEY_MODE_TOGGLE};
use crate::controls::{
    CenterButtons, ControlId, ControlState, DPad, FaceButtons, KeyboardMode, LayoutContext,
    RenderSurface, RowParams, Trigger, UiButton, UiButtonKind, VirtualControl, VirtualKeyboard,
};
use crate::geometry::Rect;
use crate::input::{
    ButtonCode, C_ELEM, D_ELEM, Element, ElementPair, F_ELEM, GAMEPAD_ELEMENTS, GamepadMap,
    InputAction, InputSink, KEYBOARD_KEYS, KeyboardMap, MAX_POINTERS, PointerEvent, TurboActions,
};

pub struct VController {
    system: SystemInputLayout,
    layout: LayoutConfig,
    input: InputConfig,

    dpad: DPad,
    center: CenterButtons,
    face: FaceButtons,
    l_trigger: Trigger,
    r_trigger: Trigger,
    menu: UiButton,
    fast_forward: UiButton,
    keyboard: VirtualKeyboard,

    /// Keyboard shown instead of the gamepad
    keyboard_active: bool,
    gamepad_map: GamepadMap,
    /// One table per keyboard mode
    keyboard_maps: [KeyboardMap; 2],

    /// Elements held by each pointer device
    held: [ElementPair; MAX_POINTERS],
    turbo: TurboActions,
    show_bounding_area: bool,
}

impl VController {
    /// Create a controller for `system`. Controls have no size until
    /// [`VController::resize`] or [`VController::set_base_button_size`]
    /// runs.
    pub fn new(system: SystemInputLayout, config: &Config) -> Self {
        let layout = config.layout.clone();
        let face = FaceButtons::new(
            system.face_buttons,
            system.has_trigger_buttons,
            layout.triggers_inline,
            system.reversed_face_layout,
        );
        let mut ctrl = Self {
            dpad: DPad::new(layout.dpad_deadzone, layout.dpad_diagonal_sensitivity),
            center: CenterButtons::new(system.center_buttons),
            face,
            l_trigger: Trigger::left(system.face_buttons),
            r_trigger: Trigger::right(system.face_buttons),
            menu: UiButton::new(UiButtonKind::Menu),
            fast_forward: UiButton::new(UiButtonKind::FastForward),
            keyboard: VirtualKeyboard::new(),
            keyboard_active: false,
            gamepad_map: [ButtonCode::default(); GAMEPAD_ELEMENTS],
            keyboard_maps: [[ButtonCode::default(); KEYBOARD_KEYS]; 2],
            held: [ElementPair::NONE; MAX_POINTERS],
            turbo: TurboActions::new(config.input.turbo_frames),
            show_bounding_area: false,
            system,
            layout,
            input: config.input.clone(),
        };
        ctrl.set_bounding_area_visible(ctrl.layout.show_bounding_area);
        ctrl
    }

    pub fn system(&self) -> &SystemInputLayout {
        &self.system
    }

    pub fn layout_config(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Swap in new layout settings. Sizes and positions must be reapplied
    /// afterwards.
    pub fn set_layout_config(&mut self, layout: LayoutConfig) {
        self.dpad.set_deadzone(layout.dpad_deadzone);
        self.dpad.set_diagonal_sensitivity(layout.dpad_diagonal_sensitivity);
        self.face.set_triggers_inline(layout.triggers_inline);
        self.set_bounding_area_visible(layout.show_bounding_area);
        self.layout = layout;
    }

    /// Swap in new input settings. Codes already on turbo keep repeating
    /// with the new cycle length.
    pub fn set_input_config(&mut self, input: InputConfig) {
        self.turbo.set_frames(input.turbo_frames);
        self.input = input;
    }

    pub fn dpad(&self) -> &DPad {
        &self.dpad
    }

    pub fn dpad_mut(&mut self) -> &mut DPad {
        &mut self.dpad
    }

    pub fn face_buttons(&self) -> &FaceButtons {
        &self.face
    }

    pub fn center_buttons(&self) -> &CenterButtons {
        &self.center
    }

    pub fn keyboard(&self) -> &VirtualKeyboard {
        &self.keyboard
    }

    pub fn has_triggers(&self) -> bool {
        self.system.has_trigger_buttons
    }

    /// Triggers are positioned as their own controls
    pub fn separate_triggers(&self) -> bool {
        self.face.separate_triggers()
    }

    /// Number of positionable controls; indices follow [`ControlId`]
    pub fn num_elements(&self) -> usize {
        if self.separate_triggers() { 7 } else { 5 }
    }

    /// Show only the first `count` face buttons. The face region keeps its
    /// center.
    pub fn set_active_face_buttons(&mut self, count: u8, ctx: &LayoutContext) {
        self.face.set_active_count(count, ctx);
    }

    /// Size every control from the configured button sizes
    pub fn resize(&mut self, ctx: &LayoutContext) {
        self.set_base_button_size(
            self.layout.button_size as i32,
            self.layout.ui_button_size as i32,
            ctx,
        );
    }

    /// Size every control. Positions are reset; place each control with
    /// [`VController::set_pos`] afterwards.
    pub fn set_base_button_size(&mut self, gamepad_px: i32, ui_px: i32, ctx: &LayoutContext) {
        if self.system.has_keyboard {
            self.keyboard.place(gamepad_px, ctx);
        }
        self.dpad.set_size(DPad::size_for_button(gamepad_px));
        self.face.set_params(RowParams {
            size: gamepad_px,
            spacing: self.layout.button_spacing,
            row_shift: self.layout.row_shift,
            stagger: self.layout.stagger,
            extra_x_size: self.layout.extra_x_size,
            extra_y_size: self.layout.extra_y_size,
            extra_y_size_multi_row: self.layout.extra_y_size_multi_row,
        });
        self.center
            .set_size(gamepad_px, self.layout.button_spacing, self.layout.extra_x_size);
        self.l_trigger.set_size(gamepad_px);
        self.r_trigger.set_size(gamepad_px);
        self.menu.set_size(ui_px);
        self.fast_forward.set_size(ui_px);
    }

    /// Move every control to its default spot: d-pad bottom-left, face
    /// buttons bottom-right, center buttons bottom-middle, menu and
    /// fast-forward in the top corners, triggers under them.
    ///
    /// Controls are centered on the viewport edge and fitting pulls them
    /// back inside, so each lands flush with its corner.
    pub fn apply_default_layout(&mut self, ctx: &LayoutContext) {
        let v = ctx.viewport;
        self.set_pos(ControlId::DPad, IVec2::new(v.x, v.bottom()), ctx);
        self.set_pos(ControlId::FaceButtons, IVec2::new(v.right(), v.bottom()), ctx);
        self.set_pos(ControlId::CenterButtons, IVec2::new(v.center().x, v.bottom()), ctx);
        self.set_pos(ControlId::Menu, IVec2::new(v.x, v.y), ctx);
        self.set_pos(ControlId::FastForward, IVec2::new(v.right(), v.y), ctx);
        if self.separate_triggers() {
            let gap = self.layout.button_spacing;
            let y = self.menu.bounds().bottom() + gap + self.l_trigger.bounds().h / 2;
            self.set_pos(ControlId::LeftTrigger, IVec2::new(v.x, y), ctx);
            let y = self.fast_forward.bounds().bottom() + gap + self.r_trigger.bounds().h / 2;
            self.set_pos(ControlId::RightTrigger, IVec2::new(v.right(), y), ctx);
        }
    }

    /// Control for a positionable id.
    ///
    /// # Panics
    ///
    /// Panics when `id` is not part of this layout, e.g. a trigger when
    /// triggers are inline.
    pub fn control(&self, id: ControlId) -> &dyn VirtualControl {
        self.check_id(id);
        match id {
            ControlId::DPad => &self.dpad,
            ControlId::CenterButtons => &self.center,
            ControlId::FaceButtons => &self.face,
            ControlId::Menu => &self.menu,
            ControlId::FastForward => &self.fast_forward,
            ControlId::LeftTrigger => &self.l_trigger,
            ControlId::RightTrigger => &self.r_trigger,
        }
    }

    /// Mutable access to a control. Panics like [`VController::control`].
    pub fn control_mut(&mut self, id: ControlId) -> &mut dyn VirtualControl {
        self.check_id(id);
        match id {
            ControlId::DPad => &mut self.dpad,
            ControlId::CenterButtons => &mut self.center,
            ControlId::FaceButtons => &mut self.face,
            ControlId::Menu => &mut self.menu,
            ControlId::FastForward => &mut self.fast_forward,
            ControlId::LeftTrigger => &mut self.l_trigger,
            ControlId::RightTrigger => &mut self.r_trigger,
        }
    }

    fn check_id(&self, id: ControlId) {
        assert!(
            id.index() < self.num_elements(),
            "control index {} ({:?}) out of range for {} elements",
            id.index(),
            id,
            self.num_elements()
        );
    }

    pub fn bounds(&self, id: ControlId) -> Rect {
        self.control(id).bounds()
    }

    pub fn set_pos(&mut self, id: ControlId, pos: IVec2, ctx: &LayoutContext) {
        self.control_mut(id).set_pos(pos, ctx);
    }

    pub fn state(&self, id: ControlId) -> ControlState {
        self.control(id).state()
    }

    pub fn set_state(&mut self, id: ControlId, state: ControlState) {
        self.control_mut(id).set_state(state);
    }

    pub fn bounding_area_visible(&self) -> bool {
        self.show_bounding_area
    }

    /// Toggle drawing of hit regions and the d-pad input map
    pub fn set_bounding_area_visible(&mut self, on: bool) {
        self.show_bounding_area = on;
        self.dpad.set_bounding_area_visible(on);
        self.face.set_show_bounding_area(on);
        self.center.set_show_bounding_area(on);
        self.l_trigger.set_show_bounding_area(on);
        self.r_trigger.set_show_bounding_area(on);
    }

    pub fn set_gamepad_mapping(&mut self, map: GamepadMap) {
        self.gamepad_map = map;
    }

    pub fn set_keyboard_mapping(&mut self, mode: KeyboardMode, map: KeyboardMap) {
        self.keyboard_maps[mode.index()] = map;
    }

    pub fn is_in_keyboard_mode(&self) -> bool {
        self.system.has_keyboard && self.keyboard_active
    }

    pub fn keyboard_mode(&self) -> KeyboardMode {
        self.keyboard.mode()
    }

    /// Switch between the gamepad and the on-screen keyboard, releasing
    /// everything held
    pub fn toggle_keyboard(&mut self, sink: &mut dyn InputSink) {
        tracing::debug!("toggling keyboard");
        self.reset_input(sink);
        self.keyboard_active = !self.keyboard_active;
    }

    /// Change the keyboard page, releasing everything held
    pub fn set_keyboard_mode(&mut self, mode: KeyboardMode, sink: &mut dyn InputSink) {
        if self.keyboard.mode() == mode {
            return;
        }
        tracing::debug!("switch kb mode to {:?}", mode);
        self.reset_input(sink);
        self.keyboard.set_mode(mode);
    }

    /// Release every held element on every pointer
    pub fn reset_input(&mut self, sink: &mut dyn InputSink) {
        for device in 0..MAX_POINTERS {
            let held = std::mem::take(&mut self.held[device]);
            for elem in held.iter() {
                self.input_action(InputAction::Released, elem, sink);
            }
        }
        self.turbo.clear();
    }

    /// Called after the host repositions the overlay
    pub fn place(&mut self, sink: &mut dyn InputSink) {
        self.reset_input(sink);
    }

    /// Elements a pointer currently holds
    pub fn held_elements(&self, device: usize) -> ElementPair {
        self.held.get(device).copied().unwrap_or_default()
    }

    /// Send a press or release of `elem` to the sink, updating turbo state.
    ///
    /// # Panics
    ///
    /// Panics when `elem` is outside the active mapping table.
    pub fn input_action(&mut self, action: InputAction, elem: Element, sink: &mut dyn InputSink) {
        if self.is_in_keyboard_mode() {
            assert!(
                elem.index() < KEYBOARD_KEYS,
                "keyboard element {} out of range",
                elem.0
            );
            let code = self.keyboard_maps[self.keyboard.mode().index()][elem.index()];
            sink.handle_input_action(action, code.code());
        } else {
            assert!(
                elem.index() < GAMEPAD_ELEMENTS,
                "gamepad element {} out of range",
                elem.0
            );
            let mapped = self.gamepad_map[elem.index()];
            let code = mapped.code();
            if mapped.is_turbo() {
                match action {
                    InputAction::Pushed => self.turbo.add(code),
                    InputAction::Released => self.turbo.remove(code),
                }
            }
            sink.handle_input_action(action, code);
        }
    }

    /// Process one pointer event: resolve the elements under it, release
    /// what the pointer no longer touches and press what it newly touches
    pub fn apply_input(&mut self, event: &PointerEvent, sink: &mut dyn InputSink) {
        if event.device >= MAX_POINTERS {
            tracing::warn!("ignoring event from pointer {}", event.device);
            return;
        }
        let elem = if event.is_primary_held() {
            self.find_element_under_pos(event, sink)
        } else {
            ElementPair::NONE
        };
        tracing::trace!("under {:?}", elem);

        let current = self.held[event.device];
        for v in current.iter() {
            if !elem.contains(v) {
                tracing::trace!("releasing {}", v.0);
                self.input_action(InputAction::Released, v, sink);
            }
        }
        for v in elem.iter() {
            if !current.contains(v) {
                tracing::trace!("pushing {}", v.0);
                self.input_action(InputAction::Pushed, v, sink);
                if self.input.vibrate_on_push {
                    sink.vibrate(Duration::from_millis(self.input.vibration_ms));
                }
            }
        }
        self.held[event.device] = elem;
    }

    /// Elements under the event position in priority order: keyboard,
    /// center buttons, face buttons and triggers, d-pad
    fn find_element_under_pos(
        &mut self,
        event: &PointerEvent,
        sink: &mut dyn InputSink,
    ) -> ElementPair {
        if self.is_in_keyboard_mode() {
            let Some(key) = self.keyboard.key_at(event.pos) else {
                return ElementPair::NONE;
            };
            if key == KEY_DISMISS && event.is_push() {
                tracing::debug!("dismiss kb");
                self.toggle_keyboard(sink);
            } else if KEY_MODE_TOGGLE.contains(&key) && event.is_push() {
                let mode = self.keyboard.mode().toggled();
                self.set_keyboard_mode(mode, sink);
            } else {
                return ElementPair::single(Element(key));
            }
            return ElementPair::NONE;
        }

        if self.center.state().is_active() {
            let elem = self.center.hit_test(event.pos);
            if !elem.is_empty() {
                return elem.offset(C_ELEM);
            }
        }

        let elem = self.face_and_trigger_hits(event.pos);
        if !elem.is_empty() {
            return elem.offset(F_ELEM);
        }

        if self.dpad.state().is_active() {
            let elem = self.dpad.hit_test(event.pos);
            if !elem.is_empty() {
                return elem.offset(D_ELEM);
            }
        }
        ElementPair::NONE
    }

    fn face_and_trigger_hits(&self, point: IVec2) -> ElementPair {
        let mut hits = self.face.hit_test(point);
        if self.separate_triggers() {
            for trigger in [&self.l_trigger, &self.r_trigger] {
                if hits.is_full() {
                    break;
                }
                if let Some(elem) = trigger.hit_test(point).first() {
                    hits.push(elem);
                }
            }
        }
        hits
    }

    /// Advance turbo repeats by one frame
    pub fn update_turbo(&mut self, sink: &mut dyn InputSink) {
        self.turbo.update(sink);
    }

    pub fn turbo(&self) -> &TurboActions {
        &self.turbo
    }

    /// Menu or fast-forward button under `point`
    pub fn ui_button_at(&self, point: IVec2) -> Option<UiButtonKind> {
        [&self.menu, &self.fast_forward]
            .into_iter()
            .find(|button| button.is_hit(point))
            .map(UiButton::kind)
    }

    /// Draw with the configured opacity
    pub fn draw(
        &self,
        surface: &mut dyn RenderSurface,
        emu_system_controls: bool,
        active_ff: bool,
        show_hidden: bool,
    ) {
        self.draw_with_alpha(
            surface,
            emu_system_controls,
            active_ff,
            show_hidden,
            self.layout.alpha,
        );
    }

    /// Draw the overlay. `emu_system_controls` selects whether the gamepad
    /// is drawn; `active_ff` tints the fast-forward button.
    pub fn draw_with_alpha(
        &self,
        surface: &mut dyn RenderSurface,
        emu_system_controls: bool,
        active_ff: bool,
        show_hidden: bool,
        alpha: f32,
    ) {
        if alpha == 0.0 {
            return;
        }
        surface.set_color(Vec4::new(1.0, 1.0, 1.0, alpha));
        if self.is_in_keyboard_mode() {
            self.keyboard.draw(surface, show_hidden);
        } else if emu_system_controls {
            self.dpad.draw(surface, show_hidden);
            self.face.draw(surface, show_hidden);
            if self.separate_triggers() {
                self.l_trigger.draw(surface, show_hidden);
                self.r_trigger.draw(surface, show_hidden);
            }
            self.center.draw(surface, show_hidden);
        }
        self.menu.draw(surface, show_hidden);
        if active_ff && self.fast_forward.state().is_drawn(show_hidden) {
            surface.set_color(Vec4::new(1.0, 0.0, 0.0, alpha));
        }
        self.fast_forward.draw(surface, show_hidden);
    }
}
