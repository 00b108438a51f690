use super::*;
use crate::controls::keyboard::KEY_DISMISS;
use crate::controls::test_surface::{DrawCall, RecordingSurface};
use crate::controls::Sprite;
use crate::input::{PointerButton, PointerState};

const VIEWPORT: Rect = Rect::new(0, 0, 800, 600);

/// Sink that records every action and vibration request
#[derive(Default)]
struct Recorder {
    actions: Vec<(InputAction, u32)>,
    vibrations: usize,
}

impl Recorder {
    fn pushes(&self) -> Vec<u32> {
        self.codes(InputAction::Pushed)
    }

    fn releases(&self) -> Vec<u32> {
        self.codes(InputAction::Released)
    }

    fn codes(&self, action: InputAction) -> Vec<u32> {
        self.actions
            .iter()
            .filter(|(a, _)| *a == action)
            .map(|(_, code)| *code)
            .collect()
    }
}

impl InputSink for Recorder {
    fn handle_input_action(&mut self, action: InputAction, code: u32) {
        self.actions.push((action, code));
    }

    fn vibrate(&mut self, _duration: Duration) {
        self.vibrations += 1;
    }
}

fn ctx() -> LayoutContext {
    LayoutContext::new(VIEWPORT)
}

/// Gamepad element `i` maps to code `100 + i`
fn gamepad_map() -> GamepadMap {
    std::array::from_fn(|i| ButtonCode::new(100 + i as u32))
}

/// Keyboard key `i` maps to `base + i`
fn keyboard_map(base: u32) -> KeyboardMap {
    std::array::from_fn(|i| ButtonCode::new(base + i as u32))
}

fn controller(system: SystemInputLayout) -> VController {
    controller_with(system, &Config::default())
}

fn controller_with(system: SystemInputLayout, config: &Config) -> VController {
    let mut ctrl = VController::new(system, config);
    ctrl.resize(&ctx());
    ctrl.apply_default_layout(&ctx());
    ctrl.set_gamepad_mapping(gamepad_map());
    ctrl.set_keyboard_mapping(KeyboardMode::Primary, keyboard_map(200));
    ctrl.set_keyboard_mapping(KeyboardMode::Shifted, keyboard_map(300));
    ctrl
}

fn face_center(ctrl: &VController, index: usize) -> IVec2 {
    ctrl.face_buttons().sprite_rect(index).center()
}

fn face_code(index: u16) -> u32 {
    100 + u32::from(F_ELEM + index)
}

/// Center of keyboard key at `col`, `row` on a non-inset row
fn key_pos(ctrl: &VController, col: i32, row: i32) -> IVec2 {
    let k = ctrl.keyboard().key_size();
    ctrl.keyboard().bounds().pos() + IVec2::new(col * k.x + k.x / 2, row * k.y + k.y / 2)
}

#[test]
fn test_default_layout_corners() {
    let ctrl = controller(SystemInputLayout::two_button());
    assert_eq!(ctrl.bounds(ControlId::DPad), Rect::new(0, 440, 160, 160));
    assert_eq!(ctrl.bounds(ControlId::FaceButtons), Rect::new(664, 536, 136, 64));
    assert_eq!(ctrl.bounds(ControlId::CenterButtons), Rect::new(332, 520, 136, 80));
    assert_eq!(ctrl.bounds(ControlId::Menu), Rect::new(0, 0, 48, 48));
    assert_eq!(ctrl.bounds(ControlId::FastForward), Rect::new(752, 0, 48, 48));
}

#[test]
fn test_default_layout_places_triggers_under_ui_buttons() {
    let ctrl = controller(SystemInputLayout::with_triggers());
    assert_eq!(ctrl.bounds(ControlId::LeftTrigger), Rect::new(0, 56, 64, 64));
    assert_eq!(ctrl.bounds(ControlId::RightTrigger), Rect::new(736, 56, 64, 64));
}

#[test]
fn test_num_elements() {
    assert_eq!(controller(SystemInputLayout::two_button()).num_elements(), 5);
    let ctrl = controller(SystemInputLayout::with_triggers());
    assert!(ctrl.separate_triggers());
    assert_eq!(ctrl.num_elements(), 7);

    let mut config = Config::default();
    config.layout.triggers_inline = true;
    let ctrl = controller_with(SystemInputLayout::with_triggers(), &config);
    assert!(ctrl.has_triggers());
    assert_eq!(ctrl.num_elements(), 5);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_trigger_id_without_separate_triggers_panics() {
    let ctrl = controller(SystemInputLayout::two_button());
    ctrl.bounds(ControlId::LeftTrigger);
}

#[test]
#[should_panic(expected = "gamepad element 19 out of range")]
fn test_element_outside_gamepad_map_panics() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    ctrl.input_action(InputAction::Pushed, Element(19), &mut Recorder::default());
}

#[test]
fn test_set_state_dispatches_by_id() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    ctrl.set_state(ControlId::Menu, ControlState::Hidden);
    assert_eq!(ctrl.state(ControlId::Menu), ControlState::Hidden);
    assert_eq!(ctrl.state(ControlId::FastForward), ControlState::Shown);
}

#[test]
fn test_push_and_release_single_button() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    let pos = face_center(&ctrl, 0);

    ctrl.apply_input(&PointerEvent::pushed(0, pos), &mut sink);
    assert_eq!(sink.pushes(), vec![face_code(0)]);
    assert_eq!(sink.vibrations, 1);
    assert_eq!(ctrl.held_elements(0), ElementPair::single(Element(F_ELEM)));

    ctrl.apply_input(&PointerEvent::released(0, pos), &mut sink);
    assert_eq!(sink.releases(), vec![face_code(0)]);
    assert!(ctrl.held_elements(0).is_empty());
}

#[test]
fn test_drag_within_button_does_not_press_again() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    let pos = face_center(&ctrl, 0);

    ctrl.apply_input(&PointerEvent::pushed(0, pos), &mut sink);
    ctrl.apply_input(&PointerEvent::dragged(0, pos + IVec2::new(3, 3)), &mut sink);
    ctrl.apply_input(&PointerEvent::dragged(0, pos - IVec2::new(3, 3)), &mut sink);
    assert_eq!(sink.actions, vec![(InputAction::Pushed, face_code(0))]);
}

#[test]
fn test_drag_between_buttons_releases_then_pushes() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();

    ctrl.apply_input(&PointerEvent::pushed(0, face_center(&ctrl, 0)), &mut sink);
    ctrl.apply_input(&PointerEvent::dragged(0, face_center(&ctrl, 1)), &mut sink);
    assert_eq!(
        sink.actions,
        vec![
            (InputAction::Pushed, face_code(0)),
            (InputAction::Released, face_code(0)),
            (InputAction::Pushed, face_code(1)),
        ]
    );
}

#[test]
fn test_drag_off_controls_releases() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();

    ctrl.apply_input(&PointerEvent::pushed(0, face_center(&ctrl, 1)), &mut sink);
    ctrl.apply_input(&PointerEvent::dragged(0, IVec2::new(400, 200)), &mut sink);
    assert_eq!(sink.releases(), vec![face_code(1)]);
    assert!(ctrl.held_elements(0).is_empty());
}

#[test]
fn test_two_touches_on_two_face_buttons() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();

    ctrl.apply_input(&PointerEvent::pushed(0, face_center(&ctrl, 0)), &mut sink);
    ctrl.apply_input(&PointerEvent::pushed(1, face_center(&ctrl, 1)), &mut sink);
    assert_eq!(sink.pushes(), vec![face_code(0), face_code(1)]);
    assert!(sink.releases().is_empty());

    ctrl.apply_input(&PointerEvent::released(0, face_center(&ctrl, 0)), &mut sink);
    assert_eq!(sink.releases(), vec![face_code(0)]);
    assert_eq!(ctrl.held_elements(1), ElementPair::single(Element(F_ELEM + 1)));
}

#[test]
fn test_overlapping_hit_rects_press_chord() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    // Button 1 sits left of button 0; their padded hit rects overlap in
    // the gap between the sprites
    let left = ctrl.face_buttons().sprite_rect(1);
    let right = ctrl.face_buttons().sprite_rect(0);
    let gap = IVec2::new((left.right() + right.x) / 2, left.center().y);

    ctrl.apply_input(&PointerEvent::pushed(0, gap), &mut sink);
    assert_eq!(sink.pushes(), vec![face_code(0), face_code(1)]);
    assert_eq!(sink.vibrations, 2);
    assert!(ctrl.held_elements(0).is_full());
}

#[test]
fn test_priority_center_then_face_then_dpad() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    let stack = IVec2::new(400, 300);
    ctrl.set_pos(ControlId::CenterButtons, stack, &ctx());
    ctrl.set_pos(ControlId::FaceButtons, stack, &ctx());
    ctrl.set_pos(ControlId::DPad, stack, &ctx());
    let pos = IVec2::new(340, 300);

    ctrl.apply_input(&PointerEvent::pushed(0, pos), &mut sink);
    assert_eq!(sink.pushes(), vec![100 + u32::from(C_ELEM)]);

    ctrl.set_state(ControlId::CenterButtons, ControlState::Off);
    ctrl.apply_input(&PointerEvent::dragged(0, pos), &mut sink);
    assert_eq!(sink.releases(), vec![100 + u32::from(C_ELEM)]);
    assert_eq!(sink.pushes().last(), Some(&face_code(1)));

    ctrl.set_state(ControlId::FaceButtons, ControlState::Off);
    ctrl.apply_input(&PointerEvent::dragged(0, pos), &mut sink);
    // 60px left of the pad center is outside the deadzone: left
    assert_eq!(sink.pushes().last(), Some(&(100 + u32::from(D_ELEM) + 3)));
}

#[test]
fn test_hidden_controls_still_hit() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    ctrl.set_state(ControlId::FaceButtons, ControlState::Hidden);
    ctrl.apply_input(&PointerEvent::pushed(0, face_center(&ctrl, 0)), &mut sink);
    assert_eq!(sink.pushes(), vec![face_code(0)]);
}

#[test]
fn test_hover_resolves_nothing() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    let pos = face_center(&ctrl, 0);
    let hover = PointerEvent {
        state: PointerState::Moved { held: false },
        ..PointerEvent::pushed(0, pos)
    };

    ctrl.apply_input(&hover, &mut sink);
    assert!(sink.actions.is_empty());

    ctrl.apply_input(&PointerEvent::pushed(0, pos), &mut sink);
    ctrl.apply_input(&hover, &mut sink);
    assert_eq!(sink.releases(), vec![face_code(0)]);
}

#[test]
fn test_secondary_button_presses_nothing() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    let event = PointerEvent {
        button: PointerButton::Right,
        ..PointerEvent::pushed(0, face_center(&ctrl, 0))
    };
    ctrl.apply_input(&event, &mut sink);
    assert!(sink.actions.is_empty());
}

#[test]
fn test_pointer_beyond_slots_is_dropped() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    let event = PointerEvent::pushed(MAX_POINTERS, face_center(&ctrl, 0));
    ctrl.apply_input(&event, &mut sink);
    assert!(sink.actions.is_empty());
    assert!(ctrl.held_elements(MAX_POINTERS).is_empty());
}

#[test]
fn test_vibration_disabled() {
    let mut config = Config::default();
    config.input.vibrate_on_push = false;
    let mut ctrl = controller_with(SystemInputLayout::two_button(), &config);
    let mut sink = Recorder::default();
    ctrl.apply_input(&PointerEvent::pushed(0, face_center(&ctrl, 0)), &mut sink);
    assert_eq!(sink.pushes().len(), 1);
    assert_eq!(sink.vibrations, 0);
}

#[test]
fn test_separate_trigger_reports_face_element() {
    let mut ctrl = controller(SystemInputLayout::with_triggers());
    let mut sink = Recorder::default();
    let left = ctrl.bounds(ControlId::LeftTrigger).center();
    let right = ctrl.bounds(ControlId::RightTrigger).center();

    ctrl.apply_input(&PointerEvent::pushed(0, left), &mut sink);
    ctrl.apply_input(&PointerEvent::pushed(1, right), &mut sink);
    assert_eq!(sink.pushes(), vec![face_code(4), face_code(5)]);
}

#[test]
fn test_turbo_starts_and_stops_with_the_button() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut map = gamepad_map();
    map[usize::from(F_ELEM)] = ButtonCode::turbo(7);
    ctrl.set_gamepad_mapping(map);
    let mut sink = Recorder::default();
    let pos = face_center(&ctrl, 0);

    ctrl.apply_input(&PointerEvent::pushed(0, pos), &mut sink);
    assert_eq!(sink.pushes(), vec![7]);
    assert!(ctrl.turbo().is_active(7));

    let mut frames = Recorder::default();
    for _ in 0..4 {
        ctrl.update_turbo(&mut frames);
    }
    assert_eq!(
        frames.actions,
        vec![(InputAction::Pushed, 7), (InputAction::Released, 7)]
    );

    ctrl.apply_input(&PointerEvent::released(0, pos), &mut sink);
    assert_eq!(sink.releases(), vec![7]);
    assert!(!ctrl.turbo().is_active(7));

    let mut frames = Recorder::default();
    for _ in 0..4 {
        ctrl.update_turbo(&mut frames);
    }
    assert!(frames.actions.is_empty());
}

#[test]
fn test_plain_mapping_never_turbos() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    ctrl.apply_input(&PointerEvent::pushed(0, face_center(&ctrl, 0)), &mut sink);
    assert!(!ctrl.turbo().is_active(face_code(0)));
}

#[test]
fn test_reset_input_releases_everything() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    ctrl.apply_input(&PointerEvent::pushed(0, face_center(&ctrl, 0)), &mut sink);
    ctrl.apply_input(&PointerEvent::pushed(3, face_center(&ctrl, 1)), &mut sink);

    ctrl.reset_input(&mut sink);
    assert_eq!(sink.releases(), vec![face_code(0), face_code(1)]);
    assert!(ctrl.held_elements(0).is_empty());
    assert!(ctrl.held_elements(3).is_empty());

    let before = sink.actions.len();
    ctrl.place(&mut sink);
    assert_eq!(sink.actions.len(), before);
}

#[test]
fn test_reset_input_restarts_turbo_cycle() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut map = gamepad_map();
    map[usize::from(F_ELEM)] = ButtonCode::turbo(7);
    ctrl.set_gamepad_mapping(map);
    let mut sink = Recorder::default();
    let pos = face_center(&ctrl, 0);

    ctrl.apply_input(&PointerEvent::pushed(0, pos), &mut sink);
    ctrl.update_turbo(&mut sink);
    ctrl.reset_input(&mut sink);
    assert!(!ctrl.turbo().is_active(7));

    ctrl.apply_input(&PointerEvent::pushed(0, pos), &mut sink);
    let mut frames = Recorder::default();
    ctrl.update_turbo(&mut frames);
    assert_eq!(frames.actions, vec![(InputAction::Pushed, 7)]);
}

#[test]
fn test_input_config_change_keeps_turbo_codes() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut map = gamepad_map();
    map[usize::from(F_ELEM)] = ButtonCode::turbo(7);
    ctrl.set_gamepad_mapping(map);
    let mut sink = Recorder::default();
    let pos = face_center(&ctrl, 0);
    ctrl.apply_input(&PointerEvent::pushed(0, pos), &mut sink);

    let mut input = Config::default().input;
    input.turbo_frames = 6;
    ctrl.set_input_config(input);
    assert!(ctrl.turbo().is_active(7));
    assert_eq!(ctrl.turbo().frames(), 6);

    let mut frames = Recorder::default();
    for _ in 0..6 {
        ctrl.update_turbo(&mut frames);
    }
    assert_eq!(
        frames.actions,
        vec![(InputAction::Pushed, 7), (InputAction::Released, 7)]
    );

    // Releasing the button still stops the repeat
    ctrl.apply_input(&PointerEvent::released(0, pos), &mut sink);
    assert!(!ctrl.turbo().is_active(7));
}

#[test]
fn test_layout_config_change_reaches_controls() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    let mut sink = Recorder::default();
    let left_of_center = ctrl.bounds(ControlId::DPad).center() - IVec2::new(60, 0);
    ctrl.apply_input(&PointerEvent::pushed(0, left_of_center), &mut sink);
    ctrl.apply_input(&PointerEvent::released(0, left_of_center), &mut sink);
    assert_eq!(sink.pushes(), vec![100 + u32::from(D_ELEM) + 3]);

    let mut layout = Config::default().layout;
    layout.dpad_deadzone = 200;
    layout.show_bounding_area = true;
    ctrl.set_layout_config(layout);
    assert!(ctrl.dpad().input_map().is_some());
    ctrl.apply_input(&PointerEvent::pushed(0, left_of_center), &mut sink);
    assert_eq!(sink.pushes().len(), 1);
    assert!(ctrl.held_elements(0).is_empty());
}

#[test]
fn test_layout_config_moves_triggers_inline() {
    let mut ctrl = controller(SystemInputLayout::with_triggers());
    assert_eq!(ctrl.num_elements(), 7);

    let mut layout = Config::default().layout;
    layout.triggers_inline = true;
    ctrl.set_layout_config(layout);
    ctrl.resize(&ctx());
    ctrl.apply_default_layout(&ctx());
    assert_eq!(ctrl.num_elements(), 5);
    assert_eq!(ctrl.face_buttons().laid_out_count(), 6);
}

#[test]
fn test_fewer_active_face_buttons_relayout() {
    let system = SystemInputLayout {
        face_buttons: 6,
        ..Default::default()
    };
    let mut ctrl = controller(system);
    assert_eq!(ctrl.bounds(ControlId::FaceButtons), Rect::new(592, 464, 208, 136));

    ctrl.set_active_face_buttons(3, &ctx());
    assert_eq!(ctrl.face_buttons().rows(), 1);
    assert_eq!(ctrl.bounds(ControlId::FaceButtons), Rect::new(592, 500, 208, 64));
    assert_eq!(ctrl.face_buttons().sprite_rect(2), Rect::new(736, 500, 64, 64));

    let mut sink = Recorder::default();
    ctrl.apply_input(&PointerEvent::pushed(0, face_center(&ctrl, 2)), &mut sink);
    assert_eq!(sink.pushes(), vec![face_code(2)]);
}

#[test]
fn test_keyboard_keys_use_keyboard_map() {
    let mut ctrl = controller(SystemInputLayout::computer());
    let mut sink = Recorder::default();
    ctrl.toggle_keyboard(&mut sink);
    assert!(ctrl.is_in_keyboard_mode());

    ctrl.apply_input(&PointerEvent::pushed(0, key_pos(&ctrl, 0, 0)), &mut sink);
    assert_eq!(sink.pushes(), vec![200]);
    // No face buttons are reachable while the keyboard is up
    ctrl.apply_input(&PointerEvent::pushed(1, face_center(&ctrl, 0)), &mut sink);
    assert_eq!(sink.pushes(), vec![200]);
}

#[test]
fn test_keyboard_toggle_requires_keyboard_system() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    ctrl.toggle_keyboard(&mut Recorder::default());
    assert!(!ctrl.is_in_keyboard_mode());
}

#[test]
fn test_dismiss_key_closes_keyboard_and_releases() {
    let mut ctrl = controller(SystemInputLayout::computer());
    let mut sink = Recorder::default();
    ctrl.toggle_keyboard(&mut sink);
    ctrl.apply_input(&PointerEvent::pushed(1, key_pos(&ctrl, 5, 0)), &mut sink);

    ctrl.apply_input(&PointerEvent::pushed(0, key_pos(&ctrl, 0, 3)), &mut sink);
    assert!(!ctrl.is_in_keyboard_mode());
    assert_eq!(sink.pushes(), vec![205]);
    assert_eq!(sink.releases(), vec![205]);
    assert!(ctrl.held_elements(0).is_empty());
}

#[test]
fn test_dragging_onto_dismiss_key_reports_it() {
    let mut ctrl = controller(SystemInputLayout::computer());
    let mut sink = Recorder::default();
    ctrl.toggle_keyboard(&mut sink);
    ctrl.apply_input(&PointerEvent::pushed(0, key_pos(&ctrl, 0, 0)), &mut sink);
    ctrl.apply_input(&PointerEvent::dragged(0, key_pos(&ctrl, 0, 3)), &mut sink);
    assert!(ctrl.is_in_keyboard_mode());
    assert_eq!(sink.pushes(), vec![200, 200 + u32::from(KEY_DISMISS)]);
}

#[test]
fn test_mode_key_switches_keyboard_map() {
    let mut ctrl = controller(SystemInputLayout::computer());
    let mut sink = Recorder::default();
    ctrl.toggle_keyboard(&mut sink);

    ctrl.apply_input(&PointerEvent::pushed(0, key_pos(&ctrl, 1, 3)), &mut sink);
    assert_eq!(ctrl.keyboard_mode(), KeyboardMode::Shifted);
    assert!(sink.actions.is_empty());

    ctrl.apply_input(&PointerEvent::released(0, key_pos(&ctrl, 1, 3)), &mut sink);
    ctrl.apply_input(&PointerEvent::pushed(0, key_pos(&ctrl, 0, 0)), &mut sink);
    assert_eq!(sink.pushes(), vec![300]);

    ctrl.set_keyboard_mode(KeyboardMode::Primary, &mut sink);
    assert_eq!(sink.releases(), vec![300]);
    assert_eq!(ctrl.keyboard_mode(), KeyboardMode::Primary);
}

#[test]
fn test_ui_button_at() {
    let ctrl = controller(SystemInputLayout::two_button());
    assert_eq!(ctrl.ui_button_at(IVec2::new(10, 10)), Some(UiButtonKind::Menu));
    assert_eq!(ctrl.ui_button_at(IVec2::new(790, 10)), Some(UiButtonKind::FastForward));
    assert_eq!(ctrl.ui_button_at(IVec2::new(400, 10)), None);
}

#[test]
fn test_zero_alpha_draws_nothing() {
    let ctrl = controller(SystemInputLayout::two_button());
    let mut surface = RecordingSurface::default();
    ctrl.draw_with_alpha(&mut surface, true, false, false, 0.0);
    assert!(surface.calls.is_empty());
}

#[test]
fn test_draw_order() {
    let ctrl = controller(SystemInputLayout::two_button());
    let mut surface = RecordingSurface::default();
    ctrl.draw(&mut surface, true, false, false);
    assert_eq!(surface.calls[0], DrawCall::Color(Vec4::new(1.0, 1.0, 1.0, 0.5)));
    assert_eq!(
        surface.sprites(),
        vec![
            Sprite::DPad,
            Sprite::FaceButton(0),
            Sprite::FaceButton(1),
            Sprite::CenterButton(0),
            Sprite::CenterButton(1),
            Sprite::Menu,
            Sprite::FastForward,
        ]
    );
    assert_eq!(surface.rects(), 0);
}

#[test]
fn test_draw_without_system_controls() {
    let ctrl = controller(SystemInputLayout::two_button());
    let mut surface = RecordingSurface::default();
    ctrl.draw(&mut surface, false, false, false);
    assert_eq!(surface.sprites(), vec![Sprite::Menu, Sprite::FastForward]);
}

#[test]
fn test_active_fast_forward_is_tinted() {
    let ctrl = controller(SystemInputLayout::two_button());
    let mut surface = RecordingSurface::default();
    ctrl.draw_with_alpha(&mut surface, false, true, false, 0.75);
    assert_eq!(
        surface.calls[surface.calls.len() - 2],
        DrawCall::Color(Vec4::new(1.0, 0.0, 0.0, 0.75))
    );
    assert!(matches!(
        surface.calls.last(),
        Some(DrawCall::Sprite(Sprite::FastForward, _))
    ));
}

#[test]
fn test_draw_keyboard_mode() {
    let mut ctrl = controller(SystemInputLayout::computer());
    ctrl.toggle_keyboard(&mut Recorder::default());
    let mut surface = RecordingSurface::default();
    ctrl.draw(&mut surface, true, false, false);
    assert_eq!(
        surface.sprites(),
        vec![
            Sprite::Keyboard(KeyboardMode::Primary),
            Sprite::Menu,
            Sprite::FastForward,
        ]
    );
}

#[test]
fn test_bounding_areas_drawn_before_sprites() {
    let mut ctrl = controller(SystemInputLayout::with_triggers());
    ctrl.set_bounding_area_visible(true);
    assert!(ctrl.dpad().input_map().is_some());
    let mut surface = RecordingSurface::default();
    ctrl.draw(&mut surface, true, false, false);
    // 4 face buttons, 2 triggers, 2 center buttons
    assert_eq!(surface.rects(), 8);
    assert!(surface.sprites().contains(&Sprite::DPadMap));

    ctrl.set_bounding_area_visible(false);
    assert!(ctrl.dpad().input_map().is_none());
}

#[test]
fn test_hidden_controls_drawn_on_request() {
    let mut ctrl = controller(SystemInputLayout::two_button());
    ctrl.set_state(ControlId::DPad, ControlState::Hidden);
    let mut surface = RecordingSurface::default();
    ctrl.draw(&mut surface, true, false, false);
    assert!(!surface.sprites().contains(&Sprite::DPad));

    let mut surface = RecordingSurface::default();
    ctrl.draw(&mut surface, true, false, true);
    assert!(surface.sprites().contains(&Sprite::DPad));
}
