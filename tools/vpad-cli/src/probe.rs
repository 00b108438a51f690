//! Probe command - run a press, drag and release through the overlay

use anyhow::Result;
use clap::Args;
use glam::IVec2;
use std::time::Duration;
use vpad_core::{
    ButtonCode, Config, InputAction, InputSink, KeyboardMode, PointerEvent, VController,
};

use crate::overlay::OverlayArgs;

/// Arguments for the probe command
#[derive(Args)]
pub struct ProbeArgs {
    /// Pointer x position in pixels
    pub x: i32,

    /// Pointer y position in pixels
    pub y: i32,

    /// Drag to this position before releasing, as `x,y`
    #[arg(long, value_parser = parse_point)]
    pub drag_to: Option<IVec2>,

    /// Open the on-screen keyboard first
    #[arg(long)]
    pub keyboard: bool,

    /// Run this many turbo frames while the pointer is held
    #[arg(long, default_value_t = 0)]
    pub turbo_frames: u32,

    #[command(flatten)]
    pub overlay: OverlayArgs,
}

fn parse_point(s: &str) -> Result<IVec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(IVec2::new(x, y))
}

/// Sink that collects actions as printable lines
#[derive(Default)]
pub struct LogSink {
    pub lines: Vec<String>,
}

impl InputSink for LogSink {
    fn handle_input_action(&mut self, action: InputAction, code: u32) {
        self.lines.push(format!("{action:?} {code}"));
    }

    fn vibrate(&mut self, duration: Duration) {
        self.lines.push(format!("vibrate {}ms", duration.as_millis()));
    }
}

/// Identity mapping so printed codes are element indices
fn identity_maps(ctrl: &mut VController) {
    ctrl.set_gamepad_mapping(std::array::from_fn(|i| ButtonCode::new(i as u32)));
    let keys = std::array::from_fn(|i| ButtonCode::new(i as u32));
    ctrl.set_keyboard_mapping(KeyboardMode::Primary, keys);
    ctrl.set_keyboard_mapping(KeyboardMode::Shifted, keys);
}

pub fn run(args: &ProbeArgs, config: &Config) -> Result<Vec<String>> {
    let (mut ctrl, _) = args.overlay.build(config)?;
    identity_maps(&mut ctrl);
    let mut sink = LogSink::default();
    if args.keyboard {
        ctrl.toggle_keyboard(&mut sink);
    }

    let start = IVec2::new(args.x, args.y);
    if let Some(kind) = ctrl.ui_button_at(start) {
        sink.lines.push(format!("ui button {kind:?}"));
    }
    sink.lines.push(format!("push {},{}", start.x, start.y));
    ctrl.apply_input(&PointerEvent::pushed(0, start), &mut sink);
    for _ in 0..args.turbo_frames {
        ctrl.update_turbo(&mut sink);
    }

    let end = args.drag_to.unwrap_or(start);
    if args.drag_to.is_some() {
        sink.lines.push(format!("drag {},{}", end.x, end.y));
        ctrl.apply_input(&PointerEvent::dragged(0, end), &mut sink);
    }
    sink.lines.push("release".to_string());
    ctrl.apply_input(&PointerEvent::released(0, end), &mut sink);
    Ok(sink.lines)
}

/// Execute the probe command
pub fn execute(args: ProbeArgs, config: &Config) -> Result<()> {
    for line in run(&args, config)? {
        println!("{line}");
    }
    Ok(())
}
