//! Layout command - print control regions for a viewport

use anyhow::Result;
use clap::Args;
use glam::Vec4;
use std::fmt::Write as _;
use vpad_core::geometry::Rect;
use vpad_core::{Config, ControlId, RenderSurface, Sprite, VController, VirtualControl};

use crate::overlay::OverlayArgs;

/// Arguments for the layout command
#[derive(Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub overlay: OverlayArgs,

    /// Also print per-button sprite and hit rectangles
    #[arg(long)]
    pub buttons: bool,

    /// Print the draw calls the overlay would issue
    #[arg(long)]
    pub draw: bool,

    /// Draw as if fast-forward were running
    #[arg(long)]
    pub fast_forward: bool,
}

/// Render surface that writes one line per draw call
#[derive(Default)]
pub struct TextSurface {
    pub out: String,
}

impl RenderSurface for TextSurface {
    fn set_color(&mut self, color: Vec4) {
        let _ = writeln!(
            self.out,
            "color   {:.2} {:.2} {:.2} {:.2}",
            color.x, color.y, color.z, color.w
        );
    }

    fn draw_sprite(&mut self, sprite: Sprite, rect: Rect) {
        let _ = writeln!(self.out, "sprite  {:<16} {}", format!("{sprite:?}"), fmt_rect(rect));
    }

    fn draw_rect(&mut self, rect: Rect) {
        let _ = writeln!(self.out, "rect    {:<16} {}", "", fmt_rect(rect));
    }
}

pub fn fmt_rect(r: Rect) -> String {
    format!("{},{} {}x{}", r.x, r.y, r.w, r.h)
}

/// One line per positionable control
pub fn describe(ctrl: &VController) -> String {
    let mut out = String::new();
    for id in &ControlId::ALL[..ctrl.num_elements()] {
        let _ = writeln!(
            out,
            "{:<14} {:<20} {:?}",
            format!("{id:?}"),
            fmt_rect(ctrl.bounds(*id)),
            ctrl.state(*id)
        );
    }
    out
}

fn describe_buttons(ctrl: &VController) -> String {
    let mut out = String::new();
    let face = ctrl.face_buttons();
    let _ = writeln!(out, "face layout {:?}, {} row(s)", face.layout_key(), face.rows());
    for i in 0..face.laid_out_count() {
        let _ = writeln!(
            out,
            "  face {}   sprite {:<18} hit {}",
            i,
            fmt_rect(face.sprite_rect(i)),
            fmt_rect(face.hit_rect(i))
        );
    }
    let center = ctrl.center_buttons();
    for i in 0..center.count() as usize {
        let _ = writeln!(
            out,
            "  center {} sprite {:<18} hit {}",
            i,
            fmt_rect(center.sprite_rect(i)),
            fmt_rect(center.hit_rect(i))
        );
    }
    let dpad = ctrl.dpad();
    let _ = writeln!(out, "  dpad hit area {}", fmt_rect(dpad.pad_area()));
    out
}

/// Execute the layout command
pub fn execute(args: LayoutArgs, config: &Config) -> Result<()> {
    let (ctrl, ctx) = args.overlay.build(config)?;

    println!("Viewport {}", fmt_rect(ctx.viewport));
    print!("{}", describe(&ctrl));
    if ctrl.system().has_keyboard {
        println!("{:<14} {}", "Keyboard", fmt_rect(ctrl.keyboard().bounds()));
    }
    if args.buttons {
        print!("{}", describe_buttons(&ctrl));
    }
    if args.draw {
        let mut surface = TextSurface::default();
        ctrl.draw(&mut surface, true, args.fast_forward, false);
        print!("{}", surface.out);
    }
    Ok(())
}
