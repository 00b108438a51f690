//! Turbo auto-repeat for held buttons

use super::{InputAction, InputSink};

/// Maximum number of codes repeating at once
pub const MAX_TURBO_ACTIONS: usize = 5;

/// Codes currently auto-repeating, driven once per frame by the host.
///
/// Each cycle of `frames` frames sends a press on frame 0 and a release
/// halfway through.
#[derive(Debug, Clone)]
pub struct TurboActions {
    active: [Option<u32>; MAX_TURBO_ACTIONS],
    clock: u32,
    frames: u32,
}

impl Default for TurboActions {
    fn default() -> Self {
        Self::new(4)
    }
}

impl TurboActions {
    pub fn new(frames: u32) -> Self {
        Self {
            active: [None; MAX_TURBO_ACTIONS],
            clock: 0,
            frames: frames.max(2),
        }
    }

    /// Start repeating `code`. Already repeating codes are left alone.
    pub fn add(&mut self, code: u32) {
        if self.active.contains(&Some(code)) {
            return;
        }
        match self.active.iter_mut().find(|slot| slot.is_none()) {
            Some(slot) => {
                tracing::debug!("turbo on for code {}", code);
                *slot = Some(code);
            }
            None => tracing::warn!("no free turbo slot for code {}", code),
        }
    }

    /// Stop repeating `code`
    pub fn remove(&mut self, code: u32) {
        for slot in self.active.iter_mut().filter(|slot| **slot == Some(code)) {
            tracing::debug!("turbo off for code {}", code);
            *slot = None;
        }
    }

    pub fn is_active(&self, code: u32) -> bool {
        self.active.contains(&Some(code))
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Change the cycle length, keeping the active codes. The cycle
    /// restarts on the next update.
    pub fn set_frames(&mut self, frames: u32) {
        self.frames = frames.max(2);
        self.clock = 0;
    }

    /// Drop every active code and restart the cycle
    pub fn clear(&mut self) {
        self.active = [None; MAX_TURBO_ACTIONS];
        self.clock = 0;
    }

    /// Advance one frame, emitting the repeat press or release for every
    /// active code
    pub fn update(&mut self, sink: &mut dyn InputSink) {
        let action = if self.clock == 0 {
            Some(InputAction::Pushed)
        } else if self.clock == self.frames / 2 {
            Some(InputAction::Released)
        } else {
            None
        };
        if let Some(action) = action {
            for code in self.active.iter().flatten() {
                sink.handle_input_action(action, *code);
            }
        }
        self.clock += 1;
        if self.clock == self.frames {
            self.clock = 0;
        }
    }
}
