//! Frame ticking and redraw scheduling.
//!
//! The gauge only needs a new frame when its state changed or while an
//! animation is explicitly running. [`FrameTicker`] is the start/stop switch
//! for the latter; [`RedrawPolicy`] decides what happens after each draw.
//!
//! # Policies
//!
//! | Policy       | Redraw after a draw when...            |
//! |--------------|----------------------------------------|
//! | `OnChange`   | state dirty or ticker running          |
//! | `Continuous` | always (legacy self-scheduling loop)   |
//!
//! `Continuous` keeps the old widget behavior for skins that expect the
//! gauge to repaint every frame. It never goes idle.

/// What a view does about the next frame once it has drawn one.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RedrawPolicy {
    /// Redraw only on state changes or while the ticker runs.
    #[default]
    OnChange,
    /// Request another frame after every draw.
    Continuous,
}

/// Start/stop frame source for animated gauges.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct FrameTicker {
    running: bool,
    frame: u32,
}

impl FrameTicker {
    /// A stopped ticker at frame 0.
    pub const fn new() -> Self { Self { running: false, frame: 0 } }

    /// Start producing frames. Returns `true` if the ticker was stopped.
    pub const fn start(&mut self) -> bool {
        let was_stopped = !self.running;
        self.running = true;
        was_stopped
    }

    /// Stop producing frames. Returns `true` if the ticker was running.
    pub const fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    #[inline]
    pub const fn is_running(&self) -> bool { self.running }

    /// Frames ticked so far.
    #[inline]
    pub const fn frame(&self) -> u32 { self.frame }

    /// Advance one frame. `None` while stopped.
    pub const fn tick(&mut self) -> Option<u32> {
        if !self.running {
            return None;
        }
        self.frame = self.frame.wrapping_add(1);
        Some(self.frame)
    }
}
