//! Animation controllers for snap-back and row entry/exit transitions.

use std::time::{Duration, Instant};

use crate::easing::{Easing, ease, lerp_eased};
use crate::types::Rect;

/// Current state of a snap animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SnapState {
    /// No snap in progress.
    #[default]
    Idle,
    /// Snap is running.
    Running {
        /// Current interpolated offset.
        offset: f32,
        /// Progress from 0.0 to 1.0 (eased).
        progress: f32,
    },
}

impl SnapState {
    /// Check if a snap is currently in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, SnapState::Running { .. })
    }
}

/// A timed animation that moves a horizontal offset toward a target.
///
/// Used both for the release snap (settling on fully-hidden or
/// fully-revealed) and for the programmatic snap-to-rest that precedes an
/// action's execution.
#[derive(Debug, Clone)]
pub struct SnapAnimation {
    /// Easing function for the snap.
    easing: Easing,
    /// Duration of the snap.
    duration: Duration,
    /// When the snap started (if running).
    start_time: Option<Instant>,
    /// Offset the snap started from.
    from: f32,
    /// Offset the snap is heading to.
    to: f32,
    /// Whether the snap is currently running.
    running: bool,
}

impl SnapAnimation {
    /// Create a new snap animation with default settings.
    pub fn new() -> Self {
        Self {
            easing: Easing::EaseOutCubic,
            duration: Duration::from_millis(250),
            start_time: None,
            from: 0.0,
            to: 0.0,
            running: false,
        }
    }

    /// Get the easing function.
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing function.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Get the snap duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Set the snap duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Check if a snap is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The offset the current (or last) snap is heading to.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Start a snap from one offset to another.
    ///
    /// Returns `true` if the snap was started, `false` if no movement is
    /// needed.
    pub fn start(&mut self, from: f32, to: f32) -> bool {
        if from == to {
            return false;
        }

        self.from = from;
        self.to = to;
        self.start_time = Some(Instant::now());
        self.running = true;
        true
    }

    /// Stop the current snap immediately, leaving the offset wherever the
    /// caller last read it.
    pub fn stop(&mut self) {
        self.running = false;
        self.start_time = None;
    }

    /// Update the snap and get its current state.
    ///
    /// Should be called each frame while the snap is running. When the snap
    /// completes this returns `Idle`; the offset is then exactly
    /// [`target`](Self::target).
    pub fn update(&mut self) -> SnapState {
        if !self.running {
            return SnapState::Idle;
        }

        let Some(start_time) = self.start_time else {
            return SnapState::Idle;
        };

        let elapsed = start_time.elapsed();
        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if raw_progress >= 1.0 {
            self.running = false;
            self.start_time = None;
            return SnapState::Idle;
        }

        let progress = ease(self.easing, raw_progress);
        SnapState::Running {
            offset: lerp_eased(self.easing, self.from, self.to, raw_progress),
            progress,
        }
    }
}

impl Default for SnapAnimation {
    fn default() -> Self {
        Self::new()
    }
}

/// Which direction a reveal-mask transition is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPhase {
    /// Row is entering the list; the mask slides away to uncover it.
    Entering,
    /// Row is leaving the list; the mask slides back to cover it.
    Exiting,
}

/// Current state of a reveal-mask transition.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MaskState {
    /// No transition in progress; the row is fully uncovered.
    #[default]
    Idle,
    /// Transition is running.
    Running {
        /// Which direction the mask is moving.
        phase: MaskPhase,
        /// Progress from 0.0 to 1.0.
        progress: f32,
    },
}

/// Masked reveal transition for row insertion and removal.
///
/// Instead of a generic fade or slide, rows enter and leave the list behind
/// a clipping mask that slides vertically from fully covering the row to
/// fully uncovered (entry) or the reverse (exit). Because the clip stays
/// inside the row's own frame, an appearing tray or a disappearing row never
/// overlaps its neighbors while the list reflows.
#[derive(Debug, Clone)]
pub struct RevealMask {
    /// Easing function for the mask motion.
    easing: Easing,
    /// Duration of the transition.
    duration: Duration,
    /// When the transition started (if running).
    start_time: Option<Instant>,
    /// Which direction the mask is moving.
    phase: MaskPhase,
    /// Whether the transition is currently running.
    running: bool,
    /// Whether an exit transition has run to completion.
    exit_finished: bool,
}

impl RevealMask {
    /// Create a new reveal mask with default settings.
    pub fn new() -> Self {
        Self {
            easing: Easing::EaseInOut,
            duration: Duration::from_millis(200),
            start_time: None,
            phase: MaskPhase::Entering,
            running: false,
            exit_finished: false,
        }
    }

    /// Set the transition duration.
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Get the transition duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Check if a transition is currently running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Check if an exit transition has completed.
    ///
    /// Once true, the row can be dropped from the list.
    #[inline]
    pub fn exit_finished(&self) -> bool {
        self.exit_finished
    }

    /// Begin the entry transition (mask slides away, uncovering the row).
    pub fn begin_entry(&mut self) {
        self.phase = MaskPhase::Entering;
        self.start_time = Some(Instant::now());
        self.running = true;
        self.exit_finished = false;
    }

    /// Begin the exit transition (mask slides back, covering the row).
    pub fn begin_exit(&mut self) {
        self.phase = MaskPhase::Exiting;
        self.start_time = Some(Instant::now());
        self.running = true;
        self.exit_finished = false;
    }

    /// Update the transition and get its current state.
    pub fn update(&mut self) -> MaskState {
        if !self.running {
            return MaskState::Idle;
        }

        let Some(start_time) = self.start_time else {
            return MaskState::Idle;
        };

        let elapsed = start_time.elapsed();
        let raw_progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if raw_progress >= 1.0 {
            self.running = false;
            self.start_time = None;
            if self.phase == MaskPhase::Exiting {
                self.exit_finished = true;
            }
            return MaskState::Idle;
        }

        MaskState::Running {
            phase: self.phase,
            progress: ease(self.easing, raw_progress),
        }
    }

    /// The clipping mask rectangle for the given row frame.
    ///
    /// The visible part of the row is the intersection of its frame with
    /// this rectangle. At rest the mask coincides with the frame; during a
    /// transition it is shifted upward by the covered amount.
    pub fn mask_rect(&self, row_rect: Rect, state: MaskState) -> Rect {
        let height = row_rect.height();
        match state {
            MaskState::Idle => {
                if self.exit_finished {
                    // Fully covered: mask pushed entirely off the row.
                    row_rect.offset(0.0, -height)
                } else {
                    row_rect
                }
            }
            MaskState::Running { phase, progress } => {
                let covered = match phase {
                    MaskPhase::Entering => 1.0 - progress,
                    MaskPhase::Exiting => progress,
                };
                row_rect.offset(0.0, -height * covered)
            }
        }
    }
}

impl Default for RevealMask {
    fn default() -> Self {
        Self::new()
    }
}
