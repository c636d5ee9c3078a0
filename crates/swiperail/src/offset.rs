//! Horizontal offset tracking for a swipe row.
//!
//! The tracker turns raw viewport displacement readings into the single
//! scalar the rest of the engine consumes. It is an observation point, not a
//! queued message: the row records a reading synchronously on every layout
//! or drag pass, and the [`offset_changed`](OffsetTracker::offset_changed)
//! signal fires, also synchronously, only when the reported value actually
//! changes.

use swiperail_core::Signal;

/// Tracks the horizontal displacement of a row's content from its rest
/// position.
///
/// Displacement toward the reveal edge is reported as a negative magnitude;
/// displacement past rest toward the opposite edge is clamped to zero, so
/// the reported offset is never positive. Zero means at rest, anything else
/// means the tray is (partially) revealed.
pub struct OffsetTracker {
    /// The last reported (clamped) offset.
    offset: f32,
    /// Signal emitted when the reported offset changes.
    pub offset_changed: Signal<f32>,
}

impl OffsetTracker {
    /// Create a tracker at rest.
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            offset_changed: Signal::new(),
        }
    }

    /// Record a raw displacement reading.
    ///
    /// Positive readings are clamped to zero; non-positive readings are
    /// reported unchanged. Returns the reported offset. Emits
    /// [`offset_changed`](Self::offset_changed) if the reported value
    /// differs from the previous one.
    pub fn record(&mut self, raw: f32) -> f32 {
        let reported = if raw > 0.0 { 0.0 } else { raw };
        if reported != self.offset {
            self.offset = reported;
            self.offset_changed.emit(reported);
        }
        reported
    }

    /// The current reported offset (always <= 0).
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether the row is at its rest position.
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.offset == 0.0
    }
}

impl Default for OffsetTracker {
    fn default() -> Self {
        Self::new()
    }
}
