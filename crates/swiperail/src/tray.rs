//! Tray layout math: button geometry and hit-testing.
//!
//! The tray sits immediately past the content in scroll order, so its
//! buttons track the revealed edge 1:1 with content motion. All geometry
//! here is pure: the layout is computed from the current offset, the number
//! of *enabled* actions, and the row's laid-out size.
//!
//! Leading-direction rows reuse the trailing math through the mirroring
//! policy of [`RevealDirection`]: points are reflected into the canonical
//! orientation, resolved there, and rects reflected back.

use crate::direction::RevealDirection;
use crate::types::{Point, Rect, Size};

/// Default width of one tray button.
pub const DEFAULT_BUTTON_WIDTH: f32 = 100.0;

/// Computes tray geometry for one row.
#[derive(Debug, Clone, Copy)]
pub struct TrayLayout {
    direction: RevealDirection,
    button_width: f32,
}

impl TrayLayout {
    /// Create a tray layout for the given direction.
    pub fn new(direction: RevealDirection) -> Self {
        Self {
            direction,
            button_width: DEFAULT_BUTTON_WIDTH,
        }
    }

    /// Set the per-button width using builder pattern.
    pub fn with_button_width(mut self, width: f32) -> Self {
        self.button_width = width;
        self
    }

    /// The width of one button.
    #[inline]
    pub fn button_width(&self) -> f32 {
        self.button_width
    }

    /// The direction this layout mirrors for.
    #[inline]
    pub fn direction(&self) -> RevealDirection {
        self.direction
    }

    /// Total tray width for `count` enabled actions.
    ///
    /// Zero actions produce a zero-width, unreachable tray; that is a valid
    /// edge state, not an error.
    #[inline]
    pub fn tray_width(&self, count: usize) -> f32 {
        count as f32 * self.button_width
    }

    /// The rectangle of button `index` in row-local coordinates, given the
    /// current reported offset.
    ///
    /// Index 0 is the button nearest the content edge. The rect may extend
    /// past the row bounds while the tray is only partially revealed.
    pub fn button_rect(&self, index: usize, offset: f32, row_size: Size) -> Rect {
        let content_edge = row_size.width + offset;
        let canonical_x = content_edge + index as f32 * self.button_width;
        let x = match self.direction {
            RevealDirection::Trailing => canonical_x,
            // Reflect the canonical rect through the row's center line.
            RevealDirection::Leading => row_size.width - (canonical_x + self.button_width),
        };
        Rect::new(x, 0.0, self.button_width, row_size.height)
    }

    /// Find which button (into the *filtered* sequence) a point lands on.
    ///
    /// Returns `None` when the tray is hidden, the point misses every
    /// revealed button, or there are no enabled actions.
    pub fn hit_test(&self, point: Point, offset: f32, count: usize, row_size: Size) -> Option<usize> {
        if count == 0 || offset >= 0.0 {
            return None;
        }
        if point.y < 0.0 || point.y >= row_size.height {
            return None;
        }
        if point.x < 0.0 || point.x >= row_size.width {
            return None;
        }

        let x = match self.direction {
            RevealDirection::Trailing => point.x,
            RevealDirection::Leading => row_size.width - point.x,
        };

        let content_edge = row_size.width + offset;
        if x < content_edge {
            return None;
        }

        let index = ((x - content_edge) / self.button_width) as usize;
        (index < count).then_some(index)
    }
}
