//! Reveal direction and its layout policy.
//!
//! Trailing is the canonical, unmirrored orientation: the tray sits at the
//! trailing edge and content flows normally. Leading reuses the same
//! geometry by rotating the whole row assembly 180 degrees and rotating the
//! content and each button back individually, so one scroll/layout
//! implementation serves both directions.

/// Which edge of the row the action tray reveals from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevealDirection {
    /// Tray reveals from the leading edge.
    Leading,
    /// Tray reveals from the trailing edge (canonical orientation).
    #[default]
    Trailing,
}

/// Horizontal alignment of the tray within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrayAlignment {
    /// Tray hugs the leading edge.
    Leading,
    /// Tray hugs the trailing edge.
    Trailing,
}

/// The anchor the row's viewport snaps back to when coming to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestAnchor {
    /// Top-leading corner (trailing-direction rows).
    TopLeading,
    /// Top-trailing corner (leading-direction rows, mirroring the rotation).
    TopTrailing,
}

impl RevealDirection {
    /// The alignment of the tray within the row.
    pub fn tray_alignment(self) -> TrayAlignment {
        match self {
            Self::Leading => TrayAlignment::Leading,
            Self::Trailing => TrayAlignment::Trailing,
        }
    }

    /// Rotation applied to the whole row assembly, in degrees.
    pub fn assembly_rotation_degrees(self) -> f32 {
        match self {
            Self::Leading => 180.0,
            Self::Trailing => 0.0,
        }
    }

    /// Counter-rotation applied to the content, in degrees.
    pub fn content_rotation_degrees(self) -> f32 {
        match self {
            Self::Leading => -180.0,
            Self::Trailing => 0.0,
        }
    }

    /// Counter-rotation applied to each tray button, in degrees.
    pub fn button_rotation_degrees(self) -> f32 {
        match self {
            Self::Leading => -180.0,
            Self::Trailing => 0.0,
        }
    }

    /// The rest anchor the viewport snaps back to.
    pub fn rest_anchor(self) -> RestAnchor {
        match self {
            Self::Leading => RestAnchor::TopTrailing,
            Self::Trailing => RestAnchor::TopLeading,
        }
    }

    /// Whether this direction runs through the mirrored layout path.
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::Leading)
    }
}
