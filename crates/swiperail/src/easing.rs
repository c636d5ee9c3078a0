//! Easing functions for smooth animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value that creates smoother, more natural-looking animations.

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
    /// Cubic ease-in (more pronounced than quadratic).
    EaseInCubic,
    /// Cubic ease-out (more pronounced than quadratic).
    #[default]
    EaseOutCubic,
    /// Cubic ease-in-out (more pronounced than quadratic).
    EaseInOutCubic,
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0
///
/// # Example
///
/// ```
/// use swiperail::easing::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-out: faster at start
/// assert!(ease(Easing::EaseOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    // Clamp input to valid range
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
        Easing::EaseInCubic => t * t * t,
        Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        Easing::EaseInOutCubic => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * ease(easing, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear() {
        assert_eq!(ease(Easing::Linear, 0.0), 0.0);
        assert_eq!(ease(Easing::Linear, 0.5), 0.5);
        assert_eq!(ease(Easing::Linear, 1.0), 1.0);
    }

    #[test]
    fn test_ease_in() {
        assert_eq!(ease(Easing::EaseIn, 0.0), 0.0);
        assert!(ease(Easing::EaseIn, 0.5) < 0.5); // Slower at start
        assert_eq!(ease(Easing::EaseIn, 1.0), 1.0);
    }

    #[test]
    fn test_ease_out() {
        assert_eq!(ease(Easing::EaseOut, 0.0), 0.0);
        assert!(ease(Easing::EaseOut, 0.5) > 0.5); // Faster at start
        assert_eq!(ease(Easing::EaseOut, 1.0), 1.0);
    }

    #[test]
    fn test_clamp() {
        // Values outside 0-1 should be clamped
        assert_eq!(ease(Easing::Linear, -0.5), 0.0);
        assert_eq!(ease(Easing::Linear, 1.5), 1.0);
    }

    #[test]
    fn test_lerp_eased() {
        // Snap from a revealed offset of -200 back to rest
        assert_eq!(lerp_eased(Easing::Linear, -200.0, 0.0, 0.0), -200.0);
        assert_eq!(lerp_eased(Easing::Linear, -200.0, 0.0, 0.5), -100.0);
        assert_eq!(lerp_eased(Easing::Linear, -200.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_cubic_more_pronounced() {
        // Cubic should be more pronounced than quadratic
        let quad_mid = ease(Easing::EaseIn, 0.5);
        let cubic_mid = ease(Easing::EaseInCubic, 0.5);
        assert!(cubic_mid < quad_mid); // Cubic is even slower at start
    }
}
