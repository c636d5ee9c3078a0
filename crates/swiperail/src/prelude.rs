//! Convenience re-exports for common Swiperail usage.
//!
//! ```
//! use swiperail::prelude::*;
//! ```

pub use swiperail_core::{SharedTaskScheduler, Signal};

pub use crate::action::{ActionId, ActionSet, Icon, SwipeAction};
pub use crate::animation::{MaskState, SnapState};
pub use crate::direction::{RestAnchor, RevealDirection, TrayAlignment};
pub use crate::events::{MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent};
pub use crate::list::{RowRemover, SwipeList};
pub use crate::row::{RowToken, SwipePhase, SwipeRow, SwipeTiming};
pub use crate::types::{Color, Point, Rect, Size};
