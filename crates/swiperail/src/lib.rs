//! Swipe-to-reveal action rows for scrollable card lists.
//!
//! Swiperail implements the familiar "swipe a row to reveal delete/bookmark
//! buttons" interaction as a reusable, renderer-agnostic engine. The host
//! supplies an opaque content value per row and renders from the derived
//! state the engine exposes; the engine owns the hard part — the swipe
//! state machine:
//!
//! - a single horizontal degree of freedom, tracked by [`offset::OffsetTracker`]
//!   and clamped so displacement past rest is reported as zero
//! - an ordered, declarative [`action::ActionSet`] whose enabled view is
//!   re-derived on every read
//! - snap-back to one of exactly two resting positions (fully hidden or
//!   fully revealed), animated by [`animation::SnapAnimation`]
//! - a timed disable/re-enable window around each action's execution,
//!   scheduled cooperatively on a shared
//!   [`SharedTaskScheduler`](swiperail_core::SharedTaskScheduler)
//! - masked entry/exit transitions so rows never overlap their neighbors
//!   while the list reflows
//!
//! # Quick start
//!
//! ```
//! use swiperail::prelude::*;
//!
//! let mut list = SwipeList::new();
//! let _remover = list.remover();
//!
//! let actions = ActionSet::new(vec![
//!     SwipeAction::new(Color::from_rgb8(66, 133, 244), "star.fill", || {
//!         println!("bookmarked");
//!     }),
//! ]);
//!
//! let row = SwipeRow::new("card content", actions, list.scheduler())
//!     .with_direction(RevealDirection::Trailing)
//!     .with_corner_radius(15.0);
//! let token = list.push(row);
//!
//! // Each frame: feed pointer events to the row under the pointer, then
//! // pump the list.
//! list.row_mut(token).unwrap().set_size(Size::new(320.0, 72.0));
//! list.tick();
//! ```
//!
//! # Threading model
//!
//! The engine is single-threaded and cooperative: rows are driven from the
//! UI thread, the only suspension points are the two scheduled delays
//! around action execution, and no state is shared between rows. Two rows
//! may be executing actions simultaneously without any coordination.

pub mod action;
pub mod animation;
pub mod direction;
pub mod easing;
pub mod events;
pub mod list;
pub mod offset;
pub mod prelude;
pub mod row;
pub mod tray;
pub mod types;

pub use action::{ActionId, ActionSet, Icon, SwipeAction};
pub use direction::{RestAnchor, RevealDirection, TrayAlignment};
pub use list::{RowRemover, SwipeList};
pub use row::{RowToken, SwipePhase, SwipeRow, SwipeTiming};
