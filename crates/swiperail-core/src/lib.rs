//! Core systems for Swiperail.
//!
//! This crate provides the foundational pieces of the Swiperail widget
//! library:
//!
//! - **Signal/Slot System**: Type-safe change notification between the
//!   swipe engine and its host
//! - **Task Scheduler**: Cooperative one-shot task scheduling for timed
//!   continuations on the UI thread
//! - **Logging**: `tracing` target conventions for the workspace
//!
//! Everything here assumes the single-threaded, cooperative interaction
//! model of the widget layer: slots run synchronously at emission, and
//! scheduled tasks run when the host pumps the scheduler, typically once per
//! frame.
//!
//! # Signal/Slot Example
//!
//! ```
//! use swiperail_core::Signal;
//!
//! let offset_changed = Signal::<f32>::new();
//!
//! let conn_id = offset_changed.connect(|offset| {
//!     println!("offset changed to: {offset}");
//! });
//!
//! offset_changed.emit(-42.0);
//!
//! offset_changed.disconnect(conn_id).unwrap();
//! ```
//!
//! # Scheduler Example
//!
//! ```
//! use std::time::Duration;
//! use swiperail_core::SharedTaskScheduler;
//!
//! let scheduler = SharedTaskScheduler::new();
//! scheduler.schedule_once(Duration::from_millis(100), || {
//!     println!("deferred work");
//! });
//!
//! // Pump once per frame from the host:
//! scheduler.process_ready();
//! ```

mod error;
pub mod logging;
mod scheduler;
mod signal;

pub use error::{RailError, Result, SchedulerError, SignalError};
pub use scheduler::{ScheduledTaskId, SharedTaskScheduler, TaskScheduler};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
