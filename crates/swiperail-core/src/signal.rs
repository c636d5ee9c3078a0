//! Signal/slot system for Swiperail.
//!
//! This module provides a type-safe signal/slot mechanism for communicating
//! state changes between the swipe engine and its host. Signals are emitted
//! when state changes, and connected slots (callbacks) are invoked in
//! response.
//!
//! Swiperail's interaction model is single-threaded and cooperative: signals
//! are always emitted on the UI thread and slots run synchronously, in
//! connection order, before `emit` returns. There is no queued or
//! cross-thread delivery; a slot that needs to hand work to another thread
//! does so itself.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//!
//! # Example
//!
//! ```
//! use swiperail_core::Signal;
//!
//! // A signal that reports a horizontal offset
//! let offset_changed = Signal::<f32>::new();
//!
//! let conn_id = offset_changed.connect(|offset| {
//!     println!("offset is now {offset}");
//! });
//!
//! offset_changed.emit(-150.0);
//!
//! offset_changed.disconnect(conn_id).unwrap();
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, SignalError};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke (Arc-wrapped so emission can run outside
    /// the connection lock).
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked synchronously
/// with the provided arguments, in the order they were connected.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments, or a tuple for multiple arguments.
///
/// # Related Types
///
/// - [`ConnectionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`ConnectionGuard`] - RAII-style connection that auto-disconnects on drop
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot
    /// later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let connection = Connection {
            slot: Arc::new(slot),
        };
        self.connections.lock().insert(connection)
    }

    /// Connect a slot and get a guard that disconnects it when dropped.
    ///
    /// This is the RAII alternative to manually calling
    /// [`disconnect`](Self::disconnect).
    pub fn connect_guarded<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        ConnectionGuard {
            signal: self,
            id: Some(self.connect(slot)),
        }
    }

    /// Disconnect a previously connected slot.
    ///
    /// Returns an error if the connection ID is invalid or was already
    /// disconnected.
    pub fn disconnect(&self, id: ConnectionId) -> Result<()> {
        if self.connections.lock().remove(id).is_some() {
            Ok(())
        } else {
            Err(SignalError::InvalidConnection.into())
        }
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Emit the signal, invoking all connected slots with `args`.
    ///
    /// Slots run synchronously before this returns. If emission is blocked
    /// (see [`block`](Self::block)), nothing is invoked.
    ///
    /// The connection list is snapshotted before invocation, so a slot may
    /// safely connect or disconnect slots on this same signal; such changes
    /// take effect for the next emission.
    pub fn emit(&self, args: Args) {
        if self.blocked.load(Ordering::Acquire) {
            return;
        }

        // Snapshot slots so they run without holding the connection lock.
        let slots: Vec<_> = self
            .connections
            .lock()
            .values()
            .map(|c| c.slot.clone())
            .collect();

        tracing::trace!(
            target: "swiperail_core::signal",
            slot_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(&args);
        }
    }

    /// Temporarily block this signal from emitting.
    ///
    /// Returns the previous blocked state.
    pub fn block(&self) -> bool {
        self.blocked.swap(true, Ordering::AcqRel)
    }

    /// Unblock this signal, allowing emission again.
    ///
    /// Returns the previous blocked state.
    pub fn unblock(&self) -> bool {
        self.blocked.swap(false, Ordering::AcqRel)
    }

    /// Check whether emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::Acquire)
    }

    /// Get the number of active connections.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }
}

/// RAII guard for a signal connection.
///
/// Disconnects the slot when dropped. Obtained from
/// [`Signal::connect_guarded`].
pub struct ConnectionGuard<'a, Args> {
    signal: &'a Signal<Args>,
    id: Option<ConnectionId>,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The connection ID held by this guard.
    pub fn id(&self) -> Option<ConnectionId> {
        self.id
    }

    /// Disconnect now instead of waiting for drop.
    pub fn disconnect(mut self) {
        if let Some(id) = self.id.take() {
            let _ = self.signal.disconnect(id);
        }
    }
}

impl<Args> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            let _ = self.signal.connections.lock().remove(id);
        }
    }
}

static_assertions::assert_impl_all!(Signal<f32>: Send, Sync);
