//! Ordered host for swipe rows.
//!
//! [`SwipeList`] keeps rows in display order, owns the shared scheduler the
//! rows' timed continuations run on, and drives the masked entry/exit
//! transitions around insertion and removal. It is deliberately thin: card
//! rendering and scrolling belong to the host; the list exists so
//! delete-style actions have a seam to remove their own row through.
//!
//! Action callbacks cannot hold a mutable reference to the list, so removal
//! from inside a callback goes through a [`RowRemover`]: the callback
//! requests removal by token, and the list honors the request on its next
//! [`tick`](SwipeList::tick).
//!
//! # Example
//!
//! ```
//! use swiperail::action::ActionSet;
//! use swiperail::list::SwipeList;
//! use swiperail::row::SwipeRow;
//!
//! let mut list = SwipeList::new();
//! let remover = list.remover();
//!
//! let row = SwipeRow::new("yellow card", ActionSet::empty(), list.scheduler());
//! let token = list.push(row);
//!
//! // From inside an action callback:
//! remover.request(token);
//!
//! // On the next frame:
//! list.tick();
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};
use swiperail_core::SharedTaskScheduler;

use crate::row::{RowToken, SwipeRow};

new_key_type! {
    /// Internal storage key for a row.
    struct RowKey;
}

/// A handle action callbacks use to request removal of a row.
///
/// Requests are queued and honored on the list's next
/// [`tick`](SwipeList::tick), so a callback's side effect is never visible
/// mid-animation.
#[derive(Clone)]
pub struct RowRemover {
    queue: Arc<Mutex<Vec<RowToken>>>,
}

impl RowRemover {
    /// Request removal of the row with the given token.
    pub fn request(&self, token: RowToken) {
        self.queue.lock().push(token);
    }
}

/// An ordered collection of swipe rows sharing one scheduler.
pub struct SwipeList<C> {
    /// Scheduler for all rows' timed continuations.
    scheduler: Arc<SharedTaskScheduler>,
    /// Row storage.
    rows: SlotMap<RowKey, SwipeRow<C>>,
    /// Display order of the stored rows.
    order: Vec<RowKey>,
    /// Removal requests from action callbacks.
    removals: Arc<Mutex<Vec<RowToken>>>,
}

impl<C> SwipeList<C> {
    /// Create an empty list with its own scheduler.
    pub fn new() -> Self {
        Self {
            scheduler: Arc::new(SharedTaskScheduler::new()),
            rows: SlotMap::with_key(),
            order: Vec::new(),
            removals: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The scheduler rows of this list must be constructed with.
    pub fn scheduler(&self) -> Arc<SharedTaskScheduler> {
        self.scheduler.clone()
    }

    /// A removal handle for action callbacks.
    pub fn remover(&self) -> RowRemover {
        RowRemover {
            queue: self.removals.clone(),
        }
    }

    /// Number of rows, including rows still running their exit transition.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the list holds no rows.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a row, starting its masked entry transition.
    pub fn push(&mut self, row: SwipeRow<C>) -> RowToken {
        self.insert(self.order.len(), row)
    }

    /// Insert a row at a display position, starting its masked entry
    /// transition.
    pub fn insert(&mut self, index: usize, mut row: SwipeRow<C>) -> RowToken {
        let token = row.token();
        row.begin_entry();
        let key = self.rows.insert(row);
        let index = index.min(self.order.len());
        self.order.insert(index, key);
        tracing::debug!(target: "swiperail::list", %token, index, "row inserted");
        token
    }

    /// Begin removing the row with the given token.
    ///
    /// The row starts its masked exit transition and is dropped on the tick
    /// after the transition completes. Returns `false` if no such row
    /// exists. Requesting removal of a row already on its way out is a
    /// no-op.
    pub fn remove(&mut self, token: RowToken) -> bool {
        let Some(key) = self.key_of(token) else {
            return false;
        };
        let row = &mut self.rows[key];
        if row.is_exiting() {
            return true;
        }
        row.begin_exit();
        tracing::debug!(target: "swiperail::list", %token, "row exit started");
        true
    }

    /// Look up a row by token.
    pub fn row(&self, token: RowToken) -> Option<&SwipeRow<C>> {
        self.key_of(token).map(|key| &self.rows[key])
    }

    /// Look up a row mutably by token.
    pub fn row_mut(&mut self, token: RowToken) -> Option<&mut SwipeRow<C>> {
        let key = self.key_of(token)?;
        Some(&mut self.rows[key])
    }

    /// Display position of a row.
    pub fn index_of(&self, token: RowToken) -> Option<usize> {
        self.order
            .iter()
            .position(|&key| self.rows[key].token() == token)
    }

    /// Tokens of all rows in display order.
    pub fn tokens(&self) -> Vec<RowToken> {
        self.order.iter().map(|&key| self.rows[key].token()).collect()
    }

    /// Iterate rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &SwipeRow<C>> {
        self.order.iter().map(|&key| &self.rows[key])
    }

    /// Iterate rows mutably, in storage order.
    ///
    /// Use this for bulk updates where order does not matter, such as a
    /// layout pass assigning sizes; use [`row_mut`](Self::row_mut) when a
    /// specific row is the target.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SwipeRow<C>> {
        self.rows.iter_mut().map(|(_, row)| row)
    }

    /// Advance the list by one frame.
    ///
    /// Pumps the shared scheduler (running any due action continuations),
    /// honors queued removal requests, advances every row's animations, and
    /// drops rows whose exit transition has finished.
    pub fn tick(&mut self) {
        self.scheduler.process_ready();

        let requested: Vec<RowToken> = std::mem::take(&mut *self.removals.lock());
        for token in requested {
            self.remove(token);
        }

        for &key in &self.order {
            self.rows[key].tick();
        }

        let rows = &mut self.rows;
        self.order.retain(|&key| {
            if rows[key].exit_finished() {
                let token = rows[key].token();
                rows.remove(key);
                tracing::debug!(target: "swiperail::list", %token, "row dropped after exit");
                false
            } else {
                true
            }
        });
    }

    fn key_of(&self, token: RowToken) -> Option<RowKey> {
        self.order
            .iter()
            .copied()
            .find(|&key| self.rows[key].token() == token)
    }
}

impl<C> Default for SwipeList<C> {
    fn default() -> Self {
        Self::new()
    }
}
