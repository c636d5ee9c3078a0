//! Cooperative task scheduler for deferred execution on the UI thread.
//!
//! The scheduler holds one-shot tasks ordered by their run time and executes
//! the ready ones whenever the host pumps [`TaskScheduler::process_ready`]
//! (typically once per frame). Nothing here blocks: a scheduled delay is a
//! cooperative yield, not a sleep.
//!
//! This is the substrate for the swipe engine's timed continuations: the
//! settle delay after a snap-back animation and the cooldown before a row
//! accepts input again are both one-shot tasks on this scheduler.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use swiperail_core::TaskScheduler;
//!
//! let mut scheduler = TaskScheduler::new();
//! scheduler.schedule_once(Duration::from_millis(250), || {
//!     println!("snap-back has settled");
//! });
//!
//! // In the host's frame loop:
//! scheduler.process_ready();
//! ```

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, SchedulerError};

new_key_type! {
    /// A unique identifier for a scheduled task.
    pub struct ScheduledTaskId;
}

/// A boxed one-shot task closure.
type BoxedScheduledTask = Box<dyn FnOnce() + Send + 'static>;

/// Internal scheduled task data.
struct ScheduledTaskData {
    /// When this task should execute.
    run_time: Instant,
    /// The task closure, taken out when executed.
    task: BoxedScheduledTask,
}

/// An entry in the scheduler queue (min-heap by execution time).
#[derive(Debug, Clone, Copy)]
struct SchedulerQueueEntry {
    id: ScheduledTaskId,
    run_time: Instant,
}

impl PartialEq for SchedulerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.run_time == other.run_time
    }
}

impl Eq for SchedulerQueueEntry {}

impl PartialOrd for SchedulerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SchedulerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.run_time.cmp(&self.run_time)
    }
}

/// Manages deferred one-shot tasks.
///
/// The scheduler maintains a priority queue of tasks ordered by their
/// execution time. Tasks run on whichever thread calls
/// [`process_ready`](Self::process_ready); Swiperail always pumps it from
/// the UI thread.
pub struct TaskScheduler {
    /// All pending scheduled tasks.
    tasks: SlotMap<ScheduledTaskId, ScheduledTaskData>,
    /// Priority queue of pending task executions (min-heap by run time).
    queue: BinaryHeap<SchedulerQueueEntry>,
}

impl TaskScheduler {
    /// Create a new task scheduler.
    pub fn new() -> Self {
        Self {
            tasks: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Schedule a task to execute after the specified delay.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn schedule_once<F>(&mut self, delay: Duration, task: F) -> ScheduledTaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.schedule_at(Instant::now() + delay, task)
    }

    /// Schedule a task to execute at a specific instant.
    ///
    /// If the instant is in the past, the task executes on the next
    /// [`process_ready`](Self::process_ready) pump.
    ///
    /// Returns the task ID that can be used to cancel the task.
    pub fn schedule_at<F>(&mut self, instant: Instant, task: F) -> ScheduledTaskId
    where
        F: FnOnce() + Send + 'static,
    {
        let data = ScheduledTaskData {
            run_time: instant,
            task: Box::new(task),
        };

        let id = self.tasks.insert(data);
        self.queue.push(SchedulerQueueEntry {
            id,
            run_time: instant,
        });

        id
    }

    /// Cancel and remove a scheduled task.
    ///
    /// Returns `Ok(())` if the task was found and cancelled, or an error if
    /// it already ran or was never scheduled.
    pub fn cancel(&mut self, id: ScheduledTaskId) -> Result<()> {
        if self.tasks.remove(id).is_some() {
            Ok(())
        } else {
            Err(SchedulerError::InvalidTaskId.into())
        }
    }

    /// Check if a scheduled task is still pending.
    pub fn is_pending(&self, id: ScheduledTaskId) -> bool {
        self.tasks.contains_key(id)
    }

    /// Get the duration until the next task should execute, if any.
    ///
    /// Returns `None` if there are no pending tasks.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        // Clean up cancelled entries from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if !self.tasks.contains_key(entry.id) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            let now = Instant::now();
            if entry.run_time > now {
                entry.run_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Check if there are any tasks ready to execute now.
    pub fn has_ready(&mut self) -> bool {
        while let Some(entry) = self.queue.peek() {
            if !self.tasks.contains_key(entry.id) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue
            .peek()
            .is_some_and(|entry| entry.run_time <= Instant::now())
    }

    /// Execute all tasks whose run time has arrived.
    ///
    /// Returns the number of tasks that were executed. Tasks run in order of
    /// their scheduled times.
    pub fn process_ready(&mut self) -> usize {
        let now = Instant::now();
        let mut executed_count = 0;

        while let Some(entry) = self.queue.peek() {
            if entry.run_time > now {
                break;
            }

            let entry = self.queue.pop().expect("peeked entry must exist");

            // Cancelled tasks leave stale queue entries behind; skip them.
            let Some(task_data) = self.tasks.remove(entry.id) else {
                continue;
            };

            tracing::trace!(
                target: "swiperail_core::scheduler",
                id = ?entry.id,
                "executing scheduled task"
            );
            (task_data.task)();
            executed_count += 1;
        }

        executed_count
    }

    /// Get the number of pending scheduled tasks.
    pub fn pending_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A thread-safe shared handle around [`TaskScheduler`].
///
/// Rows hold a clone of this handle to schedule their timed continuations;
/// the host pumps it once per frame. The handle is thread-safe even though
/// the interaction model is single-threaded, so hosts with a separate timer
/// thread can still drive it.
pub struct SharedTaskScheduler {
    inner: Mutex<TaskScheduler>,
}

impl SharedTaskScheduler {
    /// Create a new shared scheduler.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TaskScheduler::new()),
        }
    }

    /// See [`TaskScheduler::schedule_once`].
    pub fn schedule_once<F>(&self, delay: Duration, task: F) -> ScheduledTaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.lock().schedule_once(delay, task)
    }

    /// See [`TaskScheduler::schedule_at`].
    pub fn schedule_at<F>(&self, instant: Instant, task: F) -> ScheduledTaskId
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.lock().schedule_at(instant, task)
    }

    /// See [`TaskScheduler::cancel`].
    pub fn cancel(&self, id: ScheduledTaskId) -> Result<()> {
        self.inner.lock().cancel(id)
    }

    /// See [`TaskScheduler::is_pending`].
    pub fn is_pending(&self, id: ScheduledTaskId) -> bool {
        self.inner.lock().is_pending(id)
    }

    /// See [`TaskScheduler::time_until_next`].
    pub fn time_until_next(&self) -> Option<Duration> {
        self.inner.lock().time_until_next()
    }

    /// See [`TaskScheduler::has_ready`].
    pub fn has_ready(&self) -> bool {
        self.inner.lock().has_ready()
    }

    /// Execute all ready tasks.
    ///
    /// Tasks are drained from the queue under the lock but run outside it,
    /// so a task may schedule follow-up work on this same handle.
    pub fn process_ready(&self) -> usize {
        let mut executed_count = 0;

        loop {
            let ready = {
                let mut scheduler = self.inner.lock();
                if !scheduler.has_ready() {
                    break;
                }

                let now = Instant::now();
                let mut batch = Vec::new();
                while let Some(entry) = scheduler.queue.peek() {
                    if entry.run_time > now {
                        break;
                    }
                    let entry = scheduler.queue.pop().expect("peeked entry must exist");
                    if let Some(task_data) = scheduler.tasks.remove(entry.id) {
                        batch.push(task_data.task);
                    }
                }
                batch
            };

            for task in ready {
                task();
                executed_count += 1;
            }
        }

        executed_count
    }

    /// See [`TaskScheduler::pending_count`].
    pub fn pending_count(&self) -> usize {
        self.inner.lock().pending_count()
    }
}

impl Default for SharedTaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(SharedTaskScheduler: Send, Sync);

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_schedule_once() {
        let mut scheduler = TaskScheduler::new();
        let executed = Arc::new(AtomicUsize::new(0));
        let executed_clone = executed.clone();

        let id = scheduler.schedule_once(Duration::from_millis(10), move || {
            executed_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(scheduler.is_pending(id));
        assert_eq!(scheduler.pending_count(), 1);

        // Task shouldn't execute before its run time.
        assert_eq!(scheduler.process_ready(), 0);
        assert_eq!(executed.load(Ordering::SeqCst), 0);

        std::thread::sleep(Duration::from_millis(15));

        assert_eq!(scheduler.process_ready(), 1);
        assert_eq!(executed.load(Ordering::SeqCst), 1);

        // Task is removed after execution.
        assert!(!scheduler.is_pending(id));
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_cancel_task() {
        let mut scheduler = TaskScheduler::new();
        let executed = Arc::new(AtomicUsize::new(0));
        let executed_clone = executed.clone();

        let id = scheduler.schedule_once(Duration::from_millis(10), move || {
            executed_clone.fetch_add(1, Ordering::SeqCst);
        });

        scheduler.cancel(id).unwrap();
        assert!(!scheduler.is_pending(id));

        std::thread::sleep(Duration::from_millis(15));
        assert_eq!(scheduler.process_ready(), 0);
        assert_eq!(executed.load(Ordering::SeqCst), 0);

        // Cancelling again should fail.
        assert!(scheduler.cancel(id).is_err());
    }

    #[test]
    fn test_schedule_at_past_instant_runs_immediately() {
        let mut scheduler = TaskScheduler::new();
        let executed = Arc::new(AtomicUsize::new(0));
        let executed_clone = executed.clone();

        scheduler.schedule_at(Instant::now() - Duration::from_millis(1), move || {
            executed_clone.fetch_add(1, Ordering::SeqCst);
        });

        assert!(scheduler.has_ready());
        assert_eq!(scheduler.process_ready(), 1);
        assert_eq!(executed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_time_until_next() {
        let mut scheduler = TaskScheduler::new();

        assert!(scheduler.time_until_next().is_none());

        let _id = scheduler.schedule_once(Duration::from_millis(100), || {});

        let time_until = scheduler.time_until_next();
        assert!(time_until.is_some());
        assert!(time_until.unwrap() <= Duration::from_millis(100));
        assert!(time_until.unwrap() > Duration::from_millis(90));
    }

    #[test]
    fn test_multiple_tasks_run_in_time_order() {
        let mut scheduler = TaskScheduler::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let order1 = order.clone();
        scheduler.schedule_once(Duration::from_millis(30), move || {
            order1.lock().push(3);
        });

        let order2 = order.clone();
        scheduler.schedule_once(Duration::from_millis(10), move || {
            order2.lock().push(1);
        });

        let order3 = order.clone();
        scheduler.schedule_once(Duration::from_millis(20), move || {
            order3.lock().push(2);
        });

        std::thread::sleep(Duration::from_millis(35));
        scheduler.process_ready();

        assert_eq!(*order.lock(), vec![1, 2, 3]);
    }

    #[test]
    fn test_shared_task_may_schedule_followup() {
        let scheduler = Arc::new(SharedTaskScheduler::new());
        let executed = Arc::new(AtomicUsize::new(0));

        let scheduler_clone = scheduler.clone();
        let executed_clone = executed.clone();
        scheduler.schedule_once(Duration::from_millis(1), move || {
            executed_clone.fetch_add(1, Ordering::SeqCst);
            let executed_inner = executed_clone.clone();
            scheduler_clone.schedule_once(Duration::from_millis(1), move || {
                executed_inner.fetch_add(1, Ordering::SeqCst);
            });
        });

        std::thread::sleep(Duration::from_millis(5));
        scheduler.process_ready();
        assert_eq!(executed.load(Ordering::SeqCst), 1);

        std::thread::sleep(Duration::from_millis(5));
        scheduler.process_ready();
        assert_eq!(executed.load(Ordering::SeqCst), 2);
    }
}
