//! The swipe row: per-row state machine and action-reveal engine.
//!
//! [`SwipeRow`] wraps an opaque content value with an action tray and owns
//! everything that makes the swipe interaction work: offset tracking, drag
//! handling, the snap-back animation, tray hit-testing, and the timed
//! disable/re-enable window around an action's execution.
//!
//! # State machine
//!
//! A row is always in one of three phases:
//!
//! - **Resting**: offset is zero, tray hidden, interaction enabled.
//! - **Revealed**: offset is non-zero toward the reveal edge, tray visible,
//!   interaction enabled.
//! - **Executing**: interaction disabled, a snap-to-rest animation in
//!   flight, exactly one action callback about to run or running.
//!
//! The row never initiates Resting → Revealed itself; it only reacts to
//! drag input crossing zero. Revealed → Executing happens on a tap of an
//! enabled tray button and runs a fixed sequence: disable interaction, snap
//! back to the rest anchor, wait for the snap to settle visually, invoke
//! the callback exactly once, wait a short cooldown, re-enable. The two
//! delays are cooperative yields on the shared scheduler, not sleeps.
//!
//! `interaction_enabled` is the sole concurrency guard: it is checked
//! before accepting a new tap or drag start, so a second action can never
//! be triggered while one is mid-flight. A re-entrant tap is silently
//! ignored, not an error.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use swiperail_core::SharedTaskScheduler;
//! use swiperail::action::{ActionSet, SwipeAction};
//! use swiperail::row::SwipeRow;
//! use swiperail::types::{Color, Size};
//!
//! let scheduler = Arc::new(SharedTaskScheduler::new());
//! let actions = ActionSet::new(vec![
//!     SwipeAction::new(Color::from_rgb8(220, 53, 69), "trash.fill", || {}),
//! ]);
//!
//! let mut row = SwipeRow::new("card contents", actions, scheduler)
//!     .with_corner_radius(15.0);
//! row.set_size(Size::new(320.0, 72.0));
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use swiperail_core::{SharedTaskScheduler, Signal};

use crate::action::{ActionCallback, ActionId, ActionSet};
use crate::animation::{MaskPhase, MaskState, RevealMask, SnapAnimation, SnapState};
use crate::direction::RevealDirection;
use crate::events::{MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent};
use crate::offset::OffsetTracker;
use crate::tray::TrayLayout;
use crate::types::{Color, Point, Rect, Size};

/// Process-wide generator for row identity tokens.
static NEXT_ROW_TOKEN: AtomicU64 = AtomicU64::new(1);

/// A stable identity token for one row.
///
/// Created with the row and never reused. Hosts use it to address the row
/// for list-level operations (insert/remove animations, diffing) and the
/// engine uses it to address the row's viewport for programmatic snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowToken(u64);

impl RowToken {
    fn next() -> Self {
        Self(NEXT_ROW_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RowToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// The interaction phase a row is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    /// Offset zero, tray hidden, interaction enabled.
    Resting,
    /// Offset non-zero, tray visible, interaction enabled.
    Revealed,
    /// Interaction disabled while an action executes.
    Executing,
}

/// The two delays bracketing an action's execution.
///
/// `snap_settle` lets the snap-back animation visually complete before the
/// callback's side effect (often removing the row) becomes observable.
/// `cooldown` debounces input so a second tap cannot land while the first
/// action is still settling. The right values depend on the host's
/// animation durations, so they are configuration, not invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTiming {
    /// Delay between starting the snap-back and invoking the callback.
    pub snap_settle: Duration,
    /// Delay between invoking the callback and re-enabling interaction.
    pub cooldown: Duration,
}

impl Default for SwipeTiming {
    fn default() -> Self {
        Self {
            snap_settle: Duration::from_millis(250),
            cooldown: Duration::from_millis(100),
        }
    }
}

/// State the timed continuations touch.
///
/// Lives behind an `Arc` so the scheduled settle/cooldown steps stay valid
/// even if the callback's side effect removes the row from the list; the
/// leftover step then flips a flag on a discarded state, a harmless no-op.
struct RowShared {
    /// The sole concurrency guard for the row.
    interaction_enabled: AtomicBool,
    /// Signal emitted when the guard flips.
    interaction_changed: Signal<bool>,
    /// Signal emitted after the tapped action's callback has run.
    action_invoked: Signal<ActionId>,
}

impl RowShared {
    fn new() -> Self {
        Self {
            interaction_enabled: AtomicBool::new(true),
            interaction_changed: Signal::new(),
            action_invoked: Signal::new(),
        }
    }

    fn set_interaction_enabled(&self, enabled: bool) {
        if self.interaction_enabled.swap(enabled, Ordering::AcqRel) != enabled {
            self.interaction_changed.emit(enabled);
        }
    }

    fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled.load(Ordering::Acquire)
    }
}

/// Movement threshold before a press becomes a drag.
const DRAG_SLOP: f32 = 5.0;

/// Drag states for the press/drag/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragState {
    /// No pointer interaction.
    Inactive,
    /// Pointer pressed, waiting for movement.
    Pressed,
    /// Following pointer movement.
    Dragging,
}

/// Outcome of a pointer release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragRelease {
    /// Press never exceeded the slop: treat as a tap.
    Tap,
    /// A drag ended: decide a snap target.
    DragEnd,
    /// No interaction was in progress.
    None,
}

/// Tracks one pointer's press/drag/release cycle against the row.
#[derive(Debug, Clone, Copy)]
struct DragTracker {
    state: DragState,
    start_x: f32,
    start_offset: f32,
}

impl DragTracker {
    fn new() -> Self {
        Self {
            state: DragState::Inactive,
            start_x: 0.0,
            start_offset: 0.0,
        }
    }

    fn press(&mut self, x: f32, current_offset: f32) {
        self.state = DragState::Pressed;
        self.start_x = x;
        self.start_offset = current_offset;
    }

    /// Feed a pointer position; returns the horizontal delta from the press
    /// once the slop threshold has been exceeded.
    fn drag(&mut self, x: f32) -> Option<f32> {
        if self.state == DragState::Pressed && (x - self.start_x).abs() > DRAG_SLOP {
            self.state = DragState::Dragging;
        }

        if self.state == DragState::Dragging {
            Some(x - self.start_x)
        } else {
            None
        }
    }

    fn start_offset(&self) -> f32 {
        self.start_offset
    }

    fn release(&mut self) -> DragRelease {
        let outcome = match self.state {
            DragState::Inactive => DragRelease::None,
            DragState::Pressed => DragRelease::Tap,
            DragState::Dragging => DragRelease::DragEnd,
        };
        self.state = DragState::Inactive;
        outcome
    }
}

/// A content row with a swipe-to-reveal action tray.
///
/// The content value is wrapped without inspection; rendering it is the
/// host's concern. The row exposes the derived state a renderer needs
/// (tray visibility, the compensating tray shift, backdrop tints, button
/// rects, the entry/exit clip mask) and consumes row-local pointer events.
///
/// # Signals
///
/// - [`offset_changed`](Self::offset_changed)`(f32)`: reported offset changed
/// - [`interaction_changed`](Self::interaction_changed)`(bool)`: interaction guard flipped
/// - [`action_invoked`](Self::action_invoked)`(ActionId)`: an action's callback ran
/// - [`settled`](Self::settled)`(())`: a snap animation reached its target
pub struct SwipeRow<C> {
    /// Stable identity token.
    token: RowToken,
    /// Host-supplied content, treated as a black box.
    content: C,
    /// Which edge the tray reveals from. Immutable per row.
    direction: RevealDirection,
    /// Cosmetic corner radius for the clipped row shape.
    corner_radius: f32,
    /// The row's actions, nearest to the content edge first.
    actions: ActionSet,
    /// Tray geometry for the row's direction.
    tray: TrayLayout,
    /// Delays bracketing action execution.
    timing: SwipeTiming,
    /// Laid-out row size, assigned by the host.
    size: Size,
    /// Scheduler for the timed continuations.
    scheduler: Arc<SharedTaskScheduler>,
    /// State shared with scheduled continuations.
    shared: Arc<RowShared>,
    /// Offset tracking and clamping.
    tracker: OffsetTracker,
    /// Pointer press/drag/release cycle.
    drag: DragTracker,
    /// Snap-to-rest (and snap-to-revealed) animation.
    snap: SnapAnimation,
    /// Entry/exit clip transition.
    mask: RevealMask,
    /// Latest mask state, refreshed by [`tick`](Self::tick).
    mask_state: MaskState,
    /// Signal emitted when a snap animation reaches its target.
    settled: Signal<()>,
}

impl<C> SwipeRow<C> {
    /// Create a row wrapping `content` with the given actions.
    ///
    /// The scheduler handle is shared with the host (typically via
    /// [`SwipeList`](crate::list::SwipeList)), which pumps it once per
    /// frame.
    pub fn new(content: C, actions: ActionSet, scheduler: Arc<SharedTaskScheduler>) -> Self {
        let direction = RevealDirection::default();
        Self {
            token: RowToken::next(),
            content,
            direction,
            corner_radius: 0.0,
            actions,
            tray: TrayLayout::new(direction),
            timing: SwipeTiming::default(),
            size: Size::ZERO,
            scheduler,
            shared: Arc::new(RowShared::new()),
            tracker: OffsetTracker::new(),
            drag: DragTracker::new(),
            snap: SnapAnimation::new(),
            mask: RevealMask::new(),
            mask_state: MaskState::Idle,
            settled: Signal::new(),
        }
    }

    /// Set the reveal direction using builder pattern.
    pub fn with_direction(mut self, direction: RevealDirection) -> Self {
        self.direction = direction;
        self.tray = TrayLayout::new(direction).with_button_width(self.tray.button_width());
        self
    }

    /// Set the cosmetic corner radius using builder pattern.
    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the execution delays using builder pattern.
    pub fn with_timing(mut self, timing: SwipeTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set the per-button tray width using builder pattern.
    pub fn with_button_width(mut self, width: f32) -> Self {
        self.tray = TrayLayout::new(self.direction).with_button_width(width);
        self
    }

    /// Set the snap animation duration using builder pattern.
    pub fn with_snap_duration(mut self, duration: Duration) -> Self {
        self.snap.set_duration(duration);
        self
    }

    /// Set the entry/exit mask duration using builder pattern.
    pub fn with_mask_duration(mut self, duration: Duration) -> Self {
        self.mask.set_duration(duration);
        self
    }

    // =========================================================================
    // Identity and configuration
    // =========================================================================

    /// The row's stable identity token.
    #[inline]
    pub fn token(&self) -> RowToken {
        self.token
    }

    /// The wrapped content.
    #[inline]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutable access to the wrapped content.
    #[inline]
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// The reveal direction.
    #[inline]
    pub fn direction(&self) -> RevealDirection {
        self.direction
    }

    /// The cosmetic corner radius.
    #[inline]
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// The execution delays.
    #[inline]
    pub fn timing(&self) -> SwipeTiming {
        self.timing
    }

    /// The row's action set.
    #[inline]
    pub fn actions(&self) -> &ActionSet {
        &self.actions
    }

    /// Replace the action set, as on a host render pass that rebuilds its
    /// declarative action list.
    pub fn set_actions(&mut self, actions: ActionSet) {
        self.actions = actions;
    }

    /// The row's laid-out size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Assign the row's laid-out size. Called by the host's layout pass.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Signal emitted when the reported offset changes.
    pub fn offset_changed(&self) -> &Signal<f32> {
        &self.tracker.offset_changed
    }

    /// Signal emitted when the interaction guard flips.
    pub fn interaction_changed(&self) -> &Signal<bool> {
        &self.shared.interaction_changed
    }

    /// Signal emitted after a tapped action's callback has run.
    pub fn action_invoked(&self) -> &Signal<ActionId> {
        &self.shared.action_invoked
    }

    /// Signal emitted when a snap animation reaches its target.
    pub fn settled(&self) -> &Signal<()> {
        &self.settled
    }

    // =========================================================================
    // Derived state
    // =========================================================================

    /// The current reported offset (always <= 0).
    #[inline]
    pub fn offset(&self) -> f32 {
        self.tracker.offset()
    }

    /// Whether the row currently accepts taps and drag starts.
    #[inline]
    pub fn is_interaction_enabled(&self) -> bool {
        self.shared.is_interaction_enabled()
    }

    /// The row's current interaction phase.
    pub fn phase(&self) -> SwipePhase {
        if !self.is_interaction_enabled() {
            SwipePhase::Executing
        } else if self.tracker.is_at_rest() {
            SwipePhase::Resting
        } else {
            SwipePhase::Revealed
        }
    }

    /// Whether the tray (and its backdrop tints) should be drawn.
    #[inline]
    pub fn tray_visible(&self) -> bool {
        !self.tracker.is_at_rest()
    }

    /// Whether the tray currently participates in hit-testing.
    #[inline]
    pub fn tray_hit_testing_enabled(&self) -> bool {
        self.tray_visible() && self.is_interaction_enabled()
    }

    /// Total tray width for the currently enabled actions.
    pub fn tray_width(&self) -> f32 {
        self.tray.tray_width(self.actions.filtered_len())
    }

    /// The horizontal shift to apply to the tray so it tracks the revealed
    /// edge 1:1 with content motion.
    #[inline]
    pub fn tray_shift(&self) -> f32 {
        self.tracker.offset()
    }

    /// Tint painted directly behind the content while the tray is revealed:
    /// the first enabled action's tint, nearest the content edge.
    pub fn content_backdrop_tint(&self) -> Option<Color> {
        if !self.tray_visible() {
            return None;
        }
        self.actions.filtered().first().map(|a| a.tint())
    }

    /// Tint painted behind the outer end of the tray while revealed: the
    /// last enabled action's tint.
    pub fn outer_backdrop_tint(&self) -> Option<Color> {
        if !self.tray_visible() {
            return None;
        }
        self.actions.filtered().last().map(|a| a.tint())
    }

    /// The rect of the button at `index` into the filtered sequence, at the
    /// current offset, in row-local coordinates.
    pub fn button_rect(&self, index: usize) -> Rect {
        self.tray.button_rect(index, self.tracker.offset(), self.size)
    }

    /// The clip rect for the row's entry/exit transition. The visible part
    /// of the row is the intersection of its frame with this rect.
    pub fn mask_rect(&self) -> Rect {
        let frame = Rect::new(0.0, 0.0, self.size.width, self.size.height);
        self.mask.mask_rect(frame, self.mask_state)
    }

    /// Whether an exit transition has completed and the row can be dropped.
    pub fn exit_finished(&self) -> bool {
        self.mask.exit_finished()
    }

    /// Whether the row is currently running (or has finished) its exit
    /// transition.
    pub fn is_exiting(&self) -> bool {
        self.mask.exit_finished()
            || matches!(
                self.mask_state,
                MaskState::Running {
                    phase: MaskPhase::Exiting,
                    ..
                }
            )
    }

    // =========================================================================
    // List transitions
    // =========================================================================

    /// Begin the masked entry transition. Called by the host when the row
    /// is inserted into the list.
    pub fn begin_entry(&mut self) {
        self.mask.begin_entry();
        self.mask_state = self.mask.update();
    }

    /// Begin the masked exit transition. Called by the host when the row is
    /// removed from the list.
    pub fn begin_exit(&mut self) {
        self.mask.begin_exit();
        self.mask_state = self.mask.update();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a pointer press on the row.
    ///
    /// Returns `true` (and accepts the event) if the press started a
    /// press/drag cycle. Presses are ignored while an action is executing.
    pub fn mouse_press(&mut self, event: &mut MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        if !self.is_interaction_enabled() {
            tracing::trace!(target: "swiperail::row", token = %self.token, "press suppressed while executing");
            return false;
        }

        // Grabbing the row interrupts any release-snap in flight.
        self.snap.stop();
        self.drag.press(event.local_pos.x, self.tracker.offset());
        event.base.accept();
        true
    }

    /// Handle a pointer move.
    ///
    /// Once the slop threshold is exceeded the row follows the pointer,
    /// clamped between fully revealed and rest.
    pub fn mouse_move(&mut self, event: &mut MouseMoveEvent) -> bool {
        let Some(dx) = self.drag.drag(event.local_pos.x) else {
            return false;
        };

        // Leading rows run mirrored: a rightward drag reveals.
        let delta = if self.direction.is_mirrored() { -dx } else { dx };
        let raw = (self.drag.start_offset() + delta).max(-self.tray_width());
        self.tracker.record(raw);
        event.base.accept();
        true
    }

    /// Handle a pointer release.
    ///
    /// A release that never exceeded the slop is a tap (see
    /// [`tap`](Self::tap)); a drag end snaps the row to the nearer of its
    /// two resting positions, fully hidden or fully revealed.
    pub fn mouse_release(&mut self, event: &mut MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        match self.drag.release() {
            DragRelease::None => false,
            DragRelease::Tap => {
                let handled = self.tap(event.local_pos);
                if handled {
                    event.base.accept();
                }
                handled
            }
            DragRelease::DragEnd => {
                let offset = self.tracker.offset();
                let tray_width = self.tray_width();
                let target = if tray_width > 0.0 && offset <= -tray_width / 2.0 {
                    -tray_width
                } else {
                    0.0
                };
                if self.snap.start(offset, target) {
                    tracing::trace!(
                        target: "swiperail::row",
                        token = %self.token,
                        target_offset = target,
                        "drag released, snapping"
                    );
                }
                event.base.accept();
                true
            }
        }
    }

    /// Handle a tap at a row-local point.
    ///
    /// If the point lands on an enabled tray button, the execution sequence
    /// starts and `true` is returned. Taps are silently ignored while an
    /// action is executing or while the tray is hidden.
    pub fn tap(&mut self, point: Point) -> bool {
        if !self.is_interaction_enabled() {
            tracing::trace!(target: "swiperail::row", token = %self.token, "tap suppressed while executing");
            return false;
        }
        if !self.tray_visible() {
            return false;
        }

        let (id, callback) = {
            let filtered = self.actions.filtered();
            let Some(index) =
                self.tray
                    .hit_test(point, self.tracker.offset(), filtered.len(), self.size)
            else {
                return false;
            };
            let action = filtered[index];
            (action.id(), action.callback())
        };

        self.execute(id, callback);
        true
    }

    /// Run the execution sequence for a tapped action.
    fn execute(&mut self, id: ActionId, callback: ActionCallback) {
        tracing::debug!(
            target: "swiperail::row",
            token = %self.token,
            action = %id,
            anchor = ?self.direction.rest_anchor(),
            "action tapped, snapping to rest"
        );

        // 1. Suppress further taps and drag starts on this row.
        self.shared.set_interaction_enabled(false);

        // 2. Snap the viewport back to its rest anchor, animated.
        self.snap.start(self.tracker.offset(), 0.0);

        // 3-6. Settle, invoke exactly once, cool down, re-enable. Both
        // delays are cooperative yields on the shared scheduler; if the
        // callback removes the row from the list, the cooldown step flips a
        // flag on a discarded state and nothing else happens.
        let shared = self.shared.clone();
        let scheduler = self.scheduler.clone();
        let cooldown = self.timing.cooldown;
        self.scheduler.schedule_once(self.timing.snap_settle, move || {
            callback();
            shared.action_invoked.emit(id);
            scheduler.schedule_once(cooldown, move || {
                shared.set_interaction_enabled(true);
            });
        });
    }

    // =========================================================================
    // Frame pump
    // =========================================================================

    /// Advance the row's animations. Called once per frame by the host.
    pub fn tick(&mut self) {
        let was_snapping = self.snap.is_running();
        match self.snap.update() {
            SnapState::Running { offset, .. } => {
                self.tracker.record(offset);
            }
            SnapState::Idle => {
                if was_snapping {
                    self.tracker.record(self.snap.target());
                    self.settled.emit(());
                }
            }
        }

        self.mask_state = self.mask.update();
    }
}

impl<C: fmt::Debug> fmt::Debug for SwipeRow<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeRow")
            .field("token", &self.token)
            .field("direction", &self.direction)
            .field("phase", &self.phase())
            .field("offset", &self.offset())
            .field("content", &self.content)
            .finish_non_exhaustive()
    }
}
