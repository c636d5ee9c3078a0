//! Integration tests for the swipe row state machine.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use swiperail::prelude::*;

const ROW_SIZE: Size = Size::new(300.0, 80.0);
const MID_Y: f32 = 40.0;

fn trace_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("swiperail=trace")
        .with_test_writer()
        .try_init();
}

/// Short delays so the full execution sequence fits in a quick test, with
/// enough slack to observe the in-between states.
fn fast_timing() -> SwipeTiming {
    SwipeTiming {
        snap_settle: Duration::from_millis(40),
        cooldown: Duration::from_millis(25),
    }
}

fn make_row(
    actions: ActionSet,
    direction: RevealDirection,
    scheduler: Arc<SharedTaskScheduler>,
) -> SwipeRow<&'static str> {
    let mut row = SwipeRow::new("card", actions, scheduler)
        .with_direction(direction)
        .with_timing(fast_timing())
        .with_snap_duration(Duration::ZERO)
        .with_mask_duration(Duration::ZERO);
    row.set_size(ROW_SIZE);
    row
}

fn counting_action(tint: Color, count: &Arc<AtomicUsize>) -> SwipeAction {
    let count = count.clone();
    SwipeAction::new(tint, "trash.fill", move || {
        count.fetch_add(1, Ordering::SeqCst);
    })
}

fn drag(row: &mut SwipeRow<&'static str>, from_x: f32, to_x: f32) {
    let mut press = MousePressEvent::new(MouseButton::Left, Point::new(from_x, MID_Y));
    row.mouse_press(&mut press);
    let mut mv = MouseMoveEvent::new(Point::new(to_x, MID_Y));
    row.mouse_move(&mut mv);
    let mut release = MouseReleaseEvent::new(MouseButton::Left, Point::new(to_x, MID_Y));
    row.mouse_release(&mut release);
    row.tick();
}

#[test]
fn rest_state_hides_tray_and_disables_hit_testing() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count = Arc::new(AtomicUsize::new(0));
    let actions = ActionSet::new(vec![counting_action(Color::WHITE, &count)]);
    let mut row = make_row(actions, RevealDirection::Trailing, scheduler);

    assert_eq!(row.offset(), 0.0);
    assert!(!row.tray_visible());
    assert!(!row.tray_hit_testing_enabled());
    assert_eq!(row.phase(), SwipePhase::Resting);
    assert_eq!(row.content_backdrop_tint(), None);
    assert_eq!(row.outer_backdrop_tint(), None);

    // A tap where the tray would be does nothing while at rest.
    assert!(!row.tap(Point::new(250.0, MID_Y)));
    assert_eq!(count.load(Ordering::SeqCst), 0);

    // Reveal, then drag back to rest: the invariant holds again.
    drag(&mut row, 200.0, 50.0);
    assert!(row.tray_visible());
    drag(&mut row, 50.0, 220.0);
    assert_eq!(row.offset(), 0.0);
    assert!(!row.tray_visible());
    assert!(!row.tray_hit_testing_enabled());
}

#[test]
fn displacement_past_rest_is_reported_as_zero() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count = Arc::new(AtomicUsize::new(0));
    let actions = ActionSet::new(vec![counting_action(Color::WHITE, &count)]);
    let mut row = make_row(actions, RevealDirection::Trailing, scheduler);

    let reported = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let reported_clone = reported.clone();
    row.offset_changed().connect(move |&offset| {
        reported_clone.lock().push(offset);
    });

    // Drag the content past rest toward the opposite edge.
    let mut press = MousePressEvent::new(MouseButton::Left, Point::new(50.0, MID_Y));
    row.mouse_press(&mut press);
    let mut mv = MouseMoveEvent::new(Point::new(200.0, MID_Y));
    row.mouse_move(&mut mv);

    assert_eq!(row.offset(), 0.0);
    let mut release = MouseReleaseEvent::new(MouseButton::Left, Point::new(200.0, MID_Y));
    row.mouse_release(&mut release);
    row.tick();

    assert_eq!(row.offset(), 0.0);
    assert!(reported.lock().iter().all(|&offset| offset <= 0.0));
}

#[test]
fn drag_release_snaps_to_nearer_resting_position() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count = Arc::new(AtomicUsize::new(0));
    let actions = ActionSet::new(vec![
        counting_action(Color::WHITE, &count),
        counting_action(Color::BLACK, &count),
    ]);
    let mut row = make_row(actions, RevealDirection::Trailing, scheduler);

    // Past the halfway point: settles fully revealed.
    drag(&mut row, 250.0, 100.0);
    assert_eq!(row.offset(), -row.tray_width());
    assert_eq!(row.phase(), SwipePhase::Revealed);

    // Nudge back under the halfway point: settles hidden.
    drag(&mut row, 50.0, 210.0);
    assert_eq!(row.offset(), 0.0);
    assert_eq!(row.phase(), SwipePhase::Resting);
}

#[test]
fn second_tap_while_executing_has_no_effect() {
    trace_init();
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count = Arc::new(AtomicUsize::new(0));
    let actions = ActionSet::new(vec![counting_action(Color::WHITE, &count)]);
    let mut row = make_row(actions, RevealDirection::Trailing, scheduler.clone());

    drag(&mut row, 250.0, 120.0);
    assert!(row.tap(Point::new(250.0, MID_Y)));
    assert!(!row.is_interaction_enabled());
    assert_eq!(row.phase(), SwipePhase::Executing);

    // Rapid repeated taps while the first action is mid-flight.
    for _ in 0..10 {
        assert!(!row.tap(Point::new(250.0, MID_Y)));
    }

    // Drag starts are suppressed too.
    let mut press = MousePressEvent::new(MouseButton::Left, Point::new(250.0, MID_Y));
    assert!(!row.mouse_press(&mut press));
    assert!(!press.base.is_accepted());

    // Run the sequence to completion: exactly one invocation.
    std::thread::sleep(Duration::from_millis(60));
    scheduler.process_ready();
    std::thread::sleep(Duration::from_millis(40));
    scheduler.process_ready();

    assert!(row.is_interaction_enabled());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn callback_runs_exactly_once_between_the_two_delays() {
    trace_init();
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count = Arc::new(AtomicUsize::new(0));
    let actions = ActionSet::new(vec![counting_action(Color::WHITE, &count)]);
    let mut row = make_row(actions, RevealDirection::Trailing, scheduler.clone());

    let invoked_ids = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let invoked_clone = invoked_ids.clone();
    row.action_invoked().connect(move |&id| {
        invoked_clone.lock().push(id);
    });

    drag(&mut row, 250.0, 120.0);
    let expected_id = row.actions().filtered()[0].id();
    assert!(row.tap(Point::new(250.0, MID_Y)));

    // Before the settle delay elapses, nothing has run.
    scheduler.process_ready();
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert!(!row.is_interaction_enabled());

    // After the settle delay: invoked exactly once, still cooling down.
    std::thread::sleep(Duration::from_millis(60));
    scheduler.process_ready();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!row.is_interaction_enabled());
    assert_eq!(*invoked_ids.lock(), vec![expected_id]);

    // After the cooldown: re-enabled, still exactly one invocation.
    std::thread::sleep(Duration::from_millis(40));
    scheduler.process_ready();
    assert!(row.is_interaction_enabled());
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(row.phase(), SwipePhase::Resting);
}

#[test]
fn snap_back_precedes_the_callback() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count = Arc::new(AtomicUsize::new(0));
    let actions = ActionSet::new(vec![counting_action(Color::WHITE, &count)]);
    let mut row = make_row(actions, RevealDirection::Trailing, scheduler.clone());

    drag(&mut row, 250.0, 120.0);
    row.tap(Point::new(250.0, MID_Y));

    // The snap to rest starts immediately with the tap.
    row.tick();
    assert_eq!(row.offset(), 0.0);
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn filtered_actions_drive_tray_width_and_hit_testing() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let enabled_count = Arc::new(AtomicUsize::new(0));
    let disabled_count = Arc::new(AtomicUsize::new(0));

    let actions = ActionSet::new(vec![
        counting_action(Color::WHITE, &enabled_count),
        counting_action(Color::BLACK, &disabled_count).with_enabled(false),
    ]);
    let mut row = make_row(actions, RevealDirection::Trailing, scheduler.clone());

    // One of two actions enabled: the tray is one button wide.
    assert_eq!(row.tray_width(), 100.0);

    drag(&mut row, 250.0, 120.0);
    assert_eq!(row.offset(), -100.0);

    // Both backdrop tints come from the single enabled action.
    assert_eq!(row.content_backdrop_tint(), Some(Color::WHITE));
    assert_eq!(row.outer_backdrop_tint(), Some(Color::WHITE));

    // The disabled action is not tappable anywhere in the tray.
    assert!(row.tap(Point::new(250.0, MID_Y)));
    std::thread::sleep(Duration::from_millis(60));
    scheduler.process_ready();
    std::thread::sleep(Duration::from_millis(40));
    scheduler.process_ready();
    assert_eq!(enabled_count.load(Ordering::SeqCst), 1);
    assert_eq!(disabled_count.load(Ordering::SeqCst), 0);
}

#[test]
fn toggling_enabled_between_renders_updates_the_tray_immediately() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count = Arc::new(AtomicUsize::new(0));
    let actions = ActionSet::new(vec![
        counting_action(Color::WHITE, &count),
        counting_action(Color::BLACK, &count),
        counting_action(Color::TRANSPARENT, &count),
    ]);
    let row = make_row(actions, RevealDirection::Trailing, scheduler);

    assert_eq!(row.tray_width(), 300.0);

    row.actions().iter().nth(1).unwrap().set_enabled(false);
    assert_eq!(row.tray_width(), 200.0);
    assert_eq!(row.actions().filtered_len(), 2);

    row.actions().iter().nth(1).unwrap().set_enabled(true);
    assert_eq!(row.tray_width(), 300.0);
}

#[test]
fn empty_filtered_set_leaves_tray_unreachable() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count = Arc::new(AtomicUsize::new(0));
    let actions = ActionSet::new(vec![
        counting_action(Color::WHITE, &count).with_enabled(false),
    ]);
    let mut row = make_row(actions, RevealDirection::Trailing, scheduler);

    assert_eq!(row.tray_width(), 0.0);

    // A drag cannot open a zero-width tray.
    drag(&mut row, 250.0, 50.0);
    assert_eq!(row.offset(), 0.0);
    assert!(!row.tray_visible());
    assert!(!row.tap(Point::new(250.0, MID_Y)));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn leading_and_trailing_mirror_edges_but_share_semantics() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count_a = Arc::new(AtomicUsize::new(0));
    let count_b = Arc::new(AtomicUsize::new(0));

    let actions_a = ActionSet::new(vec![
        counting_action(Color::WHITE, &count_a),
        counting_action(Color::BLACK, &count_a),
    ]);
    let actions_b = ActionSet::new(vec![
        counting_action(Color::WHITE, &count_b),
        counting_action(Color::BLACK, &count_b),
    ]);

    let mut row_a = make_row(actions_a, RevealDirection::Trailing, scheduler.clone());
    let mut row_b = make_row(actions_b, RevealDirection::Leading, scheduler.clone());

    // Drag row A (trailing) left by 150, row B (leading) right by 150.
    drag(&mut row_a, 200.0, 50.0);
    drag(&mut row_b, 50.0, 200.0);

    // Both settle fully revealed with identical reported offsets.
    assert_eq!(row_a.offset(), -200.0);
    assert_eq!(row_b.offset(), -200.0);
    assert!(row_a.tray_visible());
    assert!(row_b.tray_visible());

    // No action tapped yet: interaction stays enabled on both.
    assert!(row_a.is_interaction_enabled());
    assert!(row_b.is_interaction_enabled());

    // Tray edges mirror: trailing hugs the right edge, leading the left.
    assert_eq!(row_a.button_rect(0).left(), 100.0);
    assert_eq!(row_a.button_rect(1).left(), 200.0);
    assert_eq!(row_b.button_rect(0).left(), 100.0);
    assert_eq!(row_b.button_rect(1).left(), 0.0);

    // The outermost button is at the right for A, at the left for B.
    assert_eq!(
        row_a.tap(Point::new(250.0, MID_Y)),
        row_b.tap(Point::new(50.0, MID_Y))
    );

    // Callback timing is identical: both fire after the same settle delay.
    scheduler.process_ready();
    assert_eq!(count_a.load(Ordering::SeqCst), 0);
    assert_eq!(count_b.load(Ordering::SeqCst), 0);

    std::thread::sleep(Duration::from_millis(60));
    scheduler.process_ready();
    assert_eq!(count_a.load(Ordering::SeqCst), 1);
    assert_eq!(count_b.load(Ordering::SeqCst), 1);
}

#[test]
fn concurrently_executing_rows_stay_independent() {
    let scheduler = Arc::new(SharedTaskScheduler::new());
    let count_a = Arc::new(AtomicUsize::new(0));
    let count_b = Arc::new(AtomicUsize::new(0));

    let mut row_a = make_row(
        ActionSet::new(vec![counting_action(Color::WHITE, &count_a)]),
        RevealDirection::Trailing,
        scheduler.clone(),
    );
    let mut row_b = make_row(
        ActionSet::new(vec![counting_action(Color::BLACK, &count_b)]),
        RevealDirection::Trailing,
        scheduler.clone(),
    );

    drag(&mut row_a, 250.0, 120.0);
    drag(&mut row_b, 250.0, 120.0);

    assert!(row_a.tap(Point::new(250.0, MID_Y)));
    assert!(row_b.tap(Point::new(250.0, MID_Y)));
    assert!(!row_a.is_interaction_enabled());
    assert!(!row_b.is_interaction_enabled());

    std::thread::sleep(Duration::from_millis(60));
    scheduler.process_ready();
    std::thread::sleep(Duration::from_millis(40));
    scheduler.process_ready();

    assert_eq!(count_a.load(Ordering::SeqCst), 1);
    assert_eq!(count_b.load(Ordering::SeqCst), 1);
    assert!(row_a.is_interaction_enabled());
    assert!(row_b.is_interaction_enabled());
}
