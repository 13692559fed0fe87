//! View/navigation state machine tests.

use done::models::view::{NavState, Swipe, View};

#[test]
fn starts_on_tasks_with_input_closed() {
    let nav = NavState::new();
    assert_eq!(nav.view, View::Tasks);
    assert!(!nav.input_active);
}

#[test]
fn select_is_idempotent_on_reentry() {
    let mut nav = NavState::new();
    nav.select(View::Insights);
    let snapshot = nav;

    nav.select(View::Insights);
    assert_eq!(nav, snapshot);
}

#[test]
fn activate_toggles_input_only_on_tasks() {
    let mut nav = NavState::new();

    nav.activate();
    assert!(nav.input_active);
    nav.activate();
    assert!(!nav.input_active);

    nav.select(View::Settings);
    nav.activate();
    assert!(!nav.input_active);
}

#[test]
fn opening_input_dismisses_overlay_panels() {
    let mut nav = NavState::new();
    nav.select(View::Insights);

    nav.toggle_input();
    assert_eq!(nav.view, View::Tasks);
    assert!(nav.input_active);
}

#[test]
fn close_returns_to_tasks() {
    let mut nav = NavState::new();
    nav.select(View::Settings);
    nav.close();
    assert_eq!(nav.view, View::Tasks);
}

#[test]
fn swipe_moves_along_the_rail_and_clamps() {
    // rail order: Insights — Tasks — Settings
    let mut nav = NavState::new();

    nav.swipe(Swipe::Right);
    assert_eq!(nav.view, View::Insights);

    // already at the left end
    nav.swipe(Swipe::Right);
    assert_eq!(nav.view, View::Insights);

    nav.swipe(Swipe::Left);
    assert_eq!(nav.view, View::Tasks);
    nav.swipe(Swipe::Left);
    assert_eq!(nav.view, View::Settings);

    // already at the right end
    nav.swipe(Swipe::Left);
    assert_eq!(nav.view, View::Settings);
}
