use pretty_assertions::assert_eq;

use cr_app::snapshot::{Outcome, ViewState};

#[test]
fn resolution_with_a_current_ticket_installs_the_snapshot() {
    let mut view: ViewState<String> = ViewState::new();
    assert!(!view.in_flight());
    assert_eq!(view.snapshot(), None);

    let ticket = view.begin();
    assert!(view.in_flight());

    assert!(view.resolve(ticket, Outcome::Ready("report".to_string())));
    assert!(!view.in_flight());
    assert_eq!(view.snapshot(), Some(&Outcome::Ready("report".to_string())));
}

#[test]
fn a_newer_action_makes_the_older_request_stale() {
    let mut view: ViewState<String> = ViewState::new();

    let first = view.begin();
    let second = view.begin();

    // The stale resolution is dropped outright.
    assert!(!view.resolve(first, Outcome::Ready("stale".to_string())));
    assert_eq!(view.snapshot(), None);
    assert!(view.in_flight());

    // The newest request still lands.
    assert!(view.resolve(second, Outcome::Ready("fresh".to_string())));
    assert_eq!(view.snapshot(), Some(&Outcome::Ready("fresh".to_string())));
}

#[test]
fn stale_resolution_after_a_result_does_not_overwrite_it() {
    let mut view: ViewState<u32> = ViewState::new();

    let first = view.begin();
    let second = view.begin();
    assert!(view.resolve(second, Outcome::Ready(2)));

    assert!(!view.resolve(first, Outcome::Ready(1)));
    assert_eq!(view.snapshot(), Some(&Outcome::Ready(2)));
}

#[test]
fn failures_replace_the_snapshot_wholesale() {
    let mut view: ViewState<u32> = ViewState::new();

    let t1 = view.begin();
    assert!(view.resolve(t1, Outcome::Ready(7)));

    let t2 = view.begin();
    // The previous result stays visible while the new request runs.
    assert_eq!(view.snapshot(), Some(&Outcome::Ready(7)));

    assert!(view.resolve(t2, Outcome::Failed("The service is temporarily busy".to_string())));
    assert_eq!(
        view.snapshot(),
        Some(&Outcome::Failed("The service is temporarily busy".to_string()))
    );
}

#[test]
fn a_spent_ticket_cannot_resolve_twice() {
    let mut view: ViewState<u32> = ViewState::new();
    let ticket = view.begin();
    assert!(view.resolve(ticket, Outcome::Ready(1)));
    assert!(!view.resolve(ticket, Outcome::Ready(2)));
    assert_eq!(view.snapshot(), Some(&Outcome::Ready(1)));
}
