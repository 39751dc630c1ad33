use super::*;

#[test]
fn notice_state_starts_empty() {
    assert!(NoticeState::default().current.is_none());
}

#[test]
fn show_replaces_current_notice() {
    let mut state = NoticeState::default();
    state.show("first", Severity::Info);
    let id = state.show("second", Severity::Error);
    let current = state.current.unwrap();
    assert_eq!(current.id, id);
    assert_eq!(current.message, "second");
    assert_eq!(current.severity, Severity::Error);
}

#[test]
fn ids_increase() {
    let mut state = NoticeState::default();
    let a = state.show("a", Severity::Info);
    let b = state.show("b", Severity::Info);
    assert!(b > a);
}

#[test]
fn dismiss_closes_matching_notice() {
    let mut state = NoticeState::default();
    let id = state.show("bye", Severity::Success);
    state.dismiss(id);
    assert!(state.current.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = NoticeState::default();
    let old = state.show("old", Severity::Info);
    state.show("new", Severity::Warning);
    state.dismiss(old);
    assert_eq!(state.current.unwrap().message, "new");
}

#[test]
fn severity_classes_are_distinct() {
    let classes = [Severity::Info, Severity::Success, Severity::Warning, Severity::Error].map(Severity::class);
    for (i, a) in classes.iter().enumerate() {
        for b in &classes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
