use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.push(Notice::success("Signed in successfully!"));
    let second = state.push(Notice::error("Invalid login credentials"));
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].level, NoticeLevel::Error);
    assert_eq!(state.items[1].message, "Invalid login credentials");
}

#[test]
fn push_evicts_oldest_beyond_cap() {
    let mut state = ToastState::default();
    for n in 0..=MAX_VISIBLE {
        state.push(Notice::success(format!("toast {n}")));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    assert_eq!(state.items[0].message, "toast 1");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(Notice::success("a"));
    let drop = state.push(Notice::success("b"));
    state.dismiss(drop);
    state.dismiss(999);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![keep]);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let id = state.push(Notice::success("a"));
    state.dismiss(id);
    assert_ne!(state.push(Notice::success("b")), id);
}

#[test]
fn class_reflects_level() {
    let mut state = ToastState::default();
    state.push(Notice::error("nope"));
    assert_eq!(state.items[0].class(), "toast toast--error");
}

#[test]
fn notifier_pushes_into_signal() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(ToastState::default());
        ToastNotifier::new(toasts).notify(Notice::success("Signed out."));
        assert_eq!(toasts.get_untracked().items.len(), 1);
        assert_eq!(toasts.get_untracked().items[0].message, "Signed out.");
    });
}
