//! Unit tests for LabelScopeStack resolution and jump-target lifecycle

use compiler::{CompileError, LabelScopeStack, ScopeKind};

#[test]
fn test_unlabeled_break_targets_nearest_entry() {
    let mut scopes = LabelScopeStack::new();
    let outer = scopes.enter(ScopeKind::Loop, None, 0);
    let inner = scopes.enter(ScopeKind::Loop, None, 1);

    let inner_break = scopes.resolve_break(None).unwrap();

    scopes.leave(inner, 40, Some(30)).unwrap();
    scopes.leave(outer, 60, Some(10)).unwrap();

    assert_eq!(scopes.address_of(inner_break), Some(40));
}

#[test]
fn test_unlabeled_continue_skips_switch() {
    let mut scopes = LabelScopeStack::new();
    let looped = scopes.enter(ScopeKind::Loop, None, 0);
    let switched = scopes.enter(ScopeKind::Switch, None, 1);

    // `continue;` inside a switch inside a loop targets the loop.
    let target = scopes.resolve_continue(None).unwrap();

    scopes.leave(switched, 20, None).unwrap();
    scopes.leave(looped, 50, Some(8)).unwrap();

    assert_eq!(scopes.address_of(target), Some(8));
}

#[test]
fn test_labeled_break_matches_first_label() {
    let mut scopes = LabelScopeStack::new();
    let outer = scopes.enter(ScopeKind::NamedLabel, Some("outer"), 0);
    let inner = scopes.enter(ScopeKind::Loop, Some("inner"), 1);

    let target = scopes.resolve_break(Some("outer")).unwrap();

    scopes.leave(inner, 15, Some(5)).unwrap();
    scopes.leave(outer, 25, None).unwrap();

    assert_eq!(scopes.address_of(target), Some(25));
}

#[test]
fn test_unmatched_label_is_unresolved() {
    let mut scopes = LabelScopeStack::new();
    let _handle = scopes.enter(ScopeKind::Loop, Some("a"), 0);

    assert_eq!(
        scopes.resolve_break(Some("b")),
        Err(CompileError::UnresolvedLabel {
            label: Some("b".to_string())
        })
    );
    assert_eq!(
        scopes.resolve_continue(Some("b")),
        Err(CompileError::UnresolvedLabel {
            label: Some("b".to_string())
        })
    );
}

#[test]
fn test_continue_targeting_switch_label_fails() {
    let mut scopes = LabelScopeStack::new();
    let _handle = scopes.enter(ScopeKind::Switch, Some("s"), 0);

    assert_eq!(
        scopes.resolve_continue(Some("s")),
        Err(CompileError::ContinueOutsideLoop {
            label: Some("s".to_string())
        })
    );
}

#[test]
fn test_continue_targeting_plain_label_fails() {
    let mut scopes = LabelScopeStack::new();
    let _outer = scopes.enter(ScopeKind::Loop, None, 0);
    let _handle = scopes.enter(ScopeKind::NamedLabel, Some("block"), 1);

    // The search stops at the matching label even though an enclosing
    // loop exists.
    assert_eq!(
        scopes.resolve_continue(Some("block")),
        Err(CompileError::ContinueOutsideLoop {
            label: Some("block".to_string())
        })
    );
}

#[test]
fn test_continue_with_no_enclosing_loop_fails() {
    let mut scopes = LabelScopeStack::new();
    let _handle = scopes.enter(ScopeKind::Switch, None, 0);

    assert_eq!(
        scopes.resolve_continue(None),
        Err(CompileError::ContinueOutsideLoop { label: None })
    );
}

#[test]
fn test_break_outside_any_scope_fails() {
    let mut scopes = LabelScopeStack::new();
    assert_eq!(
        scopes.resolve_break(None),
        Err(CompileError::UnresolvedLabel { label: None })
    );
}

#[test]
fn test_reference_counting_across_multiple_jumps() {
    let mut scopes = LabelScopeStack::new();
    let handle = scopes.enter(ScopeKind::Loop, None, 0);

    let first = scopes.resolve_break(None).unwrap();
    let second = scopes.resolve_break(None).unwrap();
    assert_eq!(first, second);
    assert_eq!(scopes.pending_references(first), 2);

    scopes.commit_reference(first);
    assert_eq!(scopes.pending_references(first), 1);

    scopes.leave(handle, 33, Some(3)).unwrap();

    // Leaving does not discard the target; the last jump can still be
    // patched afterward.
    assert_eq!(scopes.address_of(first), Some(33));
    scopes.commit_reference(first);
    assert_eq!(scopes.pending_references(first), 0);
}

#[test]
fn test_address_unavailable_before_leave() {
    let mut scopes = LabelScopeStack::new();
    let handle = scopes.enter(ScopeKind::Loop, None, 0);
    let target = scopes.resolve_break(None).unwrap();

    assert_eq!(scopes.address_of(target), None);
    scopes.leave(handle, 12, Some(2)).unwrap();
    assert_eq!(scopes.address_of(target), Some(12));
}

#[test]
fn test_break_and_continue_targets_are_distinct() {
    let mut scopes = LabelScopeStack::new();
    let handle = scopes.enter(ScopeKind::Loop, Some("l"), 0);

    let brk = scopes.resolve_break(Some("l")).unwrap();
    let cont = scopes.resolve_continue(Some("l")).unwrap();
    assert_ne!(brk, cont);

    scopes.leave(handle, 90, Some(10)).unwrap();
    assert_eq!(scopes.address_of(brk), Some(90));
    assert_eq!(scopes.address_of(cont), Some(10));
}

#[test]
fn test_nested_enter_leave_respects_stack_discipline() {
    let mut scopes = LabelScopeStack::new();
    let a = scopes.enter(ScopeKind::Loop, None, 0);
    let b = scopes.enter(ScopeKind::Switch, None, 1);
    let c = scopes.enter(ScopeKind::Loop, None, 2);

    assert_eq!(scopes.depth(), 3);
    scopes.leave(c, 1, Some(0)).unwrap();
    scopes.leave(b, 2, None).unwrap();
    scopes.leave(a, 3, Some(0)).unwrap();
    assert!(scopes.is_empty());
}

#[test]
fn test_leave_with_stale_handle_fails() {
    let mut scopes = LabelScopeStack::new();
    let handle = scopes.enter(ScopeKind::Loop, None, 0);
    scopes.leave(handle, 1, Some(0)).unwrap();

    // Re-entering reuses the stack slot but not the generation.
    let fresh = scopes.enter(ScopeKind::Loop, None, 0);
    assert_eq!(
        scopes.leave(handle, 1, Some(0)),
        Err(CompileError::UnbalancedScope)
    );
    scopes.leave(fresh, 2, Some(0)).unwrap();
}

#[test]
fn test_resolution_between_matching_enter_leave_pairs() {
    // Walks a shape like: outer: for { switch { for { break outer; } } }
    let mut scopes = LabelScopeStack::new();
    let outer = scopes.enter(ScopeKind::Loop, Some("outer"), 0);
    let switched = scopes.enter(ScopeKind::Switch, None, 1);
    let inner = scopes.enter(ScopeKind::Loop, None, 2);

    let to_outer = scopes.resolve_break(Some("outer")).unwrap();
    let to_inner = scopes.resolve_continue(None).unwrap();

    scopes.leave(inner, 10, Some(6)).unwrap();
    scopes.leave(switched, 14, None).unwrap();
    scopes.leave(outer, 20, Some(2)).unwrap();

    assert_eq!(scopes.address_of(to_outer), Some(20));
    assert_eq!(scopes.address_of(to_inner), Some(6));
}
