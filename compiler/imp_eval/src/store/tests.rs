use super::*;
use crate::EvalErrorKind;
use pretty_assertions::assert_eq;

#[test]
fn allocation_is_sequential() {
    let mut store = Store::new();
    let a = store.allocate(Value::Int(10));
    let b = store.allocate(Value::Bool(true));
    assert_eq!(a, Address::new(0));
    assert_eq!(b, Address::new(1));
    assert_eq!(store.next_address(), Address::new(2));
    assert_eq!(store.access(a), Ok(Value::Int(10)));
    assert_eq!(store.access(b), Ok(Value::Bool(true)));
}

#[test]
fn update_overwrites() {
    let mut store = Store::new();
    let a = store.allocate(Value::Int(10));
    store.update(a, Value::Int(20)).unwrap();
    assert_eq!(store.access(a), Ok(Value::Int(20)));
}

#[test]
fn unallocated_addresses_are_rejected() {
    let mut store = Store::new();
    let missing = Address::new(3);
    assert_eq!(
        store.access(missing).unwrap_err().kind(),
        &EvalErrorKind::UnallocatedAddress { address: missing }
    );
    assert!(store.update(missing, Value::Int(1)).is_err());
}

#[test]
fn reset_cursor_reuses_addresses_and_keeps_contents() {
    let mut store = Store::new();
    store.allocate(Value::Int(1));
    let mark = store.next_address();
    let inner = store.allocate(Value::Int(99));
    store.reset_cursor(mark);

    assert_eq!(store.next_address(), mark);
    // Stale content is still readable without the liveness check.
    assert_eq!(store.access(inner), Ok(Value::Int(99)));

    let reused = store.allocate(Value::Int(7));
    assert_eq!(reused, inner);
    assert_eq!(store.access(reused), Ok(Value::Int(7)));
    assert_eq!(store.len(), 2);
}

#[test]
fn liveness_check_rejects_reclaimed_addresses() {
    let mut store = Store::new();
    let mark = store.next_address();
    let inner = store.allocate(Value::Int(5));
    assert_eq!(store.access_live(inner), Ok(Value::Int(5)));
    store.reset_cursor(mark);

    assert!(!store.is_live(inner));
    assert_eq!(
        store.access_live(inner).unwrap_err().kind(),
        &EvalErrorKind::StaleAddress {
            address: inner,
            next: mark
        }
    );
}

#[test]
fn liveness_check_still_reports_unallocated() {
    let store = Store::new();
    let err = store.access_live(Address::new(0)).unwrap_err();
    assert_eq!(err.code(), "E3008");
}

#[test]
fn rollback_undoes_allocations_and_updates() {
    let mut store = Store::new();
    let x = store.allocate(Value::Int(1));

    store.checkpoint();
    store.update(x, Value::Int(2)).unwrap();
    store.update(x, Value::Int(3)).unwrap();
    store.allocate(Value::Int(4));
    store.rollback();

    assert_eq!(store.access(x), Ok(Value::Int(1)));
    assert_eq!(store.next_address(), Address::new(1));
    assert_eq!(store.len(), 1);
}

#[test]
fn rollback_restores_overwritten_stale_cells() {
    let mut store = Store::new();
    let mark = store.next_address();
    let stale = store.allocate(Value::Int(8));
    store.reset_cursor(mark);

    store.checkpoint();
    store.allocate(Value::Int(9));
    store.rollback();

    assert_eq!(store.access(stale), Ok(Value::Int(8)));
    assert_eq!(store.next_address(), mark);
}

#[test]
fn commit_keeps_changes() {
    let mut store = Store::new();
    store.checkpoint();
    let x = store.allocate(Value::Int(1));
    store.commit();
    store.rollback();
    assert_eq!(store.access(x), Ok(Value::Int(1)));
}

#[test]
fn rollback_without_checkpoint_is_a_no_op() {
    let mut store = Store::new();
    let x = store.allocate(Value::Bool(false));
    store.rollback();
    assert_eq!(store.access(x), Ok(Value::Bool(false)));
}
