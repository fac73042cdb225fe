use super::*;
use pretty_assertions::assert_eq;

#[test]
fn values_print_like_source_literals() {
    assert_eq!(Value::Int(-15).to_string(), "-15");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Bool(false).to_string(), "false");
}

#[test]
fn kinds() {
    assert_eq!(Value::from(3).kind(), ValueKind::Int);
    assert_eq!(Value::from(false).kind(), ValueKind::Bool);
    assert_eq!(ValueKind::Int.to_string(), "int");
    assert_eq!(ValueKind::Bool.to_string(), "bool");
}

#[test]
fn projections() {
    assert_eq!(Value::Int(4).as_int(), Some(4));
    assert_eq!(Value::Int(4).as_bool(), None);
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Bool(true).as_int(), None);
}

#[test]
fn addresses_display_with_marker() {
    assert_eq!(Address::new(3).to_string(), "@3");
    assert!(Address::new(1) < Address::new(2));
}

#[test]
fn denotable_descriptions() {
    assert_eq!(Denotable::Value(Value::Int(1)).describe(), "constant");
    assert_eq!(Denotable::Address(Address::new(0)).describe(), "variable");
}
