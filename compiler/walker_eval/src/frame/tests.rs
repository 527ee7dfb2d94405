use pretty_assertions::assert_eq;

use super::*;

#[test]
fn starts_with_one_empty_frame() {
    let frames = FrameStack::new();
    assert_eq!(frames.depth(), 1);
    assert!(frames.top().is_none());
}

#[test]
fn collapse_onto_none_keeps_kind() {
    let mut frames = FrameStack::new();
    frames.push();
    frames.assume(Value::Number(3.0));
    frames.collapse();
    assert_eq!(frames.depth(), 1);
    assert_eq!(frames.top(), &Value::Number(3.0));
}

#[test]
fn collapse_onto_text_concatenates_in_order() {
    let mut frames = FrameStack::new();
    frames.append_bytes(b"x");
    frames.push();
    frames.assume(Value::Number(3.0));
    frames.collapse();
    frames.append_byte(b'y');
    assert_eq!(frames.top(), &Value::string("x3y"));
}

#[test]
fn collapse_onto_non_text_stringifies_parent() {
    let mut frames = FrameStack::new();
    frames.assume(Value::Boolean(true));
    frames.push();
    frames.assume(Value::Integer(-2));
    frames.collapse();
    assert_eq!(frames.top(), &Value::string("1-2"));
}

#[test]
fn collapse_of_none_child_onto_text_appends_nothing() {
    let mut frames = FrameStack::new();
    frames.append_bytes(b"ab");
    frames.push();
    frames.collapse();
    assert_eq!(frames.top(), &Value::string("ab"));
}

#[test]
fn discard_replaces_parent_without_merging() {
    let mut frames = FrameStack::new();
    frames.append_bytes(b"partial");
    frames.push();
    frames.assume(Value::error("boom"));
    frames.discard();
    assert_eq!(frames.depth(), 1);
    assert_eq!(frames.top(), &Value::error("boom"));
}

#[test]
fn append_stringifies_first() {
    let mut frames = FrameStack::new();
    frames.assume(Value::Number(1.5));
    frames.append_byte(b'!');
    assert_eq!(frames.top(), &Value::string("1.500000!"));
}

#[test]
fn take_text_leaves_none() {
    let mut frames = FrameStack::new();
    frames.assume(Value::UInteger(9));
    assert_eq!(frames.take_text().as_bytes(), b"9");
    assert!(frames.top().is_none());
}

#[test]
fn reset_drops_nested_frames() {
    let mut frames = FrameStack::new();
    frames.push();
    frames.push();
    frames.append_bytes(b"junk");
    frames.reset();
    assert_eq!(frames.depth(), 1);
    assert!(frames.top().is_none());
}

#[test]
#[should_panic(expected = "frame stack underflow")]
fn collapse_of_last_frame_panics() {
    let mut frames = FrameStack::new();
    frames.collapse();
}
