//! Line buffer tests

use modshell::line_buffer::{LineBuffer, LINE_SIZE};

#[test]
fn test_line_buffer_push() {
    let mut buf = LineBuffer::new();

    buf.push(b'h');
    buf.push(b'e');
    buf.push(b'l');
    buf.push(b'p');

    assert_eq!(buf.as_str(), "help");
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_line_buffer_clear() {
    let mut buf = LineBuffer::new();

    buf.set("net up");
    buf.clear();

    assert_eq!(buf.as_str(), "");
    assert!(buf.is_empty());
}

#[test]
fn test_line_buffer_set_from_str() {
    let mut buf = LineBuffer::new();

    buf.set("select net");
    assert_eq!(buf.as_str(), "select net");
    assert_eq!(buf.as_bytes(), b"select net");
}

#[test]
fn test_line_buffer_push_overflow() {
    let mut buf = LineBuffer::new();

    for i in 0..(LINE_SIZE + 10) {
        buf.push(b'a' + (i % 26) as u8);
    }

    // input past capacity is dropped
    assert_eq!(buf.len(), LINE_SIZE);
    assert!(buf.is_full());
}

#[test]
fn test_line_buffer_set_truncates() {
    let mut buf = LineBuffer::new();
    let long = "x".repeat(LINE_SIZE + 20);

    buf.set(&long);

    assert_eq!(buf.len(), LINE_SIZE);
}

#[test]
fn test_line_buffer_reuse_after_clear() {
    let mut buf = LineBuffer::new();

    buf.set("first line");
    buf.clear();
    buf.set("second");

    assert_eq!(buf.as_str(), "second");
}
