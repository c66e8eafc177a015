use std::io::Cursor;

use jotter::app::App;
use jotter::editor::{EditError, RedoPolicy, Session};

fn session_with(text: &str) -> Session {
    let mut session = Session::new();
    for (i, b) in text.bytes().enumerate() {
        session.insert(i, b).unwrap();
    }
    session
}

#[test]
fn test_insert_scenario_from_empty() {
    let mut session = Session::new();
    session.insert(0, b'a').unwrap();
    session.insert(1, b'b').unwrap();
    session.insert(1, b'c').unwrap();
    assert_eq!(session.contents(), b"acb");

    session.undo().unwrap();
    assert_eq!(session.contents(), b"ab");
    session.undo().unwrap();
    assert_eq!(session.contents(), b"a");
    session.redo().unwrap();
    assert_eq!(session.contents(), b"ab");
}

#[test]
fn test_delete_scenario_on_hello() {
    let mut session = session_with("hello");
    session.delete(0).unwrap();
    assert_eq!(session.text(), "ello");
    session.undo().unwrap();
    assert_eq!(session.text(), "hello");
    session.redo().unwrap();
    assert_eq!(session.text(), "ello");
}

#[test]
fn test_undo_everything_then_redo_everything() {
    let mut session = session_with("abc");
    session.delete(1).unwrap();
    assert_eq!(session.text(), "ac");

    while session.undo().is_ok() {}
    assert_eq!(session.text(), "");
    while session.redo().is_ok() {}
    assert_eq!(session.text(), "ac");
}

#[test]
fn test_out_of_range_edits_leave_buffer_unchanged() {
    let mut session = session_with("abc");
    assert!(matches!(
        session.insert(4, b'x'),
        Err(EditError::InvalidPosition { position: 4, len: 3 })
    ));
    assert!(matches!(
        session.delete(3),
        Err(EditError::InvalidPosition { position: 3, len: 3 })
    ));
    assert_eq!(session.text(), "abc");
}

#[test]
fn test_save_writes_exactly_the_buffer_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abc.txt");
    let session = session_with("abc");

    session.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 3);
    assert_eq!(bytes, b"abc");
}

#[test]
fn test_redo_policies_differ_after_fresh_edit() {
    let mut cleared = Session::with_policy(RedoPolicy::Clear);
    let mut kept = Session::with_policy(RedoPolicy::Keep);
    for session in [&mut cleared, &mut kept] {
        session.insert(0, b'x').unwrap();
        session.undo().unwrap();
        session.insert(0, b'y').unwrap();
    }

    assert!(matches!(cleared.redo(), Err(EditError::NothingToRedo)));
    kept.redo().unwrap();
    assert_eq!(kept.text(), "xy");
}

#[test]
fn test_menu_session_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let script = format!(
        "1\n0\nh\n1\n1\ni\n2\n5\n5\n3\n6\n{}\n4\n7\n",
        path.display()
    );

    let mut out = Vec::new();
    let model = App::new()
        .with_quiet(true)
        .run_with(Cursor::new(script), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    // "2 5" is out of range on a two-character buffer.
    assert!(out.contains("Invalid position 5 (buffer length is 2)"));
    assert!(out.contains("Current Text: hi"));
    assert!(out.contains("File saved successfully."));
    assert!(out.contains("Exiting editor. Total changes made: 2"));
    assert_eq!(std::fs::read(&path).unwrap(), b"h");
    assert_eq!(model.session.text(), "hi");
}
