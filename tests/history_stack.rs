use tagnav::error::NavError;
use tagnav::history::HistoryStack;
use tagnav::model::NavigationFrame;

fn frame(file: &str, line: u32, column: u32) -> NavigationFrame {
    NavigationFrame::new(file, line, column)
}

#[test]
fn push_then_pop_round_trips_and_restores_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let stack = HistoryStack::new(dir.path().join("history.yaml"));
    stack.push(frame("/src/base.c", 5, 1)).unwrap();
    let before = stack.len().unwrap();

    let pushed = frame("/src/hal.c", 42, 3);
    stack.push(pushed.clone()).unwrap();
    let popped = stack.pop().unwrap();

    assert_eq!(popped, pushed);
    assert_eq!(stack.len().unwrap(), before);
}

#[test]
fn pop_returns_frames_in_lifo_order() {
    let dir = tempfile::tempdir().unwrap();
    let stack = HistoryStack::new(dir.path().join("history.yaml"));
    let first = frame("/src/a.c", 1, 0);
    let second = frame("/src/b.c", 2, 0);
    stack.push(first.clone()).unwrap();
    stack.push(second.clone()).unwrap();

    assert_eq!(stack.pop().unwrap(), second);
    assert_eq!(stack.pop().unwrap(), first);
}

#[test]
fn pop_on_fresh_log_reports_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let stack = HistoryStack::new(dir.path().join("history.yaml"));
    assert!(matches!(stack.pop().unwrap_err(), NavError::HistoryEmpty));
    assert!(stack.is_empty().unwrap());
}

#[test]
fn state_is_durable_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.yaml");

    // Separate instances stand in for separate tool invocations; each
    // one re-reads the file.
    HistoryStack::new(&path).push(frame("/src/a.c", 1, 0)).unwrap();
    HistoryStack::new(&path).push(frame("/src/b.c", 2, 0)).unwrap();

    let reader = HistoryStack::new(&path);
    assert_eq!(reader.len().unwrap(), 2);
    assert_eq!(reader.pop().unwrap(), frame("/src/b.c", 2, 0));
    assert_eq!(HistoryStack::new(&path).len().unwrap(), 1);
}

#[test]
fn missing_and_empty_files_are_an_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.yaml");
    assert!(HistoryStack::new(&path).is_empty().unwrap());

    std::fs::write(&path, "").unwrap();
    assert!(HistoryStack::new(&path).is_empty().unwrap());
}

#[test]
fn corrupt_file_is_a_storage_failure_not_a_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.yaml");
    std::fs::write(&path, "{ not valid yaml for a frame list").unwrap();

    let stack = HistoryStack::new(&path);
    assert!(matches!(
        stack.push(frame("/src/a.c", 1, 0)).unwrap_err(),
        NavError::Storage { .. }
    ));
    // The broken file is left for inspection.
    assert!(path.exists());
}
