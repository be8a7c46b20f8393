use super::*;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "journeys_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn lines_are_appended_never_truncated() {
    let dir = temp_dir("debug_log_append");
    let path = dir.join("debug.txt");
    std::fs::write(&path, "Saved earlier\n").unwrap();

    let log = DebugLog::new(&path);
    log.saved("alpha").unwrap();
    log.failed("beta", "asset not found").unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "Saved earlier\nSaved alpha\nFailed to save beta: asset not found\n"
    );

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn unwritable_location_is_output_write_error() {
    let dir = temp_dir("debug_log_missing_dir");
    let log = DebugLog::new(dir.join("no_such_dir").join("debug.txt"));
    let err = log.saved("alpha").unwrap_err();
    assert!(matches!(err, JourneyError::OutputWrite { .. }));

    std::fs::remove_dir_all(&dir).ok();
}
