use super::*;

#[test]
fn output_path_appends_png_extension() {
    let p = output_path_for(Path::new("/out"), "alpha").unwrap();
    assert_eq!(p, PathBuf::from("/out/alpha.png"));

    let spaced = output_path_for(Path::new("/out"), "Journey #12").unwrap();
    assert_eq!(spaced, PathBuf::from("/out/Journey #12.png"));
}

#[test]
fn output_path_rejects_escaping_names() {
    for name in ["", ".", "..", "../alpha", "a/b", "a\\b", "nul\0"] {
        let err = output_path_for(Path::new("/out"), name).unwrap_err();
        assert!(
            matches!(err, JourneyError::InvalidName(_)),
            "{name:?} -> {err:?}"
        );
    }
}

#[test]
fn report_counts() {
    let report = BatchReport {
        saved: vec!["a".to_string()],
        failed: vec![FailedItem {
            name: "b".to_string(),
            message: "asset not found".to_string(),
        }],
    };
    assert_eq!(report.total(), 2);
    assert!(!report.all_saved());
    assert!(BatchReport::default().all_saved());
}

#[test]
fn driver_rejects_invalid_config() {
    let mut cfg = BatchConfig::from_workdir(".");
    cfg.threads = Some(0);
    assert!(BatchDriver::new(cfg).is_err());
}
