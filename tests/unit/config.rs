use super::*;

#[test]
fn from_workdir_uses_fixed_layout() {
    let cfg = BatchConfig::from_workdir("/srv/run");
    assert_eq!(cfg.manifest_path, PathBuf::from("/srv/run/src/journey.json"));
    assert_eq!(cfg.layers_dir, PathBuf::from("/srv/run/layers"));
    assert_eq!(cfg.output_dir, PathBuf::from("/srv/run/outputs"));
    assert_eq!(
        cfg.debug_log_path,
        PathBuf::from("/srv/run/outputs/debug.txt")
    );
    assert_eq!(cfg.canvas, Canvas::JOURNEY);
    assert_eq!(cfg.layer_order, LayerOrder::Manifest);
    assert_eq!(cfg.threads, None);
    assert!(!cfg.cache_layers);
    cfg.validate().unwrap();
}

#[test]
fn validate_rejects_zero_threads_and_empty_canvas() {
    let mut cfg = BatchConfig::from_workdir(".");
    cfg.threads = Some(0);
    assert!(cfg.validate().is_err());

    cfg.threads = Some(2);
    cfg.canvas = Canvas {
        width: 0,
        height: 1,
    };
    assert!(cfg.validate().is_err());
}
