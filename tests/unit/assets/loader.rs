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

fn write_png(path: &Path, w: u32, h: u32, rgba: [u8; 4]) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbaImage::from_pixel(w, h, image::Rgba(rgba))
        .save(path)
        .unwrap();
}

#[test]
fn resolve_path_joins_trait_dir_and_png_file() {
    let loader = LayerLoader::new("/work/layers");
    let p = loader
        .resolve_path(&Attribute::new("SPECIAL-COMBO", "Blue Sky_2"))
        .unwrap();
    assert_eq!(p, PathBuf::from("/work/layers/SPECIAL-COMBO/Blue Sky_2.png"));
}

#[test]
fn resolve_path_rejects_traversal_and_separators() {
    let loader = LayerLoader::new("layers");
    for (t, v) in [
        ("..", "x"),
        ("SKY", "../../etc/passwd"),
        ("SKY/..", "blue"),
        ("SKY", "a\\b"),
        ("", "blue"),
        ("SKY", ""),
        ("SKY", "blue.png"),
    ] {
        let err = loader.resolve_path(&Attribute::new(t, v)).unwrap_err();
        assert!(
            matches!(err, JourneyError::InvalidAttribute(_)),
            "{t:?}/{v:?} -> {err:?}"
        );
    }
}

#[test]
fn load_decodes_existing_layer() {
    let root = temp_dir("loader_ok");
    write_png(&root.join("SKY/blue.png"), 3, 2, [0, 0, 255, 255]);

    let loader = LayerLoader::new(&root);
    let img = loader.load(&Attribute::new("SKY", "blue")).unwrap();
    assert_eq!((img.width, img.height), (3, 2));
    assert_eq!(&img.rgba8_premul[0..4], &[0, 0, 255, 255]);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_layer_is_asset_not_found_with_path() {
    let root = temp_dir("loader_missing");
    let loader = LayerLoader::new(&root);

    let err = loader.load(&Attribute::new("ROAD", "gray")).unwrap_err();
    match err {
        JourneyError::AssetNotFound { path, .. } => {
            assert_eq!(path, root.join("ROAD").join("gray.png"));
        }
        other => panic!("unexpected error: {other:?}"),
    }

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn undecodable_layer_is_asset_not_found() {
    let root = temp_dir("loader_garbage");
    std::fs::create_dir_all(root.join("ROAD")).unwrap();
    std::fs::write(root.join("ROAD/gray.png"), b"not a png").unwrap();

    let loader = LayerLoader::new(&root);
    let err = loader.load(&Attribute::new("ROAD", "gray")).unwrap_err();
    assert!(matches!(err, JourneyError::AssetNotFound { .. }));

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn read_bytes_reports_outcome() {
    let root = temp_dir("loader_read_bytes");
    std::fs::create_dir_all(root.join("SKY")).unwrap();
    std::fs::write(root.join("SKY/blue.png"), b"raw").unwrap();

    let loader = LayerLoader::new(&root);
    let ok = loader.read_bytes(&Attribute::new("SKY", "blue"));
    assert_eq!(ok.value().map(Vec::as_slice), Some(&b"raw"[..]));

    let missing = loader.read_bytes(&Attribute::new("SKY", "red"));
    assert!(missing.is_failure());
    assert!(missing.error().unwrap().as_str().contains("no image found"));

    let invalid = loader.read_bytes(&Attribute::new("SKY", ".."));
    assert!(invalid.error().unwrap().as_str().contains("invalid attribute"));

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn uncached_loader_rereads_from_disk() {
    let root = temp_dir("loader_uncached");
    let path = root.join("SKY/blue.png");
    write_png(&path, 1, 1, [0, 0, 255, 255]);

    let loader = LayerLoader::new(&root);
    assert!(loader.cache().is_none());
    loader.load(&Attribute::new("SKY", "blue")).unwrap();

    write_png(&path, 1, 1, [255, 0, 0, 255]);
    let again = loader.load(&Attribute::new("SKY", "blue")).unwrap();
    assert_eq!(&again.rgba8_premul[0..4], &[255, 0, 0, 255]);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn cached_loader_decodes_each_path_once() {
    let root = temp_dir("loader_cached");
    write_png(&root.join("SKY/blue.png"), 1, 1, [0, 0, 255, 255]);
    write_png(&root.join("ROAD/gray.png"), 1, 1, [90, 90, 90, 255]);

    let loader = LayerLoader::with_cache(&root);
    let a = loader.load(&Attribute::new("SKY", "blue")).unwrap();
    let b = loader.load(&Attribute::new("SKY", "blue")).unwrap();
    loader.load(&Attribute::new("ROAD", "gray")).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    let cache = loader.cache().unwrap();
    assert_eq!(cache.decode_count(), 2);
    assert_eq!(cache.len(), 2);

    std::fs::remove_dir_all(&root).ok();
}
