use super::*;

#[test]
fn empty_object_keeps_defaults() {
    let cfg = ForgeConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, ForgeConfig::default());
    let opts = cfg.batch_opts();
    assert_eq!(opts.raster.target_px, 512);
    assert_eq!(opts.encode.format, ImageFormat::WebP);
    assert_eq!(opts.failure_policy, FailurePolicy::FailFast);
    assert!(opts.timeout.is_none());
}

#[test]
fn values_override_defaults() {
    let cfg = ForgeConfig::from_reader(
        r#"{
            "format": "png",
            "effort": "fast",
            "seed": 9,
            "only": ["cultist"],
            "parallel": true,
            "threads": 3,
            "timeout_ms": 1500,
            "keep_going": true,
            "target_px": 256
        }"#
        .as_bytes(),
    )
    .unwrap();
    assert_eq!(cfg.only.as_deref(), Some(&["cultist".to_owned()][..]));

    let opts = cfg.batch_opts();
    assert_eq!(opts.encode.format, ImageFormat::Png);
    assert_eq!(opts.encode.effort, Effort::Fast);
    assert_eq!(opts.seed, Some(9));
    assert!(opts.parallel);
    assert_eq!(opts.threads, Some(3));
    assert_eq!(opts.timeout, Some(Duration::from_millis(1500)));
    assert_eq!(opts.failure_policy, FailurePolicy::KeepGoing);
    assert_eq!(opts.raster.target_px, 256);
    assert_eq!(opts.raster.supersample_px, 768);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ForgeConfig::from_reader(r#"{"fromat": "png"}"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse config JSON"), "{err}");
}

#[test]
fn missing_file_is_io() {
    let err = ForgeConfig::from_path("target/unit-scratch/no-such-config.json").unwrap_err();
    assert_eq!(err.kind(), crate::FailureKind::Io);
}
