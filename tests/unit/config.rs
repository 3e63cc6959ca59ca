use super::*;

#[test]
fn empty_json_yields_defaults() {
    let cfg = NinePatchConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, NinePatchConfig::default());
    assert!(cfg.scan.normalize_stray_pixels);
    assert!(cfg.scan.strict_edges);
    assert_eq!(cfg.project.degenerate, DegeneratePolicy::ShrinkFixed);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = NinePatchConfig::from_json_str(
        r#"{ "scan": { "strict_edges": false }, "project": { "degenerate": "reject" } }"#,
    )
    .unwrap();
    assert!(cfg.scan.normalize_stray_pixels);
    assert!(!cfg.scan.strict_edges);
    assert_eq!(cfg.project.degenerate, DegeneratePolicy::Reject);
}

#[test]
fn malformed_json_is_config_error() {
    let err = NinePatchConfig::from_json_str(r#"{ "project": { "degenerate": "squash" } }"#)
        .unwrap_err();
    assert!(matches!(err, NinePatchError::Config(_)));
}
