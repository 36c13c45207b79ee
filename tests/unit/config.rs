use super::*;

#[test]
fn defaults_follow_inter_convention() {
    let cfg = GeneratorConfig::default();
    assert_eq!(cfg.fonts.family, "Inter");
    assert_eq!(
        cfg.fonts.source().path_for(crate::fonts::FontWeight::Bold),
        PathBuf::from("public/fonts").join("Inter-Bold.ttf")
    );
    assert_eq!(cfg.brand.mark, "AB");
    cfg.validate().unwrap();
}

#[test]
fn partial_json_keeps_defaults() {
    let cfg: GeneratorConfig =
        serde_json::from_str(r#"{"fonts":{"dir":"assets/fonts"},"brand":{"label":"example.org"}}"#)
            .unwrap();
    assert_eq!(cfg.fonts.dir, PathBuf::from("assets/fonts"));
    assert_eq!(cfg.fonts.format, "ttf");
    assert_eq!(cfg.brand.label, "example.org");
    assert_eq!(cfg.brand.mark, "AB");
}

#[test]
fn validate_rejects_empty_family() {
    let mut cfg = GeneratorConfig::default();
    cfg.fonts.family = " ".to_string();
    assert!(matches!(cfg.validate(), Err(OgError::Configuration(_))));
}

#[test]
fn missing_file_is_reported() {
    let err = GeneratorConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(err.to_string().contains("read config"));
}
