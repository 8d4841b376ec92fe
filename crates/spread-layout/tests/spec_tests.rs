use spread_layout::*;

#[test]
fn test_default_spec_is_valid() {
    let spec = SpreadSpec::default();
    assert!(spec.validate().is_ok());
    assert_eq!(spec.total_width_mm(), 290.0);
}

#[test]
fn test_validation_wings_need_width() {
    let spec = SpreadSpec::default().with_wings(0.0);
    let result = spec.validate();
    assert!(result.is_err());
    match result {
        Err(SpreadError::InvalidSpec { field, reason }) => {
            assert_eq!(field, "wing_width_mm");
            assert!(reason.contains("wings are enabled"));
        }
        _ => panic!("Expected InvalidSpec error"),
    }

    // Disabling the wings makes the same width acceptable
    assert!(spec.without_wings().validate().is_ok());
}

#[test]
fn test_validation_zero_spine_allowed() {
    assert!(SpreadSpec::default().with_spine_width_mm(0.0).validate().is_ok());
    assert!(SpreadSpec::default().with_margins(0.0, 0.0).validate().is_ok());
}

#[test]
fn test_spine_from_page_count() {
    let spec = SpreadSpec::default().with_page_count(320, 0.0625);
    assert_eq!(spec.spine_width_mm, 10.0);
    assert_eq!(spine_width_mm(7, 1.0), 4.0);
}

#[test]
fn test_region_id_round_trip_names() {
    for id in RegionId::ALL {
        assert_eq!(id.as_str().parse::<RegionId>().unwrap(), id);
        assert_eq!(id.to_string(), id.as_str());
    }
    assert!(matches!(
        "dust-jacket".parse::<RegionId>(),
        Err(SpreadError::Config(_))
    ));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_spec() {
    use tempfile::NamedTempFile;

    let spec = SpreadSpec::new(152.4, 228.6, 14.0)
        .with_wings(76.2)
        .with_margins(3.175, 6.35)
        .with_dpi(300.0);

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Save
    spec.save(path).await.unwrap();

    // Load
    let loaded = SpreadSpec::load(path).await.unwrap();
    assert_eq!(loaded, spec);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_invalid_spec() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    let mut spec = SpreadSpec::default();
    spec.dpi = -72.0;
    spec.save(path).await.unwrap();

    match SpreadSpec::load(path).await {
        Err(SpreadError::InvalidSpec { field, .. }) => assert_eq!(field, "dpi"),
        other => panic!("Expected InvalidSpec error, got {:?}", other),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_malformed_and_missing_files() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), b"{\"cover_width_mm\": 140").unwrap();
    assert!(matches!(
        SpreadSpec::load(temp_file.path()).await,
        Err(SpreadError::Config(_))
    ));

    let missing = temp_file.path().with_extension("missing.json");
    assert!(matches!(
        SpreadSpec::load(&missing).await,
        Err(SpreadError::Io(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn test_layout_serializes_with_kebab_case_ids() {
    let layout = compute_layout(&SpreadSpec::default()).unwrap();
    let json = serde_json::to_value(&layout).unwrap();
    assert_eq!(json["regions"][0]["id"], "back-cover");
    assert_eq!(json["regions"][1]["id"], "spine");
    assert!(json.get("index").is_none());
}
