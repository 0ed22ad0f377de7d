use anyhow::Result;
use claimline::{
    compute_bar_geometry, generate_sample_dataset, ClaimCategory, Dataset, HighlightSpan,
    TimeRange,
};
use std::env;
use std::fs;

#[test]
fn test_write_and_read_sample_dataset() -> Result<()> {
    let test_file = env::temp_dir().join("claimline_sample_roundtrip.json");

    // Clean up any existing file
    let _ = fs::remove_file(&test_file);

    let dataset = generate_sample_dataset(42);
    fs::write(&test_file, dataset.to_json_pretty()?)?;

    let loaded = Dataset::load_file(&test_file)?;

    assert_eq!(loaded.range(), dataset.range());
    assert_eq!(loaded.countries().len(), dataset.countries().len());
    assert_eq!(loaded.claim_count(), dataset.claim_count());

    // Spans survive the trip exactly, including the ongoing flag
    for (original, reloaded) in dataset.countries().iter().zip(loaded.countries()) {
        assert_eq!(original.code, reloaded.code);
        for (a, b) in original.claims.iter().zip(&reloaded.claims) {
            assert_eq!(a.span, b.span, "span mismatch for {}", a.movement);
        }
    }

    fs::remove_file(&test_file)?;
    Ok(())
}

#[test]
fn test_loading_missing_file_fails() {
    let missing = env::temp_dir().join("claimline_does_not_exist.json");
    assert!(Dataset::load_file(&missing).is_err());
}

#[test]
fn test_bar_geometry_from_parsed_dataset() -> Result<()> {
    let json = r#"{
        "start_year": 1900,
        "end_year": 2020,
        "countries": [
            {"code": "1", "name": "Testland", "claims": [
                {"movement": "Movement A", "claim": "Independence", "from": 1960, "to": 1975},
                {"movement": "Movement B", "claim": "Autonomy", "from": 2000}
            ]}
        ]
    }"#;

    let dataset = Dataset::from_json_str(json)?;
    let range = dataset.range();
    let claims = &dataset.countries()[0].claims;

    // Closed span: inclusive of its end year
    let a = compute_bar_geometry(&claims[0].span, range);
    assert!((a.left_percent - 50.0).abs() < 0.01);
    assert!((a.width_percent - 13.333).abs() < 0.01);

    // Ongoing span: runs to the range end with no inclusive adjustment
    assert!(claims[1].span.open_ended);
    let b = compute_bar_geometry(&claims[1].span, range);
    assert!((b.width_percent - 16.667).abs() < 0.01);
    assert!((b.left_percent + b.width_percent - 100.0).abs() < 0.01);

    Ok(())
}

#[test]
fn test_unknown_category_survives_round_trip() -> Result<()> {
    let json = r#"{
        "start_year": 1945,
        "end_year": 2020,
        "countries": [
            {"code": "1", "name": "Testland", "claims": [
                {"movement": "Movement", "claim": "Cultural rights", "from": 1950, "to": 1960}
            ]}
        ]
    }"#;

    let dataset = Dataset::from_json_str(json)?;
    let reparsed = Dataset::from_json_str(&dataset.to_json_pretty()?)?;

    let claim = &reparsed.countries()[0].claims[0];
    assert_eq!(claim.label, "Cultural rights");
    assert_eq!(claim.span.category, None);

    Ok(())
}

#[test]
fn test_sample_dataset_covers_all_categories() {
    let dataset = generate_sample_dataset(42);

    for category in ClaimCategory::ALL {
        let found = dataset.countries().iter().any(|country| {
            country.claims.iter().any(|c| c.span.category == Some(category))
        });
        assert!(found, "no sample claim with category {:?}", category);
    }
}

#[test]
fn test_geometry_properties_over_sample_dataset() {
    let dataset = generate_sample_dataset(7);
    let range = dataset.range();

    for country in dataset.countries() {
        for claim in &country.claims {
            let geometry = compute_bar_geometry(&claim.span, range);
            assert!(geometry.left_percent >= 0.0);
            assert!(geometry.left_percent <= 100.0);
            assert!(
                geometry.left_percent + geometry.width_percent <= 100.0 + 1.0,
                "claim {} overflows the range",
                claim.movement
            );
        }
    }
}

#[test]
fn test_open_ended_span_ends_at_range_edge() {
    let range = TimeRange::new(1945, 2020);
    let span = HighlightSpan::ongoing(1991, range, Some(ClaimCategory::Independence), false);
    let geometry = compute_bar_geometry(&span, range);

    assert!((geometry.left_percent + geometry.width_percent - 100.0).abs() < 0.01);
}
