use super::*;
use crate::constants::{BASE_COLOR, HIGHLIGHT_COLOR, MARKER_WIDTH};
use crate::logic::dataset::{ReferenceDataset, ReferenceRecord};
use crate::logic::input::{ProductType, RawInput};

fn record(product_type: ProductType, tool_wear: u32, machine_failure: u8) -> ReferenceRecord {
    ReferenceRecord {
        product_type,
        air_temperature: 298.0 + tool_wear as f64 / 100.0,
        process_temperature: 308.0,
        rotational_speed: 1400 + tool_wear,
        torque: 30.0,
        tool_wear,
        machine_failure,
    }
}

/// 100 rows, 80 failures
fn history() -> ReferenceDataset {
    let types = [ProductType::L, ProductType::M, ProductType::H];
    let records = (0..100u32)
        .map(|i| {
            let failure = if i < 80 { 1 } else { 0 };
            record(types[(i % 3) as usize], i * 2, failure)
        })
        .collect();
    ReferenceDataset::from_records(records)
}

#[test]
fn test_field_table_is_indexed_by_name() {
    for field in FieldName::ALL {
        assert_eq!(field.spec().field, field);
    }
    assert!(matches!(FieldName::Type.spec().kind, FieldKind::Categorical { .. }));
    for field in &FieldName::ALL[1..] {
        assert!(matches!(field.spec().kind, FieldKind::Numeric { .. }), "{:?}", field);
    }
}

#[test]
fn test_field_name_parsing() {
    let snake: FieldName = serde_json::from_str(r#""air_temperature""#).unwrap();
    assert_eq!(snake, FieldName::AirTemperature);

    let label: FieldName = serde_json::from_str(r#""Tool Wear""#).unwrap();
    assert_eq!(label, FieldName::ToolWear);

    assert!(serde_json::from_str::<FieldName>(r#""humidity""#).is_err());
}

#[test]
fn test_filter_keeps_only_matching_label() {
    let dataset = history();
    let view = select_view(FieldName::ToolWear, 1, &RawInput::default(), &dataset);
    assert_eq!(view.row_count(), 80);

    let view = select_view(FieldName::ToolWear, 0, &RawInput::default(), &dataset);
    assert_eq!(view.row_count(), 20);
}

#[test]
fn test_categorical_highlights_current_type() {
    let dataset = history();
    let raw = RawInput { product_type: ProductType::M, ..Default::default() };

    match select_view(FieldName::Type, 1, &raw, &dataset) {
        ViewSpec::Categorical { bars, row_count, label, .. } => {
            assert_eq!(label, 1);
            assert_eq!(row_count, 80);
            let order: Vec<_> = bars.iter().map(|b| b.category).collect();
            assert_eq!(order, vec![ProductType::H, ProductType::L, ProductType::M]);

            let highlighted: Vec<_> = bars.iter().filter(|b| b.highlighted).collect();
            assert_eq!(highlighted.len(), 1);
            assert_eq!(highlighted[0].category, ProductType::M);
            assert_eq!(highlighted[0].color, HIGHLIGHT_COLOR);
            assert!(bars.iter().filter(|b| !b.highlighted).all(|b| b.color == BASE_COLOR));

            // 0..80 over L, M, H round-robin: 27 L, 27 M, 26 H
            assert_eq!(bars.iter().map(|b| b.count).sum::<usize>(), 80);
            assert_eq!(bars[0].count, 26);
            assert_eq!(bars[1].count, 27);
            assert_eq!(bars[2].count, 27);
        }
        other => panic!("expected categorical view, got {:?}", other),
    }
}

#[test]
fn test_numeric_view_has_bins_and_marker() {
    let dataset = history();
    let raw = RawInput { tool_wear: 108, ..Default::default() };

    match select_view(FieldName::ToolWear, 1, &raw, &dataset) {
        ViewSpec::Distribution { bins, marker, bar_color, bin_policy, row_count, .. } => {
            assert_eq!(row_count, 80);
            assert_eq!(marker.value, 108.0);
            assert_eq!(marker.color, HIGHLIGHT_COLOR);
            assert_eq!(marker.width, MARKER_WIDTH);
            assert_eq!(bar_color, BASE_COLOR);
            assert_eq!(bin_policy, BinPolicy::DEFAULT);
            assert!(!bins.is_empty() && bins.len() <= bin_policy.max_bins + 1);
            assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 80);
        }
        other => panic!("expected distribution view, got {:?}", other),
    }
}

#[test]
fn test_every_numeric_field_marks_its_own_value() {
    let dataset = history();
    let raw = RawInput {
        product_type: ProductType::H,
        air_temperature: 301.5,
        process_temperature: 311.2,
        rotational_speed: 2000,
        torque: 55.5,
        tool_wear: 12,
    };
    let expected = [
        (FieldName::AirTemperature, 301.5),
        (FieldName::ProcessTemperature, 311.2),
        (FieldName::RotationalSpeed, 2000.0),
        (FieldName::Torque, 55.5),
        (FieldName::ToolWear, 12.0),
    ];

    for (field, value) in expected {
        match select_view(field, 0, &raw, &dataset) {
            ViewSpec::Distribution { marker, .. } => assert_eq!(marker.value, value, "{:?}", field),
            other => panic!("expected distribution for {:?}, got {:?}", field, other),
        }
    }
}

#[test]
fn test_empty_filtered_history_still_marks_input() {
    let dataset = ReferenceDataset::from_records(vec![record(ProductType::L, 10, 0)]);

    match select_view(FieldName::Torque, 1, &RawInput::default(), &dataset) {
        ViewSpec::Distribution { bins, marker, row_count, .. } => {
            assert_eq!(row_count, 0);
            assert!(bins.is_empty());
            assert_eq!(marker.value, 40.0);
        }
        other => panic!("expected distribution view, got {:?}", other),
    }

    match select_view(FieldName::Type, 1, &RawInput::default(), &dataset) {
        ViewSpec::Categorical { bars, .. } => {
            assert_eq!(bars.len(), 3);
            assert!(bars.iter().all(|b| b.count == 0));
        }
        other => panic!("expected categorical view, got {:?}", other),
    }
}

#[test]
fn test_view_spec_json_shape() {
    let dataset = history();
    let view = select_view(FieldName::Type, 0, &RawInput::default(), &dataset);
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["kind"], "categorical");
    assert_eq!(json["field"], "type");
    assert_eq!(json["bars"][1]["category"], "L");
    assert_eq!(json["bars"][1]["highlighted"], true);
}
