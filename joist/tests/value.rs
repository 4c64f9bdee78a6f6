use std::cmp::Ordering;

use joist::components::table::CellValue;

#[test]
fn test_same_variant_ordering() {
    assert_eq!(
        CellValue::compare(&CellValue::Int(1), &CellValue::Int(2)),
        Ordering::Less
    );
    assert_eq!(
        CellValue::compare(&CellValue::Text("b".into()), &CellValue::Text("a".into())),
        Ordering::Greater
    );
    assert_eq!(
        CellValue::compare(&CellValue::Float(1.5), &CellValue::Float(1.5)),
        Ordering::Equal
    );
    assert_eq!(
        CellValue::compare(&CellValue::Bool(false), &CellValue::Bool(true)),
        Ordering::Less
    );
}

#[test]
fn test_int_and_float_compare_numerically() {
    assert_eq!(
        CellValue::compare(&CellValue::Int(2), &CellValue::Float(2.5)),
        Ordering::Less
    );
    assert_eq!(
        CellValue::compare(&CellValue::Float(3.0), &CellValue::Int(2)),
        Ordering::Greater
    );
}

#[test]
fn test_mixed_variants_fall_back_to_display_order() {
    // "10" < "9" lexicographically - mixed comparisons are stringly
    assert_eq!(
        CellValue::compare(&CellValue::Text("10".into()), &CellValue::Int(9)),
        Ordering::Less
    );
}

#[test]
fn test_display_formatting() {
    assert_eq!(CellValue::Text("hi".into()).to_string(), "hi");
    assert_eq!(CellValue::Int(-3).to_string(), "-3");
    assert_eq!(CellValue::Float(1.5).to_string(), "1.5");
    assert_eq!(CellValue::Bool(true).to_string(), "true");
}

#[test]
fn test_from_conversions() {
    assert_eq!(CellValue::from("s"), CellValue::Text("s".to_string()));
    assert_eq!(CellValue::from(7i64), CellValue::Int(7));
    assert_eq!(CellValue::from(0.5f64), CellValue::Float(0.5));
    assert_eq!(CellValue::from(true), CellValue::Bool(true));
}
