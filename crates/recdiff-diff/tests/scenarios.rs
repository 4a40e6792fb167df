use recdiff_diff::{diff, diff_paths, enumerate_paths, one_way_diff, ChangeKind};
use recdiff_types::{KeyPath, Record, Slot, Value};
use serde_json::json;

fn reference() -> Record {
    Record::try_from(json!({
        "prop1": 1,
        "prop2": {
            "prop3": {"prop6": 4},
            "prop4": 3,
            "prop5": 6,
            "prop7": 7
        },
        "prop10": {"prop11": 11}
    }))
    .unwrap()
}

fn target() -> Record {
    Record::try_from(json!({
        "prop1": 1,
        "prop2": {
            "prop3": {"prop6": 3},
            "prop4": 3,
            "prop5": 5,
            "prop8": 8
        },
        "prop9": 9
    }))
    .unwrap()
}

#[test]
fn enumerates_small_record() {
    let record = Record::try_from(json!({
        "prop1": 1,
        "prop2": {"prop3": {"prop6": 4}, "prop4": 3}
    }))
    .unwrap();
    assert_eq!(
        enumerate_paths(&record),
        vec!["prop1", "prop2.prop3.prop6", "prop2.prop4"]
    );
}

#[test]
fn enumerates_reference_record() {
    assert_eq!(
        enumerate_paths(&reference()),
        vec![
            "prop1",
            "prop2.prop3.prop6",
            "prop2.prop4",
            "prop2.prop5",
            "prop2.prop7",
            "prop10.prop11",
        ]
    );
}

#[test]
fn one_way_diff_sees_only_reference_paths() {
    assert_eq!(
        one_way_diff(&reference(), &target()),
        vec![
            "prop2.prop3.prop6",
            "prop2.prop5",
            "prop2.prop7",
            "prop10.prop11",
        ]
    );
}

#[test]
fn diff_paths_unions_both_directions() {
    assert_eq!(
        diff_paths(&reference(), &target()),
        vec![
            "prop2.prop3.prop6",
            "prop2.prop5",
            "prop2.prop7",
            "prop10.prop11",
            "prop2.prop8",
            "prop9",
        ]
    );
}

#[test]
fn report_matches_shared_values() {
    let report = diff(&reference(), &target());
    let matched: Vec<(&str, &Value)> = report
        .matched
        .iter()
        .map(|(path, value)| (path.as_str(), value))
        .collect();
    assert_eq!(
        matched,
        vec![("prop1", &Value::from(1i64)), ("prop2.prop4", &Value::from(3i64))]
    );
}

#[test]
fn report_marks_target_only_path_absent_in_reference() {
    let report = diff(&reference(), &target());
    let entry = report.entry("prop9").unwrap();
    assert_eq!(entry.reference, Slot::Absent);
    assert_eq!(entry.target, Slot::Present(Value::from(9i64)));
    assert_eq!(entry.kind(), Some(ChangeKind::Added));
}

#[test]
fn full_report() {
    let report = diff(&reference(), &target());

    let paths: Vec<&KeyPath> = report.diff.keys().collect();
    assert_eq!(
        paths,
        vec![
            "prop2.prop3.prop6",
            "prop2.prop5",
            "prop2.prop7",
            "prop10.prop11",
            "prop2.prop8",
            "prop9",
        ]
    );
    assert_eq!(report.modifications(), 2);
    assert_eq!(report.removals(), 2);
    assert_eq!(report.additions(), 2);

    let expected = json!({
        "diff": {
            "prop2.prop3.prop6": {"ref": 4, "targ": 3},
            "prop2.prop5": {"ref": 6, "targ": 5},
            "prop2.prop7": {"ref": 7},
            "prop10.prop11": {"ref": 11},
            "prop2.prop8": {"targ": 8},
            "prop9": {"targ": 9}
        },
        "match": {
            "prop1": 1,
            "prop2.prop4": 3
        }
    });
    assert_eq!(serde_json::to_value(&report).unwrap(), expected);
}
