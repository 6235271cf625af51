use super::*;
use crate::errors::{Error, ErrorKind};
use crate::utils::TimeOfDay;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

fn registry_with(groups: &[(&str, &str, &str)]) -> TimeGroupRegistry {
    let mut registry = TimeGroupRegistry::new();
    for (name, start, end) in groups {
        registry.add_group(name, t(start), t(end)).unwrap();
    }
    registry
}

fn assert_no_overlaps(registry: &TimeGroupRegistry) {
    let groups = registry.list_groups();
    for (i, a) in groups.iter().enumerate() {
        for b in groups.iter().skip(i + 1) {
            assert!(
                !(a.start_time < b.end_time && a.end_time > b.start_time),
                "{} overlaps {}",
                a.name,
                b.name
            );
        }
    }
}

#[test]
fn test_add_group_rejects_inverted_window() {
    let mut registry = TimeGroupRegistry::new();
    let err = registry.add_group("A", t("10:00"), t("09:00")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Order);

    let err = registry.add_group("A", t("10:00"), t("10:00")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Order);
    assert!(registry.is_empty());
}

#[test]
fn test_add_group_rejects_overlap() {
    let mut registry = registry_with(&[("A", "09:00", "10:00")]);

    let err = registry.add_group("B", t("09:30"), t("10:30")).unwrap_err();
    match err {
        Error::TimeGroup(TimeGroupError::Overlap {
            conflicting_name, ..
        }) => assert_eq!(conflicting_name, "A"),
        other => panic!("Expected overlap, got {:?}", other),
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_adjacent_groups_do_not_overlap() {
    let registry = registry_with(&[("A", "09:00", "10:00"), ("B", "10:00", "11:00")]);
    assert_eq!(registry.len(), 2);
    assert_no_overlaps(&registry);
}

#[test]
fn test_add_group_requires_name() {
    let mut registry = TimeGroupRegistry::new();
    let err = registry.add_group("   ", t("09:00"), t("10:00")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_add_group_trims_name() {
    let mut registry = TimeGroupRegistry::new();
    let group = registry.add_group("  Morning ", t("09:00"), t("10:00")).unwrap();
    assert_eq!(group.name, "Morning");
    assert!(group.created_at.is_some());
}

#[test]
fn test_groups_stay_sorted_by_start() {
    let registry = registry_with(&[
        ("Afternoon", "14:00", "15:00"),
        ("Early", "08:00", "09:00"),
        ("Late morning", "11:00", "12:00"),
    ]);

    let names: Vec<&str> = registry.list_groups().iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Early", "Late morning", "Afternoon"]);
}

#[test]
fn test_update_group_excludes_itself_from_overlap_check() {
    let mut registry = registry_with(&[("A", "09:00", "10:00"), ("B", "10:00", "11:00")]);
    let id = registry.list_groups()[0].id.clone();

    let updated = registry
        .update_group(&id, "A (long)", t("08:30"), t("10:00"))
        .unwrap();
    assert_eq!(updated.name, "A (long)");
    assert_eq!(updated.start_time, t("08:30"));
    assert!(updated.updated_at.is_some());
    assert_eq!(updated.id, id);
}

#[test]
fn test_update_group_rejects_overlap_with_other_group() {
    let mut registry = registry_with(&[("A", "09:00", "10:00"), ("B", "10:00", "11:00")]);
    let id = registry.list_groups()[0].id.clone();

    let err = registry
        .update_group(&id, "A", t("09:00"), t("10:30"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    // unchanged
    assert_eq!(registry.get_group(&id).unwrap().end_time, t("10:00"));
}

#[test]
fn test_update_group_resorts() {
    let mut registry = registry_with(&[("A", "09:00", "10:00"), ("B", "10:00", "11:00")]);
    let id = registry.list_groups()[0].id.clone();

    registry.update_group(&id, "A", t("12:00"), t("13:00")).unwrap();
    assert_eq!(registry.list_groups()[1].id, id);
}

#[test]
fn test_update_unknown_group_is_not_found() {
    let mut registry = registry_with(&[("A", "09:00", "10:00")]);
    let err = registry
        .update_group("missing", "A", t("09:00"), t("10:00"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_update_checks_existence_before_order() {
    let mut registry = TimeGroupRegistry::new();
    let err = registry
        .update_group("missing", "A", t("10:00"), t("09:00"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_group() {
    let mut registry = registry_with(&[("A", "09:00", "10:00"), ("B", "10:00", "11:00")]);
    let id = registry.list_groups()[0].id.clone();

    let removed = registry.delete_group(&id).unwrap();
    assert_eq!(removed.name, "A");
    assert_eq!(registry.len(), 1);

    let err = registry.delete_group(&id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_deleted_window_can_be_reused() {
    let mut registry = registry_with(&[("A", "09:00", "10:00")]);
    let id = registry.list_groups()[0].id.clone();
    registry.delete_group(&id).unwrap();

    assert!(registry.add_group("A2", t("09:30"), t("10:30")).is_ok());
}

#[test]
fn test_time_options_follow_registry_order() {
    let registry = registry_with(&[("Afternoon", "14:00", "15:00"), ("Morning", "9:00", "10:00")]);

    let options = registry.time_options();
    assert_eq!(
        options,
        vec![
            TimeOption {
                value: "09:00-10:00".to_string(),
                label: "Morning (09:00-10:00)".to_string(),
            },
            TimeOption {
                value: "14:00-15:00".to_string(),
                label: "Afternoon (14:00-15:00)".to_string(),
            },
        ]
    );
}

#[test]
fn test_from_groups_sorts_stored_data() {
    let stored: Vec<TimeGroup> = serde_json::from_str(
        r#"[
            {"id": 1717200000002, "name": "Late", "startTime": "15:00", "endTime": "16:00"},
            {"id": "1717200000001", "name": "Early", "startTime": "9:00", "endTime": "10:00",
             "createdAt": "2024-06-01T01:00:00.000Z"}
        ]"#,
    )
    .unwrap();

    let registry = TimeGroupRegistry::from_groups(stored);
    let groups = registry.list_groups();
    assert_eq!(groups[0].name, "Early");
    assert_eq!(groups[0].id, "1717200000001");
    assert_eq!(groups[1].id, "1717200000002");
}

#[test]
fn test_from_groups_finds_overlaps_beyond_neighbours() {
    let stored: Vec<TimeGroup> = serde_json::from_str(
        r#"[
            {"id": "a", "name": "Long", "startTime": "09:00", "endTime": "12:00"},
            {"id": "b", "name": "Inner", "startTime": "10:00", "endTime": "11:00"},
            {"id": "c", "name": "Tail", "startTime": "11:00", "endTime": "13:00"}
        ]"#,
    )
    .unwrap();

    let registry = TimeGroupRegistry::from_groups(stored);
    assert_eq!(registry.len(), 3);

    let pairs: Vec<(&str, &str)> = registry
        .overlapping_groups()
        .into_iter()
        .map(|(a, b)| (a.name.as_str(), b.name.as_str()))
        .collect();
    assert_eq!(pairs, vec![("Long", "Inner"), ("Long", "Tail")]);
}

#[test]
fn test_valid_registry_reports_no_overlaps() {
    let registry = registry_with(&[("A", "09:00", "10:00"), ("B", "10:00", "11:00")]);
    assert!(registry.overlapping_groups().is_empty());
}
