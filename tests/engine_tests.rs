mod common;
use chrono::{DateTime, TimeDelta, Utc};
use common::{at, day, entry};
use hosgrid::core::calculator::slots::slot_span;
use hosgrid::models::{AnomalyKind, DutyStatus, LogEntry, SLOTS_PER_DAY};
use hosgrid::{
    CANONICAL_DAY_BOUNDARY, DayBoundary, HosEngine, OpenEntryPolicy, bucket_by_day,
    compute_slot_coverage, compute_total_hours, daily_summary, find_anomalies,
};

#[test]
fn test_slot_coverage_quarter_hours() {
    let entries = vec![entry(
        DutyStatus::Driving,
        "2025-03-10T08:00:00Z",
        Some("2025-03-10T08:45:00Z"),
    )];

    let coverage = compute_slot_coverage(&entries, day("2025-03-10"));

    assert_eq!(coverage.row(DutyStatus::Driving).covered_slots(), vec![32, 33, 34]);
    assert!(coverage.row(DutyStatus::OffDuty).is_empty());
    assert!(coverage.row(DutyStatus::SleeperBerth).is_empty());
    assert!(coverage.row(DutyStatus::OnDutyNotDriving).is_empty());
}

#[test]
fn test_ongoing_entry_runs_to_last_slot() {
    let entries = vec![entry(
        DutyStatus::OnDutyNotDriving,
        "2025-03-10T20:00:00Z",
        None,
    )];

    let coverage = compute_slot_coverage(&entries, day("2025-03-10"));
    let row = coverage.row(DutyStatus::OnDutyNotDriving);

    assert_eq!(row.covered_slots(), (80..SLOTS_PER_DAY).collect::<Vec<_>>());
    assert!(row.is_covered(95));
}

#[test]
fn test_bucket_by_day_is_idempotent() {
    let entries = vec![
        entry(DutyStatus::Driving, "2025-03-11T06:00:00Z", Some("2025-03-11T10:00:00Z")),
        entry(DutyStatus::OffDuty, "2025-03-10T00:00:00Z", Some("2025-03-10T06:00:00Z")),
        entry(DutyStatus::OnDutyNotDriving, "2025-03-10T22:00:00Z", None),
    ];

    let first = bucket_by_day(&entries);
    let second = bucket_by_day(&entries);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_statuses_do_not_merge() {
    let entries = vec![
        entry(DutyStatus::Driving, "2025-03-10T09:45:00Z", Some("2025-03-10T10:30:00Z")),
        entry(DutyStatus::OnDutyNotDriving, "2025-03-10T10:00:00Z", Some("2025-03-10T10:15:00Z")),
    ];

    let coverage = compute_slot_coverage(&entries, day("2025-03-10"));

    assert!(coverage.is_covered(DutyStatus::Driving, 40));
    assert!(coverage.is_covered(DutyStatus::OnDutyNotDriving, 40));
    assert_eq!(coverage.row(DutyStatus::Driving).covered_slots(), vec![39, 40, 41]);
    assert_eq!(coverage.row(DutyStatus::OnDutyNotDriving).covered_slots(), vec![40]);
}

#[test]
fn test_total_hours_sums_entries() {
    let entries = vec![
        entry(DutyStatus::Driving, "2025-03-10T06:00:00Z", Some("2025-03-10T09:30:00Z")),
        entry(DutyStatus::Driving, "2025-03-10T14:00:00Z", Some("2025-03-10T15:15:00Z")),
        entry(DutyStatus::OffDuty, "2025-03-10T09:30:00Z", Some("2025-03-10T14:00:00Z")),
    ];

    let total = compute_total_hours(&entries, DutyStatus::Driving, at("2025-03-11T00:00:00Z"));

    assert_eq!(total, 4.75);
}

#[test]
fn test_zero_length_entry_marks_its_slot() {
    let entries = vec![entry(
        DutyStatus::OffDuty,
        "2025-03-10T10:00:00Z",
        Some("2025-03-10T10:00:00Z"),
    )];

    let coverage = compute_slot_coverage(&entries, day("2025-03-10"));
    let total = compute_total_hours(&entries, DutyStatus::OffDuty, at("2025-03-10T23:00:00Z"));

    assert_eq!(total, 0.0);
    assert_eq!(coverage.row(DutyStatus::OffDuty).covered_slots(), vec![40]);
}

#[test]
fn test_empty_input_gives_no_buckets() {
    assert!(bucket_by_day(&[]).is_empty());
}

#[test]
fn test_end_before_start_is_isolated() {
    let entries = vec![
        entry(DutyStatus::Driving, "2025-03-10T06:00:00Z", Some("2025-03-10T07:00:00Z")),
        entry(DutyStatus::Driving, "2025-03-10T12:00:00Z", Some("2025-03-10T11:00:00Z")),
    ];

    let buckets = bucket_by_day(&entries);
    let bucket = &buckets[&day("2025-03-10")];

    assert_eq!(bucket.anomalies.len(), 1);
    assert_eq!(bucket.anomalies[0].kind, AnomalyKind::EndBeforeStart);
    assert_eq!(bucket.anomalies[0].entry, entries[1]);
    assert_eq!(bucket.hours(DutyStatus::Driving), 1.0);
    assert_eq!(
        bucket.slot_coverage.row(DutyStatus::Driving).covered_slots(),
        vec![24, 25, 26, 27]
    );
}

#[test]
fn test_entry_within_one_slot_marks_one_slot() {
    let entries = vec![entry(
        DutyStatus::SleeperBerth,
        "2025-03-10T08:05:00Z",
        Some("2025-03-10T08:10:00Z"),
    )];

    let coverage = compute_slot_coverage(&entries, day("2025-03-10"));

    assert_eq!(coverage.row(DutyStatus::SleeperBerth).covered_slots(), vec![32]);
}

#[test]
fn test_end_past_slot_edge_touches_next_slot() {
    let e = entry(
        DutyStatus::Driving,
        "2025-03-10T08:00:00Z",
        Some("2025-03-10T08:46:00Z"),
    );

    assert_eq!(slot_span(&e, day("2025-03-10"), CANONICAL_DAY_BOUNDARY), (32, 35));
}

#[test]
fn test_cross_midnight_stays_in_start_day() {
    let entries = vec![entry(
        DutyStatus::Driving,
        "2025-03-10T22:00:00Z",
        Some("2025-03-11T02:00:00Z"),
    )];

    let buckets = bucket_by_day(&entries);

    assert_eq!(buckets.len(), 1);
    assert!(!buckets.contains_key(&day("2025-03-11")));

    let bucket = &buckets[&day("2025-03-10")];
    assert_eq!(
        bucket.slot_coverage.row(DutyStatus::Driving).covered_slots(),
        (88..SLOTS_PER_DAY).collect::<Vec<_>>()
    );
    assert_eq!(bucket.hours(DutyStatus::Driving), 4.0);
}

#[test]
fn test_end_at_next_midnight_fills_to_last_slot() {
    let e = entry(
        DutyStatus::OffDuty,
        "2025-03-10T23:00:00Z",
        Some("2025-03-11T00:00:00Z"),
    );

    assert_eq!(slot_span(&e, day("2025-03-10"), CANONICAL_DAY_BOUNDARY), (92, 95));
}

#[test]
fn test_entries_from_other_days_are_ignored_by_coverage() {
    let entries = vec![entry(
        DutyStatus::Driving,
        "2025-03-09T22:00:00Z",
        Some("2025-03-10T02:00:00Z"),
    )];

    let coverage = compute_slot_coverage(&entries, day("2025-03-10"));

    assert!(coverage.row(DutyStatus::Driving).is_empty());
}

#[test]
fn test_ongoing_total_end_of_day_vs_reference_now() {
    let entries = vec![entry(DutyStatus::OffDuty, "2025-03-10T20:00:00Z", None)];

    let end_of_day = HosEngine::canonical().bucket_by_day(&entries);
    assert_eq!(end_of_day[&day("2025-03-10")].hours(DutyStatus::OffDuty), 4.0);

    let engine = HosEngine::new(
        DayBoundary::Utc,
        OpenEntryPolicy::ReferenceNow(at("2025-03-10T21:30:00Z")),
    );
    let now = engine.bucket_by_day(&entries);
    assert_eq!(now[&day("2025-03-10")].hours(DutyStatus::OffDuty), 1.5);
}

#[test]
fn test_ongoing_with_reference_before_start_counts_zero() {
    let entries = vec![entry(DutyStatus::Driving, "2025-03-10T20:00:00Z", None)];

    let total = compute_total_hours(&entries, DutyStatus::Driving, at("2025-03-10T19:00:00Z"));

    assert_eq!(total, 0.0);
}

#[test]
fn test_fixed_offset_boundary_moves_day_and_slot() {
    let entries = vec![entry(
        DutyStatus::Driving,
        "2025-03-10T23:30:00Z",
        Some("2025-03-11T00:00:00Z"),
    )];

    let utc = bucket_by_day(&entries);
    assert_eq!(
        utc[&day("2025-03-10")]
            .slot_coverage
            .row(DutyStatus::Driving)
            .covered_slots(),
        vec![94, 95]
    );

    let plus_two = DayBoundary::parse("+02:00").expect("offset");
    let local = HosEngine::new(plus_two, OpenEntryPolicy::EndOfDay).bucket_by_day(&entries);
    assert!(local.contains_key(&day("2025-03-11")));
    assert_eq!(
        local[&day("2025-03-11")]
            .slot_coverage
            .row(DutyStatus::Driving)
            .covered_slots(),
        vec![6, 7]
    );
}

#[test]
fn test_buckets_enumerate_in_date_order() {
    let entries = vec![
        entry(DutyStatus::Driving, "2025-03-12T06:00:00Z", Some("2025-03-12T07:00:00Z")),
        entry(DutyStatus::Driving, "2025-03-10T06:00:00Z", Some("2025-03-10T07:00:00Z")),
        entry(DutyStatus::Driving, "2025-03-11T06:00:00Z", Some("2025-03-11T07:00:00Z")),
    ];

    let dates: Vec<_> = bucket_by_day(&entries).into_keys().collect();

    assert_eq!(
        dates,
        vec![day("2025-03-10"), day("2025-03-11"), day("2025-03-12")]
    );
}

#[test]
fn test_bucket_entries_sorted_by_start() {
    let entries = vec![
        entry(DutyStatus::OffDuty, "2025-03-10T18:00:00Z", None),
        entry(DutyStatus::Driving, "2025-03-10T06:00:00Z", Some("2025-03-10T07:00:00Z")),
    ];

    let buckets = bucket_by_day(&entries);
    let bucket = &buckets[&day("2025-03-10")];

    assert_eq!(bucket.entries[0].status, DutyStatus::Driving);
    assert_eq!(bucket.entries[1].status, DutyStatus::OffDuty);
}

#[test]
fn test_daily_summary_maps_each_status() {
    let entries = vec![
        entry(DutyStatus::OffDuty, "2025-03-10T00:00:00Z", Some("2025-03-10T05:00:00Z")),
        entry(DutyStatus::SleeperBerth, "2025-03-10T05:00:00Z", Some("2025-03-10T07:00:00Z")),
        entry(DutyStatus::OnDutyNotDriving, "2025-03-10T07:00:00Z", Some("2025-03-10T07:30:00Z")),
        entry(DutyStatus::Driving, "2025-03-10T07:30:00Z", Some("2025-03-10T13:00:00Z")),
    ];

    let buckets = bucket_by_day(&entries);
    let summary = daily_summary(&buckets[&day("2025-03-10")]);

    assert_eq!(summary.date, day("2025-03-10"));
    assert_eq!(summary.off_duty_hours, 5.0);
    assert_eq!(summary.sleeper_berth_hours, 2.0);
    assert_eq!(summary.on_duty_hours, 0.5);
    assert_eq!(summary.driving_hours, 5.5);
    assert_eq!(summary.total_hours(), 13.0);
}

#[test]
fn test_same_status_overlap_is_union() {
    let entries = vec![
        entry(DutyStatus::Driving, "2025-03-10T08:00:00Z", Some("2025-03-10T08:30:00Z")),
        entry(DutyStatus::Driving, "2025-03-10T08:15:00Z", Some("2025-03-10T09:00:00Z")),
    ];

    let coverage = compute_slot_coverage(&entries, day("2025-03-10"));

    assert_eq!(coverage.row(DutyStatus::Driving).covered_slots(), vec![32, 33, 34, 35]);
    // totals do not deduplicate overlapping time
    assert_eq!(
        compute_total_hours(&entries, DutyStatus::Driving, at("2025-03-11T00:00:00Z")),
        1.25
    );
}

#[test]
fn test_find_anomalies_keeps_input_order() {
    let entries = vec![
        entry(DutyStatus::OffDuty, "2025-03-10T10:00:00Z", Some("2025-03-10T09:00:00Z")),
        entry(DutyStatus::Driving, "2025-03-10T11:00:00Z", None),
        entry(DutyStatus::Driving, "2025-03-11T10:00:00Z", Some("2025-03-11T08:00:00Z")),
    ];

    let anomalies = find_anomalies(&entries);

    assert_eq!(anomalies.len(), 2);
    assert_eq!(anomalies[0].entry.status, DutyStatus::OffDuty);
    assert_eq!(anomalies[1].entry.start_time, at("2025-03-11T10:00:00Z"));
}

#[test]
fn test_day_boundary_parse() {
    assert_eq!(DayBoundary::parse("UTC"), Some(DayBoundary::Utc));
    assert_eq!(DayBoundary::parse("z"), Some(DayBoundary::Utc));
    assert!(matches!(DayBoundary::parse("+02:00"), Some(DayBoundary::Fixed(_))));
    assert!(matches!(DayBoundary::parse("-05:30"), Some(DayBoundary::Fixed(_))));
    assert_eq!(DayBoundary::parse("Mars/Olympus"), None);
    assert_eq!(DayBoundary::default(), CANONICAL_DAY_BOUNDARY);
}

#[test]
fn test_day_end_follows_offset() {
    let plus_two = DayBoundary::parse("+02:00").expect("offset");

    assert_eq!(plus_two.day_start(day("2025-03-10")), at("2025-03-09T22:00:00Z"));
    assert_eq!(plus_two.day_end(day("2025-03-10")), at("2025-03-10T22:00:00Z"));
    assert_eq!(
        DayBoundary::Utc.day_end(day("2025-03-10")),
        at("2025-03-11T00:00:00Z")
    );
}

#[test]
fn test_status_codes_and_labels() {
    for status in DutyStatus::ALL {
        assert_eq!(DutyStatus::from_code(status.code()), Some(status));
    }
    assert_eq!(DutyStatus::from_code(" sb "), Some(DutyStatus::SleeperBerth));
    assert_eq!(DutyStatus::from_code("S"), None);
    assert_eq!(DutyStatus::OnDutyNotDriving.label(), "On Duty (Not Driving)");
}

#[test]
fn test_bucketing_at_the_edges_of_time() {
    let max = DateTime::<Utc>::MAX_UTC;
    let min = DateTime::<Utc>::MIN_UTC;
    let entries = vec![
        LogEntry::new(DutyStatus::OffDuty, max, None, "x"),
        LogEntry::new(DutyStatus::Driving, max, Some(max), "x"),
        LogEntry::new(DutyStatus::OnDutyNotDriving, min, None, "x"),
        LogEntry::new(
            DutyStatus::SleeperBerth,
            min,
            Some(min + TimeDelta::hours(1)),
            "x",
        ),
    ];
    let minus_five = DayBoundary::parse("-05:00").expect("offset");

    for engine in [
        HosEngine::canonical(),
        HosEngine::new(minus_five, OpenEntryPolicy::EndOfDay),
    ] {
        let buckets = engine.bucket_by_day(&entries);
        assert_eq!(buckets.len(), 2);

        let first = buckets.values().next().expect("first day");
        assert_eq!(first.hours(DutyStatus::SleeperBerth), 1.0);
        assert!(first.hours(DutyStatus::OnDutyNotDriving) > 0.0);
        assert!(first.slot_coverage.is_covered(DutyStatus::OnDutyNotDriving, 95));

        let last = buckets.values().last().expect("last day");
        assert_eq!(last.hours(DutyStatus::OffDuty), 0.0);
        assert_eq!(last.hours(DutyStatus::Driving), 0.0);
        assert!(last.slot_coverage.is_covered(DutyStatus::OffDuty, 95));
        assert!(last.anomalies.is_empty());
    }
}

#[test]
fn test_day_edges_saturate() {
    let max = DateTime::<Utc>::MAX_UTC;
    let last_day = DayBoundary::Utc.date_of(max);

    assert_eq!(DayBoundary::Utc.day_end(last_day), max);
    assert_eq!(
        DayBoundary::parse("-05:00").expect("offset").day_end(last_day),
        max
    );
    let min = DateTime::<Utc>::MIN_UTC;
    let plus_five = DayBoundary::parse("+05:00").expect("offset");
    assert_eq!(plus_five.day_start(DayBoundary::Utc.date_of(min)), min);
}

#[test]
fn test_slot_row_serializes_as_bits() {
    let entries = vec![entry(
        DutyStatus::Driving,
        "2025-03-10T00:00:00Z",
        Some("2025-03-10T00:30:00Z"),
    )];
    let coverage = compute_slot_coverage(&entries, day("2025-03-10"));

    let json = serde_json::to_value(coverage.row(DutyStatus::Driving)).expect("serialize");
    let bits = json.as_str().expect("string");

    assert_eq!(bits.len(), SLOTS_PER_DAY);
    assert!(bits.starts_with("110"));
    assert_eq!(bits.matches('1').count(), 2);
}
