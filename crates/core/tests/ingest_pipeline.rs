//! End-to-end behaviour of the ingest pipeline against one collector handle.

mod support;

use std::sync::Arc;
use std::thread;

use freezeguard_core::{Collector, MetricProfile, MetricRole, ValidationError};
use serde_json::json;
use support::{body, full_event, minimal_event};

fn unified() -> Collector {
    Collector::new(MetricProfile::unified(), 256).unwrap()
}

fn counter(collector: &Collector, role: MetricRole, labels: &[&str]) -> Option<u64> {
    collector.metrics().counter_value(role, labels)
}

#[test]
fn scenario_a_full_event_updates_every_metric() {
    let collector = unified();
    let ack = collector.ingest(&body(&full_event("X", "EDT"))).unwrap();
    assert!(ack.ok);

    assert_eq!(counter(&collector, MetricRole::EventsTotal, &["X", "EDT"]), Some(1));
    assert_eq!(counter(&collector, MetricRole::StallsTotal, &["X"]), Some(4));

    let duration = collector.metrics().histogram(MetricRole::ActionDuration, &["X", "EDT"]).unwrap();
    assert_eq!(duration.count, 1);
    assert!((duration.sum - 0.85).abs() < 1e-9);
}

#[test]
fn scenario_b_unknown_thread_leaves_no_trace() {
    let collector = unified();
    let err = collector.ingest(&body(&full_event("X", "INVALID"))).unwrap_err();

    match err {
        ValidationError::Schema { field, document, .. } => {
            assert_eq!(field, "thread");
            assert_eq!(document["thread"], "INVALID");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
    assert_eq!(collector.metrics().series_count(), 0);
    assert!(collector.recent().is_empty());
    assert_eq!(collector.recent().total_appended(), 0);
}

#[test]
fn scenario_c_malformed_body_is_a_parse_error_echoing_raw() {
    let collector = unified();
    let err = collector.ingest(b"{not json").unwrap_err();

    assert_eq!(err.kind(), "parse");
    match err {
        ValidationError::Parse { raw_excerpt, .. } => assert_eq!(raw_excerpt, "{not json"),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert_eq!(collector.metrics().series_count(), 0);
    assert!(collector.recent().is_empty());
}

#[test]
fn scenario_d_overflow_keeps_last_capacity_entries() {
    let collector = Collector::new(MetricProfile::unified(), 256).unwrap();
    for index in 0..300 {
        collector.ingest(&body(&minimal_event(&format!("a{index}"), "BGT"))).unwrap();
    }

    let view = collector.debug_view(Some(1_000));
    assert_eq!(view.recent_events.len(), 256);
    assert_eq!(view.total_events, 300);
    assert_eq!(view.recent_events[0].action, "a44");
    assert_eq!(view.recent_events[255].action, "a299");
}

#[test]
fn scenario_e_zero_heap_delta_is_skipped() {
    let collector = unified();
    let mut zero = full_event("Same", "EDT");
    zero["heap_delta_bytes"] = json!(0);
    collector.ingest(&body(&zero)).unwrap();
    collector.ingest(&body(&full_event("Same", "EDT"))).unwrap();

    let heap = collector.metrics().histogram(MetricRole::HeapDelta, &["Same", "EDT"]).unwrap();
    assert_eq!(heap.count, 1);
}

#[test]
fn optional_fields_default_and_skip_conditional_metrics() {
    let collector = unified();
    collector.ingest(&body(&minimal_event("Open", "WORKER"))).unwrap();

    assert_eq!(counter(&collector, MetricRole::EventsTotal, &["Open", "WORKER"]), Some(1));
    assert!(counter(&collector, MetricRole::StallsTotal, &["Open"]).is_none());
    assert!(collector.metrics().histogram(MetricRole::StallDuration, &["Open"]).is_none());
    assert!(collector.metrics().histogram(MetricRole::HeapDelta, &["Open", "WORKER"]).is_none());
}

#[test]
fn negative_stall_count_is_accepted_but_not_counted() {
    let collector = unified();
    let mut skewed = full_event("X", "EDT");
    skewed["edt_stalls"] = json!(-1);
    assert!(collector.ingest(&body(&skewed)).unwrap().ok);

    assert_eq!(counter(&collector, MetricRole::EventsTotal, &["X", "EDT"]), Some(1));
    assert!(counter(&collector, MetricRole::StallsTotal, &["X"]).is_none());
    assert_eq!(collector.debug_view(None).recent_events[0].edt_stalls, -1);
}

#[test]
fn duplicate_submissions_double_count() {
    let collector = unified();
    let payload = body(&full_event("Dup", "MAIN"));
    collector.ingest(&payload).unwrap();
    collector.ingest(&payload).unwrap();

    assert_eq!(counter(&collector, MetricRole::EventsTotal, &["Dup", "MAIN"]), Some(2));
    assert_eq!(counter(&collector, MetricRole::StallsTotal, &["Dup"]), Some(8));
}

#[test]
fn vscode_profile_uses_prefixed_names() {
    let collector = Collector::new(MetricProfile::vscode(), 16).unwrap();
    collector.ingest(&body(&full_event("Save", "MAIN"))).unwrap();

    let families = collector.collect();
    assert!(families.iter().all(|family| family.get_name().starts_with("vscode_")));
    let events = families.iter().find(|f| f.get_name() == "vscode_events_total").unwrap();
    assert!((events.get_metric()[0].get_counter().get_value() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn report_shows_placeholder_then_lines() {
    let collector = unified();
    assert_eq!(collector.report(), "(no events yet)");

    collector.ingest(&body(&full_event("X", "EDT"))).unwrap();
    let report = collector.report();
    assert!(report.starts_with("2024-01-01T12:00:00+00:00  X "));
    assert!(report.contains("heap\u{394}=3072"));
}

#[test]
fn report_is_limited_to_newest_entries() {
    let collector = Collector::new(MetricProfile::unified(), 256).unwrap();
    for index in 0..60 {
        collector.ingest(&body(&minimal_event(&format!("r{index}"), "EDT"))).unwrap();
    }

    let report = collector.report();
    assert_eq!(report.lines().count(), 50);
    assert!(report.lines().next().unwrap().contains("r10 "));
}

#[test]
fn concurrent_ingest_loses_nothing() {
    let collector = Arc::new(Collector::new(MetricProfile::unified(), 64).unwrap());
    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let collector = Arc::clone(&collector);
            thread::spawn(move || {
                let payload = body(&full_event("Hot", if worker % 2 == 0 { "EDT" } else { "BGT" }));
                for _ in 0..250 {
                    collector.ingest(&payload).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(counter(&collector, MetricRole::EventsTotal, &["Hot", "EDT"]), Some(1_000));
    assert_eq!(counter(&collector, MetricRole::EventsTotal, &["Hot", "BGT"]), Some(1_000));
    assert_eq!(counter(&collector, MetricRole::StallsTotal, &["Hot"]), Some(8_000));
    assert_eq!(collector.recent().len(), 64);
    assert_eq!(collector.recent().total_appended(), 2_000);
}
