mod common;

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use common::FakeSource;
use pantry_engine::{EngineEvent, EngineHandle, FailureKind, MemoryStore};

const WAIT: Duration = Duration::from_secs(5);

fn spawn(source: FakeSource) -> (EngineHandle, Receiver<EngineEvent>) {
    EngineHandle::spawn(Arc::new(source), Arc::new(MemoryStore::new()), 1).expect("engine")
}

#[test]
fn fetch_all_reports_catalog_with_token() {
    let (engine, events) = spawn(FakeSource::with_letters(&[
        ('A', "1", "Arrabiata"),
        ('K', "2", "Kedgeree"),
    ]));

    engine.fetch_all(41);

    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::CatalogFetched { token, result } => {
            assert_eq!(token, 41);
            let names: Vec<_> = result.unwrap().into_iter().map(|r| r.name).collect();
            assert_eq!(names, vec!["Arrabiata", "Kedgeree"]);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn lookup_and_categories_round_trip() {
    let mut source = FakeSource::with_letters(&[('P', "52855", "Pancakes")]);
    source.categories = vec!["Breakfast".to_string()];
    let (engine, events) = spawn(source);

    engine.lookup(3, "52855");
    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::RecipeLookedUp { token, result } => {
            assert_eq!(token, 3);
            assert_eq!(result.unwrap().unwrap().name, "Pancakes");
        }
        other => panic!("unexpected event {other:?}"),
    }

    engine.fetch_categories();
    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::CategoriesFetched { result } => {
            assert_eq!(result.unwrap(), vec!["Breakfast".to_string()]);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn category_fetch_failure_is_reported() {
    let (engine, events) = spawn(FakeSource::default());

    engine.fetch_by_category(9, "Goat");
    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::CatalogFetched { token, result } => {
            assert_eq!(token, 9);
            assert_eq!(result.unwrap_err().kind, FailureKind::HttpStatus(500));
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn rescheduled_search_reports_only_latest_generation() {
    let (engine, events) = spawn(FakeSource::default());

    engine.schedule_search(1, Duration::from_millis(300));
    engine.schedule_search(2, Duration::from_millis(300));
    engine.schedule_search(3, Duration::from_millis(50));

    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::SearchDebounceElapsed { generation } => assert_eq!(generation, 3),
        other => panic!("unexpected event {other:?}"),
    }
    assert!(events.recv_timeout(Duration::from_millis(600)).is_err());
}

#[test]
fn fetch_work_does_not_fire_pending_search() {
    let mut source = FakeSource::default();
    source.categories = vec!["Vegan".to_string()];
    let (engine, events) = spawn(source);
    let scheduled_at = std::time::Instant::now();

    engine.schedule_search(5, Duration::from_millis(300));
    engine.fetch_categories();

    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::CategoriesFetched { result } => {
            assert_eq!(result.unwrap(), vec!["Vegan".to_string()]);
        }
        other => panic!("unexpected event {other:?}"),
    }
    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::SearchDebounceElapsed { generation } => {
            assert_eq!(generation, 5);
            assert!(scheduled_at.elapsed() >= Duration::from_millis(300));
        }
        other => panic!("unexpected event {other:?}"),
    }
}
