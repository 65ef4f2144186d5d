//! Counter allocation against a real embedded database
//! Run: cargo test -p roster-server --test counter_allocation -- --nocapture

use std::collections::HashSet;

use roster_server::db::DbService;
use roster_server::db::repository::{CounterRepository, EMPLOYEE_NUMBER_COUNTER};

async fn open_counters(tmp: &tempfile::TempDir) -> CounterRepository {
    let service = DbService::new(tmp.path().to_str().unwrap()).await.unwrap();
    CounterRepository::new(service.db.clone())
}

#[tokio::test]
async fn sequential_allocations_strictly_increase() {
    let tmp = tempfile::tempdir().unwrap();
    let counters = open_counters(&tmp).await;

    let mut previous = 0;
    for _ in 0..10 {
        let value = counters.next(EMPLOYEE_NUMBER_COUNTER).await.unwrap();
        assert!(
            value > previous,
            "expected strict increase, got {value} after {previous}"
        );
        previous = value;
    }
    assert_eq!(previous, 10);
}

#[tokio::test]
async fn counters_are_independent_per_name() {
    let tmp = tempfile::tempdir().unwrap();
    let counters = open_counters(&tmp).await;

    assert_eq!(counters.next(EMPLOYEE_NUMBER_COUNTER).await.unwrap(), 1);
    assert_eq!(counters.next("invoice").await.unwrap(), 1);
    assert_eq!(counters.next(EMPLOYEE_NUMBER_COUNTER).await.unwrap(), 2);
    assert_eq!(counters.next("invoice").await.unwrap(), 2);
}

#[tokio::test]
async fn current_reads_without_incrementing() {
    let tmp = tempfile::tempdir().unwrap();
    let counters = open_counters(&tmp).await;

    assert_eq!(counters.current(EMPLOYEE_NUMBER_COUNTER).await.unwrap(), 0);

    counters.next(EMPLOYEE_NUMBER_COUNTER).await.unwrap();
    counters.next(EMPLOYEE_NUMBER_COUNTER).await.unwrap();

    assert_eq!(counters.current(EMPLOYEE_NUMBER_COUNTER).await.unwrap(), 2);
    assert_eq!(counters.current(EMPLOYEE_NUMBER_COUNTER).await.unwrap(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_allocations_never_repeat() {
    let tmp = tempfile::tempdir().unwrap();
    let counters = open_counters(&tmp).await;

    let mut handles = Vec::new();
    for _ in 0..4 {
        let counters = counters.clone();
        handles.push(tokio::spawn(async move {
            let mut values = Vec::new();
            for _ in 0..5 {
                values.push(counters.next(EMPLOYEE_NUMBER_COUNTER).await.unwrap());
            }
            values
        }));
    }

    let mut seen = HashSet::new();
    for handle in handles {
        for value in handle.await.unwrap() {
            assert!(seen.insert(value), "value {value} allocated twice");
        }
    }

    assert_eq!(seen.len(), 20);
    assert_eq!(seen.iter().max(), Some(&20));
}
