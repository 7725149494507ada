#![cfg(feature = "async")]
//! Integration tests for `Task` driven from a tokio runtime.

use adtkit::effect::Task;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

fn delay(millis: u64, value: char) -> Task<String, char> {
    Task::new(move |_reject, resolve| {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            resolve.call(value);
        });
    })
}

fn fail_after(millis: u64, error: &'static str) -> Task<String, char> {
    Task::new(move |reject, _resolve| {
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(millis)).await;
            reject.call(error.to_string());
        });
    })
}

#[tokio::test(start_paused = true)]
async fn parallel_results_follow_input_order() {
    let values = Task::parallel(vec![delay(50, 'a'), delay(0, 'b')])
        .into_future()
        .await;
    assert_eq!(values, Ok(vec!['a', 'b']));
}

#[tokio::test(start_paused = true)]
async fn parallel_settles_members_as_they_finish() {
    let finished = Arc::new(Mutex::new(Vec::new()));
    let tracked = |millis, value| {
        let finished = Arc::clone(&finished);
        delay(millis, value).chain(move |value| {
            let finished = Arc::clone(&finished);
            Task::new(move |_reject, resolve| {
                let finished = Arc::clone(&finished);
                tokio::spawn(async move {
                    finished.lock().await.push(value);
                    resolve.call(value);
                });
            })
        })
    };

    let values = Task::parallel(vec![tracked(30, 'x'), tracked(10, 'y'), tracked(20, 'z')])
        .into_future()
        .await;

    assert_eq!(values, Ok(vec!['x', 'y', 'z']));
    assert_eq!(*finished.lock().await, vec!['y', 'z', 'x']);
}

#[tokio::test(start_paused = true)]
async fn parallel_rejects_with_the_first_rejection() {
    let outcome = Task::parallel(vec![
        delay(5, 'a'),
        fail_after(40, "slow"),
        fail_after(10, "fast"),
    ])
    .into_future()
    .await;
    assert_eq!(outcome, Err("fast".to_string()));
}

#[tokio::test(start_paused = true)]
async fn chain_sequences_async_steps() {
    let outcome = delay(10, 'a')
        .chain(|first| delay(10, 'b').map(move |second| format!("{first}{second}")))
        .into_future()
        .await;
    assert_eq!(outcome, Ok("ab".to_string()));
}

#[tokio::test(start_paused = true)]
async fn or_else_recovers_after_async_rejection() {
    let outcome = fail_after(10, "boom")
        .or_else(|error| Task::<String, char>::of(error.chars().next().unwrap_or('?')))
        .into_future()
        .await;
    assert_eq!(outcome, Ok('b'));
}

#[rstest]
fn building_a_task_runs_nothing() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let task: Task<String, usize> = Task::new(move |_reject, resolve| {
        resolve.call(counter.fetch_add(1, Ordering::SeqCst) + 1);
    })
    .map(|run| run * 10);
    assert_eq!(runs.load(Ordering::SeqCst), 0);

    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    for _ in 0..2 {
        let seen = Arc::clone(&seen);
        task.fork(|_| {}, move |value| {
            if let Ok(mut seen) = seen.lock() {
                seen.push(value);
            }
        });
    }
    assert_eq!(runs.load(Ordering::SeqCst), 2);
    assert_eq!(*seen.lock().unwrap(), vec![10, 20]);
}

#[rstest]
fn a_fork_settles_at_most_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let task: Task<&'static str, i32> = Task::new(|reject, resolve| {
        resolve.call(1);
        reject.call("late");
        resolve.call(2);
    });
    let rejected = Arc::clone(&calls);
    let resolved = Arc::clone(&calls);
    task.fork(
        move |_| {
            rejected.fetch_add(100, Ordering::SeqCst);
        },
        move |value| {
            resolved.fetch_add(usize::try_from(value).unwrap_or(0), Ordering::SeqCst);
        },
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
