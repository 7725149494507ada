//! Task - a deferred, callback-driven computation that may fail.
//!
//! A `Task<E, A>` wraps a computation that receives two continuations,
//! `reject` for an `E` and `resolve` for an `A`, and eventually calls one of
//! them. Building a task performs no effect; every [`fork`](Task::fork) runs
//! the computation again from scratch.
//!
//! Continuations are `Send`, so a computation may settle from another thread
//! or from an async runtime. Each fork settles at most once: after the first
//! call to either continuation, later calls are ignored.
//!
//! # Examples
//!
//! ```rust
//! use adtkit::effect::Task;
//! use std::sync::mpsc;
//!
//! let task: Task<String, i32> = Task::new(|_reject, resolve| {
//!     std::thread::spawn(move || resolve.call(20));
//! })
//! .map(|n| n + 1)
//! .chain(|n| Task::of(n * 2));
//!
//! let (sender, receiver) = mpsc::channel();
//! task.fork(|error| panic!("unexpected rejection: {error}"), move |value| {
//!     sender.send(value).ok();
//! });
//! assert_eq!(receiver.recv().ok(), Some(42));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

type Callback<T> = Box<dyn FnOnce(T) + Send>;

type Computation<E, A> = dyn Fn(Continuation<E>, Continuation<A>) + Send + Sync;

/// One side of a task's outcome: call it with the value to settle the task.
///
/// Clones share the same callback, and settling is idempotent: the callback
/// runs on the first [`call`](Continuation::call) only.
pub struct Continuation<T> {
    callback: Arc<Mutex<Option<Callback<T>>>>,
    settled: Arc<AtomicBool>,
}

impl<T> Continuation<T> {
    /// Wraps `callback` in a continuation of its own.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(T) + Send + 'static,
    {
        Self::linked(callback, Arc::new(AtomicBool::new(false)))
    }

    /// Wraps `callback` so that it shares its settled flag with every other
    /// continuation linked to `settled`.
    fn linked<F>(callback: F, settled: Arc<AtomicBool>) -> Self
    where
        F: FnOnce(T) + Send + 'static,
    {
        Self {
            callback: Arc::new(Mutex::new(Some(Box::new(callback)))),
            settled,
        }
    }

    /// Settles with `value`. Ignored if already settled.
    pub fn call(&self, value: T) {
        if self.settled.swap(true, Ordering::AcqRel) {
            tracing::trace!("ignoring settlement of an already settled task");
            return;
        }
        let callback = self.callback.lock().take();
        if let Some(callback) = callback {
            callback(value);
        }
    }

    /// Returns `true` once this continuation, or one linked to it, has been called.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled.load(Ordering::Acquire)
    }
}

impl<T> Clone for Continuation<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
            settled: Arc::clone(&self.settled),
        }
    }
}

/// A lazy computation that either rejects with `E` or resolves with `A`.
pub struct Task<E, A> {
    computation: Arc<Computation<E, A>>,
}

impl<E, A> Clone for Task<E, A> {
    fn clone(&self) -> Self {
        Self {
            computation: Arc::clone(&self.computation),
        }
    }
}

impl<E, A> std::fmt::Display for Task<E, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Task")
    }
}

impl<E, A> Task<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Creates a task from a computation. The computation is not run until
    /// the task is forked.
    pub fn new<F>(computation: F) -> Self
    where
        F: Fn(Continuation<E>, Continuation<A>) + Send + Sync + 'static,
    {
        Self {
            computation: Arc::new(computation),
        }
    }

    /// A task that resolves with `value` when forked.
    pub fn of(value: A) -> Self
    where
        A: Clone + Sync,
    {
        Self::new(move |_, resolve| resolve.call(value.clone()))
    }

    /// A task that rejects with `error` when forked.
    pub fn rejected(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move |reject, _| reject.call(error.clone()))
    }

    /// Runs the computation, delivering its outcome to `reject` or `resolve`.
    ///
    /// At most one of the two is called, at most once. Forking again runs the
    /// computation again.
    pub fn fork<R, S>(&self, reject: R, resolve: S)
    where
        R: FnOnce(E) + Send + 'static,
        S: FnOnce(A) + Send + 'static,
    {
        tracing::trace!("forking task");
        self.settle_with(reject, resolve);
    }

    fn run(&self, reject: Continuation<E>, resolve: Continuation<A>) {
        (self.computation)(reject, resolve);
    }

    /// Runs the computation with a fresh pair of linked continuations, so the
    /// first of `on_rejected` and `on_resolved` to be called wins.
    fn settle_with<R, S>(&self, on_rejected: R, on_resolved: S)
    where
        R: FnOnce(E) + Send + 'static,
        S: FnOnce(A) + Send + 'static,
    {
        let settled = Arc::new(AtomicBool::new(false));
        self.run(
            Continuation::linked(on_rejected, Arc::clone(&settled)),
            Continuation::linked(on_resolved, settled),
        );
    }

    /// Transforms the resolved value.
    pub fn map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> B + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.bimap(|error| error, function)
    }

    /// Transforms the rejection.
    pub fn map_rejected<M, F>(self, function: F) -> Task<M, A>
    where
        F: Fn(E) -> M + Send + Sync + 'static,
        M: Send + 'static,
    {
        self.bimap(function, |value| value)
    }

    /// Transforms whichever outcome the task settles with.
    pub fn bimap<M, B, F, G>(self, on_rejected: F, on_resolved: G) -> Task<M, B>
    where
        F: Fn(E) -> M + Send + Sync + 'static,
        G: Fn(A) -> B + Send + Sync + 'static,
        M: Send + 'static,
        B: Send + 'static,
    {
        let on_rejected = Arc::new(on_rejected);
        let on_resolved = Arc::new(on_resolved);
        Task::new(move |reject: Continuation<M>, resolve: Continuation<B>| {
            let on_rejected = Arc::clone(&on_rejected);
            let on_resolved = Arc::clone(&on_resolved);
            self.settle_with(
                move |error| reject.call(on_rejected(error)),
                move |value| resolve.call(on_resolved(value)),
            );
        })
    }

    /// Runs the task `function` builds from the resolved value. A rejection
    /// skips `function`.
    pub fn chain<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> Task<E, B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |reject: Continuation<E>, resolve: Continuation<B>| {
            let function = Arc::clone(&function);
            let next_reject = reject.clone();
            self.settle_with(
                move |error| reject.call(error),
                move |value| function(value).run(next_reject, resolve),
            );
        })
    }

    /// Alias for [`chain`](Task::chain).
    pub fn and_then<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(A) -> Task<E, B> + Send + Sync + 'static,
        B: Send + 'static,
    {
        self.chain(function)
    }

    /// Recovers from a rejection with the task `function` builds from it.
    pub fn or_else<M, F>(self, function: F) -> Task<M, A>
    where
        F: Fn(E) -> Task<M, A> + Send + Sync + 'static,
        M: Send + 'static,
    {
        let function = Arc::new(function);
        Task::new(move |reject: Continuation<M>, resolve: Continuation<A>| {
            let function = Arc::clone(&function);
            let next_resolve = resolve.clone();
            self.settle_with(
                move |error| function(error).run(reject, next_resolve),
                move |value| resolve.call(value),
            );
        })
    }

    /// Resolves this task for a function, then `other` for its argument.
    ///
    /// The two run one after the other; a rejection of either rejects the
    /// result, and `other` is not forked when this task rejects.
    pub fn ap<B, Output>(self, other: Task<E, B>) -> Task<E, Output>
    where
        A: FnOnce(B) -> Output,
        B: Send + 'static,
        Output: Send + 'static,
    {
        Task::new(move |reject: Continuation<E>, resolve: Continuation<Output>| {
            let other = other.clone();
            let next_reject = reject.clone();
            self.settle_with(
                move |error| reject.call(error),
                move |function: A| {
                    other.settle_with(
                        move |error| next_reject.call(error),
                        move |value| resolve.call(function(value)),
                    );
                },
            );
        })
    }

    /// Forks every task and resolves with their values in input order.
    ///
    /// Rejects with the first rejection; later settlements are ignored and
    /// the remaining tasks are not cancelled. An empty input resolves with an
    /// empty vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adtkit::effect::Task;
    /// use std::sync::mpsc;
    /// use std::time::Duration;
    ///
    /// fn delayed(millis: u64, value: char) -> Task<String, char> {
    ///     Task::new(move |_reject, resolve| {
    ///         std::thread::spawn(move || {
    ///             std::thread::sleep(Duration::from_millis(millis));
    ///             resolve.call(value);
    ///         });
    ///     })
    /// }
    ///
    /// let (sender, receiver) = mpsc::channel();
    /// Task::parallel(vec![delayed(50, 'a'), delayed(0, 'b')]).fork(
    ///     |_| {},
    ///     move |values| {
    ///         sender.send(values).ok();
    ///     },
    /// );
    /// assert_eq!(receiver.recv().ok(), Some(vec!['a', 'b']));
    /// ```
    pub fn parallel<I>(tasks: I) -> Task<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let tasks: Arc<[Self]> = tasks.into_iter().collect();
        Task::new(move |reject: Continuation<E>, resolve: Continuation<Vec<A>>| {
            let total = tasks.len();
            if total == 0 {
                resolve.call(Vec::new());
                return;
            }
            let state = Arc::new(Mutex::new(ParallelState::new(total)));
            for (index, task) in tasks.iter().enumerate() {
                let state = Arc::clone(&state);
                let resolve = resolve.clone();
                let reject = reject.clone();
                task.settle_with(
                    move |error| {
                        if !reject.is_settled() {
                            tracing::debug!(index, "parallel task rejected");
                        }
                        reject.call(error);
                    },
                    move |value| {
                        let finished = state.lock().record(index, value);
                        if let Some(values) = finished {
                            tracing::debug!(count = total, "parallel tasks resolved");
                            resolve.call(values);
                        }
                    },
                );
            }
        })
    }

    /// Forks the task and waits for its outcome.
    ///
    /// The task is forked on first poll. A task that never settles, or drops
    /// both continuations without calling them, leaves the future pending.
    #[cfg(feature = "async")]
    pub fn into_future(self) -> impl std::future::Future<Output = Result<A, E>> + Send {
        async move {
            let (sender, receiver) = futures::channel::oneshot::channel();
            let sender = Arc::new(Mutex::new(Some(sender)));
            let reject_sender = Arc::clone(&sender);
            self.fork(
                move |error| {
                    if let Some(sender) = reject_sender.lock().take() {
                        sender.send(Err(error)).ok();
                    }
                },
                move |value| {
                    if let Some(sender) = sender.lock().take() {
                        sender.send(Ok(value)).ok();
                    }
                },
            );
            match receiver.await {
                Ok(outcome) => outcome,
                Err(futures::channel::oneshot::Canceled) => futures::future::pending().await,
            }
        }
    }
}

/// Bookkeeping shared by the members of one `parallel` fork.
struct ParallelState<A> {
    values: Vec<Option<A>>,
    remaining: usize,
}

impl<A> ParallelState<A> {
    fn new(total: usize) -> Self {
        Self {
            values: std::iter::repeat_with(|| None).take(total).collect(),
            remaining: total,
        }
    }

    /// Stores the value for `index`; returns every value once the last one
    /// arrives.
    fn record(&mut self, index: usize, value: A) -> Option<Vec<A>> {
        if self.values[index].replace(value).is_none() {
            self.remaining -= 1;
        }
        (self.remaining == 0).then(|| self.values.drain(..).flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::atomic::AtomicUsize;
    use std::sync::mpsc;

    fn outcome<E, A>(task: &Task<E, A>) -> Option<Result<A, E>>
    where
        E: Send + 'static,
        A: Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let reject_sender = sender.clone();
        task.fork(
            move |error| {
                reject_sender.send(Err(error)).ok();
            },
            move |value| {
                sender.send(Ok(value)).ok();
            },
        );
        receiver.try_recv().ok()
    }

    #[rstest]
    fn construction_is_lazy_and_each_fork_reruns() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let task: Task<(), usize> = Task::new(move |_, resolve| {
            resolve.call(counter.fetch_add(1, Ordering::SeqCst) + 1);
        });
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(outcome(&task), Some(Ok(1)));
        assert_eq!(outcome(&task), Some(Ok(2)));
    }

    #[rstest]
    fn only_first_settlement_counts() {
        let task: Task<&str, i32> = Task::new(|reject, resolve| {
            resolve.call(1);
            resolve.call(2);
            reject.call("late");
        });
        let (sender, receiver) = mpsc::channel();
        let reject_sender = sender.clone();
        task.fork(
            move |error| {
                reject_sender.send(Err(error)).ok();
            },
            move |value| {
                sender.send(Ok(value)).ok();
            },
        );
        assert_eq!(receiver.try_iter().collect::<Vec<_>>(), vec![Ok(1)]);
    }

    fn resolve_then_reject() -> Task<&'static str, i32> {
        Task::new(|reject, resolve| {
            resolve.call(1);
            reject.call("late");
        })
    }

    fn resolve_later(value: i32) -> Task<&'static str, i32> {
        Task::new(move |_, resolve| {
            std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(30));
                resolve.call(value);
            });
        })
    }

    fn settlements<E, A>(task: &Task<E, A>) -> Vec<Result<A, E>>
    where
        E: Send + 'static,
        A: Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let reject_sender = sender.clone();
        task.fork(
            move |error| {
                reject_sender.send(Err(error)).ok();
            },
            move |value| {
                sender.send(Ok(value)).ok();
            },
        );
        receiver.iter().collect()
    }

    #[rstest]
    fn chain_ignores_a_rejection_after_the_upstream_resolved() {
        let task = resolve_then_reject().chain(|value| resolve_later(value + 1));
        assert_eq!(settlements(&task), vec![Ok(2)]);
    }

    #[rstest]
    fn map_and_or_else_ignore_a_late_rejection() {
        let mapped = resolve_then_reject().map(|value| value * 10);
        assert_eq!(settlements(&mapped), vec![Ok(10)]);
        let recovered = resolve_then_reject().or_else(|_| Task::<&str, i32>::of(0));
        assert_eq!(settlements(&recovered), vec![Ok(1)]);
    }

    #[rstest]
    fn ap_ignores_a_late_rejection_of_its_argument() {
        let increment: fn(i32) -> i32 = |n| n + 1;
        let task = Task::<&str, fn(i32) -> i32>::of(increment).ap(resolve_then_reject());
        assert_eq!(settlements(&task), vec![Ok(2)]);
    }

    #[rstest]
    fn parallel_ignores_a_member_rejecting_after_it_resolved() {
        let task = Task::parallel(vec![resolve_then_reject(), resolve_later(2)]);
        assert_eq!(settlements(&task), vec![Ok(vec![1, 2])]);
    }

    #[rstest]
    fn rejection_skips_chain() {
        let calls = Arc::new(AtomicUsize::new(0));
        let spy = Arc::clone(&calls);
        let task = Task::<&str, i32>::rejected("no").chain(move |value| {
            spy.fetch_add(1, Ordering::SeqCst);
            Task::of(value)
        });
        assert_eq!(outcome(&task), Some(Err("no")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn or_else_recovers() {
        let task = Task::<&str, usize>::rejected("four")
            .or_else(|error| Task::<(), usize>::of(error.len()));
        assert_eq!(outcome(&task), Some(Ok(4)));
    }

    #[rstest]
    fn bimap_and_map_rejected() {
        let task = Task::<i32, i32>::rejected(2).bimap(|error| error * 10, |value| value + 1);
        assert_eq!(outcome(&task), Some(Err(20)));
        let renamed = Task::<i32, i32>::rejected(2).map_rejected(|error| format!("code {error}"));
        assert_eq!(outcome(&renamed), Some(Err("code 2".to_string())));
    }

    #[rstest]
    fn ap_runs_function_then_value() {
        let increment: fn(i32) -> i32 = |n| n + 1;
        let task = Task::<&str, fn(i32) -> i32>::of(increment).ap(Task::of(41));
        assert_eq!(outcome(&task), Some(Ok(42)));
    }

    #[rstest]
    fn parallel_of_nothing_resolves_empty() {
        let task = Task::<(), i32>::parallel(Vec::new());
        assert_eq!(outcome(&task), Some(Ok(Vec::new())));
    }

    #[rstest]
    fn parallel_rejects_with_first_rejection() {
        let task = Task::parallel(vec![
            Task::of(1),
            Task::rejected("second"),
            Task::rejected("third"),
        ]);
        assert_eq!(outcome(&task), Some(Err("second")));
    }

    #[rstest]
    fn parallel_state_waits_for_every_index() {
        let mut state = ParallelState::new(2);
        assert_eq!(state.record(1, 'b'), None);
        assert_eq!(state.record(0, 'a'), Some(vec!['a', 'b']));
    }
}
