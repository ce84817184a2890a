//! Combine-latest derivations over `tokio::sync::watch` channels.
//!
//! View models publish their properties through watch channels. A screen
//! binds a pure function to several of them with [`combine_latest2`] or
//! [`combine_latest3`]: the function runs once immediately on the current
//! values, then again whenever any input changes, always seeing the latest
//! value of every input. Changes that land before the derivation task gets
//! to run are coalesced into a single recomputation.
//!
//! The input borrows are held together for the whole derive call, so a
//! publisher cannot change one input between the reads of two others. A
//! view model that publishes several inputs in a safe order therefore never
//! has a half-applied update observed.
//!
//! Each derivation runs on its own spawned task and must be created inside
//! a tokio runtime. The returned [`Subscription`] owns the task; dropping it
//! tears the derivation down. The task also stops on its own when any input
//! sender is dropped or every output receiver is gone.

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Handle that keeps one or more derivation tasks alive.
#[derive(Debug, Default)]
pub struct Subscription {
    handles: Vec<JoinHandle<()>>,
}

impl Subscription {
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self {
            handles: vec![handle],
        }
    }

    /// Merge another subscription into this one so both end together.
    pub fn and(mut self, mut other: Subscription) -> Self {
        self.handles.append(&mut other.handles);
        self
    }

    /// Whether any task is still running.
    pub fn is_active(&self) -> bool {
        self.handles.iter().any(|handle| !handle.is_finished())
    }

    /// Stop all tasks now.
    pub fn cancel(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Derive a value from the latest of two inputs.
pub fn combine_latest2<A, B, O, F>(
    mut a: watch::Receiver<A>,
    mut b: watch::Receiver<B>,
    mut derive: F,
) -> (watch::Receiver<O>, Subscription)
where
    A: Send + Sync + 'static,
    B: Send + Sync + 'static,
    O: Send + Sync + 'static,
    F: FnMut(&A, &B) -> O + Send + 'static,
{
    let initial = derive(&a.borrow_and_update(), &b.borrow_and_update());
    let (tx, rx) = watch::channel(initial);

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = a.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                changed = b.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = tx.closed() => break,
            }

            let next = derive(&a.borrow_and_update(), &b.borrow_and_update());
            if tx.send(next).is_err() {
                break;
            }
        }
        tracing::trace!("combine_latest2 finished");
    });

    (rx, Subscription::new(handle))
}

/// Derive a value from the latest of three inputs.
pub fn combine_latest3<A, B, C, O, F>(
    mut a: watch::Receiver<A>,
    mut b: watch::Receiver<B>,
    mut c: watch::Receiver<C>,
    mut derive: F,
) -> (watch::Receiver<O>, Subscription)
where
    A: Send + Sync + 'static,
    B: Send + Sync + 'static,
    C: Send + Sync + 'static,
    O: Send + Sync + 'static,
    F: FnMut(&A, &B, &C) -> O + Send + 'static,
{
    let initial = derive(
        &a.borrow_and_update(),
        &b.borrow_and_update(),
        &c.borrow_and_update(),
    );
    let (tx, rx) = watch::channel(initial);

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                changed = a.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                changed = b.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                changed = c.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
                _ = tx.closed() => break,
            }

            // All three borrows live until the end of this statement.
            let next = derive(
                &a.borrow_and_update(),
                &b.borrow_and_update(),
                &c.borrow_and_update(),
            );
            if tx.send(next).is_err() {
                break;
            }
        }
        tracing::trace!("combine_latest3 finished");
    });

    (rx, Subscription::new(handle))
}

/// Call `sink` with the current value and then with every new value.
pub fn observe<T, F>(mut rx: watch::Receiver<T>, mut sink: F) -> Subscription
where
    T: Send + Sync + 'static,
    F: FnMut(&T) + Send + 'static,
{
    let handle = tokio::spawn(async move {
        sink(&rx.borrow_and_update());
        while rx.changed().await.is_ok() {
            sink(&rx.borrow_and_update());
        }
    });

    Subscription::new(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::timeout;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_initial_value_computed_immediately() {
        let (_a_tx, a_rx) = watch::channel(2);
        let (_b_tx, b_rx) = watch::channel(3);

        let (out, _sub) = combine_latest2(a_rx, b_rx, |a, b| a * b);
        assert_eq!(*out.borrow(), 6);
    }

    #[tokio::test]
    async fn test_recomputes_on_either_input() {
        let (a_tx, a_rx) = watch::channel(1);
        let (b_tx, b_rx) = watch::channel(10);
        let (mut out, _sub) = combine_latest2(a_rx, b_rx, |a, b| a + b);

        a_tx.send(2).unwrap();
        timeout(Duration::from_secs(1), out.changed())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(*out.borrow_and_update(), 12);

        b_tx.send(20).unwrap();
        timeout(Duration::from_secs(1), out.changed())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(*out.borrow_and_update(), 22);
    }

    #[tokio::test]
    async fn test_simultaneous_changes_coalesce() {
        let (a_tx, a_rx) = watch::channel(0);
        let (b_tx, b_rx) = watch::channel(0);
        let (c_tx, c_rx) = watch::channel(0);
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();

        let (mut out, _sub) = combine_latest3(a_rx, b_rx, c_rx, move |a, b, c| {
            counter.fetch_add(1, Ordering::SeqCst);
            (*a, *b, *c)
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        a_tx.send(1).unwrap();
        b_tx.send(2).unwrap();
        c_tx.send(3).unwrap();

        timeout(Duration::from_secs(1), out.changed())
            .await
            .unwrap()
            .unwrap();
        settle().await;

        assert_eq!(*out.borrow(), (1, 2, 3));
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_dropping_subscription_stops_updates() {
        let (a_tx, a_rx) = watch::channel(1);
        let (_b_tx, b_rx) = watch::channel(1);
        let (out, sub) = combine_latest2(a_rx, b_rx, |a, b| a + b);

        drop(sub);
        settle().await;

        let _ = a_tx.send(5);
        settle().await;
        assert_eq!(*out.borrow(), 2);
    }

    #[tokio::test]
    async fn test_input_closed_ends_task() {
        let (a_tx, a_rx) = watch::channel(1);
        let (_b_tx, b_rx) = watch::channel(1);
        let (_out, sub) = combine_latest2(a_rx, b_rx, |a, b| a + b);
        assert!(sub.is_active());

        drop(a_tx);
        settle().await;
        assert!(!sub.is_active());
    }

    #[tokio::test]
    async fn test_observe_sees_initial_and_updates() {
        let (tx, rx) = watch::channel("first".to_string());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let _sub = observe(rx, move |value: &String| {
            sink.lock().unwrap().push(value.clone());
        });
        settle().await;

        tx.send("second".to_string()).unwrap();
        settle().await;

        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_subscription_and_merges() {
        let (_a_tx, a_rx) = watch::channel(0);
        let (_b_tx, b_rx) = watch::channel(0);
        let (_out1, first) = combine_latest2(a_rx.clone(), b_rx.clone(), |a, b| a + b);
        let (_out2, second) = combine_latest2(a_rx, b_rx, |a, b| a - b);

        let mut merged = first.and(second);
        assert!(merged.is_active());
        merged.cancel();
        settle().await;
        assert!(!merged.is_active());
    }
}
