//! View-state delivery over a `tokio::sync::watch` channel.
//!
//! Receivers only ever observe the latest snapshot; intermediate snapshots
//! may be skipped by slow readers but never arrive out of order.

use ad_core::ports::ViewStatePort;
use tokio::sync::watch;

pub struct WatchViewStatePort<S> {
    tx: watch::Sender<S>,
}

impl<S> WatchViewStatePort<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(initial: S) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn subscribe(&self) -> watch::Receiver<S> {
        self.tx.subscribe()
    }

    pub fn latest(&self) -> S {
        self.tx.borrow().clone()
    }
}

impl<S> ViewStatePort<S> for WatchViewStatePort<S>
where
    S: Send + Sync,
{
    fn emit(&self, state: S) {
        // Works with zero receivers, unlike `send`.
        self.tx.send_replace(state);
    }
}
