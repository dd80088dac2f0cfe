// SPDX-License-Identifier: MPL-2.0
//! Cross-thread submission handle.
//!
//! The scheduler itself is confined to the UI-affine thread. Background work
//! (downloads, file scans, ...) submits through a [`Handle`], which posts the
//! request onto the scheduler's work queue; the scheduler picks it up on its
//! next tick, on the UI thread.

use crate::toast::{Toast, ToastId};
use tokio::sync::mpsc;

/// Clonable, thread-safe submitter for a [`crate::Scheduler`].
#[derive(Debug, Clone)]
pub struct Handle {
    submitter: mpsc::UnboundedSender<Toast>,
}

impl Handle {
    pub(crate) fn new(submitter: mpsc::UnboundedSender<Toast>) -> Self {
        Self { submitter }
    }

    /// Submits a request from any thread; never blocks.
    ///
    /// Submission is fire-and-forget: if the scheduler has been dropped the
    /// request is discarded. The assigned id is returned either way and can
    /// be used with [`crate::Scheduler::cancel`] later, on the UI thread.
    pub fn submit(&self, toast: Toast) -> ToastId {
        let id = toast.id;
        if self.submitter.send(toast).is_err() {
            log::debug!("toast {:?} dropped: scheduler is gone", id);
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_after_scheduler_drop_does_not_panic() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = Handle::new(tx);
        drop(rx);

        let toast = Toast::new("orphan");
        let expected = toast.id();
        assert_eq!(handle.submit(toast), expected);
    }

    #[test]
    fn handle_is_clonable_and_sendable() {
        fn assert_send<T: Send>(_: &T) {}

        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = Handle::new(tx);
        assert_send(&handle);

        let clone = handle.clone();
        clone.submit(Toast::new("via clone"));
        let received = rx.try_recv().expect("submission reaches the queue");
        assert_eq!(received.message(), "via clone");
    }
}
