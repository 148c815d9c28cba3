//! Latest-request-wins cancellation.
//!
//! A [`CancellationSlot`] hands out increasing generations. Starting a request
//! bumps the generation, which invalidates every handle issued before it. The
//! bump and the publish happen in one `send_modify` call, so two racing
//! requests always agree on which of them is current.

use std::future::{Future, pending};
use tokio::sync::watch;

#[derive(Debug)]
pub struct CancellationSlot {
    latest: watch::Sender<u64>,
}

impl Default for CancellationSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationSlot {
    #[must_use]
    pub fn new() -> Self {
        let (latest, _) = watch::channel(0);
        Self { latest }
    }

    /// Registers a new request, superseding any request still holding an
    /// older handle from this slot.
    pub fn begin(&self) -> RequestHandle {
        let mut generation = 0;
        self.latest.send_modify(|latest| {
            *latest = latest.wrapping_add(1);
            generation = *latest;
        });

        RequestHandle {
            generation,
            latest: self.latest.subscribe(),
        }
    }
}

/// Ticket for one in-flight request.
#[derive(Debug)]
pub struct RequestHandle {
    generation: u64,
    latest: watch::Receiver<u64>,
}

impl RequestHandle {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no newer request has been started on the slot.
    #[must_use]
    pub fn is_current(&self) -> bool {
        *self.latest.borrow() == self.generation
    }

    /// Resolves once a newer request has been started on the slot.
    pub async fn superseded(&self) {
        let mut latest = self.latest.clone();
        let generation = self.generation;
        if latest.wait_for(|value| *value != generation).await.is_err() {
            // slot dropped: nobody can supersede us anymore
            pending::<()>().await;
        }
    }

    /// Drives `request` to completion unless the handle is superseded first.
    ///
    /// Returns `None` when superseded, either while the request was running
    /// (the request future is dropped, aborting the transport) or after it
    /// completed but before the result was handed back.
    pub async fn run<F: Future>(&self, request: F) -> Option<F::Output> {
        let output = tokio::select! {
            biased;
            () = self.superseded() => return None,
            output = request => output,
        };

        if self.is_current() {
            Some(output)
        } else {
            None
        }
    }
}
