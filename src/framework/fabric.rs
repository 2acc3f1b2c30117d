//! # Synchronization Fabric
//!
//! [`Office`] bundles the shared state of a run with the primitives that
//! guard it:
//!
//! | primitive        | type                         | guards / signals                          |
//! |------------------|------------------------------|-------------------------------------------|
//! | log lock         | [`Journal`]                  | sequence counter and log output           |
//! | office gate      | `Mutex<Queues>`              | queue counters and the serve decision     |
//! | wake signal (x3) | `Semaphore`, 0 permits       | one permit per drained unit of a kind     |
//! | ack signal       | `Semaphore`, 0 permits       | called customer lets its clerk go on      |
//! | open flag        | `AtomicBool`                 | cleared once, under the log lock          |
//!
//! Lock order is always gate before log lock. The coordinator only ever takes
//! the log lock, so there is no cycle.
//!
//! ## Rendezvous
//!
//! ```text
//! clerk                                  customer
//! -----                                  --------
//! gate: take unit of kind k
//! call(k)  ---- wake[k] permit ---->     wait_called(k)
//! wait_acknowledged()  <-- ack permit -- acknowledge()
//! simulate work
//! ```
//!
//! The ack signal is shared by all clerks, so it pairs counts rather than
//! identities: every posted ack releases one waiting clerk.
//!
//! ## Abort
//!
//! [`Office::abort`] clears the open flag and closes every semaphore. Actors
//! blocked in a rendezvous wake with [`OfficeError::SignalClosed`] instead of
//! waiting for a counterpart that will never come.

use crate::framework::{Journal, LogSink, OfficeError};
use crate::model::{Event, ScanOrder, ServiceKind};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, MutexGuard, Semaphore};
use tracing::{debug, warn};

/// Per-kind waiting counters, only reachable through the office gate.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Queues {
    waiting: [u32; 3],
}

impl Queues {
    pub fn waiting(&self, kind: ServiceKind) -> u32 {
        self.waiting[kind.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.iter().all(|&n| n == 0)
    }

    pub fn total(&self) -> u32 {
        self.waiting.iter().sum()
    }

    /// A customer joins the queue for `kind`.
    pub fn join(&mut self, kind: ServiceKind) {
        self.waiting[kind.index()] += 1;
    }

    /// Takes one unit from the first non-empty queue in `order`.
    ///
    /// Returns `None` (and changes nothing) when every queue is empty, so a
    /// counter can never go below zero.
    pub fn take_next(&mut self, order: ScanOrder) -> Option<ServiceKind> {
        let kind = order.into_iter().find(|kind| self.waiting(*kind) > 0)?;
        self.waiting[kind.index()] -= 1;
        Some(kind)
    }
}

/// Shared state and synchronization primitives for one run.
pub struct Office {
    journal: Journal,
    open: AtomicBool,
    gate: Mutex<Queues>,
    wake: [Semaphore; 3],
    ack: Semaphore,
}

impl Office {
    /// A fresh, open office with empty queues and no pending signals.
    pub fn new(sink: impl LogSink) -> Self {
        Self {
            journal: Journal::new(sink),
            open: AtomicBool::new(true),
            gate: Mutex::new(Queues::default()),
            wake: [Semaphore::new(0), Semaphore::new(0), Semaphore::new(0)],
            ack: Semaphore::new(0),
        }
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Acquires the office gate.
    pub async fn gate(&self) -> MutexGuard<'_, Queues> {
        self.gate.lock().await
    }

    /// Closes the office and logs `closing`, both under the log lock.
    ///
    /// Returns the sequence number of the closing line. Calling it twice is a
    /// no-op the second time and returns `None`.
    pub async fn close(&self) -> Result<Option<u64>, OfficeError> {
        let mut log = self.journal.lock().await;
        if !self.open.swap(false, Ordering::SeqCst) {
            return Ok(None);
        }
        let seq = log.emit_untagged(Event::Closing)?;
        debug!(seq, "office closed");
        Ok(Some(seq))
    }

    /// Wakes one customer waiting for `kind`.
    pub fn call(&self, kind: ServiceKind) {
        self.wake[kind.index()].add_permits(1);
    }

    /// Blocks until a clerk calls a customer of `kind`.
    pub async fn wait_called(&self, kind: ServiceKind) -> Result<(), OfficeError> {
        self.wake[kind.index()]
            .acquire()
            .await
            .map_err(|_| OfficeError::SignalClosed("wake"))?
            .forget();
        Ok(())
    }

    /// Tells the serving clerk that the call was noticed.
    pub fn acknowledge(&self) {
        self.ack.add_permits(1);
    }

    /// Blocks until a called customer acknowledges.
    pub async fn wait_acknowledged(&self) -> Result<(), OfficeError> {
        self.ack
            .acquire()
            .await
            .map_err(|_| OfficeError::SignalClosed("ack"))?
            .forget();
        Ok(())
    }

    /// Tears the fabric down after a fatal error.
    pub fn abort(&self) {
        warn!("aborting office");
        self.open.store(false, Ordering::SeqCst);
        for signal in &self.wake {
            signal.close();
        }
        self.ack.close();
    }
}
