//! # Event Journal
//!
//! The journal is the log lock of the office. It owns the sequence counter
//! and the sink together, so a sequence number can only be taken while the
//! line carrying it is written.
//!
//! Lines have one of two shapes:
//!
//! ```text
//! <seq>: <tag> <id>: <message>
//! <seq>: closing
//! ```
//!
//! Numbering starts at 1 and has no gaps: the counter only advances after the
//! sink accepted the line.
//!
//! Most callers use [`Journal::emit`], which holds the lock for exactly one
//! line. Callers that must make a decision atomically with respect to other
//! writers (closing the office, re-checking whether it is still open) take a
//! [`JournalGuard`] with [`Journal::lock`] instead.

use crate::framework::{LogSink, OfficeError};
use crate::model::{ActorTag, Event};
use tokio::sync::{Mutex, MutexGuard};
use tracing::trace;

struct JournalState {
    next_seq: u64,
    sink: Box<dyn LogSink>,
}

/// Sequenced, line-atomic event log.
pub struct Journal {
    state: Mutex<JournalState>,
}

/// Exclusive hold on the journal; every line written through it still gets
/// its own sequence number.
pub struct JournalGuard<'a> {
    state: MutexGuard<'a, JournalState>,
}

impl Journal {
    pub fn new(sink: impl LogSink) -> Self {
        Self {
            state: Mutex::new(JournalState {
                next_seq: 1,
                sink: Box::new(sink),
            }),
        }
    }

    /// Acquires the log lock.
    pub async fn lock(&self) -> JournalGuard<'_> {
        JournalGuard {
            state: self.state.lock().await,
        }
    }

    /// Writes one tagged line and returns its sequence number.
    pub async fn emit(&self, actor: ActorTag, event: Event) -> Result<u64, OfficeError> {
        self.lock().await.emit(actor, event)
    }

    /// Number of lines written so far.
    pub async fn lines_written(&self) -> u64 {
        self.state.lock().await.next_seq - 1
    }
}

impl JournalGuard<'_> {
    pub fn emit(&mut self, actor: ActorTag, event: Event) -> Result<u64, OfficeError> {
        let seq = self.state.next_seq;
        self.write(format!("{seq}: {actor}: {event}"))
    }

    /// Writes a line with no actor tag (used for [`Event::Closing`]).
    pub fn emit_untagged(&mut self, event: Event) -> Result<u64, OfficeError> {
        let seq = self.state.next_seq;
        self.write(format!("{seq}: {event}"))
    }

    fn write(&mut self, line: String) -> Result<u64, OfficeError> {
        self.state.sink.write_line(&line)?;
        let seq = self.state.next_seq;
        self.state.next_seq += 1;
        trace!(seq, %line, "logged");
        Ok(seq)
    }
}
