//! Shared machinery every actor in the office runs on.
//!
//! # Main Components
//!
//! - [`Office`] - shared state plus the gate, wake and ack signals
//! - [`Journal`] - the log lock: sequenced, line-atomic event output
//! - [`LogSink`] - where lines go ([`FileSink`], [`MemorySink`])
//! - [`OfficeActor`] - the lifecycle contract for customers and clerks
//! - [`OfficeError`] - the single error type of the crate

pub mod actor;
pub mod error;
pub mod fabric;
pub mod journal;
pub mod sink;

pub use actor::{nap, Dice, OfficeActor};
pub use error::OfficeError;
pub use fabric::{Office, Queues};
pub use journal::{Journal, JournalGuard};
pub use sink::{FileSink, LogSink, MemorySink};
