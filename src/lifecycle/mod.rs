//! # Run Lifecycle & Orchestration
//!
//! Customers and clerks are simple on their own; this module is the
//! "conductor" that turns a set of run parameters into a finished run.
//!
//! **Key Responsibilities:**
//! 1. **Configuration** - [`SimConfig`] validates the five run parameters
//! 2. **Setup** - build the shared [`Office`](crate::framework::Office)
//! 3. **Launch** - spawn clerks, then customers, one task each
//! 4. **Closing** - sleep `[F/2, F]` ms and close the office
//! 5. **Shutdown** - join every actor and collect a [`RunReport`]
//! 6. **Observability Setup** - [`setup_tracing`] for stderr diagnostics
//!
//! ## Shutdown
//!
//! Nothing is cancelled. Closing only changes the decisions actors make from
//! then on: customers still outside go home, clerks keep serving until the
//! queues are empty and then go home. The coordinator just waits for all of
//! them.
//!
//! The one exception is a fatal error in some actor: then the office is
//! aborted (see [`Office::abort`](crate::framework::Office::abort)) so that
//! nobody stays blocked in a rendezvous, and the error is returned.

pub mod config;
pub mod post_office;
pub mod tracing;

pub use config::*;
pub use post_office::*;
pub use self::tracing::*;
