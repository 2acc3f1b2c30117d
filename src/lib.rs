#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Post Office
//!
//! > **A synchronization exercise: clerks, customers and three queues.**
//!
//! A post office offers three services (letters, packages, money). Customers
//! arrive at random times, queue for one service and wait to be called. Clerks
//! repeatedly pick a queue, call one customer from it, wait until the customer
//! acknowledges the call, do the work, and take a break whenever nobody is
//! waiting. After a random time the office closes: customers who have not
//! entered yet go home, and clerks go home once every queue is drained.
//!
//! Everything that happens is written to a single numbered event log:
//!
//! ```text
//! 1: U 1: started
//! 2: Z 1: started
//! 3: Z 1: entering office for a service 2
//! 4: U 1: serving a service of type 2
//! 5: Z 1: called by office worker
//! 6: U 1: service finished
//! 7: Z 1: going home
//! 8: U 1: taking break
//! 9: closing
//! 10: U 1: break finished
//! 11: U 1: going home
//! ```
//!
//! ## Module Tour
//!
//! ### 1. The Fabric ([`framework`])
//! Shared state and the primitives guarding it: the log lock ([`Journal`](framework::Journal)),
//! the office gate, the per-kind wake signals and the acknowledgement signal,
//! all bundled in [`Office`](framework::Office).
//!
//! ### 2. The Actors ([`customer_actor`], [`clerk_actor`])
//! One [`OfficeActor`](framework::OfficeActor) implementation per role, each a
//! single async lifecycle.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! Validates parameters, launches actors, closes the office and collects the
//! [`RunReport`](lifecycle::RunReport).
//!
//! ### 4. Plain Data ([`model`])
//! Service kinds, actor tags and log events.
//!
//! ## Running
//!
//! ```bash
//! # NZ NU TZ TU F
//! post-office 20 3 100 10 500
//! RUST_LOG=info post-office 20 3 100 10 500 --output run.log
//! ```

pub mod clerk_actor;
pub mod customer_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
