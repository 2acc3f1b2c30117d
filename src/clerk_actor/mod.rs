//! # Clerk Actor
//!
//! A clerk logs `started` once and then loops over serve attempts until the
//! office is closed and every queue is drained.
//!
//! One pass:
//!
//! 1. Take the gate, draw a scan order (one of the three rotations) and take
//!    one unit from the first non-empty queue in that order.
//! 2. If a unit was taken: log `serving`, release the gate, call one customer
//!    of that kind, wait for the acknowledgement, work for `[0, 10]` us and log
//!    `service finished`.
//! 3. Read the open flag, then the queues (under the gate):
//!    - closed and empty: log `going home` and stop;
//!    - open and empty: take a break of `[0, TU]` ms;
//!    - otherwise go straight to the next pass.
//!
//! The open flag is read before the queues. A customer can only join while the
//! office is open, and closing happens under the log lock after that join, so
//! once a clerk sees the office closed it also sees every accepted customer.

use crate::framework::{Dice, Office, OfficeActor, OfficeError};
use crate::model::{ActorTag, Event, Role};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, trace};

/// Upper bound, in microseconds, of the simulated work for one service.
pub const SERVICE_TIME_MAX_US: u64 = 10;

/// What a clerk did during its shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClerkOutcome {
    pub services: u32,
    pub breaks: u32,
}

#[derive(Debug, Clone)]
pub struct Clerk {
    id: u32,
    break_max_ms: u64,
    seed: Option<u64>,
}

impl Clerk {
    /// A clerk whose breaks last a random time in `[0, break_max_ms]`.
    pub fn new(id: u32, break_max_ms: u64) -> Self {
        Self {
            id,
            break_max_ms,
            seed: None,
        }
    }

    /// Uses a fixed seed instead of the clock.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[async_trait]
impl OfficeActor for Clerk {
    const ROLE: Role = Role::Clerk;
    type Outcome = ClerkOutcome;

    fn id(&self) -> u32 {
        self.id
    }

    async fn run(self, office: Arc<Office>) -> Result<ClerkOutcome, OfficeError> {
        let tag = ActorTag::clerk(self.id);
        let mut dice = match self.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::for_actor(Self::ROLE, self.id),
        };
        let mut outcome = ClerkOutcome::default();

        office.journal().emit(tag, Event::Started).await?;

        loop {
            let taken = {
                let mut queues = office.gate().await;
                let order = dice.scan_order();
                match queues.take_next(order) {
                    Some(kind) => {
                        office.journal().emit(tag, Event::Serving(kind)).await?;
                        trace!(?order, %kind, left = queues.waiting(kind), "took unit");
                        Some(kind)
                    }
                    None => None,
                }
            };

            if let Some(kind) = taken {
                office.call(kind);
                office.wait_acknowledged().await?;
                dice.nap_micros(SERVICE_TIME_MAX_US).await;
                office.journal().emit(tag, Event::ServiceFinished).await?;
                outcome.services += 1;
            }

            let closed = !office.is_open();
            let idle = office.gate().await.is_empty();

            if idle && closed {
                break;
            }
            if idle {
                office.journal().emit(tag, Event::TakingBreak).await?;
                dice.nap_millis(self.break_max_ms).await;
                office.journal().emit(tag, Event::BreakFinished).await?;
                outcome.breaks += 1;
            }
        }

        office.journal().emit(tag, Event::GoingHome).await?;
        debug!(services = outcome.services, breaks = outcome.breaks, "shift over");
        Ok(outcome)
    }
}
