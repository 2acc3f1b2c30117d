//! # Customer Actor
//!
//! A customer makes a single pass through the office and never retries:
//!
//! ```text
//! Idle --nap[0,TZ]ms--> Arriving --closed?--> TurnedAway
//!                          |
//!                   gate + log lock: closed? --> TurnedAway
//!                          |
//!                   pick kind, join queue, log "entering"
//!                          |
//!                   wait on wake[kind]  --> log "called", ack
//!                          |
//!                   nap[0,10]us, log "going home" --> Served
//! ```
//!
//! The second `closed?` check happens while holding both the gate and the log
//! lock. The coordinator clears the open flag under the log lock, so a
//! customer that passes this check joins the queue before `closing` is logged,
//! and a clerk deciding whether to go home is guaranteed to see it.

use crate::framework::{Dice, Office, OfficeActor, OfficeError};
use crate::model::{ActorTag, Event, Role, ServiceKind};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Upper bound, in microseconds, of the pause between being called and leaving.
pub const EXIT_DELAY_MAX_US: u64 = 10;

/// How a customer's visit ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerOutcome {
    /// Received exactly one service of this kind.
    Served(ServiceKind),
    /// Found the office closed and left without service.
    TurnedAway,
}

#[derive(Debug, Clone)]
pub struct Customer {
    id: u32,
    arrival_max_ms: u64,
    seed: Option<u64>,
}

impl Customer {
    /// A customer that arrives after a random delay in `[0, arrival_max_ms]`.
    pub fn new(id: u32, arrival_max_ms: u64) -> Self {
        Self {
            id,
            arrival_max_ms,
            seed: None,
        }
    }

    /// Uses a fixed seed instead of the clock.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn tag(&self) -> ActorTag {
        ActorTag::customer(self.id)
    }
}

#[async_trait]
impl OfficeActor for Customer {
    const ROLE: Role = Role::Customer;
    type Outcome = CustomerOutcome;

    fn id(&self) -> u32 {
        self.id
    }

    async fn run(self, office: Arc<Office>) -> Result<CustomerOutcome, OfficeError> {
        let tag = self.tag();
        let mut dice = match self.seed {
            Some(seed) => Dice::seeded(seed),
            None => Dice::for_actor(Self::ROLE, self.id),
        };

        dice.nap_millis(self.arrival_max_ms).await;
        office.journal().emit(tag, Event::Started).await?;

        if !office.is_open() {
            office.journal().emit(tag, Event::GoingHome).await?;
            debug!("office closed on arrival");
            return Ok(CustomerOutcome::TurnedAway);
        }

        let kind = {
            let mut queues = office.gate().await;
            let mut log = office.journal().lock().await;
            if !office.is_open() {
                log.emit(tag, Event::GoingHome)?;
                debug!("office closed at the gate");
                return Ok(CustomerOutcome::TurnedAway);
            }
            let kind = dice.service();
            queues.join(kind);
            log.emit(tag, Event::Entering(kind))?;
            debug!(%kind, waiting = queues.waiting(kind), "joined queue");
            kind
        };

        office.wait_called(kind).await?;
        office.journal().emit(tag, Event::Called).await?;
        office.acknowledge();

        dice.nap_micros(EXIT_DELAY_MAX_US).await;
        office.journal().emit(tag, Event::GoingHome).await?;
        Ok(CustomerOutcome::Served(kind))
    }
}
