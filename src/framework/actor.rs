//! # Office Actors
//!
//! An office actor is anything the coordinator launches as its own task:
//! today a [`Customer`](crate::customer_actor::Customer) or a
//! [`Clerk`](crate::clerk_actor::Clerk). The trait only fixes the shape of a
//! lifecycle (`run` consumes the actor and yields an outcome), the protocol
//! itself lives in the implementations.
//!
//! [`Dice`] is the per-actor random source. Every actor seeds its own
//! generator from the wall clock mixed with its role and id, so actors started
//! in the same instant still draw different values.

use crate::framework::{Office, OfficeError};
use crate::model::{Role, ScanOrder, ServiceKind};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A participant with a single, self-contained lifecycle.
#[async_trait]
pub trait OfficeActor: Send + Sized + 'static {
    /// The role used for this actor's log tag.
    const ROLE: Role;

    /// What the actor reports back once its lifecycle is over.
    type Outcome: Debug + Send + 'static;

    fn id(&self) -> u32;

    /// Runs the whole lifecycle against a shared office.
    async fn run(self, office: Arc<Office>) -> Result<Self::Outcome, OfficeError>;
}

/// Per-actor source of bounded random draws and naps.
pub struct Dice {
    rng: StdRng,
}

impl Dice {
    /// Seeds from the current time, the role and the id.
    pub fn for_actor(role: Role, id: u32) -> Self {
        let salt = match role {
            Role::Customer => 0x5a5a_0000_0000_0000,
            Role::Clerk => 0xa5a5_0000_0000_0000,
        };
        Self::seeded(clock_nanos() ^ salt ^ u64::from(id).wrapping_mul(0x9e37_79b9_7f4a_7c15))
    }

    /// Seeds the coordinator's generator.
    pub fn for_coordinator() -> Self {
        Self::seeded(clock_nanos())
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw from `[0, bound]`.
    pub fn upto(&mut self, bound: u64) -> u64 {
        self.rng.gen_range(0..=bound)
    }

    /// Uniform draw from `[low, high]`.
    pub fn between(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..=high)
    }

    pub fn service(&mut self) -> ServiceKind {
        ServiceKind::ALL[self.rng.gen_range(0..3usize)]
    }

    pub fn scan_order(&mut self) -> ScanOrder {
        ServiceKind::rotation(self.rng.gen_range(0..3usize))
    }

    /// Sleeps for a random number of milliseconds in `[0, bound]`.
    pub async fn nap_millis(&mut self, bound: u64) {
        nap(Duration::from_millis(self.upto(bound))).await;
    }

    /// Sleeps for a random number of microseconds in `[0, bound]`.
    pub async fn nap_micros(&mut self, bound: u64) {
        nap(Duration::from_micros(self.upto(bound))).await;
    }
}

/// Sleeps for `duration`; a zero duration still yields to the scheduler.
pub async fn nap(duration: Duration) {
    if duration.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(duration).await;
    }
}

fn clock_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
