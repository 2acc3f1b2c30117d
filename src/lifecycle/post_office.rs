use crate::clerk_actor::{Clerk, ClerkOutcome};
use crate::customer_actor::{Customer, CustomerOutcome};
use crate::framework::{nap, Dice, LogSink, Office, OfficeActor, OfficeError};
use crate::lifecycle::SimConfig;
use crate::model::ServiceKind;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{error, info, info_span, Instrument};

/// Outcome of a single actor, as collected by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorReport {
    Customer(CustomerOutcome),
    Clerk(ClerkOutcome),
}

impl From<CustomerOutcome> for ActorReport {
    fn from(outcome: CustomerOutcome) -> Self {
        ActorReport::Customer(outcome)
    }
}

impl From<ClerkOutcome> for ActorReport {
    fn from(outcome: ClerkOutcome) -> Self {
        ActorReport::Clerk(outcome)
    }
}

/// Totals of a finished run.
///
/// After a clean run `customers_served == clerk_services`: every service a
/// clerk performed was received by exactly one customer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub customers_served: u32,
    pub customers_turned_away: u32,
    /// Services received per kind, indexed by [`ServiceKind::index`].
    pub served_by_kind: [u32; 3],
    pub clerk_services: u32,
    pub clerk_breaks: u32,
    /// Lines in the event log, which is also the last sequence number.
    pub log_lines: u64,
}

impl RunReport {
    pub fn served(&self, kind: ServiceKind) -> u32 {
        self.served_by_kind[kind.index()]
    }

    fn record(&mut self, report: ActorReport) {
        match report {
            ActorReport::Customer(CustomerOutcome::Served(kind)) => {
                self.customers_served += 1;
                self.served_by_kind[kind.index()] += 1;
            }
            ActorReport::Customer(CustomerOutcome::TurnedAway) => {
                self.customers_turned_away += 1;
            }
            ActorReport::Clerk(outcome) => {
                self.clerk_services += outcome.services;
                self.clerk_breaks += outcome.breaks;
            }
        }
    }
}

/// The coordinator: owns the office and every actor task of one run.
///
/// `PostOffice` is responsible for:
/// - **Setup**: validating the parameters and building the shared [`Office`]
/// - **Launch**: spawning `NU` clerks, then `NZ` customers, each in its own task
/// - **Closing**: sleeping `[F/2, F]` ms and closing the office
/// - **Shutdown**: joining every actor and folding their outcomes into a [`RunReport`]
///
/// # Example
///
/// ```ignore
/// let config = SimConfig::new(3, 2, 100, 10, 200)?;
/// let system = PostOffice::open(config, FileSink::create("proj2.out")?)?;
/// let report = system.run().await?;
/// ```
///
/// # Failure
///
/// If any actor fails, the office is aborted so that actors blocked in a
/// rendezvous wake up and unwind; the first error is returned once every
/// task has finished.
pub struct PostOffice {
    office: Arc<Office>,
    config: SimConfig,
    actors: JoinSet<Result<ActorReport, OfficeError>>,
}

impl PostOffice {
    /// Builds the office and launches every actor. Must be called inside a
    /// tokio runtime.
    pub fn open(config: SimConfig, sink: impl LogSink) -> Result<Self, OfficeError> {
        config.validate()?;

        let mut system = Self {
            office: Arc::new(Office::new(sink)),
            config,
            actors: JoinSet::new(),
        };

        for id in 1..=config.clerks {
            system.launch(Clerk::new(id, config.clerk_break_max_ms));
        }
        for id in 1..=config.customers {
            system.launch(Customer::new(id, config.customer_arrival_max_ms));
        }

        info!(
            customers = config.customers,
            clerks = config.clerks,
            "Office opened"
        );
        Ok(system)
    }

    /// Spawns an actor in its own task, inside a span naming it.
    pub fn launch<A>(&mut self, actor: A)
    where
        A: OfficeActor,
        A::Outcome: Into<ActorReport>,
    {
        let office = Arc::clone(&self.office);
        let role = A::ROLE;
        let span = info_span!("actor", %role, id = actor.id());
        self.actors
            .spawn(async move { actor.run(office).await.map(Into::into) }.instrument(span));
    }

    pub fn office(&self) -> &Arc<Office> {
        &self.office
    }

    /// Sleeps `[F/2, F]` ms, then closes the office.
    pub async fn close_after_random_delay(&self) -> Result<(), OfficeError> {
        let max = self.config.closing_max_ms;
        let delay = Dice::for_coordinator().between(max / 2, max);
        nap(Duration::from_millis(delay)).await;

        if let Some(seq) = self.office.close().await? {
            info!(after_ms = delay, seq, "Office closed");
        }
        Ok(())
    }

    /// Waits for every actor to finish and returns the run totals.
    pub async fn shutdown(mut self) -> Result<RunReport, OfficeError> {
        info!(actors = self.actors.len(), "Waiting for actors...");

        let mut report = RunReport::default();
        let mut failure = None;

        while let Some(joined) = self.actors.join_next().await {
            match joined.map_err(OfficeError::from).and_then(|result| result) {
                Ok(actor) => report.record(actor),
                Err(e) => {
                    error!(error = %e, "Actor failed");
                    if failure.is_none() {
                        self.office.abort();
                        failure = Some(e);
                    }
                }
            }
        }

        if let Some(e) = failure {
            return Err(e);
        }

        report.log_lines = self.office.journal().lines_written().await;
        info!(
            served = report.customers_served,
            turned_away = report.customers_turned_away,
            breaks = report.clerk_breaks,
            lines = report.log_lines,
            "Run complete"
        );
        Ok(report)
    }

    /// Closes after the random delay, then shuts down.
    pub async fn run(self) -> Result<RunReport, OfficeError> {
        match self.close_after_random_delay().await {
            Ok(()) => self.shutdown().await,
            Err(e) => {
                error!(error = %e, "Closing failed");
                self.office.abort();
                if let Err(other) = self.shutdown().await {
                    error!(error = %other, "Shutdown after failed close also failed");
                }
                Err(e)
            }
        }
    }
}

/// Runs one complete simulation.
pub async fn simulate(config: SimConfig, sink: impl LogSink) -> Result<RunReport, OfficeError> {
    PostOffice::open(config, sink)?.run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::MemorySink;

    #[tokio::test]
    async fn rejects_invalid_config_before_launch() {
        let config = SimConfig {
            customers: 2,
            clerks: 0,
            customer_arrival_max_ms: 0,
            clerk_break_max_ms: 0,
            closing_max_ms: 0,
        };
        let sink = MemorySink::new();
        assert!(matches!(
            PostOffice::open(config, sink.clone()),
            Err(OfficeError::Config(_))
        ));
        assert!(sink.lines().is_empty());
    }

    #[tokio::test]
    async fn empty_office_only_logs_closing() {
        let sink = MemorySink::new();
        let report = simulate(SimConfig::new(0, 0, 0, 0, 0).unwrap(), sink.clone())
            .await
            .unwrap();

        assert_eq!(report, RunReport { log_lines: 1, ..RunReport::default() });
        assert_eq!(sink.lines(), vec!["1: closing"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn report_balances_customers_and_clerks() {
        let sink = MemorySink::new();
        let config = SimConfig::new(12, 3, 5, 2, 40).unwrap();
        let report = simulate(config, sink.clone()).await.unwrap();

        assert_eq!(report.customers_served + report.customers_turned_away, 12);
        assert_eq!(report.customers_served, report.clerk_services);
        assert_eq!(
            ServiceKind::ALL.iter().map(|k| report.served(*k)).sum::<u32>(),
            report.customers_served
        );
        assert_eq!(report.log_lines as usize, sink.lines().len());
    }

    #[tokio::test]
    async fn failed_actor_aborts_the_run() {
        struct Broken;

        #[async_trait::async_trait]
        impl OfficeActor for Broken {
            const ROLE: crate::model::Role = crate::model::Role::Clerk;
            type Outcome = ClerkOutcome;

            fn id(&self) -> u32 {
                99
            }

            async fn run(self, _office: Arc<Office>) -> Result<ClerkOutcome, OfficeError> {
                Err(OfficeError::SignalClosed("test"))
            }
        }

        let mut system = PostOffice::open(SimConfig::new(0, 0, 0, 0, 0).unwrap(), MemorySink::new()).unwrap();
        system.launch(Broken);
        let office = Arc::clone(system.office());

        assert!(matches!(system.shutdown().await, Err(OfficeError::SignalClosed("test"))));
        assert!(!office.is_open());
    }
}
