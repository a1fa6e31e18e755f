//! Fixed-Cadence Scheduler
//!
//! Runs an async callback once per period until stopped.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error};

// == Scheduler ==
/// Handle to a running fixed-cadence job.
///
/// The first invocation happens one full period after [`Scheduler::start`].
/// Every invocation runs on its own task, so a panicking callback is logged
/// and the next tick still fires. Dropping the handle without calling
/// [`Scheduler::stop`] also ends the loop.
#[derive(Debug)]
pub struct Scheduler {
    period: Duration,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
}

impl Scheduler {
    // == Start ==
    /// Spawns the scheduling loop.
    ///
    /// # Arguments
    /// * `period` - Time between invocations
    /// * `callback` - Produces the future to run on each tick
    pub fn start<F, Fut>(period: Duration, callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (shutdown, mut shutdown_rx) = oneshot::channel::<()>();
        let callback = Arc::new(callback);

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut in_flight = JoinSet::new();

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        debug!("Scheduler tick, {} invocations in flight", in_flight.len());
                        // Invoke inside the task: a panic while building the future stays off the loop.
                        let callback = Arc::clone(&callback);
                        in_flight.spawn(async move { callback().await });
                    }
                    Some(result) = in_flight.join_next() => {
                        if let Err(err) = result {
                            if err.is_panic() {
                                error!("Scheduled job panicked: {}", err);
                            }
                        }
                    }
                }
            }

            in_flight.shutdown().await;
            debug!("Scheduler loop stopped");
        });

        Self {
            period,
            shutdown: Some(shutdown),
            handle,
        }
    }

    /// Time between invocations.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true while the scheduling loop is alive.
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    // == Stop ==
    /// Stops the loop, aborts in-flight invocations and waits for the loop to end.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Err(err) = (&mut self.handle).await {
            error!("Scheduler loop ended abnormally: {}", err);
        }
    }
}
