//! # Simulator Service
//!
//! The long-running task that owns the synthesizer, the firing schedule
//! and the random generator. It waits on whichever comes first: the
//! pending timer fire, or a manual trigger sent through a
//! [`SimulatorHandle`]. Either way it runs one synthesis and immediately
//! schedules the next, so the stream of orders never stalls on a failed
//! run and never doubles up after a manual one.
//!
//! The service stops when every handle has been dropped, mirroring how
//! the storefront actors shut down.

use crate::config::SimulatorConfig;
use crate::model::OrderId;
use crate::sim::error::{SynthesisError, TriggerError};
use crate::sim::schedule::{next_fire_delay, FireSchedule};
use crate::sim::synthesizer::Synthesizer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{mpsc, oneshot};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum SimulatorMessage {
    /// Run one synthesis now and report how it went.
    TriggerNow {
        respond_to: oneshot::Sender<Result<OrderId, SynthesisError>>,
    },
}

/// Cloneable handle for talking to a running [`SimulatorService`].
#[derive(Clone)]
pub struct SimulatorHandle {
    sender: mpsc::Sender<SimulatorMessage>,
}

impl SimulatorHandle {
    /// Runs one synthesis immediately and waits for its outcome.
    ///
    /// The pending timer fire is superseded, not stacked: after a manual
    /// trigger the next periodic run is rescheduled from now.
    pub async fn trigger_now(&self) -> Result<OrderId, TriggerError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SimulatorMessage::TriggerNow { respond_to })
            .await
            .map_err(|_| TriggerError::ServiceStopped)?;
        let result = response
            .await
            .map_err(|_| TriggerError::ServiceStopped)?;
        Ok(result?)
    }
}

pub struct SimulatorService {
    config: SimulatorConfig,
    synthesizer: Synthesizer,
    schedule: FireSchedule,
    rng: StdRng,
    receiver: mpsc::Receiver<SimulatorMessage>,
}

impl SimulatorService {
    pub fn new(config: SimulatorConfig, synthesizer: Synthesizer) -> (Self, SimulatorHandle) {
        Self::with_rng(config, synthesizer, StdRng::from_entropy())
    }

    /// Like [`new`](Self::new) but with an explicit generator, so tests
    /// replay a fixed decision sequence.
    pub fn with_rng(
        config: SimulatorConfig,
        synthesizer: Synthesizer,
        rng: StdRng,
    ) -> (Self, SimulatorHandle) {
        let (sender, receiver) = mpsc::channel(8);
        let service = Self {
            config,
            synthesizer,
            schedule: FireSchedule::new(),
            rng,
            receiver,
        };
        (service, SimulatorHandle { sender })
    }

    /// Runs until every [`SimulatorHandle`] has been dropped.
    pub async fn run(mut self) {
        if let Some(delay) = next_fire_delay(&self.config, &mut self.rng) {
            self.schedule.maybe_arm(delay);
            info!(seconds = delay.as_secs(), "First synthesis scheduled");
        } else {
            info!("Periodic synthesis disabled, manual triggers only");
        }

        loop {
            let pending = self.schedule.is_pending();
            let fire_at = self.schedule.fire_at().unwrap_or_else(Instant::now);

            tokio::select! {
                maybe_message = self.receiver.recv() => match maybe_message {
                    Some(SimulatorMessage::TriggerNow { respond_to }) => {
                        let result = self.run_once().await;
                        let _ = respond_to.send(result);
                    }
                    None => break,
                },
                _ = sleep_until(fire_at), if pending => {
                    self.schedule.clear();
                    if let Err(error) = self.run_once().await {
                        warn!(%error, "Scheduled synthesis failed");
                    }
                }
            }
        }

        debug!("Simulator service stopped");
    }

    /// One synthesis run. The next fire is armed afterwards no matter how
    /// this run went, replacing any pending fire.
    async fn run_once(&mut self) -> Result<OrderId, SynthesisError> {
        let result = self.synthesizer.synthesize_order(&mut self.rng).await;
        if let Some(delay) = next_fire_delay(&self.config, &mut self.rng) {
            self.schedule.arm(delay);
            debug!(seconds = delay.as_secs(), "Next synthesis scheduled");
        }
        result
    }
}
