//! The motion integrator loop.
//!
//! Physics steps at the configured tick rate; observers are notified at a
//! lower, throttled cadence derived by integer division of tick counts, so
//! render cost stays bounded independent of physics fidelity. The loop is a
//! single tokio task; stopping it releases the scheduler registration so no
//! further steps fire after teardown.

use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::garden::perf::TickStats;
use crate::garden::population::SharedPopulation;
use crate::garden::record::AgentRecord;

/// Drives the per-frame update over the shared population
pub struct Integrator {
    population: SharedPopulation,
    config: EngineConfig,
    running: Arc<AtomicBool>,
    /// Sim clock epoch, set when the loop first starts
    epoch: Arc<RwLock<Option<Instant>>>,
    handle: Option<JoinHandle<()>>,
}

impl Integrator {
    pub fn new(population: SharedPopulation, config: EngineConfig) -> Self {
        Self {
            population,
            config,
            running: Arc::new(AtomicBool::new(false)),
            epoch: Arc::new(RwLock::new(None)),
            handle: None,
        }
    }

    pub fn population(&self) -> SharedPopulation {
        self.population.clone()
    }

    /// Milliseconds since the loop first started; 0.0 before that.
    /// This is the time base every agent timestamp is expressed in.
    pub fn now_ms(&self) -> f64 {
        match *self.epoch.read() {
            Some(epoch) => epoch.elapsed().as_secs_f64() * 1000.0,
            None => 0.0,
        }
    }

    /// Begin the frame loop. `on_frame` is invoked at the throttled notify
    /// rate, not every physics step. Fails if the loop is already running.
    pub fn start<F>(&mut self, on_frame: F) -> Result<(), EngineError>
    where
        F: Fn() + Send + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(EngineError::AlreadyRunning);
        }

        let population = self.population.clone();
        let running = self.running.clone();
        let config = self.config.clone();
        let epoch_slot = self.epoch.clone();

        let handle = tokio::spawn(async move {
            let epoch = Instant::now();
            *epoch_slot.write() = Some(epoch);

            let tick_duration = Duration::from_secs_f64(1.0 / config.tick_rate as f64);
            let mut ticker = interval(tick_duration);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            let notify_every = config.notify_divisor();
            let mut stats = TickStats::new(config.tick_rate);
            let mut last_step = Instant::now();
            let mut tick: u64 = 0;

            tracing::info!(
                tick_rate = config.tick_rate,
                notify_rate = config.notify_rate,
                "integrator loop started"
            );

            while running.load(Ordering::SeqCst) {
                ticker.tick().await;

                let step_start = Instant::now();
                // Cap the delta so a stalled host cannot destabilize motion
                let dt_ms =
                    ((step_start - last_step).as_secs_f64() * 1000.0).min(config.max_frame_delta_ms);
                last_step = step_start;
                let now_ms = (step_start - epoch).as_secs_f64() * 1000.0;

                let agent_count = {
                    let mut pop = population.write();
                    pop.step_all(dt_ms, now_ms);
                    pop.len()
                };

                tick += 1;
                if tick % notify_every == 0 {
                    on_frame();
                }

                stats.record(step_start.elapsed(), agent_count);
            }

            tracing::info!(ticks = tick, "integrator loop stopped");
        });

        self.handle = Some(handle);
        Ok(())
    }

    /// Cancel the loop. Idempotent; safe to call on an already-stopped
    /// integrator. Guarantees no further steps fire once it returns.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Replace the record list; a full atomic re-seed of the population
    pub fn set_records(&self, records: Vec<AgentRecord>) {
        let now = self.now_ms();
        self.population.write().set_records(records, now);
    }

    /// Toggle hover-freeze for one agent; no-op if the id is unknown
    pub fn set_frozen(&self, id: &str, frozen: bool) {
        self.population.write().set_frozen(id, frozen);
    }

    /// Pointer-enter hook: freeze the agent and surface its label for the
    /// tooltip overlay. Returns `None` for unknown ids.
    pub fn hover_start(&self, id: &str) -> Option<String> {
        let mut pop = self.population.write();
        if pop.set_frozen(id, true) {
            pop.get(id).map(|b| b.label())
        } else {
            None
        }
    }

    /// Pointer-leave hook: thaw the agent
    pub fn hover_end(&self, id: &str) {
        self.population.write().set_frozen(id, false);
    }
}

impl Drop for Integrator {
    fn drop(&mut self) {
        self.stop();
    }
}
