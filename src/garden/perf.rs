//! Tick duration tracking.
//!
//! Keeps a rolling window of physics step durations so a long-running
//! garden can report whether it stays inside its frame budget.

use std::collections::VecDeque;
use std::time::Duration;

/// Rolling window of recent step durations
pub struct TickStats {
    durations: VecDeque<Duration>,
    max_samples: usize,
    /// Budget for one physics step
    target: Duration,
    /// Steps recorded since the last periodic report
    since_report: u64,
    /// How many steps between periodic debug reports
    report_every: u64,
}

impl TickStats {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            durations: VecDeque::with_capacity(120),
            max_samples: 120,
            target: Duration::from_secs_f64(1.0 / tick_rate.max(1) as f64),
            since_report: 0,
            // One report per ~5 seconds of simulation
            report_every: tick_rate as u64 * 5,
        }
    }

    /// Record one step and emit a periodic debug report
    pub fn record(&mut self, duration: Duration, agent_count: usize) {
        if self.durations.len() == self.max_samples {
            self.durations.pop_front();
        }
        self.durations.push_back(duration);

        self.since_report += 1;
        if self.since_report >= self.report_every {
            self.since_report = 0;
            if self.within_budget() {
                tracing::debug!(
                    agents = agent_count,
                    avg_us = self.average().as_micros() as u64,
                    worst_us = self.worst().as_micros() as u64,
                    budget_us = self.target.as_micros() as u64,
                    "tick stats"
                );
            } else {
                tracing::warn!(
                    agents = agent_count,
                    avg_us = self.average().as_micros() as u64,
                    worst_us = self.worst().as_micros() as u64,
                    budget_us = self.target.as_micros() as u64,
                    "ticks exceeding step budget"
                );
            }
        }
    }

    pub fn average(&self) -> Duration {
        if self.durations.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.durations.iter().sum();
        total / self.durations.len() as u32
    }

    pub fn worst(&self) -> Duration {
        self.durations.iter().max().copied().unwrap_or(Duration::ZERO)
    }

    /// True while the average stays inside the step budget
    pub fn within_budget(&self) -> bool {
        self.average() <= self.target
    }
}
