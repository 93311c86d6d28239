//! Run configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;
use stepwise_common::step::{CancellationToken, Observer, StepEmitter};
use stepwise_common::utils::error::{Error, Result};

/// Heuristic used by A*.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// `|node - goal|` over node ids (default).
    #[default]
    IndexDistance,
    /// Always zero; A* then explores like Dijkstra and stays optimal.
    Zero,
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexDistance => write!(f, "index"),
            Self::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "index" | "index-distance" | "index_distance" => Ok(Self::IndexDistance),
            "zero" | "none" | "dijkstra" => Ok(Self::Zero),
            _ => Err(Error::InvalidInput(format!("unknown heuristic: {s}"))),
        }
    }
}

/// Options for one algorithm run.
///
/// The defaults describe a pure, unpaced computation: no delay between steps,
/// no cancellation, and the index-distance heuristic for A*.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Pause taken after each step (zero disables pacing).
    pub step_delay: Duration,

    /// Token checked at every step.
    pub cancellation: Option<CancellationToken>,

    /// A* heuristic.
    pub heuristic: Heuristic,
}

impl RunOptions {
    /// Options pausing `delay_ms` milliseconds after every step.
    #[must_use]
    pub fn paced(delay_ms: u64) -> Self {
        Self::default().with_step_delay_ms(delay_ms)
    }

    /// Sets the per-step pause in milliseconds.
    #[must_use]
    pub fn with_step_delay_ms(mut self, delay_ms: u64) -> Self {
        self.step_delay = Duration::from_millis(delay_ms);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Sets the A* heuristic.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Returns whether steps are paced.
    #[must_use]
    pub fn is_paced(&self) -> bool {
        !self.step_delay.is_zero()
    }

    /// Builds an emitter delivering to `observer` with these options.
    pub(crate) fn emitter<'a>(&self, observer: &'a mut dyn Observer) -> StepEmitter<'a> {
        let emitter = StepEmitter::new()
            .with_observer(observer)
            .with_delay(self.step_delay);
        match &self.cancellation {
            Some(token) => emitter.with_cancellation(token.clone()),
            None => emitter,
        }
    }
}
