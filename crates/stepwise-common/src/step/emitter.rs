//! The step emitter: the single suspension point of every engine.

use std::time::Duration;

use super::{CancellationToken, Step};

/// Marker returned by [`StepEmitter::emit`] once cancellation is observed.
///
/// Engines propagate it with `?`; it converts into
/// [`Error::Aborted`](crate::utils::error::Error::Aborted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

/// Receives step observations.
///
/// Implemented for closures taking `&Step`, for `Vec<Step>` (records every
/// step), and for [`StepLog`](super::StepLog).
pub trait Observer {
    /// Called once per emitted step, in emission order.
    fn observe(&mut self, step: &Step);
}

impl<F> Observer for F
where
    F: FnMut(&Step),
{
    fn observe(&mut self, step: &Step) {
        self(step);
    }
}

impl Observer for Vec<Step> {
    fn observe(&mut self, step: &Step) {
        self.push(step.clone());
    }
}

/// Delivers steps from an engine to its observers.
///
/// Each call to [`emit`](Self::emit) is a suspension point: the emitter
/// checks the cancellation token, forwards the step to every observer in
/// registration order, sleeps for the configured delay, and checks the token
/// again. With no observers and no delay, `emit` only counts.
pub struct StepEmitter<'a> {
    observers: Vec<&'a mut dyn Observer>,
    delay: Duration,
    cancellation: Option<CancellationToken>,
    emitted: u64,
}

impl<'a> StepEmitter<'a> {
    /// Creates an emitter with no observers, no delay, and no token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
            delay: Duration::ZERO,
            cancellation: None,
            emitted: 0,
        }
    }

    /// Registers an observer.
    #[must_use]
    pub fn with_observer(mut self, observer: &'a mut dyn Observer) -> Self {
        self.observers.push(observer);
        self
    }

    /// Registers an observer on an existing emitter.
    pub fn add_observer(&mut self, observer: &'a mut dyn Observer) {
        self.observers.push(observer);
    }

    /// Sets the pause taken after every step.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Reports one step.
    ///
    /// # Errors
    ///
    /// Returns [`Aborted`] if cancellation was requested before the step
    /// (the step is then not delivered) or during the pause after it.
    pub fn emit(&mut self, step: Step) -> Result<(), Aborted> {
        if self.is_cancelled() {
            return Err(Aborted);
        }

        for observer in &mut self.observers {
            observer.observe(&step);
        }
        self.emitted += 1;

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
            if self.is_cancelled() {
                return Err(Aborted);
            }
        }
        Ok(())
    }

    /// Number of steps delivered so far.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Returns whether the attached token has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }
}

impl Default for StepEmitter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn compare(i: usize) -> Step {
        Step::Compare {
            left: i,
            right: i + 1,
        }
    }

    #[test]
    fn test_emit_without_observers_is_noop() {
        let mut emitter = StepEmitter::new();
        assert!(emitter.emit(compare(0)).is_ok());
        assert!(emitter.emit(compare(1)).is_ok());
        assert_eq!(emitter.emitted(), 2);
    }

    #[test]
    fn test_observers_see_steps_in_order() {
        let mut first: Vec<Step> = Vec::new();
        let mut seen = Vec::new();
        let mut second = |step: &Step| {
            if let Step::Compare { left, .. } = step {
                seen.push(*left);
            }
        };
        {
            let mut emitter = StepEmitter::new()
                .with_observer(&mut first)
                .with_observer(&mut second);
            for i in 0..3 {
                emitter.emit(compare(i)).unwrap();
            }
        }
        assert_eq!(first, vec![compare(0), compare(1), compare(2)]);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_cancelled_token_blocks_delivery() {
        let token = CancellationToken::new();
        let mut log: Vec<Step> = Vec::new();
        {
            let mut emitter = StepEmitter::new()
                .with_observer(&mut log)
                .with_cancellation(token.clone());
            emitter.emit(compare(0)).unwrap();
            token.cancel();
            assert_eq!(emitter.emit(compare(1)), Err(Aborted));
            assert_eq!(emitter.emit(compare(2)), Err(Aborted));
            assert_eq!(emitter.emitted(), 1);
        }
        assert_eq!(log, vec![compare(0)]);
    }

    #[test]
    fn test_delay_paces_emission() {
        let mut emitter = StepEmitter::new().with_delay(Duration::from_millis(5));
        let start = Instant::now();
        for i in 0..3 {
            emitter.emit(compare(i)).unwrap();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_cancel_during_pause_is_seen_after_delivery() {
        let token = CancellationToken::new();
        let remote = token.clone();
        let mut log: Vec<Step> = Vec::new();
        let result = {
            let mut emitter = StepEmitter::new()
                .with_observer(&mut log)
                .with_delay(Duration::from_millis(50))
                .with_cancellation(token);
            let handle = std::thread::spawn(move || {
                std::thread::sleep(Duration::from_millis(5));
                remote.cancel();
            });
            let result = emitter.emit(compare(0));
            handle.join().unwrap();
            result
        };
        assert_eq!(result, Err(Aborted));
        assert_eq!(log.len(), 1);
    }
}
