//! A shareable step recorder.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Observer, Step};

/// Records steps behind a shared lock.
///
/// Unlike a plain `Vec<Step>` observer, a `StepLog` can be cloned, handed to
/// an emitter, and read from another handle (or thread) while the engine is
/// still running.
#[derive(Debug, Clone, Default)]
pub struct StepLog {
    steps: Arc<Mutex<Vec<Step>>>,
}

impl StepLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.lock().len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.lock().is_empty()
    }

    /// Copies out the recorded steps.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Step> {
        self.steps.lock().clone()
    }

    /// Takes the recorded steps, leaving the log empty.
    pub fn drain(&self) -> Vec<Step> {
        std::mem::take(&mut *self.steps.lock())
    }
}

impl Observer for StepLog {
    fn observe(&mut self, step: &Step) {
        self.steps.lock().push(step.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepEmitter;

    #[test]
    fn test_log_shared_between_clones() {
        let log = StepLog::new();
        let mut writer = log.clone();
        {
            let mut emitter = StepEmitter::new().with_observer(&mut writer);
            emitter.emit(Step::Swap { left: 0, right: 1 }).unwrap();
            assert_eq!(log.len(), 1);
        }
        assert_eq!(log.snapshot(), vec![Step::Swap { left: 0, right: 1 }]);
        assert_eq!(log.drain().len(), 1);
        assert!(log.is_empty());
    }
}
