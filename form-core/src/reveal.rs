use std::sync::{Arc, Mutex, PoisonError};

/// Displays a message to the user, e.g. as a modal alert.
///
/// Implementations must not fail and must not block the caller for longer
/// than it takes to hand the message off.
pub trait Reveal: Send + Sync {
    fn reveal(
        &self,
        message: &str,
    );
}

impl<F> Reveal for F
where
    F: Fn(&str) + Send + Sync,
{
    fn reveal(
        &self,
        message: &str,
    ) {
        self(message)
    }
}

/// A [`Reveal`] that keeps every message it receives.
///
/// Clones share the same log, so a caller can hand one clone to the
/// controller and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RevealLog(Arc<Mutex<Vec<String>>>);

impl RevealLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self) -> Option<String> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Reveal for RevealLog {
    fn reveal(
        &self,
        message: &str,
    ) {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
