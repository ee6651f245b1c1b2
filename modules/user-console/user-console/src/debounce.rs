//! Timer-based coalescing of rapid input.
//!
//! Every pushed value restarts the quiet window; once the window elapses
//! without new input the latest value fires, unless it equals the value that
//! fired last time.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;

/// Trailing-edge debounce state with duplicate suppression.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<T>,
    deadline: Option<Instant>,
    last_fired: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
            deadline: None,
            last_fired: None,
        }
    }

    /// Record `value` as the latest input and restart the window at `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some(value);
        self.deadline = Some(now + self.window);
    }

    /// When the pending value settles, if one is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Release the pending value if the window has elapsed at `now` and the
    /// value differs from the last one released.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        let value = self.pending.take()?;
        if self.last_fired.as_ref() == Some(&value) {
            tracing::trace!("Settled value unchanged; suppressed");
            return None;
        }
        self.last_fired = Some(value.clone());
        Some(value)
    }
}

/// Drive a `Debouncer` from `input` on a background task.
///
/// Settled values arrive on the returned receiver. The task ends when
/// `input` closes (an unsettled value is dropped) or the receiver is dropped.
#[must_use]
pub fn spawn_debounced<T>(window: Duration, mut input: mpsc::Receiver<T>) -> mpsc::Receiver<T>
where
    T: Clone + PartialEq + Send + 'static,
{
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut debouncer = Debouncer::new(window);
        loop {
            let event = match debouncer.deadline() {
                Some(deadline) => tokio::select! {
                    value = input.recv() => Some(value),
                    () = tokio::time::sleep_until(deadline) => None,
                },
                None => Some(input.recv().await),
            };

            match event {
                Some(Some(value)) => debouncer.push(value, Instant::now()),
                Some(None) => break,
                None => {
                    if let Some(settled) = debouncer.poll(Instant::now())
                        && tx.send(settled).await.is_err()
                    {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Debounce task finished");
    });

    rx
}
