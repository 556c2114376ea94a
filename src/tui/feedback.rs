// Copy feedback timer
//
// Every successful copy schedules one reset. The reset travels back to the
// event loop as the ticket it was issued for; the guide state ignores any
// ticket that is not the latest, so superseded timers need no cancellation.

use crate::guide::FeedbackTicket;
use std::time::Duration;
use tokio::sync::mpsc;

/// Schedules delayed copy-feedback resets
#[derive(Clone)]
pub struct FeedbackTimer {
    delay: Duration,
    tx: mpsc::UnboundedSender<FeedbackTicket>,
}

impl FeedbackTimer {
    /// Create a timer and the receiver the event loop listens on
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<FeedbackTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { delay, tx }, rx)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Deliver `ticket` after the configured delay
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, ticket: FeedbackTicket) {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the UI already shut down
            let _ = tx.send(ticket);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::GuideState;

    #[tokio::test(start_paused = true)]
    async fn ticket_arrives_after_delay() {
        let (timer, mut rx) = FeedbackTimer::new(Duration::from_millis(2000));
        let mut state = GuideState::new();
        let ticket = state.begin_copy_feedback();
        timer.schedule(ticket);

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(rx.try_recv().is_err());

        let received = rx.recv().await.unwrap();
        assert_eq!(received, ticket);
        assert!(state.end_copy_feedback(received));
        assert!(!state.copy_feedback_shown());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_copies_keep_flag_until_last_delay() {
        let (timer, mut rx) = FeedbackTimer::new(Duration::from_millis(2000));
        let mut state = GuideState::new();

        let first = state.begin_copy_feedback();
        timer.schedule(first);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let second = state.begin_copy_feedback();
        timer.schedule(second);

        // First reset fires at t=2000 and is ignored
        let stale = rx.recv().await.unwrap();
        assert_eq!(stale, first);
        assert!(!state.end_copy_feedback(stale));
        assert!(state.copy_feedback_shown());

        // Second reset fires at t=3500 and clears
        let latest = rx.recv().await.unwrap();
        assert_eq!(latest, second);
        assert!(state.end_copy_feedback(latest));
        assert!(!state.copy_feedback_shown());
    }
}
