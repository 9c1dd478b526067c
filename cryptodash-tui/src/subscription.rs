//! Terminal event subscription.
//!
//! A reader thread forwards key, mouse and resize events into the event
//! loop. The subscription is released on [`EventSubscription::cancel`] or
//! on drop, whichever comes first; once either returns no further events
//! are sent.

use crate::events::TuiEvent;
use crossterm::event::{self, Event as CrosstermEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct EventSubscription {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl EventSubscription {
    pub fn spawn(sender: mpsc::Sender<TuiEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = std::thread::spawn(move || {
            while !flag.load(Ordering::Acquire) {
                let ready = match event::poll(POLL_INTERVAL) {
                    Ok(ready) => ready,
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal poll failed");
                        break;
                    }
                };
                if !ready {
                    continue;
                }
                let forwarded = match event::read() {
                    Ok(CrosstermEvent::Key(key)) => Some(TuiEvent::Input(key)),
                    Ok(CrosstermEvent::Mouse(mouse)) => Some(TuiEvent::Mouse(mouse)),
                    Ok(CrosstermEvent::Resize(width, height)) => {
                        Some(TuiEvent::Resize { width, height })
                    }
                    Ok(_) => None,
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal read failed");
                        None
                    }
                };
                if let Some(event) = forwarded {
                    // Re-check so nothing is delivered after cancel.
                    if flag.load(Ordering::Acquire) || sender.blocking_send(event).is_err() {
                        break;
                    }
                }
            }
            tracing::debug!("event subscription closed");
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }

    /// Stops the reader thread and waits for it to exit.
    pub fn cancel(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::error!("event reader thread panicked");
            }
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    #[test]
    fn cancel_releases_reader_and_sender() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut subscription = EventSubscription::spawn(tx);
        assert!(subscription.is_active());

        subscription.cancel();
        assert!(!subscription.is_active());
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));

        // A second cancel and the final drop are both no-ops.
        subscription.cancel();
        drop(subscription);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }

    #[test]
    fn drop_releases_reader() {
        let (tx, mut rx) = mpsc::channel(8);
        let subscription = EventSubscription::spawn(tx);
        drop(subscription);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Disconnected)));
    }
}
