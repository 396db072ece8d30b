//! Shutdown coordination.

use tokio::sync::watch;

/// Coordinator for stopping the accept loop.
///
/// Hands out watch receivers; flipping the value tells every subscriber to
/// wind down. Handlers themselves are detached and finish their one request
/// regardless.
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Fire the signal. Safe to call more than once.
    pub fn trigger(&self) {
        let _ = self.tx.send(true);
    }

    /// Trigger on Ctrl+C. Intended to be spawned alongside the dispatcher.
    pub async fn listen_for_ctrl_c(self) {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, shutting down");
            self.trigger();
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
