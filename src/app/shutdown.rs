//! Cancellation sources and graceful shutdown.
//!
//! A run is cancelled either by Ctrl-C or by an optional batch deadline. Both
//! fire the same `CancellationToken`; the mapper then returns what it has.

use std::time::Duration;

use log::{info, warn};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` when the process receives Ctrl-C.
///
/// The watcher exits on its own once the token is cancelled elsewhere.
pub fn spawn_interrupt_watcher(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => {
                    warn!("Interrupt received, returning the URLs fixed so far");
                    cancel.cancel();
                }
                Err(e) => warn!("Failed to listen for interrupt: {e}"),
            },
            _ = cancel.cancelled() => {}
        }
    })
}

/// Cancels `cancel` once `deadline` has elapsed.
///
/// Returns `None` when no deadline is set.
pub fn spawn_batch_deadline(
    cancel: CancellationToken,
    deadline: Option<Duration>,
) -> Option<JoinHandle<()>> {
    let deadline = deadline?;
    Some(tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(deadline) => {
                info!("Batch deadline of {:.1}s reached", deadline.as_secs_f64());
                cancel.cancel();
            }
            _ = cancel.cancelled() => {}
        }
    }))
}

/// Stops the cancellation watchers and waits for them to exit.
pub async fn shutdown_gracefully(cancel: CancellationToken, watchers: Vec<JoinHandle<()>>) {
    cancel.cancel();
    for watcher in watchers {
        let _ = watcher.await;
    }
}
