use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Re-emit a watch value only after `window` of silence since the last
/// change. The returned receiver starts with the input's current value.
///
/// Must be called from within a Tokio runtime context. The task ends when
/// the input sender is dropped, flushing any pending value first.
pub fn debounce<T>(
    mut input: watch::Receiver<T>,
    window: Duration,
) -> (watch::Receiver<T>, JoinHandle<()>)
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let initial = input.borrow().clone();
    let (tx, rx) = watch::channel(initial);

    let task = tokio::spawn(async move {
        loop {
            if input.changed().await.is_err() {
                break;
            }
            let mut pending = input.borrow_and_update().clone();

            // Quiescence window: restart the timer on every further change.
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(window) => {
                        tx.send_replace(pending);
                        break;
                    }
                    changed = input.changed() => {
                        if changed.is_err() {
                            tx.send_replace(pending);
                            return;
                        }
                        pending = input.borrow_and_update().clone();
                    }
                }
            }
        }
    });

    (rx, task)
}
