//! Screen-Scoped Background Tasks
//!
//! egui redraws on the UI thread, so async work runs on the tokio runtime
//! and hands its result back over a channel that the view polls each frame.
//! A [`ScopedTask`] aborts its future when dropped: the screen state that
//! owns it goes away on navigation, and the work goes with it.

use std::future::Future;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Result of polling a [`ScopedTask`]
#[derive(Debug, PartialEq, Eq)]
pub enum Poll<T> {
    /// Still running
    Pending,
    /// Finished with this value
    Ready(T),
    /// The task ended without producing a value (aborted or panicked)
    Lost,
}

/// Background task tied to the lifetime of its owner
#[derive(Debug)]
pub struct ScopedTask<T> {
    name: &'static str,
    handle: JoinHandle<()>,
    result: Receiver<T>,
}

impl<T: Send + 'static> ScopedTask<T> {
    /// Spawn `future` on `runtime`
    pub fn spawn<F>(runtime: &Handle, name: &'static str, future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = channel();
        let handle = runtime.spawn(async move {
            let value = future.await;
            // The owner may already be gone
            let _ = tx.send(value);
        });
        Self {
            name,
            handle,
            result: rx,
        }
    }

    /// Non-blocking check for the result
    pub fn poll(&self) -> Poll<T> {
        match self.result.try_recv() {
            Ok(value) => Poll::Ready(value),
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Disconnected) => Poll::Lost,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Drop for ScopedTask<T> {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(task = self.name, "Aborting background task");
            self.handle.abort();
        }
    }
}
