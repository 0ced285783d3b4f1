use crate::error::Result;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

/// Output of a background fetch, tagged with the generation it was issued for
#[derive(Debug)]
pub struct Completed<T> {
    pub generation: u64,
    pub output: T,
}

/// Runs blocking fetches on background threads and hands results back to the UI thread
pub struct FetchRunner<T> {
    name: &'static str,
    tx: Sender<Completed<T>>,
    rx: Receiver<Completed<T>>,
    handles: Vec<JoinHandle<()>>,
    /// Dispatched jobs whose result has not been handed out by `poll`
    pending: usize,
}

impl<T: Send + 'static> FetchRunner<T> {
    pub fn new(name: &'static str) -> Self {
        let (tx, rx) = channel();
        Self {
            name,
            tx,
            rx,
            handles: Vec::new(),
            pending: 0,
        }
    }

    /// Start `job` in background thread
    pub fn dispatch<F>(&mut self, generation: u64, job: F) -> Result<()>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let tx = self.tx.clone();
        let handle = thread::Builder::new()
            .name(format!("{}-{}", self.name, generation))
            .spawn(move || {
                let output = job();
                // Receiver is gone when the app is shutting down
                let _ = tx.send(Completed { generation, output });
            })?;
        self.handles.push(handle);
        self.pending += 1;
        Ok(())
    }

    /// Collect finished fetches (non-blocking)
    pub fn poll(&mut self) -> Vec<Completed<T>> {
        let mut done: Vec<_> = self.rx.try_iter().collect();
        self.handles.retain(|h| !h.is_finished());
        // A finished thread has already sent its result
        done.extend(self.rx.try_iter());
        self.pending = if self.handles.is_empty() {
            // Anything still unaccounted for died with a panicked job
            0
        } else {
            self.pending.saturating_sub(done.len())
        };
        done
    }

    /// True while a dispatched job has not been collected through `poll`,
    /// including results already waiting in the channel
    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }
}
