//! Single-shot completion handle
//!
//! A [`Completion`] is the receiving half of a one-slot channel whose sending
//! half lives on a spawned thread. The thread sends exactly one value and then
//! drops the sender, closing the channel. Receiving consumes the handle, so a
//! second receive cannot be expressed.

use std::fmt;
use std::io;
use std::panic;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

/// Task and its result channel, taken by whichever side ends up running it
type Job<F, T> = Mutex<Option<(F, SyncSender<T>)>>;

/// Result of an operation running on another thread
pub struct Completion<T> {
    rx: Receiver<T>,
    handle: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Completion<T> {
    /// Run `task` on a new thread and return a handle to its result
    ///
    /// If the OS refuses to create a thread, `task` runs on the calling
    /// thread before this returns; its result is still delivered through the
    /// handle, but a panic in `task` then unwinds through the caller.
    pub fn spawn<F>(task: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::spawn_with(task, |job| {
            thread::Builder::new()
                .name("resource-mock-io".to_string())
                .spawn(job)
        })
    }

    fn spawn_with<F, S>(task: F, spawner: S) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
        S: FnOnce(Box<dyn FnOnce() + Send + 'static>) -> io::Result<JoinHandle<()>>,
    {
        let (tx, rx) = mpsc::sync_channel(1);
        let job: Arc<Job<F, T>> = Arc::new(Mutex::new(Some((task, tx))));
        let thread_job = Arc::clone(&job);

        match spawner(Box::new(move || run_job(&thread_job))) {
            Ok(handle) => Self {
                rx,
                handle: Some(handle),
            },
            Err(e) => {
                tracing::warn!(error = %e, "could not spawn completion thread, running inline");
                run_job(&job);
                Self { rx, handle: None }
            }
        }
    }
}

fn run_job<F, T>(job: &Job<F, T>)
where
    F: FnOnce() -> T,
{
    let taken = job.lock().unwrap_or_else(PoisonError::into_inner).take();
    if let Some((task, tx)) = taken {
        // The waiter may have dropped its handle; the result is discarded then.
        let _ = tx.send(task());
    }
}

impl<T> Completion<T> {
    /// Block until the result is available
    ///
    /// If the task panicked, the panic is resumed on the calling thread.
    pub fn wait(mut self) -> T {
        match self.rx.recv() {
            Ok(value) => value,
            Err(_) => self.resume_task_panic(),
        }
    }

    /// Take the result if it is already available, otherwise hand the
    /// completion back
    pub fn try_wait(mut self) -> Result<T, Self> {
        match self.rx.try_recv() {
            Ok(value) => Ok(value),
            Err(TryRecvError::Empty) => Err(self),
            Err(TryRecvError::Disconnected) => self.resume_task_panic(),
        }
    }

    /// Whether the task has returned (its value may still be unread)
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    fn resume_task_panic(&mut self) -> ! {
        // The sender only goes away without sending when the task unwinds.
        if let Some(handle) = self.handle.take() {
            if let Err(payload) = handle.join() {
                panic::resume_unwind(payload);
            }
        }
        unreachable!("completion channel closed without a value")
    }
}

impl<T> fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("finished", &self.is_finished())
            .finish()
    }
}
