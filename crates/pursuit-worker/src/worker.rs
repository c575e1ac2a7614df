//! A path context hosted on a dedicated thread.
//!
//! The worker owns its [`PathService`] exclusively. Requests travel over
//! an `mpsc` channel and are handled one at a time in arrival order; each
//! produces exactly one response on the reply channel. There is no
//! cancellation: a request that has been posted always runs to completion.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, warn};

use crate::config::WorkerConfig;
use crate::error::{Result, WorkerError};
use crate::protocol::{Request, Response};
use crate::service::PathService;
use crate::transport::Transport;

/// Handle to a path worker thread.
///
/// Dropping the handle closes the request channel and joins the thread
/// once it has finished the request in progress.
#[derive(Debug)]
pub struct PathWorker {
    tx: Option<Sender<Request>>,
    rx: Receiver<Response>,
    handle: Option<JoinHandle<()>>,
}

impl PathWorker {
    /// Start a worker with the default configuration.
    pub fn spawn() -> Result<Self> {
        Self::spawn_with(WorkerConfig::default())
    }

    /// Start a worker thread running a fresh, uninitialized service.
    pub fn spawn_with(config: WorkerConfig) -> Result<Self> {
        let (req_tx, req_rx) = mpsc::channel::<Request>();
        let (resp_tx, resp_rx) = mpsc::channel::<Response>();
        let name = config.thread_name.clone();
        let service = PathService::with_config(config);

        let handle = thread::Builder::new()
            .name(name)
            .spawn(move || run(service, req_rx, resp_tx))
            .map_err(WorkerError::Spawn)?;

        Ok(Self {
            tx: Some(req_tx),
            rx: resp_rx,
            handle: Some(handle),
        })
    }

    /// Block until the next response arrives or `timeout` elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Response> {
        self.rx.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => WorkerError::Timeout,
            RecvTimeoutError::Disconnected => WorkerError::Disconnected,
        })
    }

    /// Close the request channel and wait for the thread to exit.
    ///
    /// Requests already posted are still processed first.
    pub fn shutdown(mut self) -> Result<()> {
        self.tx.take();
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| WorkerError::Panicked),
            None => Ok(()),
        }
    }
}

impl Transport for PathWorker {
    fn post(&mut self, request: Request) -> Result<()> {
        let tx = self.tx.as_ref().ok_or(WorkerError::Disconnected)?;
        tx.send(request).map_err(|_| WorkerError::Disconnected)
    }

    fn try_recv(&mut self) -> Result<Option<Response>> {
        match self.rx.try_recv() {
            Ok(resp) => Ok(Some(resp)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }
}

impl Drop for PathWorker {
    fn drop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("path worker thread panicked");
            }
        }
    }
}

/// The worker's message loop.
fn run(mut service: PathService, rx: Receiver<Request>, tx: Sender<Response>) {
    debug!("path worker started");
    while let Ok(request) = rx.recv() {
        let response = service.handle(request);
        if tx.send(response).is_err() {
            // Host went away.
            break;
        }
    }
    debug!("path worker stopped");
}
