//! Pluggable delivery of messages to a [`PathService`].
//!
//! A transport accepts requests and hands back responses in the order
//! they were produced. [`InlineTransport`] runs the service on the
//! caller's thread; [`PathWorker`](crate::PathWorker) runs it on its own
//! thread.

use std::collections::VecDeque;

use crate::error::Result;
use crate::protocol::{Request, Response};
use crate::service::PathService;

/// Host side of a path context.
pub trait Transport {
    /// Queue a request for the context.
    fn post(&mut self, request: Request) -> Result<()>;

    /// Take the next available response without blocking.
    fn try_recv(&mut self) -> Result<Option<Response>>;

    /// Take every response that is available now.
    fn drain(&mut self) -> Result<Vec<Response>> {
        let mut out = Vec::new();
        while let Some(resp) = self.try_recv()? {
            out.push(resp);
        }
        Ok(out)
    }
}

/// Runs the service synchronously inside `post`.
#[derive(Debug, Default)]
pub struct InlineTransport {
    service: PathService,
    outbox: VecDeque<Response>,
}

impl InlineTransport {
    pub fn new(service: PathService) -> Self {
        Self {
            service,
            outbox: VecDeque::new(),
        }
    }

    pub fn service(&self) -> &PathService {
        &self.service
    }
}

impl Transport for InlineTransport {
    fn post(&mut self, request: Request) -> Result<()> {
        let response = self.service.handle(request);
        self.outbox.push_back(response);
        Ok(())
    }

    fn try_recv(&mut self) -> Result<Option<Response>> {
        Ok(self.outbox.pop_front())
    }
}
