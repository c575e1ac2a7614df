//! Host-side bookkeeping for agents that chase via a path context.
//!
//! [`PathClient`] numbers requests, remembers which agent each one belongs
//! to and applies replies as they arrive. Until the context acknowledges
//! `init`, or after its transport fails, paths are computed synchronously
//! on the calling thread with a local [`Pathfinder`].

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};
use pursuit_core::{Grid, Pos};
use pursuit_paths::{Path, Pathfinder, SearchConfig};

use crate::error::WorkerError;
use crate::protocol::{PathRequest, PathResponse, Request, Response};
use crate::transport::Transport;

/// Identifies a pursuing agent on the host side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// Per-agent chase state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chase {
    /// Most recent path delivered for this agent.
    pub path: Path,
    /// Whether a request is in flight.
    pub pending: bool,
    /// Endpoints of the latest request.
    pub last_request: Option<(Pos, Pos)>,
    /// Id of the latest request; replies to older ids are discarded.
    pub request_id: Option<u64>,
}

/// Client of a path context reached through `T`.
pub struct PathClient<T: Transport> {
    transport: Option<T>,
    ready: bool,
    fallback: Pathfinder,
    next_id: u64,
    pending: HashMap<u64, AgentId>,
    chases: HashMap<AgentId, Chase>,
}

impl<T: Transport> PathClient<T> {
    /// Send `grid` to the context behind `transport` and keep a local copy
    /// for synchronous fallback.
    pub fn new(grid: Grid, transport: T) -> Self {
        Self::with_config(grid, transport, SearchConfig::default())
    }

    pub fn with_config(grid: Grid, mut transport: T, search: SearchConfig) -> Self {
        let init = Request::Init {
            rows: grid.rows().into(),
            cols: grid.cols().into(),
            walls: grid.to_cells(),
        };
        let transport = match transport.post(init) {
            Ok(()) => Some(transport),
            Err(e) => {
                warn!("failed to initialize path context, searching inline: {e}");
                None
            }
        };
        Self {
            transport,
            ready: false,
            fallback: Pathfinder::with_config(grid, search),
            next_id: 0,
            pending: HashMap::new(),
            chases: HashMap::new(),
        }
    }

    /// Whether the context has acknowledged `init` and is still reachable.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready && self.transport.is_some()
    }

    /// Whether requests are still being sent to a context.
    #[inline]
    pub fn has_transport(&self) -> bool {
        self.transport.is_some()
    }

    /// Number of requests awaiting a reply.
    #[inline]
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Current chase state for `agent`.
    pub fn chase(&self, agent: AgentId) -> Option<&Chase> {
        self.chases.get(&agent)
    }

    /// Latest path for `agent`, empty if none has arrived yet.
    pub fn path(&self, agent: AgentId) -> &[Pos] {
        self.chases
            .get(&agent)
            .map(|c| c.path.as_slice())
            .unwrap_or_default()
    }

    /// Ask for a route for `agent` from `start` to `goal`.
    ///
    /// When the context is not ready the path is computed immediately.
    /// Otherwise the request is posted, unless the same request for this
    /// agent is already in flight.
    pub fn request_path(&mut self, agent: AgentId, start: Pos, goal: Pos) {
        if !self.is_ready() {
            let path = self.fallback.find_path_between(start, goal);
            let chase = self.chases.entry(agent).or_default();
            chase.pending = false;
            chase.path = path;
            return;
        }

        let chase = self.chases.entry(agent).or_default();
        if chase.pending && chase.last_request == Some((start, goal)) {
            return;
        }

        self.next_id += 1;
        let id = self.next_id;
        chase.last_request = Some((start, goal));
        chase.pending = true;
        chase.request_id = Some(id);
        self.pending.insert(id, agent);

        let posted = match self.transport.as_mut() {
            Some(t) => t.post(Request::Path(PathRequest::new(id, start, goal))),
            None => Err(WorkerError::Disconnected),
        };
        if let Err(e) = posted {
            self.fail(e);
            self.request_path(agent, start, goal);
        }
    }

    /// Apply every reply available now. Returns how many agent paths were
    /// updated.
    pub fn poll(&mut self) -> usize {
        let mut applied = 0;
        loop {
            let next = match self.transport.as_mut() {
                Some(t) => t.try_recv(),
                None => return applied,
            };
            match next {
                Ok(Some(Response::Ready)) => {
                    debug!("path context ready");
                    self.ready = true;
                }
                Ok(Some(Response::Path(resp))) => {
                    if self.apply(resp) {
                        applied += 1;
                    }
                }
                Ok(Some(Response::Error { message })) => {
                    warn!("path context rejected init: {message}");
                    self.transport = None;
                    self.reset_pending();
                    return applied;
                }
                Ok(None) => return applied,
                Err(e) => {
                    self.fail(e);
                    return applied;
                }
            }
        }
    }

    fn apply(&mut self, resp: PathResponse) -> bool {
        let Some(id) = resp.id.as_u64() else {
            warn!("ignoring reply with foreign id {}", resp.id);
            return false;
        };
        let Some(agent) = self.pending.remove(&id) else {
            return false;
        };
        let Some(chase) = self.chases.get_mut(&agent) else {
            return false;
        };
        if chase.request_id != Some(id) {
            // Superseded by a newer request.
            return false;
        }
        chase.pending = false;
        chase.path = resp.path;
        true
    }

    fn fail(&mut self, err: WorkerError) {
        warn!("path context failed, searching inline: {err}");
        self.transport = None;
        self.ready = false;
        self.reset_pending();
    }

    fn reset_pending(&mut self) {
        self.pending.clear();
        for chase in self.chases.values_mut() {
            chase.pending = false;
        }
    }

    /// Stop using the context and return its transport.
    pub fn into_transport(self) -> Option<T> {
        self.transport
    }
}
