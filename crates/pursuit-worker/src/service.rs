//! The path context's message handler.
//!
//! [`PathService`] is the single synchronous entry point: each call to
//! [`PathService::handle`] processes one message to completion and returns
//! exactly one response. Transports decide where the service runs.

use log::{debug, warn};
use pursuit_core::Grid;
use pursuit_paths::{Path, Pathfinder};

use crate::config::WorkerConfig;
use crate::error::ProtocolError;
use crate::protocol::{self, PathRequest, PathResponse, Request, Response};

/// Owns the wall map (once installed) and answers path requests.
#[derive(Debug, Default)]
pub struct PathService {
    pathfinder: Option<Pathfinder>,
    config: WorkerConfig,
}

impl PathService {
    /// Create an uninitialized service with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WorkerConfig) -> Self {
        Self {
            pathfinder: None,
            config,
        }
    }

    /// Whether a grid has been installed.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.pathfinder.is_some()
    }

    /// The installed grid, if any.
    pub fn grid(&self) -> Option<&Grid> {
        self.pathfinder.as_ref().map(Pathfinder::grid)
    }

    #[inline]
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Process one message.
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Init { rows, cols, walls } => self.init(rows, cols, walls),
            Request::Path(req) => Response::Path(self.path(req)),
        }
    }

    /// Decode a JSON message, process it, and encode the response.
    pub fn handle_json(&mut self, text: &str) -> Result<String, ProtocolError> {
        let request = protocol::decode_request(text)?;
        protocol::encode_response(&self.handle(request))
    }

    fn init(&mut self, rows: i64, cols: i64, walls: Vec<u8>) -> Response {
        if self.pathfinder.is_some() {
            return reject("grid already initialized".to_owned());
        }
        if walls.len() > self.config.max_cells {
            return reject(format!(
                "grid of {} cells exceeds the limit of {}",
                walls.len(),
                self.config.max_cells
            ));
        }
        let grid = match Grid::from_cells(rows, cols, &walls) {
            Ok(grid) => grid,
            Err(e) => return reject(e.to_string()),
        };
        debug!(
            "installed {}x{} grid with {} walls",
            grid.rows(),
            grid.cols(),
            grid.wall_count()
        );
        self.pathfinder = Some(Pathfinder::with_config(grid, self.config.search));
        Response::Ready
    }

    fn path(&self, req: PathRequest) -> PathResponse {
        let path = match &self.pathfinder {
            Some(pf) => pf.find_path(req.start_row, req.start_col, req.end_row, req.end_col),
            None => {
                debug!("path request {} before init", req.id);
                Path::new()
            }
        };
        debug!(
            "path {}: {} -> {} ({} steps)",
            req.id,
            req.start(),
            req.goal(),
            path.len()
        );
        PathResponse { id: req.id, path }
    }
}

fn reject(message: String) -> Response {
    warn!("rejected init: {message}");
    Response::Error { message }
}
