//! Wire messages exchanged with the path context.
//!
//! Messages are plain structured data tagged by a `type` field:
//!
//! | Request | Response |
//! |---|---|
//! | `{"type":"init","rows":R,"cols":C,"walls":[0,1,..]}` | `{"type":"ready"}` |
//! | `{"type":"path","id":ID,"sr":..,"sc":..,"er":..,"ec":..}` | `{"type":"path","id":ID,"path":[{"r":..,"c":..},..]}` |
//!
//! A rejected `init` is answered with `{"type":"error","message":".."}`.

use std::fmt;

use pursuit_core::Pos;
use pursuit_paths::Path;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Caller-chosen request identifier, echoed back untouched.
///
/// Any JSON value is accepted; the context never interprets it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(pub serde_json::Value);

impl RequestId {
    /// The id as an unsigned integer, if it is one.
    pub fn as_u64(&self) -> Option<u64> {
        self.0.as_u64()
    }
}

impl From<u64> for RequestId {
    fn from(id: u64) -> Self {
        Self(id.into())
    }
}

impl From<&str> for RequestId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A request to find a route between two cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub id: RequestId,
    #[serde(rename = "sr")]
    pub start_row: i32,
    #[serde(rename = "sc")]
    pub start_col: i32,
    #[serde(rename = "er")]
    pub end_row: i32,
    #[serde(rename = "ec")]
    pub end_col: i32,
}

impl PathRequest {
    pub fn new(id: impl Into<RequestId>, start: Pos, goal: Pos) -> Self {
        Self {
            id: id.into(),
            start_row: start.row,
            start_col: start.col,
            end_row: goal.row,
            end_col: goal.col,
        }
    }

    #[inline]
    pub fn start(&self) -> Pos {
        Pos::new(self.start_row, self.start_col)
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        Pos::new(self.end_row, self.end_col)
    }
}

/// Inbound message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Request {
    /// Install the wall map. Dimensions are wide so that out-of-range
    /// values are rejected by validation rather than by decoding.
    Init {
        rows: i64,
        cols: i64,
        walls: Vec<u8>,
    },
    Path(PathRequest),
}

/// Result of a path request, correlated by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    pub id: RequestId,
    pub path: Path,
}

/// Outbound message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Response {
    /// The grid has been installed.
    Ready,
    Path(PathResponse),
    /// An `init` was rejected; the context state is unchanged.
    Error { message: String },
}

/// Decode a JSON request.
pub fn decode_request(text: &str) -> Result<Request, ProtocolError> {
    serde_json::from_str(text).map_err(ProtocolError::Decode)
}

/// Encode a request as JSON.
pub fn encode_request(request: &Request) -> Result<String, ProtocolError> {
    serde_json::to_string(request).map_err(ProtocolError::Encode)
}

/// Decode a JSON response.
pub fn decode_response(text: &str) -> Result<Response, ProtocolError> {
    serde_json::from_str(text).map_err(ProtocolError::Decode)
}

/// Encode a response as JSON.
pub fn encode_response(response: &Response) -> Result<String, ProtocolError> {
    serde_json::to_string(response).map_err(ProtocolError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_init() {
        let req = decode_request(r#"{"type":"init","rows":2,"cols":2,"walls":[0,1,0,0]}"#).unwrap();
        assert_eq!(
            req,
            Request::Init {
                rows: 2,
                cols: 2,
                walls: vec![0, 1, 0, 0]
            }
        );
    }

    #[test]
    fn decodes_path_with_opaque_id() {
        let req =
            decode_request(r#"{"type":"path","id":"pac-3","sr":0,"sc":1,"er":4,"ec":4}"#).unwrap();
        let Request::Path(p) = req else {
            panic!("expected path request");
        };
        assert_eq!(p.id, RequestId::from("pac-3"));
        assert_eq!(p.start(), Pos::new(0, 1));
        assert_eq!(p.goal(), Pos::new(4, 4));

        let req =
            decode_request(r#"{"type":"path","id":{"k":[1,2]},"sr":0,"sc":0,"er":0,"ec":1}"#)
                .unwrap();
        let Request::Path(p) = req else {
            panic!("expected path request");
        };
        assert_eq!(p.id.0, serde_json::json!({"k": [1, 2]}));
        assert_eq!(p.id.as_u64(), None);
    }

    #[test]
    fn encodes_responses() {
        assert_eq!(encode_response(&Response::Ready).unwrap(), r#"{"type":"ready"}"#);
        let resp = Response::Path(PathResponse {
            id: RequestId::from(7u64),
            path: vec![Pos::new(0, 1), Pos::new(1, 1)],
        });
        assert_eq!(
            encode_response(&resp).unwrap(),
            r#"{"type":"path","id":7,"path":[{"r":0,"c":1},{"r":1,"c":1}]}"#
        );
        let err = Response::Error {
            message: "bad".into(),
        };
        assert_eq!(
            encode_response(&err).unwrap(),
            r#"{"type":"error","message":"bad"}"#
        );
    }

    #[test]
    fn request_encoding_matches_wire_names() {
        let req = Request::Path(PathRequest::new(1u64, Pos::new(2, 3), Pos::new(4, 5)));
        assert_eq!(
            encode_request(&req).unwrap(),
            r#"{"type":"path","id":1,"sr":2,"sc":3,"er":4,"ec":5}"#
        );
        assert_eq!(decode_request(&encode_request(&req).unwrap()).unwrap(), req);
    }

    #[test]
    fn decodes_responses_on_the_host_side() {
        assert_eq!(decode_response(r#"{"type":"ready"}"#).unwrap(), Response::Ready);
        let resp = decode_response(r#"{"type":"path","id":"pac-1","path":[{"r":2,"c":0}]}"#)
            .unwrap();
        assert_eq!(
            resp,
            Response::Path(PathResponse {
                id: RequestId::from("pac-1"),
                path: vec![Pos::new(2, 0)],
            })
        );
        let err = Response::Error {
            message: "grid already initialized".into(),
        };
        assert_eq!(decode_response(&encode_response(&err).unwrap()).unwrap(), err);
        assert!(decode_response(r#"{"type":"path","id":1}"#).is_err());
    }

    #[test]
    fn rejects_malformed_messages() {
        assert!(decode_request("not json").is_err());
        assert!(decode_request(r#"{"type":"teleport"}"#).is_err());
        assert!(decode_request(r#"{"type":"path","id":1,"sr":0}"#).is_err());
        assert!(decode_request(r#"{"type":"init","rows":1,"cols":1,"walls":[300]}"#).is_err());
    }
}
