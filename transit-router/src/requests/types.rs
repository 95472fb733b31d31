//! Wire types for request documents and their responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::router::{Itinerary, RoutingSettings};

/// A full request document: the network, the routing settings and the
/// questions to answer.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// One element of the network definition.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Road distance in meters from this stop to each named neighbour.
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// A question about the loaded network.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    /// Rendered network map. Answered with an error, since rendering is not
    /// available.
    Map { id: i64 },
}

impl StatRequest {
    /// The caller-chosen request id, echoed in the response.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// Answer to one [`StatRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        #[serde(flatten)]
        itinerary: Itinerary,
    },
    NotFound {
        request_id: i64,
        error_message: String,
    },
}

impl StatResponse {
    /// Response for a name or route that does not exist.
    pub fn not_found(request_id: i64) -> Self {
        StatResponse::NotFound {
            request_id,
            error_message: "not found".to_string(),
        }
    }

    /// Response for a request kind this server cannot answer.
    pub fn unsupported(request_id: i64, kind: &str) -> Self {
        StatResponse::NotFound {
            request_id,
            error_message: format!("{kind} requests are not supported"),
        }
    }
}
