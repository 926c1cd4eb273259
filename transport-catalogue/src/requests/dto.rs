//! Data transfer objects for the JSON request document and its responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::render::RenderSettings;
use crate::router::RoutingSettings;

/// The whole input document.
#[derive(Debug, Deserialize)]
pub struct RequestDocument {
    /// Stops and buses to load
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Queries to answer
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,

    /// Wait time and velocity for journey planning
    pub routing_settings: Option<RoutingSettings>,

    /// Where the snapshot lives
    pub serialization_settings: Option<SerializationSettings>,

    /// Map styling
    pub render_settings: Option<RenderSettings>,
}

/// A stop or bus definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// Stop definition with road distances to its neighbours.
#[derive(Debug, Clone, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Meters by road from this stop to each named stop
    #[serde(default)]
    pub road_distances: BTreeMap<String, f64>,
}

/// Bus definition.
#[derive(Debug, Clone, Deserialize)]
pub struct BusRequest {
    pub name: String,

    /// Stop names in travel order
    pub stops: Vec<String>,

    /// True for ring routes, false for routes that turn back
    pub is_roundtrip: bool,
}

/// Location of the snapshot file.
#[derive(Debug, Clone, Deserialize)]
pub struct SerializationSettings {
    pub file: String,
}

/// A query.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// Answer to a query, in the shape of its request type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatResponse {
    Bus(BusResponse),
    Stop(StopResponse),
    Route(RouteResponse),
    Map(MapResponse),
    NotFound(ErrorResponse),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    pub curvature: f64,
    /// Road length in meters
    pub route_length: f64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,
    /// Serving bus names, ascending
    pub buses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    /// Minutes
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    pub request_id: i64,
    /// Whole SVG document
    pub map: String,
}

/// One step of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: usize, time: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub request_id: i64,
    pub error_message: String,
}

impl ErrorResponse {
    pub fn not_found(request_id: i64) -> Self {
        Self {
            request_id,
            error_message: "not found".to_string(),
        }
    }
}
