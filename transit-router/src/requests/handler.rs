//! Loading a network from base requests and answering stat requests.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::error::RequestError;
use super::types::{BaseRequest, Document, StatRequest, StatResponse};
use crate::cache::CacheConfig;
use crate::catalogue::TransportCatalogue;
use crate::domain::Coordinates;
use crate::router::{RoutingSettings, TransportRouter};

/// Populate a catalogue from base requests.
///
/// Requests may arrive in any order; stops are added first, then road
/// distances, then buses.
pub fn load_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, RequestError> {
    let mut catalogue = TransportCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue.add_stop(name.as_str(), Coordinates::new(*latitude, *longitude))?;
        }
    }

    for request in requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (to, meters) in road_distances {
                catalogue.add_distance(name, to, *meters)?;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            catalogue.add_bus(name.as_str(), stops.as_slice(), *is_roundtrip)?;
        }
    }

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "Loaded transport catalogue"
    );

    Ok(catalogue)
}

/// A loaded network, ready to answer stat requests.
#[derive(Debug)]
pub struct RequestHandler {
    catalogue: TransportCatalogue,
    router: TransportRouter,
}

impl RequestHandler {
    /// Build the router for an already loaded catalogue.
    pub fn new(
        catalogue: TransportCatalogue,
        settings: RoutingSettings,
    ) -> Result<Self, RequestError> {
        Self::with_cache(catalogue, settings, &CacheConfig::default())
    }

    /// Build the router with an explicit tree cache configuration.
    pub fn with_cache(
        catalogue: TransportCatalogue,
        settings: RoutingSettings,
        cache_config: &CacheConfig,
    ) -> Result<Self, RequestError> {
        let router = TransportRouter::build_with_cache(&catalogue, settings, cache_config)?;
        Ok(Self { catalogue, router })
    }

    /// Load the network and routing settings of a document.
    ///
    /// The document's stat requests are ignored.
    pub fn from_document(document: &Document) -> Result<Self, RequestError> {
        Self::from_document_with_cache(document, &CacheConfig::default())
    }

    fn from_document_with_cache(
        document: &Document,
        cache_config: &CacheConfig,
    ) -> Result<Self, RequestError> {
        let settings = document
            .routing_settings
            .ok_or(RequestError::MissingRoutingSettings)?;
        let catalogue = load_catalogue(&document.base_requests)?;
        Self::with_cache(catalogue, settings, cache_config)
    }

    /// Read and load a document from a JSON file.
    pub fn from_file(
        path: impl AsRef<Path>,
        cache_config: &CacheConfig,
    ) -> Result<Self, RequestError> {
        let raw = std::fs::read_to_string(path)?;
        let document: Document = serde_json::from_str(&raw)?;
        Self::from_document_with_cache(&document, cache_config)
    }

    /// The loaded catalogue.
    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    /// The router built over the catalogue.
    pub fn router(&self) -> &TransportRouter {
        &self.router
    }

    /// Answer one stat request.
    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let request_id = request.id();
        let response = match request {
            StatRequest::Bus { name, .. } => self.catalogue.bus_stats(name).map(|stats| {
                StatResponse::Bus {
                    request_id,
                    curvature: stats.curvature,
                    route_length: stats.route_length,
                    stop_count: stats.stop_count,
                    unique_stop_count: stats.unique_stop_count,
                }
            }),
            StatRequest::Stop { name, .. } => {
                self.catalogue
                    .stop_stats(name)
                    .map(|stats| StatResponse::Stop {
                        request_id,
                        buses: stats.buses,
                    })
            }
            StatRequest::Route { from, to, .. } => {
                self.router
                    .query(from, to)
                    .map(|itinerary| StatResponse::Route {
                        request_id,
                        itinerary,
                    })
            }
            StatRequest::Map { .. } => {
                debug!(request_id, "Map request is not supported");
                return StatResponse::unsupported(request_id, "Map");
            }
        };

        response.unwrap_or_else(|| {
            debug!(request_id, "Stat request not found");
            StatResponse::not_found(request_id)
        })
    }

    /// Answer stat requests in order.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        requests.iter().map(|r| self.handle(r)).collect()
    }
}

/// Read a whole document, load it, and answer its stat requests.
pub fn process_document(mut reader: impl Read) -> Result<Vec<StatResponse>, RequestError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    let document: Document = serde_json::from_str(&raw)?;

    let handler = RequestHandler::from_document(&document)?;
    Ok(handler.handle_all(&document.stat_requests))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::CatalogueError;
    use crate::router::ConfigError;
    use serde_json::json;

    fn document() -> serde_json::Value {
        json!({
            "base_requests": [
                {"type": "Bus", "name": "1", "stops": ["A", "B", "C", "A"], "is_roundtrip": true},
                {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
                 "road_distances": {"B": 1000}},
                {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 1.0,
                 "road_distances": {"C": 1000}},
                {"type": "Stop", "name": "C", "latitude": 0.0, "longitude": 2.0,
                 "road_distances": {"A": 1000}},
                {"type": "Stop", "name": "D", "latitude": 1.0, "longitude": 1.0}
            ],
            "routing_settings": {"bus_wait_time": 5, "bus_velocity": 30},
            "stat_requests": [
                {"id": 1, "type": "Route", "from": "A", "to": "C"},
                {"id": 2, "type": "Route", "from": "A", "to": "Unknown"},
                {"id": 3, "type": "Route", "from": "A", "to": "D"},
                {"id": 4, "type": "Stop", "name": "A"},
                {"id": 5, "type": "Stop", "name": "D"},
                {"id": 6, "type": "Bus", "name": "1"},
                {"id": 7, "type": "Bus", "name": "2"}
            ]
        })
    }

    #[test]
    fn buses_may_precede_their_stops() {
        let doc: Document = serde_json::from_value(document()).unwrap();
        let catalogue = load_catalogue(&doc.base_requests).unwrap();
        assert_eq!(catalogue.stop_count(), 4);
        assert_eq!(catalogue.bus_count(), 1);
    }

    #[test]
    fn distance_to_unknown_stop_fails() {
        let requests = vec![BaseRequest::Stop {
            name: "A".into(),
            latitude: 0.0,
            longitude: 0.0,
            road_distances: [("Z".to_string(), 10)].into(),
        }];
        let err = load_catalogue(&requests).unwrap_err();
        assert!(matches!(
            err,
            RequestError::Catalogue(CatalogueError::UnknownStop(ref s)) if s == "Z"
        ));
    }

    #[test]
    fn processes_whole_document() {
        let raw = serde_json::to_string(&document()).unwrap();
        let responses = process_document(raw.as_bytes()).unwrap();
        let json = serde_json::to_value(&responses).unwrap();

        assert_eq!(
            json,
            json!([
                {"request_id": 1, "total_time": 9.0, "items": [
                    {"type": "Wait", "stop_name": "A", "time": 5.0},
                    {"type": "Bus", "bus": "1", "span_count": 2, "time": 4.0}
                ]},
                {"request_id": 2, "error_message": "not found"},
                {"request_id": 3, "error_message": "not found"},
                {"request_id": 4, "buses": ["1"]},
                {"request_id": 5, "buses": []},
                {"request_id": 6, "curvature": responses_curvature(&responses),
                 "route_length": 3000, "stop_count": 4, "unique_stop_count": 3},
                {"request_id": 7, "error_message": "not found"}
            ])
        );
    }

    fn responses_curvature(responses: &[StatResponse]) -> f64 {
        match &responses[5] {
            StatResponse::Bus { curvature, .. } => *curvature,
            other => panic!("expected bus response, got {other:?}"),
        }
    }

    #[test]
    fn map_request_does_not_block_other_answers() {
        let mut doc = document();
        doc["stat_requests"] = json!([
            {"id": 1, "type": "Route", "from": "A", "to": "B"},
            {"id": 2, "type": "Map"},
            {"id": 3, "type": "Stop", "name": "B"}
        ]);
        let raw = serde_json::to_string(&doc).unwrap();
        let responses = process_document(raw.as_bytes()).unwrap();

        assert_eq!(responses.len(), 3);
        assert!(matches!(responses[0], StatResponse::Route { request_id: 1, .. }));
        assert_eq!(responses[1], StatResponse::unsupported(2, "Map"));
        assert_eq!(
            responses[2],
            StatResponse::Stop {
                request_id: 3,
                buses: vec!["1".to_string()],
            }
        );
    }

    #[test]
    fn missing_routing_settings() {
        let err = process_document(r#"{"base_requests": []}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, RequestError::MissingRoutingSettings));
    }

    #[test]
    fn invalid_routing_settings() {
        let raw = r#"{"routing_settings": {"bus_wait_time": 5, "bus_velocity": 0}}"#;
        let err = process_document(raw.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            RequestError::Config(ConfigError::NonPositiveVelocity(_))
        ));
    }

    #[test]
    fn malformed_json() {
        let err = process_document("not json".as_bytes()).unwrap_err();
        assert!(matches!(err, RequestError::Json(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", document()).unwrap();

        let handler = RequestHandler::from_file(file.path(), &CacheConfig::default()).unwrap();
        assert_eq!(handler.catalogue().stop_count(), 4);
        assert!(handler.router().query("B", "A").is_some());
    }

    #[test]
    fn missing_file() {
        let err = RequestHandler::from_file("/definitely/not/here.json", &CacheConfig::default())
            .unwrap_err();
        assert!(matches!(err, RequestError::Io(_)));
    }
}
