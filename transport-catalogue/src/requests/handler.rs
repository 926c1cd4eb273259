//! Loading base requests and answering stat requests.

use tracing::{debug, info, warn};

use crate::catalogue::TransportCatalogue;
use crate::domain::{CatalogueError, Coordinates, RouteType};
use crate::render::{MapRenderer, RenderSettings};
use crate::router::{Journey, JourneyItem, TransportRouter};

use super::dto::{
    BaseRequest, BusResponse, ErrorResponse, MapResponse, RouteItem, RouteResponse, StatRequest,
    StatResponse, StopResponse,
};

/// Build a frozen catalogue from base requests.
///
/// Stops go in first, then road distances, then buses, so that every name
/// a distance or route mentions is already known regardless of the order
/// of the requests.
pub fn load_catalogue(base_requests: &[BaseRequest]) -> Result<TransportCatalogue, CatalogueError> {
    let mut catalogue = TransportCatalogue::new();

    for request in base_requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude))?;
        }
    }

    for request in base_requests {
        if let BaseRequest::Stop(stop) = request {
            for (to, &meters) in &stop.road_distances {
                catalogue.set_distance(&stop.name, to, meters)?;
            }
        }
    }

    for request in base_requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_bus(&bus.name, &bus.stops, RouteType::from_roundtrip(bus.is_roundtrip))?;
        }
    }

    catalogue.set_buses_info()?;
    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "catalogue loaded"
    );
    Ok(catalogue)
}

/// Answers stat requests against a loaded catalogue.
///
/// Route requests need a compiled router and map requests need render
/// settings; without them those requests are answered as not found.
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    router: Option<&'a TransportRouter>,
    render_settings: Option<&'a RenderSettings>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(catalogue: &'a TransportCatalogue, router: Option<&'a TransportRouter>) -> Self {
        Self {
            catalogue,
            router,
            render_settings: None,
        }
    }

    pub fn with_render_settings(mut self, settings: Option<&'a RenderSettings>) -> Self {
        self.render_settings = settings;
        self
    }

    /// Answer every request, in order.
    pub fn handle_all(&self, requests: &[StatRequest]) -> Vec<StatResponse> {
        let responses: Vec<StatResponse> = requests.iter().map(|r| self.handle(r)).collect();
        debug!(requests = responses.len(), "stat requests answered");
        responses
    }

    /// Answer one request.
    pub fn handle(&self, request: &StatRequest) -> StatResponse {
        let id = request.id();
        let response = match request {
            StatRequest::Bus { name, .. } => self.bus(id, name),
            StatRequest::Stop { name, .. } => self.stop(id, name),
            StatRequest::Route { from, to, .. } => self.route(id, from, to),
            StatRequest::Map { .. } => self.map(id),
        };
        response.unwrap_or_else(|| StatResponse::NotFound(ErrorResponse::not_found(id)))
    }

    fn bus(&self, request_id: i64, name: &str) -> Option<StatResponse> {
        self.catalogue.find_bus(name)?;
        // A bus with an empty route has no statistics; report it as empty.
        let response = match self.catalogue.bus_info(name) {
            Some(info) => BusResponse {
                request_id,
                curvature: info.curvature,
                route_length: info.route_length,
                stop_count: info.stop_count,
                unique_stop_count: info.unique_stop_count,
            },
            None => BusResponse {
                request_id,
                curvature: 0.0,
                route_length: 0.0,
                stop_count: 0,
                unique_stop_count: 0,
            },
        };
        Some(StatResponse::Bus(response))
    }

    fn stop(&self, request_id: i64, name: &str) -> Option<StatResponse> {
        let info = self.catalogue.stop_info(name)?;
        Some(StatResponse::Stop(StopResponse {
            request_id,
            buses: info.buses,
        }))
    }

    fn route(&self, request_id: i64, from: &str, to: &str) -> Option<StatResponse> {
        let Some(router) = self.router else {
            warn!(request_id, "route requested but no routing settings were given");
            return None;
        };
        let from = self.catalogue.find_stop(from)?.id;
        let to = self.catalogue.find_stop(to)?.id;
        let journey = router.build_route(from, to)?;
        self.route_response(request_id, &journey)
            .map(StatResponse::Route)
    }

    /// Returns `None` if the journey names a stop this catalogue does not
    /// have, which means the router was compiled from another catalogue.
    fn route_response(&self, request_id: i64, journey: &Journey) -> Option<RouteResponse> {
        let items = journey
            .items()
            .iter()
            .map(|item| match item {
                JourneyItem::Wait { stop, time } => {
                    let Some(stop) = self.catalogue.stop(*stop) else {
                        warn!(request_id, stop = %stop, "journey stop missing from catalogue");
                        return None;
                    };
                    Some(RouteItem::Wait {
                        stop_name: stop.name.clone(),
                        time: *time,
                    })
                }
                JourneyItem::Ride {
                    bus_name,
                    span_count,
                    time,
                    ..
                } => Some(RouteItem::Bus {
                    bus: bus_name.to_string(),
                    span_count: *span_count,
                    time: *time,
                }),
            })
            .collect::<Option<Vec<_>>>()?;

        Some(RouteResponse {
            request_id,
            total_time: journey.total_time(),
            items,
        })
    }

    fn map(&self, request_id: i64) -> Option<StatResponse> {
        let Some(settings) = self.render_settings else {
            warn!(request_id, "map requested but no render settings were given");
            return None;
        };
        let map = MapRenderer::new(settings).render(self.catalogue).to_string();
        Some(StatResponse::Map(MapResponse { request_id, map }))
    }
}
