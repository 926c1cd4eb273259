//! Drawing the bus network as an SVG map.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalogue::TransportCatalogue;
use crate::domain::{Bus, RouteType, Stop};

use super::projector::SphereProjector;
use super::settings::RenderSettings;
use super::svg::{Circle, Color, Document, PathProps, Point, Polyline, Text};

const FONT_FAMILY: &str = "Verdana";

/// Draws a catalogue with fixed settings.
///
/// Layers, bottom to top: route lines, bus labels, stop circles, stop
/// labels. Buses are drawn in name order and stops in name order; only
/// stops served by at least one bus appear on the map.
#[derive(Debug, Clone, Copy)]
pub struct MapRenderer<'a> {
    settings: &'a RenderSettings,
}

impl<'a> MapRenderer<'a> {
    pub fn new(settings: &'a RenderSettings) -> Self {
        Self { settings }
    }

    pub fn render(&self, catalogue: &TransportCatalogue) -> Document {
        let buses = catalogue.buses_by_name();

        // Served stops, keyed by name for drawing order.
        let stops: BTreeMap<&str, &Stop> = buses
            .iter()
            .flat_map(|bus| bus.stops.iter())
            .filter_map(|&id| catalogue.stop(id))
            .map(|stop| (stop.name.as_str(), stop))
            .collect();

        let projector = SphereProjector::new(
            stops.values().map(|stop| stop.coordinates),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );
        let point_of = |stop: &Stop| projector.project(stop.coordinates);

        let mut doc = Document::new();

        // The palette index advances for every bus, drawn or not.
        for (index, bus) in buses.iter().enumerate() {
            if bus.stops.is_empty() {
                continue;
            }
            let points = bus
                .full_route()
                .filter_map(|id| catalogue.stop(id))
                .map(point_of)
                .collect();
            doc.add(Polyline {
                points,
                props: PathProps::default()
                    .fill(Color::none())
                    .stroke(self.settings.route_color(index))
                    .stroke_width(self.settings.line_width)
                    .rounded(),
            });
        }

        for (index, bus) in buses.iter().enumerate() {
            for terminal in terminals(bus).filter_map(|id| catalogue.stop(id)) {
                self.add_label(
                    &mut doc,
                    self.bus_label(bus, point_of(terminal)),
                    self.settings.route_color(index),
                );
            }
        }

        for &stop in stops.values() {
            doc.add(Circle {
                center: point_of(stop),
                radius: self.settings.stop_radius,
                props: PathProps::default().fill(Color::named("white")),
            });
        }

        for &stop in stops.values() {
            self.add_label(&mut doc, self.stop_label(stop, point_of(stop)), Color::named("black"));
        }

        debug!(
            buses = buses.len(),
            stops = stops.len(),
            shapes = doc.shapes().len(),
            "map rendered"
        );
        doc
    }

    fn bus_label(&self, bus: &Bus, position: Point) -> Text {
        Text {
            position,
            offset: self.settings.bus_label_offset,
            font_size: self.settings.bus_label_font_size,
            font_family: Some(FONT_FAMILY.to_string()),
            font_weight: Some("bold".to_string()),
            data: bus.name.clone(),
            props: PathProps::default(),
        }
    }

    fn stop_label(&self, stop: &Stop, position: Point) -> Text {
        Text {
            position,
            offset: self.settings.stop_label_offset,
            font_size: self.settings.stop_label_font_size,
            font_family: Some(FONT_FAMILY.to_string()),
            font_weight: None,
            data: stop.name.clone(),
            props: PathProps::default(),
        }
    }

    /// A label is its underlayer halo followed by the text itself.
    fn add_label(&self, doc: &mut Document, label: Text, fill: Color) {
        let underlayer = Text {
            props: PathProps::default()
                .fill(self.settings.underlayer_color.clone())
                .stroke(self.settings.underlayer_color.clone())
                .stroke_width(self.settings.underlayer_width)
                .rounded(),
            ..label.clone()
        };
        doc.add(underlayer);
        doc.add(Text {
            props: PathProps::default().fill(fill),
            ..label
        });
    }
}

/// Stops that carry the bus name: the first stop, and for a `Line` also the
/// last listed stop when it differs from the first.
fn terminals(bus: &Bus) -> impl Iterator<Item = crate::domain::StopId> + '_ {
    let first = bus.stops.first().copied();
    let last = match bus.route_type {
        RouteType::Line => bus.stops.last().copied().filter(|&last| Some(last) != first),
        RouteType::Ring => None,
    };
    first.into_iter().chain(last)
}
