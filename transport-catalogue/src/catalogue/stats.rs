//! Route statistics.

use std::collections::HashSet;

use crate::domain::{Bus, BusInfo, CatalogueError, RouteType, Stop, StopId, compute_distance};

use super::distances::DistanceTable;

/// Computes the statistics of a non-empty bus route.
pub(super) fn bus_info(
    bus: &Bus,
    stops: &[Stop],
    distances: &DistanceTable,
) -> Result<BusInfo, CatalogueError> {
    let unique_stop_count = bus.stops.iter().collect::<HashSet<_>>().len();
    let geo_length = geo_length(bus, stops);
    let route_length = route_length(bus, stops, distances)?;

    Ok(BusInfo::new(
        bus.id,
        bus.stop_count(),
        unique_stop_count,
        geo_length,
        route_length,
    ))
}

/// Great-circle length. Symmetric, so a `Line` route just doubles it.
fn geo_length(bus: &Bus, stops: &[Stop]) -> f64 {
    let one_way: f64 = bus
        .stops
        .windows(2)
        .map(|pair| {
            compute_distance(
                stops[pair[0].index()].coordinates,
                stops[pair[1].index()].coordinates,
            )
        })
        .sum();

    match bus.route_type {
        RouteType::Ring => one_way,
        RouteType::Line => one_way * 2.0,
    }
}

/// Road length along the full traversal.
///
/// Road distances are asymmetric, so the return leg of a `Line` route is
/// summed pair by pair. A `(last, last)` distance recorded for the terminal
/// stop of a `Line` is a turnaround loop and counts once.
fn route_length(
    bus: &Bus,
    stops: &[Stop],
    distances: &DistanceTable,
) -> Result<f64, CatalogueError> {
    let lookup = |from: StopId, to: StopId| {
        distances
            .get(from, to)
            .ok_or_else(|| CatalogueError::MissingDistance {
                from: stops[from.index()].name.clone(),
                to: stops[to.index()].name.clone(),
            })
    };

    let mut length = 0.0;
    for pair in bus.stops.windows(2) {
        length += lookup(pair[0], pair[1])?;
    }

    if bus.route_type == RouteType::Line {
        for pair in bus.stops.windows(2).rev() {
            length += lookup(pair[1], pair[0])?;
        }
        if let Some(&last) = bus.stops.last()
            && let Some(turnaround) = distances.get_exact(last, last)
        {
            length += turnaround;
        }
    }

    Ok(length)
}
