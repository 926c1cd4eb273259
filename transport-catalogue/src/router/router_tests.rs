//! Scenario tests for graph compilation and route queries.

use super::*;
use crate::catalogue::TransportCatalogue;
use crate::domain::{Coordinates, RouteType, StopId};

fn settings(wait: f64, velocity: f64) -> RoutingSettings {
    RoutingSettings::new(wait, velocity).unwrap()
}

/// Builds a frozen catalogue from `(name, lat, lng)` stops, `(from, to, meters)`
/// distances and `(name, stops, route type)` buses.
fn catalogue(
    stops: &[(&str, f64, f64)],
    distances: &[(&str, &str, f64)],
    buses: &[(&str, &[&str], RouteType)],
) -> TransportCatalogue {
    let mut tc = TransportCatalogue::new();
    for &(name, lat, lng) in stops {
        tc.add_stop(name, Coordinates::new(lat, lng)).unwrap();
    }
    for &(from, to, meters) in distances {
        tc.set_distance(from, to, meters).unwrap();
    }
    for &(name, route, route_type) in buses {
        tc.add_bus(name, route, route_type).unwrap();
    }
    tc.set_buses_info().unwrap();
    tc
}

fn id(tc: &TransportCatalogue, name: &str) -> StopId {
    tc.find_stop(name).unwrap().id
}

/// Edges as comparable tuples, sorted.
fn edge_set(router: &TransportRouter) -> Vec<(usize, usize, u64, usize, String)> {
    let mut edges: Vec<_> = router
        .graph()
        .edges()
        .iter()
        .map(|e| {
            (
                e.from,
                e.to,
                e.weight.to_bits(),
                e.meta.span_count,
                e.meta.bus_name.to_string(),
            )
        })
        .collect();
    edges.sort();
    edges
}

#[test]
fn ring_bus_single_hop() {
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0)],
        &[("A", "B", 1000.0)],
        &[("ring", &["A", "B", "A"], RouteType::Ring)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();

    let journey = router.build_route(id(&tc, "A"), id(&tc, "B")).unwrap();
    assert!((journey.total_time() - 7.0).abs() < 1e-9);
    assert_eq!(journey.items().len(), 2);

    match &journey.items()[1] {
        JourneyItem::Ride {
            bus_name,
            span_count,
            time,
            ..
        } => {
            assert_eq!(&**bus_name, "ring");
            assert_eq!(*span_count, 1);
            assert!((time - 1.0).abs() < 1e-9);
        }
        other => panic!("expected a ride, got {other:?}"),
    }
    match &journey.items()[0] {
        JourneyItem::Wait { stop, time } => {
            assert_eq!(*stop, id(&tc, "A"));
            assert_eq!(*time, 6.0);
        }
        other => panic!("expected a wait, got {other:?}"),
    }
}

#[test]
fn line_bus_directions_differ() {
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0)],
        &[("A", "B", 2000.0), ("B", "A", 3000.0)],
        &[("line", &["A", "B"], RouteType::Line)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();
    let (a, b) = (id(&tc, "A"), id(&tc, "B"));

    let forward = router.build_route(a, b).unwrap();
    let backward = router.build_route(b, a).unwrap();

    assert!((forward.total_time() - 8.0).abs() < 1e-9);
    assert!((backward.total_time() - 9.0).abs() < 1e-9);
    assert_ne!(forward.total_time(), backward.total_time());
}

#[test]
fn same_stop_is_free() {
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("Lonely", 55.5, 37.5)],
        &[("A", "B", 1000.0)],
        &[("line", &["A", "B"], RouteType::Line)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();

    for stop in tc.stops() {
        let journey = router.build_route(stop.id, stop.id).unwrap();
        assert_eq!(journey.total_time(), 0.0);
        assert!(journey.is_empty());
    }
}

#[test]
fn unreachable_stop() {
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("Lonely", 55.5, 37.5)],
        &[("A", "B", 1000.0)],
        &[("line", &["A", "B"], RouteType::Line)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();

    assert!(router.build_route(id(&tc, "A"), id(&tc, "Lonely")).is_none());
    assert!(router.build_route(id(&tc, "Lonely"), id(&tc, "B")).is_none());
}

#[test]
fn ring_has_no_return_leg() {
    // A -> B -> C -> A: reaching A from B means riding on through C.
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0)],
        &[("A", "B", 1000.0), ("B", "C", 1000.0), ("C", "A", 1000.0)],
        &[("ring", &["A", "B", "C", "A"], RouteType::Ring)],
    );
    let router = TransportRouter::new(&tc, settings(2.0, 60.0)).unwrap();

    let journey = router.build_route(id(&tc, "B"), id(&tc, "A")).unwrap();
    assert!((journey.total_time() - 4.0).abs() < 1e-9);
    assert_eq!(journey.ride_count(), 1);
    assert!(matches!(
        journey.items()[1],
        JourneyItem::Ride { span_count: 2, .. }
    ));
}

#[test]
fn transfer_between_buses() {
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0)],
        &[("A", "B", 1000.0), ("B", "C", 2000.0)],
        &[
            ("first", &["A", "B"], RouteType::Line),
            ("second", &["B", "C"], RouteType::Line),
        ],
    );
    let router = TransportRouter::new(&tc, settings(5.0, 60.0)).unwrap();

    let journey = router.build_route(id(&tc, "A"), id(&tc, "C")).unwrap();
    // Two waits, one minute and two minutes of riding.
    assert!((journey.total_time() - 13.0).abs() < 1e-9);
    assert_eq!(journey.ride_count(), 2);

    let buses: Vec<&str> = journey
        .items()
        .iter()
        .filter_map(|item| match item {
            JourneyItem::Ride { bus_name, .. } => Some(&**bus_name),
            JourneyItem::Wait { .. } => None,
        })
        .collect();
    assert_eq!(buses, vec!["first", "second"]);

    let stops: Vec<StopId> = journey
        .items()
        .iter()
        .filter_map(|item| match item {
            JourneyItem::Wait { stop, .. } => Some(*stop),
            JourneyItem::Ride { .. } => None,
        })
        .collect();
    assert_eq!(stops, vec![id(&tc, "A"), id(&tc, "B")]);
}

#[test]
fn staying_on_board_beats_transfer() {
    // "through" rides A -> B -> C; "hop" only covers B -> C slightly faster.
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0), ("D", 55.03, 37.0)],
        &[("A", "B", 1000.0), ("B", "C", 1000.0), ("B", "D", 500.0), ("D", "C", 400.0)],
        &[
            ("through", &["A", "B", "C"], RouteType::Line),
            ("hop", &["B", "D", "C"], RouteType::Line),
        ],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();

    let journey = router.build_route(id(&tc, "A"), id(&tc, "C")).unwrap();
    assert!((journey.total_time() - 8.0).abs() < 1e-9);
    assert_eq!(journey.ride_count(), 1);
    assert!(matches!(
        &journey.items()[1],
        JourneyItem::Ride { span_count: 2, bus_name, .. } if &**bus_name == "through"
    ));
}

#[test]
fn edge_counts_per_route_shape() {
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0)],
        &[("A", "B", 1000.0), ("B", "C", 1000.0), ("C", "A", 1000.0)],
        &[("ring", &["A", "B", "C", "A"], RouteType::Ring)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();
    assert_eq!(router.graph().edge_count(), 5);
    assert_eq!(router.graph().vertex_count(), 3);

    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0)],
        &[("A", "B", 1000.0), ("B", "C", 1000.0)],
        &[("line", &["A", "B", "C"], RouteType::Line)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();
    assert_eq!(router.graph().edge_count(), 6);
}

#[test]
fn span_counts_grow_along_ride() {
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0), ("D", 55.03, 37.0)],
        &[("A", "B", 600.0), ("B", "C", 600.0), ("C", "D", 600.0)],
        &[("line", &["A", "B", "C", "D"], RouteType::Line)],
    );
    let router = TransportRouter::new(&tc, settings(1.0, 36.0)).unwrap();
    let a = id(&tc, "A").index();

    let mut from_a: Vec<(usize, usize)> = router
        .graph()
        .edges()
        .iter()
        .filter(|e| e.from == a)
        .map(|e| (e.to, e.meta.span_count))
        .collect();
    from_a.sort();
    assert_eq!(from_a, vec![(1, 1), (2, 2), (3, 3)]);
}

#[test]
fn compilation_is_deterministic() {
    let stops = [("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0)];
    let distances = [("A", "B", 1200.0), ("B", "A", 1300.0), ("B", "C", 900.0), ("C", "A", 2000.0)];
    let buses: [(&str, &[&str], RouteType); 2] = [
        ("1", &["A", "B", "C"], RouteType::Line),
        ("2", &["C", "A", "B", "C"], RouteType::Ring),
    ];

    let first = TransportRouter::new(&catalogue(&stops, &distances, &buses), settings(4.0, 30.0)).unwrap();
    let second = TransportRouter::new(&catalogue(&stops, &distances, &buses), settings(4.0, 30.0)).unwrap();
    assert_eq!(edge_set(&first), edge_set(&second));
}

#[test]
fn settings_change_means_new_graph() {
    let stops = [("A", 55.0, 37.0), ("B", 55.01, 37.0)];
    let distances = [("A", "B", 1000.0)];
    let buses: [(&str, &[&str], RouteType); 1] = [("1", &["A", "B"], RouteType::Line)];
    let tc = catalogue(&stops, &distances, &buses);

    let slow = TransportRouter::new(&tc, settings(6.0, 30.0)).unwrap();
    let fast = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();
    let (a, b) = (id(&tc, "A"), id(&tc, "B"));
    assert!((slow.build_route(a, b).unwrap().total_time() - 8.0).abs() < 1e-9);
    assert!((fast.build_route(a, b).unwrap().total_time() - 7.0).abs() < 1e-9);
    assert_eq!(slow.settings().bus_velocity(), 30.0);
}

#[test]
fn unfrozen_catalogue_is_rejected() {
    let mut tc = TransportCatalogue::new();
    tc.add_stop("A", Coordinates::new(55.0, 37.0)).unwrap();
    let err = TransportRouter::new(&tc, RoutingSettings::default()).unwrap_err();
    assert_eq!(err, RouterError::CatalogueNotFrozen);
}

#[test]
fn concurrent_queries_share_the_router() {
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0)],
        &[("A", "B", 1000.0), ("B", "C", 1000.0)],
        &[("line", &["A", "B", "C"], RouteType::Line)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();
    let (a, c) = (id(&tc, "A"), id(&tc, "C"));

    let totals: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| router.build_route(a, c).map(|j| j.total_time())))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });
    for total in totals {
        assert!((total - 8.0).abs() < 1e-9);
    }
}

#[test]
fn revisited_origin_is_skipped() {
    // A -> B -> A -> C: no A -> A ride is emitted.
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0), ("C", 55.02, 37.0)],
        &[("A", "B", 1000.0), ("A", "C", 1000.0)],
        &[("ring", &["A", "B", "A", "C"], RouteType::Ring)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();
    assert!(router.graph().edges().iter().all(|e| e.from != e.to));
}

#[test]
fn line_return_leg_skips_revisited_origin() {
    // A -> B -> A as a Line: the return leg must not emit an A -> A ride either.
    let tc = catalogue(
        &[("A", 55.0, 37.0), ("B", 55.01, 37.0)],
        &[("A", "B", 1000.0), ("B", "A", 2000.0)],
        &[("shuttle", &["A", "B", "A"], RouteType::Line)],
    );
    let router = TransportRouter::new(&tc, settings(6.0, 60.0)).unwrap();
    assert!(router.graph().edges().iter().all(|e| e.from != e.to));

    let (a, b) = (id(&tc, "A").index(), id(&tc, "B").index());
    let name = "shuttle".to_string();
    assert_eq!(
        edge_set(&router),
        vec![
            (a, b, 7.0f64.to_bits(), 1, name.clone()),
            (a, b, 7.0f64.to_bits(), 1, name.clone()),
            (b, a, 8.0f64.to_bits(), 1, name.clone()),
            (b, a, 8.0f64.to_bits(), 1, name),
        ]
    );
}
