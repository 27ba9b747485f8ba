use cablekit_core::{
    CableCategory, CableSpec, Catalog, Connection, Device, PathType, Point, RoutingOptions,
    Shielding, WallObstacle,
};
use cablekit_routing::{CableEngine, PathSource, RunWarning};
use std::sync::Arc;

fn pair(distance: f64) -> (Device, Device) {
    (
        Device::new("a", Point::new(0.0, 0.0)),
        Device::new("b", Point::new(distance, 0.0)),
    )
}

fn ceiling_options() -> RoutingOptions {
    RoutingOptions {
        path_type: PathType::Ceiling,
        ceiling_height: 3.0,
        slack_percentage: 10.0,
        include_slack: true,
        ..RoutingOptions::default()
    }
}

#[test]
fn test_ceiling_scenario() {
    let engine = CableEngine::standard();
    let (a, b) = pair(10.0);
    let conn = Connection::new("c1", "a", "b", "utp-cat6");

    let result = engine
        .calculate_cable_path(&a, &b, &conn, &ceiling_options())
        .unwrap();

    assert!((result.total_length - 17.6).abs() < 1e-9);
    assert!((result.estimated_cost - 149.6).abs() < 1e-9);
    assert!(result.warnings.is_empty());
    assert_eq!(result.segments.len(), 3);
    assert!(result.conduits.is_empty());
    // 17.6m * 0.1 h/m * 1.5 ceiling multiplier
    assert!((result.installation_hours - 2.64).abs() < 1e-9);
}

#[test]
fn test_direct_identity_without_slack() {
    let engine = CableEngine::standard();
    let a = Device::new("a", Point::new_3d(1.0, 2.0, 0.5));
    let b = Device::new("b", Point::new_3d(4.0, 6.0, 0.5));
    let conn = Connection::new("c1", "a", "b", "fiber-om3");
    let options = RoutingOptions {
        include_slack: false,
        ..RoutingOptions::default()
    };

    let result = engine.calculate_cable_path(&a, &b, &conn, &options).unwrap();
    assert_eq!(result.total_length, 5.0);
    assert_eq!(result.path_type, PathType::Direct);
}

#[test]
fn test_length_exceeded_warning() {
    let engine = CableEngine::standard();
    let (a, b) = pair(120.0);
    let conn = Connection::new("c1", "a", "b", "utp-cat6");

    let result = engine
        .calculate_cable_path(&a, &b, &conn, &RoutingOptions::default())
        .unwrap();

    assert!(result.has_warning("LENGTH_EXCEEDED"));
    assert!(matches!(
        result.warnings[0],
        RunWarning::LengthExceeded { max_length, .. } if max_length == 100.0
    ));
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("fiber optic")));
}

#[test]
fn test_waypoints_override_template() {
    let engine = CableEngine::standard();
    let (a, b) = pair(10.0);
    let conn = Connection::new("c1", "a", "b", "utp-cat6").with_waypoints(vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 5.0),
        Point::new(10.0, 5.0),
        Point::new(10.0, 0.0),
    ]);
    let options = RoutingOptions {
        include_slack: false,
        ..ceiling_options()
    };

    let result = engine.calculate_cable_path(&a, &b, &conn, &options).unwrap();
    assert_eq!(result.total_length, 20.0);
    assert_eq!(result.segments.len(), 3);
    assert!(result
        .recommendations
        .iter()
        .all(|r| !r.contains("bend radius")));
}

#[test]
fn test_single_waypoint_falls_back_to_template() {
    let engine = CableEngine::standard();
    let (a, b) = pair(10.0);
    let conn = Connection::new("c1", "a", "b", "utp-cat6").with_waypoints(vec![Point::new(3.0, 3.0)]);
    let options = RoutingOptions {
        include_slack: false,
        ..RoutingOptions::default()
    };

    let result = engine.calculate_cable_path(&a, &b, &conn, &options).unwrap();
    assert_eq!(result.total_length, 10.0);
}

#[test]
fn test_conduit_required_adds_requirement() {
    let engine = CableEngine::standard();
    let (a, b) = pair(10.0);
    let conn = Connection::new("c1", "a", "b", "utp-cat6");
    let options = RoutingOptions {
        include_slack: false,
        conduit_required: true,
        ..RoutingOptions::default()
    };

    let result = engine.calculate_cable_path(&a, &b, &conn, &options).unwrap();
    assert_eq!(result.conduits.len(), 1);
    let requirement = &result.conduits[0];
    assert_eq!(requirement.conduit.id, "pvc-16");
    assert_eq!(requirement.length, 10.0);
    // 10m * 8.5 cable + 10m * 1.8 conduit
    assert!((result.estimated_cost - 103.0).abs() < 1e-9);
    // 10m * 0.1 * 1.5 conduit factor
    assert!((result.installation_hours - 1.5).abs() < 1e-9);
}

#[test]
fn test_obstacles_reported_on_direct_runs_only() {
    let engine = CableEngine::standard();
    let (a, b) = pair(10.0);
    let conn = Connection::new("c1", "a", "b", "utp-cat6");
    let walls = vec![WallObstacle::new(
        "north",
        vec![Point::new(5.0, -5.0), Point::new(5.0, 5.0)],
    )];

    let direct = engine
        .calculate_cable_path_with_walls(&a, &b, &conn, &RoutingOptions::default(), &walls)
        .unwrap();
    assert_eq!(direct.segments[0].obstacles, vec!["crosses wall north"]);

    let ceiling = engine
        .calculate_cable_path_with_walls(&a, &b, &conn, &ceiling_options(), &walls)
        .unwrap();
    assert!(ceiling.segments.iter().all(|s| s.obstacles.is_empty()));
}

#[test]
fn test_analyze_path_obstacles() {
    let engine = CableEngine::standard();
    let walls = vec![
        WallObstacle::new("w1", vec![Point::new(5.0, -5.0), Point::new(5.0, 5.0)]),
        WallObstacle::new("w2", vec![Point::new(20.0, -5.0), Point::new(20.0, 5.0)]),
    ];

    let hits = engine.analyze_path_obstacles(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &walls);
    assert_eq!(hits, vec!["crosses wall w1"]);
}

#[test]
fn test_unknown_family_is_error() {
    let engine = CableEngine::standard();
    let (a, b) = pair(10.0);
    let conn = Connection::new("c1", "a", "b", "cat9");
    assert!(engine
        .calculate_cable_path(&a, &b, &conn, &RoutingOptions::default())
        .is_err());
}

#[test]
fn test_path_source_for_mixed_is_direct() {
    let (a, b) = pair(10.0);
    let conn = Connection::new("c1", "a", "b", "utp-cat6");
    let options = RoutingOptions {
        path_type: PathType::Mixed,
        include_slack: false,
        ..RoutingOptions::default()
    };
    let path = cablekit_routing::synthesize_path(a.position, b.position, &conn, &options);
    assert_eq!(path.source, PathSource::DirectTemplate);
    assert_eq!(path.total_length, 10.0);
}

#[test]
fn test_oversized_bundle_falls_back_to_largest_tray() {
    let trunk = CableSpec {
        id: "trunk-250".to_string(),
        name: "Trunk Bundle 250mm".to_string(),
        category: CableCategory::Power,
        max_length: 500.0,
        diameter: 250.0,
        min_bend_radius: 2500.0,
        price_per_meter: 40.0,
        shielding: Shielding::Armored,
    };
    let conduits = Catalog::standard().to_file().conduits;
    let engine = CableEngine::new(Arc::new(Catalog::new(vec![trunk], conduits).unwrap()));
    let (a, b) = pair(10.0);
    let conn = Connection::new("c1", "a", "b", "trunk-250");
    let options = RoutingOptions {
        conduit_required: true,
        ..RoutingOptions::default()
    };

    let result = engine.calculate_cable_path(&a, &b, &conn, &options).unwrap();

    assert!(result.has_warning("UNRESOLVABLE_FILL"));
    assert!(!result.has_warning("LENGTH_EXCEEDED"));
    assert_eq!(result.conduits.len(), 1);
    assert_eq!(result.conduits[0].conduit.id, "tray-300");
    assert!(result.conduits[0].fill_ratio > result.conduits[0].conduit.max_fill_ratio);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.starts_with("Split the cables")));
}

#[test]
fn test_long_fiber_run_recommends_distribution_point() {
    let engine = CableEngine::standard();
    let (a, b) = pair(400.0);
    let conn = Connection::new("c1", "a", "b", "fiber-om3");

    let result = engine
        .calculate_cable_path(&a, &b, &conn, &RoutingOptions::default())
        .unwrap();

    assert!(result.has_warning("LENGTH_EXCEEDED"));
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("intermediate distribution point")));
    assert!(result
        .recommendations
        .iter()
        .all(|r| !r.contains("fiber optic")));
}
