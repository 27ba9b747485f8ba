use cablekit_core::{
    Catalog, CableCategory, CableSpec, Connection, Device, PathType, Point, RoutingOptions,
    Shielding,
};
use cablekit_routing::{
    distance, planar_distance, select_conduit, synthesize_path, AggregationStrategy, CableBundle,
    CableEngine,
};
use proptest::prelude::*;
use std::sync::Arc;

fn coord() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord(), 0.0..10.0f64).prop_map(|(x, y, z)| Point::new_3d(x, y, z))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn test_cable(max_length: f64, diameter: f64) -> CableSpec {
    CableSpec {
        id: "test".to_string(),
        name: "Test Cable".to_string(),
        category: CableCategory::CopperData,
        max_length,
        diameter,
        min_bend_radius: 4.0 * diameter,
        price_per_meter: 1.0,
        shielding: Shielding::Unshielded,
    }
}

proptest! {
    #[test]
    fn prop_distance_matches_formula(p1 in point(), p2 in point()) {
        let (dx, dy, dz) = (p2.x - p1.x, p2.y - p1.y, p2.z - p1.z);
        prop_assert_eq!(distance(p1, p2), (dx * dx + dy * dy + dz * dz).sqrt());
        prop_assert_eq!(distance(p1, p2), distance(p2, p1));
    }

    #[test]
    fn prop_direct_path_is_distance(from in point(), to in point()) {
        let conn = Connection::new("c", "a", "b", "utp-cat6");
        let options = RoutingOptions { include_slack: false, ..RoutingOptions::default() };
        let path = synthesize_path(from, to, &conn, &options);
        prop_assert_eq!(path.total_length, distance(from, to));
    }

    #[test]
    fn prop_slack_is_linear(from in point(), to in point(), slack in 0.0..100.0f64) {
        let conn = Connection::new("c", "a", "b", "utp-cat6");
        let base = RoutingOptions { slack_percentage: 0.0, ..RoutingOptions::default() };
        let slacked = RoutingOptions { slack_percentage: slack, ..RoutingOptions::default() };

        let without = synthesize_path(from, to, &conn, &base).total_length;
        let with = synthesize_path(from, to, &conn, &slacked).total_length;
        prop_assert!(close(with, without * (1.0 + slack / 100.0)));
    }

    #[test]
    fn prop_ceiling_adds_two_heights(from in point(), to in point(), height in 0.0..20.0f64) {
        let conn = Connection::new("c", "a", "b", "utp-cat6");
        let options = RoutingOptions {
            path_type: PathType::Ceiling,
            ceiling_height: height,
            include_slack: false,
            ..RoutingOptions::default()
        };
        let path = synthesize_path(from, to, &conn, &options);
        prop_assert!(close(path.total_length, planar_distance(from, to) + 2.0 * height));
    }

    #[test]
    fn prop_long_runs_warn(max_length in 1.0..200.0f64, extra in 0.01..50.0f64) {
        let conduits = Catalog::standard().to_file().conduits;
        let catalog = Catalog::new(vec![test_cable(max_length, 5.0)], conduits).unwrap();
        let engine = CableEngine::new(Arc::new(catalog));

        let a = Device::new("a", Point::new(0.0, 0.0));
        let b = Device::new("b", Point::new(max_length + extra, 0.0));
        let conn = Connection::new("c", "a", "b", "test");
        let options = RoutingOptions { include_slack: false, ..RoutingOptions::default() };

        let result = engine.calculate_cable_path(&a, &b, &conn, &options).unwrap();
        prop_assert!(result.has_warning("LENGTH_EXCEEDED"));
    }

    #[test]
    fn prop_selected_conduit_is_smallest_fit(diameter in 0.5..150.0f64) {
        let catalog = Catalog::standard();
        let cable = test_cable(100.0, diameter);
        let area = cable.cross_section_area();
        let selection = select_conduit(&catalog.conduits, &[CableBundle::single(&cable)]);

        if selection.fallback {
            prop_assert!(catalog.conduits.iter().all(|c| c.fill_ratio(area) > c.max_fill_ratio));
        } else {
            prop_assert!(selection.fill_ratio <= selection.conduit.max_fill_ratio);
            let smaller_fits = catalog
                .conduits
                .iter()
                .filter(|c| c.internal_size < selection.conduit.internal_size)
                .any(|c| c.fill_ratio(area) <= c.max_fill_ratio);
            prop_assert!(!smaller_fits);
        }
    }

    #[test]
    fn prop_report_ignores_order_and_strategy(
        order in Just((0..12).collect::<Vec<usize>>()).prop_shuffle()
    ) {
        let families = ["utp-cat6", "fiber-om3", "coax-rg6", "unknown"];
        let devices: Vec<Device> = (0..6)
            .map(|i| Device::new(format!("d{i}"), Point::new(i as f64 * 7.5, (i % 3) as f64 * 4.0)))
            .collect();
        let connections: Vec<Connection> = (0..12)
            .map(|i| {
                let conn = Connection::new(
                    format!("c{i:02}"),
                    format!("d{}", i % 6),
                    format!("d{}", (i * 5 + 1) % 7),
                    families[i % families.len()],
                );
                if i % 3 == 0 {
                    conn.with_routing(RoutingOptions {
                        path_type: PathType::Ceiling,
                        conduit_required: true,
                        ..RoutingOptions::default()
                    })
                } else {
                    conn
                }
            })
            .collect();
        let shuffled: Vec<Connection> = order.iter().map(|&i| connections[i].clone()).collect();

        let sequential = CableEngine::standard().generate_cable_report(&connections, &devices);
        let parallel = CableEngine::standard()
            .with_strategy(AggregationStrategy::Parallel)
            .generate_cable_report(&shuffled, &devices);

        prop_assert_eq!(sequential, parallel);
    }
}
