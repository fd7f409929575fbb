use fitroute::config::PlannerConfig;
use fitroute::models::{ExerciseType, GeoPoint, RouteRequest, WaypointKind};
use fitroute::services::energy;
use fitroute::services::pareto::dominance::{dominates, normalize};
use fitroute::services::route_planner::RoutePlanner;

fn request(
    target_calories: f64,
    max_time_minutes: u32,
    exercise_type: ExerciseType,
) -> RouteRequest {
    RouteRequest::new(
        GeoPoint::new(39.9042, 116.4074).unwrap(),
        target_calories,
        max_time_minutes,
        exercise_type,
        70.0,
    )
    .unwrap()
}

#[test]
fn test_routes_are_closed_loops_within_budget() {
    let planner = RoutePlanner::new(PlannerConfig::default());

    for exercise in [
        ExerciseType::Walking,
        ExerciseType::Running,
        ExerciseType::Cycling,
        ExerciseType::Hiking,
    ] {
        for seed in 0..5 {
            let req = request(300.0, 45, exercise);
            let routes = planner.generate_routes(&req, 3, seed).unwrap();
            assert!(!routes.is_empty(), "{} seed {}", exercise, seed);

            for labeled in &routes {
                let route = &labeled.route;
                assert_eq!(labeled.exercise_type, exercise);
                assert!(route.time_minutes <= 45.0 + 1e-9);
                assert!((0.5..=1.5).contains(&route.intensity));
                assert!((0.0..=100.0).contains(&route.greenery_score));

                let first = route.waypoints.first().unwrap();
                let last = route.waypoints.last().unwrap();
                assert_eq!(first.kind, WaypointKind::Start);
                assert_eq!(last.kind, WaypointKind::End);
                assert_eq!(first.point(), req.start);
                assert_eq!(last.point(), req.start);
                for (i, wp) in route.waypoints.iter().enumerate() {
                    assert_eq!(wp.order as usize, i);
                }
            }
        }
    }
}

#[test]
fn test_route_calories_follow_energy_model() {
    let planner = RoutePlanner::new(PlannerConfig::default());
    let req = request(250.0, 60, ExerciseType::Jogging);

    for labeled in planner.generate_routes(&req, 3, 11).unwrap() {
        let route = &labeled.route;
        let expected = energy::calories(
            ExerciseType::Jogging,
            route.time_minutes,
            70.0,
            route.intensity,
        )
        .unwrap();
        assert!((route.calories_burn - expected).abs() < 1e-6);
    }
}

#[test]
fn test_returned_routes_do_not_dominate_each_other() {
    let planner = RoutePlanner::new(PlannerConfig::default());
    let req = request(400.0, 90, ExerciseType::Walking);

    for seed in 0..10 {
        let routes = planner.generate_routes(&req, 3, seed).unwrap();
        let candidates: Vec<_> = routes.iter().map(|r| r.route.clone()).collect();
        let objectives = normalize(&candidates, req.target_calories);

        for (i, a) in objectives.iter().enumerate() {
            for (j, b) in objectives.iter().enumerate() {
                if i != j {
                    assert!(!dominates(a, b), "seed {}: route {} dominates {}", seed, i, j);
                }
            }
        }
    }
}

#[test]
fn test_same_seed_same_routes() {
    let planner = RoutePlanner::new(PlannerConfig::default());
    let req = request(200.0, 40, ExerciseType::BriskWalking);

    let a = planner.generate_routes(&req, 3, 99).unwrap();
    let b = planner.generate_routes(&req, 3, 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_tiny_time_budget_still_plans() {
    let planner = RoutePlanner::new(PlannerConfig::default());
    let req = request(50.0, 1, ExerciseType::Walking);

    let routes = planner.generate_routes(&req, 3, 3).unwrap();
    assert!(!routes.is_empty());
    for labeled in routes {
        assert!(labeled.route.time_minutes <= 1.0 + 1e-9);
    }
}

#[test]
fn test_unreachable_target_returns_best_effort() {
    let planner = RoutePlanner::new(PlannerConfig::default());
    // Far above what 20 minutes of walking can burn
    let req = request(2000.0, 20, ExerciseType::Walking);

    let routes = planner.generate_routes(&req, 3, 8).unwrap();
    assert!(!routes.is_empty());
    let max_possible = energy::calories(ExerciseType::Walking, 20.0, 70.0, 1.5).unwrap();
    for labeled in routes {
        assert!(labeled.route.calories_burn <= max_possible + 1e-6);
    }
}

#[test]
fn test_route_near_antimeridian() {
    let planner = RoutePlanner::new(PlannerConfig::default());
    let req = RouteRequest::new(
        GeoPoint::new(-16.5, 179.99).unwrap(),
        150.0,
        30,
        ExerciseType::Running,
        80.0,
    )
    .unwrap();

    let routes = planner.generate_routes(&req, 2, 21).unwrap();
    assert!(!routes.is_empty());
    assert!(routes.len() <= 2);
    for labeled in routes {
        for wp in &labeled.route.waypoints {
            assert!((-180.0..=180.0).contains(&wp.lng));
        }
    }
}

#[test]
fn test_routes_plan_from_the_poles() {
    let planner = RoutePlanner::new(PlannerConfig::default());

    for (lat, lng) in [(90.0, 0.0), (-89.995, 10.0), (89.99, -170.0)] {
        let start = GeoPoint::new(lat, lng).unwrap();
        let req = RouteRequest::new(start, 200.0, 40, ExerciseType::Walking, 70.0).unwrap();

        for seed in 0..3 {
            let routes = planner.generate_routes(&req, 3, seed).unwrap();
            assert!(!routes.is_empty(), "({}, {}) seed {}", lat, lng, seed);
            for labeled in &routes {
                let route = &labeled.route;
                assert!(route.time_minutes <= 40.0 + 1e-9);
                assert!(route.distance_m > 0.0);
                assert_eq!(route.waypoints.first().unwrap().point(), start);
                assert_eq!(route.waypoints.last().unwrap().point(), start);
                for wp in &route.waypoints {
                    assert!(GeoPoint::new(wp.lat, wp.lng).is_ok());
                }
            }
        }
    }
}
