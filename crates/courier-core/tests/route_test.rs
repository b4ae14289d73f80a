//! End-to-end planning scenarios: direct routes, detours around no-fly
//! zones, and move-budget exhaustion.

use courier_core::{
    crosses_any_zone, FlightLimits, FlightPlanner, MemoryRecorder, NoFlyZone, Position, Stop,
    HOME, RETURN_LEG_ID,
};

fn single_pickup_stop(id: &str, pickup: Position, delivery: Position, cost: u32) -> Stop {
    Stop {
        id: id.to_string(),
        pickups: vec![pickup],
        delivery,
        cost,
    }
}

#[test]
fn unobstructed_day_visits_every_point_and_returns_home() {
    let pickup = Position::new(-3.1880, 55.9452);
    let delivery = Position::new(-3.1862, 55.9438);
    let stops = vec![single_pickup_stop("order-1", pickup, delivery, 450)];

    let planner = FlightPlanner::new(HOME, &[], FlightLimits::default());
    let mut recorder = MemoryRecorder::default();
    let plan = planner.plan(&stops, &mut recorder).unwrap();

    assert!(plan.completed);
    assert_eq!(plan.delivered_value, 450);
    assert_eq!(plan.requested_value, 450);

    assert_eq!(plan.positions.first(), Some(&HOME));
    assert!(plan.positions.last().unwrap().close_to(HOME));
    assert!(plan.positions.iter().any(|point| point.close_to(pickup)));
    assert!(plan.positions.iter().any(|point| point.close_to(delivery)));

    // One position per visited point: edges and positions line up.
    assert_eq!(plan.positions.len() as u32, plan.total_moves + 1);
    assert_eq!(recorder.edges.len() as u32, plan.total_moves);

    // Record stream: order edges first, then the return leg.
    let first_return = recorder
        .edges
        .iter()
        .position(|edge| edge.stop_id == RETURN_LEG_ID)
        .unwrap();
    assert!(recorder.edges[..first_return]
        .iter()
        .all(|edge| edge.stop_id == "order-1"));
    assert!(recorder.edges[first_return..]
        .iter()
        .all(|edge| edge.stop_id == RETURN_LEG_ID));
}

#[test]
fn blocking_zone_forces_a_detour_but_never_a_crossing() {
    // A tall bar of no-fly space sits on the straight line between the
    // pickup (west of it) and the delivery (east of it).
    let zones = vec![NoFlyZone {
        name: "bar".to_string(),
        vertices: vec![
            Position::new(-3.1876, 55.9436),
            Position::new(-3.1873, 55.9436),
            Position::new(-3.1873, 55.9454),
            Position::new(-3.1876, 55.9454),
        ],
    }];
    let pickup = Position::new(-3.1885, 55.9445);
    let delivery = Position::new(-3.1855, 55.9445);
    let stops = vec![single_pickup_stop("order-1", pickup, delivery, 600)];

    let planner = FlightPlanner::new(HOME, &zones, FlightLimits::default());
    let mut recorder = MemoryRecorder::default();
    let plan = planner.plan(&stops, &mut recorder).unwrap();

    assert!(plan.completed);
    assert!(plan.positions.iter().any(|point| point.close_to(pickup)));
    assert!(plan.positions.iter().any(|point| point.close_to(delivery)));
    assert!(plan.positions.last().unwrap().close_to(HOME));

    for pair in plan.positions.windows(2) {
        assert!(
            !crosses_any_zone(pair[0], pair[1], &zones),
            "edge {} -> {} enters the no-fly zone",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn exhausted_move_budget_forces_an_early_return_home() {
    // Far-apart stops whose legs cannot all fit in a small budget.
    let pickup = Position::new(-3.1910, 55.9430);
    let delivery = Position::new(-3.1855, 55.9458);
    let stops = vec![
        single_pickup_stop("order-1", pickup, delivery, 500),
        single_pickup_stop("order-2", pickup, delivery, 700),
        single_pickup_stop("order-3", pickup, delivery, 900),
    ];

    let limits = FlightLimits {
        max_moves: 120,
        ..FlightLimits::default()
    };
    let planner = FlightPlanner::new(HOME, &[], limits);
    let mut recorder = MemoryRecorder::default();
    let plan = planner.plan(&stops, &mut recorder).unwrap();

    assert!(!plan.completed);
    assert!(plan.total_moves <= 120);
    assert!(plan.positions.last().unwrap().close_to(HOME));
    assert!(plan.delivered_value < plan.requested_value);
    assert_eq!(plan.requested_value, 2100);

    // Only committed stops produced delivery records.
    assert_eq!(
        recorder.deliveries.len() as u32,
        u32::from(plan.delivered_value > 0)
    );
}

#[test]
fn multi_pickup_stop_visits_pickups_in_listed_order() {
    let first_pickup = Position::new(-3.1890, 55.9450);
    let second_pickup = Position::new(-3.1860, 55.9452);
    let delivery = Position::new(-3.1870, 55.9432);
    let stops = vec![Stop {
        id: "order-1".to_string(),
        pickups: vec![first_pickup, second_pickup],
        delivery,
        cost: 800,
    }];

    let planner = FlightPlanner::new(HOME, &[], FlightLimits::default());
    let mut recorder = MemoryRecorder::default();
    let plan = planner.plan(&stops, &mut recorder).unwrap();

    let index_of = |target: Position| {
        plan.positions
            .iter()
            .position(|point| point.close_to(target))
            .unwrap()
    };
    let first_index = index_of(first_pickup);
    let second_index = index_of(second_pickup);
    let delivery_index = index_of(delivery);
    assert!(first_index < second_index);
    assert!(second_index < delivery_index);

    // A hover marker at each pickup and at the delivery.
    let hovers = plan
        .positions
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .count();
    assert_eq!(hovers, 3);
}
