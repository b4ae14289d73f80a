//! Random stop generation for demos and stress runs.

use crate::models::{Stop, DELIVERY_FEE_PENCE};
use crate::position::{Position, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use rand::Rng;

// Keeps generated points a step away from the boundary.
const MARGIN: f64 = 0.0002;

/// Generate `count` single-pickup stops at uniformly random confined
/// positions, shaped like a real day's orders.
pub fn generate_random_stops(count: usize) -> Vec<Stop> {
    let mut rng = rand::rng();
    (0..count)
        .map(|index| Stop {
            id: format!("order-{:04}", index + 1),
            pickups: vec![random_confined_position(&mut rng)],
            delivery: random_confined_position(&mut rng),
            cost: DELIVERY_FEE_PENCE + rng.random_range(100..2500),
        })
        .collect()
}

fn random_confined_position<R: Rng>(rng: &mut R) -> Position {
    Position::new(
        rng.random_range(MIN_LONGITUDE + MARGIN..MAX_LONGITUDE - MARGIN),
        rng.random_range(MIN_LATITUDE + MARGIN..MAX_LATITUDE - MARGIN),
    )
}
