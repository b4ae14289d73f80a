//! Plain data consumed and produced by the planner.

use crate::position::{Bearing, Position};
use crate::spatial::point_in_ring;
use serde::{Deserialize, Serialize};

/// Fixed fee added to every order's item total, in pence.
pub const DELIVERY_FEE_PENCE: u32 = 50;

/// One unit of work: visit every pickup in listed order, then the delivery
/// point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    /// Opaque order identifier, carried through to the emitted records.
    pub id: String,
    pub pickups: Vec<Position>,
    pub delivery: Position,
    /// Total order value in pence, delivery fee included.
    pub cost: u32,
}

/// A polygonal region no path edge may cross.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoFlyZone {
    pub name: String,
    /// Ordered ring of vertices, closed explicitly (first == last) or
    /// implicitly.
    pub vertices: Vec<Position>,
}

impl NoFlyZone {
    /// The directed edges of the ring. When the ring is not explicitly
    /// closed, a closing edge from the last vertex back to the first is
    /// included.
    pub fn edges(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        let closing = match (self.vertices.first(), self.vertices.last()) {
            (Some(&first), Some(&last)) if self.vertices.len() >= 2 && first != last => {
                Some((last, first))
            }
            _ => None,
        };
        self.vertices
            .windows(2)
            .map(|pair| (pair[0], pair[1]))
            .chain(closing)
    }

    /// Ray-casting containment against this zone's ring.
    pub fn contains(&self, point: Position) -> bool {
        point_in_ring(point, &self.vertices)
    }

    /// Structural validation. Returns human-readable problems; empty means
    /// the zone is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.vertices.len() < 3 {
            errors.push(format!(
                "no-fly zone '{}' must have at least 3 vertices",
                self.name
            ));
        }
        for vertex in &self.vertices {
            if !vertex.is_confined() {
                errors.push(format!(
                    "no-fly zone '{}' has a vertex outside the operating area at {}",
                    self.name, vertex
                ));
            }
        }
        errors
    }
}

/// Directed edge record handed to the recorder, one per move, in emission
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightEdge {
    /// Stop id, or [`crate::planner::RETURN_LEG_ID`] for the leg back home.
    pub stop_id: String,
    pub from: Position,
    /// The heading flown for this move; hover for a zero-length edge.
    pub bearing: Bearing,
    pub to: Position,
}

/// Commit record for one completed delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub stop_id: String,
    pub delivered_to: Position,
    pub value: u32,
}

/// Outcome of one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Every position visited, home to home, hover markers included as
    /// repeated points.
    pub positions: Vec<Position>,
    pub total_moves: u32,
    pub delivered_value: u32,
    pub requested_value: u32,
    /// False when the move budget forced an early return.
    pub completed: bool,
}
