//! Reachability search between two points under the no-fly-zone constraint.
//!
//! The common case is a direct quantized walk. When that is blocked, the
//! search probes deflected headings on both sides of the direct bearing and
//! then follows the obstacle boundary, cutting back toward the destination
//! as soon as a clear straight line exists.

use crate::limits::FlightLimits;
use crate::models::NoFlyZone;
use crate::position::{Bearing, Position};
use crate::spatial::crosses_any_zone;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    /// Every probed heading out of `from` crossed a zone. The destination is
    /// unreachable from here under the current obstacle set.
    #[error("no heading from {from} clears the no-fly zones toward {to}")]
    Unreachable { from: Position, to: Position },
    /// The wall-following search ran out of probe points or hit its
    /// iteration bound without ever finding a clear line to the destination.
    #[error("boundary search gave up between {from} and {to}")]
    BoundarySearchExhausted { from: Position, to: Position },
}

/// Which way the path rotates while it hugs an obstacle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnDirection {
    /// The probe deflected anticlockwise of the direct bearing, so the path
    /// turns back clockwise.
    Clockwise,
    /// The probe deflected clockwise, so the path turns back anticlockwise.
    Anticlockwise,
}

impl TurnDirection {
    /// One ten-degree increment further toward the destination bearing.
    fn tighten(self, bearing: Bearing) -> Bearing {
        match self {
            TurnDirection::Clockwise => bearing.rotated(-1),
            TurnDirection::Anticlockwise => bearing.rotated(1),
        }
    }

    /// Whether `turn` has reached or passed the bearing pointing straight at
    /// the destination. Bounds how far a turn may tighten.
    fn reached_direct(self, turn: Bearing, direct: Bearing) -> bool {
        match (turn.degrees(), direct.degrees()) {
            (Some(turn_degrees), Some(direct_degrees)) => match self {
                TurnDirection::Clockwise => turn_degrees <= direct_degrees,
                TurnDirection::Anticlockwise => turn_degrees >= direct_degrees,
            },
            _ => true,
        }
    }
}

/// Finds point sequences between an origin and a destination that stay out
/// of every no-fly zone. Borrows the zone set and limits for one run.
pub struct Pathfinder<'a> {
    zones: &'a [NoFlyZone],
    limits: &'a FlightLimits,
}

impl<'a> Pathfinder<'a> {
    pub fn new(zones: &'a [NoFlyZone], limits: &'a FlightLimits) -> Self {
        Self { zones, limits }
    }

    /// Path from `origin` to (close to) `destination`, inclusive of both
    /// ends: a direct quantized walk when the straight line is clear,
    /// otherwise the obstacle-avoidance search.
    pub fn route_between(
        &self,
        origin: Position,
        destination: Position,
    ) -> Result<Vec<Position>, RouteError> {
        match self.straight_walk(origin, destination) {
            Some(path) => Ok(path),
            None => self.avoid_zones(origin, destination),
        }
    }

    /// Repeatedly step along the rounded bearing to the destination.
    /// Returns `None` as soon as a step would cross a zone.
    fn straight_walk(&self, origin: Position, destination: Position) -> Option<Vec<Position>> {
        let mut path = vec![origin];
        let mut previous = origin;

        while !previous.close_to(destination) {
            let next = previous.step(previous.bearing_to(destination));
            if crosses_any_zone(previous, next, self.zones) {
                return None;
            }
            debug_assert!(next.is_confined(), "walked out of the operating area");
            previous = next;
            path.push(previous);
        }
        Some(path)
    }

    /// Bounded probe: walk at a fixed bearing until the path leaves the
    /// operating area or gets close to the destination. `None` when a step
    /// would cross a zone; otherwise the path holds at least the origin.
    fn probe(
        &self,
        origin: Position,
        destination: Position,
        bearing: Bearing,
    ) -> Option<Vec<Position>> {
        let mut path = vec![origin];
        let mut current = origin;
        let mut next = origin.step(bearing);

        while next.is_confined() && !next.close_to(destination) {
            if crosses_any_zone(current, next, self.zones) {
                return None;
            }
            path.push(next);
            current = next;
            next = next.step(bearing);
        }
        if next.close_to(destination) {
            if crosses_any_zone(current, next, self.zones) {
                return None;
            }
            path.push(next);
        }
        Some(path)
    }

    /// Probe deflections of +-10k degrees off the direct bearing, widening
    /// one increment per round, until one side clears the obstacle. The
    /// round count is bounded by the 36 possible headings; running out means
    /// the destination is unreachable.
    fn avoid_zones(
        &self,
        origin: Position,
        destination: Position,
    ) -> Result<Vec<Position>, RouteError> {
        let direct = origin.bearing_to(destination);
        if direct.is_hover() {
            return Ok(vec![origin]);
        }

        for widening in 1..=self.limits.max_deflection_steps {
            let anticlockwise = direct.rotated(widening as i32);
            let clockwise = direct.rotated(-(widening as i32));

            if let Some(path) = self.probe(origin, destination, anticlockwise) {
                return self.follow_boundary(
                    origin,
                    path,
                    destination,
                    anticlockwise.rotated(-1),
                    TurnDirection::Clockwise,
                );
            }
            if let Some(path) = self.probe(origin, destination, clockwise) {
                return self.follow_boundary(
                    origin,
                    path,
                    destination,
                    clockwise.rotated(1),
                    TurnDirection::Anticlockwise,
                );
            }
        }
        Err(RouteError::Unreachable {
            from: origin,
            to: destination,
        })
    }

    /// Greedy wall-following. Walks the probe's points in order, cutting
    /// straight to the destination as soon as a clear direct walk exists;
    /// otherwise it tightens the turn one ten-degree increment at a time in
    /// the chosen direction and re-probes from the turning point.
    ///
    /// Each iteration either consumes a prefix of the probe or closes the
    /// angular gap to the destination bearing, so the loop terminates; the
    /// explicit bound backs that up for pathological zone layouts.
    fn follow_boundary(
        &self,
        origin: Position,
        mut probe: Vec<Position>,
        destination: Position,
        mut turn: Bearing,
        direction: TurnDirection,
    ) -> Result<Vec<Position>, RouteError> {
        let mut path: Vec<Position> = Vec::new();

        for _ in 0..self.limits.max_turn_iterations {
            let mut turned: Option<Vec<Position>> = None;

            for node in probe.iter().copied() {
                if let Some(direct_path) = self.straight_walk(node, destination) {
                    path.extend(direct_path);
                    return Ok(path);
                }
                if let Some(mut turn_path) = self.probe(node, destination, turn) {
                    // Tighten as far toward the direct bearing as stays
                    // clear of the zones.
                    let direct = node.bearing_to(destination);
                    turn = direction.tighten(turn);
                    while !direction.reached_direct(turn, direct) {
                        match self.probe(node, destination, turn) {
                            Some(tighter) => {
                                turn_path = tighter;
                                turn = direction.tighten(turn);
                            }
                            None => break,
                        }
                    }
                    turned = Some(turn_path);
                    break;
                }
                path.push(node);
            }

            match turned {
                Some(next_probe) => probe = next_probe,
                None => break,
            }
        }
        Err(RouteError::BoundarySearchExhausted {
            from: origin,
            to: destination,
        })
    }
}
