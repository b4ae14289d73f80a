//! Route assembly: sequences a day's stops into committed legs under the
//! move budget, always keeping enough moves in hand to get home.

use crate::limits::FlightLimits;
use crate::models::{DeliveryRecord, FlightEdge, NoFlyZone, RoutePlan, Stop};
use crate::pathfinder::{Pathfinder, RouteError};
use crate::position::Position;
use crate::recorder::FlightRecorder;
use tracing::{debug, info, warn};

/// Stop id used for edges on a leg back home.
pub const RETURN_LEG_ID: &str = "return";

/// Plans one closed-loop run over an ordered list of stops.
pub struct FlightPlanner<'a> {
    home: Position,
    zones: &'a [NoFlyZone],
    limits: FlightLimits,
}

/// Accumulator for one run. Owned by a single [`FlightPlanner::plan`] call,
/// never shared and never reused.
struct FlightState {
    move_count: u32,
    delivered_value: u32,
    emitted: Vec<Position>,
}

impl FlightState {
    fn commit(&mut self, leg_id: &str, leg: &[Position], recorder: &mut dyn FlightRecorder) {
        for pair in leg.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            recorder.record_edge(&FlightEdge {
                stop_id: leg_id.to_string(),
                from,
                bearing: from.bearing_to(to),
                to,
            });
            self.move_count += 1;
        }

        for (index, node) in leg.iter().enumerate() {
            debug_assert!(node.is_confined(), "emitted an unconfined position");
            // Legs start where the previous one ended; drop the shared joint
            // so only hover markers repeat in the output sequence.
            if index == 0 && self.emitted.last() == Some(node) {
                continue;
            }
            self.emitted.push(*node);
        }
    }
}

impl<'a> FlightPlanner<'a> {
    pub fn new(home: Position, zones: &'a [NoFlyZone], limits: FlightLimits) -> Self {
        Self {
            home,
            zones,
            limits,
        }
    }

    /// Plan one run over `stops` in the given order, streaming edge and
    /// delivery records into `recorder` as each leg commits.
    ///
    /// Budget exhaustion is not an error: the run commits a return leg from
    /// wherever the drone is and reports partial completion. Errors mean a
    /// destination could not be reached at all.
    pub fn plan(
        &self,
        stops: &[Stop],
        recorder: &mut dyn FlightRecorder,
    ) -> Result<RoutePlan, RouteError> {
        let pathfinder = Pathfinder::new(self.zones, &self.limits);
        let requested_value: u32 = stops.iter().map(|stop| stop.cost).sum();
        let mut state = FlightState {
            move_count: 0,
            delivered_value: 0,
            emitted: vec![self.home],
        };
        let mut previous = self.home;

        for stop in stops {
            let leg_start = previous;
            let mut leg = vec![leg_start];

            for pickup in &stop.pickups {
                let sub_path = pathfinder.route_between(previous, *pickup)?;
                extend_leg(&mut leg, &sub_path);
                previous = leg.last().copied().unwrap_or(previous);
                // Hover while the order is collected.
                leg.push(previous);
            }

            let sub_path = pathfinder.route_between(previous, stop.delivery)?;
            extend_leg(&mut leg, &sub_path);
            previous = leg.last().copied().unwrap_or(previous);
            // Hover while the order is handed over.
            leg.push(previous);

            let leg_edges = (leg.len() - 1) as u32;
            let return_leg = pathfinder.route_between(previous, self.home)?;
            let return_edges = (return_leg.len() - 1) as u32;

            if state.move_count + leg_edges + return_edges > self.limits.max_moves {
                // The drone never flew this leg, so the forced return starts
                // from the leg's start position.
                warn!(
                    stop = %stop.id,
                    moves = state.move_count,
                    "move budget exhausted, returning home early"
                );
                let forced_return = pathfinder.route_between(leg_start, self.home)?;
                state.commit(RETURN_LEG_ID, &forced_return, recorder);
                return Ok(self.summarize(state, requested_value, false));
            }

            recorder.record_delivery(&DeliveryRecord {
                stop_id: stop.id.clone(),
                delivered_to: stop.delivery,
                value: stop.cost,
            });
            state.commit(&stop.id, &leg, recorder);
            state.delivered_value += stop.cost;
            debug!(stop = %stop.id, edges = leg_edges, "leg committed");
        }

        let return_leg = pathfinder.route_between(previous, self.home)?;
        state.commit(RETURN_LEG_ID, &return_leg, recorder);

        info!(
            moves = state.move_count,
            delivered = state.delivered_value,
            requested = requested_value,
            "run complete"
        );
        Ok(self.summarize(state, requested_value, true))
    }

    fn summarize(&self, state: FlightState, requested_value: u32, completed: bool) -> RoutePlan {
        RoutePlan {
            positions: state.emitted,
            total_moves: state.move_count,
            delivered_value: state.delivered_value,
            requested_value,
            completed,
        }
    }
}

/// Append a sub-path to a leg. Sub-paths start at the leg's current tail, so
/// the duplicate joint point is skipped.
fn extend_leg(leg: &mut Vec<Position>, sub_path: &[Position]) {
    let skip = usize::from(leg.last() == sub_path.first() && !sub_path.is_empty());
    leg.extend_from_slice(&sub_path[skip..]);
}
