//! Planner tunables and hard bounds.

use serde::{Deserialize, Serialize};

/// Limits for one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightLimits {
    /// Maximum discrete moves in one run, return leg included.
    pub max_moves: u32,
    /// How many ten-degree widenings (each side of the direct bearing) the
    /// avoidance search probes before declaring the destination unreachable.
    pub max_deflection_steps: u32,
    /// Upper bound on boundary-following iterations per leg.
    pub max_turn_iterations: u32,
}

impl Default for FlightLimits {
    fn default() -> Self {
        Self {
            max_moves: 1500,
            // 18 widenings of +-10 degrees cover all 36 headings.
            max_deflection_steps: 18,
            max_turn_iterations: 1024,
        }
    }
}
