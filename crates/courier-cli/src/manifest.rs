//! Day manifest parsing: the stop list and no-fly zones for one service day.

use anyhow::Context;
use chrono::NaiveDate;
use courier_core::{NoFlyZone, Stop};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Everything the planner needs for one day, already resolved into
/// coordinates by whatever produced the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayManifest {
    /// Service date the orders were placed for.
    pub date: NaiveDate,
    pub stops: Vec<Stop>,
    #[serde(default)]
    pub no_fly_zones: Vec<NoFlyZone>,
}

impl DayManifest {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading manifest {}", path.display()))?;
        let manifest: DayManifest = serde_json::from_str(&raw)
            .with_context(|| format!("parsing manifest {}", path.display()))?;
        Ok(manifest)
    }

    /// Structural checks before planning. Returns human-readable problems;
    /// empty means the manifest is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for zone in &self.no_fly_zones {
            errors.extend(zone.validate());
        }
        for stop in &self.stops {
            if !stop.delivery.is_confined() {
                errors.push(format!(
                    "stop '{}' delivers outside the operating area",
                    stop.id
                ));
            }
            for pickup in &stop.pickups {
                if !pickup.is_confined() {
                    errors.push(format!(
                        "stop '{}' picks up outside the operating area",
                        stop.id
                    ));
                }
            }
        }
        errors
    }
}
