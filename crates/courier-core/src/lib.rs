pub mod limits;
pub mod models;
pub mod pathfinder;
pub mod planner;
pub mod position;
pub mod recorder;
pub mod sample;
pub mod spatial;

pub use limits::FlightLimits;
pub use models::{DeliveryRecord, FlightEdge, NoFlyZone, RoutePlan, Stop, DELIVERY_FEE_PENCE};
pub use pathfinder::{Pathfinder, RouteError};
pub use planner::{FlightPlanner, RETURN_LEG_ID};
pub use position::{Bearing, BearingError, Position, HOME, STEP_DISTANCE};
pub use recorder::{FlightRecorder, MemoryRecorder};
pub use sample::generate_random_stops;
pub use spatial::{crosses_any_zone, point_in_ring, segments_intersect};
