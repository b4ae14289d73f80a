//! The seam between the planner and whatever persists its output.

use crate::models::{DeliveryRecord, FlightEdge};

/// Receives committed records one at a time, in emission order. Persistence
/// and encoding live behind this trait; the planner only emits.
pub trait FlightRecorder {
    fn record_edge(&mut self, edge: &FlightEdge);
    fn record_delivery(&mut self, delivery: &DeliveryRecord);
}

/// Recorder that keeps everything in memory, for tests and for front ends
/// that serialize after the run.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    pub edges: Vec<FlightEdge>,
    pub deliveries: Vec<DeliveryRecord>,
}

impl FlightRecorder for MemoryRecorder {
    fn record_edge(&mut self, edge: &FlightEdge) {
        self.edges.push(edge.clone());
    }

    fn record_delivery(&mut self, delivery: &DeliveryRecord) {
        self.deliveries.push(delivery.clone());
    }
}
