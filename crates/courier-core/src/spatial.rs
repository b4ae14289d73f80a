//! Planar geometry tests that keep the drone out of no-fly zones.

use crate::models::NoFlyZone;
use crate::position::Position;

/// Ray-casting parity test: whether `point` lies inside the closed ring
/// `ring`. A point exactly on an edge has undefined parity.
pub fn point_in_ring(point: Position, ring: &[Position]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (ring[i].longitude, ring[i].latitude);
        let (xj, yj) = (ring[j].longitude, ring[j].latitude);

        if ((yi > point.latitude) != (yj > point.latitude))
            && point.longitude < (xj - xi) * (point.latitude - yi) / (yj - yi) + xi
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Whether segments (a1, a2) and (b1, b2) intersect.
///
/// Works in slope/intercept form, special-casing vertical segments to avoid
/// dividing by zero. The interior test is strict, so a segment that merely
/// touches the other at an endpoint does not count as an intersection, and a
/// zero-length segment never intersects anything.
pub fn segments_intersect(a1: Position, a2: Position, b1: Position, b2: Position) -> bool {
    if a1 == a2 || b1 == b2 {
        return false;
    }

    // Segments whose longitude intervals do not overlap cannot meet.
    if a1.longitude.max(a2.longitude) < b1.longitude.min(b2.longitude)
        || b1.longitude.max(b2.longitude) < a1.longitude.min(a2.longitude)
    {
        return false;
    }

    let a_vertical = a1.longitude == a2.longitude;
    let b_vertical = b1.longitude == b2.longitude;

    if a_vertical && b_vertical {
        return false;
    }
    if a_vertical {
        return (b1.longitude > a1.longitude) != (b2.longitude > a1.longitude);
    }
    if b_vertical {
        return (a1.longitude > b1.longitude) != (a2.longitude > b1.longitude);
    }

    let gradient_a = (a1.latitude - a2.latitude) / (a1.longitude - a2.longitude);
    let gradient_b = (b1.latitude - b2.latitude) / (b1.longitude - b2.longitude);
    if gradient_a == gradient_b {
        // parallel
        return false;
    }

    let intercept_a = a1.latitude - gradient_a * a1.longitude;
    let intercept_b = b1.latitude - gradient_b * b1.longitude;
    let crossing_longitude = (intercept_b - intercept_a) / (gradient_a - gradient_b);

    // The algebraic crossing point must fall strictly inside the overlap of
    // both longitude intervals.
    let lower = a1
        .longitude
        .min(a2.longitude)
        .max(b1.longitude.min(b2.longitude));
    let upper = a1
        .longitude
        .max(a2.longitude)
        .min(b1.longitude.max(b2.longitude));

    crossing_longitude > lower && crossing_longitude < upper
}

/// The single authority the planner consults before accepting a candidate
/// step: does the segment from `from` to `to` cross any edge of any zone?
pub fn crosses_any_zone(from: Position, to: Position, zones: &[NoFlyZone]) -> bool {
    zones.iter().any(|zone| {
        zone.edges()
            .any(|(edge_start, edge_end)| segments_intersect(from, to, edge_start, edge_end))
    })
}
