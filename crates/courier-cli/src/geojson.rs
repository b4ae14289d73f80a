//! GeoJSON encoding of a planned route.

use courier_core::RoutePlan;
use serde_json::{json, Value};

/// Encode the run's position sequence as a single-feature LineString
/// collection, with the summary metrics as feature properties.
pub fn route_to_feature_collection(plan: &RoutePlan) -> Value {
    let coordinates: Vec<Value> = plan
        .positions
        .iter()
        .map(|point| json!([point.longitude, point.latitude]))
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "total_moves": plan.total_moves,
                "delivered_value": plan.delivered_value,
                "requested_value": plan.requested_value,
                "completed": plan.completed,
            },
            "geometry": {
                "type": "LineString",
                "coordinates": coordinates,
            },
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::Position;

    #[test]
    fn feature_collection_has_one_linestring() {
        let plan = RoutePlan {
            positions: vec![
                Position::new(-3.186874, 55.944494),
                Position::new(-3.186724, 55.944494),
            ],
            total_moves: 1,
            delivered_value: 0,
            requested_value: 0,
            completed: true,
        };

        let collection = route_to_feature_collection(&plan);
        assert_eq!(collection["type"], "FeatureCollection");
        let geometry = &collection["features"][0]["geometry"];
        assert_eq!(geometry["type"], "LineString");
        assert_eq!(geometry["coordinates"].as_array().unwrap().len(), 2);
        assert_eq!(geometry["coordinates"][0][0], -3.186874);
    }
}
