use geo::LineString;
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::json;

use crate::model::RouteCandidate;
use crate::tracking::strip_markup;

impl RouteCandidate {
    /// Convert the route to a `GeoJSON` `FeatureCollection` for map display.
    ///
    /// Produces one LineString feature for the route polyline plus one Point
    /// feature per step carrying its index, stripped instruction and leg
    /// figures.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = Vec::with_capacity(self.len() + 1);

        let polyline: LineString = self
            .steps()
            .iter()
            .map(|step| (step.endpoint.x(), step.endpoint.y()))
            .collect::<Vec<_>>()
            .into();

        let value = json!({
            "type": "Feature",
            "geometry": Geometry::new((&polyline).into()),
            "properties": {
                "feature_type": "route_polyline",
                "summary": self.summary(),
                "total_distance_m": self.total_distance_m(),
                "total_duration_s": self.total_duration_s(),
            }
        });
        features.push(serde_json::from_value::<Feature>(value).unwrap());

        for (idx, step) in self.steps().iter().enumerate() {
            let value = json!({
                "type": "Feature",
                "geometry": Geometry::new((&step.endpoint).into()),
                "properties": {
                    "feature_type": "step",
                    "step_index": idx,
                    "instruction": strip_markup(&step.instruction),
                    "distance_m": step.distance_m,
                    "duration_s": step.duration_s,
                }
            });
            features.push(serde_json::from_value::<Feature>(value).unwrap());
        }

        FeatureCollection {
            features,
            bbox: None,
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> String {
        serde_json::to_string(&self.to_geojson()).unwrap_or_default()
    }
}
