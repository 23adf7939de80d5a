use crate::{
    core::geo::{LatLng, Point},
    data::geojson::{Feature, Geometry},
    traits::Projector,
    DrawError, Result,
};

/// Translates a feature's geometry by the pixel delta between two mouse
/// positions, expressed back in geographic coordinates.
///
/// Every vertex is projected to container pixels, shifted by
/// `current - initial`, and unprojected. The input feature is not modified;
/// a new feature is returned. Callers wanting in-place semantics reassign.
///
/// When `is_point` is set the feature is returned unchanged; point
/// geometries never move through this path. The flag is caller-supplied and
/// is not derived from the geometry type.
///
/// Geometries outside `Polygon`, `LineString` and `MultiPoint` cannot be
/// translated and produce a [`DrawError::Geometry`], as does a feature with
/// no geometry at all.
pub fn translate<P: Projector>(
    feature: &Feature,
    initial: Point,
    current: Point,
    projector: &P,
    is_point: bool,
) -> Result<Feature> {
    if is_point {
        return Ok(feature.clone());
    }

    let dx = current.x - initial.x;
    let dy = current.y - initial.y;

    let geometry = match &feature.geometry {
        Some(geometry) => geometry,
        None => return Err(DrawError::Geometry("feature has no geometry".to_string()).into()),
    };

    let translated = match geometry {
        Geometry::Polygon { coordinates } => Geometry::Polygon {
            coordinates: coordinates
                .iter()
                .map(|ring| {
                    ring.iter()
                        .map(|pair| translate_vertex(*pair, dx, dy, projector))
                        .collect()
                })
                .collect(),
        },
        Geometry::LineString { coordinates } => Geometry::LineString {
            coordinates: coordinates
                .iter()
                .map(|pair| translate_vertex(*pair, dx, dy, projector))
                .collect(),
        },
        Geometry::MultiPoint { coordinates } => Geometry::MultiPoint {
            coordinates: coordinates
                .iter()
                .map(|pair| translate_vertex(*pair, dx, dy, projector))
                .collect(),
        },
        other => {
            log::debug!("refusing to translate {} geometry", other.type_name());
            return Err(DrawError::Geometry(format!(
                "cannot translate {} geometry",
                other.type_name()
            ))
            .into());
        }
    };

    Ok(Feature {
        id: feature.id.clone(),
        geometry: Some(translated),
        properties: feature.properties.clone(),
    })
}

// The projection call is fed latitude-first; the result is written back
// longitude-first, GeoJSON order.
fn translate_vertex<P: Projector>(pair: [f64; 2], dx: f64, dy: f64, projector: &P) -> [f64; 2] {
    let projected = projector.project(&LatLng::new(pair[1], pair[0]));
    let moved = projector.unproject(&Point::new(projected.x + dx, projected.y + dy));
    [moved.lng, moved.lat]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A distortion-free linear projection: one pixel east per degree of
    /// longitude, one pixel south per degree of latitude.
    struct FlatProjection;

    impl Projector for FlatProjection {
        fn project(&self, lat_lng: &LatLng) -> Point {
            Point::new(lat_lng.lng, -lat_lng.lat)
        }

        fn unproject(&self, point: &Point) -> LatLng {
            LatLng::new(-point.y, point.x)
        }
    }

    fn unit_square() -> Feature {
        Feature::from_geometry(Geometry::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]],
        })
    }

    #[test]
    fn test_zero_delta_is_identity() {
        let feature = unit_square();
        let at = Point::new(40.0, 40.0);

        let result = translate(&feature, at, at, &FlatProjection, false).unwrap();
        assert_eq!(result.geometry, feature.geometry);
    }

    #[test]
    fn test_polygon_shift() {
        let feature = unit_square();

        let result = translate(
            &feature,
            Point::new(0.0, 0.0),
            Point::new(10.0, -5.0),
            &FlatProjection,
            false,
        )
        .unwrap();

        // dx = +10 pixels is +10 degrees of longitude; dy = -5 pixels is
        // +5 degrees of latitude under the flat projection.
        match result.geometry {
            Some(Geometry::Polygon { ref coordinates }) => {
                assert_eq!(
                    coordinates[0],
                    vec![[10.0, 5.0], [10.0, 6.0], [11.0, 6.0], [11.0, 5.0]]
                );
            }
            other => panic!("expected a Polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_ring_structure_preserved() {
        let feature = Feature::from_geometry(Geometry::Polygon {
            coordinates: vec![
                vec![[0.0, 0.0], [0.0, 4.0], [4.0, 4.0], [4.0, 0.0]],
                vec![[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 1.0]],
            ],
        });

        let result = translate(
            &feature,
            Point::new(0.0, 0.0),
            Point::new(3.0, 7.0),
            &FlatProjection,
            false,
        )
        .unwrap();

        match result.geometry {
            Some(Geometry::Polygon { ref coordinates }) => {
                assert_eq!(coordinates.len(), 2);
                assert_eq!(coordinates[0].len(), 4);
                assert_eq!(coordinates[1].len(), 4);
            }
            other => panic!("expected a Polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_line_string_vertex_count_preserved() {
        let feature = Feature::from_geometry(Geometry::LineString {
            coordinates: vec![[0.0, 0.0], [1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]],
        });

        let result = translate(
            &feature,
            Point::new(5.0, 5.0),
            Point::new(6.0, 4.0),
            &FlatProjection,
            false,
        )
        .unwrap();

        match result.geometry {
            Some(Geometry::LineString { ref coordinates }) => {
                assert_eq!(coordinates.len(), 5);
                assert_eq!(coordinates[0], [1.0, 1.0]);
            }
            other => panic!("expected a LineString, got {:?}", other),
        }
    }

    #[test]
    fn test_point_flag_passes_feature_through() {
        let feature = Feature::from_geometry(Geometry::Point {
            coordinates: [-74.0060, 40.7128],
        });

        let result = translate(
            &feature,
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            &FlatProjection,
            true,
        )
        .unwrap();

        // The point flag short-circuits: coordinates come back untouched
        // no matter the delta.
        assert_eq!(result, feature);
    }

    #[test]
    fn test_unflagged_point_is_an_error() {
        let feature = Feature::from_geometry(Geometry::Point {
            coordinates: [0.0, 0.0],
        });

        let result = translate(
            &feature,
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            &FlatProjection,
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_multi_polygon_is_an_error() {
        let feature = Feature::from_geometry(Geometry::MultiPolygon {
            coordinates: vec![vec![vec![[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]]],
        });

        let result = translate(
            &feature,
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            &FlatProjection,
            false,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_geometry_is_an_error() {
        let feature = Feature {
            id: None,
            geometry: None,
            properties: None,
        };

        let result = translate(
            &feature,
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            &FlatProjection,
            false,
        );
        assert!(result.is_err());
    }
}
