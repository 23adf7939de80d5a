use crate::{
    core::geo::Point,
    data::geojson::Feature,
    edit::translate::translate,
    traits::Projector,
    Result,
};

/// A single active drag over one feature.
///
/// The session keeps the feature as it was when the drag began and the mouse
/// position the drag started at. Each update translates that original
/// feature by the cumulative delta, so intermediate updates never accumulate
/// projection round-trip error.
#[derive(Debug, Clone)]
pub struct DragSession {
    origin: Feature,
    start: Point,
    is_point: bool,
}

impl DragSession {
    /// Begins a drag at the given mouse position.
    ///
    /// `is_point` marks the feature as logically a point; it is
    /// caller-supplied, matching [`translate`]'s contract.
    pub fn begin(feature: Feature, start: Point, is_point: bool) -> Self {
        log::trace!("drag started at ({}, {})", start.x, start.y);
        Self {
            origin: feature,
            start,
            is_point,
        }
    }

    /// The pixel delta between the drag start and `current`.
    pub fn delta(&self, current: Point) -> Point {
        current.subtract(&self.start)
    }

    /// The feature as it was when the drag began.
    pub fn origin(&self) -> &Feature {
        &self.origin
    }

    /// Produces the feature translated to the current mouse position.
    pub fn update<P: Projector>(&self, current: Point, projector: &P) -> Result<Feature> {
        translate(&self.origin, self.start, current, projector, self.is_point)
    }

    /// Ends the drag, returning the feature at its final position.
    pub fn finish<P: Projector>(self, current: Point, projector: &P) -> Result<Feature> {
        translate(&self.origin, self.start, current, projector, self.is_point)
    }

    /// Abandons the drag, returning the feature untouched.
    pub fn cancel(self) -> Feature {
        self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::data::geojson::Geometry;

    struct FlatProjection;

    impl Projector for FlatProjection {
        fn project(&self, lat_lng: &LatLng) -> Point {
            Point::new(lat_lng.lng, -lat_lng.lat)
        }

        fn unproject(&self, point: &Point) -> LatLng {
            LatLng::new(-point.y, point.x)
        }
    }

    fn line_feature() -> Feature {
        Feature::from_geometry(Geometry::LineString {
            coordinates: vec![[0.0, 0.0], [2.0, 2.0]],
        })
    }

    #[test]
    fn test_updates_do_not_accumulate() {
        let session = DragSession::begin(line_feature(), Point::new(100.0, 100.0), false);

        // Wander around, then return to the start: the feature must be back
        // where it began, not drifted by intermediate updates.
        session.update(Point::new(140.0, 80.0), &FlatProjection).unwrap();
        session.update(Point::new(60.0, 130.0), &FlatProjection).unwrap();
        let back = session.update(Point::new(100.0, 100.0), &FlatProjection).unwrap();

        assert_eq!(back.geometry, session.origin().geometry);
    }

    #[test]
    fn test_finish_applies_cumulative_delta() {
        let session = DragSession::begin(line_feature(), Point::new(10.0, 10.0), false);

        let finished = session
            .finish(Point::new(13.0, 6.0), &FlatProjection)
            .unwrap();

        match finished.geometry {
            Some(Geometry::LineString { ref coordinates }) => {
                assert_eq!(coordinates[0], [3.0, 4.0]);
                assert_eq!(coordinates[1], [5.0, 6.0]);
            }
            other => panic!("expected a LineString, got {:?}", other),
        }
    }

    #[test]
    fn test_cancel_returns_original() {
        let feature = line_feature();
        let session = DragSession::begin(feature.clone(), Point::new(0.0, 0.0), false);

        assert_eq!(session.cancel(), feature);
    }

    #[test]
    fn test_delta() {
        let session = DragSession::begin(line_feature(), Point::new(5.0, 8.0), false);
        assert_eq!(session.delta(Point::new(9.0, 2.0)), Point::new(4.0, -6.0));
    }
}
