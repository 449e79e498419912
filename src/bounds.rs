// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Bounding box aggregation
//!
//! An explicit bounding box on the queried object always takes precedence
//! over the coordinates it describes. Otherwise the box is computed from
//! positions, or for collections from the boxes of each element. A
//! FeatureCollection folds the geometries of its features, so an explicit
//! box on a feature does not widen or narrow the collection. Computed boxes
//! never carry altitude.

use crate::bounding_box::BoundingBox;
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::object::{GeoJsonObject, GeoObject};
use crate::position::Position;

/// Computes the 2D extent of a GeoJSON object
///
/// ```
/// # use geojson_codec::{BoundingBox, CalculateBoundingBox, LineString, Position};
/// let line = LineString::new([Position::new(3.0, -1.0), Position::new(-2.0, 4.0)]);
/// assert_eq!(line.calculate_bounding_box(), BoundingBox::new(-2.0, -1.0, 3.0, 4.0));
/// ```
///
/// An object without any position yields the empty extent, with `west` and
/// `south` at [`f64::MAX`] and `east` and `north` at [`f64::MIN`].
pub trait CalculateBoundingBox {
    fn calculate_bounding_box(&self) -> BoundingBox;
}

/// Running min/max over longitudes and latitudes
#[derive(Debug, Clone, Copy)]
struct Bounder {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
}

impl Bounder {
    fn empty() -> Self {
        Self {
            west: f64::MAX,
            south: f64::MAX,
            east: f64::MIN,
            north: f64::MIN,
        }
    }

    fn update_position(&mut self, position: &Position) {
        self.west = self.west.min(position.longitude());
        self.south = self.south.min(position.latitude());
        self.east = self.east.max(position.longitude());
        self.north = self.north.max(position.latitude());
    }

    fn update_positions<'a>(&mut self, positions: impl IntoIterator<Item = &'a Position>) {
        positions
            .into_iter()
            .for_each(|position| self.update_position(position));
    }

    fn update_box(&mut self, bbox: &BoundingBox) {
        self.west = self.west.min(bbox.west());
        self.south = self.south.min(bbox.south());
        self.east = self.east.max(bbox.east());
        self.north = self.north.max(bbox.north());
    }

    fn finish(self) -> BoundingBox {
        BoundingBox::new(self.west, self.south, self.east, self.north)
    }
}

/// Returns the explicit box of `object` or computes one with `visit`
fn explicit_or(object: &impl GeoJsonObject, visit: impl FnOnce(&mut Bounder)) -> BoundingBox {
    if let Some(bbox) = object.bounding_box() {
        return *bbox;
    }
    let mut bounder = Bounder::empty();
    visit(&mut bounder);
    bounder.finish()
}

impl CalculateBoundingBox for Point {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| b.update_position(&self.coordinates))
    }
}

impl CalculateBoundingBox for LineString {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| b.update_positions(&self.coordinates))
    }
}

impl CalculateBoundingBox for Polygon {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| {
            self.rings
                .iter()
                .for_each(|ring| b.update_positions(ring.coordinates()))
        })
    }
}

impl CalculateBoundingBox for MultiPoint {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| {
            self.points
                .iter()
                .for_each(|point| b.update_position(&point.coordinates))
        })
    }
}

impl CalculateBoundingBox for MultiLineString {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| {
            self.line_strings
                .iter()
                .for_each(|line_string| b.update_positions(&line_string.coordinates))
        })
    }
}

impl CalculateBoundingBox for MultiPolygon {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| {
            self.polygons
                .iter()
                .flat_map(|polygon| polygon.rings.iter())
                .for_each(|ring| b.update_positions(ring.coordinates()))
        })
    }
}

impl CalculateBoundingBox for GeometryCollection {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| {
            self.geometries
                .iter()
                .for_each(|geometry| b.update_box(&geometry.calculate_bounding_box()))
        })
    }
}

impl CalculateBoundingBox for Geometry {
    fn calculate_bounding_box(&self) -> BoundingBox {
        match self {
            Geometry::Point(g) => g.calculate_bounding_box(),
            Geometry::LineString(g) => g.calculate_bounding_box(),
            Geometry::Polygon(g) => g.calculate_bounding_box(),
            Geometry::MultiPoint(g) => g.calculate_bounding_box(),
            Geometry::MultiLineString(g) => g.calculate_bounding_box(),
            Geometry::MultiPolygon(g) => g.calculate_bounding_box(),
            Geometry::GeometryCollection(g) => g.calculate_bounding_box(),
        }
    }
}

impl CalculateBoundingBox for Feature {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| b.update_box(&self.geometry.calculate_bounding_box()))
    }
}

impl CalculateBoundingBox for FeatureCollection {
    fn calculate_bounding_box(&self) -> BoundingBox {
        explicit_or(self, |b| {
            self.features
                .iter()
                .for_each(|feature| b.update_box(&feature.geometry.calculate_bounding_box()))
        })
    }
}

impl CalculateBoundingBox for GeoObject {
    fn calculate_bounding_box(&self) -> BoundingBox {
        match self {
            GeoObject::Geometry(g) => g.calculate_bounding_box(),
            GeoObject::Feature(f) => f.calculate_bounding_box(),
            GeoObject::FeatureCollection(c) => c.calculate_bounding_box(),
        }
    }
}
