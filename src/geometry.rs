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

//! The GeoJSON geometry types
//!
//! All geometries are immutable once constructed. Constructors take
//! ownership of (or copy) their input sequences, so later changes to a
//! caller's collection never reach the geometry.

use crate::bounding_box::BoundingBox;
use crate::error::GeoJsonError;
use crate::position::Position;
use crate::property::PropertyMap;

/// Implements read-only sequence access over the `$field` vector of `$ty`
macro_rules! impl_collection {
    ($ty:ty, $field:ident, $item:ty) => {
        impl $ty {
            pub fn len(&self) -> usize {
                self.$field.len()
            }

            pub fn is_empty(&self) -> bool {
                self.$field.is_empty()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.$field.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.$field.iter()
            }
        }

        impl std::ops::Index<usize> for $ty {
            type Output = $item;

            fn index(&self, index: usize) -> &$item {
                &self.$field[index]
            }
        }

        impl<'a> IntoIterator for &'a $ty {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.$field.iter()
            }
        }
    };
}

pub(crate) use impl_collection;

/// A single position
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub(crate) coordinates: Position,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl Point {
    pub fn new(coordinates: Position) -> Self {
        Self {
            coordinates,
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    pub fn coordinates(&self) -> Position {
        self.coordinates
    }
}

impl From<Position> for Point {
    fn from(coordinates: Position) -> Self {
        Self::new(coordinates)
    }
}

/// A sequence of positions. No minimum length is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    pub(crate) coordinates: Vec<Position>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl LineString {
    pub fn new(coordinates: impl IntoIterator<Item = Position>) -> Self {
        Self {
            coordinates: coordinates.into_iter().collect(),
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }
}

/// A closed sequence of at least four positions whose first and last
/// positions are equal.
///
/// The invariant is checked on construction; winding order is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing {
    coordinates: Vec<Position>,
}

impl LinearRing {
    pub const MIN_POSITIONS: usize = 4;

    /// Create a new ring, returning [`GeoJsonError::Validation`] if there
    /// are fewer than four positions or the ring is not closed.
    pub fn try_new(coordinates: impl IntoIterator<Item = Position>) -> Result<Self, GeoJsonError> {
        let coordinates: Vec<Position> = coordinates.into_iter().collect();

        if coordinates.len() < Self::MIN_POSITIONS {
            return Err(GeoJsonError::Validation(format!(
                "The linear ring is required to have at least {} coordinates, found {}",
                Self::MIN_POSITIONS,
                coordinates.len()
            )));
        }

        if coordinates.first() != coordinates.last() {
            return Err(GeoJsonError::Validation(
                "The first and last coordinate of the linear ring are required to be equal"
                    .to_string(),
            ));
        }

        Ok(Self { coordinates })
    }

    pub fn coordinates(&self) -> &[Position] {
        &self.coordinates
    }
}

/// A polygon made of an exterior ring followed by zero or more holes
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub(crate) rings: Vec<LinearRing>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl Polygon {
    pub fn new(rings: impl IntoIterator<Item = LinearRing>) -> Self {
        Self {
            rings: rings.into_iter().collect(),
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    /// Create a polygon without holes from the positions of its exterior ring
    pub fn try_from_exterior(
        coordinates: impl IntoIterator<Item = Position>,
    ) -> Result<Self, GeoJsonError> {
        Ok(Self::new([LinearRing::try_new(coordinates)?]))
    }

    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&LinearRing> {
        self.rings.first()
    }

    pub fn interiors(&self) -> &[LinearRing] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// Positions of every ring, exterior first
    pub fn coordinates(&self) -> Vec<&[Position]> {
        self.rings.iter().map(LinearRing::coordinates).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pub(crate) points: Vec<Point>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl MultiPoint {
    /// Members carry coordinates only: a bounding box or custom properties on
    /// a member point are dropped, as they have no place in the encoding.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points
                .into_iter()
                .map(|point| Point {
                    bbox: None,
                    custom_properties: PropertyMap::new(),
                    ..point
                })
                .collect(),
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn coordinates(&self) -> Vec<Position> {
        self.points.iter().map(Point::coordinates).collect()
    }
}

impl_collection!(MultiPoint, points, Point);

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    pub(crate) line_strings: Vec<LineString>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl MultiLineString {
    /// Members carry coordinates only, see [`MultiPoint::new`]
    pub fn new(line_strings: impl IntoIterator<Item = LineString>) -> Self {
        Self {
            line_strings: line_strings
                .into_iter()
                .map(|line_string| LineString {
                    bbox: None,
                    custom_properties: PropertyMap::new(),
                    ..line_string
                })
                .collect(),
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    pub fn coordinates(&self) -> Vec<&[Position]> {
        self.line_strings
            .iter()
            .map(LineString::coordinates)
            .collect()
    }
}

impl_collection!(MultiLineString, line_strings, LineString);

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub(crate) polygons: Vec<Polygon>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl MultiPolygon {
    /// Members carry coordinates only, see [`MultiPoint::new`]
    pub fn new(polygons: impl IntoIterator<Item = Polygon>) -> Self {
        Self {
            polygons: polygons
                .into_iter()
                .map(|polygon| Polygon {
                    bbox: None,
                    custom_properties: PropertyMap::new(),
                    ..polygon
                })
                .collect(),
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn coordinates(&self) -> Vec<Vec<&[Position]>> {
        self.polygons.iter().map(Polygon::coordinates).collect()
    }
}

impl_collection!(MultiPolygon, polygons, Polygon);

/// A heterogeneous collection of geometries, which may itself contain
/// further collections
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection {
    pub(crate) geometries: Vec<Geometry>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl GeometryCollection {
    pub fn new(geometries: impl IntoIterator<Item = Geometry>) -> Self {
        Self {
            geometries: geometries.into_iter().collect(),
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }
}

impl_collection!(GeometryCollection, geometries, Geometry);

/// Any GeoJSON geometry
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

macro_rules! impl_geometry_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Geometry {
                fn from(geometry: $variant) -> Self {
                    Geometry::$variant(geometry)
                }
            }
        )*
    };
}

impl_geometry_from!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);
