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

//! The root of the GeoJSON object model: [`GeoObject`], its [`GeoObjectType`]
//! tag and the [`GeoJsonObject`] capabilities shared by every object.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::bounding_box::BoundingBox;
use crate::error::GeoJsonError;
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::property::{PropertyMap, PropertyValue};

/// The value of the GeoJSON `"type"` member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoObjectType {
    Point,
    MultiPoint,
    Polygon,
    MultiPolygon,
    LineString,
    MultiLineString,
    GeometryCollection,
    Feature,
    FeatureCollection,
}

impl GeoObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoObjectType::Point => "Point",
            GeoObjectType::MultiPoint => "MultiPoint",
            GeoObjectType::Polygon => "Polygon",
            GeoObjectType::MultiPolygon => "MultiPolygon",
            GeoObjectType::LineString => "LineString",
            GeoObjectType::MultiLineString => "MultiLineString",
            GeoObjectType::GeometryCollection => "GeometryCollection",
            GeoObjectType::Feature => "Feature",
            GeoObjectType::FeatureCollection => "FeatureCollection",
        }
    }

    /// Returns true for the seven geometry types
    pub fn is_geometry(&self) -> bool {
        !matches!(
            self,
            GeoObjectType::Feature | GeoObjectType::FeatureCollection
        )
    }
}

impl FromStr for GeoObjectType {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(GeoObjectType::Point),
            "MultiPoint" => Ok(GeoObjectType::MultiPoint),
            "Polygon" => Ok(GeoObjectType::Polygon),
            "MultiPolygon" => Ok(GeoObjectType::MultiPolygon),
            "LineString" => Ok(GeoObjectType::LineString),
            "MultiLineString" => Ok(GeoObjectType::MultiLineString),
            "GeometryCollection" => Ok(GeoObjectType::GeometryCollection),
            "Feature" => Ok(GeoObjectType::Feature),
            "FeatureCollection" => Ok(GeoObjectType::FeatureCollection),
            _ => Err(GeoJsonError::UnsupportedType(s.to_string())),
        }
    }
}

impl Display for GeoObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities shared by every GeoJSON object
pub trait GeoJsonObject {
    /// The GeoJSON `"type"` of this object
    fn object_type(&self) -> GeoObjectType;

    /// The explicit `"bbox"` of this object, if one was given
    fn bounding_box(&self) -> Option<&BoundingBox>;

    /// Unrecognized members, in the order they were read
    fn custom_properties(&self) -> &PropertyMap;

    fn custom_property(&self, name: &str) -> Option<&PropertyValue> {
        self.custom_properties().get(name)
    }
}

/// Any decoded GeoJSON document
#[derive(Debug, Clone, PartialEq)]
pub enum GeoObject {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoObject {
    /// Returns the geometry if this is a geometry object
    pub fn as_geometry(&self) -> Option<&Geometry> {
        match self {
            GeoObject::Geometry(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_feature(&self) -> Option<&Feature> {
        match self {
            GeoObject::Feature(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_feature_collection(&self) -> Option<&FeatureCollection> {
        match self {
            GeoObject::FeatureCollection(c) => Some(c),
            _ => None,
        }
    }
}

impl FromStr for GeoObject {
    type Err = GeoJsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::reader::parse_str(s)
    }
}

impl GeoJsonObject for Geometry {
    fn object_type(&self) -> GeoObjectType {
        match self {
            Geometry::Point(g) => g.object_type(),
            Geometry::LineString(g) => g.object_type(),
            Geometry::Polygon(g) => g.object_type(),
            Geometry::MultiPoint(g) => g.object_type(),
            Geometry::MultiLineString(g) => g.object_type(),
            Geometry::MultiPolygon(g) => g.object_type(),
            Geometry::GeometryCollection(g) => g.object_type(),
        }
    }

    fn bounding_box(&self) -> Option<&BoundingBox> {
        match self {
            Geometry::Point(g) => g.bounding_box(),
            Geometry::LineString(g) => g.bounding_box(),
            Geometry::Polygon(g) => g.bounding_box(),
            Geometry::MultiPoint(g) => g.bounding_box(),
            Geometry::MultiLineString(g) => g.bounding_box(),
            Geometry::MultiPolygon(g) => g.bounding_box(),
            Geometry::GeometryCollection(g) => g.bounding_box(),
        }
    }

    fn custom_properties(&self) -> &PropertyMap {
        match self {
            Geometry::Point(g) => g.custom_properties(),
            Geometry::LineString(g) => g.custom_properties(),
            Geometry::Polygon(g) => g.custom_properties(),
            Geometry::MultiPoint(g) => g.custom_properties(),
            Geometry::MultiLineString(g) => g.custom_properties(),
            Geometry::MultiPolygon(g) => g.custom_properties(),
            Geometry::GeometryCollection(g) => g.custom_properties(),
        }
    }
}

impl GeoJsonObject for GeoObject {
    fn object_type(&self) -> GeoObjectType {
        match self {
            GeoObject::Geometry(g) => g.object_type(),
            GeoObject::Feature(f) => f.object_type(),
            GeoObject::FeatureCollection(c) => c.object_type(),
        }
    }

    fn bounding_box(&self) -> Option<&BoundingBox> {
        match self {
            GeoObject::Geometry(g) => g.bounding_box(),
            GeoObject::Feature(f) => f.bounding_box(),
            GeoObject::FeatureCollection(c) => c.bounding_box(),
        }
    }

    fn custom_properties(&self) -> &PropertyMap {
        match self {
            GeoObject::Geometry(g) => g.custom_properties(),
            GeoObject::Feature(f) => f.custom_properties(),
            GeoObject::FeatureCollection(c) => c.custom_properties(),
        }
    }
}

fn type_mismatch(expected: &str, found: &GeoObject) -> GeoJsonError {
    GeoJsonError::TypeMismatch(format!(
        "The provided JSON does not represent a {expected} object, found {}",
        found.object_type()
    ))
}

/// Implements the [`GeoJsonObject`] capabilities and the `with_*` builder
/// methods for a struct with `bbox` and `custom_properties` fields
macro_rules! impl_geo_object {
    ($($ty:ident => $tag:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Attach an explicit bounding box
                pub fn with_bounding_box(self, bbox: BoundingBox) -> Self {
                    Self {
                        bbox: Some(bbox),
                        ..self
                    }
                }

                /// Attach members to be written after the GeoJSON members
                pub fn with_custom_properties(self, custom_properties: PropertyMap) -> Self {
                    Self {
                        custom_properties,
                        ..self
                    }
                }
            }

            impl GeoJsonObject for $ty {
                fn object_type(&self) -> GeoObjectType {
                    GeoObjectType::$tag
                }

                fn bounding_box(&self) -> Option<&BoundingBox> {
                    self.bbox.as_ref()
                }

                fn custom_properties(&self) -> &PropertyMap {
                    &self.custom_properties
                }
            }
        )*
    };
}

impl_geo_object!(
    Point => Point,
    LineString => LineString,
    Polygon => Polygon,
    MultiPoint => MultiPoint,
    MultiLineString => MultiLineString,
    MultiPolygon => MultiPolygon,
    GeometryCollection => GeometryCollection,
    Feature => Feature,
    FeatureCollection => FeatureCollection,
);

/// Conversions between [`GeoObject`] and a concrete geometry type
macro_rules! impl_geometry_conversions {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for GeoObject {
                fn from(geometry: $variant) -> Self {
                    GeoObject::Geometry(Geometry::$variant(geometry))
                }
            }

            impl TryFrom<GeoObject> for $variant {
                type Error = GeoJsonError;

                fn try_from(object: GeoObject) -> Result<Self, Self::Error> {
                    match object {
                        GeoObject::Geometry(Geometry::$variant(g)) => Ok(g),
                        other => Err(type_mismatch(stringify!($variant), &other)),
                    }
                }
            }

            impl TryFrom<Geometry> for $variant {
                type Error = GeoJsonError;

                fn try_from(geometry: Geometry) -> Result<Self, Self::Error> {
                    match geometry {
                        Geometry::$variant(g) => Ok(g),
                        other => Err(type_mismatch(
                            stringify!($variant),
                            &GeoObject::Geometry(other),
                        )),
                    }
                }
            }
        )*
    };
}

impl_geometry_conversions!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection
);

impl From<Geometry> for GeoObject {
    fn from(geometry: Geometry) -> Self {
        GeoObject::Geometry(geometry)
    }
}

impl From<Feature> for GeoObject {
    fn from(feature: Feature) -> Self {
        GeoObject::Feature(feature)
    }
}

impl From<FeatureCollection> for GeoObject {
    fn from(collection: FeatureCollection) -> Self {
        GeoObject::FeatureCollection(collection)
    }
}

impl TryFrom<GeoObject> for Geometry {
    type Error = GeoJsonError;

    fn try_from(object: GeoObject) -> Result<Self, Self::Error> {
        match object {
            GeoObject::Geometry(g) => Ok(g),
            other => Err(type_mismatch("Geometry", &other)),
        }
    }
}

impl TryFrom<GeoObject> for Feature {
    type Error = GeoJsonError;

    fn try_from(object: GeoObject) -> Result<Self, Self::Error> {
        match object {
            GeoObject::Feature(f) => Ok(f),
            other => Err(type_mismatch("Feature", &other)),
        }
    }
}

impl TryFrom<GeoObject> for FeatureCollection {
    type Error = GeoJsonError;

    fn try_from(object: GeoObject) -> Result<Self, Self::Error> {
        match object {
            GeoObject::FeatureCollection(c) => Ok(c),
            other => Err(type_mismatch("FeatureCollection", &other)),
        }
    }
}
