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

//! Encoding the object model as GeoJSON
//!
//! Members are written in a fixed order: `type`, the kind specific members,
//! `bbox` when present and finally any custom properties in insertion order.

use std::io::Write;

use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::bounding_box::BoundingBox;
use crate::error::GeoJsonError;
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::object::{GeoJsonObject, GeoObject, GeoObjectType};
use crate::position::Position;
use crate::property::{PropertyMap, PropertyValue};
use crate::reader::{BBOX, COORDINATES, FEATURES, GEOMETRIES, GEOMETRY, ID, PROPERTIES, TYPE};

/// Largest magnitude below which every integral `f64` is exactly an integer (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Extension trait for converting GeoJSON objects to JSON
pub trait ToGeoJson {
    /// Write the GeoJSON encoding of `self` to `writer`
    ///
    /// ```
    /// # use geojson_codec::{GeoJsonError, Point, Position, ToGeoJson};
    /// let mut buffer = Vec::new();
    /// Point::new(Position::new(1.0, 2.0)).to_json(&mut buffer)?;
    /// assert_eq!(buffer.as_slice(), br#"{"type":"Point","coordinates":[1,2]}"#);
    /// # Ok::<(), GeoJsonError>(())
    /// ```
    fn to_json(&self, writer: &mut impl Write) -> Result<(), GeoJsonError> {
        let value = self.to_json_value()?;
        serde_json::to_writer(writer, &value)?;
        Ok(())
    }

    /// Convenience wrapper returning the encoding as a [`String`]
    fn to_json_string(&self) -> Result<String, GeoJsonError> {
        let value = self.to_json_value()?;
        Ok(serde_json::to_string(&value)?)
    }

    /// Convert `self` to a [`serde_json::Value`]
    fn to_json_value(&self) -> Result<Value, GeoJsonError>;
}

macro_rules! impl_to_geojson {
    ($($ty:ty => $encode:ident),* $(,)?) => {
        $(
            impl ToGeoJson for $ty {
                fn to_json_value(&self) -> Result<Value, GeoJsonError> {
                    $encode(self)
                }
            }
        )*
    };
}

impl_to_geojson!(
    Point => encode_point,
    LineString => encode_line_string,
    Polygon => encode_polygon,
    MultiPoint => encode_multi_point,
    MultiLineString => encode_multi_line_string,
    MultiPolygon => encode_multi_polygon,
    GeometryCollection => encode_geometry_collection,
    Geometry => encode_geometry,
    Feature => encode_feature,
    FeatureCollection => encode_feature_collection,
    GeoObject => encode_object,
);

fn encode_object(object: &GeoObject) -> Result<Value, GeoJsonError> {
    match object {
        GeoObject::Geometry(geometry) => encode_geometry(geometry),
        GeoObject::Feature(feature) => encode_feature(feature),
        GeoObject::FeatureCollection(collection) => encode_feature_collection(collection),
    }
}

fn encode_geometry(geometry: &Geometry) -> Result<Value, GeoJsonError> {
    match geometry {
        Geometry::Point(g) => encode_point(g),
        Geometry::LineString(g) => encode_line_string(g),
        Geometry::Polygon(g) => encode_polygon(g),
        Geometry::MultiPoint(g) => encode_multi_point(g),
        Geometry::MultiLineString(g) => encode_multi_line_string(g),
        Geometry::MultiPolygon(g) => encode_multi_polygon(g),
        Geometry::GeometryCollection(g) => encode_geometry_collection(g),
    }
}

fn encode_point(point: &Point) -> Result<Value, GeoJsonError> {
    let coordinates = encode_position(&point.coordinates)?;
    encode_members(point, vec![(COORDINATES, coordinates)], &[COORDINATES])
}

fn encode_line_string(line_string: &LineString) -> Result<Value, GeoJsonError> {
    let coordinates = encode_positions(&line_string.coordinates)?;
    encode_members(line_string, vec![(COORDINATES, coordinates)], &[COORDINATES])
}

fn encode_polygon(polygon: &Polygon) -> Result<Value, GeoJsonError> {
    let coordinates = encode_rings(&polygon.rings)?;
    encode_members(polygon, vec![(COORDINATES, coordinates)], &[COORDINATES])
}

fn encode_multi_point(multi_point: &MultiPoint) -> Result<Value, GeoJsonError> {
    let coordinates = multi_point
        .points
        .iter()
        .map(|point| encode_position(&point.coordinates))
        .collect::<Result<_, _>>()
        .map(Value::Array)?;
    encode_members(multi_point, vec![(COORDINATES, coordinates)], &[COORDINATES])
}

fn encode_multi_line_string(multi_line_string: &MultiLineString) -> Result<Value, GeoJsonError> {
    let coordinates = multi_line_string
        .line_strings
        .iter()
        .map(|line_string| encode_positions(&line_string.coordinates))
        .collect::<Result<_, _>>()
        .map(Value::Array)?;
    encode_members(multi_line_string, vec![(COORDINATES, coordinates)], &[COORDINATES])
}

fn encode_multi_polygon(multi_polygon: &MultiPolygon) -> Result<Value, GeoJsonError> {
    let coordinates = multi_polygon
        .polygons
        .iter()
        .map(|polygon| encode_rings(&polygon.rings))
        .collect::<Result<_, _>>()
        .map(Value::Array)?;
    encode_members(multi_polygon, vec![(COORDINATES, coordinates)], &[COORDINATES])
}

fn encode_geometry_collection(collection: &GeometryCollection) -> Result<Value, GeoJsonError> {
    let geometries = collection
        .geometries
        .iter()
        .map(encode_geometry)
        .collect::<Result<_, _>>()
        .map(Value::Array)?;
    encode_members(collection, vec![(GEOMETRIES, geometries)], &[GEOMETRIES])
}

fn encode_feature(feature: &Feature) -> Result<Value, GeoJsonError> {
    let mut members = Vec::with_capacity(3);
    if let Some(id) = &feature.id {
        members.push((ID, Value::String(id.clone())));
    }
    members.push((GEOMETRY, encode_geometry(&feature.geometry)?));
    members.push((PROPERTIES, Value::Object(encode_properties(&feature.properties)?)));
    encode_members(feature, members, &[ID, GEOMETRY, PROPERTIES])
}

fn encode_feature_collection(collection: &FeatureCollection) -> Result<Value, GeoJsonError> {
    let features = collection
        .features
        .iter()
        .map(encode_feature)
        .collect::<Result<_, _>>()
        .map(Value::Array)?;
    encode_members(collection, vec![(FEATURES, features)], &[FEATURES])
}

/// Assembles an object from `type`, `members`, `bbox` and the custom
/// properties of `object`. Custom properties may not reuse `type`, `bbox`
/// or any name in `reserved`.
fn encode_members(
    object: &impl GeoJsonObject,
    members: Vec<(&'static str, Value)>,
    reserved: &[&str],
) -> Result<Value, GeoJsonError> {
    let object_type = object.object_type();
    trace!(%object_type, "encoding GeoJSON object");

    let custom_properties = object.custom_properties();
    let mut map = Map::new();
    map.insert(TYPE.to_string(), Value::String(object_type.as_str().to_string()));
    for (name, value) in members {
        map.insert(name.to_string(), value);
    }
    if let Some(bbox) = object.bounding_box() {
        map.insert(BBOX.to_string(), encode_bounding_box(bbox)?);
    }
    for (name, value) in custom_properties {
        if name == TYPE || name == BBOX || reserved.contains(&name.as_str()) {
            return Err(reserved_member(name, object_type));
        }
        map.insert(name.clone(), encode_property(value)?);
    }
    Ok(Value::Object(map))
}

fn reserved_member(name: &str, object_type: GeoObjectType) -> GeoJsonError {
    GeoJsonError::UnsupportedValue(format!(
        "custom property '{name}' collides with a member of {object_type}"
    ))
}

/// Integral values within the exact integer range are written without a
/// fractional part, so `1.0` encodes as `1`
fn encode_ordinate(value: f64) -> Result<Value, GeoJsonError> {
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        if value.is_sign_positive() {
            return Ok(Value::from(value as u64));
        }
        // -0.0 falls through to keep its sign
        if value != 0.0 {
            return Ok(Value::from(value as i64));
        }
    }
    encode_f64(value)
}

fn encode_f64(value: f64) -> Result<Value, GeoJsonError> {
    Number::from_f64(value).map(Value::Number).ok_or_else(|| {
        GeoJsonError::UnsupportedValue(format!("{value} is not a valid JSON number"))
    })
}

fn encode_position(position: &Position) -> Result<Value, GeoJsonError> {
    let mut ordinates = Vec::with_capacity(position.len());
    ordinates.push(encode_ordinate(position.longitude())?);
    ordinates.push(encode_ordinate(position.latitude())?);
    if let Some(altitude) = position.altitude() {
        ordinates.push(encode_ordinate(altitude)?);
    }
    Ok(Value::Array(ordinates))
}

fn encode_positions(positions: &[Position]) -> Result<Value, GeoJsonError> {
    positions
        .iter()
        .map(encode_position)
        .collect::<Result<_, _>>()
        .map(Value::Array)
}

fn encode_rings(rings: &[LinearRing]) -> Result<Value, GeoJsonError> {
    rings
        .iter()
        .map(|ring| encode_positions(ring.coordinates()))
        .collect::<Result<_, _>>()
        .map(Value::Array)
}

fn encode_bounding_box(bbox: &BoundingBox) -> Result<Value, GeoJsonError> {
    bbox.ordinates()
        .into_iter()
        .map(encode_ordinate)
        .collect::<Result<_, _>>()
        .map(Value::Array)
}

fn encode_properties(properties: &PropertyMap) -> Result<Map<String, Value>, GeoJsonError> {
    properties
        .iter()
        .map(|(name, value)| Ok((name.clone(), encode_property(value)?)))
        .collect()
}

fn encode_property(value: &PropertyValue) -> Result<Value, GeoJsonError> {
    let value = match value {
        PropertyValue::Null => Value::Null,
        PropertyValue::Bool(b) => Value::Bool(*b),
        PropertyValue::Int32(i) => Value::from(*i),
        PropertyValue::UInt32(u) => Value::from(*u),
        PropertyValue::Int64(i) => Value::from(*i),
        PropertyValue::UInt64(u) => Value::from(*u),
        // keeps the fractional part, 2.0 stays 2.0
        PropertyValue::Float64(f) => encode_f64(*f)?,
        PropertyValue::String(s) => Value::String(s.clone()),
        PropertyValue::Array(items) => items
            .iter()
            .map(encode_property)
            .collect::<Result<_, _>>()
            .map(Value::Array)?,
        PropertyValue::Object(members) => Value::Object(encode_properties(members)?),
    };
    Ok(value)
}
