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

//! Decoding GeoJSON into the object model
//!
//! The strict entry points ([`parse_str`], [`parse_slice`], [`parse_reader`],
//! [`parse_value`] and their `_as` variants) propagate every failure. A
//! [`Reader`] built with [`ReaderBuilder`] can instead be configured to
//! suppress decoding errors, in which case the read yields `Ok(None)`.
//!
//! ```
//! # use geojson_codec::{parse_str, parse_str_as, GeoJsonError, GeoObject, Point};
//! let point: Point = parse_str_as(r#"{"type":"Point","coordinates":[1,2]}"#)?;
//! assert_eq!(point.coordinates().longitude(), 1.0);
//!
//! let object = parse_str(r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{}}"#)?;
//! assert!(matches!(object, GeoObject::Feature(_)));
//! # Ok::<(), GeoJsonError>(())
//! ```

use std::io::Read;

use serde_json::{Map, Value};
use tracing::{trace, warn};

use crate::bounding_box::BoundingBox;
use crate::error::GeoJsonError;
use crate::feature::{Feature, FeatureCollection};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
use crate::object::{GeoObject, GeoObjectType};
use crate::position::Position;
use crate::property::{PropertyMap, PropertyValue};

pub(crate) const TYPE: &str = "type";
pub(crate) const BBOX: &str = "bbox";
pub(crate) const COORDINATES: &str = "coordinates";
pub(crate) const GEOMETRY: &str = "geometry";
pub(crate) const GEOMETRIES: &str = "geometries";
pub(crate) const FEATURES: &str = "features";
pub(crate) const ID: &str = "id";
pub(crate) const PROPERTIES: &str = "properties";

/// Default limit on the nesting of GeoJSON objects and property values
///
/// Each nested GeometryCollection costs two levels of JSON nesting, so this
/// stays well within the 128 levels `serde_json` parses.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Configuration for decoding GeoJSON, see [`ReaderBuilder::build`]
#[derive(Debug, Clone, Copy)]
pub struct ReaderBuilder {
    suppress_errors: bool,
    max_depth: usize,
}

impl Default for ReaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderBuilder {
    /// Create a new [`ReaderBuilder`] that propagates all errors and allows
    /// [`DEFAULT_MAX_DEPTH`] levels of nesting
    pub fn new() -> Self {
        Self {
            suppress_errors: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets if decoding errors should be logged and reported as `Ok(None)`
    /// instead of being returned.
    ///
    /// Errors from a caller-supplied [`Read`] are always returned.
    pub fn with_suppress_errors(self, suppress_errors: bool) -> Self {
        Self {
            suppress_errors,
            ..self
        }
    }

    /// Sets the maximum nesting of GeoJSON objects (through `geometries`,
    /// `geometry` and `features`) and of property values, counted in levels
    /// below the top-level object. Deeper input fails with
    /// [`GeoJsonError::DepthLimitExceeded`].
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn build(self) -> Reader {
        Reader {
            suppress_errors: self.suppress_errors,
            max_depth: self.max_depth,
        }
    }
}

/// Decodes GeoJSON documents according to its [`ReaderBuilder`] configuration.
///
/// A `Reader` holds no state between calls and may be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Reader {
    suppress_errors: bool,
    max_depth: usize,
}

impl Default for Reader {
    fn default() -> Self {
        ReaderBuilder::new().build()
    }
}

impl Reader {
    /// Decode an already parsed JSON value
    pub fn read_value(&self, value: &Value) -> Result<Option<GeoObject>, GeoJsonError> {
        self.recover(self.decode(value))
    }

    /// Decode JSON text
    pub fn read_str(&self, json: &str) -> Result<Option<GeoObject>, GeoJsonError> {
        self.recover(self.decode_str(json))
    }

    /// Decode UTF-8 encoded JSON
    pub fn read_slice(&self, json: &[u8]) -> Result<Option<GeoObject>, GeoJsonError> {
        self.recover(self.decode_slice(json))
    }

    /// Decode UTF-8 encoded JSON from a stream
    pub fn read<R: Read>(&self, reader: R) -> Result<Option<GeoObject>, GeoJsonError> {
        self.recover(self.decode_reader(reader))
    }

    /// Decode JSON text that must represent a `T`, otherwise failing with
    /// [`GeoJsonError::TypeMismatch`]
    pub fn read_as<T>(&self, json: &str) -> Result<Option<T>, GeoJsonError>
    where
        T: TryFrom<GeoObject, Error = GeoJsonError>,
    {
        self.recover(self.decode_str(json).and_then(T::try_from))
    }

    fn recover<T>(&self, result: Result<T, GeoJsonError>) -> Result<Option<T>, GeoJsonError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(error) if self.suppress_errors && error.is_decode_error() => {
                warn!(%error, "suppressed GeoJSON decoding error");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    fn decode(&self, value: &Value) -> Result<GeoObject, GeoJsonError> {
        self.read_object(value, 0)
    }

    fn decode_str(&self, json: &str) -> Result<GeoObject, GeoJsonError> {
        let value: Value = serde_json::from_str(json)?;
        self.decode(&value)
    }

    fn decode_slice(&self, json: &[u8]) -> Result<GeoObject, GeoJsonError> {
        let value: Value = serde_json::from_slice(json)?;
        self.decode(&value)
    }

    fn decode_reader<R: Read>(&self, reader: R) -> Result<GeoObject, GeoJsonError> {
        let value: Value = serde_json::from_reader(reader)?;
        self.decode(&value)
    }

    fn check_depth(&self, depth: usize) -> Result<(), GeoJsonError> {
        if depth > self.max_depth {
            return Err(GeoJsonError::DepthLimitExceeded(self.max_depth));
        }
        Ok(())
    }

    fn enter<'a>(&self, value: &'a Value, depth: usize) -> Result<&'a Map<String, Value>, GeoJsonError> {
        self.check_depth(depth)?;
        value.as_object().ok_or_else(|| {
            GeoJsonError::InvalidFormat(format!(
                "GeoJSON object must be a JSON object, found {}",
                json_kind(value)
            ))
        })
    }

    fn read_object(&self, value: &Value, depth: usize) -> Result<GeoObject, GeoJsonError> {
        let object = self.enter(value, depth)?;
        let object_type = read_type(object)?;
        let bbox = read_bounding_box(object)?;
        trace!(%object_type, depth, "decoding GeoJSON object");

        match object_type {
            GeoObjectType::Feature => self
                .read_feature(object, bbox, depth)
                .map(GeoObject::Feature),
            GeoObjectType::FeatureCollection => self
                .read_feature_collection(object, bbox, depth)
                .map(GeoObject::FeatureCollection),
            _ => self
                .read_geometry_members(object, object_type, bbox, depth)
                .map(GeoObject::Geometry),
        }
    }

    fn read_geometry(&self, value: &Value, depth: usize) -> Result<Geometry, GeoJsonError> {
        let object = self.enter(value, depth)?;
        let object_type = read_type(object)?;
        let bbox = read_bounding_box(object)?;
        trace!(%object_type, depth, "decoding GeoJSON geometry");
        self.read_geometry_members(object, object_type, bbox, depth)
    }

    fn read_geometry_members(
        &self,
        object: &Map<String, Value>,
        object_type: GeoObjectType,
        bbox: Option<BoundingBox>,
        depth: usize,
    ) -> Result<Geometry, GeoJsonError> {
        let geometry = match object_type {
            GeoObjectType::Point => {
                let (coordinates, custom_properties) = self.coordinate_members(object, depth)?;
                Geometry::Point(Point {
                    coordinates: read_position(coordinates)?,
                    bbox,
                    custom_properties,
                })
            }
            GeoObjectType::LineString => {
                let (coordinates, custom_properties) = self.coordinate_members(object, depth)?;
                Geometry::LineString(LineString {
                    coordinates: read_positions(coordinates)?,
                    bbox,
                    custom_properties,
                })
            }
            GeoObjectType::MultiPoint => {
                let (coordinates, custom_properties) = self.coordinate_members(object, depth)?;
                Geometry::MultiPoint(MultiPoint {
                    points: read_positions(coordinates)?
                        .into_iter()
                        .map(Point::new)
                        .collect(),
                    bbox,
                    custom_properties,
                })
            }
            GeoObjectType::Polygon => {
                let (coordinates, custom_properties) = self.coordinate_members(object, depth)?;
                Geometry::Polygon(Polygon {
                    rings: read_rings(coordinates)?,
                    bbox,
                    custom_properties,
                })
            }
            GeoObjectType::MultiLineString => {
                let (coordinates, custom_properties) = self.coordinate_members(object, depth)?;
                Geometry::MultiLineString(MultiLineString {
                    line_strings: read_array(coordinates, COORDINATES)?
                        .iter()
                        .map(|line| read_positions(line).map(LineString::new))
                        .collect::<Result<_, _>>()?,
                    bbox,
                    custom_properties,
                })
            }
            GeoObjectType::MultiPolygon => {
                let (coordinates, custom_properties) = self.coordinate_members(object, depth)?;
                Geometry::MultiPolygon(MultiPolygon {
                    polygons: read_array(coordinates, COORDINATES)?
                        .iter()
                        .map(|polygon| read_rings(polygon).map(Polygon::new))
                        .collect::<Result<_, _>>()?,
                    bbox,
                    custom_properties,
                })
            }
            GeoObjectType::GeometryCollection => {
                let geometries = read_array(required(object, GEOMETRIES)?, GEOMETRIES)?
                    .iter()
                    .map(|geometry| self.read_geometry(geometry, depth + 1))
                    .collect::<Result<_, _>>()?;
                Geometry::GeometryCollection(GeometryCollection {
                    geometries,
                    bbox,
                    custom_properties: self.read_custom_properties(object, &[GEOMETRIES], depth)?,
                })
            }
            GeoObjectType::Feature | GeoObjectType::FeatureCollection => {
                return Err(GeoJsonError::TypeMismatch(format!(
                    "expected a geometry, found {object_type}"
                )))
            }
        };
        Ok(geometry)
    }

    /// Returns the required `coordinates` member and every member that is not
    /// part of a coordinate geometry
    fn coordinate_members<'a>(
        &self,
        object: &'a Map<String, Value>,
        depth: usize,
    ) -> Result<(&'a Value, PropertyMap), GeoJsonError> {
        let custom_properties = self.read_custom_properties(object, &[COORDINATES], depth)?;
        Ok((required(object, COORDINATES)?, custom_properties))
    }

    fn read_feature(
        &self,
        object: &Map<String, Value>,
        bbox: Option<BoundingBox>,
        depth: usize,
    ) -> Result<Feature, GeoJsonError> {
        let id = read_id(object)?;
        let geometry = self.read_geometry(required(object, GEOMETRY)?, depth + 1)?;
        let properties = match object.get(PROPERTIES) {
            None | Some(Value::Null) => PropertyMap::new(),
            Some(Value::Object(members)) => self.read_members(members.iter(), depth + 1)?,
            Some(other) => {
                return Err(GeoJsonError::InvalidFormat(format!(
                    "Feature 'properties' must be an object, found {}",
                    json_kind(other)
                )))
            }
        };
        let custom_properties =
            self.read_custom_properties(object, &[ID, GEOMETRY, PROPERTIES], depth)?;

        Ok(Feature {
            id,
            geometry,
            properties,
            bbox,
            custom_properties,
        })
    }

    fn read_feature_collection(
        &self,
        object: &Map<String, Value>,
        bbox: Option<BoundingBox>,
        depth: usize,
    ) -> Result<FeatureCollection, GeoJsonError> {
        let features = read_array(required(object, FEATURES)?, FEATURES)?
            .iter()
            .map(|feature| Feature::try_from(self.read_object(feature, depth + 1)?))
            .collect::<Result<_, _>>()?;

        Ok(FeatureCollection {
            features,
            bbox,
            custom_properties: self.read_custom_properties(object, &[FEATURES], depth)?,
        })
    }

    /// Captures every member other than `type`, `bbox` and `known`
    fn read_custom_properties(
        &self,
        object: &Map<String, Value>,
        known: &[&str],
        depth: usize,
    ) -> Result<PropertyMap, GeoJsonError> {
        let members = object.iter().filter(|(name, _)| {
            let name = name.as_str();
            name != TYPE && name != BBOX && !known.contains(&name)
        });
        self.read_members(members, depth + 1)
    }

    fn read_members<'a>(
        &self,
        members: impl Iterator<Item = (&'a String, &'a Value)>,
        depth: usize,
    ) -> Result<PropertyMap, GeoJsonError> {
        members
            .map(|(name, value)| Ok((name.clone(), self.read_property_value(value, depth)?)))
            .collect()
    }

    fn read_property_value(&self, value: &Value, depth: usize) -> Result<PropertyValue, GeoJsonError> {
        match value {
            Value::Null => Ok(PropertyValue::Null),
            Value::Bool(b) => Ok(PropertyValue::Bool(*b)),
            Value::Number(n) => PropertyValue::from_number(n),
            Value::String(s) => Ok(PropertyValue::String(s.clone())),
            Value::Array(items) => {
                self.check_depth(depth)?;
                items
                    .iter()
                    .map(|item| self.read_property_value(item, depth + 1))
                    .collect::<Result<_, _>>()
                    .map(PropertyValue::Array)
            }
            Value::Object(members) => {
                self.check_depth(depth)?;
                self.read_members(members.iter(), depth + 1)
                    .map(PropertyValue::Object)
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn required<'a>(object: &'a Map<String, Value>, name: &str) -> Result<&'a Value, GeoJsonError> {
    object
        .get(name)
        .ok_or_else(|| GeoJsonError::MissingProperty(name.to_string()))
}

fn read_type(object: &Map<String, Value>) -> Result<GeoObjectType, GeoJsonError> {
    match required(object, TYPE)? {
        Value::String(name) => name.parse(),
        other => Err(GeoJsonError::InvalidFormat(format!(
            "GeoJSON 'type' must be a string, found {}",
            json_kind(other)
        ))),
    }
}

fn read_array<'a>(value: &'a Value, name: &str) -> Result<&'a [Value], GeoJsonError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(GeoJsonError::InvalidFormat(format!(
            "'{name}' must be an array, found {}",
            json_kind(other)
        ))),
    }
}

fn read_f64(value: &Value) -> Result<f64, GeoJsonError> {
    value.as_f64().ok_or_else(|| {
        GeoJsonError::InvalidFormat(format!("expected a number, found {}", json_kind(value)))
    })
}

fn read_bounding_box(object: &Map<String, Value>) -> Result<Option<BoundingBox>, GeoJsonError> {
    match object.get(BBOX) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => {
            let ordinates = items.iter().map(read_f64).collect::<Result<Vec<_>, _>>()?;
            BoundingBox::try_from_ordinates(&ordinates).map(Some)
        }
        Some(other) => Err(GeoJsonError::InvalidFormat(format!(
            "Bounding box must be an array, found {}",
            json_kind(other)
        ))),
    }
}

/// Reads a feature `id`; numbers are kept in their JSON text form
fn read_id(object: &Map<String, Value>) -> Result<Option<String>, GeoJsonError> {
    match object.get(ID) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(id)) => Ok(Some(id.clone())),
        Some(Value::Number(id)) => Ok(Some(id.to_string())),
        Some(other) => Err(GeoJsonError::InvalidFormat(format!(
            "Feature 'id' must be a string or number, found {}",
            json_kind(other)
        ))),
    }
}

fn read_position(value: &Value) -> Result<Position, GeoJsonError> {
    match read_array(value, COORDINATES)? {
        [longitude, latitude] => Ok(Position::new(read_f64(longitude)?, read_f64(latitude)?)),
        [longitude, latitude, altitude] => Ok(Position::new_with_altitude(
            read_f64(longitude)?,
            read_f64(latitude)?,
            read_f64(altitude)?,
        )),
        ordinates => Err(GeoJsonError::InvalidFormat(format!(
            "only 2 or 3 element coordinates supported, found {} elements",
            ordinates.len()
        ))),
    }
}

fn read_positions(value: &Value) -> Result<Vec<Position>, GeoJsonError> {
    read_array(value, COORDINATES)?
        .iter()
        .map(read_position)
        .collect()
}

fn read_rings(value: &Value) -> Result<Vec<LinearRing>, GeoJsonError> {
    read_array(value, COORDINATES)?
        .iter()
        .map(|ring| LinearRing::try_new(read_positions(ring)?))
        .collect()
}

/// Decode an already parsed JSON value
pub fn parse_value(value: &Value) -> Result<GeoObject, GeoJsonError> {
    Reader::default().decode(value)
}

/// Decode JSON text
pub fn parse_str(json: &str) -> Result<GeoObject, GeoJsonError> {
    Reader::default().decode_str(json)
}

/// Decode UTF-8 encoded JSON
pub fn parse_slice(json: &[u8]) -> Result<GeoObject, GeoJsonError> {
    Reader::default().decode_slice(json)
}

/// Decode UTF-8 encoded JSON from a stream
pub fn parse_reader<R: Read>(reader: R) -> Result<GeoObject, GeoJsonError> {
    Reader::default().decode_reader(reader)
}

/// Decode an already parsed JSON value that must represent a `T`
pub fn parse_value_as<T>(value: &Value) -> Result<T, GeoJsonError>
where
    T: TryFrom<GeoObject, Error = GeoJsonError>,
{
    T::try_from(parse_value(value)?)
}

/// Decode JSON text that must represent a `T`
pub fn parse_str_as<T>(json: &str) -> Result<T, GeoJsonError>
where
    T: TryFrom<GeoObject, Error = GeoJsonError>,
{
    T::try_from(parse_str(json)?)
}

/// Decode UTF-8 encoded JSON that must represent a `T`
pub fn parse_slice_as<T>(json: &[u8]) -> Result<T, GeoJsonError>
where
    T: TryFrom<GeoObject, Error = GeoJsonError>,
{
    T::try_from(parse_slice(json)?)
}

/// Decode UTF-8 encoded JSON from a stream that must represent a `T`
pub fn parse_reader_as<T, R: Read>(reader: R) -> Result<T, GeoJsonError>
where
    T: TryFrom<GeoObject, Error = GeoJsonError>,
{
    T::try_from(parse_reader(reader)?)
}
