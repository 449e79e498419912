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

//! A typed object model and lossless codec for [GeoJSON].
//!
//! [GeoJSON]: https://datatracker.ietf.org/doc/html/rfc7946
//!
//! Decoding preserves everything the model does not interpret: explicit
//! bounding boxes, unrecognized members (as custom properties, in document
//! order) and the numeric width of property values. Encoding the result
//! reproduces an equivalent document.
//!
//! * See [`parse_str`] and friends, or a configured [`Reader`], for decoding.
//! * See the [`ToGeoJson`] trait for encoding.
//! * See the [`CalculateBoundingBox`] trait for computing extents.
//!
//! ```
//! # use geojson_codec::*;
//! let json = r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":{"name":"value"}}"#;
//! let feature: Feature = parse_str_as(json)?;
//! assert_eq!(feature.property("name").and_then(PropertyValue::as_str), Some("value"));
//! assert_eq!(feature.id(), None);
//! assert_eq!(feature.calculate_bounding_box(), BoundingBox::new(1.0, 2.0, 1.0, 2.0));
//! assert_eq!(feature.to_json_string()?, json);
//! # Ok::<(), GeoJsonError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]

mod bounding_box;
mod bounds;
mod error;
mod feature;
mod geometry;
mod object;
mod position;
mod property;
pub mod reader;
mod serde_impl;
pub mod writer;

pub use bounding_box::BoundingBox;
pub use bounds::CalculateBoundingBox;
pub use error::GeoJsonError;
pub use feature::{Feature, FeatureCollection};
pub use geometry::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};
pub use object::{GeoJsonObject, GeoObject, GeoObjectType};
pub use position::Position;
pub use property::{PropertyMap, PropertyValue};
pub use reader::{
    parse_reader, parse_reader_as, parse_slice, parse_slice_as, parse_str, parse_str_as,
    parse_value, parse_value_as, Reader, ReaderBuilder, DEFAULT_MAX_DEPTH,
};
pub use writer::ToGeoJson;
