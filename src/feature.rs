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

use crate::bounding_box::BoundingBox;
use crate::geometry::{impl_collection, Geometry};
use crate::property::{PropertyMap, PropertyValue};

/// A geometry together with its `properties` and an optional identifier.
///
/// `properties` holds the members of the GeoJSON `"properties"` object;
/// any other unrecognized top-level member is a custom property.
///
/// ```
/// # use geojson_codec::{Feature, Point, Position, PropertyMap};
/// let mut properties = PropertyMap::new();
/// properties.insert("name".to_string(), "Feature 1".into());
///
/// let feature = Feature::new(Point::new(Position::new(-122.091954, 47.607148)), properties)
///     .with_id("f1");
/// assert_eq!(feature.id(), Some("f1"));
/// assert_eq!(feature.property("name").and_then(|v| v.as_str()), Some("Feature 1"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub(crate) id: Option<String>,
    pub(crate) geometry: Geometry,
    pub(crate) properties: PropertyMap,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl Feature {
    pub fn new(geometry: impl Into<Geometry>, properties: PropertyMap) -> Self {
        Self {
            id: None,
            geometry: geometry.into(),
            properties,
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    /// Returns the value of the named member of `properties`
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// An ordered list of features
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection {
    pub(crate) features: Vec<Feature>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) custom_properties: PropertyMap,
}

impl FeatureCollection {
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        Self {
            features: features.into_iter().collect(),
            bbox: None,
            custom_properties: PropertyMap::new(),
        }
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

impl_collection!(FeatureCollection, features, Feature);

impl FromIterator<Feature> for FeatureCollection {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        Self::new(iter)
    }
}
