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

//! [`serde`] support, so GeoJSON objects can be embedded in other
//! serializable types. Both directions go through the GeoJSON codec and
//! therefore share its member ordering and validation.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::feature::{Feature, FeatureCollection};
use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::object::GeoObject;
use crate::reader::{parse_value, parse_value_as};
use crate::writer::ToGeoJson;

macro_rules! impl_serde {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    self.to_json_value()
                        .map_err(S::Error::custom)?
                        .serialize(serializer)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let value = Value::deserialize(deserializer)?;
                    parse_value_as(&value).map_err(D::Error::custom)
                }
            }
        )*
    };
}

impl_serde!(
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Geometry,
    Feature,
    FeatureCollection,
);

impl Serialize for GeoObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GeoObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        parse_value(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::property::PropertyMap;

    #[test]
    fn test_embedded_in_vec() {
        let layers: Vec<GeoObject> = vec![
            Point::new(Position::new(0.0, 0.0)).into(),
            Feature::new(Point::new(Position::new(1.5, 2.5)), PropertyMap::new())
                .with_id("s")
                .into(),
        ];

        let json = serde_json::to_string(&layers).unwrap();
        assert_eq!(
            json,
            r#"[{"type":"Point","coordinates":[0,0]},{"type":"Feature","id":"s","geometry":{"type":"Point","coordinates":[1.5,2.5]},"properties":{}}]"#
        );

        let decoded: Vec<GeoObject> = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, layers);
    }

    #[test]
    fn test_deserialize_errors() {
        let err = serde_json::from_str::<Polygon>(r#"{"type":"Point","coordinates":[1,2]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Type mismatch"), "{err}");

        let err = serde_json::from_str::<Geometry>(r#"{"type":"Circle"}"#).unwrap_err();
        assert!(err.to_string().contains("Circle"), "{err}");
    }

    #[test]
    fn test_serialize_error() {
        let point = Point::new(Position::new(f64::NAN, 0.0));
        assert!(serde_json::to_string(&point).is_err());
    }
}
