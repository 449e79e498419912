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

use std::io::Cursor;

use geojson_codec::*;

#[test]
fn test_unsupported_type() {
    let err = parse_str(r#"{"type":"Circle","coordinates":[1,2]}"#).unwrap_err();
    assert!(matches!(&err, GeoJsonError::UnsupportedType(name) if name == "Circle"));
    assert_eq!(err.to_string(), "Unsupported GeoJSON type: 'Circle'");

    // type names are case sensitive
    let err = parse_str(r#"{"type":"point","coordinates":[1,2]}"#).unwrap_err();
    assert!(matches!(err, GeoJsonError::UnsupportedType(_)));
}

#[test]
fn test_missing_property_message() {
    let err = parse_str(r#"{"type":"Point"}"#).unwrap_err();
    assert_eq!(
        err.to_string(),
        "GeoJSON object expected to have 'coordinates' property"
    );
}

#[test]
fn test_malformed_json() {
    for json in ["", "{", r#"{"type":"Point","coordinates":[1,2],}"#, "nul"] {
        let err = parse_str(json).unwrap_err();
        assert!(matches!(err, GeoJsonError::MalformedJson(_)), "{json}: {err}");
    }
    assert!(matches!(
        parse_slice(b"\xff\xfe"),
        Err(GeoJsonError::MalformedJson(_))
    ));
}

#[test]
fn test_bbox_length() {
    for bbox in ["[]", "[1,2]", "[1,2,3]", "[1,2,3,4,5]", "[1,2,3,4,5,6,7]"] {
        let json = format!(r#"{{"type":"Point","coordinates":[1,2],"bbox":{bbox}}}"#);
        let err = parse_str(&json).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidFormat(_)), "{bbox}: {err}");
    }
}

#[test]
fn test_coordinate_length() {
    for coordinates in ["[]", "[1]", "[1,2,3,4]"] {
        let json = format!(r#"{{"type":"Point","coordinates":{coordinates}}}"#);
        let err = parse_str(&json).unwrap_err();
        assert!(
            matches!(err, GeoJsonError::InvalidFormat(_)),
            "{coordinates}: {err}"
        );
    }
}

#[test]
fn test_linear_ring_validation() {
    let open = Polygon::try_from_exterior([
        Position::new(1.0, 2.0),
        Position::new(3.0, 4.0),
        Position::new(5.0, 6.0),
        Position::new(1.0, 3.0),
    ]);
    assert!(matches!(open, Err(GeoJsonError::Validation(_))));

    let short = LinearRing::try_new([
        Position::new(1.0, 2.0),
        Position::new(3.0, 4.0),
        Position::new(1.0, 2.0),
    ]);
    assert!(matches!(short, Err(GeoJsonError::Validation(_))));

    let json = r#"{"type":"MultiPolygon","coordinates":[[[[1,2],[3,4],[5,6],[1,2]]],[[[0,0],[1,1],[2,2],[3,3]]]]}"#;
    assert!(matches!(parse_str(json), Err(GeoJsonError::Validation(_))));
}

#[test]
fn test_type_mismatch() {
    let err = parse_str_as::<Feature>(r#"{"type":"Point","coordinates":[1,2]}"#).unwrap_err();
    assert!(matches!(err, GeoJsonError::TypeMismatch(_)));

    let err =
        parse_str_as::<FeatureCollection>(r#"{"type":"Point","coordinates":[1,2]}"#).unwrap_err();
    assert!(matches!(err, GeoJsonError::TypeMismatch(_)));

    let geometry = parse_str_as::<Geometry>(r#"{"type":"MultiPoint","coordinates":[]}"#).unwrap();
    assert!(matches!(
        MultiPolygon::try_from(geometry),
        Err(GeoJsonError::TypeMismatch(_))
    ));
}

#[test]
fn test_invalid_member_kinds() {
    let cases = [
        r#"{"type":"GeometryCollection","geometries":{}}"#,
        r#"{"type":"FeatureCollection","features":"none"}"#,
        r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":[]}"#,
        r#"{"type":"Feature","geometry":null}"#,
        r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"id":true}"#,
        r#""Point""#,
    ];
    for json in cases {
        let err = parse_str(json).unwrap_err();
        assert!(matches!(err, GeoJsonError::InvalidFormat(_)), "{json}: {err}");
    }
}

#[test]
fn test_suppressed_errors_yield_none() {
    let reader = ReaderBuilder::new().with_suppress_errors(true).build();
    let invalid = [
        r#"{"type":"Circle","coordinates":[1,2]}"#,
        r#"{"type":"Point"}"#,
        r#"{"type":"Point","coordinates":[1]}"#,
        r#"{"type":"Polygon","coordinates":[[[1,2],[3,4],[5,6],[7,8]]]}"#,
        "{",
    ];
    for json in invalid {
        assert!(reader.read_str(json).unwrap().is_none(), "{json}");
        assert!(reader.read(Cursor::new(json)).unwrap().is_none(), "{json}");
    }

    let point = reader
        .read_as::<Point>(r#"{"type":"Point","coordinates":[1,2]}"#)
        .unwrap()
        .unwrap();
    assert_eq!(point.coordinates(), Position::new(1.0, 2.0));

    let value = serde_json::json!({"type": "Point", "coordinates": "x"});
    assert!(reader.read_value(&value).unwrap().is_none());
}

#[test]
fn test_default_reader_propagates() {
    let reader = Reader::default();
    assert!(matches!(
        reader.read_str(r#"{"type":"Circle","coordinates":[1,2]}"#),
        Err(GeoJsonError::UnsupportedType(_))
    ));
    assert!(matches!(
        parse_reader(Cursor::new("{")),
        Err(GeoJsonError::MalformedJson(_))
    ));
}

fn nested_collections(levels: usize) -> String {
    let mut json = r#"{"type":"Point","coordinates":[1,2]}"#.to_string();
    for _ in 0..levels {
        json = format!(r#"{{"type":"GeometryCollection","geometries":[{json}]}}"#);
    }
    json
}

#[test]
fn test_depth_limit() {
    let geometry = parse_str_as::<Geometry>(&nested_collections(DEFAULT_MAX_DEPTH)).unwrap();
    assert!(matches!(geometry, Geometry::GeometryCollection(_)));
    assert!(matches!(
        parse_str(&nested_collections(DEFAULT_MAX_DEPTH + 1)),
        Err(GeoJsonError::DepthLimitExceeded(DEFAULT_MAX_DEPTH))
    ));

    let reader = ReaderBuilder::new().with_max_depth(1).build();
    let nested = r#"{"type":"Feature","geometry":{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[1,2]}]}}"#;
    assert!(matches!(
        reader.read_str(nested),
        Err(GeoJsonError::DepthLimitExceeded(1))
    ));
    let reader = ReaderBuilder::new().with_max_depth(2).build();
    assert!(reader.read_str(nested).unwrap().is_some());

    let suppressing = ReaderBuilder::new()
        .with_max_depth(1)
        .with_suppress_errors(true)
        .build();
    assert!(suppressing.read_str(nested).unwrap().is_none());
}

#[test]
fn test_depth_limit_is_configurable() {
    let json = nested_collections(40);
    let reader = ReaderBuilder::new().with_max_depth(40).build();
    assert!(reader.read_str(&json).unwrap().is_some());
    let reader = ReaderBuilder::new().with_max_depth(39).build();
    assert!(matches!(
        reader.read_str(&json),
        Err(GeoJsonError::DepthLimitExceeded(39))
    ));
}

#[test]
fn test_unsupported_values_on_encode() {
    let point = Point::new(Position::new(f64::INFINITY, 0.0));
    assert!(matches!(
        point.to_json_string(),
        Err(GeoJsonError::UnsupportedValue(_))
    ));

    let mut properties = PropertyMap::new();
    properties.insert("ratio".to_string(), f64::NAN.into());
    let feature = Feature::new(Point::new(Position::new(0.0, 0.0)), properties);
    assert!(matches!(
        feature.to_json_string(),
        Err(GeoJsonError::UnsupportedValue(_))
    ));

    let mut custom = PropertyMap::new();
    custom.insert("features".to_string(), PropertyValue::Null);
    let collection = FeatureCollection::new(Vec::<Feature>::new()).with_custom_properties(custom);
    assert!(matches!(
        collection.to_json_string(),
        Err(GeoJsonError::UnsupportedValue(_))
    ));
}
