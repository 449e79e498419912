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

//! Dynamic values used for feature properties and unrecognized members
//!
//! Numbers keep the narrowest exact representation chosen while decoding
//! (see [`PropertyValue::from_number`]) so that re-encoding prints the same
//! value that was read.

use indexmap::IndexMap;
use serde_json::Number;

use crate::error::GeoJsonError;

/// Ordered map of property names to values, iterating in insertion order.
pub type PropertyMap = IndexMap<String, PropertyValue>;

/// A JSON value captured from a GeoJSON document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropertyValue {
    #[default]
    Null,
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    String(String),
    Array(Vec<PropertyValue>),
    Object(PropertyMap),
}

impl PropertyValue {
    /// Convert a JSON number to the first of `Int32`, `UInt32`, `Int64` and
    /// `UInt64` that holds it exactly, falling back to `Float64`.
    pub fn from_number(n: &Number) -> Result<Self, GeoJsonError> {
        if let Some(i) = n.as_i64() {
            if let Ok(i) = i32::try_from(i) {
                Ok(PropertyValue::Int32(i))
            } else if let Ok(u) = u32::try_from(i) {
                Ok(PropertyValue::UInt32(u))
            } else {
                Ok(PropertyValue::Int64(i))
            }
        } else if let Some(u) = n.as_u64() {
            Ok(PropertyValue::UInt64(u))
        } else {
            match n.as_f64() {
                Some(f) => Ok(PropertyValue::Float64(f)),
                None => Err(GeoJsonError::InvalidFormat(format!(
                    "Failed to parse {n} as number"
                ))),
            }
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Returns true for any of the integer and floating point variants
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            PropertyValue::Int32(_)
                | PropertyValue::UInt32(_)
                | PropertyValue::Int64(_)
                | PropertyValue::UInt64(_)
                | PropertyValue::Float64(_)
        )
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as `i64` if it is an integer that fits
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            PropertyValue::Int32(i) => Some(i.into()),
            PropertyValue::UInt32(u) => Some(u.into()),
            PropertyValue::Int64(i) => Some(i),
            PropertyValue::UInt64(u) => i64::try_from(u).ok(),
            _ => None,
        }
    }

    /// Returns the value as `u64` if it is a non-negative integer
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            PropertyValue::Int32(i) => u64::try_from(i).ok(),
            PropertyValue::UInt32(u) => Some(u.into()),
            PropertyValue::Int64(i) => u64::try_from(i).ok(),
            PropertyValue::UInt64(u) => Some(u),
            _ => None,
        }
    }

    /// Returns any numeric variant as `f64`, possibly losing precision
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            PropertyValue::Int32(i) => Some(i.into()),
            PropertyValue::UInt32(u) => Some(u.into()),
            PropertyValue::Int64(i) => Some(i as f64),
            PropertyValue::UInt64(u) => Some(u as f64),
            PropertyValue::Float64(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&PropertyMap> {
        match self {
            PropertyValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a member of an object value by name
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "null",
            PropertyValue::Bool(_) => "boolean",
            PropertyValue::Int32(_) => "int32",
            PropertyValue::UInt32(_) => "uint32",
            PropertyValue::Int64(_) => "int64",
            PropertyValue::UInt64(_) => "uint64",
            PropertyValue::Float64(_) => "float64",
            PropertyValue::String(_) => "string",
            PropertyValue::Array(_) => "array",
            PropertyValue::Object(_) => "object",
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::$variant(value.into())
                }
            }
        )*
    };
}

impl_from!(
    bool => Bool,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f64 => Float64,
    String => String,
    &str => String,
    Vec<PropertyValue> => Array,
    PropertyMap => Object,
);

impl<T: Into<PropertyValue>> From<Option<T>> for PropertyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn ladder(json: &str) -> PropertyValue {
        let n = Number::from_str(json).unwrap();
        PropertyValue::from_number(&n).unwrap()
    }

    #[test]
    fn test_numeric_ladder() {
        assert_eq!(ladder("1"), PropertyValue::Int32(1));
        assert_eq!(ladder("-2147483648"), PropertyValue::Int32(i32::MIN));
        assert_eq!(ladder("2147483648"), PropertyValue::UInt32(2147483648));
        assert_eq!(ladder("4294967296"), PropertyValue::Int64(4294967296));
        assert_eq!(ladder("-2147483649"), PropertyValue::Int64(-2147483649));
        assert_eq!(
            ladder("9999999999999999999"),
            PropertyValue::UInt64(9999999999999999999)
        );
        assert_eq!(
            ladder("99999999999999999999"),
            PropertyValue::Float64(1e20)
        );
        assert_eq!(ladder("2.2"), PropertyValue::Float64(2.2));
        assert_eq!(ladder("1.0"), PropertyValue::Float64(1.0));
        assert_eq!(ladder("1e2"), PropertyValue::Float64(100.0));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(PropertyValue::UInt32(7).as_i64(), Some(7));
        assert_eq!(PropertyValue::Int32(-1).as_u64(), None);
        assert_eq!(PropertyValue::UInt64(u64::MAX).as_i64(), None);
        assert_eq!(PropertyValue::Int64(3).as_f64(), Some(3.0));
        assert_eq!(PropertyValue::from("a").as_str(), Some("a"));
        assert!(PropertyValue::from(None::<i32>).is_null());
        assert!(PropertyValue::Float64(0.5).is_number());
        assert!(!PropertyValue::Bool(true).is_number());
    }

    #[test]
    fn test_object_lookup_preserves_order() {
        let mut map = PropertyMap::new();
        map.insert("z".to_string(), 1.into());
        map.insert("a".to_string(), "x".into());
        let value = PropertyValue::Object(map);

        assert_eq!(value.get("a"), Some(&PropertyValue::String("x".to_string())));
        assert_eq!(value.get("missing"), None);
        let keys = value.as_object().unwrap().keys().collect::<Vec<_>>();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(PropertyValue::Null.type_name(), "null");
        assert_eq!(PropertyValue::UInt64(0).type_name(), "uint64");
        assert_eq!(PropertyValue::Array(vec![]).type_name(), "array");
    }
}
