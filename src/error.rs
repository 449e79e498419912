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

//! Defines [`GeoJsonError`] for representing failures while decoding,
//! encoding or constructing GeoJSON objects

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

/// Many different operations in this crate return this error type.
#[derive(Debug)]
pub enum GeoJsonError {
    /// The input text is not valid JSON.
    MalformedJson(String),
    /// A member required for the object kind is absent; carries the member name.
    MissingProperty(String),
    /// A member has the wrong JSON kind or an array has the wrong length.
    InvalidFormat(String),
    /// The `type` discriminator is not a supported GeoJSON type.
    UnsupportedType(String),
    /// A value cannot be represented in GeoJSON output.
    UnsupportedValue(String),
    /// An object failed a construction-time invariant (e.g. an open linear ring).
    Validation(String),
    /// The decoded object is not of the requested kind.
    TypeMismatch(String),
    /// Objects or property values are nested deeper than the configured limit.
    DepthLimitExceeded(usize),
    /// Error while reading from or writing to a caller-supplied stream.
    Io(io::Error),
}

impl GeoJsonError {
    /// Returns true if this error is raised by the decoding path rather than
    /// by the caller's I/O.
    pub fn is_decode_error(&self) -> bool {
        !matches!(self, GeoJsonError::Io(_) | GeoJsonError::UnsupportedValue(_))
    }
}

impl From<io::Error> for GeoJsonError {
    fn from(error: io::Error) -> Self {
        GeoJsonError::Io(error)
    }
}

impl From<serde_json::Error> for GeoJsonError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            GeoJsonError::Io(error.into())
        } else {
            GeoJsonError::MalformedJson(error.to_string())
        }
    }
}

impl Display for GeoJsonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoJsonError::MalformedJson(desc) => write!(f, "Malformed JSON: {desc}"),
            GeoJsonError::MissingProperty(name) => {
                write!(f, "GeoJSON object expected to have '{name}' property")
            }
            GeoJsonError::InvalidFormat(desc) => write!(f, "Invalid GeoJSON format: {desc}"),
            GeoJsonError::UnsupportedType(name) => {
                write!(f, "Unsupported GeoJSON type: '{name}'")
            }
            GeoJsonError::UnsupportedValue(desc) => write!(f, "Unsupported value: {desc}"),
            GeoJsonError::Validation(desc) => write!(f, "Validation error: {desc}"),
            GeoJsonError::TypeMismatch(desc) => write!(f, "Type mismatch: {desc}"),
            GeoJsonError::DepthLimitExceeded(limit) => {
                write!(f, "GeoJSON nesting exceeds the maximum depth of {limit}")
            }
            GeoJsonError::Io(source) => write!(f, "Io error: {source}"),
        }
    }
}

impl Error for GeoJsonError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GeoJsonError::Io(source) => Some(source),
            _ => None,
        }
    }
}
