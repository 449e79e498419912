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

//! Coordinate extents attached to GeoJSON objects

use std::fmt::{Display, Formatter};
use std::ops::Index;

use crate::error::GeoJsonError;
use crate::position::Position;

/// The coordinate range of a GeoJSON object.
///
/// A box is either fully 2D or fully 3D: the altitude bounds are both present
/// or both absent. The flattened ordinate order follows the GeoJSON `bbox`
/// member, i.e. `[west, south, east, north]` or
/// `[west, south, min_altitude, east, north, max_altitude]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    west: f64,
    south: f64,
    east: f64,
    north: f64,
    min_altitude: Option<f64>,
    max_altitude: Option<f64>,
}

impl BoundingBox {
    /// Create a 2D bounding box
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
            min_altitude: None,
            max_altitude: None,
        }
    }

    /// Create a 3D bounding box
    pub fn new_with_altitude(
        west: f64,
        south: f64,
        east: f64,
        north: f64,
        min_altitude: f64,
        max_altitude: f64,
    ) -> Self {
        Self {
            west,
            south,
            east,
            north,
            min_altitude: Some(min_altitude),
            max_altitude: Some(max_altitude),
        }
    }

    /// Create a bounding box from its flattened GeoJSON ordinates.
    ///
    /// Four ordinates are `[west, south, east, north]`, six are
    /// `[west, south, min_altitude, east, north, max_altitude]`. Any other
    /// length is an [`GeoJsonError::InvalidFormat`] error.
    pub fn try_from_ordinates(ordinates: &[f64]) -> Result<Self, GeoJsonError> {
        match *ordinates {
            [west, south, east, north] => Ok(Self::new(west, south, east, north)),
            [west, south, min_altitude, east, north, max_altitude] => Ok(Self::new_with_altitude(
                west,
                south,
                east,
                north,
                min_altitude,
                max_altitude,
            )),
            _ => Err(GeoJsonError::InvalidFormat(format!(
                "only 4 or 6 element bbox supported, found {} elements",
                ordinates.len()
            ))),
        }
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn min_altitude(&self) -> Option<f64> {
        self.min_altitude
    }

    pub fn max_altitude(&self) -> Option<f64> {
        self.max_altitude
    }

    fn altitude(&self) -> Option<(f64, f64)> {
        self.min_altitude.zip(self.max_altitude)
    }

    /// Number of flattened ordinates, 4 or 6
    pub fn len(&self) -> usize {
        match self.altitude() {
            Some(_) => 6,
            None => 4,
        }
    }

    /// Always false, a bounding box has at least four ordinates
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the flattened ordinate at `index`
    pub fn get(&self, index: usize) -> Option<f64> {
        match self.altitude() {
            Some((min_altitude, max_altitude)) => match index {
                0 => Some(self.west),
                1 => Some(self.south),
                2 => Some(min_altitude),
                3 => Some(self.east),
                4 => Some(self.north),
                5 => Some(max_altitude),
                _ => None,
            },
            None => match index {
                0 => Some(self.west),
                1 => Some(self.south),
                2 => Some(self.east),
                3 => Some(self.north),
                _ => None,
            },
        }
    }

    /// Returns all flattened ordinates in GeoJSON `bbox` order
    pub fn ordinates(&self) -> Vec<f64> {
        (0..self.len()).filter_map(|i| self.get(i)).collect()
    }

    /// Returns true if `position` lies within the box, inclusive of its edges.
    /// Altitude is ignored.
    pub fn contains(&self, position: &Position) -> bool {
        self.contains_coordinates(position.latitude(), position.longitude())
    }

    /// Returns true if the coordinates lie within the box, inclusive of its edges
    pub fn contains_coordinates(&self, latitude: f64, longitude: f64) -> bool {
        self.west <= longitude
            && longitude <= self.east
            && self.south <= latitude
            && latitude <= self.north
    }
}

impl Index<usize> for BoundingBox {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        let field = match (&self.min_altitude, &self.max_altitude) {
            (Some(min_altitude), Some(max_altitude)) => match index {
                0 => Some(&self.west),
                1 => Some(&self.south),
                2 => Some(min_altitude),
                3 => Some(&self.east),
                4 => Some(&self.north),
                5 => Some(max_altitude),
                _ => None,
            },
            _ => match index {
                0 => Some(&self.west),
                1 => Some(&self.south),
                2 => Some(&self.east),
                3 => Some(&self.north),
                _ => None,
            },
        };
        match field {
            Some(field) => field,
            None => panic!(
                "index out of bounds: the len is {} but the index is {index}",
                self.len()
            ),
        }
    }
}

impl Display for BoundingBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ordinates = self
            .ordinates()
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>();
        write!(f, "[{}]", ordinates.join(", "))
    }
}
