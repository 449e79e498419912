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

use std::fmt::{Display, Formatter};
use std::ops::Index;

/// A longitude/latitude pair with an optional altitude.
///
/// Equality compares each component exactly, without any tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    longitude: f64,
    latitude: f64,
    altitude: Option<f64>,
}

impl Position {
    /// Create a 2D position
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: None,
        }
    }

    /// Create a 3D position
    pub fn new_with_altitude(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude: Some(altitude),
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// Number of ordinates, 2 or 3
    pub fn len(&self) -> usize {
        match self.altitude {
            Some(_) => 3,
            None => 2,
        }
    }

    /// Always false, a position has at least two ordinates
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the ordinate at `index` in `[longitude, latitude, altitude]` order
    pub fn get(&self, index: usize) -> Option<f64> {
        match index {
            0 => Some(self.longitude),
            1 => Some(self.latitude),
            2 => self.altitude,
            _ => None,
        }
    }
}

impl Index<usize> for Position {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match (index, &self.altitude) {
            (0, _) => &self.longitude,
            (1, _) => &self.latitude,
            (2, Some(altitude)) => altitude,
            _ => panic!(
                "index out of bounds: the len is {} but the index is {index}",
                self.len()
            ),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.altitude {
            Some(altitude) => write!(f, "[{}, {}, {altitude}]", self.longitude, self.latitude),
            None => write!(f, "[{}, {}]", self.longitude, self.latitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordinates() {
        let p = Position::new(1.0, 2.0);
        assert_eq!(p.len(), 2);
        assert_eq!(p[0], 1.0);
        assert_eq!(p[1], 2.0);
        assert_eq!(p.get(2), None);

        let p = Position::new_with_altitude(1.0, 2.0, 3.0);
        assert_eq!(p.len(), 3);
        assert_eq!(p[2], 3.0);
        assert_eq!(p.altitude(), Some(3.0));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_position_index_out_of_bounds() {
        let p = Position::new(1.0, 2.0);
        let _ = p[2];
    }

    #[test]
    fn test_position_equality_is_exact() {
        assert_eq!(Position::new(1.1, 2.2), Position::new(1.1, 2.2));
        assert_ne!(Position::new(1.1, 2.2), Position::new(1.1, 2.2 + f64::EPSILON * 4.0));
        assert_ne!(
            Position::new(1.0, 2.0),
            Position::new_with_altitude(1.0, 2.0, 0.0)
        );
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(1.0, 2.5).to_string(), "[1, 2.5]");
        assert_eq!(
            Position::new_with_altitude(1.0, 2.0, 3.0).to_string(),
            "[1, 2, 3]"
        );
    }
}
