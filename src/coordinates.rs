// SPDX-License-Identifier: AGPL-3.0-or-later

//! Observer location.

use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Geographic position of the observer in decimal degrees.
///
/// Latitude is positive north of the equator, longitude positive east of
/// Greenwich.  The value is a plain `Copy` input threaded explicitly
/// through every computation — nothing in the crate stores or mutates a
/// location.  Coordinates are not validated: values outside
/// `[-90, 90]` / `[-180, 180]` produce mathematically defined but
/// meaningless results.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoCoordinate {
    latitude: Degrees,
    longitude: Degrees,
}

impl GeoCoordinate {
    /// Location the Pluto Time dashboard widget defaults to, north-east
    /// of Los Angeles.
    pub const DEFAULT: Self = Self::new(Degrees::new(34.2), Degrees::new(-118.1));

    /// Create from typed angle quantities.
    #[inline]
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create from raw decimal degrees.
    #[inline]
    pub const fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(Degrees::new(latitude), Degrees::new(longitude))
    }

    /// Latitude, positive north.
    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, positive east.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }
}

impl std::fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat {}°, lon {}°",
            self.latitude.value(),
            self.longitude.value()
        )
    }
}

#[cfg(feature = "serde")]
impl Serialize for GeoCoordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("GeoCoordinate", 2)?;
        s.serialize_field("latitude", &self.latitude.value())?;
        s.serialize_field("longitude", &self.longitude.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for GeoCoordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(GeoCoordinate::from_degrees(raw.latitude, raw.longitude))
    }
}
