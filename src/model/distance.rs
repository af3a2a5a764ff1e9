use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{AdapterError, Result};

/// Distance of an unreached vertex. The empty string parses to this.
pub const INFINITY: f64 = 1e99;

/// Parses a distance string. Empty means unreached.
pub fn parse_distance(s: &str) -> Result<f64> {
    if s.is_empty() {
        return Ok(INFINITY);
    }

    // `f64::from_str` also takes "inf", "NaN" and overflows like "1e400".
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AdapterError::InvalidDistance(s.to_string())),
    }
}

/// Formats a distance as the shortest decimal that reads back to the same
/// value. Integral values keep their `.0`; anything past the sentinel is
/// written as the sentinel.
pub fn format_distance(value: f64) -> String {
    format!("{:?}", saturate(value))
}

/// Keeps sums of finite distances finite and decimal.
fn saturate(value: f64) -> f64 {
    value.clamp(f64::MIN, INFINITY)
}

/// A vertex or edge distance as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    pub fn is_unreached(self) -> bool {
        self.0 >= INFINITY
    }

    pub fn min(self, other: Distance) -> Distance {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }
}

impl std::ops::Add for Distance {
    type Output = Distance;

    fn add(self, rhs: Distance) -> Distance {
        Distance(saturate(self.0 + rhs.0))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_distance(self.0))
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_distance(self.0))
    }
}

struct DistanceVisitor;

impl<'de> Visitor<'de> for DistanceVisitor {
    type Value = Distance;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string, an empty string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Distance, E> {
        parse_distance(v).map(Distance).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Distance, E> {
        Ok(Distance(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Distance, E> {
        Ok(Distance(v as f64))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Distance, E> {
        Ok(Distance(v as f64))
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(DistanceVisitor)
    }
}
