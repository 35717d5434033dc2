//! The composite record used as a map key.

use serde::Deserialize;
use std::fmt;

/// Four fields of different types. Compared field by field, hashed by
/// combining one hash per field (see [`crate::record_hash`]).
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub integer: i32,
    pub single: f32,
    pub double: f64,
    pub text: String,
}

impl Record {
    pub fn new(integer: i32, single: f32, double: f64, text: impl Into<String>) -> Self {
        Record {
            integer,
            single,
            double,
            text: text.into(),
        }
    }
}

/// Field-wise equality. Floats use IEEE `==`, so `0.0 == -0.0` and a record
/// holding NaN is not equal to itself.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.integer == other.integer
            && self.single == other.single
            && self.double == other.double
            && self.text == other.text
    }
}

// NaN fields break reflexivity; keys holding NaN cannot be looked up again.
impl Eq for Record {}

/// Renders `integer single double text`, space separated.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.integer, self.single, self.double, self.text)
    }
}
