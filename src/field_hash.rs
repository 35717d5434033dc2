//! Per-field hashes
//!
//! Every field type is hashed through the same `BuildHasher`, so the record
//! hash can switch hasher families without touching the combining step.

use rustc_hash::FxHasher;
use serde::Deserialize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault};

/// SipHash with fixed keys: same input, same hash, for the whole build.
pub type SipBuildHasher = BuildHasherDefault<DefaultHasher>;

/// rustc's Fx hash. Fast, not DoS resistant.
pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Hasher family used for the individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    #[default]
    Sip,
    Fx,
}

impl HasherKind {
    pub fn name(self) -> &'static str {
        match self {
            HasherKind::Sip => "sip",
            HasherKind::Fx => "fx",
        }
    }
}

pub trait FieldHash {
    fn field_hash<S: BuildHasher>(&self, hasher: &S) -> u64;
}

impl FieldHash for i32 {
    fn field_hash<S: BuildHasher>(&self, hasher: &S) -> u64 {
        hasher.hash_one(self)
    }
}

// -0.0 == 0.0, so both must land on the same bits before hashing.
impl FieldHash for f32 {
    fn field_hash<S: BuildHasher>(&self, hasher: &S) -> u64 {
        let canonical = if *self == 0.0 { 0.0_f32 } else { *self };
        hasher.hash_one(canonical.to_bits())
    }
}

impl FieldHash for f64 {
    fn field_hash<S: BuildHasher>(&self, hasher: &S) -> u64 {
        let canonical = if *self == 0.0 { 0.0_f64 } else { *self };
        hasher.hash_one(canonical.to_bits())
    }
}

impl FieldHash for str {
    fn field_hash<S: BuildHasher>(&self, hasher: &S) -> u64 {
        hasher.hash_one(self)
    }
}

impl FieldHash for String {
    fn field_hash<S: BuildHasher>(&self, hasher: &S) -> u64 {
        self.as_str().field_hash(hasher)
    }
}
