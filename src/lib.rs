//! Composite record keys for hash maps
//!
//! A four-field record made usable as a `HashMap` key: field-wise equality,
//! one hash per field, and a seed-threading combine step that folds the
//! field hashes into a single order-sensitive hash.

pub mod combine;
pub mod config;
pub mod error;
pub mod field_hash;
pub mod record;
pub mod record_hash;
pub mod scenario;

pub use combine::{combine, combine_one, combined, GOLDEN_RATIO};
pub use config::{Checks, Sample, ScenarioConfig};
pub use error::{ScenarioError, ScenarioResult};
pub use field_hash::{FieldHash, FxBuildHasher, HasherKind, SipBuildHasher};
pub use record::Record;
pub use record_hash::{
    record_hash, record_hash_with, PassThroughHasher, RecordBuildHasher, RecordHasher, RecordMap,
};
pub use scenario::{Scenario, ScenarioReport};
