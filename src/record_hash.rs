//! Record hashing
//!
//! `RecordHasher` hashes each field on its own and folds the four results
//! from a zero seed, in declaration order. `impl Hash for Record` hands that
//! single `u64` to whatever hasher the container uses; with
//! [`RecordBuildHasher`] the container buckets on it unchanged.

use crate::combine::combine_one;
use crate::field_hash::{FieldHash, FxBuildHasher, HasherKind, SipBuildHasher};
use crate::hash_combine;
use crate::record::Record;
use std::collections::HashMap;
use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

#[derive(Debug, Clone, Default)]
pub struct RecordHasher<S = SipBuildHasher> {
    fields: S,
}

impl<S: BuildHasher> RecordHasher<S> {
    pub fn with_hasher(fields: S) -> Self {
        RecordHasher { fields }
    }

    pub fn hash(&self, record: &Record) -> u64 {
        let h1 = record.integer.field_hash(&self.fields);
        let h2 = record.single.field_hash(&self.fields);
        let h3 = record.double.field_hash(&self.fields);
        let h4 = record.text.field_hash(&self.fields);

        let mut seed = 0_u64;
        hash_combine!(seed; h1, h2, h3, h4);
        seed
    }
}

/// Hash of `record` with the default (Sip) field hashers.
pub fn record_hash(record: &Record) -> u64 {
    RecordHasher::<SipBuildHasher>::default().hash(record)
}

pub fn record_hash_with(kind: HasherKind, record: &Record) -> u64 {
    match kind {
        HasherKind::Sip => RecordHasher::with_hasher(SipBuildHasher::default()).hash(record),
        HasherKind::Fx => RecordHasher::with_hasher(FxBuildHasher::default()).hash(record),
    }
}

// Every field that takes part in `==` takes part in the hash, and each
// field hash agrees with that field's `==`.
impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(record_hash(self));
    }
}

// =============================================================================
// Container side
// =============================================================================

/// Hands a key's first `write_u64` straight back from `finish`; later
/// writes are combined into it.
///
/// Anything written as raw bytes is folded in with [`combine_one`], so
/// non-record keys still get a usable (if weak) hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThroughHasher {
    state: u64,
    written: bool,
}

impl Hasher for PassThroughHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            combine_one(&mut self.state, u64::from(byte));
        }
        self.written |= !bytes.is_empty();
    }

    fn write_u64(&mut self, i: u64) {
        if self.written {
            combine_one(&mut self.state, i);
        } else {
            self.state = i;
            self.written = true;
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

pub type RecordBuildHasher = BuildHasherDefault<PassThroughHasher>;

/// Map keyed by records, bucketed on the combined record hash.
pub type RecordMap<V> = HashMap<Record, V, RecordBuildHasher>;
