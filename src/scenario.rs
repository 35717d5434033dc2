//! Scenario runner
//!
//! Hashes every sample, checks the configured hash expectations, then loads
//! all samples into a [`RecordMap`] and verifies that equal keys collapsed
//! into one entry holding the last written value.

use crate::config::{Sample, ScenarioConfig};
use crate::error::{ScenarioError, ScenarioResult};
use crate::record::Record;
use crate::record_hash::{record_hash_with, RecordMap};

#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// One hash per sample, in sample order.
    pub hashes: Vec<u64>,
    /// Map contents in the map's iteration order.
    pub entries: Vec<(Record, i64)>,
}

impl ScenarioReport {
    pub fn hash_lines(&self) -> Vec<String> {
        self.hashes.iter().map(|h| h.to_string()).collect()
    }

    pub fn entry_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(key, value)| format!("v:{} k:{}", value, key))
            .collect()
    }
}

pub struct Scenario {
    config: ScenarioConfig,
}

impl Scenario {
    pub fn new(config: ScenarioConfig) -> Self {
        Scenario { config }
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn hash(&self, record: &Record) -> u64 {
        record_hash_with(self.config.hasher, record)
    }

    pub fn hashes(&self) -> Vec<u64> {
        self.config
            .samples
            .iter()
            .map(|sample| self.hash(&sample.record))
            .collect()
    }

    fn sample(&self, label: &str) -> ScenarioResult<&Sample> {
        self.config
            .samples
            .iter()
            .find(|sample| sample.label == label)
            .ok_or_else(|| ScenarioError::UnknownSample(label.to_string()))
    }

    pub fn check_hashes(&self) -> ScenarioResult<()> {
        for [left, right] in &self.config.checks.same {
            let left_hash = self.hash(&self.sample(left)?.record);
            let right_hash = self.hash(&self.sample(right)?.record);
            if left_hash != right_hash {
                return Err(ScenarioError::HashMismatch {
                    left: left.clone(),
                    right: right.clone(),
                    left_hash,
                    right_hash,
                });
            }
        }

        for [left, right] in &self.config.checks.distinct {
            let left_hash = self.hash(&self.sample(left)?.record);
            let right_hash = self.hash(&self.sample(right)?.record);
            if left_hash == right_hash {
                return Err(ScenarioError::HashCollision {
                    left: left.clone(),
                    right: right.clone(),
                    hash: left_hash,
                });
            }
        }

        Ok(())
    }

    /// Inserts every sample in order; a later equal key overwrites the value.
    pub fn build_map(&self) -> RecordMap<i64> {
        let mut map = RecordMap::with_capacity_and_hasher(self.config.samples.len(), Default::default());
        for sample in &self.config.samples {
            map.insert(sample.record.clone(), sample.value);
        }
        map
    }

    pub fn check_map(&self, map: &RecordMap<i64>) -> ScenarioResult<()> {
        let samples = &self.config.samples;

        // A sample opens a new entry unless an earlier sample is equal to it.
        let expected = samples
            .iter()
            .enumerate()
            .filter(|(i, sample)| !samples[..*i].iter().any(|prev| prev.record == sample.record))
            .count();
        if map.len() != expected {
            return Err(ScenarioError::EntryCount {
                expected,
                actual: map.len(),
            });
        }

        for (key, &actual) in map {
            // Keys holding NaN match no sample and are skipped.
            let Some(last) = samples.iter().rev().find(|sample| sample.record == *key) else {
                continue;
            };
            if last.value != actual {
                return Err(ScenarioError::StaleValue {
                    key: key.to_string(),
                    expected: last.value,
                    actual,
                });
            }
        }

        Ok(())
    }

    pub fn run(&self) -> ScenarioResult<ScenarioReport> {
        let hashes = self.hashes();
        self.check_hashes()?;

        let map = self.build_map();
        self.check_map(&map)?;

        let entries = map.into_iter().collect();
        Ok(ScenarioReport { hashes, entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Checks, Sample};
    use crate::field_hash::HasherKind;
    use crate::record_hash::record_hash;

    #[test]
    fn test_default_scenario_runs() {
        let scenario = Scenario::new(ScenarioConfig::default());
        let report = scenario.run().unwrap();

        assert_eq!(report.hashes.len(), 3);
        assert_eq!(report.hashes[0], report.hashes[1]);
        assert_ne!(report.hashes[0], report.hashes[2]);
        assert_eq!(report.hashes[0], record_hash(&Record::new(1, 2.0, 3.0, "4")));

        assert_eq!(report.entries.len(), 2);
        let mut lines = report.entry_lines();
        lines.sort();
        assert_eq!(lines, vec!["v:2 k:1 2 3 4", "v:3 k:0 2 3 4"]);
    }

    #[test]
    fn test_fx_scenario_runs() {
        let scenario = Scenario::new(ScenarioConfig::default().with_hasher(HasherKind::Fx));
        let report = scenario.run().unwrap();
        assert_eq!(report.hashes[0], report.hashes[1]);
        assert_ne!(report.hashes[0], report.hashes[2]);
        assert_eq!(report.entries.len(), 2);
    }

    #[test]
    fn test_hash_lines_are_decimal() {
        let report = ScenarioReport {
            hashes: vec![0, 18_446_744_073_709_551_615],
            entries: vec![(Record::new(0, 2.0, 3.0, "4"), 3)],
        };
        assert_eq!(report.hash_lines(), vec!["0", "18446744073709551615"]);
        assert_eq!(report.entry_lines(), vec!["v:3 k:0 2 3 4"]);
    }

    #[test]
    fn test_last_write_wins() {
        let mut config = ScenarioConfig::default();
        config.samples.push(Sample::new("d", Record::new(1, 2.0, 3.0, "4"), 40));
        let scenario = Scenario::new(config);

        let map = scenario.build_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&Record::new(1, 2.0, 3.0, "4")), Some(&40));
        scenario.check_map(&map).unwrap();
    }

    #[test]
    fn test_stale_value_is_reported() {
        let scenario = Scenario::new(ScenarioConfig::default());
        let mut map = scenario.build_map();
        map.insert(Record::new(1, 2.0, 3.0, "4"), 1);

        let err = scenario.check_map(&map).unwrap_err();
        assert!(matches!(err, ScenarioError::StaleValue { expected: 2, actual: 1, .. }));
    }

    #[test]
    fn test_entry_count_is_reported() {
        let scenario = Scenario::new(ScenarioConfig::default());
        let mut map = scenario.build_map();
        map.insert(Record::new(7, 2.0, 3.0, "4"), 7);

        let err = scenario.check_map(&map).unwrap_err();
        assert!(matches!(err, ScenarioError::EntryCount { expected: 2, actual: 3 }));
    }

    #[test]
    fn test_unknown_label() {
        let mut config = ScenarioConfig::default();
        config.checks = Checks {
            same: vec![["a".to_string(), "zz".to_string()]],
            distinct: vec![],
        };
        let err = Scenario::new(config).run().unwrap_err();
        assert!(matches!(err, ScenarioError::UnknownSample(ref label) if label == "zz"));
    }

    #[test]
    fn test_distinct_check_on_equal_records_fails() {
        let mut config = ScenarioConfig::default();
        config.checks.distinct = vec![["a".to_string(), "b".to_string()]];
        let err = Scenario::new(config).run().unwrap_err();
        assert!(matches!(err, ScenarioError::HashCollision { .. }));
    }

    #[test]
    fn test_nan_keys_do_not_collapse() {
        let config = ScenarioConfig {
            samples: vec![
                Sample::new("n1", Record::new(1, f32::NAN, 3.0, "4"), 1),
                Sample::new("n2", Record::new(1, f32::NAN, 3.0, "4"), 2),
            ],
            checks: Checks::default(),
            ..ScenarioConfig::default()
        };
        let report = Scenario::new(config).run().unwrap();
        // Identical bits hash alike, but NaN != NaN keeps both entries.
        assert_eq!(report.hashes[0], report.hashes[1]);
        assert_eq!(report.entries.len(), 2);
    }
}
