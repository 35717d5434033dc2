//! Scenario configuration
//!
//! A scenario is a list of labelled sample records plus the hash checks to
//! run over them. It is described in TOML; the default is the three-record
//! example where two records are equal and the third differs in `integer`.

use crate::error::ScenarioResult;
use crate::field_hash::HasherKind;
use crate::record::Record;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sample {
    pub label: String,
    pub record: Record,
    pub value: i64,
}

impl Sample {
    pub fn new(label: impl Into<String>, record: Record, value: i64) -> Self {
        Sample {
            label: label.into(),
            record,
            value,
        }
    }
}

/// Label pairs whose hashes must match (`same`) or must differ (`distinct`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Checks {
    pub same: Vec<[String; 2]>,
    pub distinct: Vec<[String; 2]>,
}

/// Keys missing from a TOML scenario get empty samples and checks; the
/// three-record example lives only in `ScenarioConfig::default()`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub hasher: HasherKind,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub samples: Vec<Sample>,
    #[serde(default)]
    pub checks: Checks,
}

fn default_color() -> bool {
    true
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            hasher: HasherKind::Sip,
            color: true,
            samples: vec![
                Sample::new("a", Record::new(1, 2.0, 3.0, "4"), 1),
                Sample::new("b", Record::new(1, 2.0, 3.0, "4"), 2),
                Sample::new("c", Record::new(0, 2.0, 3.0, "4"), 3),
            ],
            checks: Checks {
                same: vec![["a".to_string(), "b".to_string()]],
                distinct: vec![["a".to_string(), "c".to_string()]],
            },
        }
    }
}

impl ScenarioConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(content: &str) -> ScenarioResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_hasher(mut self, hasher: HasherKind) -> Self {
        self.hasher = hasher;
        self
    }
}
