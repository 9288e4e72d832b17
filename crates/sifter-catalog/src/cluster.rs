//! Cluster records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sifter::{FieldLabel, Record};

use crate::state::State;

/// Status of a cluster as seen by one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterStatus {
    pub state: State,
}

impl FieldLabel for ClusterStatus {
    fn label(&self) -> &'static str {
        self.state.label()
    }
}

/// A cluster targeted by a deployment. Queryable fields: `name`, `id`,
/// `status`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct Cluster {
    #[field(Text)]
    pub id: String,
    #[field(Text)]
    pub name: String,
    #[field(Label)]
    pub status: ClusterStatus,
}

impl Cluster {
    pub fn new(id: impl Into<String>, name: impl Into<String>, state: State) -> Self {
        Cluster {
            id: id.into(),
            name: name.into(),
            status: ClusterStatus { state },
        }
    }
}

/// A cluster known to the orchestrator. Queryable fields: `name`, `id`.
/// Labels are carried along but cannot be queried.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Record)]
#[serde(default)]
pub struct ClusterInfo {
    #[field(Text)]
    pub id: String,
    #[field(Text)]
    pub name: String,
    pub labels: BTreeMap<String, String>,
}

impl ClusterInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ClusterInfo {
            id: id.into(),
            name: name.into(),
            labels: BTreeMap::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}
