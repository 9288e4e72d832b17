//! Lifecycle states shared by deployments and clusters.

use std::fmt;

use serde::{Deserialize, Serialize};
use sifter::FieldLabel;

/// Lifecycle state of a deployment or of a cluster it targets.
///
/// Queries see the state as its label (`RUNNING`, `DOWN`, ...), so sorting
/// by status is alphabetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    #[default]
    Unknown,
    Running,
    Down,
    InternalError,
    Deploying,
    Updating,
    Terminating,
    Error,
    NoTargetClusters,
}

impl State {
    /// Every state, in declaration order.
    pub const ALL: [State; 9] = [
        State::Unknown,
        State::Running,
        State::Down,
        State::InternalError,
        State::Deploying,
        State::Updating,
        State::Terminating,
        State::Error,
        State::NoTargetClusters,
    ];

    /// Returns the wire label of this state.
    pub fn as_str(self) -> &'static str {
        match self {
            State::Unknown => "UNKNOWN",
            State::Running => "RUNNING",
            State::Down => "DOWN",
            State::InternalError => "INTERNAL_ERROR",
            State::Deploying => "DEPLOYING",
            State::Updating => "UPDATING",
            State::Terminating => "TERMINATING",
            State::Error => "ERROR",
            State::NoTargetClusters => "NO_TARGET_CLUSTERS",
        }
    }
}

impl FieldLabel for State {
    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
